mod convert;
pub use convert::*;

mod half;
pub use half::*;
