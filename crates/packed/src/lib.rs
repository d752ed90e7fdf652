mod half_single;
pub use half_single::*;

mod half_vector2;
pub use half_vector2::*;

mod half_vector4;
pub use half_vector4::*;

/// A storage format that packs floating-point components into a single
/// fixed-width integer.
///
/// `Raw` is the packed integer itself; `from_raw`/`raw` move it in and
/// out unchanged, so a packed value can be written to and read from any
/// buffer layout the caller chooses.
pub trait PackedVector: Sized {
    type Raw;

    fn from_raw(raw: Self::Raw) -> Self;
    fn raw(&self) -> Self::Raw;
}
