use {
    crate::PackedVector,
    half::{decode_half, encode_half},
    std::fmt,
};

/// One float stored as a single half-precision value.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct HalfSingle(u16);

impl HalfSingle {
    pub fn new(value: f32) -> HalfSingle {
        HalfSingle(encode_half(value))
    }

    pub fn to_f32(self) -> f32 {
        decode_half(self.0)
    }
}

impl PackedVector for HalfSingle {
    type Raw = u16;

    fn from_raw(raw: u16) -> HalfSingle {
        HalfSingle(raw)
    }

    fn raw(&self) -> u16 {
        self.0
    }
}

impl From<f32> for HalfSingle {
    fn from(value: f32) -> HalfSingle {
        HalfSingle::new(value)
    }
}

impl fmt::Debug for HalfSingle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("HalfSingle").field(&self.to_f32()).finish()
    }
}
