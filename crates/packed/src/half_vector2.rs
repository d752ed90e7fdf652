use {
    crate::PackedVector,
    half::{decode_half, encode_half},
    std::fmt,
};

/// Two floats packed as half-precision values, x in the low 16 bits.
///
/// Each component rounds independently when packed and expands exactly
/// when read back.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct HalfVector2(u32);

impl HalfVector2 {
    pub fn new(x: f32, y: f32) -> HalfVector2 {
        let x = encode_half(x) as u32;
        let y = encode_half(y) as u32;
        HalfVector2((y << 16) | x)
    }

    pub fn x(self) -> f32 {
        decode_half(self.0 as u16)
    }

    pub fn y(self) -> f32 {
        decode_half((self.0 >> 16) as u16)
    }

    pub fn to_array(self) -> [f32; 2] {
        [self.x(), self.y()]
    }
}

impl PackedVector for HalfVector2 {
    type Raw = u32;

    fn from_raw(raw: u32) -> HalfVector2 {
        HalfVector2(raw)
    }

    fn raw(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for HalfVector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HalfVector2")
            .field("x", &self.x())
            .field("y", &self.y())
            .finish()
    }
}
