use {
    crate::PackedVector,
    half::{decode_half, encode_half},
    std::fmt,
};

/// Four floats packed as half-precision values, x in the lowest 16 bits
/// through w in the highest.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct HalfVector4(u64);

impl HalfVector4 {
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> HalfVector4 {
        let x = encode_half(x) as u64;
        let y = encode_half(y) as u64;
        let z = encode_half(z) as u64;
        let w = encode_half(w) as u64;
        HalfVector4((w << 48) | (z << 32) | (y << 16) | x)
    }

    pub fn x(self) -> f32 {
        decode_half(self.0 as u16)
    }

    pub fn y(self) -> f32 {
        decode_half((self.0 >> 16) as u16)
    }

    pub fn z(self) -> f32 {
        decode_half((self.0 >> 32) as u16)
    }

    pub fn w(self) -> f32 {
        decode_half((self.0 >> 48) as u16)
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.x(), self.y(), self.z(), self.w()]
    }
}

impl PackedVector for HalfVector4 {
    type Raw = u64;

    fn from_raw(raw: u64) -> HalfVector4 {
        HalfVector4(raw)
    }

    fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Debug for HalfVector4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HalfVector4")
            .field("x", &self.x())
            .field("y", &self.y())
            .field("z", &self.z())
            .field("w", &self.w())
            .finish()
    }
}
