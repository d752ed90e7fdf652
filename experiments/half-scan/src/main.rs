use {
    anyhow::{Result, ensure},
    half::{decode_half, encode_half},
    packed::{HalfVector2, HalfVector4, PackedVector},
};

fn main() -> Result<()> {
    env_logger::init();

    let mut zeros = 0usize;
    let mut subnormals = 0usize;
    let mut normals = 0usize;
    let mut infinities = 0usize;
    let mut nans = 0usize;

    for value in 0..=u16::MAX {
        let decoded = decode_half(value);
        match (value & 0x7c00, value & 0x03ff) {
            (0, 0) => {
                ensure!(decoded == 0.0, "{value:#06x} should decode to zero");
                zeros += 1;
            }
            (0, _) => {
                ensure!(
                    decoded.is_finite() && decoded != 0.0,
                    "{value:#06x} is subnormal and should decode to a finite nonzero value"
                );
                subnormals += 1;
            }
            (0x7c00, 0) => {
                ensure!(
                    decoded.is_infinite(),
                    "{value:#06x} should decode to infinity"
                );
                infinities += 1;
            }
            (0x7c00, _) => {
                ensure!(decoded.is_nan(), "{value:#06x} should decode to NaN");
                nans += 1;
            }
            _ => {
                ensure!(
                    decoded.is_finite(),
                    "{value:#06x} should decode to a finite value"
                );
                normals += 1;
            }
        }
        let back = encode_half(decoded);
        ensure!(
            back == value,
            "{value:#06x} decoded to {decoded} but re-encoded as {back:#06x}"
        );
    }

    log::info!(
        "scanned 65536 patterns: {zeros} zeros, {subnormals} subnormals, \
         {normals} normals, {infinities} infinities, {nans} NaNs, \
         all re-encoded to themselves"
    );

    let v2 = HalfVector2::new(0.5, -1.25);
    log::info!(
        "HalfVector2::new(0.5, -1.25) packs to {:#010x}, unpacks to {:?}",
        v2.raw(),
        v2.to_array()
    );
    let v4 = HalfVector4::new(1.0, 2.0, -3.5, 0.125);
    log::info!(
        "HalfVector4::new(1.0, 2.0, -3.5, 0.125) packs to {:#018x}, unpacks to {:?}",
        v4.raw(),
        v4.to_array()
    );

    Ok(())
}
