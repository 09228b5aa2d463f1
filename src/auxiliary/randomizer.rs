//https://github.com/parasyte/pixels/tree/c2454b01abc11c007d4b9de8525195af942fef0d/examples/conway

/// Mixed into user supplied seeds to pick the PCG stream.
pub const SEED_STREAM: u64 = 0x9e37_79b9_7f4a_7c15;

/// Generate a pseudorandom seed for the game's PRNG.
pub fn generate_seed() -> Result<(u64, u64), getrandom::Error> {
    use byteorder::{ByteOrder, NativeEndian};
    use getrandom::getrandom;

    let mut seed = [0_u8; 16];

    getrandom(&mut seed)?;

    Ok((
        NativeEndian::read_u64(&seed[0..8]),
        NativeEndian::read_u64(&seed[8..16]),
    ))
}

/// Expand a single command line seed into a full PCG seed pair.
pub fn seed_from_u64(seed: u64) -> (u64, u64) {
    (seed, seed ^ SEED_STREAM)
}
