//! Binary Codec
//!
//! Decoding and encoding of the 21-byte TKG preset format, including the
//! packed type/value bytes used by the mod, delay and reverb slots.

mod binary;
pub mod packed;

pub use binary::{decode_binary, encode_binary, PRESET_SIZE};
pub use packed::{Bucket, PackedBases, DELAY_BASES, MOD_BASES, REVERB_BASES};
