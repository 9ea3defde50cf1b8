//! Packed type/value bytes
//!
//! Three of the preset slots store an effect type selector and a ranged
//! value in a single byte. The byte range is split into three contiguous
//! buckets, one per type:
//!
//! ```text
//! 0 ........ second-1 | second ........ third-1 | third ........ 255
//!      type 1         |        type 2           |      type 3
//! ```
//!
//! The value is the offset into the bucket plus one.

use log::warn;

use crate::preset::{DelayType, ModType, ReverbType};

/// Bucket bases for the modulation slot (byte 11)
pub const MOD_BASES: PackedBases = PackedBases::new(41, 87);

/// Bucket bases for the delay slot (byte 13)
pub const DELAY_BASES: PackedBases = PackedBases::new(41, 87);

/// Bucket bases for the reverb slot (byte 15).
///
/// Off by one on each side relative to mod/delay. This matches files
/// written by the device and must not be unified with [`MOD_BASES`].
pub const REVERB_BASES: PackedBases = PackedBases::new(42, 86);

/// Which of the three buckets a packed byte falls in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    /// Type 1, raw `0..second`
    First,
    /// Type 2, raw `second..third`
    Second,
    /// Type 3, raw `third..=255`
    Third,
}

impl Bucket {
    pub const ALL: [Bucket; 3] = [Bucket::First, Bucket::Second, Bucket::Third];

    /// Type identifier (1-3) this bucket encodes
    pub fn type_id(self) -> u8 {
        match self {
            Bucket::First => 1,
            Bucket::Second => 2,
            Bucket::Third => 3,
        }
    }
}

/// Start offsets of the second and third buckets.
///
/// Requires `0 < second < third`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackedBases {
    pub second: u8,
    pub third: u8,
}

impl PackedBases {
    pub const fn new(second: u8, third: u8) -> Self {
        Self { second, third }
    }

    /// Number of distinct values a bucket can hold.
    ///
    /// Values `1..=width` survive an encode/decode round trip.
    pub fn bucket_width(&self, bucket: Bucket) -> u16 {
        match bucket {
            Bucket::First => u16::from(self.second),
            Bucket::Second => u16::from(self.third) - u16::from(self.second),
            Bucket::Third => 256 - u16::from(self.third),
        }
    }

    fn base(&self, bucket: Bucket) -> u8 {
        match bucket {
            Bucket::First => 0,
            Bucket::Second => self.second,
            Bucket::Third => self.third,
        }
    }

    /// Split a raw byte into its bucket and value.
    ///
    /// Total over all bytes; the third bucket is open-ended so values there
    /// are not clamped.
    pub fn decode(&self, raw: u8) -> (Bucket, u8) {
        let bucket = if raw < self.second {
            Bucket::First
        } else if raw < self.third {
            Bucket::Second
        } else {
            Bucket::Third
        };
        (bucket, raw - self.base(bucket) + 1)
    }

    /// Pack a bucket and value into one byte.
    ///
    /// A value of 0 is stored like 1. Values wider than the bucket wrap
    /// around the byte, the same as a plain byte store would.
    pub fn encode(&self, bucket: Bucket, value: u8) -> u8 {
        let offset = value.saturating_sub(1);
        if u16::from(value) > self.bucket_width(bucket) {
            warn!(
                "Packed value {} exceeds width {} of type {} bucket",
                value,
                self.bucket_width(bucket),
                bucket.type_id()
            );
        }
        self.base(bucket).wrapping_add(offset)
    }
}

/// Effect type enums that live in a packed slot
pub trait PackedType: Copy {
    fn bucket(self) -> Bucket;
    fn from_bucket(bucket: Bucket) -> Self;
}

macro_rules! impl_packed_type {
    ($type:ident) => {
        impl PackedType for $type {
            fn bucket(self) -> Bucket {
                Bucket::ALL[usize::from(self.id() - 1)]
            }

            fn from_bucket(bucket: Bucket) -> Self {
                $type::ALL[usize::from(bucket.type_id() - 1)]
            }
        }
    };
}

impl_packed_type!(ModType);
impl_packed_type!(DelayType);
impl_packed_type!(ReverbType);

/// Decode a packed slot straight into its effect type
pub fn decode_slot<T: PackedType>(raw: u8, bases: PackedBases) -> (T, u8) {
    let (bucket, value) = bases.decode(raw);
    (T::from_bucket(bucket), value)
}

/// Encode an effect type and value into a packed slot
pub fn encode_slot<T: PackedType>(kind: T, value: u8, bases: PackedBases) -> u8 {
    bases.encode(kind.bucket(), value)
}
