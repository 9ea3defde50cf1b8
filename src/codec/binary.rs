//! TKG binary format
//!
//! A preset is exactly 21 bytes with no header, version or checksum:
//!
//! | Offset | Field                          |
//! |--------|--------------------------------|
//! | 0-3    | amp / mod / delay / reverb on  |
//! | 4      | noise gate                     |
//! | 5      | amp model                      |
//! | 6-10   | gain, treble, middle, bass, volume |
//! | 11     | mod type + depth (packed)      |
//! | 12     | mod speed                      |
//! | 13     | delay type + mix (packed)      |
//! | 14     | delay time                     |
//! | 15     | reverb type + decay (packed)   |
//! | 16     | reverb mix                     |
//! | 17     | IR cabinet                     |
//! | 18-20  | LED colour R, G, B             |

use super::packed::{decode_slot, encode_slot, DELAY_BASES, MOD_BASES, REVERB_BASES};
use crate::error::{Result, TankgError};
use crate::preset::{AmpSettings, DelaySettings, ModSettings, Preset, ReverbSettings};

/// Size of a TKG preset in bytes
pub const PRESET_SIZE: usize = 21;

/// Decode a TKG buffer.
///
/// Fails with [`TankgError::Size`] unless the buffer is exactly
/// [`PRESET_SIZE`] bytes. Field values are taken as-is; an unknown amp
/// model id is preserved rather than rejected.
pub fn decode_binary(bytes: &[u8]) -> Result<Preset> {
    let b: &[u8; PRESET_SIZE] = bytes.try_into().map_err(|_| TankgError::Size {
        expected: PRESET_SIZE,
        actual: bytes.len(),
    })?;

    let (mod_kind, mod_depth) = decode_slot(b[11], MOD_BASES);
    let (delay_kind, delay_mix) = decode_slot(b[13], DELAY_BASES);
    let (reverb_kind, reverb_decay) = decode_slot(b[15], REVERB_BASES);

    Ok(Preset {
        amp: AmpSettings {
            enabled: b[0] == 1,
            model: b[5],
            gain: b[6],
            treble: b[7],
            middle: b[8],
            bass: b[9],
            volume: b[10],
        },
        modulation: ModSettings {
            enabled: b[1] == 1,
            kind: mod_kind,
            depth: mod_depth,
            speed: b[12],
        },
        delay: DelaySettings {
            enabled: b[2] == 1,
            kind: delay_kind,
            mix: delay_mix,
            time: b[14],
        },
        reverb: ReverbSettings {
            enabled: b[3] == 1,
            kind: reverb_kind,
            decay: reverb_decay,
            mix: b[16],
        },
        noise_gate: b[4],
        ir_cab: b[17],
        color: [b[18], b[19], b[20]],
    })
}

/// Encode a preset into a TKG buffer
pub fn encode_binary(preset: &Preset) -> [u8; PRESET_SIZE] {
    let amp = &preset.amp;
    let modulation = &preset.modulation;
    let delay = &preset.delay;
    let reverb = &preset.reverb;

    [
        u8::from(amp.enabled),
        u8::from(modulation.enabled),
        u8::from(delay.enabled),
        u8::from(reverb.enabled),
        preset.noise_gate,
        amp.model,
        amp.gain,
        amp.treble,
        amp.middle,
        amp.bass,
        amp.volume,
        encode_slot(modulation.kind, modulation.depth, MOD_BASES),
        modulation.speed,
        encode_slot(delay.kind, delay.mix, DELAY_BASES),
        delay.time,
        encode_slot(reverb.kind, reverb.decay, REVERB_BASES),
        reverb.mix,
        preset.ir_cab,
        preset.color[0],
        preset.color[1],
        preset.color[2],
    ]
}

impl Preset {
    /// Decode from TKG bytes, see [`decode_binary`]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        decode_binary(bytes)
    }

    /// Encode to TKG bytes, see [`encode_binary`]
    pub fn to_bytes(&self) -> [u8; PRESET_SIZE] {
        encode_binary(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preset::{AmpModel, DelayType, ModType, ReverbType};

    /// A preset captured from the device: Metal amp, tremolo, tape delay,
    /// plate reverb.
    const SAMPLE: [u8; PRESET_SIZE] = [
        1, 1, 0, 1, 20, 3, 100, 64, 50, 70, 90, 95, 40, 100, 80, 90, 60, 2, 255, 0, 128,
    ];

    #[test]
    fn test_size_guard() {
        for len in [0usize, 20, 22, 1000] {
            let buf = vec![0u8; len];
            match decode_binary(&buf) {
                Err(TankgError::Size { expected, actual }) => {
                    assert_eq!(expected, 21);
                    assert_eq!(actual, len);
                }
                other => panic!("expected size error for {} bytes, got {:?}", len, other),
            }
        }
    }

    #[test]
    fn test_all_zero_buffer() {
        let preset = decode_binary(&[0u8; PRESET_SIZE]).unwrap();

        assert!(!preset.amp.enabled);
        assert!(!preset.modulation.enabled);
        assert!(!preset.delay.enabled);
        assert!(!preset.reverb.enabled);
        assert_eq!(preset.noise_gate, 0);
        assert_eq!(preset.amp.model, 0);
        assert_eq!(
            [preset.amp.gain, preset.amp.treble, preset.amp.middle, preset.amp.bass, preset.amp.volume],
            [0; 5]
        );
        assert_eq!(preset.modulation.kind, ModType::Chorus);
        assert_eq!(preset.modulation.depth, 1);
        assert_eq!(preset.modulation.speed, 0);
        assert_eq!(preset.delay.kind, DelayType::Digital);
        assert_eq!(preset.delay.mix, 1);
        assert_eq!(preset.delay.time, 0);
        assert_eq!(preset.reverb.kind, ReverbType::Room);
        assert_eq!(preset.reverb.decay, 1);
        assert_eq!(preset.reverb.mix, 0);
        assert_eq!(preset.ir_cab, 0);
        assert_eq!(preset.color, [0, 0, 0]);
    }

    #[test]
    fn test_decode_sample() {
        let preset = decode_binary(&SAMPLE).unwrap();

        assert!(preset.amp.enabled);
        assert!(!preset.delay.enabled);
        assert_eq!(preset.amp.model_kind(), Some(AmpModel::Metal));
        assert_eq!(preset.noise_gate, 20);
        assert_eq!(preset.modulation.kind, ModType::Tremolo);
        assert_eq!(preset.modulation.depth, 9);
        assert_eq!(preset.delay.kind, DelayType::Tape);
        assert_eq!(preset.delay.mix, 14);
        assert_eq!(preset.reverb.kind, ReverbType::Plate);
        assert_eq!(preset.reverb.decay, 5);
        assert_eq!(preset.ir_cab, 2);
        assert_eq!(preset.color, [255, 0, 128]);

        assert_eq!(encode_binary(&preset), SAMPLE);
    }

    #[test]
    fn test_enable_flag_only_accepts_one() {
        let mut buf = [0u8; PRESET_SIZE];
        buf[0] = 2;
        buf[1] = 1;
        let preset = decode_binary(&buf).unwrap();
        assert!(!preset.amp.enabled);
        assert!(preset.modulation.enabled);
    }

    #[test]
    fn test_unknown_amp_model_preserved() {
        let mut buf = [0u8; PRESET_SIZE];
        buf[5] = 42;
        let preset = decode_binary(&buf).unwrap();
        assert_eq!(preset.amp.model, 42);
        assert_eq!(preset.amp.model_kind(), None);
        assert_eq!(encode_binary(&preset)[5], 42);
    }

    #[test]
    fn test_asymmetric_reverb_bases() {
        let mut buf = [0u8; PRESET_SIZE];
        buf[11] = 42;
        buf[15] = 42;
        let preset = decode_binary(&buf).unwrap();
        assert_eq!(preset.modulation.kind, ModType::Phaser);
        assert_eq!(preset.modulation.depth, 2);
        assert_eq!(preset.reverb.kind, ReverbType::Hall);
        assert_eq!(preset.reverb.decay, 1);

        buf[15] = 86;
        let preset = decode_binary(&buf).unwrap();
        assert_eq!(preset.reverb.kind, ReverbType::Plate);
        assert_eq!(preset.reverb.decay, 1);
    }

    #[test]
    fn test_default_round_trip() {
        let preset = Preset::default();
        let bytes = preset.to_bytes();
        assert_eq!(Preset::from_bytes(&bytes).unwrap(), preset);
    }
}
