//! Preset data model
//!
//! A `Preset` is a single owned tree: amp, three effect blocks, and the
//! global noise gate / cabinet / LED colour settings. Every numeric field
//! maps onto one byte of the TKG format.

use serde::{Deserialize, Serialize};

use super::names::{AmpModel, DelayType, ModType, ReverbType};
use crate::codec::packed::{Bucket, PackedBases, PackedType, DELAY_BASES, MOD_BASES, REVERB_BASES};
use crate::error::{Result, TankgError};

/// LED colour used when none is given
pub const DEFAULT_COLOR: [u8; 3] = [0xFE, 0xFE, 0x7E];

/// Highest knob position the device accepts
pub const KNOB_MAX: u8 = 127;

/// Highest cabinet impulse response index
pub const IR_CAB_MAX: u8 = 8;

/// Amp section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmpSettings {
    pub enabled: bool,
    /// Raw model id. Ids outside the known table are kept as-is.
    pub model: u8,
    pub gain: u8,
    pub treble: u8,
    pub middle: u8,
    pub bass: u8,
    pub volume: u8,
}

impl AmpSettings {
    /// The model as a known variant, if the id is in the table
    pub fn model_kind(&self) -> Option<AmpModel> {
        AmpModel::from_id(self.model)
    }
}

impl Default for AmpSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            model: AmpModel::Acoustic.id(),
            gain: 61,
            treble: 126,
            middle: 114,
            bass: 94,
            volume: 60,
        }
    }
}

/// Modulation section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModSettings {
    pub enabled: bool,
    #[serde(rename = "type")]
    pub kind: ModType,
    /// Packed together with `kind`
    pub depth: u8,
    pub speed: u8,
}

impl Default for ModSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            kind: ModType::Chorus,
            depth: 1,
            speed: 1,
        }
    }
}

/// Delay section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelaySettings {
    pub enabled: bool,
    #[serde(rename = "type")]
    pub kind: DelayType,
    /// Packed together with `kind`
    pub mix: u8,
    pub time: u8,
}

impl Default for DelaySettings {
    fn default() -> Self {
        Self {
            enabled: false,
            kind: DelayType::Digital,
            mix: 1,
            time: 1,
        }
    }
}

/// Reverb section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReverbSettings {
    pub enabled: bool,
    #[serde(rename = "type")]
    pub kind: ReverbType,
    /// Packed together with `kind`
    pub decay: u8,
    pub mix: u8,
}

impl Default for ReverbSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            kind: ReverbType::Room,
            decay: 1,
            mix: 90,
        }
    }
}

/// Complete Tank G preset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    pub amp: AmpSettings,
    #[serde(rename = "mod")]
    pub modulation: ModSettings,
    pub delay: DelaySettings,
    pub reverb: ReverbSettings,
    pub noise_gate: u8,
    pub ir_cab: u8,
    /// LED colour as red, green, blue
    pub color: [u8; 3],
}

impl Default for Preset {
    fn default() -> Self {
        Self {
            amp: AmpSettings::default(),
            modulation: ModSettings::default(),
            delay: DelaySettings::default(),
            reverb: ReverbSettings::default(),
            noise_gate: 0,
            ir_cab: 0,
            color: DEFAULT_COLOR,
        }
    }
}

impl Preset {
    /// Check every field against the ranges the device accepts.
    ///
    /// Decoding and encoding never call this; it is an opt-in check for
    /// presets about to be written to hardware.
    pub fn validate(&self) -> Result<()> {
        if self.amp.model_kind().is_none() {
            return Err(invalid("amp.model", self.amp.model, "0 to 8"));
        }

        let knobs = [
            ("amp.gain", self.amp.gain),
            ("amp.treble", self.amp.treble),
            ("amp.middle", self.amp.middle),
            ("amp.bass", self.amp.bass),
            ("amp.volume", self.amp.volume),
            ("mod.speed", self.modulation.speed),
            ("delay.time", self.delay.time),
            ("reverb.mix", self.reverb.mix),
            ("noise_gate", self.noise_gate),
        ];
        for (name, value) in knobs {
            if value > KNOB_MAX {
                return Err(invalid(name, value, "0 to 127"));
            }
        }

        if self.ir_cab > IR_CAB_MAX {
            return Err(invalid("ir_cab", self.ir_cab, "0 to 8"));
        }

        check_packed("mod.depth", self.modulation.kind, self.modulation.depth, MOD_BASES)?;
        check_packed("delay.mix", self.delay.kind, self.delay.mix, DELAY_BASES)?;
        check_packed("reverb.decay", self.reverb.kind, self.reverb.decay, REVERB_BASES)?;

        Ok(())
    }
}

fn check_packed<T: PackedType>(name: &str, kind: T, value: u8, bases: PackedBases) -> Result<()> {
    let bucket: Bucket = kind.bucket();
    let width = bases.bucket_width(bucket);
    if value == 0 || u16::from(value) > width {
        return Err(invalid(name, value, &format!("1 to {}", width)));
    }
    Ok(())
}

fn invalid(param: &str, value: u8, expected: &str) -> TankgError {
    TankgError::InvalidParameter {
        param: param.to_string(),
        value: value.to_string(),
        expected: expected.to_string(),
    }
}
