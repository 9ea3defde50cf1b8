//! Knob parameter identifiers
//!
//! Front ends address continuous parameters by string ids such as
//! `amp-gain`. `ParamId` is the closed set of those ids, mapped onto
//! preset fields without any string-keyed dispatch table.

use std::fmt;
use std::str::FromStr;

use super::model::Preset;
use crate::error::TankgError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamId {
    AmpGain,
    AmpTreble,
    AmpMiddle,
    AmpBass,
    AmpVolume,
    ModDepth,
    ModSpeed,
    DelayMix,
    DelayTime,
    ReverbDecay,
    ReverbMix,
    NoiseGate,
}

impl ParamId {
    pub const ALL: [ParamId; 12] = [
        ParamId::AmpGain,
        ParamId::AmpTreble,
        ParamId::AmpMiddle,
        ParamId::AmpBass,
        ParamId::AmpVolume,
        ParamId::ModDepth,
        ParamId::ModSpeed,
        ParamId::DelayMix,
        ParamId::DelayTime,
        ParamId::ReverbDecay,
        ParamId::ReverbMix,
        ParamId::NoiseGate,
    ];

    /// External identifier string
    pub fn as_str(self) -> &'static str {
        match self {
            ParamId::AmpGain => "amp-gain",
            ParamId::AmpTreble => "amp-treble",
            ParamId::AmpMiddle => "amp-middle",
            ParamId::AmpBass => "amp-bass",
            ParamId::AmpVolume => "amp-volume",
            ParamId::ModDepth => "mod-depth",
            ParamId::ModSpeed => "mod-speed",
            ParamId::DelayMix => "delay-mix",
            ParamId::DelayTime => "delay-time",
            ParamId::ReverbDecay => "reverb-decay",
            ParamId::ReverbMix => "reverb-mix",
            ParamId::NoiseGate => "noise-gate",
        }
    }
}

impl fmt::Display for ParamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParamId {
    type Err = TankgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ParamId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| TankgError::UnknownParam {
                name: s.to_string(),
            })
    }
}

impl Preset {
    fn param_slot(&mut self, id: ParamId) -> &mut u8 {
        match id {
            ParamId::AmpGain => &mut self.amp.gain,
            ParamId::AmpTreble => &mut self.amp.treble,
            ParamId::AmpMiddle => &mut self.amp.middle,
            ParamId::AmpBass => &mut self.amp.bass,
            ParamId::AmpVolume => &mut self.amp.volume,
            ParamId::ModDepth => &mut self.modulation.depth,
            ParamId::ModSpeed => &mut self.modulation.speed,
            ParamId::DelayMix => &mut self.delay.mix,
            ParamId::DelayTime => &mut self.delay.time,
            ParamId::ReverbDecay => &mut self.reverb.decay,
            ParamId::ReverbMix => &mut self.reverb.mix,
            ParamId::NoiseGate => &mut self.noise_gate,
        }
    }

    /// Read a knob parameter
    pub fn param(&self, id: ParamId) -> u8 {
        match id {
            ParamId::AmpGain => self.amp.gain,
            ParamId::AmpTreble => self.amp.treble,
            ParamId::AmpMiddle => self.amp.middle,
            ParamId::AmpBass => self.amp.bass,
            ParamId::AmpVolume => self.amp.volume,
            ParamId::ModDepth => self.modulation.depth,
            ParamId::ModSpeed => self.modulation.speed,
            ParamId::DelayMix => self.delay.mix,
            ParamId::DelayTime => self.delay.time,
            ParamId::ReverbDecay => self.reverb.decay,
            ParamId::ReverbMix => self.reverb.mix,
            ParamId::NoiseGate => self.noise_gate,
        }
    }

    /// Write a knob parameter
    pub fn set_param(&mut self, id: ParamId, value: u8) {
        *self.param_slot(id) = value;
    }
}
