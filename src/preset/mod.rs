//! Preset Model
//!
//! In-memory representation of a Tank G preset, the enum name tables and
//! the knob parameter accessor used by front ends.

mod model;
mod names;
mod param;

pub use model::{
    AmpSettings, DelaySettings, ModSettings, Preset, ReverbSettings, DEFAULT_COLOR, IR_CAB_MAX,
    KNOB_MAX,
};
pub use names::{AmpModel, DelayType, ModType, ReverbType};
pub use param::ParamId;
