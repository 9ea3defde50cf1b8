//! Preset text renderer
//!
//! Emits the YAML subset read by [`parse_text`](super::parse_text). Output
//! is deterministic and field order follows the preset model.

use crate::preset::Preset;

/// Name written for an amp model id missing from the table
const UNKNOWN_MODEL: &str = "Unknown";

/// Render a preset as text
pub fn render_text(preset: &Preset) -> String {
    let amp = &preset.amp;
    let modulation = &preset.modulation;
    let delay = &preset.delay;
    let reverb = &preset.reverb;
    let model_name = amp.model_kind().map_or(UNKNOWN_MODEL, |m| m.name());

    format!(
        "amp:
  enabled: {}
  model: {}
  model_id: {}
  gain: {}
  treble: {}
  middle: {}
  bass: {}
  volume: {}
mod:
  enabled: {}
  type: {}
  type_id: {}
  depth: {}
  speed: {}
delay:
  enabled: {}
  type: {}
  type_id: {}
  mix: {}
  time: {}
reverb:
  enabled: {}
  type: {}
  type_id: {}
  decay: {}
  mix: {}
noise_gate: {}
ir_cab: {}
color: [{}, {}, {}]
",
        amp.enabled,
        model_name,
        amp.model,
        amp.gain,
        amp.treble,
        amp.middle,
        amp.bass,
        amp.volume,
        modulation.enabled,
        modulation.kind,
        modulation.kind.id(),
        modulation.depth,
        modulation.speed,
        delay.enabled,
        delay.kind,
        delay.kind.id(),
        delay.mix,
        delay.time,
        reverb.enabled,
        reverb.kind,
        reverb.kind.id(),
        reverb.decay,
        reverb.mix,
        preset.noise_gate,
        preset.ir_cab,
        preset.color[0],
        preset.color[1],
        preset.color[2],
    )
}
