//! Merge a parsed field tree into a preset
//!
//! Blocks missing from the tree leave the corresponding section untouched.
//! A block that is present is read field by field, with the stock default
//! substituted for every missing field. Nothing here fails: bad values are
//! coerced and logged.

use std::collections::BTreeMap;

use log::warn;

use super::parser::{FieldNode, FieldTree, FieldValue};
use crate::preset::{
    AmpModel, AmpSettings, DelaySettings, DelayType, ModSettings, ModType, Preset,
    ReverbSettings, ReverbType, DEFAULT_COLOR,
};

type Block = BTreeMap<String, FieldValue>;

/// Return `base` updated with every field present in `tree`
pub fn apply_field_tree(tree: &FieldTree, base: &Preset) -> Preset {
    let mut preset = base.clone();
    apply_in_place(tree, &mut preset);
    preset
}

/// Update `preset` with every field present in `tree`
pub fn apply_in_place(tree: &FieldTree, preset: &mut Preset) {
    if let Some(block) = tree.block("amp") {
        apply_amp(block, &mut preset.amp);
    }
    if let Some(block) = tree.block("mod") {
        apply_mod(block, &mut preset.modulation);
    }
    if let Some(block) = tree.block("delay") {
        apply_delay(block, &mut preset.delay);
    }
    if let Some(block) = tree.block("reverb") {
        apply_reverb(block, &mut preset.reverb);
    }

    if let Some(value) = tree.value("noise_gate") {
        preset.noise_gate = byte_or("noise_gate", Some(value), 0);
    }
    if let Some(value) = tree.value("ir_cab") {
        preset.ir_cab = byte_or("ir_cab", Some(value), 0);
    }
    if let Some(node) = tree.get("color") {
        preset.color = color(node);
    }
}

fn apply_amp(block: &Block, amp: &mut AmpSettings) {
    let defaults = AmpSettings::default();

    amp.enabled = bool_or(block, "enabled", true);
    if let Some(id) = block.get("model_id").and_then(FieldValue::as_int) {
        amp.model = clamp_byte("amp.model_id", id);
    } else if let Some(value) = block.get("model") {
        amp.model = match value.as_str().and_then(AmpModel::from_name) {
            Some(model) => model.id(),
            None => {
                warn!("Unknown amp model {:?}, using {}", value, AmpModel::default());
                AmpModel::default().id()
            }
        };
    }
    amp.gain = byte_or("amp.gain", block.get("gain"), defaults.gain);
    amp.treble = byte_or("amp.treble", block.get("treble"), defaults.treble);
    amp.middle = byte_or("amp.middle", block.get("middle"), defaults.middle);
    amp.bass = byte_or("amp.bass", block.get("bass"), defaults.bass);
    amp.volume = byte_or("amp.volume", block.get("volume"), defaults.volume);
}

fn apply_mod(block: &Block, modulation: &mut ModSettings) {
    let defaults = ModSettings::default();

    modulation.enabled = bool_or(block, "enabled", false);
    modulation.kind = kind_or(block, "mod.type", ModType::from_name);
    modulation.depth = byte_or("mod.depth", block.get("depth"), defaults.depth);
    modulation.speed = byte_or("mod.speed", block.get("speed"), defaults.speed);
}

fn apply_delay(block: &Block, delay: &mut DelaySettings) {
    let defaults = DelaySettings::default();

    delay.enabled = bool_or(block, "enabled", false);
    delay.kind = kind_or(block, "delay.type", DelayType::from_name);
    delay.mix = byte_or("delay.mix", block.get("mix"), defaults.mix);
    delay.time = byte_or("delay.time", block.get("time"), defaults.time);
}

fn apply_reverb(block: &Block, reverb: &mut ReverbSettings) {
    let defaults = ReverbSettings::default();

    reverb.enabled = bool_or(block, "enabled", false);
    reverb.kind = kind_or(block, "reverb.type", ReverbType::from_name);
    reverb.decay = byte_or("reverb.decay", block.get("decay"), defaults.decay);
    reverb.mix = byte_or("reverb.mix", block.get("mix"), defaults.mix);
}

fn bool_or(block: &Block, key: &str, default: bool) -> bool {
    block
        .get(key)
        .and_then(FieldValue::as_bool)
        .unwrap_or(default)
}

/// Resolve an effect type by name. Only the name form is read; a missing or
/// unknown name gives the first variant.
fn kind_or<T: Default + std::fmt::Display>(
    block: &Block,
    field: &str,
    lookup: fn(&str) -> Option<T>,
) -> T {
    let Some(value) = block.get("type") else {
        return T::default();
    };
    match value.as_str().and_then(lookup) {
        Some(kind) => kind,
        None => {
            let fallback = T::default();
            warn!("Unknown {} {:?}, using {}", field, value, fallback);
            fallback
        }
    }
}

fn byte_or(field: &str, value: Option<&FieldValue>, default: u8) -> u8 {
    match value {
        None => default,
        Some(FieldValue::Int(n)) => clamp_byte(field, *n),
        Some(other) => {
            warn!("Expected an integer for {}, got {:?}; using {}", field, other, default);
            default
        }
    }
}

fn clamp_byte(field: &str, n: i64) -> u8 {
    let clamped = n.clamp(0, i64::from(u8::MAX));
    if clamped != n {
        warn!("{} = {} is out of byte range, clamped to {}", field, n, clamped);
    }
    clamped as u8
}

/// Colours are all-or-nothing: anything but a 3-item sequence is replaced
/// by the default colour.
fn color(node: &FieldNode) -> [u8; 3] {
    let items = match node {
        FieldNode::Value(value) => value.as_seq(),
        FieldNode::Block(_) => None,
    };
    match items {
        Some([r, g, b]) => [
            clamp_byte("color.r", *r),
            clamp_byte("color.g", *g),
            clamp_byte("color.b", *b),
        ],
        _ => {
            warn!("Malformed color {:?}, using default", node);
            DEFAULT_COLOR
        }
    }
}
