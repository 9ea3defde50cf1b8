//! Textual Codec
//!
//! A minimal YAML-like preset format:
//!
//! ```text
//! amp:
//!   enabled: true
//!   model: Acoustic
//!   model_id: 4
//!   ...
//! noise_gate: 0
//! ir_cab: 0
//! color: [254, 254, 126]
//! ```
//!
//! Text is parsed into a loosely-typed [`FieldTree`] which is then merged
//! into a [`Preset`](crate::preset::Preset) by [`apply_field_tree`].

mod apply;
mod parser;
mod render;

pub use apply::{apply_field_tree, apply_in_place};
pub use parser::{parse_text, parse_text_with, FieldNode, FieldTree, FieldValue, ParseMode};
pub use render::render_text;

use crate::error::Result;
use crate::preset::Preset;

impl Preset {
    /// Parse text over the default preset
    pub fn from_text(text: &str, mode: ParseMode) -> Result<Self> {
        let tree = parse_text_with(text, mode)?;
        Ok(apply_field_tree(&tree, &Preset::default()))
    }

    /// Render as text, see [`render_text`]
    pub fn to_text(&self) -> String {
        render_text(self)
    }
}
