//! tankg - M-VAVE Tank G v2 preset codec
//!
//! Reads and writes Tank G presets in two interchangeable forms:
//! 1. TKG - the fixed 21-byte binary file the device exchanges
//! 2. Text - a small YAML-like document meant for hand editing
//!
//! # Architecture
//!
//! - `preset`: the owned in-memory model shared by both codecs
//! - `codec`: binary decode/encode, including the packed type/value bytes
//! - `text`: parse to a field tree, merge into a preset, render back
//! - `convert`: file and directory conversion by extension
//!
//! Every codec function is pure; callers own the `Preset` they pass in.

pub mod cli;
pub mod codec;
pub mod convert;
pub mod error;
pub mod preset;
pub mod text;

pub use codec::{decode_binary, encode_binary, PRESET_SIZE};
pub use error::{Result, TankgError};
pub use preset::Preset;
pub use text::{apply_field_tree, parse_text, render_text, FieldTree};
