//! Line-oriented preset text parser
//!
//! Understands only the small YAML subset the renderer emits plus a few
//! hand-editing conveniences. One level of nesting, no quoting, no
//! multi-line values. It is not a general YAML parser.

use std::collections::BTreeMap;

use log::debug;

use crate::error::{Result, TankgError};

/// Loosely-typed scalar or sequence from a `key: value` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Bool(bool),
    Int(i64),
    /// `[a, b, c]` or `- n` items under a `color:` header
    Seq(Vec<i64>),
    Str(String),
}

impl FieldValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            FieldValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_seq(&self) -> Option<&[i64]> {
        match self {
            FieldValue::Seq(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

/// A top-level entry: either a named block or a bare value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldNode {
    Block(BTreeMap<String, FieldValue>),
    Value(FieldValue),
}

/// Parsed document, keyed by top-level name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldTree {
    entries: BTreeMap<String, FieldNode>,
}

impl FieldTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fields of a named block, if the block is present
    pub fn block(&self, name: &str) -> Option<&BTreeMap<String, FieldValue>> {
        match self.entries.get(name) {
            Some(FieldNode::Block(fields)) => Some(fields),
            _ => None,
        }
    }

    /// A top-level value, if present
    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        match self.entries.get(name) {
            Some(FieldNode::Value(value)) => Some(value),
            _ => None,
        }
    }

    /// Raw entry lookup, block or value
    pub fn get(&self, name: &str) -> Option<&FieldNode> {
        self.entries.get(name)
    }

    pub fn insert_value(&mut self, name: impl Into<String>, value: FieldValue) {
        self.entries.insert(name.into(), FieldNode::Value(value));
    }

    pub fn insert_field(&mut self, block: &str, key: impl Into<String>, value: FieldValue) {
        let node = self
            .entries
            .entry(block.to_string())
            .or_insert_with(|| FieldNode::Block(BTreeMap::new()));
        if let FieldNode::Value(_) = node {
            *node = FieldNode::Block(BTreeMap::new());
        }
        if let FieldNode::Block(fields) = node {
            fields.insert(key.into(), value);
        }
    }

    fn open_block(&mut self, name: &str) {
        self.entries
            .insert(name.to_string(), FieldNode::Block(BTreeMap::new()));
    }

    fn push_item(&mut self, name: &str, item: i64) {
        let node = self
            .entries
            .entry(name.to_string())
            .or_insert_with(|| FieldNode::Value(FieldValue::Seq(Vec::new())));
        match node {
            FieldNode::Value(FieldValue::Seq(items)) => items.push(item),
            _ => *node = FieldNode::Value(FieldValue::Seq(vec![item])),
        }
    }
}

/// How to treat lines that match no known form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Skip them
    #[default]
    Lenient,
    /// Fail with [`TankgError::TextFormat`]
    Strict,
}

/// Parse preset text, skipping anything unrecognised
pub fn parse_text(text: &str) -> FieldTree {
    let mut tree = FieldTree::new();
    let mut section: Option<String> = None;
    for (index, line) in text.lines().enumerate() {
        if !parse_line(line, &mut tree, &mut section) {
            debug!("Skipping unrecognised line {}: {:?}", index + 1, line);
        }
    }
    tree
}

/// Parse preset text with an explicit [`ParseMode`]
pub fn parse_text_with(text: &str, mode: ParseMode) -> Result<FieldTree> {
    if mode == ParseMode::Lenient {
        return Ok(parse_text(text));
    }

    let mut tree = FieldTree::new();
    let mut section: Option<String> = None;
    for (index, line) in text.lines().enumerate() {
        if !parse_line(line, &mut tree, &mut section) {
            return Err(TankgError::TextFormat {
                line: index + 1,
                content: line.to_string(),
            });
        }
    }
    Ok(tree)
}

/// Apply one line to the tree. Returns false if the line matched no form.
fn parse_line(line: &str, tree: &mut FieldTree, section: &mut Option<String>) -> bool {
    let line = line.trim_end();
    let trimmed = line.trim_start();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return true;
    }
    let indented = trimmed.len() != line.len();

    // `- 254` item under `color:`
    if let Some(rest) = trimmed.strip_prefix('-') {
        let digits = rest.trim_start();
        if section.as_deref() == Some("color") && is_digits(digits) {
            if let Ok(item) = digits.parse() {
                tree.push_item("color", item);
                return true;
            }
        }
        return false;
    }

    let Some((key, rest)) = trimmed.split_once(':') else {
        return false;
    };
    if !is_identifier(key) {
        return false;
    }
    let raw = rest.trim();

    if raw.is_empty() {
        if indented {
            return false;
        }
        tree.open_block(key);
        *section = Some(key.to_string());
        return true;
    }

    let value = parse_value(raw);
    if let Some(block) = section.as_deref().filter(|_| indented) {
        tree.insert_field(block, key, value);
        return true;
    }

    // An unindented assignment closes any open block
    *section = None;
    tree.insert_value(key, value);
    true
}

fn parse_value(raw: &str) -> FieldValue {
    match raw {
        "true" => return FieldValue::Bool(true),
        "false" => return FieldValue::Bool(false),
        _ => {}
    }

    if is_integer(raw) {
        if let Ok(n) = raw.parse::<i64>() {
            return FieldValue::Int(n);
        }
    }

    if let Some(inner) = raw.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
        if inner.trim().is_empty() {
            return FieldValue::Seq(Vec::new());
        }
        let items: Option<Vec<i64>> = inner
            .split(',')
            .map(|item| {
                let item = item.trim();
                if is_integer(item) {
                    item.parse().ok()
                } else {
                    None
                }
            })
            .collect();
        if let Some(items) = items {
            return FieldValue::Seq(items);
        }
    }

    FieldValue::Str(raw.to_string())
}

fn is_identifier(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn is_integer(s: &str) -> bool {
    is_digits(s.strip_prefix(&['-', '+'][..]).unwrap_or(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocks_and_top_level_values() {
        let tree = parse_text(
            "amp:\n  enabled: true\n  model: Hi-Gain\n  gain: 70\nnoise_gate: 12\ncolor: [1, 2, 3]\n",
        );

        let amp = tree.block("amp").unwrap();
        assert_eq!(amp["enabled"], FieldValue::Bool(true));
        assert_eq!(amp["model"], FieldValue::Str("Hi-Gain".to_string()));
        assert_eq!(amp["gain"], FieldValue::Int(70));
        assert_eq!(tree.value("noise_gate"), Some(&FieldValue::Int(12)));
        assert_eq!(tree.value("color"), Some(&FieldValue::Seq(vec![1, 2, 3])));
        assert!(amp.get("noise_gate").is_none());
    }

    #[test]
    fn test_comments_and_blank_lines() {
        let tree = parse_text("# exported preset\n\nmod:\n  # depth below\n  depth: 4\n\n");
        assert_eq!(tree.block("mod").unwrap()["depth"], FieldValue::Int(4));
    }

    #[test]
    fn test_value_forms() {
        assert_eq!(parse_value("false"), FieldValue::Bool(false));
        assert_eq!(parse_value("-12"), FieldValue::Int(-12));
        assert_eq!(parse_value("+7"), FieldValue::Int(7));
        assert_eq!(parse_value("[ 4 ,5,6 ]"), FieldValue::Seq(vec![4, 5, 6]));
        assert_eq!(parse_value("[]"), FieldValue::Seq(vec![]));
        assert_eq!(parse_value("[1, x]"), FieldValue::Str("[1, x]".to_string()));
        assert_eq!(parse_value("True"), FieldValue::Str("True".to_string()));
        assert_eq!(parse_value("1.5"), FieldValue::Str("1.5".to_string()));
    }

    #[test]
    fn test_color_item_list() {
        let tree = parse_text("color:\n- 254\n-  254\n  - 126\n");
        assert_eq!(tree.value("color"), Some(&FieldValue::Seq(vec![254, 254, 126])));
    }

    #[test]
    fn test_item_list_outside_color_is_ignored() {
        let tree = parse_text("amp:\n- 3\n");
        assert!(tree.block("amp").unwrap().is_empty());
        assert!(parse_text_with("amp:\n- 3\n", ParseMode::Strict).is_err());
    }

    #[test]
    fn test_crlf_line_endings() {
        let tree = parse_text("reverb:\r\n  mix: 40\r\n");
        assert_eq!(tree.block("reverb").unwrap()["mix"], FieldValue::Int(40));
    }

    #[test]
    fn test_lenient_skips_garbage() {
        let tree = parse_text("amp:\n  this is not a field\n  gain: 5\n");
        assert_eq!(tree.block("amp").unwrap()["gain"], FieldValue::Int(5));
    }

    #[test]
    fn test_strict_reports_line() {
        let err = parse_text_with("amp:\n  gain: 5\n  ???\n", ParseMode::Strict).unwrap_err();
        match err {
            TankgError::TextFormat { line, content } => {
                assert_eq!(line, 3);
                assert_eq!(content, "  ???");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_repeated_header_resets_block() {
        let tree = parse_text("amp:\n  gain: 5\namp:\n  bass: 7\n");
        let amp = tree.block("amp").unwrap();
        assert!(amp.get("gain").is_none());
        assert_eq!(amp["bass"], FieldValue::Int(7));
    }
}
