//! # Document Drafts
//!
//! A draft is the authored input: titles, content points, and any layout overrides, as
//! JSON. Drafts are resolved into [`BlockSpec`]s before assembly.
//!
//! ```json
//! {
//!   "label_blocks": true,
//!   "target_lines": 40,
//!   "preset": "changelog",
//!   "blocks": [
//!     { "title": "Overview", "points": ["First change", "Second change"] },
//!     { "title": "Details", "points": ["..."], "header_style": "rule", "wrap_width": 72 }
//!   ]
//! }
//! ```
//!
//! Resolution order for every setting, first match wins:
//!
//! 1. The block's own field
//! 2. The block's `preset`
//! 3. The draft's field (`target_lines`, `separator`) or `preset`
//! 4. [`GeneratorConfig`]
//! 5. Built-in defaults

use crate::block::{BlockSpec, BlockStyle, HeaderStyle};
use crate::config::GeneratorConfig;
use crate::document::Separator;
use crate::error::Result;
use crate::filler::FillerStyle;
use crate::preset::Preset;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub separator: Option<Separator>,

    /// Prefix titles with `[BLOCK k]`.
    #[serde(default)]
    pub label_blocks: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_lines: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<Preset>,

    pub blocks: Vec<DraftBlock>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftBlock {
    pub title: String,

    #[serde(default)]
    pub points: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_lines: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<Preset>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_style: Option<HeaderStyle>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filler_style: Option<FillerStyle>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wrap_width: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bullet: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reserve_filler: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_char: Option<char>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_width: Option<usize>,
}

/// A draft with every default applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentPlan {
    pub blocks: Vec<BlockSpec>,
    pub separator: Separator,
}

/// Settings that override both the draft and the config, typically from the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub preset: Option<Preset>,
    pub separator: Option<Separator>,
    pub target_lines: Option<usize>,
}

impl DocumentDraft {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn resolve(&self, config: &GeneratorConfig, overrides: &Overrides) -> DocumentPlan {
        let separator = overrides
            .separator
            .clone()
            .or_else(|| self.separator.clone())
            .unwrap_or_else(|| config.separator.clone());
        let document_preset = self.preset.or(config.preset);
        let document_target = self.target_lines.unwrap_or(config.target_lines);

        let blocks = self
            .blocks
            .iter()
            .enumerate()
            .map(|(i, block)| {
                let title = if self.label_blocks {
                    format!("[BLOCK {}] {}", i + 1, block.title)
                } else {
                    block.title.clone()
                };
                let target_lines = overrides
                    .target_lines
                    .or(block.target_lines)
                    .unwrap_or(document_target);
                let preset = overrides.preset.or(block.preset).or(document_preset);
                BlockSpec::new(
                    title,
                    block.points.clone(),
                    target_lines,
                    block.style(preset),
                )
            })
            .collect();

        DocumentPlan { blocks, separator }
    }

    /// A small draft showing every feature, used by `blockfill sample`.
    pub fn sample() -> Self {
        DocumentDraft {
            separator: Some(Separator::BlankLine),
            label_blocks: true,
            target_lines: Some(20),
            preset: Some(Preset::Changelog),
            blocks: vec![
                DraftBlock {
                    title: "Technical Overview".to_string(),
                    points: vec![
                        "Introduced the block builder with exact line budgets.".to_string(),
                        "Filler lines are derived from their line number only.".to_string(),
                    ],
                    ..DraftBlock::default()
                },
                DraftBlock {
                    title: "Implementation Notes".to_string(),
                    points: vec![
                        "Long points are reflowed at word boundaries so no line exceeds the configured wrap width.".to_string(),
                        "Embedded line breaks\nstart new segments.".to_string(),
                    ],
                    preset: Some(Preset::Detail),
                    wrap_width: Some(60),
                    ..DraftBlock::default()
                },
                DraftBlock {
                    title: "Line Index".to_string(),
                    points: vec!["Indexes continue across numbered blocks.".to_string()],
                    preset: Some(Preset::Numbered),
                    target_lines: Some(8),
                    ..DraftBlock::default()
                },
            ],
        }
    }
}

impl DraftBlock {
    fn style(&self, preset: Option<Preset>) -> BlockStyle {
        let mut style = preset.map(|p| p.style()).unwrap_or_default();
        if let Some(header) = self.header_style {
            style.header_style = header;
        }
        if let Some(filler) = &self.filler_style {
            style.filler_style = filler.clone();
        }
        if self.wrap_width.is_some() {
            style.wrap_width = self.wrap_width;
        }
        if self.bullet.is_some() {
            style.bullet = self.bullet.clone();
        }
        if let Some(spacing) = self.spacing {
            style.spacing = spacing;
        }
        if let Some(reserve) = self.reserve_filler {
            style.reserve_filler = reserve;
        }
        if let Some(rule_char) = self.rule_char {
            style.rule_char = rule_char;
        }
        if self.rule_width.is_some() {
            style.rule_width = self.rule_width;
        }
        style
    }
}
