//! # Command Layer
//!
//! One module per operation. Commands take plain Rust values, return a [`CmdResult`], and
//! never touch stdout, stderr, or the output destination. Writing the finished document
//! is the caller's job.

use crate::block::BlockReport;
use crate::config::GeneratorConfig;
use crate::preset::Preset;

pub mod check;
pub mod config;
pub mod generate;
pub mod presets;
pub mod sample;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Text meant for the output sink: a generated document or a sample draft.
    pub output: Option<String>,
    pub reports: Vec<BlockReport>,
    pub presets: Vec<Preset>,
    pub config: Option<GeneratorConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_output(mut self, output: String) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_reports(mut self, reports: Vec<BlockReport>) -> Self {
        self.reports = reports;
        self
    }

    pub fn with_presets(mut self, presets: Vec<Preset>) -> Self {
        self.presets = presets;
        self
    }

    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Warnings for blocks that lost content to their line budget.
pub(crate) fn truncation_messages(reports: &[BlockReport]) -> Vec<CmdMessage> {
    reports
        .iter()
        .filter_map(|r| {
            if r.header_truncated {
                Some(CmdMessage::warning(format!(
                    "\"{}\": header cut to {} line(s)",
                    r.title, r.total_lines
                )))
            } else if r.dropped_points > 0 {
                Some(CmdMessage::warning(format!(
                    "\"{}\": {} point(s) dropped to fit {} lines",
                    r.title, r.dropped_points, r.total_lines
                )))
            } else {
                None
            }
        })
        .collect()
}
