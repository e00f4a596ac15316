//! # Document Assembly
//!
//! Builds an ordered list of [`BlockSpec`]s into one string. Each block is rendered with
//! `\n` between its lines, and rendered blocks are joined with a [`Separator`]. The separator
//! is the only thing assembly adds; no block gains or loses lines.
//!
//! Numbered blocks share one running index. The assembler keeps the count of indexes used
//! so far and passes it to each block as its offset, so numbering never restarts at a block
//! boundary. Nothing outlives a single [`assemble`] call.

use crate::block::{build_block, Block, BlockReport, BlockSpec};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use tracing::info;

/// What goes between two rendered blocks.
///
/// Blocks never share a line: every separator starts with a line break, so the last line of
/// one block and the first line of the next stay intact.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Separator {
    /// Blocks on consecutive lines.
    Newline,
    /// One empty line between blocks.
    #[default]
    BlankLine,
    /// No separator lines at all. Renders like `Newline`.
    None,
    /// The given text on its own line(s) between blocks.
    Custom(String),
}

impl Separator {
    /// The string placed between two rendered blocks.
    pub fn joiner(&self) -> Cow<'_, str> {
        match self {
            Separator::Newline | Separator::None => Cow::Borrowed("\n"),
            Separator::BlankLine => Cow::Borrowed("\n\n"),
            Separator::Custom(s) => Cow::Owned(format!("\n{}\n", s)),
        }
    }

    /// How many lines the separator adds between two blocks.
    pub fn line_count(&self) -> usize {
        match self {
            Separator::Newline | Separator::None => 0,
            Separator::BlankLine => 1,
            Separator::Custom(s) => s.split('\n').count(),
        }
    }
}

impl std::str::FromStr for Separator {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "newline" => Ok(Separator::Newline),
            "blank_line" | "blank-line" => Ok(Separator::BlankLine),
            "none" => Ok(Separator::None),
            other => Err(format!(
                "Invalid separator: {} (expected newline, blank-line or none)",
                other
            )),
        }
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Separator::Newline => write!(f, "newline"),
            Separator::BlankLine => write!(f, "blank-line"),
            Separator::None => write!(f, "none"),
            Separator::Custom(s) => write!(f, "{:?}", s),
        }
    }
}

/// Built blocks plus the separator between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    blocks: Vec<Block>,
    separator: Separator,
}

impl Document {
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn reports(&self) -> Vec<&BlockReport> {
        self.blocks.iter().map(Block::report).collect()
    }

    /// Total lines across all blocks, separators excluded.
    pub fn block_lines(&self) -> usize {
        self.blocks.iter().map(Block::len).sum()
    }

    /// Lines of the rendered document, separator lines included.
    pub fn line_count(&self) -> usize {
        let gaps = self.blocks.len().saturating_sub(1);
        self.block_lines() + gaps * self.separator.line_count()
    }

    pub fn render(&self) -> String {
        self.blocks
            .iter()
            .map(Block::render)
            .collect::<Vec<_>>()
            .join(&*self.separator.joiner())
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Builds every block in order, threading the numbering offset.
pub fn assemble_document(specs: &[BlockSpec], separator: Separator) -> Result<Document> {
    let mut offset = 0;
    let mut blocks = Vec::with_capacity(specs.len());

    for spec in specs {
        let block = build_block(spec, offset)?;
        offset += block.numbered_lines();
        blocks.push(block);
    }

    let document = Document { blocks, separator };
    info!(
        blocks = document.blocks.len(),
        lines = document.block_lines(),
        numbered = offset,
        "assembled document"
    );
    Ok(document)
}

/// Builds and renders a document in one step.
pub fn assemble(specs: &[BlockSpec], separator: &Separator) -> Result<String> {
    Ok(assemble_document(specs, separator.clone())?.render())
}
