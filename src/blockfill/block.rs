//! # Block Builder
//!
//! Turns a title plus an ordered list of content points into a block of exactly
//! `target_lines` lines:
//!
//! ```text
//! ┌──────────────────────────┐
//! │ header  (title, rule)    │  never truncated unless it alone exceeds the target
//! ├──────────────────────────┤
//! │ body    (points)         │  truncated to the slots left after the header
//! ├──────────────────────────┤
//! │ filler  (padding lines)  │  whatever remains, one line per slot
//! └──────────────────────────┘
//! ```
//!
//! ## Numbering
//!
//! In [`HeaderStyle::Numbered`] blocks every body and filler line carries a `[nnn]` index.
//! The index is global to the document: the caller passes the number of indexes already
//! used by earlier blocks as `offset`, and [`Block::numbered_lines`] reports how many this
//! block consumed. [`crate::document`] threads that offset across a whole document.
//!
//! ## Truncation
//!
//! Points are consumed in order. When the body runs out of slots the remaining points are
//! dropped. This is the accepted policy, not an error; the number of dropped points is
//! kept in the block's [`BlockReport`].

use crate::error::{BlockfillError, Result};
use crate::filler::FillerStyle;
use crate::wrap::wrap;
use serde::{Deserialize, Serialize};
use tracing::debug;
use unicode_width::UnicodeWidthStr;

pub const DEFAULT_RULE_CHAR: char = '-';
pub const RULE_WIDTH: usize = 40;
pub const NUMBERED_RULE_WIDTH: usize = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderStyle {
    /// `### {title}`
    #[default]
    Plain,
    /// Title line followed by a rule line.
    Rule,
    /// Title line, an 80 column rule, and globally indexed body lines.
    Numbered,
}

impl HeaderStyle {
    fn default_rule_width(&self) -> Option<usize> {
        match self {
            HeaderStyle::Plain => None,
            HeaderStyle::Rule => Some(RULE_WIDTH),
            HeaderStyle::Numbered => Some(NUMBERED_RULE_WIDTH),
        }
    }
}

/// How a block is laid out, independent of its content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockStyle {
    pub header_style: HeaderStyle,
    pub filler_style: FillerStyle,
    /// Reflow points to this many columns. `None` keeps one body line per point line.
    pub wrap_width: Option<usize>,
    /// Prefix for the first line of each point, e.g. `"- "`.
    pub bullet: Option<String>,
    /// Blank body line after every point.
    pub spacing: bool,
    /// Slots kept back for filler even when content could use them.
    pub reserve_filler: usize,
    pub rule_char: char,
    /// Overrides the header style's rule width.
    pub rule_width: Option<usize>,
}

impl Default for BlockStyle {
    fn default() -> Self {
        Self {
            header_style: HeaderStyle::Plain,
            filler_style: FillerStyle::Comment,
            wrap_width: None,
            bullet: None,
            spacing: false,
            reserve_filler: 0,
            rule_char: DEFAULT_RULE_CHAR,
            rule_width: None,
        }
    }
}

/// Everything needed to build one block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockSpec {
    pub title: String,
    pub points: Vec<String>,
    pub target_lines: usize,
    pub style: BlockStyle,
}

impl BlockSpec {
    pub fn new(
        title: impl Into<String>,
        points: Vec<String>,
        target_lines: usize,
        style: BlockStyle,
    ) -> Self {
        Self {
            title: title.into(),
            points,
            target_lines,
            style,
        }
    }
}

/// What happened while building a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockReport {
    pub title: String,
    pub total_lines: usize,
    pub header_lines: usize,
    pub body_lines: usize,
    pub filler_lines: usize,
    pub dropped_points: usize,
    pub header_truncated: bool,
}

/// A finished block. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    header: Vec<String>,
    body: Vec<String>,
    filler: Vec<String>,
    numbered_lines: usize,
    report: BlockReport,
}

impl Block {
    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn body(&self) -> &[String] {
        &self.body
    }

    pub fn filler(&self) -> &[String] {
        &self.filler
    }

    /// All lines in order: header, body, filler.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.header
            .iter()
            .chain(&self.body)
            .chain(&self.filler)
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.header.len() + self.body.len() + self.filler.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// How many global indexes this block consumed (0 unless numbered).
    pub fn numbered_lines(&self) -> usize {
        self.numbered_lines
    }

    pub fn report(&self) -> &BlockReport {
        &self.report
    }

    pub fn into_lines(self) -> Vec<String> {
        let mut lines = self.header;
        lines.extend(self.body);
        lines.extend(self.filler);
        lines
    }

    /// The block joined with `\n`, no trailing newline.
    pub fn render(&self) -> String {
        self.lines().collect::<Vec<_>>().join("\n")
    }
}

/// Builds a block with no numbering offset and returns its lines.
pub fn build(
    title: &str,
    points: &[String],
    target_lines: usize,
    style: &BlockStyle,
) -> Result<Vec<String>> {
    let spec = BlockSpec::new(title, points.to_vec(), target_lines, style.clone());
    Ok(build_block(&spec, 0)?.into_lines())
}

/// Builds a block. `offset` is the number of global indexes used before this block and
/// only matters for numbered blocks.
pub fn build_block(spec: &BlockSpec, offset: usize) -> Result<Block> {
    let style = &spec.style;
    let target = spec.target_lines;
    if target < 1 {
        return Err(BlockfillError::InvalidTargetLength(target));
    }
    if let Some(width) = style.wrap_width {
        if width == 0 {
            return Err(BlockfillError::InvalidWrapWidth(width));
        }
    }

    let mut header = header_lines(&spec.title, style);
    if header.len() >= target {
        let header_truncated = header.len() > target;
        header.truncate(target);
        debug!(
            title = %spec.title,
            target,
            header_truncated,
            "block has no room for body or filler"
        );
        let report = BlockReport {
            title: spec.title.clone(),
            total_lines: header.len(),
            header_lines: header.len(),
            body_lines: 0,
            filler_lines: 0,
            dropped_points: spec.points.len(),
            header_truncated,
        };
        return Ok(Block {
            header,
            body: Vec::new(),
            filler: Vec::new(),
            numbered_lines: 0,
            report,
        });
    }

    let slots = target - header.len();
    let body_capacity = slots.saturating_sub(style.reserve_filler);
    let (mut body, dropped_points) = body_lines(&spec.points, style, body_capacity)?;

    let numbered = style.header_style == HeaderStyle::Numbered;
    if numbered {
        for (i, line) in body.iter_mut().enumerate() {
            *line = numbered_line(offset + i + 1, line);
        }
    }

    let filler: Vec<String> = (body.len()..slots)
        .map(|slot| {
            if numbered {
                let index = offset + slot + 1;
                let text = style.filler_style.render(index);
                if style.filler_style.is_self_numbered() {
                    text
                } else {
                    numbered_line(index, &text)
                }
            } else {
                style.filler_style.render(header.len() + slot + 1)
            }
        })
        .collect();

    if dropped_points > 0 {
        debug!(
            title = %spec.title,
            dropped_points,
            body_capacity,
            "points dropped to fit target length"
        );
    }

    let report = BlockReport {
        title: spec.title.clone(),
        total_lines: target,
        header_lines: header.len(),
        body_lines: body.len(),
        filler_lines: filler.len(),
        dropped_points,
        header_truncated: false,
    };
    debug!(
        title = %spec.title,
        target,
        body = report.body_lines,
        filler = report.filler_lines,
        "built block"
    );

    Ok(Block {
        header,
        body,
        filler,
        numbered_lines: if numbered { slots } else { 0 },
        report,
    })
}

fn header_lines(title: &str, style: &BlockStyle) -> Vec<String> {
    let title_line = format!("### {}", title);
    let Some(default_width) = style.header_style.default_rule_width() else {
        return vec![title_line];
    };
    let width = style.rule_width.unwrap_or(default_width);
    vec![title_line, style.rule_char.to_string().repeat(width)]
}

fn numbered_line(index: usize, text: &str) -> String {
    if text.is_empty() {
        format!("[{:03}]", index)
    } else {
        format!("[{:03}] {}", index, text)
    }
}

/// Expands points into body lines until `capacity` is reached.
/// Returns the lines and the number of points that contributed nothing.
fn body_lines(
    points: &[String],
    style: &BlockStyle,
    capacity: usize,
) -> Result<(Vec<String>, usize)> {
    let mut body = Vec::with_capacity(capacity);
    let mut placed = 0;

    for point in points {
        if body.len() >= capacity {
            break;
        }
        let before = body.len();
        for line in point_lines(point, style)? {
            if body.len() >= capacity {
                break;
            }
            body.push(line);
        }
        if body.len() == before {
            continue;
        }
        placed += 1;
        if style.spacing && body.len() < capacity {
            body.push(String::new());
        }
    }

    Ok((body, points.len() - placed))
}

/// The physical lines of one point, bullet and hanging indent applied.
fn point_lines(point: &str, style: &BlockStyle) -> Result<Vec<String>> {
    let bullet = style.bullet.as_deref().unwrap_or("");
    let indent = " ".repeat(bullet.width());

    let raw: Vec<String> = match style.wrap_width {
        Some(width) => {
            let inner = width.saturating_sub(bullet.width()).max(1);
            wrap(point, inner)?.collect()
        }
        None => {
            let lines: Vec<String> = point.lines().map(str::to_string).collect();
            if lines.is_empty() {
                vec![String::new()]
            } else {
                lines
            }
        }
    };

    if bullet.is_empty() {
        return Ok(raw);
    }
    Ok(raw
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            let prefix = if i == 0 { bullet } else { indent.as_str() };
            format!("{}{}", prefix, line)
        })
        .collect())
}
