//! # Filler Lines
//!
//! Filler lines pad a block to its target length. A filler line is a pure function of its
//! line number `n` and the [`FillerStyle`], so rebuilding a block always produces the same
//! bytes.
//!
//! All styles are templates underneath. The built-in ones are just fixed templates:
//!
//! ```text
//! Comment        // PADDING-LINE-{n:03}
//! DashNumbered   [{n:03}] ---------------------------------------- (Padding line {n})
//! ```
//!
//! Custom templates understand two placeholders: `{n}` and `{n:0W}` (zero padded to `W`
//! digits). Anything else is copied through verbatim.

use serde::{Deserialize, Serialize};

const COMMENT_TEMPLATE: &str = "// PADDING-LINE-{n:03}";
const DASH_RUN: usize = 40;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillerStyle {
    #[default]
    Comment,
    DashNumbered,
    Template(String),
}

impl FillerStyle {
    /// Renders the filler line for line number `n`.
    pub fn render(&self, n: usize) -> String {
        match self {
            FillerStyle::Comment => expand_template(COMMENT_TEMPLATE, n),
            FillerStyle::DashNumbered => {
                format!("[{:03}] {} (Padding line {})", n, "-".repeat(DASH_RUN), n)
            }
            FillerStyle::Template(template) => expand_template(template, n),
        }
    }

    /// True when the rendered line already starts with its own `[nnn]` index.
    pub fn is_self_numbered(&self) -> bool {
        matches!(self, FillerStyle::DashNumbered)
    }
}

/// Substitutes `{n}` and `{n:0W}` placeholders in `template`.
pub fn expand_template(template: &str, n: usize) -> String {
    let mut out = String::with_capacity(template.len() + 8);
    let mut rest = template;

    while let Some(start) = rest.find("{n") {
        out.push_str(&rest[..start]);
        let candidate = &rest[start..];
        match parse_placeholder(candidate) {
            Some((pad, consumed)) => {
                out.push_str(&format!("{:0width$}", n, width = pad));
                rest = &candidate[consumed..];
            }
            None => {
                out.push_str("{n");
                rest = &candidate[2..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Parses `{n}` or `{n:0W}` at the start of `s`, returning the pad width and bytes consumed.
fn parse_placeholder(s: &str) -> Option<(usize, usize)> {
    let end = s.find('}')?;
    let inner = &s[2..end];
    if inner.is_empty() {
        return Some((0, end + 1));
    }
    let digits = inner.strip_prefix(":0")?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let pad = digits.parse().ok()?;
    Some((pad, end + 1))
}
