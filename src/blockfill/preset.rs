//! Named style bundles for the common document shapes.

use crate::block::{BlockStyle, HeaderStyle};
use crate::error::BlockfillError;
use crate::filler::FillerStyle;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const DETAIL_TEMPLATE: &str = "DETAIL LINE {n}: Expansion of the technical notes above.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    /// Title line, one body line per point, comment filler
    Plain,
    /// Bulleted points separated by blank lines
    Changelog,
    /// Ruled header, points wrapped at 80 columns, at least one detail line
    Detail,
    /// Ruled header with document-wide line numbers
    Numbered,
}

impl Preset {
    pub fn all() -> &'static [Preset] {
        &[
            Preset::Plain,
            Preset::Changelog,
            Preset::Detail,
            Preset::Numbered,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Preset::Plain => "plain",
            Preset::Changelog => "changelog",
            Preset::Detail => "detail",
            Preset::Numbered => "numbered",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Preset::Plain => "title line, one body line per point, comment filler",
            Preset::Changelog => "bulleted points separated by blank lines",
            Preset::Detail => "ruled header, points wrapped at 80 columns, detail filler",
            Preset::Numbered => "ruled header with document-wide line numbers",
        }
    }

    pub fn style(&self) -> BlockStyle {
        match self {
            Preset::Plain => BlockStyle::default(),
            Preset::Changelog => BlockStyle {
                bullet: Some("- ".to_string()),
                spacing: true,
                ..BlockStyle::default()
            },
            Preset::Detail => BlockStyle {
                header_style: HeaderStyle::Rule,
                filler_style: FillerStyle::Template(DETAIL_TEMPLATE.to_string()),
                wrap_width: Some(80),
                reserve_filler: 1,
                ..BlockStyle::default()
            },
            Preset::Numbered => BlockStyle {
                header_style: HeaderStyle::Numbered,
                filler_style: FillerStyle::DashNumbered,
                ..BlockStyle::default()
            },
        }
    }
}

impl FromStr for Preset {
    type Err = BlockfillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::all()
            .iter()
            .copied()
            .find(|p| p.name() == s)
            .ok_or_else(|| BlockfillError::UnknownPreset(s.to_string()))
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
