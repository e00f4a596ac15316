//! Terminal output for the CLI.
//!
//! Layout (column widths, truncation) is computed on plain strings so it can be tested
//! without a terminal; color is applied only when printing.

use blockfill::api::{CmdMessage, MessageLevel};
use blockfill::block::BlockReport;
use blockfill::config::GeneratorConfig;
use blockfill::preset::Preset;
use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const TITLE_WIDTH: usize = 36;
const COUNT_WIDTH: usize = 7;
const PRESET_NAME_WIDTH: usize = 10;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => eprintln!("{}", message.content.dimmed()),
            MessageLevel::Success => eprintln!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_reports(reports: &[BlockReport]) {
    let mut lines = render_report_table(reports).into_iter();
    if let Some(header) = lines.next() {
        println!("{}", header.bold());
    }
    for (line, report) in lines.zip(reports) {
        if report.header_truncated || report.dropped_points > 0 {
            println!("{}", line.yellow());
        } else {
            println!("{}", line);
        }
    }
}

pub(super) fn print_presets(presets: &[Preset]) {
    for line in render_preset_list(presets) {
        println!("{}", line);
    }
}

pub(super) fn print_config(config: &GeneratorConfig) {
    for line in render_config(config) {
        println!("{}", line);
    }
}

/// One header row plus one row per block.
pub(super) fn render_report_table(reports: &[BlockReport]) -> Vec<String> {
    let mut lines = Vec::with_capacity(reports.len() + 1);
    lines.push(format!(
        "{}{:>w$}{:>w$}{:>w$}{:>w$}{:>w$}",
        pad_to_width("BLOCK", TITLE_WIDTH),
        "LINES",
        "HEAD",
        "BODY",
        "FILL",
        "DROP",
        w = COUNT_WIDTH
    ));
    for report in reports {
        let title = truncate_to_width(&report.title, TITLE_WIDTH);
        lines.push(format!(
            "{}{:>w$}{:>w$}{:>w$}{:>w$}{:>w$}",
            pad_to_width(&title, TITLE_WIDTH),
            report.total_lines,
            report.header_lines,
            report.body_lines,
            report.filler_lines,
            report.dropped_points,
            w = COUNT_WIDTH
        ));
    }
    lines
}

pub(super) fn render_preset_list(presets: &[Preset]) -> Vec<String> {
    presets
        .iter()
        .map(|p| {
            format!(
                "{:<w$}{}",
                p.name(),
                p.description(),
                w = PRESET_NAME_WIDTH
            )
        })
        .collect()
}

pub(super) fn render_config(config: &GeneratorConfig) -> Vec<String> {
    GeneratorConfig::KEYS
        .iter()
        .filter_map(|key| config.get(key).map(|val| format!("{} = {}", key, val)))
        .collect()
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

/// Cuts `s` to at most `max_width - 1` columns and appends an ellipsis when it had to cut.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() < max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(2) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
