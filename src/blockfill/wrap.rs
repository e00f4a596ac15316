//! # Line Wrapping
//!
//! Greedy word wrap over whitespace-delimited tokens. Each line break in the input starts
//! a new segment, and segments are wrapped independently in their original order.
//!
//! Rules:
//! 1. Tokens are joined with a single space while the line stays within `width` columns.
//! 2. A token that would push the line past `width` starts the next line.
//! 3. A token wider than `width` sits alone on its line, unsplit.
//! 4. Blank segments and empty input yield no lines.
//!
//! Width is measured in display columns, so wide glyphs count double.

use crate::error::{BlockfillError, Result};
use std::str::{Lines, SplitWhitespace};
use unicode_width::UnicodeWidthStr;

/// Lazy iterator over the wrapped lines of a text.
///
/// Borrows the input, so cloning a `Wrap` is cheap and yields the same sequence again.
#[derive(Debug, Clone)]
pub struct Wrap<'a> {
    segments: Lines<'a>,
    words: Option<SplitWhitespace<'a>>,
    pending: Option<&'a str>,
    width: usize,
}

/// Wraps `text` to at most `width` display columns per line.
pub fn wrap(text: &str, width: usize) -> Result<Wrap<'_>> {
    if width == 0 {
        return Err(BlockfillError::InvalidWrapWidth(width));
    }
    Ok(Wrap {
        segments: text.lines(),
        words: None,
        pending: None,
        width,
    })
}

impl<'a> Iterator for Wrap<'a> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            if self.words.is_none() {
                let segment = self.segments.next()?;
                self.words = Some(segment.split_whitespace());
            }
            let Some(words) = self.words.as_mut() else {
                continue;
            };

            let Some(first) = self.pending.take().or_else(|| words.next()) else {
                self.words = None;
                continue;
            };

            let mut line = String::from(first);
            let mut used = first.width();
            for word in words.by_ref() {
                let word_width = word.width();
                if used + 1 + word_width > self.width {
                    self.pending = Some(word);
                    return Some(line);
                }
                line.push(' ');
                line.push_str(word);
                used += 1 + word_width;
            }

            self.words = None;
            return Some(line);
        }
    }
}

impl<'a> std::iter::FusedIterator for Wrap<'a> {}
