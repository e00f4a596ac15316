//! # Blockfill Architecture
//!
//! Blockfill builds long, fixed-length text documents out of a handful of authored content
//! points. Each section ("block") is padded to an exact line count with filler lines that
//! depend only on their line number, and blocks are joined into one document string.
//!
//! Blockfill is a library that happens to have a CLI. The layout core never touches files or
//! the terminal; it returns strings and leaves the destination to the caller.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, reads drafts, writes the document      │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the loaded config        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Resolves drafts against config, returns CmdResult        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Layout Core (wrap, filler, block, document)                │
//! │  - Pure functions of their inputs, no I/O                   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Layout Rules
//!
//! A block is `header ++ body ++ filler` and always has exactly `target_lines` lines:
//!
//! - The header is `### {title}`, plus a rule line for the `Rule` and `Numbered` styles.
//! - Body lines are the content points in order, optionally wrapped and bulleted. Points
//!   that do not fit are dropped from the tail.
//! - Filler fills whatever is left. A filler line is a function of its line number alone,
//!   so the same block always renders the same way.
//!
//! Numbered blocks carry a running index across the whole document: the assembler hands
//! each block the count of numbered lines already emitted.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per operation
//! - [`wrap`]: Lazy word wrapping measured in display columns
//! - [`filler`]: Filler line styles
//! - [`block`]: Block styles, specs, and the block builder
//! - [`document`]: Separators and document assembly
//! - [`preset`]: Named style bundles
//! - [`draft`]: JSON drafts and their resolution into block specs
//! - [`config`]: `blockfill.json` defaults
//! - [`error`]: Error types
//! - `cli`: Argument parsing and terminal output for the binary (not part of the lib API)

pub mod api;
pub mod block;
pub mod commands;
pub mod config;
pub mod document;
pub mod draft;
pub mod error;
pub mod filler;
pub mod preset;
pub mod wrap;
