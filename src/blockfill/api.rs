//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. Every blockfill operation goes
//! through [`BlockfillApi`], whatever the UI in front of it.
//!
//! The facade:
//! - **Owns** the config directory and the [`GeneratorConfig`] loaded from it
//! - **Parses** draft JSON into a [`DocumentDraft`] when callers hand over raw text
//! - **Dispatches** to the matching `commands::*::run`
//!
//! It never prints, never opens the output destination, and never decides how a
//! [`CmdResult`] should look on screen. Layout rules live in [`crate::block`] and
//! [`crate::document`]; the commands only wire them to drafts and config.
//!
//! ## Testing Strategy
//!
//! API tests check that inputs reach the right command and that config changes are
//! picked up by later calls. Document layout is tested where it is implemented.

use crate::commands;
use crate::config::GeneratorConfig;
use crate::draft::{DocumentDraft, Overrides};
use crate::error::Result;
use std::path::{Path, PathBuf};

pub struct BlockfillApi {
    config_dir: PathBuf,
    config: GeneratorConfig,
}

impl BlockfillApi {
    /// Opens the API over `config_dir`, loading `blockfill.json` if present.
    pub fn new(config_dir: impl Into<PathBuf>) -> Result<Self> {
        let config_dir = config_dir.into();
        let config = GeneratorConfig::load(&config_dir)?;
        Ok(Self { config_dir, config })
    }

    pub fn with_config(config_dir: impl Into<PathBuf>, config: GeneratorConfig) -> Self {
        Self {
            config_dir: config_dir.into(),
            config,
        }
    }

    pub fn generate(
        &self,
        draft: &DocumentDraft,
        overrides: &Overrides,
    ) -> Result<commands::CmdResult> {
        commands::generate::run(draft, &self.config, overrides)
    }

    pub fn generate_json(&self, json: &str, overrides: &Overrides) -> Result<commands::CmdResult> {
        let draft = DocumentDraft::from_json(json)?;
        self.generate(&draft, overrides)
    }

    pub fn check(&self, draft: &DocumentDraft, overrides: &Overrides) -> Result<commands::CmdResult> {
        commands::check::run(draft, &self.config, overrides)
    }

    pub fn check_json(&self, json: &str, overrides: &Overrides) -> Result<commands::CmdResult> {
        let draft = DocumentDraft::from_json(json)?;
        self.check(&draft, overrides)
    }

    pub fn presets(&self) -> commands::CmdResult {
        commands::presets::run()
    }

    pub fn sample(&self) -> Result<commands::CmdResult> {
        commands::sample::run()
    }

    /// Reads or updates `blockfill.json`. A successful `Set` also refreshes the
    /// config used by later calls on this instance.
    pub fn config(&mut self, action: ConfigAction) -> Result<commands::CmdResult> {
        let result = commands::config::run(&self.config_dir, action)?;
        if let Some(config) = &result.config {
            self.config = config.clone();
        }
        Ok(result)
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn generator_config(&self) -> &GeneratorConfig {
        &self.config
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
