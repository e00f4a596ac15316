//! # CLI Layer
//!
//! The CLI is one client of [`BlockfillApi`]. It is the only code that:
//! - Parses arguments
//! - Reads draft files (or stdin)
//! - Writes the finished document to its destination
//! - Installs the tracing subscriber
//!
//! The document itself goes to stdout or `--output`; messages and reports go to stderr
//! and stdout respectively, so `blockfill generate d.json > out.txt` stays clean.

use super::render::{print_config, print_messages, print_presets, print_reports};
use super::setup::{Cli, Commands, LayoutArgs};
use blockfill::api::{BlockfillApi, ConfigAction, MessageLevel};
use blockfill::error::Result;
use clap::Parser;
use directories::ProjectDirs;
use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "BLOCKFILL_LOG";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_dir = cli.config_dir.clone().unwrap_or_else(default_config_dir);
    debug!(config_dir = %config_dir.display(), "using config directory");
    let mut api = BlockfillApi::new(config_dir)?;

    match cli.command {
        Commands::Generate {
            draft,
            output,
            layout,
        } => handle_generate(&api, &draft, output.as_deref(), layout),
        Commands::Check { draft, layout } => handle_check(&api, &draft, layout),
        Commands::Presets => handle_presets(&api),
        Commands::Sample => handle_sample(&api),
        Commands::Config { key, value } => handle_config(&mut api, key, value),
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "blockfill=debug" } else { "warn" })
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn default_config_dir() -> PathBuf {
    ProjectDirs::from("com", "blockfill", "blockfill")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".blockfill"))
}

fn read_draft(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        return Ok(buffer);
    }
    Ok(fs::read_to_string(path)?)
}

fn handle_generate(
    api: &BlockfillApi,
    draft: &Path,
    output: Option<&Path>,
    layout: LayoutArgs,
) -> Result<()> {
    let json = read_draft(draft)?;
    let result = api.generate_json(&json, &layout.into())?;
    let document = result.output.unwrap_or_default();

    match output {
        Some(path) => {
            fs::write(path, &document)?;
            print_messages(&result.messages);
            eprintln!(
                "Wrote {} lines to {}",
                rendered_line_count(&document),
                path.display()
            );
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", document)?;
            print_messages(&result.messages);
        }
    }
    Ok(())
}

/// Counts lines the way the file will be read back, blank trailing lines included.
fn rendered_line_count(document: &str) -> usize {
    if document.is_empty() {
        0
    } else {
        document.split('\n').count()
    }
}

fn handle_check(api: &BlockfillApi, draft: &Path, layout: LayoutArgs) -> Result<()> {
    let json = read_draft(draft)?;
    let result = api.check_json(&json, &layout.into())?;
    print_reports(&result.reports);
    print_messages(&result.messages);
    Ok(())
}

fn handle_presets(api: &BlockfillApi) -> Result<()> {
    let result = api.presets();
    print_presets(&result.presets);
    Ok(())
}

fn handle_sample(api: &BlockfillApi) -> Result<()> {
    let result = api.sample()?;
    if let Some(json) = result.output {
        println!("{}", json);
    }
    Ok(())
}

fn handle_config(api: &mut BlockfillApi, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    for message in &result.messages {
        // A single requested value is data, not a status line.
        if message.level == MessageLevel::Info {
            println!("{}", message.content);
        }
    }
    print_messages(
        &result
            .messages
            .into_iter()
            .filter(|m| m.level != MessageLevel::Info)
            .collect::<Vec<_>>(),
    );
    Ok(())
}
