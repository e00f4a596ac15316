use blockfill::document::Separator;
use blockfill::draft::Overrides;
use blockfill::preset::Preset;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "blockfill", bin_name = "blockfill", version)]
#[command(
    about = "Build fixed-length text documents from a few content points",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Directory holding blockfill.json
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub config_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a draft into a document
    Generate {
        /// Draft JSON file, or - for stdin
        draft: PathBuf,

        /// Write the document here instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Show how each block of a draft would be laid out
    Check {
        /// Draft JSON file, or - for stdin
        draft: PathBuf,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// List the built-in presets
    Presets,

    /// Print a sample draft
    Sample,

    /// Get or set configuration (target-lines, separator, preset)
    Config {
        /// Configuration key
        key: Option<String>,

        /// Value to set
        value: Option<String>,
    },
}

/// Layout settings that win over both the draft and the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct LayoutArgs {
    /// Style every block with this preset
    #[arg(long, value_enum)]
    pub preset: Option<Preset>,

    /// Separator between blocks: newline, blank-line, or none
    #[arg(long)]
    pub separator: Option<Separator>,

    /// Lines per block
    #[arg(short = 'n', long, value_name = "N")]
    pub target_lines: Option<usize>,
}

impl From<LayoutArgs> for Overrides {
    fn from(args: LayoutArgs) -> Self {
        Overrides {
            preset: args.preset,
            separator: args.separator,
            target_lines: args.target_lines,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generate_with_overrides() {
        let cli = Cli::try_parse_from([
            "blockfill",
            "generate",
            "draft.json",
            "-o",
            "out.txt",
            "--preset",
            "numbered",
            "--separator",
            "newline",
            "-n",
            "12",
        ])
        .unwrap();
        match cli.command {
            Commands::Generate {
                draft,
                output,
                layout,
            } => {
                assert_eq!(draft, PathBuf::from("draft.json"));
                assert_eq!(output, Some(PathBuf::from("out.txt")));
                let overrides = Overrides::from(layout);
                assert_eq!(overrides.preset, Some(Preset::Numbered));
                assert_eq!(overrides.separator, Some(Separator::Newline));
                assert_eq!(overrides.target_lines, Some(12));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::try_parse_from(["blockfill", "presets", "--config-dir", "/tmp/x", "-v"])
            .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config_dir, Some(PathBuf::from("/tmp/x")));
    }

    #[test]
    fn test_unknown_separator_rejected() {
        let parsed = Cli::try_parse_from(["blockfill", "check", "d.json", "--separator", "tab"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_config_key_value() {
        let cli = Cli::try_parse_from(["blockfill", "config", "preset", "detail"]).unwrap();
        match cli.command {
            Commands::Config { key, value } => {
                assert_eq!(key.as_deref(), Some("preset"));
                assert_eq!(value.as_deref(), Some("detail"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
