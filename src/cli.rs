//! Command line definition.
//!
//! Lives in the library so the man page generator can reuse it.

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Build version string: package version plus git revision for dev builds.
pub fn version() -> &'static str {
    static VERSION: OnceLock<String> = OnceLock::new();
    VERSION.get_or_init(|| match option_env!("VERGEN_GIT_SHA") {
        Some(sha) => format!("{} ({})", env!("CARGO_PKG_VERSION"), sha),
        None => env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[derive(Parser, Debug)]
#[command(name = "chapview")]
#[command(about = "Upload a video for analysis and browse its chapters on a timeline")]
#[command(version = version())]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive chapter viewer
    #[command(long_about = "Open the interactive chapter viewer.

With FILE the video is uploaded right away; otherwise press 'o' to enter a
path and 'u' to upload it. Diagnostics go to the log file, see 'config show'.

EXAMPLES:
    chapview view
    chapview view talk.mp4
    chapview view talk.mp4 --duration 1834")]
    View {
        /// Video file to upload on start
        file: Option<PathBuf>,
        #[command(flatten)]
        analyzer: AnalyzerArgs,
    },

    /// Upload a video and print its chapters
    #[command(long_about = "Upload a video to the analyzer and print the chapter list
and marker table.

Without FILE the command prints an alert and exits without contacting the
analyzer.

EXAMPLES:
    chapview analyze talk.mp4
    chapview analyze talk.mp4 --json
    chapview analyze talk.mp4 --output talk.chapters.json")]
    Analyze {
        /// Video file to upload
        file: Option<PathBuf>,
        #[command(flatten)]
        analyzer: AnalyzerArgs,
        /// Print the raw analyzer response as JSON
        #[arg(long)]
        json: bool,
        /// Save the analyzer response for 'render'
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Project a saved analyzer response onto a timeline
    #[command(long_about = "Print the chapter list, marker table and timeline track of a
response saved with 'analyze --output'.

Without --duration the latest chapter end is used as the video duration.

EXAMPLES:
    chapview render talk.chapters.json
    chapview render talk.chapters.json --duration 1834 --width 60")]
    Render {
        /// Saved analyzer response (JSON)
        response: PathBuf,
        /// Video duration in seconds
        #[arg(short, long, value_name = "SECS")]
        duration: Option<f64>,
        /// Track width in characters (default: terminal width)
        #[arg(short, long, value_name = "N")]
        width: Option<usize>,
    },

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    #[command(long_about = "Generate shell completion scripts.

EXAMPLES:
    chapview completions bash > ~/.local/share/bash-completion/completions/chapview
    chapview completions zsh > ~/.zfunc/_chapview")]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Options shared by the commands that talk to the analyzer.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct AnalyzerArgs {
    /// Analyzer endpoint (overrides the config file)
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,
    /// Video duration in seconds instead of probing it with ffprobe
    #[arg(short, long, value_name = "SECS")]
    pub duration: Option<f64>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Open configuration in $EDITOR
    Edit,
    /// Add missing fields to the configuration file
    Migrate {
        /// Apply without asking
        #[arg(short, long)]
        yes: bool,
    },
    /// Print the configuration file path
    Path,
}
