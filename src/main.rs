mod commands;

use clap::Parser;

use chapview::cli::{Cli, Commands, ConfigCommands};
use chapview::logging::{self, LogTarget};
use chapview::theme::current_theme;
use chapview::Config;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        let theme = current_theme();
        eprintln!("{}", theme.error_text(&format!("Error: {:#}", e)));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load()?;
    init_logging(&cli.command, &config);

    match cli.command {
        Commands::View { file, analyzer } => commands::view::handle(&config, file, &analyzer),
        Commands::Analyze {
            file,
            analyzer,
            json,
            output,
        } => commands::analyze::handle(&config, file.as_deref(), &analyzer, json, output.as_deref()),
        Commands::Render {
            response,
            duration,
            width,
        } => commands::render::handle(&response, duration, width),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Edit => commands::config::handle_edit(),
            ConfigCommands::Migrate { yes } => commands::config::handle_migrate(yes),
            ConfigCommands::Path => commands::config::handle_path(),
        },
        Commands::Completions { shell } => commands::completions::handle(shell),
    }
}

/// The viewer owns the terminal, so it logs to a file.
fn init_logging(command: &Commands, config: &Config) {
    let target = match command {
        Commands::View { .. } => match config.log_file() {
            Some(path) => LogTarget::File(path),
            None => return,
        },
        _ => LogTarget::Stderr,
    };
    if let Err(e) = logging::init(&config.logging, target) {
        eprintln!("Warning: logging disabled: {:#}", e);
    }
}
