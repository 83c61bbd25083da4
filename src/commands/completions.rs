//! Shell completions handler

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::Shell;

use chapview::cli::Cli;

#[cfg(not(tarpaulin_include))]
pub fn handle(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "chapview", &mut std::io::stdout());
    Ok(())
}
