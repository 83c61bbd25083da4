//! View subcommand handler

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;

use chapview::analyzer::AnalyzerClient;
use chapview::cli::AnalyzerArgs;
use chapview::tui::ViewerApp;
use chapview::viewer::Controller;
use chapview::Config;

/// Open the interactive viewer, optionally uploading `file` right away.
#[cfg(not(tarpaulin_include))]
pub fn handle(config: &Config, file: Option<PathBuf>, args: &AnalyzerArgs) -> Result<()> {
    let client = AnalyzerClient::new(&super::analyzer_config(config, args))?;
    // Kept alive for the whole session; uploads run on its workers.
    let runtime = super::build_runtime()?;

    let controller = Controller::new(client, runtime.handle().clone(), config.viewer.clone())
        .with_fixed_duration(args.duration);

    let mut app = ViewerApp::new(controller, Duration::from_millis(config.viewer.tick_ms))?;
    if let Some(file) = file {
        app.open(file);
    }
    let result = app.run();
    drop(app);

    // Pending uploads are abandoned when the viewer closes.
    runtime.shutdown_background();
    result
}
