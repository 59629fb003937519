mod config;
mod logging;
mod menu;
mod output;

use anyhow::Result;
use config::{Config, ConfigStore};
use gitlab_backend::GitLabClient;
use mr_core::{aggregate, MergeRequestFilter, MergeRequestSource};
use std::process::ExitCode;
use tracing::warn;

fn main() -> ExitCode {
    logging::init();

    let result = ConfigStore::at_default_path()
        .map_err(anyhow::Error::from)
        .and_then(|store| run_with(&store, connect));

    match result {
        Ok(menu) => {
            print!("{}", menu);
            ExitCode::SUCCESS
        }
        Err(e) => {
            print!("{}", output::render_error(&e));
            ExitCode::from(1)
        }
    }
}

fn connect(config: &Config) -> GitLabClient {
    GitLabClient::for_host(&config.gitlab_host, &config.gitlab_token)
}

/// Load the config, then build a source with `connect` and render the menu.
///
/// `connect` is only invoked once the config has loaded.
fn run_with<S, F>(store: &ConfigStore, connect: F) -> Result<String>
where
    S: MergeRequestSource,
    F: FnOnce(&Config) -> S,
{
    let config = store.load()?;
    if !config.is_complete() {
        warn!(path = %store.path().display(), "config is missing gitlab_host or gitlab_token");
    }

    let source = connect(&config);
    let report = aggregate(&source, MergeRequestFilter::all_open())?;
    Ok(menu::render_menu(&report))
}
