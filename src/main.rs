//! clip CLI entry point

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use clip::cli::{
    app::{config_exit_code, config_store, run_clear, run_copy, Pipeline},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    history_cmd::handle_history_command,
    logging::init_logging,
    presenter::Presenter,
    EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR,
};
use clip::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let mut cli = Cli::parse();
    init_logging(cli.verbose);
    let presenter = Presenter::new();

    let config_file = match config_store(cli.config.clone()) {
        Ok(store) => store,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    match cli.command.take() {
        // Config commands work on the file alone
        Some(Commands::Config { action }) => {
            match handle_config_command(action, &config_file, &presenter).await {
                Ok(()) => ExitCode::from(EXIT_SUCCESS),
                Err(e) => {
                    presenter.error(&e.to_string());
                    ExitCode::from(config_exit_code(&e))
                }
            }
        }
        Some(Commands::Clear { history }) => {
            match open(&config_file, cli.storage.clone(), &presenter).await {
                Ok(p) => run_clear(history, &p.use_case, &p.settings, &presenter).await,
                Err(code) => code,
            }
        }
        Some(Commands::History { action }) => {
            let p = match open(&config_file, cli.storage.clone(), &presenter).await {
                Ok(p) => p,
                Err(code) => return code,
            };
            match handle_history_command(action, &p.use_case, &p.config, &presenter).await {
                Ok(()) => ExitCode::from(EXIT_SUCCESS),
                Err(e) => {
                    presenter.error(&e.to_string());
                    ExitCode::from(EXIT_ERROR)
                }
            }
        }
        None => {
            let Some(options) = cli.copy_options(std::io::stdin().is_terminal()) else {
                presenter
                    .error("Nothing to copy. Pass TEXT, pipe text on stdin or use --selection.");
                return ExitCode::from(EXIT_USAGE_ERROR);
            };
            match open(&config_file, cli.storage.clone(), &presenter).await {
                Ok(p) => run_copy(options, &p.use_case, &p.settings, &presenter).await,
                Err(code) => code,
            }
        }
    }
}

async fn open(
    config_file: &XdgConfigStore,
    storage_path: Option<PathBuf>,
    presenter: &Presenter,
) -> Result<Pipeline, ExitCode> {
    Pipeline::open(config_file, storage_path).await.map_err(|e| {
        presenter.error(&e.to_string());
        ExitCode::from(EXIT_ERROR)
    })
}
