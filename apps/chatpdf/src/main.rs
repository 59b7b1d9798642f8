mod cli;
mod command;
mod config;
mod error;
mod session;

use error::WrapErr;

use clap::CommandFactory;
use clap::Parser;
use tracing::Level;

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

#[tokio::main]
async fn main() -> error::Result<()> {
    color_eyre::install()?;
    let command_line = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(log_level(command_line.verbose))
        .with_writer(std::io::stderr)
        .init();

    let Some(command) = command_line.command else {
        cli::Cli::command().print_help()?;
        return Ok(());
    };

    let cfg = config::Config::load().context("Load configuration error")?;
    tracing::debug!("configuration loaded from {}", cfg.path.display());

    let cmd: Box<dyn command::Command> = match command {
        cli::Commands::Extract { path, page } => {
            Box::new(command::ExtractCommand::new(cfg, path, page))
        }
        cli::Commands::Search { path, query, json } => {
            Box::new(command::SearchCommand::new(cfg, path, query, json))
        }
        cli::Commands::Summary { path, max_len } => {
            Box::new(command::SummaryCommand::new(cfg, path, max_len))
        }
        cli::Commands::Chat { path, responder } => {
            Box::new(command::ChatCommand::new(cfg, path, responder))
        }
    };
    cmd.execute().await?;

    Ok(())
}
