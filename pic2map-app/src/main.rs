use std::io::Write;

use anyhow::Context;
use clap::Parser;
use pic2map::{server, AppConfig};

mod cli;
mod commands;

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_logging(cli.log_level.into());

    let mut config = AppConfig::from_env().context("invalid configuration")?;

    match cli.command {
        Command::Add { directory } => {
            commands::add(&config, &directory).await?;
            Ok(())
        }
        Command::Remove { directory } => {
            commands::remove(&config, &directory).await?;
            Ok(())
        }
        Command::Count => {
            println!("{}", commands::count(&config).await?);
            Ok(())
        }
        Command::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            server::serve(config).await?;
            Ok(())
        }
    }
}

/// `LEVEL: message` lines on stderr
fn init_logging(level: log::LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .format(|buf, record| writeln!(buf, "{}: {}", record.level(), record.args()))
        .init();
}
