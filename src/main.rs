use anyhow::Context;
use clap::{Parser, Subcommand};
use sheetview::{client_from_config, fetch_dataset, render_page, server, Config};
use sheetview_core::config::DEFAULT_SECRETS_PATH;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sheetview", about = "Google Sheets rows as a dashboard page")]
struct Cli {
    /// Log at debug level (RUST_LOG still takes precedence).
    #[arg(long, global = true)]
    debug: bool,

    /// TOML file with a [google_sheets] section; missing is fine.
    #[arg(long, global = true, default_value = DEFAULT_SECRETS_PATH)]
    secrets: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch once and write the self-contained page.
    Render {
        /// Output file (stdout when omitted).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Fetch once and print the normalised records as JSON.
    Data,
    /// Serve the page at / and the records at /data.
    Serve {
        #[arg(long)]
        host: Option<IpAddr>,
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(if cli.debug { "debug" } else { "info" })
            }),
        )
        .init();

    let config = Config::load(&cli.secrets)
        .with_context(|| format!("loading configuration ({})", cli.secrets.display()))?;
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Command::Render { output } => {
            let dataset = fetch_dataset(&config.google_sheets).await;
            if let Some(notice) = &dataset.notice {
                eprintln!("{notice}");
            }
            let html = render_page(&dataset, &config.page, chrono::Utc::now())?;
            match output {
                Some(path) => std::fs::write(&path, html)
                    .with_context(|| format!("writing {}", path.display()))?,
                None => print!("{html}"),
            }
        }
        Command::Data => {
            let dataset = fetch_dataset(&config.google_sheets).await;
            if let Some(notice) = &dataset.notice {
                eprintln!("{notice}");
            }
            println!("{}", serde_json::to_string_pretty(&dataset.records)?);
        }
        Command::Serve { host, port } => {
            let host = match host {
                Some(host) => host,
                None => config
                    .server
                    .host
                    .parse()
                    .with_context(|| format!("invalid server.host {:?}", config.server.host))?,
            };
            let addr = SocketAddr::new(host, port.unwrap_or(config.server.port));
            let state = server::AppState::from_source(
                client_from_config(&config.google_sheets),
                config.page.clone(),
            );
            server::serve(state, addr).await?;
        }
    }

    Ok(())
}
