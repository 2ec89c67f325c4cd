use anyhow::Context;
use bookstore_kernel::settings::Settings;
use clap::{Parser, Subcommand};

/// Command line for the bookstore API
#[derive(Debug, Parser)]
#[command(name = "bookstore", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the HTTP server
    Serve {
        /// Override `server.host`
        #[arg(long)]
        host: Option<String>,
        /// Override `server.port`
        #[arg(long)]
        port: Option<u16>,
    },
    /// Print the effective configuration as JSON
    Config,
    /// Print the method and path of every mounted route
    Routes,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut settings =
        Settings::load().with_context(|| "failed to load bookstore settings")?;

    match cli.command {
        Command::Serve { host, port } => {
            if let Some(host) = host {
                settings.server.host = host;
            }
            if let Some(port) = port {
                settings.server.port = port;
            }

            bookstore_telemetry::init(&settings.telemetry)?;
            tracing::info!(
                env = ?settings.environment,
                address = %settings.server.bind_address(),
                "bookstore serve starting"
            );
            bookstore_app::run(settings).await?;
        }
        Command::Config => {
            // Keys are secrets; print how many are configured instead.
            let mut printable = settings.clone();
            printable.auth.function_keys = printable
                .auth
                .function_keys
                .iter()
                .map(|_| "***".to_string())
                .collect();
            println!("{}", serde_json::to_string_pretty(&printable)?);
        }
        Command::Routes => {
            for line in route_lines(&settings) {
                println!("{}", line);
            }
        }
    }

    Ok(())
}

fn route_lines(settings: &Settings) -> Vec<String> {
    let prefix = settings.server.route_prefix.trim_matches('/');
    let mut lines = vec![format!("{:<7} {}", "GET", "/healthz")];

    let registry = bookstore_app::registry();
    for module in registry.modules() {
        for (method, path) in module.route_table() {
            let full = if prefix.is_empty() {
                path.to_string()
            } else {
                format!("/{}{}", prefix, path)
            };
            lines.push(format!("{:<7} {}", method, full));
        }
    }

    lines
}
