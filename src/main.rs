//! dialout - terminal console for outbound voice-agent calling campaigns.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use dialout::app::Section;
use dialout::config::Config;
use dialout::{ApiClient, App};

/// Terminal console for outbound voice-agent calling campaigns.
#[derive(Parser)]
#[command(name = "dialout")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Backend base URL (overrides config and DIALOUT_BASE_URL).
    #[arg(long)]
    base_url: Option<String>,

    /// Directory scanned for lead CSV files.
    #[arg(long)]
    leads_dir: Option<PathBuf>,

    /// Section to open at startup.
    #[arg(value_enum, default_value_t = Section::Dashboard)]
    section: Section,
}

fn main() -> Result<()> {
    // Log to /tmp/dialout.log - tail with: tail -f /tmp/dialout.log
    // Set DEBUG=0-3 to control verbosity (0=off, 1=warn, 2=info, 3=debug)
    let debug_level = std::env::var("DEBUG")
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(0);

    if debug_level > 0 {
        let level = match debug_level {
            1 => tracing::Level::WARN,
            2 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        };

        let file_appender = tracing_appender::rolling::never("/tmp", "dialout.log");
        tracing_subscriber::fmt()
            .with_writer(file_appender)
            .with_max_level(level)
            .with_ansi(false)
            .init();
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Let --help and --version exit normally
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                e.exit();
            }
            // For actual errors, show error + help
            eprintln!("error: {}\n", e.kind());
            Cli::command().print_help()?;
            std::process::exit(1);
        }
    };

    let mut config = Config::load().context("Failed to load configuration")?;
    if let Ok(url) = std::env::var("DIALOUT_BASE_URL") {
        config.base_url = url;
    }
    if let Some(url) = cli.base_url {
        config.base_url = url;
    }
    if let Some(dir) = cli.leads_dir {
        config.leads_dir = dir;
    }

    let api = ApiClient::new(
        config.base_url.clone(),
        Duration::from_secs(config.request_timeout_secs),
    )
    .context("Failed to build the backend client")?;

    let app = App::new(config, cli.section);
    dialout::tui::run(app, api)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults_to_dashboard() {
        let cli = Cli::parse_from(["dialout"]);
        assert_eq!(cli.section, Section::Dashboard);
        assert!(cli.base_url.is_none());
    }

    #[test]
    fn cli_accepts_known_sections() {
        let cli = Cli::parse_from(["dialout", "create-campaign"]);
        assert_eq!(cli.section, Section::CreateCampaign);

        let cli = Cli::parse_from(["dialout", "dashboard", "--base-url", "http://host:8000"]);
        assert_eq!(cli.section, Section::Dashboard);
        assert_eq!(cli.base_url.as_deref(), Some("http://host:8000"));
    }

    #[test]
    fn cli_rejects_unknown_sections() {
        // The closed enumeration leaves no silent fallback branch.
        assert!(Cli::try_parse_from(["dialout", "settings"]).is_err());
    }
}
