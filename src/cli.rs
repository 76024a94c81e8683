use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Board game gateway
///
/// Serves a small JSON API over the BoardGameGeek XML API:
/// name search, game details, player-count and duration filters over the
/// current hot list, and AI-generated game explanations.
#[derive(Parser, Debug, Default)]
#[command(about, long_about = None, version)]
#[command(styles = get_styles())]
pub struct Args {
    /// Port to listen on. Overrides the config file and the PORT variable.
    #[arg(short, long, help_heading = "Server")]
    pub port: Option<u16>,

    /// Read configuration from this TOML file instead of the default location.
    #[arg(long = "config", value_name = "FILE", help_heading = "Configuration")]
    pub config_path: Option<String>,

    /// List the effective configuration and exit.
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Enable debug-level logging for this crate.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_server_flags() {
        let args = Args::parse_from([
            "boardgame_gateway",
            "--port",
            "8080",
            "--config",
            "/etc/gateway.toml",
            "--debug",
        ]);
        assert_eq!(args.port, Some(8080));
        assert_eq!(args.config_path.as_deref(), Some("/etc/gateway.toml"));
        assert!(args.debug);
        assert!(!args.list_config);
        assert!(args.log_file.is_none());
    }

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["boardgame_gateway"]);
        assert!(args.port.is_none());
        assert!(args.config_path.is_none());
        assert!(!args.debug);
    }

    #[test]
    fn test_rejects_invalid_port() {
        assert!(Args::try_parse_from(["boardgame_gateway", "--port", "99999"]).is_err());
    }
}
