//! CLI argument parsing with clap

use clap::Parser;
use hubdig_core::DOCKER_HUB_HOST;

/// Hubdig - resolve a Docker Hub image tag to its manifest digest
///
/// Every input can also be supplied through the GitHub Actions
/// `INPUT_*` environment variables, so the binary drops into a workflow
/// step unchanged.
#[derive(Parser, Debug)]
#[command(name = "hubdig")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Image reference to resolve: name, author/name, optionally :tag
    #[arg(value_name = "IMAGE", env = "INPUT_IMAGE")]
    pub image: Option<String>,

    /// Target operating system
    #[arg(long, env = "INPUT_OS")]
    pub os: Option<String>,

    /// Target architecture; "arm64/v8" also retries as plain "arm64"
    #[arg(long, env = "INPUT_ARCHITECTURE")]
    pub architecture: Option<String>,

    /// Maximum tag-list pages fetched per search pass
    #[arg(long, env = "INPUT_PAGELIMIT")]
    pub page_limit: Option<String>,

    /// Registry host to query
    #[arg(long, default_value = DOCKER_HUB_HOST)]
    pub registry: String,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::parse_from([
            "hubdig",
            "linuxserver/qbittorrent:20.04.1",
            "--architecture",
            "arm/v7",
            "--page-limit",
            "5",
        ]);
        assert_eq!(cli.image.as_deref(), Some("linuxserver/qbittorrent:20.04.1"));
        assert_eq!(cli.architecture.as_deref(), Some("arm/v7"));
        assert_eq!(cli.page_limit.as_deref(), Some("5"));
        assert!(cli.os.is_none());
        assert_eq!(cli.registry, DOCKER_HUB_HOST);
    }

    #[test]
    fn test_cli_image_is_optional_at_parse_time() {
        // Presence is enforced later with the input-variable error message
        let cli = Cli::parse_from(["hubdig"]);
        assert!(cli.image.is_none());
    }
}
