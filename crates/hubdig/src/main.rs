//! Hubdig CLI - resolve a Docker Hub image tag to its manifest digest
//!
//! This is the main entry point for the hubdig command-line interface.

mod cli;
mod inputs;
mod output;

use anyhow::Result;
use clap::Parser;
use hubdig_core::{
    HubClient, ImageReference, MetadataResolver, ResolutionTarget, DEFAULT_ARCHITECTURE,
    DEFAULT_OS,
};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize rustls crypto provider (required for rustls 0.23+)
    // This must be done before any TLS operations
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    // Parse CLI args
    let cli = Cli::parse();

    // Initialize tracing
    init_tracing(cli.verbose, cli.quiet);

    run(cli).await
}

/// Resolve inputs, run the metadata resolver, emit outputs
async fn run(cli: Cli) -> Result<()> {
    let image = inputs::required(cli.image.as_deref(), "image")?;
    let os = inputs::or_default(cli.os.as_deref(), DEFAULT_OS);
    let architecture = inputs::or_default(cli.architecture.as_deref(), DEFAULT_ARCHITECTURE);
    let page_limit = inputs::page_limit(cli.page_limit.as_deref());

    let reference = ImageReference::parse(&image)?;
    let target = ResolutionTarget::new(reference)
        .with_os(os)
        .with_architecture(architecture)
        .with_page_limit(page_limit);

    debug!(
        "Target image: author={} name={} tag={} os={} arch={} pageLimit={}",
        target.reference.author,
        target.reference.name,
        target.reference.tag,
        target.os,
        target.architecture,
        target.page_limit
    );

    let resolver = MetadataResolver::new(HubClient::with_base_url(cli.registry.as_str()));
    let result = resolver.resolve(&target).await?;

    output::emit(&result)
}

/// Initialize tracing with appropriate verbosity
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
