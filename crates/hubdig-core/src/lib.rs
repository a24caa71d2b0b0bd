//! Docker Hub tag-metadata resolution for the hubdig CLI
//!
//! This crate provides functionality for:
//! - Parsing free-form image references (author/name/tag)
//! - Paginating Docker Hub's tag-listing API
//! - Resolving a tag plus target platform to its manifest digest
//!
//! # Example
//!
//! ```no_run
//! use hubdig_core::{HubClient, ImageReference, MetadataResolver, ResolutionTarget};
//!
//! #[tokio::main]
//! async fn main() -> hubdig_core::Result<()> {
//!     let reference = ImageReference::parse("linuxserver/qbittorrent:20.04.1")?;
//!     let target = ResolutionTarget::new(reference).with_architecture("arm/v7");
//!
//!     let resolver = MetadataResolver::new(HubClient::new());
//!     let result = resolver.resolve(&target).await?;
//!
//!     println!("Resolved to: {}", result.digest);
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod reference;
pub mod registry;
pub mod resolver;
pub mod types;

// Re-export main types for convenience
pub use error::{Error, Result};
pub use reference::ImageReference;
pub use registry::{HubClient, TagPageFetcher, DOCKER_HUB_HOST};
pub use resolver::MetadataResolver;
pub use types::{
    ImageVariant, PageOutcome, ResolutionResult, ResolutionTarget, TagPage, TagRecord,
    DEFAULT_ARCHITECTURE, DEFAULT_OS, DEFAULT_PAGE_LIMIT,
};

/// Version of the hubdig-core crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        println!("hubdig-core version: {}", VERSION);
    }
}
