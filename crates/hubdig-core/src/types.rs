use crate::reference::ImageReference;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Default target operating system
pub const DEFAULT_OS: &str = "linux";

/// Default target architecture
pub const DEFAULT_ARCHITECTURE: &str = "amd64";

/// Default maximum number of tag-list pages fetched per search pass
pub const DEFAULT_PAGE_LIMIT: u32 = 10;

/// Architecture string that triggers the relaxed fallback search
pub const FALLBACK_TRIGGER_ARCHITECTURE: &str = "arm64/v8";

/// Architecture substituted when the fallback search runs
pub const FALLBACK_ARCHITECTURE: &str = "arm64";

/// Immutable input to the metadata resolver: what to look for, and how far
/// to paginate before giving up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionTarget {
    /// Parsed image reference (author/name/tag)
    pub reference: ImageReference,
    /// Target operating system (e.g., "linux", "windows")
    pub os: String,
    /// Target architecture (e.g., "amd64", "arm/v7", "arm64/v8")
    pub architecture: String,
    /// Maximum pages fetched per search pass
    pub page_limit: u32,
}

impl ResolutionTarget {
    /// Create a target with the default os/architecture/page limit
    pub fn new(reference: ImageReference) -> Self {
        Self {
            reference,
            os: DEFAULT_OS.to_string(),
            architecture: DEFAULT_ARCHITECTURE.to_string(),
            page_limit: DEFAULT_PAGE_LIMIT,
        }
    }

    /// Set the target operating system
    pub fn with_os(mut self, os: impl Into<String>) -> Self {
        self.os = os.into();
        self
    }

    /// Set the target architecture
    pub fn with_architecture(mut self, architecture: impl Into<String>) -> Self {
        self.architecture = architecture.into();
        self
    }

    /// Set the page limit
    pub fn with_page_limit(mut self, page_limit: u32) -> Self {
        self.page_limit = page_limit;
        self
    }
}

/// One page of the registry's tag-list API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagPage {
    /// URL of the next page, if the registry advertises one
    #[serde(default)]
    pub next: Option<String>,
    /// Tag records on this page, in registry order
    #[serde(default)]
    pub results: Vec<TagRecord>,
}

impl TagPage {
    /// Whether the registry advertises a further page
    pub fn has_next(&self) -> bool {
        self.next.as_deref().is_some_and(|n| !n.is_empty())
    }
}

/// One tag entry from a registry page, listing all platform variants
/// published under that tag name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagRecord {
    /// Tag name (e.g., "latest", "slim-buster")
    pub name: String,
    /// Platform variants for this tag, in registry order
    #[serde(default)]
    pub images: Vec<ImageVariant>,
    /// Remaining registry-supplied fields (last_updated, tag_status, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single platform build of an image, with its own digest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageVariant {
    /// Operating system (e.g., "linux")
    #[serde(default)]
    pub os: String,
    /// Architecture (e.g., "arm64")
    #[serde(default)]
    pub architecture: String,
    /// Architecture variant (e.g., "v8") - absent for most platforms
    #[serde(default)]
    pub variant: Option<String>,
    /// Manifest digest (e.g., "sha256:abc123...")
    #[serde(default)]
    pub digest: String,
    /// Remaining registry-supplied fields (size, status, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ImageVariant {
    /// Effective architecture string: `architecture` alone, or
    /// `architecture/variant` when a variant is present
    pub fn effective_architecture(&self) -> String {
        match &self.variant {
            Some(variant) if !variant.is_empty() => {
                format!("{}/{}", self.architecture, variant)
            }
            _ => self.architecture.clone(),
        }
    }
}

/// Terminal output of a successful resolution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolutionResult {
    /// Manifest digest of the matched variant
    pub digest: String,
    /// The full tag record the variant was found under
    pub tag_metadata: TagRecord,
    /// The matched variant itself
    pub final_image_metadata: ImageVariant,
}

/// Outcome of matching a single tag-list page.
///
/// "No match on this page" and "no more pages" are independently determined
/// facts from the response body, so this is a three-way result rather than
/// a boolean.
#[derive(Debug, Clone)]
pub enum PageOutcome {
    /// Target variant found on this page
    Found(ResolutionResult),
    /// No match here, but the registry advertises a next page
    NotFoundContinue,
    /// No match here and no further pages
    NotFoundExhausted,
}
