use crate::error::{Error, Result};
use crate::registry::TagPageFetcher;
use crate::types::{
    PageOutcome, ResolutionResult, ResolutionTarget, TagPage, FALLBACK_ARCHITECTURE,
    FALLBACK_TRIGGER_ARCHITECTURE,
};
use tracing::debug;

/// Resolves an image reference to its manifest digest and tag metadata by
/// paginating the registry's tag listing
pub struct MetadataResolver<F: TagPageFetcher> {
    fetcher: F,
}

impl<F: TagPageFetcher> MetadataResolver<F> {
    /// Create a new metadata resolver
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Resolve a target to the first matching platform variant.
    ///
    /// Pages are searched in order up to `target.page_limit`. When the
    /// requested architecture is exactly "arm64/v8" and the first pass finds
    /// nothing, the search restarts from page 1 with the relaxed "arm64"
    /// architecture, os unchanged.
    ///
    /// # Returns
    /// The matched digest plus the tag record and variant it came from
    pub async fn resolve(&self, target: &ResolutionTarget) -> Result<ResolutionResult> {
        if let Some(result) = self.search(target, &target.architecture).await? {
            return Ok(result);
        }

        if target.architecture == FALLBACK_TRIGGER_ARCHITECTURE {
            debug!(
                "No match for architecture {}; retrying as {}",
                target.architecture, FALLBACK_ARCHITECTURE
            );
            if let Some(result) = self.search(target, FALLBACK_ARCHITECTURE).await? {
                return Ok(result);
            }
            return Err(Error::TagNotFoundEvenArm64);
        }

        Err(Error::TagNotFound)
    }

    /// One search pass: walk pages 1..=page_limit until a match, a page
    /// without a next link, or the limit itself stops the walk
    async fn search(
        &self,
        target: &ResolutionTarget,
        architecture: &str,
    ) -> Result<Option<ResolutionResult>> {
        let reference = &target.reference;
        let mut page = 1;

        while page <= target.page_limit {
            let body = self
                .fetcher
                .fetch_page(&reference.author, &reference.name, &reference.tag, page)
                .await?;

            match match_page(&body, &reference.tag, &target.os, architecture)? {
                PageOutcome::Found(result) => {
                    debug!(
                        "Resolved {} to {} on page {}",
                        reference, result.digest, page
                    );
                    return Ok(Some(result));
                }
                PageOutcome::NotFoundContinue => page += 1,
                PageOutcome::NotFoundExhausted => return Ok(None),
            }
        }

        Ok(None)
    }
}

/// Match one tag-list page body against the wanted tag/os/architecture.
///
/// The first variant matching both os and effective architecture, in
/// registry document order, wins. When nothing matches, the page's `next`
/// link decides between continuing and exhaustion.
pub fn match_page(body: &str, tag: &str, os: &str, architecture: &str) -> Result<PageOutcome> {
    let page: TagPage = serde_json::from_str(body)?;

    for record in &page.results {
        if record.name != tag {
            continue;
        }

        for variant in &record.images {
            if variant.effective_architecture() != architecture || variant.os != os {
                continue;
            }

            return Ok(PageOutcome::Found(ResolutionResult {
                digest: variant.digest.clone(),
                tag_metadata: record.clone(),
                final_image_metadata: variant.clone(),
            }));
        }
    }

    if page.has_next() {
        Ok(PageOutcome::NotFoundContinue)
    } else {
        Ok(PageOutcome::NotFoundExhausted)
    }
}
