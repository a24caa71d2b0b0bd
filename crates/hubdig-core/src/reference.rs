use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Docker Hub author used when a reference names no author
pub const DEFAULT_AUTHOR: &str = "library";

/// Tag used when a reference names no tag
pub const DEFAULT_TAG: &str = "latest";

/// Parsed image reference: author, name, and tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageReference {
    /// Repository author (e.g., "library", "linuxserver")
    pub author: String,
    /// Image name (e.g., "python", "qbittorrent")
    pub name: String,
    /// Tag (e.g., "latest", "slim-buster")
    pub tag: String,
}

impl ImageReference {
    /// Parse an image reference string like "python", "library/python" or
    /// "linuxserver/qbittorrent:20.04.1".
    ///
    /// A single segment gets the "library" author; more than two
    /// `/`-separated segments is an error. The tag is split off the name on
    /// `:` only when that yields exactly two pieces; a name with zero or
    /// several colons keeps the "latest" tag rather than erroring.
    pub fn parse(input: &str) -> Result<Self> {
        if input.is_empty() {
            return Err(Error::NoImageSpecified);
        }

        let chunks: Vec<&str> = input.split('/').collect();
        let (author, name) = match chunks.as_slice() {
            [name] => (DEFAULT_AUTHOR, *name),
            [author, name] => (*author, *name),
            _ => return Err(Error::InvalidImageFormat),
        };

        let name_chunks: Vec<&str> = name.split(':').collect();
        let (name, tag) = match name_chunks.as_slice() {
            [bare_name, explicit_tag] => (*bare_name, *explicit_tag),
            _ => (name, DEFAULT_TAG),
        };

        Ok(Self {
            author: author.to_string(),
            name: name.to_string(),
            tag: tag.to_string(),
        })
    }
}

impl fmt::Display for ImageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}:{}", self.author, self.name, self.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_segment() {
        let img = ImageReference::parse("python").unwrap();
        assert_eq!(img.author, "library");
        assert_eq!(img.name, "python");
        assert_eq!(img.tag, "latest");
    }

    #[test]
    fn test_parse_single_segment_with_tag() {
        let img = ImageReference::parse("python:slim-buster").unwrap();
        assert_eq!(img.author, "library");
        assert_eq!(img.name, "python");
        assert_eq!(img.tag, "slim-buster");
    }

    #[test]
    fn test_parse_author_and_name() {
        let img = ImageReference::parse("linuxserver/qbittorrent").unwrap();
        assert_eq!(img.author, "linuxserver");
        assert_eq!(img.name, "qbittorrent");
        assert_eq!(img.tag, "latest");
    }

    #[test]
    fn test_parse_author_name_tag() {
        let img = ImageReference::parse("linuxserver/qbittorrent:20.04.1").unwrap();
        assert_eq!(img.author, "linuxserver");
        assert_eq!(img.name, "qbittorrent");
        assert_eq!(img.tag, "20.04.1");
    }

    #[test]
    fn test_parse_too_many_segments() {
        let err = ImageReference::parse("no/such/image").unwrap_err();
        assert_eq!(err.to_string(), "Invalid image format");
    }

    #[test]
    fn test_parse_empty_input() {
        let err = ImageReference::parse("").unwrap_err();
        assert_eq!(err.to_string(), "No image specified");
    }

    #[test]
    fn test_parse_multiple_colons_keeps_default_tag() {
        // A malformed tag suffix is treated as "no explicit tag", not an error
        let img = ImageReference::parse("python:3.12:extra").unwrap();
        assert_eq!(img.name, "python:3.12:extra");
        assert_eq!(img.tag, "latest");
    }

    #[test]
    fn test_display() {
        let img = ImageReference::parse("nginx:1.25").unwrap();
        assert_eq!(format!("{}", img), "library/nginx:1.25");
    }
}
