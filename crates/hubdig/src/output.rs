//! Output emission
//!
//! A successful run emits three outputs, in order: `digest`, `tagMetadata`,
//! `finalImageMetadata`. When `GITHUB_OUTPUT` points at a file they are
//! appended there in the Actions output format (heredoc delimiters for
//! multiline values); otherwise they are printed as `name=value` lines on
//! stdout.

use anyhow::{Context, Result};
use hubdig_core::ResolutionResult;
use std::fs::OpenOptions;
use std::io::Write;
use uuid::Uuid;

/// Emit the three resolution outputs
pub fn emit(result: &ResolutionResult) -> Result<()> {
    let outputs = [
        ("digest", result.digest.clone()),
        ("tagMetadata", serde_json::to_string(&result.tag_metadata)?),
        (
            "finalImageMetadata",
            serde_json::to_string(&result.final_image_metadata)?,
        ),
    ];

    match std::env::var("GITHUB_OUTPUT") {
        Ok(path) if !path.is_empty() => append_github_outputs(&path, &outputs),
        _ => {
            for (name, value) in &outputs {
                println!("{}={}", name, value);
            }
            Ok(())
        }
    }
}

fn append_github_outputs(path: &str, outputs: &[(&str, String)]) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open output file {}", path))?;

    for (name, value) in outputs {
        writeln!(file, "{}", format_assignment(name, value))
            .with_context(|| format!("Failed to write output '{}'", name))?;
    }

    Ok(())
}

/// Format one output assignment. Multiline values use the heredoc form with
/// a randomized delimiter that cannot occur in the value.
fn format_assignment(name: &str, value: &str) -> String {
    if value.contains('\n') {
        let delimiter = format!("ghadelimiter_{}", Uuid::new_v4());
        format!("{}<<{}\n{}\n{}", name, delimiter, value, delimiter)
    } else {
        format!("{}={}", name, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hubdig_core::{ImageVariant, TagRecord};
    use serde_json::Map;
    use serial_test::serial;

    fn sample_result() -> ResolutionResult {
        let variant = ImageVariant {
            os: "linux".to_string(),
            architecture: "amd64".to_string(),
            variant: None,
            digest: "sha256:abc123".to_string(),
            extra: Map::new(),
        };
        ResolutionResult {
            digest: variant.digest.clone(),
            tag_metadata: TagRecord {
                name: "latest".to_string(),
                images: vec![variant.clone()],
                extra: Map::new(),
            },
            final_image_metadata: variant,
        }
    }

    #[test]
    fn test_single_line_assignment() {
        assert_eq!(
            format_assignment("digest", "sha256:abc123"),
            "digest=sha256:abc123"
        );
    }

    #[test]
    fn test_multiline_value_uses_heredoc() {
        let formatted = format_assignment("tagMetadata", "line one\nline two");
        let mut lines = formatted.lines();

        let first = lines.next().unwrap();
        let delimiter = first.strip_prefix("tagMetadata<<ghadelimiter_").unwrap();
        assert!(!delimiter.is_empty());
        assert_eq!(lines.next(), Some("line one"));
        assert_eq!(lines.next(), Some("line two"));
        assert_eq!(lines.next(), Some(first.strip_prefix("tagMetadata<<").unwrap()));
    }

    #[test]
    #[serial]
    fn test_emit_appends_to_github_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("outputs.txt");
        std::env::set_var("GITHUB_OUTPUT", &path);

        emit(&sample_result()).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        std::env::remove_var("GITHUB_OUTPUT");

        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "digest=sha256:abc123");
        assert!(lines[1].starts_with("tagMetadata={"));
        assert!(lines[2].starts_with("finalImageMetadata={"));

        // Emitted metadata parses back into registry documents
        let record: TagRecord =
            serde_json::from_str(lines[1].strip_prefix("tagMetadata=").unwrap()).unwrap();
        assert_eq!(record.name, "latest");
    }

    #[test]
    #[serial]
    fn test_emit_without_github_output_goes_to_stdout() {
        std::env::remove_var("GITHUB_OUTPUT");
        // Nothing to assert on captured stdout here; just exercise the path
        emit(&sample_result()).unwrap();
    }
}
