/// Shared data shapes used across the plug runtime.
use serde::{Deserialize, Serialize};

/// A file handed over by the host's file picker.
///
/// Transient: created by the picker, consumed once by the upload flow,
/// then discarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadedFile {
    /// Original filename as reported by the picker.
    pub name: String,
    /// Raw file content.
    pub content: Vec<u8>,
    /// MIME type (e.g. "image/png").
    pub content_type: String,
}

impl UploadedFile {
    /// Whether the content type indicates an image.
    pub fn is_image(&self) -> bool {
        self.content_type.starts_with("image/")
    }
}

/// The editing surface currently active in the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorView {
    /// A markdown page — the only view that accepts cursor insertions.
    Page,
    /// A non-page document view (attachments, binary previews).
    Document,
}

/// How links to documents are rendered when inserted into a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkStyle {
    /// `[[path]]` internal reference.
    Wikilink,
    /// `[path](encoded-path)` inline link.
    Markdown,
}

impl LinkStyle {
    /// Parse a config value; anything other than "wikilink" is markdown style.
    pub fn from_config(value: &str) -> Self {
        if value == "wikilink" {
            LinkStyle::Wikilink
        } else {
            LinkStyle::Markdown
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_detection() {
        let file = UploadedFile {
            name: "photo.png".into(),
            content: vec![0; 4],
            content_type: "image/png".into(),
        };
        assert!(file.is_image());

        let doc = UploadedFile {
            name: "notes.pdf".into(),
            content: vec![0; 4],
            content_type: "application/pdf".into(),
        };
        assert!(!doc.is_image());
    }

    #[test]
    fn link_style_parsing() {
        assert_eq!(LinkStyle::from_config("wikilink"), LinkStyle::Wikilink);
        assert_eq!(LinkStyle::from_config("markdown"), LinkStyle::Markdown);
        assert_eq!(LinkStyle::from_config("anything-else"), LinkStyle::Markdown);
    }
}
