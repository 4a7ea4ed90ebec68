//! MIME type inference from file extensions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Media types recognized by [`infer_mime_type`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum MimeType {
    /// `image/png`
    Png,
    /// `image/jpeg`
    Jpeg,
    /// `text/plain`
    Text,
    /// `text/xml`
    Xml,
    /// `application/gpx+xml`
    Gpx,
    /// `application/zip`
    Zip,
    /// `text/html`
    Html,
    /// `application/json`
    Json,
    /// `application/pdf`
    Pdf,
    /// `image/gif`
    Gif,
    /// `text/css`
    Css,
    /// `image/svg+xml`
    Svg,
    /// `application/rss+xml`
    Rss,
    /// `application/atom+xml`
    Atom,
}

impl MimeType {
    /// The `type/subtype` string for this media type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Text => "text/plain",
            Self::Xml => "text/xml",
            Self::Gpx => "application/gpx+xml",
            Self::Zip => "application/zip",
            Self::Html => "text/html",
            Self::Json => "application/json",
            Self::Pdf => "application/pdf",
            Self::Gif => "image/gif",
            Self::Css => "text/css",
            Self::Svg => "image/svg+xml",
            Self::Rss => "application/rss+xml",
            Self::Atom => "application/atom+xml",
        }
    }
}

impl fmt::Display for MimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Character sets accepted by [`add_char_set`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum CharSet {
    /// `utf-8`
    #[default]
    Utf8,
    /// `us-ascii`
    Ascii,
}

impl CharSet {
    /// The charset token as it appears in a content type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Ascii => "us-ascii",
        }
    }
}

impl fmt::Display for CharSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Infer a MIME type from a file name's extension, case-insensitively.
///
/// Names without an extension (no dot) yield `None`, as do unrecognized
/// extensions.
///
/// # Examples
///
/// ```rust
/// use sundry::{MimeType, infer_mime_type};
///
/// assert_eq!(infer_mime_type("photo.JPG"), Some(MimeType::Jpeg));
/// assert_eq!(infer_mime_type("archive.tar.gz"), None);
/// assert_eq!(infer_mime_type("README"), None);
/// ```
#[must_use]
pub fn infer_mime_type(file_name: &str) -> Option<MimeType> {
    let (_, extension) = file_name.rsplit_once('.')?;
    match extension.to_ascii_lowercase().as_str() {
        "png" => Some(MimeType::Png),
        "jpg" | "jpeg" => Some(MimeType::Jpeg),
        "txt" | "text" => Some(MimeType::Text),
        "xml" => Some(MimeType::Xml),
        "gpx" => Some(MimeType::Gpx),
        "zip" => Some(MimeType::Zip),
        "htm" | "html" => Some(MimeType::Html),
        "json" => Some(MimeType::Json),
        "pdf" => Some(MimeType::Pdf),
        "gif" => Some(MimeType::Gif),
        "css" => Some(MimeType::Css),
        "svg" => Some(MimeType::Svg),
        "rss" => Some(MimeType::Rss),
        "atom" => Some(MimeType::Atom),
        _ => None,
    }
}

/// Render a content type with an explicit charset parameter.
///
/// # Examples
///
/// ```rust
/// use sundry::{CharSet, MimeType, add_char_set};
///
/// assert_eq!(
///     add_char_set(MimeType::Html, CharSet::Utf8),
///     "text/html; charset=utf-8"
/// );
/// ```
#[must_use]
pub fn add_char_set(mime: MimeType, char_set: CharSet) -> String {
    format!("{mime}; charset={char_set}")
}
