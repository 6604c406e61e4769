use serde::{Deserialize, Serialize};

/// The six-field document returned by `GET /?url=`.
///
/// Keys serialize in PascalCase (`StatusCode`, `Name`, ...) and string fields
/// are empty rather than absent when the page does not carry the tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Metadata {
    /// Status of the outbound fetch; 0 when no response was received.
    pub status_code: u16,
    /// `og:site_name`
    pub name: String,
    /// `og:title`
    pub title: String,
    /// `og:description`
    pub description: String,
    /// `og:image`
    pub image: String,
    /// `og:url`, or the requested URL when the page has none.
    pub link: String,
}
