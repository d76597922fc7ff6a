//! Tagged classification of engine highlight fragments.

use es_client::response::HighlightMap;

/// Which highlighted field, if any, backs a summary field.
///
/// Produced by one inspection pass over a hit's highlight map and
/// consumed by one rendering pass in [`crate::summarize`]; the match
/// order inside each constructor is the selection priority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HighlightSource {
    /// No usable fragment; fall back to static source fields.
    None,
    /// Fragment for `metadata.title`.
    Title(String),
    /// Fragment for a reference (link) name.
    ReferenceName(String),
    /// Fragment for free-text document content.
    Content(String),
    /// Fragment for a reference (link) hash.
    ReferenceHash(String),
}

impl HighlightSource {
    /// Inspects the fragments relevant to titles: `metadata.title` wins
    /// over `references.name`.
    pub fn for_title(highlight: &HighlightMap) -> Self {
        if let Some(fragment) = first_fragment(highlight, "metadata.title") {
            return Self::Title(fragment.to_owned());
        }
        if let Some(fragment) = first_fragment(highlight, "references.name") {
            return Self::ReferenceName(fragment.to_owned());
        }
        Self::None
    }

    /// Inspects the fragments relevant to descriptions: document content,
    /// then link names, then link hashes.
    pub fn for_description(highlight: &HighlightMap) -> Self {
        if let Some(fragment) = first_fragment(highlight, "content") {
            return Self::Content(fragment.to_owned());
        }
        if let Some(fragment) = first_fragment(highlight, "links.Name") {
            return Self::ReferenceName(fragment.to_owned());
        }
        if let Some(fragment) = first_fragment(highlight, "links.Hash") {
            return Self::ReferenceHash(fragment.to_owned());
        }
        Self::None
    }
}

fn first_fragment<'a>(highlight: &'a HighlightMap, field: &str) -> Option<&'a str> {
    highlight
        .get(field)
        .and_then(|fragments| fragments.first())
        .map(String::as_str)
}
