use scraper::{Html, Selector};

use crate::models::Metadata;

pub const OG_SITE_NAME: &str = "og:site_name";
pub const OG_TITLE: &str = "og:title";
pub const OG_DESCRIPTION: &str = "og:description";
pub const OG_IMAGE: &str = "og:image";
pub const OG_URL: &str = "og:url";

/// Scan every `<meta property=...>` in document order and copy recognized
/// Open Graph values into a fresh record.
///
/// `StatusCode` is left at 0 and `Link` holds only what `og:url` supplied;
/// both are finished by the assembler.
pub fn extract(html: &str) -> Metadata {
    let mut record = Metadata::default();
    let Ok(selector) = Selector::parse("meta[property]") else {
        return record;
    };

    let document = Html::parse_document(html);
    for element in document.select(&selector) {
        let meta = element.value();
        let Some(property) = meta.attr("property") else {
            continue;
        };
        apply(&mut record, property, meta.attr("content").unwrap_or_default());
    }
    record
}

fn apply(record: &mut Metadata, property: &str, content: &str) {
    match property {
        OG_SITE_NAME => record.name = content.to_string(),
        OG_TITLE => record.title = content.to_string(),
        OG_DESCRIPTION => record.description = content.to_string(),
        OG_IMAGE => record.image = content.to_string(),
        // First non-empty og:url wins.
        OG_URL if record.link.is_empty() => record.link = content.to_string(),
        _ => {}
    }
}
