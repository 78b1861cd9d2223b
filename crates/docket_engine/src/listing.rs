use scraper::{Html, Selector};
use url::Url;

/// Collect meeting-detail links from a chamber listing page.
///
/// The listing marks meeting pages with hrefs ending in `.HTM`. Links are
/// returned resolved against `base`, in document order, without dedup; the
/// listing itself is the source of truth for order and multiplicity.
pub fn discover_meeting_links(html: &str, base: &Url) -> Vec<String> {
    let doc = Html::parse_document(html);
    let Ok(anchor_sel) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    doc.select(&anchor_sel)
        .filter_map(|anchor| anchor.value().attr("href"))
        .map(str::trim)
        .filter(|href| href.ends_with(".HTM"))
        .filter_map(|href| resolve(href, base))
        .collect()
}

fn resolve(href: &str, base: &Url) -> Option<String> {
    if let Ok(absolute) = Url::parse(href) {
        return Some(absolute.into());
    }
    base.join(href).ok().map(String::from)
}
