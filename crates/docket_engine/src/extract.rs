use scraper::{ElementRef, Html, Selector};

use crate::heuristic::{collapse_whitespace, extract_weekday, split_author_caption};
use crate::record::{BillRecord, Chamber};

const UNKNOWN_COMMITTEE: &str = "Unknown Committee";
const UNKNOWN_DAY: &str = "Unknown";

/// Extract one [`BillRecord`] per bill cell from a meeting-detail page.
///
/// A bill cell is a `<td>` whose first hyperlink targets a `Bill=` URL. The
/// committee name and meeting day are page-level and shared by every record
/// on the page; both degrade to sentinels rather than failing the page.
pub fn extract_meeting_records(html: &str, chamber: Chamber) -> Vec<BillRecord> {
    let doc = Html::parse_document(html);
    let committee = find_committee_name(&doc);
    let day = find_meeting_day(&doc);

    let (Ok(cell_sel), Ok(link_sel)) = (Selector::parse("td"), Selector::parse("a")) else {
        return Vec::new();
    };

    let mut records = Vec::new();
    for cell in doc.select(&cell_sel) {
        let Some(link) = cell.select(&link_sel).next() else {
            continue;
        };
        let Some(href) = link.value().attr("href") else {
            continue;
        };
        if !href.contains("Bill=") {
            continue;
        }

        let bill_number = link.text().collect::<String>().trim().to_string();
        let lines = cell_text_lines(cell);
        let (author, caption) = split_author_caption(&lines);
        records.push(BillRecord::new(
            chamber,
            day.clone(),
            committee.clone(),
            bill_number,
            author,
            caption,
        ));
    }
    records
}

/// The cell's full text, broken into trimmed non-empty lines in document
/// order. Element boundaries count as line breaks.
fn cell_text_lines(cell: ElementRef<'_>) -> Vec<String> {
    cell.text()
        .flat_map(str::lines)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn find_committee_name(doc: &Html) -> String {
    let Ok(para_sel) = Selector::parse("p") else {
        return UNKNOWN_COMMITTEE.to_string();
    };
    doc.select(&para_sel)
        .map(|para| para.text().collect::<String>())
        .find(|text| text.contains("COMMITTEE:"))
        .map(|text| collapse_whitespace(text.rsplit(':').next().unwrap_or("")))
        .unwrap_or_else(|| UNKNOWN_COMMITTEE.to_string())
}

fn find_meeting_day(doc: &Html) -> String {
    let Ok(para_sel) = Selector::parse("p") else {
        return UNKNOWN_DAY.to_string();
    };
    doc.select(&para_sel)
        .map(|para| para.text().collect::<String>())
        .find(|text| text.contains("TIME & DATE:"))
        .and_then(|text| extract_weekday(&text))
        .unwrap_or_else(|| UNKNOWN_DAY.to_string())
}
