//! Line-based text heuristics for bill cells.
//!
//! Meeting pages carry no structural markup inside a bill cell; the author
//! and caption are recovered from the cell's text lines. These functions are
//! pure so the heuristic's edge cases can be exercised without any HTML.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::record::BillRecord;

const UNKNOWN_AUTHOR: &str = "Unknown";

/// Split a bill cell's non-empty text lines into (author, caption).
///
/// Line 0 is the bill-number link text. Line 1 is the author; a third line
/// that does not open with "Relating to" is a continuation of the author
/// block (co-authors wrap). The caption is everything from line 2 on,
/// including a wrapped co-author line, which the author-prefix stripping
/// and the later [`strip_author_fragments`] pass clean up.
pub fn split_author_caption(lines: &[String]) -> (String, String) {
    let author = match lines.get(1) {
        Some(line) => {
            let mut author = line.trim().to_string();
            if let Some(third) = lines.get(2) {
                if !third.starts_with("Relating to") {
                    author.push(' ');
                    author.push_str(third.trim());
                }
            }
            collapse_whitespace(&author)
        }
        None => UNKNOWN_AUTHOR.to_string(),
    };

    let caption_start = if author == UNKNOWN_AUTHOR { 1 } else { 2 };
    let joined = lines
        .iter()
        .skip(caption_start)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ");
    let caption = clean_caption(&joined, &author);

    (author, caption)
}

fn clean_caption(raw: &str, author: &str) -> String {
    let mut caption = raw.trim().to_string();

    // The cell sometimes repeats the author heading at the top of the
    // caption text. Strip the full author first, then just the first name.
    let author_full = author.replace(',', "");
    let author_full = author_full.trim();
    if !author_full.is_empty() {
        if let Some(rest) = caption.strip_prefix(author_full) {
            caption = rest.trim_start().to_string();
        }
    }
    if let Some(first_name) = author.split_whitespace().next() {
        if let Some(rest) = caption.strip_prefix(first_name) {
            caption = rest.trim_start().to_string();
        }
    }

    let caption = caption.replace('\u{a0}', " ");
    let caption = collapse_whitespace(&caption);
    caption
        .replace("Relating to Relating to", "Relating to")
        .trim()
        .to_string()
}

/// Whole-table pass: remove author-name fragments that leaked into captions.
///
/// For every record with a multi-token author, each token after the first
/// that still appears verbatim in the caption is replaced with a single
/// space, then the caption is re-trimmed. This catches the token-order
/// mismatches the prefix stripping misses. A caption word that merely
/// collides with an author token is removed too; that false positive is a
/// known limit of the heuristic.
pub fn strip_author_fragments(records: &mut [BillRecord]) {
    for record in records.iter_mut() {
        if !record.author.contains(' ') {
            continue;
        }
        let tokens: Vec<String> = record
            .author
            .split_whitespace()
            .skip(1)
            .map(str::to_string)
            .collect();
        for token in tokens {
            if record.caption.contains(&token) {
                record.caption = record.caption.replace(&token, " ").trim().to_string();
            }
        }
    }
}

fn date_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[A-Za-z]+ \d{1,2}, \d{4}").expect("date pattern"))
}

/// Pull the first `<Month> <day>, <year>` date out of free text and name
/// its weekday. Returns `None` when nothing matches or the date is bogus.
pub fn extract_weekday(text: &str) -> Option<String> {
    let matched = date_pattern().find(text)?;
    let date = NaiveDate::parse_from_str(matched.as_str(), "%B %d, %Y").ok()?;
    Some(date.format("%A").to_string())
}

pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
