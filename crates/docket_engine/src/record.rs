use std::fmt;

use serde::Serialize;

/// Column order of the persisted dataset. The presentation layer binds on
/// these names, so order and spelling are load-bearing.
pub const ALL_COLUMNS: [&str; 8] = [
    "Chamber",
    "Day",
    "Committee Name",
    "Bill Number",
    "Bill Author",
    "Caption",
    "Stance",
    "Action",
];

/// Columns a loaded dataset must carry to be usable. `Action` is written by
/// the scraper but not required on the way back in.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "Chamber",
    "Day",
    "Committee Name",
    "Bill Number",
    "Bill Author",
    "Caption",
    "Stance",
];

/// One of the two legislative bodies tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Chamber {
    House,
    Senate,
}

impl Chamber {
    /// Scrape order: House first, then Senate.
    pub const ALL: [Chamber; 2] = [Chamber::House, Chamber::Senate];

    pub fn as_str(self) -> &'static str {
        match self {
            Chamber::House => "House",
            Chamber::Senate => "Senate",
        }
    }

    /// Query code used by the upcoming-meetings listing page.
    pub fn query_code(self) -> &'static str {
        match self {
            Chamber::House => "H",
            Chamber::Senate => "S",
        }
    }

    pub fn listing_url(self, base_url: &str) -> String {
        format!(
            "{}/Committees/MeetingsUpcoming.aspx?Chamber={}",
            base_url.trim_end_matches('/'),
            self.query_code()
        )
    }
}

impl fmt::Display for Chamber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the dataset: a single bill on a single meeting agenda.
///
/// Serde renames mirror [`ALL_COLUMNS`] so csv serialization and the
/// hand-written header agree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BillRecord {
    #[serde(rename = "Chamber")]
    pub chamber: Chamber,
    #[serde(rename = "Day")]
    pub day: String,
    #[serde(rename = "Committee Name")]
    pub committee: String,
    #[serde(rename = "Bill Number")]
    pub bill_number: String,
    #[serde(rename = "Bill Author")]
    pub author: String,
    #[serde(rename = "Caption")]
    pub caption: String,
    #[serde(rename = "Stance")]
    pub stance: String,
    #[serde(rename = "Action")]
    pub action: String,
}

impl BillRecord {
    /// Stance and Action start empty; they are manual-annotation columns.
    pub fn new(
        chamber: Chamber,
        day: impl Into<String>,
        committee: impl Into<String>,
        bill_number: impl Into<String>,
        author: impl Into<String>,
        caption: impl Into<String>,
    ) -> Self {
        Self {
            chamber,
            day: day.into(),
            committee: committee.into(),
            bill_number: bill_number.into(),
            author: author.into(),
            caption: caption.into(),
            stance: String::new(),
            action: String::new(),
        }
    }
}
