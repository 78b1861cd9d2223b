/// One visible row, tagged with its canonical index so the presentation
/// layer can address edits back to the right row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub index: usize,
    pub cells: Vec<String>,
}

/// Values offered by the three filter dropdowns, drawn from the full table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterOptions {
    pub chambers: Vec<String>,
    pub days: Vec<String>,
    pub committees: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DashboardView {
    pub headers: Vec<String>,
    pub rows: Vec<RowView>,
    pub options: FilterOptions,
    pub total_rows: usize,
}
