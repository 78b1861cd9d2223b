use crate::view_model::{DashboardView, FilterOptions, RowView};

/// Fixed descriptive filename for grid exports.
pub const EXPORT_FILENAME: &str = "texas_bills_export.csv";

const CHAMBER_COLUMN: &str = "Chamber";
const DAY_COLUMN: &str = "Day";
const COMMITTEE_COLUMN: &str = "Committee Name";

/// Selected values per filter dimension. An empty list leaves that
/// dimension unconstrained; dimensions combine with AND.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSelection {
    pub chambers: Vec<String>,
    pub days: Vec<String>,
    pub committees: Vec<String>,
}

/// The dashboard's entire state: one loaded table plus the filter
/// selections. Edits mutate the rows held here and nowhere else; the
/// canonical file is never written back except through an export effect.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DashboardState {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    filters: FilterSelection,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn filters(&self) -> &FilterSelection {
        &self.filters
    }

    pub(crate) fn load_table(&mut self, headers: Vec<String>, rows: Vec<Vec<String>>) {
        self.headers = headers;
        self.rows = rows;
    }

    pub(crate) fn set_chambers(&mut self, selected: Vec<String>) {
        self.filters.chambers = selected;
    }

    pub(crate) fn set_days(&mut self, selected: Vec<String>) {
        self.filters.days = selected;
    }

    pub(crate) fn set_committees(&mut self, selected: Vec<String>) {
        self.filters.committees = selected;
    }

    /// Apply a cell edit at canonical indices. Out-of-range edits are
    /// ignored; returns whether anything changed.
    pub(crate) fn apply_edit(&mut self, row: usize, column: usize, value: String) -> bool {
        match self.rows.get_mut(row).and_then(|cells| cells.get_mut(column)) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Canonical indices of rows passing every non-empty filter dimension.
    pub fn visible_indices(&self) -> Vec<usize> {
        let dimensions = [
            (self.column_index(CHAMBER_COLUMN), &self.filters.chambers),
            (self.column_index(DAY_COLUMN), &self.filters.days),
            (self.column_index(COMMITTEE_COLUMN), &self.filters.committees),
        ];

        self.rows
            .iter()
            .enumerate()
            .filter(|(_, cells)| {
                dimensions.iter().all(|(column, selected)| {
                    if selected.is_empty() {
                        return true;
                    }
                    match column {
                        Some(column) => cells
                            .get(*column)
                            .is_some_and(|value| selected.iter().any(|choice| choice == value)),
                        // Loader guarantees the required columns; a missing
                        // column leaves its dimension unconstrained.
                        None => true,
                    }
                })
            })
            .map(|(index, _)| index)
            .collect()
    }

    /// Snapshot for rendering: visible rows plus filter options drawn from
    /// the full table (options never shrink to the filtered subset).
    pub fn view(&self) -> DashboardView {
        let rows = self
            .visible_indices()
            .into_iter()
            .map(|index| RowView {
                index,
                cells: self.rows[index].clone(),
            })
            .collect();

        DashboardView {
            headers: self.headers.clone(),
            rows,
            options: FilterOptions {
                chambers: self.column_values(CHAMBER_COLUMN),
                days: self.column_values(DAY_COLUMN),
                committees: self.column_values(COMMITTEE_COLUMN),
            },
            total_rows: self.rows.len(),
        }
    }

    /// Unique values of a column in first-appearance order.
    fn column_values(&self, name: &str) -> Vec<String> {
        let Some(column) = self.column_index(name) else {
            return Vec::new();
        };
        let mut values: Vec<String> = Vec::new();
        for cells in &self.rows {
            if let Some(value) = cells.get(column) {
                if !values.iter().any(|seen| seen == value) {
                    values.push(value.clone());
                }
            }
        }
        values
    }
}
