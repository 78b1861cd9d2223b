#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Write the currently displayed rows to a user-facing file, verbatim.
    WriteExport {
        filename: String,
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
}
