#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// A freshly loaded table replaces the current one.
    DatasetLoaded {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    /// User changed the Chamber multi-select; empty means unconstrained.
    ChamberFilterChanged(Vec<String>),
    /// User changed the Day multi-select.
    DayFilterChanged(Vec<String>),
    /// User changed the Committee Name multi-select.
    CommitteeFilterChanged(Vec<String>),
    /// User edited one cell of the grid (canonical row/column indices).
    CellEdited {
        row: usize,
        column: usize,
        value: String,
    },
    /// User clicked the save/export control.
    ExportClicked,
    /// Fallback for placeholder wiring.
    NoOp,
}
