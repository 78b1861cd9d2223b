use crate::state::EXPORT_FILENAME;
use crate::{DashboardState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: DashboardState, msg: Msg) -> (DashboardState, Vec<Effect>) {
    let effects = match msg {
        Msg::DatasetLoaded { headers, rows } => {
            state.load_table(headers, rows);
            Vec::new()
        }
        Msg::ChamberFilterChanged(selected) => {
            state.set_chambers(selected);
            Vec::new()
        }
        Msg::DayFilterChanged(selected) => {
            state.set_days(selected);
            Vec::new()
        }
        Msg::CommitteeFilterChanged(selected) => {
            state.set_committees(selected);
            Vec::new()
        }
        Msg::CellEdited { row, column, value } => {
            state.apply_edit(row, column, value);
            Vec::new()
        }
        Msg::ExportClicked => {
            // Export exactly what is on screen: the filtered rows with any
            // edits applied, no re-validation.
            let view = state.view();
            vec![Effect::WriteExport {
                filename: EXPORT_FILENAME.to_string(),
                headers: view.headers,
                rows: view.rows.into_iter().map(|row| row.cells).collect(),
            }]
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
