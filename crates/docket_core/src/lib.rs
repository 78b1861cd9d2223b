//! Docket core: pure dashboard state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{DashboardState, FilterSelection, EXPORT_FILENAME};
pub use update::update;
pub use view_model::{DashboardView, FilterOptions, RowView};
