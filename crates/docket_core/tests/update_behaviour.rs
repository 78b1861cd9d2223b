use docket_core::{update, DashboardState, Msg};
use pretty_assertions::assert_eq;

fn headers() -> Vec<String> {
    ["Chamber", "Day", "Committee Name", "Bill Number", "Bill Author", "Caption", "Stance"]
        .iter()
        .map(|name| name.to_string())
        .collect()
}

fn row(chamber: &str, day: &str, committee: &str, bill: &str) -> Vec<String> {
    vec![
        chamber.to_string(),
        day.to_string(),
        committee.to_string(),
        bill.to_string(),
        "Someone".to_string(),
        "Relating to something.".to_string(),
        String::new(),
    ]
}

fn loaded_state() -> DashboardState {
    let rows = vec![
        row("House", "Monday", "Appropriations", "HB 1"),
        row("House", "Tuesday", "State Affairs", "HB 2"),
        row("Senate", "Monday", "Finance", "SB 1"),
        row("Senate", "Tuesday", "Finance", "SB 2"),
    ];
    let (state, effects) = update(
        DashboardState::new(),
        Msg::DatasetLoaded {
            headers: headers(),
            rows,
        },
    );
    assert!(effects.is_empty());
    state
}

fn visible_bills(state: &DashboardState) -> Vec<String> {
    state
        .view()
        .rows
        .iter()
        .map(|row| row.cells[3].clone())
        .collect()
}

#[test]
fn unfiltered_view_shows_every_row() {
    docket_logging::initialize_for_tests();
    let state = loaded_state();
    let view = state.view();
    assert_eq!(view.rows.len(), 4);
    assert_eq!(view.total_rows, 4);
    assert_eq!(view.headers, headers());
}

#[test]
fn chamber_filter_keeps_only_matching_rows() {
    docket_logging::initialize_for_tests();
    let (state, _) = update(
        loaded_state(),
        Msg::ChamberFilterChanged(vec!["House".to_string()]),
    );
    assert_eq!(visible_bills(&state), vec!["HB 1", "HB 2"]);
}

#[test]
fn filters_intersect_across_dimensions() {
    docket_logging::initialize_for_tests();
    let (state, _) = update(
        loaded_state(),
        Msg::ChamberFilterChanged(vec!["Senate".to_string()]),
    );
    let (state, _) = update(state, Msg::DayFilterChanged(vec!["Monday".to_string()]));
    assert_eq!(visible_bills(&state), vec!["SB 1"]);
}

#[test]
fn multi_select_is_set_membership() {
    docket_logging::initialize_for_tests();
    let (state, _) = update(
        loaded_state(),
        Msg::DayFilterChanged(vec!["Monday".to_string(), "Tuesday".to_string()]),
    );
    assert_eq!(state.view().rows.len(), 4);
}

#[test]
fn clearing_a_filter_unconstrains_its_dimension() {
    docket_logging::initialize_for_tests();
    let (state, _) = update(
        loaded_state(),
        Msg::ChamberFilterChanged(vec!["House".to_string()]),
    );
    let (state, _) = update(state, Msg::ChamberFilterChanged(Vec::new()));
    assert_eq!(state.view().rows.len(), 4);
}

#[test]
fn unmatched_filter_value_hides_everything() {
    docket_logging::initialize_for_tests();
    let (state, _) = update(
        loaded_state(),
        Msg::CommitteeFilterChanged(vec!["Redistricting".to_string()]),
    );
    assert!(state.view().rows.is_empty());
    assert_eq!(state.view().total_rows, 4);
}

#[test]
fn filter_options_are_unique_in_first_appearance_order() {
    docket_logging::initialize_for_tests();
    let state = loaded_state();
    let options = state.view().options;
    assert_eq!(options.chambers, vec!["House", "Senate"]);
    assert_eq!(options.days, vec!["Monday", "Tuesday"]);
    assert_eq!(
        options.committees,
        vec!["Appropriations", "State Affairs", "Finance"]
    );
}

#[test]
fn options_come_from_the_full_table_not_the_filtered_view() {
    docket_logging::initialize_for_tests();
    let (state, _) = update(
        loaded_state(),
        Msg::ChamberFilterChanged(vec!["House".to_string()]),
    );
    assert_eq!(state.view().options.chambers, vec!["House", "Senate"]);
}

#[test]
fn cell_edit_lands_in_the_view() {
    docket_logging::initialize_for_tests();
    let (state, effects) = update(
        loaded_state(),
        Msg::CellEdited {
            row: 2,
            column: 6,
            value: "Oppose".to_string(),
        },
    );
    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.rows[2].cells[6], "Oppose");
}

#[test]
fn out_of_range_edit_is_ignored() {
    docket_logging::initialize_for_tests();
    let before = loaded_state();
    let (after, _) = update(
        before.clone(),
        Msg::CellEdited {
            row: 99,
            column: 0,
            value: "x".to_string(),
        },
    );
    assert_eq!(after, before);
}

#[test]
fn reload_replaces_rows_but_keeps_selections() {
    docket_logging::initialize_for_tests();
    let (state, _) = update(
        loaded_state(),
        Msg::ChamberFilterChanged(vec!["House".to_string()]),
    );
    let (state, _) = update(
        state,
        Msg::DatasetLoaded {
            headers: headers(),
            rows: vec![row("Senate", "Friday", "Finance", "SB 9")],
        },
    );
    // Selection survives the reload; the new row is not a House row.
    assert!(state.view().rows.is_empty());
    assert_eq!(state.view().total_rows, 1);
}

#[test]
fn noop_changes_nothing() {
    docket_logging::initialize_for_tests();
    let before = loaded_state();
    let (after, effects) = update(before.clone(), Msg::NoOp);
    assert!(effects.is_empty());
    assert_eq!(after, before);
}
