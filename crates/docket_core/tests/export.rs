use docket_core::{update, DashboardState, Effect, Msg, EXPORT_FILENAME};
use pretty_assertions::assert_eq;

fn headers() -> Vec<String> {
    ["Chamber", "Day", "Committee Name", "Bill Number", "Bill Author", "Caption", "Stance"]
        .iter()
        .map(|name| name.to_string())
        .collect()
}

fn row(chamber: &str, bill: &str) -> Vec<String> {
    vec![
        chamber.to_string(),
        "Monday".to_string(),
        "Finance".to_string(),
        bill.to_string(),
        "Someone".to_string(),
        "Relating to something.".to_string(),
        String::new(),
    ]
}

fn loaded_state() -> DashboardState {
    let (state, _) = update(
        DashboardState::new(),
        Msg::DatasetLoaded {
            headers: headers(),
            rows: vec![row("House", "HB 1"), row("Senate", "SB 1")],
        },
    );
    state
}

#[test]
fn export_emits_the_full_grid_under_the_fixed_filename() {
    docket_logging::initialize_for_tests();
    let (_, effects) = update(loaded_state(), Msg::ExportClicked);

    let [Effect::WriteExport {
        filename,
        headers: exported_headers,
        rows,
    }] = effects.as_slice()
    else {
        panic!("expected exactly one export effect, got {effects:?}");
    };
    assert_eq!(filename, EXPORT_FILENAME);
    assert_eq!(*exported_headers, headers());
    assert_eq!(rows.len(), 2);
}

#[test]
fn export_covers_only_the_visible_rows() {
    docket_logging::initialize_for_tests();
    let (state, _) = update(
        loaded_state(),
        Msg::ChamberFilterChanged(vec!["Senate".to_string()]),
    );
    let (_, effects) = update(state, Msg::ExportClicked);

    let [Effect::WriteExport { rows, .. }] = effects.as_slice() else {
        panic!("expected exactly one export effect");
    };
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][3], "SB 1");
}

#[test]
fn export_carries_user_edits_verbatim() {
    docket_logging::initialize_for_tests();
    let (state, _) = update(
        loaded_state(),
        Msg::CellEdited {
            row: 0,
            column: 6,
            value: "Support, strongly".to_string(),
        },
    );
    let (_, effects) = update(state, Msg::ExportClicked);

    let [Effect::WriteExport { rows, .. }] = effects.as_slice() else {
        panic!("expected exactly one export effect");
    };
    assert_eq!(rows[0][6], "Support, strongly");
}

#[test]
fn exporting_an_empty_table_still_carries_the_headers() {
    docket_logging::initialize_for_tests();
    let (state, _) = update(
        DashboardState::new(),
        Msg::DatasetLoaded {
            headers: headers(),
            rows: Vec::new(),
        },
    );
    let (_, effects) = update(state, Msg::ExportClicked);

    let [Effect::WriteExport {
        headers: exported_headers,
        rows,
        ..
    }] = effects.as_slice()
    else {
        panic!("expected exactly one export effect");
    };
    assert_eq!(*exported_headers, headers());
    assert!(rows.is_empty());
}

#[test]
fn export_does_not_mutate_state() {
    docket_logging::initialize_for_tests();
    let before = loaded_state();
    let (after, _) = update(before.clone(), Msg::ExportClicked);
    assert_eq!(after, before);
}
