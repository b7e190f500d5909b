use eldview::core::grid::{GRID_COLUMNS, GRID_ROWS, build_occupancy, scatter};
use eldview::models::duty_status::DutyStatus;
use eldview::models::grid_point::GridPoint;
use eldview::models::log_entry::LogEntry;

fn entry(id: i64, start: &str, end: &str, status: DutyStatus) -> LogEntry {
    LogEntry::new(id, start, end, status, None)
}

#[test]
fn test_occupancy_simple_interval() {
    let entries = vec![entry(1, "08:00", "09:00", DutyStatus::Driving)];
    let cells = build_occupancy(&entries);

    for key in ["08:00", "08:15", "08:30", "08:45"] {
        let cell = cells.get(key).expect("cell populated");
        assert_eq!(cell.status, DutyStatus::Driving);
        assert_eq!(cell.entry_id, 1);
    }

    // end boundary is exclusive
    assert!(!cells.contains_key("09:00"));
    assert_eq!(cells.len(), 4);
}

#[test]
fn test_occupancy_keys_stay_within_day() {
    let entries = vec![
        entry(1, "00:00", "12:00", DutyStatus::OffDuty),
        entry(2, "12:00", "23:45", DutyStatus::Driving),
        entry(3, "23:45", "00:15", DutyStatus::OnDutyNotDriving),
    ];
    let cells = build_occupancy(&entries);

    for key in cells.keys() {
        assert!(key.as_str() >= "00:00" && key.as_str() <= "23:45", "key {key} out of range");
        let (h, m) = key.split_once(':').unwrap();
        assert!(h.parse::<u32>().unwrap() < 24);
        assert_eq!(m.parse::<u32>().unwrap() % 15, 0);
    }
}

#[test]
fn test_occupancy_midnight_crossing_clamps_to_end_of_day() {
    // A shift ending at 00:30 fills up to 23:45 and stops; the wrapped
    // 30 minutes after midnight are not emitted.
    let entries = vec![entry(9, "23:00", "00:30", DutyStatus::Driving)];
    let cells = build_occupancy(&entries);

    for key in ["23:00", "23:15", "23:30", "23:45"] {
        assert!(cells.contains_key(key), "missing {key}");
    }
    assert!(!cells.contains_key("00:00"));
    assert!(!cells.contains_key("00:15"));
    assert_eq!(cells.len(), 4);
}

#[test]
fn test_occupancy_overlap_last_write_wins() {
    let entries = vec![
        entry(1, "08:00", "10:00", DutyStatus::OffDuty),
        entry(2, "09:00", "10:00", DutyStatus::Driving),
    ];
    let cells = build_occupancy(&entries);

    assert_eq!(cells.get("08:30").unwrap().entry_id, 1);
    assert_eq!(cells.get("09:00").unwrap().entry_id, 2);
    assert_eq!(cells.get("09:45").unwrap().status, DutyStatus::Driving);
}

#[test]
fn test_occupancy_malformed_time_falls_back_to_midnight() {
    // "not-a-time" parses as 00:00; no error is raised
    let entries = vec![entry(1, "not-a-time", "01:00", DutyStatus::SleeperBerth)];
    let cells = build_occupancy(&entries);

    assert!(cells.contains_key("00:00"));
    assert!(cells.contains_key("00:45"));
    assert_eq!(cells.len(), 4);
}

#[test]
fn test_occupancy_carries_location() {
    let entries = vec![LogEntry::new(
        7,
        "10:00",
        "10:30",
        DutyStatus::Driving,
        Some("I-80 W"),
    )];
    let cells = build_occupancy(&entries);

    assert_eq!(cells.get("10:15").unwrap().location.as_deref(), Some("I-80 W"));
}

#[test]
fn test_scatter_places_points() {
    let points = vec![
        GridPoint::new(0, 0, 1),
        GridPoint::new(10, 7, 4),
        GridPoint::new(5, 3, 3),
    ];
    let matrix = scatter(&points);

    assert_eq!(matrix[0][0], 1);
    assert_eq!(matrix[10][7], 4);
    assert_eq!(matrix[5][3], 3);
    assert_eq!(matrix[1][1], 0);
}

#[test]
fn test_scatter_drops_out_of_bounds_points() {
    let points = vec![
        GridPoint::new(GRID_ROWS as i32, 0, 2),
        GridPoint::new(0, GRID_COLUMNS as i32, 2),
        GridPoint::new(-1, 0, 2),
        GridPoint::new(0, -1, 2),
    ];
    let matrix = scatter(&points);

    // matrix unaffected
    for row in &matrix {
        for cell in row {
            assert_eq!(*cell, 0);
        }
    }
}

#[test]
fn test_scatter_later_point_overwrites() {
    let points = vec![GridPoint::new(2, 2, 1), GridPoint::new(2, 2, 3)];
    let matrix = scatter(&points);
    assert_eq!(matrix[2][2], 3);
}

#[test]
fn test_scatter_unknown_symbol_passes_through() {
    let points = vec![GridPoint::new(4, 4, 9)];
    let matrix = scatter(&points);

    // the code is carried uninterpreted...
    assert_eq!(matrix[4][4], 9);
    // ...and renders as a blank cell
    assert_eq!(DutyStatus::from_symbol(9), None);
    let rendered = eldview::render::grid_view::render_matrix(&matrix, false);
    assert!(rendered.contains('·'));
}
