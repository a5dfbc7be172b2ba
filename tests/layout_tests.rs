mod common;
use common::{approx, event};
use rcalendar::core::calculator::layout::{LayoutOptions, layout, vertical_geometry};

const D: &str = "2025-03-10";

#[test]
fn test_layout_empty_day() {
    assert!(layout(&[], &LayoutOptions::default()).is_empty());
}

#[test]
fn test_layout_disjoint_events_share_column_zero() {
    let events = vec![
        event("1", "Standup", D, "09:00", "09:30"),
        event("2", "Review", D, "11:00", "12:00"),
    ];

    let out = layout(&events, &LayoutOptions::default());

    assert_eq!(out.len(), 2);
    for p in &out {
        assert_eq!(p.column, 0);
        assert_eq!(p.overlap_count, 1);
        assert!(approx(p.width_fraction, 0.95));
        assert!(approx(p.left_fraction, 0.0));
    }
}

#[test]
fn test_layout_two_overlapping_events_side_by_side() {
    let events = vec![
        event("1", "A", D, "09:00", "10:00"),
        event("2", "B", D, "09:30", "10:30"),
    ];

    let out = layout(&events, &LayoutOptions::default());

    assert_eq!(out[0].column, 0);
    assert_eq!(out[0].overlap_count, 1);
    assert!(approx(out[0].width_fraction, 0.95));

    assert_eq!(out[1].column, 1);
    assert_eq!(out[1].overlap_count, 2);
    assert!(approx(out[1].width_fraction, 0.475));
    assert!(approx(out[1].left_fraction, 0.475));
}

#[test]
fn test_layout_reuses_freed_column() {
    // A 09:00-10:00, B 09:30-10:30, C 10:15-11:00
    let events = vec![
        event("1", "A", D, "09:00", "10:00"),
        event("2", "B", D, "09:30", "10:30"),
        event("3", "C", D, "10:15", "11:00"),
    ];

    let out = layout(&events, &LayoutOptions::default());

    let cols: Vec<usize> = out.iter().map(|p| p.column).collect();
    let counts: Vec<usize> = out.iter().map(|p| p.overlap_count).collect();
    assert_eq!(cols, vec![0, 1, 0]);
    assert_eq!(counts, vec![1, 2, 2]);

    assert!(approx(out[2].width_fraction, 0.475));
    assert!(approx(out[2].left_fraction, 0.0));
}

#[test]
fn test_layout_sorts_by_start_time() {
    let events = vec![
        event("late", "Late", D, "14:00", "15:00"),
        event("early", "Early", D, "08:00", "09:00"),
    ];

    let out = layout(&events, &LayoutOptions::default());

    assert_eq!(out[0].event.id, "early");
    assert_eq!(out[1].event.id, "late");
}

#[test]
fn test_layout_ties_keep_input_order() {
    let events = vec![
        event("x", "X", D, "09:00", "10:00"),
        event("y", "Y", D, "09:00", "10:00"),
    ];

    let out = layout(&events, &LayoutOptions::default());

    assert_eq!(out[0].event.id, "x");
    assert_eq!(out[0].column, 0);
    assert_eq!(out[1].event.id, "y");
    assert_eq!(out[1].column, 1);
}

#[test]
fn test_layout_counts_stale_records_still_open() {
    // A holds column 0 until noon; B in column 1 has ended before C starts.
    let events = vec![
        event("1", "A", D, "09:00", "12:00"),
        event("2", "B", D, "09:30", "10:00"),
        event("3", "C", D, "10:30", "11:00"),
    ];

    let out = layout(&events, &LayoutOptions::default());

    assert_eq!(out[2].column, 1);
    assert_eq!(out[2].overlap_count, 2);
    assert!(approx(out[2].left_fraction, 0.475));
}

#[test]
fn test_layout_zero_length_event_alone_gets_full_width() {
    let events = vec![event("1", "Reminder", D, "09:00", "09:00")];

    let out = layout(&events, &LayoutOptions::default());

    assert_eq!(out[0].overlap_count, 1);
    assert!(approx(out[0].width_fraction, 0.95));
    assert!(approx(out[0].height, 0.0));
}

#[test]
fn test_vertical_geometry_scales_minutes() {
    let ev = event("1", "A", D, "09:00", "10:00");

    let (top, height) = vertical_geometry(&ev, &LayoutOptions::default());

    assert!(approx(top, 720.0));
    assert!(approx(height, 80.0));
}

#[test]
fn test_vertical_geometry_clamps_inverted_event() {
    let ev = event("1", "Backwards", D, "11:00", "10:00");

    let (_, height) = vertical_geometry(&ev, &LayoutOptions::default());
    assert!(approx(height, 0.0));

    let opts = LayoutOptions {
        min_height: 20.0,
        ..LayoutOptions::default()
    };
    let (_, height) = vertical_geometry(&ev, &opts);
    assert!(approx(height, 20.0));
}

#[test]
fn test_layout_respects_custom_width_budget() {
    let events = vec![
        event("1", "A", D, "09:00", "10:00"),
        event("2", "B", D, "09:00", "10:00"),
    ];
    let opts = LayoutOptions {
        width_budget: 1.0,
        ..LayoutOptions::default()
    };

    let out = layout(&events, &opts);

    assert!(approx(out[1].width_fraction, 0.5));
    assert!(approx(out[1].left_fraction, 0.5));
}
