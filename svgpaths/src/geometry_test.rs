use super::*;

fn assert_close(p: Point, x: f64, y: f64) {
    assert!(
        (p.x - x).abs() < 1e-6 && (p.y - y).abs() < 1e-6,
        "expected ({x}, {y}), got ({}, {})",
        p.x,
        p.y
    );
}

#[test]
fn parse_line_starts_at_origin() {
    let geo = parse("M0,0 L10,0").expect("parse");
    assert_eq!(geo.subpaths.len(), 1);
    assert_eq!(geo.subpaths[0].segments.len(), 1);
    assert_close(point_at(&geo, 0.0), 0.0, 0.0);
    assert_close(point_at(&geo, 1.0), 10.0, 0.0);
}

#[test]
fn parse_relative_commands_resolve_against_current_point() {
    let geo = parse("m 5 5 l 10 0 v 10 h -10").expect("parse");
    let sub = &geo.subpaths[0];
    assert_close(sub.start, 5.0, 5.0);
    assert_close(sub.segments[0].end(), 15.0, 5.0);
    assert_close(sub.segments[1].end(), 15.0, 15.0);
    assert_close(sub.segments[2].end(), 5.0, 15.0);
}

#[test]
fn parse_smooth_cubic_reflects_previous_control() {
    let geo = parse("M0,0 C 0,10 10,10 10,0 S 20,-10 20,0").expect("parse");
    let Segment::Cubic { ctrl1, .. } = geo.subpaths[0].segments[1] else {
        panic!("expected cubic");
    };
    // Reflection of (10, 10) around the current point (10, 0).
    assert_close(ctrl1, 10.0, -10.0);
}

#[test]
fn parse_smooth_cubic_without_preceding_curve_uses_current_point() {
    let geo = parse("M0,0 L10,0 S 20,10 20,0").expect("parse");
    let Segment::Cubic { ctrl1, .. } = geo.subpaths[0].segments[1] else {
        panic!("expected cubic");
    };
    assert_close(ctrl1, 10.0, 0.0);
}

#[test]
fn parse_smooth_quadratic_chain_reflects_through_each_step() {
    let geo = parse("M0,0 Q 5,10 10,0 T 20,0").expect("parse");
    let Segment::Quadratic { ctrl, .. } = geo.subpaths[0].segments[1] else {
        panic!("expected quadratic");
    };
    assert_close(ctrl, 15.0, -10.0);
}

#[test]
fn parse_close_path_adds_closing_line_and_flag() {
    let geo = parse("M0,0 L10,0 L10,10 Z").expect("parse");
    let sub = &geo.subpaths[0];
    assert!(sub.closed);
    assert_eq!(sub.segments.len(), 3);
    assert_close(sub.segments[2].end(), 0.0, 0.0);
}

#[test]
fn parse_zero_radius_arc_degrades_to_line() {
    let geo = parse("M0,0 A 0 10 0 0 1 10 0").expect("parse");
    assert!(matches!(geo.subpaths[0].segments[0], Segment::Line { .. }));
}

#[test]
fn parse_rejects_garbage() {
    assert!(parse("banana").is_err());
}

#[test]
fn parse_rejects_empty_string() {
    assert!(matches!(parse(""), Err(PathDataError::Empty)));
}

#[test]
fn point_at_lone_move_to_is_its_start_for_all_t() {
    let geo = parse("M3,4").expect("parse");
    assert_close(point_at(&geo, 0.0), 3.0, 4.0);
    assert_close(point_at(&geo, 0.7), 3.0, 4.0);
    assert_close(point_at(&geo, 1.0), 3.0, 4.0);
}

#[test]
fn point_at_midpoint_of_two_equal_lines_is_the_joint() {
    let geo = parse("M0,0 L10,0 L10,10").expect("parse");
    assert_close(point_at(&geo, 0.5), 10.0, 0.0);
}

#[test]
fn point_at_clamps_out_of_range_parameters() {
    let geo = parse("M0,0 L10,0").expect("parse");
    assert_close(point_at(&geo, -1.0), 0.0, 0.0);
    assert_close(point_at(&geo, 2.0), 10.0, 0.0);
}

#[test]
fn point_at_arc_midpoint_sits_on_the_circle() {
    // Upper half of a radius-10 circle centered at (10, 0).
    let geo = parse("M0,0 A 10 10 0 0 1 20 0").expect("parse");
    assert_close(point_at(&geo, 0.5), 10.0, -10.0);
}

#[test]
fn reverse_swaps_line_endpoints() {
    let geo = parse("M0,0 L10,0").expect("parse");
    let rev = reverse(&geo);
    assert_close(point_at(&rev, 0.0), 10.0, 0.0);
    assert_close(point_at(&rev, 1.0), 0.0, 0.0);
}

#[test]
fn reverse_swaps_cubic_control_points() {
    let geo = parse("M0,0 C 1,2 3,4 10,0").expect("parse");
    let rev = reverse(&geo);
    let Segment::Cubic {
        start,
        ctrl1,
        ctrl2,
        end,
    } = rev.subpaths[0].segments[0]
    else {
        panic!("expected cubic");
    };
    assert_close(start, 10.0, 0.0);
    assert_close(ctrl1, 3.0, 4.0);
    assert_close(ctrl2, 1.0, 2.0);
    assert_close(end, 0.0, 0.0);
}

#[test]
fn reverse_flips_arc_sweep() {
    let geo = parse("M0,0 A 10 10 0 0 1 20 0").expect("parse");
    let rev = reverse(&geo);
    let Segment::Arc { sweep, large_arc, .. } = rev.subpaths[0].segments[0] else {
        panic!("expected arc");
    };
    assert!(!sweep);
    assert!(!large_arc);
    // Same shape: the midpoint is still on the upper half.
    assert_close(point_at(&rev, 0.5), 10.0, -10.0);
}

#[test]
fn reverse_orders_subpaths_back_to_front() {
    let geo = parse("M0,0 L10,0 M20,0 L30,0").expect("parse");
    let rev = reverse(&geo);
    assert_close(rev.subpaths[0].start, 30.0, 0.0);
    assert_close(rev.subpaths[1].start, 10.0, 0.0);
}

#[test]
fn reverse_twice_restores_geometry() {
    let geo = parse("M0,0 C 1,2 3,4 10,0 Q 15,5 20,0 A 5 5 0 0 1 30 0 Z").expect("parse");
    let twice = reverse(&reverse(&geo));
    assert_eq!(twice, geo);
}

#[test]
fn to_path_data_emits_absolute_commands() {
    let geo = parse("m 0 0 l 10 0 q 5 5 10 0").expect("parse");
    assert_eq!(to_path_data(&geo), "M 0 0 L 10 0 Q 15 5 20 0");
}

#[test]
fn to_path_data_folds_closing_line_into_z() {
    let geo = parse("M0,0 L10,0 L10,10 Z").expect("parse");
    assert_eq!(to_path_data(&geo), "M 0 0 L 10 0 L 10 10 Z");
}

#[test]
fn to_path_data_round_trips_through_parse() {
    let d = "M 0 0 C 1 2 3 4 10 0 A 5 5 0 0 1 20 0 Z M 30 0 L 40 0";
    let geo = parse(d).expect("parse");
    assert_eq!(to_path_data(&geo), d);
}

#[test]
fn display_uses_six_decimal_places() {
    assert_eq!(Point::new(0.0, 0.0).display(), "(0.000000, 0.000000)");
    assert_eq!(Point::new(10.5, -2.25).display(), "(10.500000, -2.250000)");
}
