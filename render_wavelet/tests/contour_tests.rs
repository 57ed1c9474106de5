use flo_render_wavelet::*;
use flo_render_wavelet::curves::geo::{Coord2, Coordinate2D};

fn triangle() -> Contour {
    Contour::from_lines(vec![Coord2(8.0, 8.0), Coord2(60.0, 12.0), Coord2(20.0, 28.0)]).unwrap()
}

fn circle(centre: Coord2, radius: f64) -> Contour {
    // Standard four-arc approximation of a circle
    let k           = 0.5522847498 * radius;
    let (cx, cy)    = (centre.x(), centre.y());

    Contour::from_cubic_points(vec![
        Coord2(cx + radius, cy),    Coord2(cx + radius, cy + k),    Coord2(cx + k, cy + radius),
        Coord2(cx, cy + radius),    Coord2(cx - k, cy + radius),    Coord2(cx - radius, cy + k),
        Coord2(cx - radius, cy),    Coord2(cx - radius, cy - k),    Coord2(cx - k, cy - radius),
        Coord2(cx, cy - radius),    Coord2(cx + k, cy - radius),    Coord2(cx + radius, cy - k),
    ]).unwrap()
}

#[test]
fn triangle_area() {
    let area = triangle().total_area();

    assert!((area - 496.0).abs() < 1e-9, "Area should be 496, was {}", area);
}

#[test]
fn reversed_contour_has_negative_area() {
    let area = triangle().reversed().total_area();

    assert!((area + 496.0).abs() < 1e-9, "Area should be -496, was {}", area);
}

#[test]
fn repeated_closing_point_is_ignored() {
    let closed = Contour::from_lines(vec![Coord2(8.0, 8.0), Coord2(60.0, 12.0), Coord2(20.0, 28.0), Coord2(8.0, 8.0)]).unwrap();

    assert!(closed.len() == 3, "Should be 3 sections, found {}", closed.len());
    assert!(closed == triangle());
}

#[test]
fn polygon_sections_join_up() {
    let triangle = triangle();
    let sections = triangle.sections();

    for idx in 0..sections.len() {
        let next = &sections[(idx + 1) % sections.len()];
        assert!(sections[idx].end_point() == next.start_point(), "Section {} does not join section {}", idx, (idx + 1) % sections.len());
    }
}

#[test]
fn quadratic_contour_closes_back_to_start() {
    let lens = Contour::from_quadratic_points(vec![Coord2(8.0, 32.0), Coord2(32.0, 8.0), Coord2(56.0, 32.0), Coord2(32.0, 56.0)]).unwrap();

    assert!(lens.len() == 2);
    assert!(lens.sections()[0] == Section::Quadratic(Coord2(8.0, 32.0), Coord2(32.0, 8.0), Coord2(56.0, 32.0)));
    assert!(lens.sections()[1] == Section::Quadratic(Coord2(56.0, 32.0), Coord2(32.0, 56.0), Coord2(8.0, 32.0)));
}

#[test]
fn quadratic_lens_area() {
    // Each half of the lens is a parabolic segment with a base of 48 and a height of 12 (half the control point offset)
    let lens = Contour::from_quadratic_points(vec![Coord2(8.0, 32.0), Coord2(32.0, 8.0), Coord2(56.0, 32.0), Coord2(32.0, 56.0)]).unwrap();
    let area = lens.total_area().abs();

    assert!((area - 2.0 * (2.0/3.0) * 48.0 * 12.0).abs() < 1e-9, "Area was {}", area);
}

#[test]
fn cubic_circle_area() {
    let radius  = 10.0;
    let area    = circle(Coord2(20.0, 20.0), radius).total_area();

    assert!((area - std::f64::consts::PI * radius * radius).abs() < 0.5, "Area was {}", area);
}

#[test]
fn quadratic_contour_needs_pairs_of_points() {
    let result = Contour::from_quadratic_points(vec![Coord2(0.0, 0.0), Coord2(1.0, 0.0), Coord2(1.0, 1.0)]);

    assert!(result == Err(ContourError::IncompleteSection { kind: "quadratic", per_section: 2, count: 3 }), "{:?}", result);
}

#[test]
fn cubic_contour_needs_triples_of_points() {
    let result = Contour::from_cubic_points(vec![Coord2(0.0, 0.0), Coord2(1.0, 0.0), Coord2(1.0, 1.0), Coord2(0.0, 1.0)]);

    assert!(result == Err(ContourError::IncompleteSection { kind: "cubic", per_section: 3, count: 4 }), "{:?}", result);
}

#[test]
fn single_point_is_not_a_contour() {
    let lines   = Contour::from_lines(vec![Coord2(1.0, 1.0)]);
    let cubic   = Contour::from_cubic_points(vec![]);

    assert!(lines == Err(ContourError::TooFewPoints { kind: "line", minimum: 2, count: 1 }), "{:?}", lines);
    assert!(cubic == Err(ContourError::TooFewPoints { kind: "cubic", minimum: 3, count: 0 }), "{:?}", cubic);
}

#[test]
fn apply_transform_moves_every_point() {
    let mut moved = triangle();
    moved.apply_transform(|point| Coord2(point.x() * 0.5 + 1.0, point.y() * 0.5 - 1.0));

    let expected = Contour::from_lines(vec![Coord2(5.0, 3.0), Coord2(31.0, 5.0), Coord2(11.0, 13.0)]).unwrap();

    assert!(moved == expected, "{:?}", moved);
    assert!((moved.total_area() - 124.0).abs() < 1e-9);
}

#[test]
fn moments_inside_quadrant_sum_to_area() {
    // A closed contour entirely inside the quadrant: the jumps cancel out and each area component is a quarter of the area
    let square  = Contour::from_lines(vec![Coord2(0.25, 0.25), Coord2(0.75, 0.25), Coord2(0.75, 0.75), Coord2(0.25, 0.75)]).unwrap();
    let total   = square.sections().iter()
        .map(|section| square.quadrant_moments(section))
        .fold(QuadrantMoments::zero(), |total, moments| total + moments);

    assert!(total.jump.x().abs() < 1e-12 && total.jump.y().abs() < 1e-12, "{:?}", total);
    assert!((total.area.x() - 0.0625).abs() < 1e-12, "{:?}", total);
    assert!((total.area.y() - 0.0625).abs() < 1e-12, "{:?}", total);
}

#[test]
fn moments_outside_quadrant_are_zero() {
    let square  = Contour::from_lines(vec![Coord2(2.0, 2.0), Coord2(3.0, 2.0), Coord2(3.0, 3.0), Coord2(2.0, 3.0)]).unwrap();

    for section in square.sections() {
        assert!(square.quadrant_moments(section) == QuadrantMoments::zero());
    }
}
