use flo_render_wavelet::*;
use flo_render_wavelet::curves::geo::{Coord2};

fn rectangle(left: f64, top: f64, right: f64, bottom: f64) -> Contour {
    Contour::from_lines(vec![Coord2(left, top), Coord2(right, top), Coord2(right, bottom), Coord2(left, bottom)]).unwrap()
}

fn assert_coefficients(actual: WaveletCoefficients, horizontal: f64, vertical: f64, diagonal: f64) {
    assert!((actual.horizontal - horizontal).abs() < 1e-12, "Horizontal coefficient should be {}, found {:?}", horizontal, actual);
    assert!((actual.vertical - vertical).abs() < 1e-12, "Vertical coefficient should be {}, found {:?}", vertical, actual);
    assert!((actual.diagonal - diagonal).abs() < 1e-12, "Diagonal coefficient should be {}, found {:?}", diagonal, actual);
}

#[test]
fn table_has_one_entry_per_cell() {
    let contour = rectangle(0.25, 0.25, 0.75, 0.5);

    for num_levels in 0..6 {
        let table = WaveletCoefficientTable::new(&contour, num_levels);

        assert!(table.num_levels() == num_levels);
        assert!(table.len() == ((1 << (2 * num_levels)) - 1) / 3, "{} levels should have {} cells, found {}", num_levels, ((1 << (2 * num_levels)) - 1) / 3, table.len());
    }
}

#[test]
fn left_half_has_vertical_coefficient() {
    let contour         = rectangle(0.0, 0.0, 0.5, 1.0);
    let coefficients    = WaveletCoefficientTable::compute(&contour, DyadicCell::root());

    assert_coefficients(coefficients, 0.0, 0.5, 0.0);
}

#[test]
fn lower_y_half_has_horizontal_coefficient() {
    let contour         = rectangle(0.0, 0.0, 1.0, 0.5);
    let coefficients    = WaveletCoefficientTable::compute(&contour, DyadicCell::root());

    assert_coefficients(coefficients, 0.5, 0.0, 0.0);
}

#[test]
fn first_quadrant_has_every_coefficient() {
    let contour         = rectangle(0.0, 0.0, 0.5, 0.5);
    let coefficients    = WaveletCoefficientTable::compute(&contour, DyadicCell::root());

    assert_coefficients(coefficients, 0.25, 0.25, 0.25);
}

#[test]
fn last_quadrant_has_negative_coefficients() {
    // Both the vertical and horizontal wavelets are negative here, so the diagonal one is positive
    let contour         = rectangle(0.5, 0.5, 1.0, 1.0);
    let coefficients    = WaveletCoefficientTable::compute(&contour, DyadicCell::root());

    assert_coefficients(coefficients, -0.25, -0.25, 0.25);
}

#[test]
fn whole_domain_has_no_detail() {
    let contour = rectangle(0.0, 0.0, 1.0, 1.0);
    let table   = WaveletCoefficientTable::new(&contour, 4);

    for (cell, coefficients) in table.iter() {
        assert_coefficients(coefficients, 0.0, 0.0, 0.0);
        assert!(table.get(cell) == Some(coefficients));
    }
}

#[test]
fn cell_coefficients_are_relative_to_the_cell() {
    // Coefficients are measured relative to the cell: the first quadrant of the level 1 cell at (1, 0) gives the same
    // values as the first quadrant of the root cell
    let contour         = rectangle(0.5, 0.0, 0.75, 0.25);
    let coefficients    = WaveletCoefficientTable::compute(&contour, DyadicCell::new(1, 1, 0));

    assert_coefficients(coefficients, 0.25, 0.25, 0.25);
}

#[test]
fn cells_away_from_contour_are_zero() {
    let contour = rectangle(0.0, 0.0, 0.25, 0.25);
    let table   = WaveletCoefficientTable::new(&contour, 3);

    let far_cell = table.get(DyadicCell::new(2, 3, 3)).unwrap();
    assert_coefficients(far_cell, 0.0, 0.0, 0.0);

    let near_cell = table.get(DyadicCell::new(1, 0, 0)).unwrap();
    assert_coefficients(near_cell, 0.25, 0.25, 0.25);
}

#[test]
fn table_matches_compute() {
    let contour = Contour::from_cubic_points(vec![
        Coord2(0.125, 0.125), Coord2(0.1875, 0.125), Coord2(0.875, 0.375),
        Coord2(0.875, 0.875), Coord2(0.375, 0.875), Coord2(0.125, 0.375),
    ]).unwrap();
    let table   = WaveletCoefficientTable::new(&contour, 4);

    for (cell, coefficients) in table.iter() {
        assert!(WaveletCoefficientTable::compute(&contour, cell) == coefficients, "Cell {:?} does not match", cell);
    }
}

#[test]
fn cells_beyond_the_table_are_missing() {
    let contour = rectangle(0.0, 0.0, 0.5, 0.5);
    let table   = WaveletCoefficientTable::new(&contour, 2);

    assert!(table.get(DyadicCell::new(1, 1, 1)).is_some());
    assert!(table.get(DyadicCell::new(2, 0, 0)).is_none());
}

#[test]
fn reversed_contour_negates_coefficients() {
    let contour     = Contour::from_quadratic_points(vec![Coord2(0.125, 0.5), Coord2(0.5, 0.125), Coord2(0.875, 0.5), Coord2(0.5, 0.875)]).unwrap();
    let forward     = WaveletCoefficientTable::new(&contour, 3);
    let backward    = WaveletCoefficientTable::new(&contour.reversed(), 3);

    for ((cell, forward), (_, backward)) in forward.iter().zip(backward.iter()) {
        assert!((forward.horizontal + backward.horizontal).abs() < 1e-12, "{:?}: {:?} {:?}", cell, forward, backward);
        assert!((forward.vertical + backward.vertical).abs() < 1e-12, "{:?}: {:?} {:?}", cell, forward, backward);
        assert!((forward.diagonal + backward.diagonal).abs() < 1e-12, "{:?}: {:?} {:?}", cell, forward, backward);
    }
}

#[test]
fn zero_length_section_has_no_coefficients() {
    let point   = Coord2(0.375, 0.625);
    let contour = Contour::from_sections(vec![Section::Line(point, point)]);
    let table   = WaveletCoefficientTable::new(&contour, 3);

    for (_, coefficients) in table.iter() {
        assert!(coefficients.horizontal.is_finite() && coefficients.vertical.is_finite() && coefficients.diagonal.is_finite());
        assert_coefficients(coefficients, 0.0, 0.0, 0.0);
    }
}
