//! Tests for region bounds and interlocking row enumeration

#[cfg(test)]
mod tests {
    use vasarely::geometry::Point;
    use vasarely::tiling::TilingRegion;
    use vasarely::tiling::hexagon::SIN_60;

    const TOLERANCE: f64 = 1e-9;

    // Tests a degenerate region holds a single hexagon at its corner
    // Verified by using an exclusive upper bound
    #[test]
    fn test_single_point_region_has_one_hexagon() {
        let region = TilingRegion::new(0, 0, 10).unwrap();
        let centers: Vec<Point> = region.centers().collect();

        assert_eq!(centers, vec![Point::planar(0.0, 0.0)]);
        assert_eq!(region.row_count(), 1);
        assert_eq!(region.hexagon_count().unwrap(), 1);
    }

    // Tests row and column counts for a 90 unit square with edge 10
    // Verified by counting rows with a half-open range
    #[test]
    fn test_counts_for_ninety_unit_region() {
        let region = TilingRegion::new(0, 90, 10).unwrap();
        let expected_rows = (90.0 / (10.0 * SIN_60)).floor() as usize + 1;

        assert_eq!(region.row_count(), expected_rows);
        assert_eq!(region.row_count(), 11);
        for row in 0..region.row_count() {
            let expected = if row % 2 == 0 { 4 } else { 3 };
            assert_eq!(region.column_count(row), expected, "row {row}");
        }
        assert_eq!(region.hexagon_count().unwrap(), 6 * 4 + 5 * 3);
        assert_eq!(region.centers().count(), region.hexagon_count().unwrap());
    }

    // Tests the center landing exactly on the right bound is kept
    // Verified by subtracting one step from the column limit
    #[test]
    fn test_right_boundary_is_inclusive() {
        let region = TilingRegion::new(0, 90, 10).unwrap();
        let first_row: Vec<Point> = region.row_centers(0).collect();

        assert_eq!(first_row.len(), 4);
        assert!(first_row.last().is_some_and(|p| (p.x - 90.0).abs() < TOLERANCE));
    }

    // Tests the topmost row is the last one not above the upper bound
    // Verified by using an exclusive row range
    #[test]
    fn test_top_row_reaches_upper_bound() {
        let region = TilingRegion::new(0, 90, 10).unwrap();
        let top = region.row_centers(region.row_count() - 1).next().unwrap();
        assert!(top.y <= 90.0);
        assert!(top.y + region.row_spacing() > 90.0);
    }

    // Tests shifted rows start 1.5 edge lengths in and stop an edge early
    // Verified by dropping the shift on odd rows
    #[test]
    fn test_shifted_rows_interlock() {
        let region = TilingRegion::new(-30, 30, 10).unwrap();
        let even: Vec<Point> = region.row_centers(0).collect();
        let odd: Vec<Point> = region.row_centers(1).collect();

        assert_eq!(even.len(), 3);
        assert_eq!(odd.len(), 2);
        assert!(odd.first().is_some_and(|p| (p.x + 15.0).abs() < TOLERANCE));
        assert!(odd.first().is_some_and(|p| (p.y - (10.0 * SIN_60 - 30.0)).abs() < TOLERANCE));
        assert!(odd.last().is_some_and(|p| (p.x - 15.0).abs() < TOLERANCE));
    }

    // Tests centers come out row by row from the bottom, left to right
    // Verified by iterating columns in the outer loop
    #[test]
    fn test_centers_are_row_major() {
        let region = TilingRegion::new(0, 60, 10).unwrap();
        let centers: Vec<Point> = region.centers().collect();

        for pair in centers.windows(2) {
            if let [a, b] = pair {
                assert!(b.y > a.y || ((b.y - a.y).abs() < TOLERANCE && b.x > a.x));
            }
        }
    }

    // Tests regions narrower than an edge drop the shifted rows' hexagons
    // Verified by allowing negative room in shifted rows
    #[test]
    fn test_narrow_region_shifted_rows_are_empty() {
        let region = TilingRegion::new(0, 9, 10).unwrap();
        assert_eq!(region.row_count(), 2);
        assert_eq!(region.column_count(0), 1);
        assert_eq!(region.column_count(1), 0);
        assert_eq!(region.hexagon_count().unwrap(), 1);
    }

    // Tests the hexagon count agrees with summing every row
    // Verified by giving every row the unshifted column count
    #[test]
    fn test_hexagon_count_matches_rows() {
        for (lower, upper, edge) in [(0, 90, 10), (-300, 300, 20), (0, 9, 10), (-7, 55, 3)] {
            let region = TilingRegion::new(lower, upper, edge).unwrap();
            let summed: usize = (0..region.row_count())
                .map(|row| region.column_count(row))
                .sum();
            assert_eq!(region.hexagon_count(), Some(summed));
        }
    }

    // Tests the widest possible region is counted without overflowing
    // Verified by summing row counts one row at a time without checks
    #[test]
    fn test_hexagon_count_of_widest_region() {
        let region = TilingRegion::new(i32::MIN, i32::MAX, 1).unwrap();
        let count = region.hexagon_count().unwrap();

        assert!(count > 7_000_000_000_000_000_000);
        assert_eq!(count.checked_mul(3), None);
    }

    // Tests spacing helpers
    // Verified by spacing columns 2L apart
    #[test]
    fn test_spacings() {
        let region = TilingRegion::new(-5, 5, 4).unwrap();
        assert!((region.span() - 10.0).abs() < f64::EPSILON);
        assert!((region.row_spacing() - 4.0 * SIN_60).abs() < f64::EPSILON);
        assert!((region.column_spacing() - 12.0).abs() < f64::EPSILON);
        assert!((region.row_offset() - 6.0).abs() < f64::EPSILON);
        assert_eq!(region.lower_left(), -5);
        assert_eq!(region.upper_right(), 5);
        assert_eq!(region.edge_length(), 4);
    }

    // Tests invalid regions are rejected
    // Verified by accepting a zero edge length
    #[test]
    fn test_invalid_regions_rejected() {
        assert!(TilingRegion::new(0, 10, 0).is_err());
        assert!(TilingRegion::new(10, 0, 5).is_err());
    }
}
