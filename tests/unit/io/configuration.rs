//! Tests for defaults and run configuration validation

#[cfg(test)]
mod tests {
    use vasarely::VasarelyError;
    use vasarely::geometry::Point;
    use vasarely::io::configuration::{
        BOUNDARY_TOLERANCE, DEFAULT_COLORS, DEFAULT_EDGE_LENGTH, DEFAULT_EXPORT_SIZE,
        DEFAULT_LOWER_LEFT, DEFAULT_SPHERE_RADIUS, DEFAULT_SUPERSAMPLE, DEFAULT_UPPER_RIGHT,
        OUTPUT_DIRECTORY, OUTPUT_PREFIX, RunConfig,
    };
    use vasarely::render::color::ColorToken;

    fn colors() -> [ColorToken; 3] {
        DEFAULT_COLORS.map(|name| name.parse().unwrap())
    }

    fn rejected_parameter(result: vasarely::Result<RunConfig>) -> &'static str {
        match result {
            Err(VasarelyError::InvalidConfiguration { parameter, .. }) => parameter,
            other => unreachable!("expected a configuration error, got {other:?}"),
        }
    }

    // Tests the default run is itself a valid configuration
    // Verified by setting the default edge length to zero
    #[test]
    fn test_defaults_are_valid() {
        let config = RunConfig::new(
            DEFAULT_LOWER_LEFT,
            DEFAULT_UPPER_RIGHT,
            DEFAULT_EDGE_LENGTH,
            colors(),
            [0, 0, -50],
            DEFAULT_SPHERE_RADIUS,
        );
        assert!(config.is_ok());
    }

    // Tests export defaults match the 1024 pixel box
    // Verified by changing the box size
    #[test]
    fn test_export_defaults() {
        assert_eq!(DEFAULT_EXPORT_SIZE, 1024);
        assert!(DEFAULT_SUPERSAMPLE >= 1);
        assert_eq!(OUTPUT_DIRECTORY, "exports");
        assert_eq!(OUTPUT_PREFIX, "Vasarely");
        assert!(BOUNDARY_TOLERANCE > 0.0 && BOUNDARY_TOLERANCE < 1e-6);
    }

    // Tests accessors expose the validated values
    // Verified by storing the radius as the edge length
    #[test]
    fn test_accessors() {
        let config = RunConfig::new(-10, 40, 7, colors(), [3, -4, 5], 12).unwrap();

        assert_eq!(config.region().lower_left(), -10);
        assert_eq!(config.region().upper_right(), 40);
        assert_eq!(config.region().edge_length(), 7);
        assert_eq!(config.sphere_center(), [3, -4, 5]);
        assert_eq!(config.sphere_radius(), 12);
        assert_eq!(config.sphere().center(), Point::new(3.0, -4.0, 5.0));
        assert!((config.sphere().radius() - 12.0).abs() < f64::EPSILON);
        assert_eq!(config.colors(), &colors());
    }

    // Tests non-positive edge lengths fail fast
    // Verified by only rejecting negative lengths
    #[test]
    fn test_rejects_edge_length() {
        assert_eq!(
            rejected_parameter(RunConfig::new(0, 10, 0, colors(), [0, 0, 0], 5)),
            "edge_length"
        );
        assert_eq!(
            rejected_parameter(RunConfig::new(0, 10, -4, colors(), [0, 0, 0], 5)),
            "edge_length"
        );
    }

    // Tests non-positive radii fail fast
    // Verified by skipping the radius check
    #[test]
    fn test_rejects_radius() {
        assert_eq!(
            rejected_parameter(RunConfig::new(0, 10, 2, colors(), [0, 0, 0], 0)),
            "sphere_radius"
        );
        assert_eq!(
            rejected_parameter(RunConfig::new(0, 10, 2, colors(), [0, 0, 0], -1)),
            "sphere_radius"
        );
    }

    // Tests the upper bound must be strictly above the lower bound
    // Verified by allowing equal bounds
    #[test]
    fn test_rejects_bounds() {
        assert_eq!(
            rejected_parameter(RunConfig::new(10, 10, 2, colors(), [0, 0, 0], 5)),
            "upper_right"
        );
        assert_eq!(
            rejected_parameter(RunConfig::new(10, -10, 2, colors(), [0, 0, 0], 5)),
            "upper_right"
        );
    }

    // Tests the panel count is three per hexagon
    // Verified by counting one panel per hexagon
    #[test]
    fn test_panel_count() {
        let config = RunConfig::new(0, 90, 10, colors(), [0, 0, -5], 20).unwrap();
        assert_eq!(config.panel_count(), 39 * 3);
    }

    // Tests a region whose panel count overflows is rejected up front
    // Verified by multiplying the hexagon count without a check
    #[test]
    fn test_rejects_uncountable_region() {
        assert_eq!(
            rejected_parameter(RunConfig::new(i32::MIN, i32::MAX, 1, colors(), [0, 0, 0], 5)),
            "edge_length"
        );
    }
}
