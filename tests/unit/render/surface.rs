//! Tests for the draw command list

#[cfg(test)]
mod tests {
    use vasarely::geometry::Point;
    use vasarely::render::surface::{DrawingSurface, FilledPolygon, PolygonBuffer};

    fn triangle(offset: f64) -> Vec<Point> {
        vec![
            Point::planar(offset, 0.0),
            Point::planar(offset + 1.0, 0.0),
            Point::planar(offset, 1.0),
        ]
    }

    // Tests new buffers start empty
    // Verified by pre-allocating a placeholder polygon
    #[test]
    fn test_new_buffer_is_empty() {
        let buffer: PolygonBuffer<u8> = PolygonBuffer::default();
        assert!(buffer.is_empty());
        assert_eq!(buffer.len(), 0);
        assert!(PolygonBuffer::<u8>::with_capacity(16).is_empty());
    }

    // Tests polygons keep submission order
    // Verified by inserting at the front
    #[test]
    fn test_submission_order_preserved() {
        let mut buffer = PolygonBuffer::new();
        for index in 0..5_u8 {
            buffer.fill_polygon(FilledPolygon::new(triangle(f64::from(index)), index));
        }

        assert_eq!(buffer.len(), 5);
        let colors: Vec<u8> = buffer.polygons().iter().map(|p| p.color).collect();
        assert_eq!(colors, vec![0, 1, 2, 3, 4]);
    }

    // Tests ownership transfer keeps vertices intact
    // Verified by clearing vertices on take
    #[test]
    fn test_into_polygons() {
        let mut buffer = PolygonBuffer::new();
        buffer.fill_polygon(FilledPolygon::new(triangle(2.0), "red"));

        let polygons = buffer.into_polygons();
        assert_eq!(polygons, vec![FilledPolygon::new(triangle(2.0), "red")]);
    }
}
