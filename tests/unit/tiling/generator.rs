//! Tests for sequential and parallel tiling passes

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use vasarely::geometry::{Point, Sphere};
    use vasarely::render::surface::{DrawingSurface, FilledPolygon, PolygonBuffer};
    use vasarely::tiling::{
        TilingRegion, generate_tiling, generate_tiling_parallel, generate_tiling_parallel_with,
    };

    const COLORS: [&str; 3] = ["a", "b", "c"];

    // Records how many hexagons were reported done when each panel arrived
    struct Snapshots<'a> {
        done: &'a AtomicUsize,
        seen: Vec<usize>,
    }

    impl DrawingSurface<&str> for Snapshots<'_> {
        fn fill_polygon(&mut self, _polygon: FilledPolygon<&str>) {
            self.seen.push(self.done.load(Ordering::SeqCst));
        }
    }

    fn flat_sphere() -> Sphere {
        Sphere::new(Point::new(0.0, 0.0, 50.0), 10.0).unwrap()
    }

    fn tile(region: &TilingRegion, sphere: &Sphere) -> Vec<FilledPolygon<&'static str>> {
        let mut buffer = PolygonBuffer::new();
        generate_tiling(region, &COLORS, sphere, &mut buffer);
        buffer.into_polygons()
    }

    // Tests a degenerate region renders exactly one hexagon at the origin
    // Verified by skipping the final row
    #[test]
    fn test_single_hexagon_region() {
        let region = TilingRegion::new(0, 0, 10).unwrap();
        let polygons = tile(&region, &flat_sphere());

        assert_eq!(polygons.len(), 3);
        assert!(
            polygons
                .iter()
                .all(|p| p.vertices.contains(&Point::planar(0.0, 0.0)))
        );
    }

    // Tests every enumerated center is rendered as three panels
    // Verified by rendering only unshifted rows
    #[test]
    fn test_polygon_count_matches_enumeration() {
        let region = TilingRegion::new(0, 90, 10).unwrap();
        let polygons = tile(&region, &flat_sphere());

        assert_eq!(polygons.len(), 39 * 3);
    }

    // Tests hexagons are submitted in row-major order, panels grouped per hexagon
    // Verified by submitting all first panels before second panels
    #[test]
    fn test_submission_order() {
        let region = TilingRegion::new(0, 30, 10).unwrap();
        let polygons = tile(&region, &flat_sphere());
        let centers: Vec<Point> = region.centers().collect();

        // Upper-right panels start at their hexagon's center
        for (index, center) in centers.iter().enumerate() {
            let first = polygons.get(index * 3).unwrap();
            assert_eq!(first.vertices.first(), Some(center));
            assert_eq!(first.color, "a");
            assert_eq!(polygons.get(index * 3 + 1).unwrap().color, "b");
            assert_eq!(polygons.get(index * 3 + 2).unwrap().color, "c");
        }
    }

    // Tests the parallel pass submits exactly what the sequential pass does
    // Verified by flushing hexagons in completion order
    #[test]
    fn test_parallel_matches_sequential() {
        let region = TilingRegion::new(-120, 120, 9).unwrap();
        let sphere = Sphere::new(Point::new(10.0, -20.0, -30.0), 100.0).unwrap();

        let sequential = tile(&region, &sphere);
        let mut buffer = PolygonBuffer::new();
        generate_tiling_parallel(&region, &COLORS, &sphere, &mut buffer);

        assert_eq!(buffer.into_polygons(), sequential);
    }

    // Tests the parallel callback fires once per hexagon before any panel is flushed
    // Verified by calling back while flushing instead of while deforming
    #[test]
    fn test_parallel_reports_hexagons_while_deforming() {
        let region = TilingRegion::new(-60, 60, 7).unwrap();
        let sphere = Sphere::new(Point::new(0.0, 0.0, -10.0), 40.0).unwrap();
        let hexagons = region.hexagon_count().unwrap();
        let done = AtomicUsize::new(0);
        let mut surface = Snapshots {
            done: &done,
            seen: Vec::new(),
        };

        generate_tiling_parallel_with(&region, &COLORS, &sphere, &mut surface, || {
            done.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(done.load(Ordering::SeqCst), hexagons);
        assert_eq!(surface.seen.len(), hexagons * 3);
        assert!(surface.seen.iter().all(|&count| count == hexagons));
    }

    // Tests hexagons under the cap are lifted while distant ones stay flat
    // Verified by passing a flat sphere to the renderer
    #[test]
    fn test_sphere_is_shared_by_all_hexagons() {
        let region = TilingRegion::new(-60, 60, 10).unwrap();
        let sphere = Sphere::new(Point::new(0.0, 0.0, -10.0), 30.0).unwrap();
        let polygons = tile(&region, &sphere);

        assert!(polygons.iter().flat_map(|p| &p.vertices).any(|v| v.z > 0.0));
        assert!(
            polygons
                .iter()
                .flat_map(|p| &p.vertices)
                .any(|v| v.z.abs() < f64::EPSILON && v.x.abs() > 50.0)
        );
    }
}
