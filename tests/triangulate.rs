use approx::assert_relative_eq;
use polygeo::{Point, Winding, is_polygon_clockwise, triangulate_ear_clip};

fn shoelace_area(p: &[Point], indices: &[u32]) -> f32 {
    let mut sum = 0.0f32;
    for tri in indices.chunks(3) {
        let (a, b, c) = (
            p[tri[0] as usize],
            p[tri[1] as usize],
            p[tri[2] as usize],
        );
        sum += 0.5 * ((b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)).abs();
    }
    sum
}

#[test]
fn axis_aligned_square_triangulates_into_two_triangles_preserving_area() {
    let square = [
        Point::new(0.0, 0.0),
        Point::new(4.0, 0.0),
        Point::new(4.0, 4.0),
        Point::new(0.0, 4.0),
    ];
    assert!(is_polygon_clockwise(&square));

    let mut scratch = [0usize; 4];
    let mut out = [0u32; 6];
    let written = triangulate_ear_clip(&square, Winding::Clockwise, &mut scratch, 0, &mut out);

    assert_eq!(written, 6);
    assert_relative_eq!(shoelace_area(&square, &out), 16.0, epsilon = 1e-4);
}

#[test]
fn triangle_is_returned_as_its_own_single_triangle() {
    let tri = [Point::new(0.0, 0.0), Point::new(2.0, 0.0), Point::new(0.0, 2.0)];
    let mut scratch = [0usize; 3];
    let mut out = [0u32; 3];
    let written = triangulate_ear_clip(&tri, Winding::Clockwise, &mut scratch, 0, &mut out);

    assert_eq!(written, 3);
    let mut sorted = out.to_vec();
    sorted.sort();
    assert_eq!(sorted, vec![0, 1, 2]);
    assert_relative_eq!(shoelace_area(&tri, &out), 2.0, epsilon = 1e-4);
}

#[test]
fn concave_pentagon_triangulates_without_stalling() {
    // An arrow-shaped concave pentagon; one reflex vertex at index 4.
    let arrow = [
        Point::new(0.0, 0.0),
        Point::new(4.0, 0.0),
        Point::new(4.0, 4.0),
        Point::new(2.0, 2.0),
        Point::new(0.0, 4.0),
    ];
    let mut scratch = [0usize; 5];
    let mut out = [0u32; 9];
    let written = triangulate_ear_clip(&arrow, Winding::Clockwise, &mut scratch, 0, &mut out);

    assert_eq!(written, 9);
    assert!(shoelace_area(&arrow, &out) > 0.0);
}

#[test]
fn negative_area_input_with_counter_clockwise_winding_hint_still_triangulates() {
    let square_ccw = [
        Point::new(0.0, 0.0),
        Point::new(0.0, 1.0),
        Point::new(1.0, 1.0),
        Point::new(1.0, 0.0),
    ];
    assert!(!is_polygon_clockwise(&square_ccw));

    let mut scratch = [0usize; 4];
    let mut out = [0u32; 6];
    let written =
        triangulate_ear_clip(&square_ccw, Winding::CounterClockwise, &mut scratch, 0, &mut out);

    assert_eq!(written, 6);
    assert_relative_eq!(shoelace_area(&square_ccw, &out), 1.0, epsilon = 1e-4);
}
