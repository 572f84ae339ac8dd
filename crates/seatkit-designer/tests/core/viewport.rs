use seatkit_designer::geometry::Point;
use seatkit_designer::viewport::Viewport;

fn assert_close(a: Point, b: Point) {
    assert!(
        (a.x - b.x).abs() < 1e-6 && (a.y - b.y).abs() < 1e-6,
        "{:?} != {:?}",
        a,
        b
    );
}

#[test]
fn test_viewport_creation() {
    let vp = Viewport::new(1200.0, 800.0);
    assert_eq!(vp.scale(), 1.0);
    assert_eq!(vp.pan_x(), 0.0);
    assert_eq!(vp.pan_y(), 0.0);
    assert_eq!(vp.min_scale(), 0.2);
    assert_eq!(vp.max_scale(), 4.0);
}

#[test]
fn test_screen_world_round_trip() {
    let mut vp = Viewport::new(1200.0, 800.0);
    vp.set_scale(2.0);
    vp.set_pan(30.0, -40.0);

    let world = vp.screen_to_world(Point::new(130.0, 60.0));
    assert_close(world, Point::new(50.0, 50.0));
    assert_close(vp.world_to_screen(world), Point::new(130.0, 60.0));
}

#[test]
fn test_y_grows_downwards() {
    let vp = Viewport::new(1200.0, 800.0);
    let top = vp.world_to_screen(Point::new(0.0, 0.0));
    let below = vp.world_to_screen(Point::new(0.0, 100.0));
    assert!(below.y > top.y);
}

#[test]
fn test_scale_is_clamped() {
    let mut vp = Viewport::new(1200.0, 800.0);
    vp.set_scale(10.0);
    assert_eq!(vp.scale(), 4.0);
    vp.set_scale(0.01);
    assert_eq!(vp.scale(), 0.2);
    vp.set_scale(f64::NAN);
    assert_eq!(vp.scale(), 0.2);
}

#[test]
fn test_zoom_keeps_pivot_fixed() {
    let mut vp = Viewport::new(1200.0, 800.0);
    vp.set_pan(15.0, 25.0);
    let pivot = Point::new(400.0, 300.0);
    let before = vp.screen_to_world(pivot);

    vp.zoom_at(pivot, 2.5);
    assert_eq!(vp.scale(), 2.5);
    assert_close(vp.screen_to_world(pivot), before);
}

#[test]
fn test_wheel_direction() {
    let mut vp = Viewport::new(1200.0, 800.0);
    let pivot = Point::new(600.0, 400.0);
    vp.wheel_zoom(pivot, -120.0, 1.1);
    assert!((vp.scale() - 1.1).abs() < 1e-9);
    vp.wheel_zoom(pivot, 120.0, 1.1);
    assert!((vp.scale() - 1.0).abs() < 1e-9);
    vp.wheel_zoom(pivot, 120.0, 1.1);
    assert!(vp.scale() < 1.0);
}

#[test]
fn test_wheel_stops_at_limits() {
    let mut vp = Viewport::new(1200.0, 800.0);
    for _ in 0..100 {
        vp.wheel_zoom(Point::new(0.0, 0.0), -1.0, 1.1);
    }
    assert_eq!(vp.scale(), 4.0);
}

#[test]
fn test_fit_to_bounds_centres_content() {
    let mut vp = Viewport::new(1000.0, 500.0);
    vp.fit_to_bounds(Point::new(100.0, 100.0), Point::new(300.0, 250.0), 0.05);

    // Height is the limiting axis: 500 * 0.9 / 150.
    assert!((vp.scale() - 3.0).abs() < 1e-9);
    assert_close(
        vp.world_to_screen(Point::new(200.0, 175.0)),
        Point::new(500.0, 250.0),
    );
}

#[test]
fn test_fit_respects_max_scale() {
    let mut vp = Viewport::new(1000.0, 500.0);
    vp.fit_to_bounds(Point::new(0.0, 0.0), Point::new(10.0, 10.0), 0.05);
    assert_eq!(vp.scale(), 4.0);
}

#[test]
fn test_fit_to_empty_bounds_is_ignored() {
    let mut vp = Viewport::new(1000.0, 500.0);
    vp.fit_to_bounds(Point::new(5.0, 5.0), Point::new(5.0, 5.0), 0.05);
    assert_eq!(vp.scale(), 1.0);
}

#[test]
fn test_reset() {
    let mut vp = Viewport::new(1200.0, 800.0);
    vp.set_scale(3.0);
    vp.pan_by(10.0, 10.0);
    vp.reset();
    assert_eq!(vp.scale(), 1.0);
    assert_eq!((vp.pan_x(), vp.pan_y()), (0.0, 0.0));
}
