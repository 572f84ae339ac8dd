use proptest::prelude::*;
use seatkit_designer::geometry::{
    compute_clip_region, effective_seat_radius, first_free_slot, layout_seats, normalize_to_origin,
    try_place_row_at, ClipRegion, Point, RowSpan, ShapeKind, Size,
};

fn sector_220x140() -> Size {
    Size::new(220.0, 140.0)
}

#[test]
fn test_rect_clip_region() {
    let clip = compute_clip_region(ShapeKind::Rect, sector_220x140(), &[]);
    assert_eq!(
        clip,
        ClipRegion::Rect {
            width: 220.0,
            height: 140.0
        }
    );
    assert!(clip.contains(Point::new(10.0, 10.0)));
    assert!(!clip.contains(Point::new(230.0, 10.0)));
}

#[test]
fn test_ellipse_clip_region_is_centred() {
    let clip = compute_clip_region(ShapeKind::Ellipse, sector_220x140(), &[]);
    assert_eq!(
        clip,
        ClipRegion::Ellipse {
            cx: 110.0,
            cy: 70.0,
            rx: 110.0,
            ry: 70.0
        }
    );
    assert!(clip.contains(Point::new(110.0, 70.0)));
    // Corner of the bounding box is outside the ellipse.
    assert!(!clip.contains(Point::new(3.0, 3.0)));
}

#[test]
fn test_polygon_clip_region() {
    let points = vec![
        Point::new(0.0, 0.0),
        Point::new(200.0, 0.0),
        Point::new(0.0, 150.0),
    ];
    let clip = compute_clip_region(ShapeKind::Polygon, Size::new(200.0, 150.0), &points);
    assert!(clip.contains(Point::new(20.0, 20.0)));
    assert!(!clip.contains(Point::new(180.0, 140.0)));
}

#[test]
fn test_polygon_without_points_clips_to_bounds() {
    let clip = compute_clip_region(ShapeKind::Polygon, Size::new(200.0, 120.0), &[]);
    assert_eq!(
        clip,
        ClipRegion::Rect {
            width: 200.0,
            height: 120.0
        }
    );
}

#[test]
fn test_ten_seats_in_a_200_wide_row() {
    let layout = layout_seats(10, 12.0, 12.0, 12.0, 200.0, 14.0);
    assert_eq!(layout.effective_radius, 8.0);
    assert_eq!(layout.centers.len(), 10);
    assert!((layout.centers[0].x - 20.0).abs() < 1e-9);
    assert!((layout.centers[9].x - 180.0).abs() < 1e-9);

    let step = layout.centers[1].x - layout.centers[0].x;
    for pair in layout.centers.windows(2) {
        assert!((pair[1].x - pair[0].x - step).abs() < 1e-9);
        assert_eq!(pair[0].y, 14.0);
    }
}

#[test]
fn test_desired_radius_is_an_upper_bound() {
    assert_eq!(effective_seat_radius(2, 12.0, 12.0, 12.0, 400.0), 12.0);
}

#[test]
fn test_rows_fill_sector_then_report_no_space() {
    let bounds = sector_220x140();
    let mut rows = Vec::new();
    let mut placed = Vec::new();
    while let Some(y) = first_free_slot(&rows, 28.0, 6.0, bounds, 2.0) {
        placed.push(y);
        rows.push(RowSpan::new(y, 28.0));
    }
    assert_eq!(placed, vec![0.0, 34.0, 68.0, 102.0]);
    assert_eq!(first_free_slot(&rows, 28.0, 6.0, bounds, 2.0), None);
}

#[test]
fn test_free_slot_uses_interior_gap() {
    let rows = vec![RowSpan::new(0.0, 28.0), RowSpan::new(100.0, 28.0)];
    assert_eq!(
        first_free_slot(&rows, 28.0, 6.0, sector_220x140(), 2.0),
        Some(34.0)
    );
}

#[test]
fn test_free_slot_skips_gap_that_is_too_small() {
    let rows = vec![RowSpan::new(0.0, 28.0), RowSpan::new(50.0, 28.0)];
    assert_eq!(
        first_free_slot(&rows, 28.0, 6.0, sector_220x140(), 2.0),
        Some(84.0)
    );
}

#[test]
fn test_place_at_clamps_and_snaps() {
    let bounds = sector_220x140();
    assert_eq!(try_place_row_at(&[], 500.0, 28.0, 6.0, bounds, 2.0), Some(112.0));
    assert_eq!(try_place_row_at(&[], -20.0, 28.0, 6.0, bounds, 2.0), Some(0.0));
    assert_eq!(try_place_row_at(&[], 41.0, 28.0, 6.0, bounds, 2.0), Some(42.0));
}

#[test]
fn test_place_at_rejects_collisions() {
    let rows = vec![RowSpan::new(40.0, 28.0)];
    let bounds = sector_220x140();
    assert_eq!(try_place_row_at(&rows, 50.0, 28.0, 6.0, bounds, 2.0), None);
    // Touching the spacing band is still a collision.
    assert_eq!(try_place_row_at(&rows, 10.0, 28.0, 6.0, bounds, 2.0), None);
    assert_eq!(try_place_row_at(&rows, 6.0, 28.0, 6.0, bounds, 2.0), Some(6.0));
}

#[test]
fn test_row_taller_than_sector_never_fits() {
    let bounds = Size::new(220.0, 20.0);
    assert_eq!(first_free_slot(&[], 28.0, 6.0, bounds, 2.0), None);
    assert_eq!(try_place_row_at(&[], 0.0, 28.0, 6.0, bounds, 2.0), None);
}

#[test]
fn test_normalize_to_origin() {
    let (offset, points) =
        normalize_to_origin(&[Point::new(100.0, 120.0), Point::new(300.0, 100.0)]);
    assert_eq!(offset, Point::new(100.0, 100.0));
    assert_eq!(points, vec![Point::new(0.0, 20.0), Point::new(200.0, 0.0)]);
}

proptest! {
    #[test]
    fn prop_placed_rows_never_overlap(
        requests in prop::collection::vec((prop::option::of(-50.0f64..300.0), 10.0f64..60.0), 1..30),
        height in 40.0f64..400.0,
        spacing in 0.0f64..12.0,
    ) {
        let bounds = Size::new(220.0, height);
        let mut rows: Vec<RowSpan> = Vec::new();
        for (hint, row_height) in requests {
            let placed = match hint {
                Some(y0) => try_place_row_at(&rows, y0, row_height, spacing, bounds, 2.0),
                None => first_free_slot(&rows, row_height, spacing, bounds, 2.0),
            };
            if let Some(y) = placed {
                rows.push(RowSpan::new(y, row_height));
            }
        }
        for (i, a) in rows.iter().enumerate() {
            prop_assert!(a.y >= 0.0);
            prop_assert!(a.bottom() <= bounds.height + 1e-9);
            for b in rows.iter().skip(i + 1) {
                prop_assert!(
                    a.bottom() + spacing <= b.y + 1e-9 || b.bottom() + spacing <= a.y + 1e-9,
                    "rows {:?} and {:?} overlap", a, b
                );
            }
        }
    }

    #[test]
    fn prop_seats_fit_between_pads(
        seats in 1u32..40,
        radius in 2.0f64..20.0,
        width in 60.0f64..800.0,
    ) {
        let usable = width - 24.0;
        let layout = layout_seats(seats, radius, 12.0, 12.0, width, 14.0);
        let r = layout.effective_radius;
        prop_assert_eq!(layout.centers.len(), seats as usize);
        prop_assert!(r <= radius);
        if usable >= 2.0 * r * seats as f64 && seats > 1 {
            let first = layout.centers[0].x;
            let last = layout.centers[seats as usize - 1].x;
            prop_assert!(first - r >= 12.0 - 1e-9);
            prop_assert!(last + r <= width - 12.0 + 1e-9);
            for pair in layout.centers.windows(2) {
                prop_assert!(pair[1].x - pair[0].x >= 2.0 * r - 1e-9);
            }
        }
    }
}
