use seatkit_core::SceneError;
use seatkit_designer::geometry::{ClipRegion, Point, ShapeKind, Size};
use seatkit_designer::model::{EntityId, EntityKind, FreeShape, RowParams, ShapeGeometry};
use seatkit_designer::{Canvas, HitTarget, NodePart};

fn rect_sector(canvas: &mut Canvas) -> EntityId {
    canvas.create_sector(ShapeKind::Rect, Point::new(0.0, 0.0), Size::new(220.0, 140.0))
}

#[test]
fn test_sector_owns_exactly_one_rows_container() {
    let mut canvas = Canvas::new();
    let sector = rect_sector(&mut canvas);
    let node = canvas.node(sector).unwrap();
    assert_eq!(node.children.len(), 1);
    let container = canvas.rows_container(sector).unwrap();
    assert_eq!(canvas.kind_of(container), Some(EntityKind::RowsContainer));
    assert_eq!(
        canvas.clip_region(sector).unwrap(),
        &ClipRegion::Rect {
            width: 220.0,
            height: 140.0
        }
    );
}

#[test]
fn test_rows_placed_top_down_until_full() {
    let mut canvas = Canvas::new();
    let sector = rect_sector(&mut canvas);

    let mut ys = Vec::new();
    for _ in 0..4 {
        let row = canvas.create_row(sector, &RowParams::default()).unwrap();
        ys.push(canvas.row(row).unwrap().y);
    }
    assert_eq!(ys, vec![0.0, 34.0, 68.0, 102.0]);

    let err = canvas
        .create_row(sector, &RowParams::default())
        .unwrap_err();
    assert!(matches!(err, SceneError::NoSpace { .. }));
    assert_eq!(canvas.rows_of(sector).len(), 4);
}

#[test]
fn test_explicit_y_that_collides_is_rejected() {
    let mut canvas = Canvas::new();
    let sector = rect_sector(&mut canvas);
    canvas.create_row(sector, &RowParams::default()).unwrap();

    let params = RowParams {
        y: Some(10.0),
        ..RowParams::default()
    };
    assert!(canvas.create_row(sector, &params).unwrap_err().is_no_space());
    assert_eq!(canvas.rows_of(sector).len(), 1);
}

#[test]
fn test_row_visual_and_seats_are_derived() {
    let mut canvas = Canvas::new();
    let sector = rect_sector(&mut canvas);
    let row_id = canvas.create_row(sector, &RowParams::default()).unwrap();
    let row = canvas.row(row_id).unwrap();

    assert_eq!(row.visual.band_width, 220.0);
    assert_eq!(row.visual.band_height, 28.0);
    assert!(row.visual.label_x < 0.0);
    assert_eq!(row.visual.hit_width, 220.0 + row.visual.label_width + 16.0);
    assert_eq!(row.visual.effective_radius, 9.0);

    let seats = canvas.seats_of(row_id);
    assert_eq!(seats.len(), 10);
    assert_eq!(seats[0].index, 1);
    assert_eq!(seats[0].ticket, "General");
    assert!((seats[0].center.x - 21.0).abs() < 1e-9);
    assert!((seats[9].center.x - 199.0).abs() < 1e-9);
}

#[test]
fn test_refresh_row_leaves_siblings_alone() {
    let mut canvas = Canvas::new();
    let sector = rect_sector(&mut canvas);
    let a = canvas.create_row(sector, &RowParams::default()).unwrap();
    let b = canvas.create_row(sector, &RowParams::default()).unwrap();
    let seats_before: Vec<_> = canvas.node(b).unwrap().children.clone();

    canvas.refresh_row(a).unwrap();

    assert_eq!(canvas.node(b).unwrap().children, seats_before);
    assert_eq!(canvas.row(b).unwrap().y, 34.0);
}

#[test]
fn test_resize_refreshes_widths_without_moving_rows() {
    let mut canvas = Canvas::new();
    let sector = rect_sector(&mut canvas);
    let row = canvas.create_row(sector, &RowParams::default()).unwrap();
    let seats_before = canvas.node(row).unwrap().children.clone();

    canvas.bake_sector_scale(sector, 1.5, 1.0).unwrap();
    assert_eq!(canvas.sector(sector).unwrap().bounds, Size::new(330.0, 140.0));
    assert_eq!(canvas.row(row).unwrap().visual.band_width, 330.0);
    assert_eq!(canvas.row(row).unwrap().y, 0.0);
    // Seats still fit, so they are not regenerated.
    assert_eq!(canvas.node(row).unwrap().children, seats_before);

    canvas.bake_sector_scale(sector, 0.4, 1.0).unwrap();
    assert_eq!(canvas.row(row).unwrap().visual.effective_radius, 5.0);
    assert_ne!(canvas.node(row).unwrap().children, seats_before);

    // A radius that still fits does not keep seats stranded past the band.
    let wide = canvas.create_sector(ShapeKind::Rect, Point::new(0.0, 300.0), Size::new(400.0, 140.0));
    let params = RowParams {
        seats: 5,
        seat_radius: 6.0,
        ..RowParams::default()
    };
    let short = canvas.create_row(wide, &params).unwrap();
    let edge = |canvas: &Canvas| {
        canvas
            .seats_of(short)
            .iter()
            .map(|s| s.center.x + s.radius)
            .fold(f64::MIN, f64::max)
    };
    assert_eq!(edge(&canvas), 388.0);

    canvas.bake_sector_scale(wide, 0.5, 1.0).unwrap();
    assert_eq!(canvas.sector(wide).unwrap().bounds.width, 200.0);
    assert_eq!(canvas.row(short).unwrap().y, 0.0);
    assert_eq!(canvas.row(short).unwrap().visual.effective_radius, 6.0);
    assert_eq!(canvas.seats_of(short).len(), 5);
    assert!(edge(&canvas) <= 188.0 + 1e-9);
}

#[test]
fn test_polygon_sector_is_normalized() {
    let mut canvas = Canvas::new();
    let id = canvas
        .create_polygon_sector(&[
            Point::new(100.0, 100.0),
            Point::new(300.0, 100.0),
            Point::new(300.0, 250.0),
        ])
        .unwrap();
    let sector = canvas.sector(id).unwrap();
    assert_eq!(sector.position, Point::new(100.0, 100.0));
    assert_eq!(sector.bounds, Size::new(200.0, 150.0));
    assert_eq!(sector.shape.points()[0], Point::new(0.0, 0.0));
}

#[test]
fn test_polygon_needs_three_points() {
    let mut canvas = Canvas::new();
    let err = canvas
        .create_polygon_sector(&[Point::new(0.0, 0.0), Point::new(10.0, 0.0)])
        .unwrap_err();
    assert!(matches!(err, SceneError::PolygonTooSmall { points: 2 }));
    assert!(canvas.is_empty());
}

#[test]
fn test_moving_a_vertex_renormalizes() {
    let mut canvas = Canvas::new();
    let id = canvas
        .create_polygon_sector(&[
            Point::new(100.0, 100.0),
            Point::new(300.0, 100.0),
            Point::new(300.0, 250.0),
        ])
        .unwrap();
    let row = canvas.create_row(id, &RowParams::default()).unwrap();

    canvas
        .move_polygon_vertex(id, 0, Point::new(50.0, 80.0))
        .unwrap();
    let sector = canvas.sector(id).unwrap();
    assert_eq!(sector.position, Point::new(50.0, 80.0));
    assert_eq!(sector.bounds, Size::new(250.0, 170.0));
    assert_eq!(canvas.row(row).unwrap().y, 0.0);

    let err = canvas
        .move_polygon_vertex(id, 7, Point::new(0.0, 0.0))
        .unwrap_err();
    assert!(matches!(err, SceneError::VertexOutOfRange { index: 7, len: 3 }));
}

#[test]
fn test_vertex_editing_rejects_rect_sectors() {
    let mut canvas = Canvas::new();
    let sector = rect_sector(&mut canvas);
    assert!(canvas
        .move_polygon_vertex(sector, 0, Point::new(5.0, 5.0))
        .is_err());
}

#[test]
fn test_hit_test_parts() {
    let mut canvas = Canvas::new();
    let sector = canvas.create_sector(
        ShapeKind::Rect,
        Point::new(100.0, 100.0),
        Size::new(220.0, 140.0),
    );
    let row = canvas.create_row(sector, &RowParams::default()).unwrap();

    // Seat centre of the first seat.
    let seat_hit = canvas.hit_test(Point::new(121.0, 114.0));
    let seat_id = seat_hit.node_id().unwrap();
    assert_eq!(canvas.kind_of(seat_id), Some(EntityKind::Seat));

    // Between two seats, on the band.
    let band_x = 100.0 + 21.0 + 9.0 + 1.0;
    assert_eq!(
        canvas.hit_test(Point::new(band_x, 102.0)),
        HitTarget::node(row, NodePart::Band)
    );

    // Label sits left of the outline and is still hittable.
    assert_eq!(
        canvas.hit_test(Point::new(95.0, 114.0)),
        HitTarget::node(row, NodePart::Label)
    );

    // Below the rows, inside the sector.
    assert_eq!(
        canvas.hit_test(Point::new(200.0, 200.0)),
        HitTarget::node(sector, NodePart::Shape)
    );
    assert_eq!(canvas.hit_test(Point::new(10.0, 10.0)), HitTarget::Background);
}

#[test]
fn test_seats_outside_an_ellipse_are_not_hittable() {
    let mut canvas = Canvas::new();
    let sector = canvas.create_sector(
        ShapeKind::Ellipse,
        Point::new(0.0, 0.0),
        Size::new(220.0, 140.0),
    );
    canvas.create_row(sector, &RowParams::default()).unwrap();
    // First seat of the top row lies in the ellipse's empty corner.
    assert_eq!(canvas.hit_test(Point::new(21.0, 14.0)), HitTarget::Background);
}

#[test]
fn test_remove_drops_subtree() {
    let mut canvas = Canvas::new();
    let sector = rect_sector(&mut canvas);
    let row = canvas.create_row(sector, &RowParams::default()).unwrap();
    let seat = canvas.node(row).unwrap().children[0];
    let container = canvas.rows_container(sector).unwrap();

    assert!(canvas.remove(seat).is_err());
    assert!(canvas.remove(container).is_err());

    canvas.remove(sector).unwrap();
    assert!(canvas.is_empty());
    assert!(canvas.roots().is_empty());
}

#[test]
fn test_remove_row_only() {
    let mut canvas = Canvas::new();
    let sector = rect_sector(&mut canvas);
    let row = canvas.create_row(sector, &RowParams::default()).unwrap();
    canvas.remove(row).unwrap();
    assert!(canvas.rows_of(sector).is_empty());
    assert!(canvas.contains(sector));
    // Container plus sector.
    assert_eq!(canvas.len(), 2);
}

#[test]
fn test_snapshot_restore_round_trip() {
    let mut canvas = Canvas::new();
    let sector = rect_sector(&mut canvas);
    canvas.create_row(sector, &RowParams::default()).unwrap();
    canvas.create_row(sector, &RowParams::default()).unwrap();
    canvas
        .create_polygon_sector(&[
            Point::new(400.0, 0.0),
            Point::new(500.0, 0.0),
            Point::new(450.0, 90.0),
        ])
        .unwrap();
    let mut shape = FreeShape::new(
        ShapeGeometry::Ellipse {
            radius_x: 20.0,
            radius_y: 10.0,
        },
        Point::new(-50.0, -50.0),
    );
    shape.rotation = 15.0;
    canvas.insert_free_shape(EntityId::new(), shape);

    let snapshot = canvas.snapshot();
    let node_count = canvas.len();

    let mut restored = Canvas::new();
    restored.restore(&snapshot);
    assert_eq!(restored.snapshot(), snapshot);
    assert_eq!(restored.len(), node_count);
    assert_eq!(restored.roots(), canvas.roots());
}

#[test]
fn test_deserialize_keeps_stored_names_and_reids_duplicates() {
    let mut canvas = Canvas::new();
    let sector = rect_sector(&mut canvas);
    let data = canvas.serialize(sector).unwrap();

    let copy = canvas.deserialize(&data).unwrap();
    assert_ne!(copy, sector);
    assert_eq!(canvas.sector(copy).unwrap().title, "Sector");
    assert_eq!(canvas.sector_count(), 2);
}

#[test]
fn test_top_level_row_payload_is_rejected() {
    let mut canvas = Canvas::new();
    let sector = rect_sector(&mut canvas);
    let row = canvas.create_row(sector, &RowParams::default()).unwrap();
    let data = canvas.serialize(row).unwrap();
    assert!(matches!(
        canvas.deserialize(&data),
        Err(SceneError::InvalidPayload { .. })
    ));
}

#[test]
fn test_content_bounds() {
    let mut canvas = Canvas::new();
    assert_eq!(canvas.content_bounds(), None);
    canvas.create_sector(ShapeKind::Rect, Point::new(10.0, 20.0), Size::new(100.0, 50.0));
    canvas.create_sector(ShapeKind::Ellipse, Point::new(200.0, 0.0), Size::new(40.0, 40.0));
    assert_eq!(
        canvas.content_bounds(),
        Some((Point::new(10.0, 0.0), Point::new(240.0, 70.0)))
    );
}
