use seatkit_designer::geometry::{Point, ShapeKind, Size};
use seatkit_designer::model::{EntityId, FreeShape, RowParams, ShapeGeometry};
use seatkit_designer::serialization::EntityData;
use seatkit_designer::{Anchor, Canvas, TransformKind, TransformSession};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

fn sector_at_origin(canvas: &mut Canvas) -> EntityId {
    canvas.create_sector(ShapeKind::Rect, Point::new(0.0, 0.0), Size::new(220.0, 140.0))
}

fn drag(
    canvas: &mut Canvas,
    target: EntityId,
    kind: TransformKind,
    from: Point,
    to: Point,
) -> bool {
    let mut session = TransformSession::begin(canvas, target, kind, from)
        .unwrap()
        .expect("session should start");
    session.update(canvas, to).unwrap();
    session.finish(canvas).unwrap()
}

#[test]
fn test_bottom_right_resize_keeps_rows() {
    let mut canvas = Canvas::new();
    let sector = sector_at_origin(&mut canvas);
    let row = canvas.create_row(sector, &RowParams::default()).unwrap();

    let commit = drag(
        &mut canvas,
        sector,
        TransformKind::Resize(Anchor::BottomRight),
        Point::new(220.0, 140.0),
        Point::new(320.0, 200.0),
    );
    assert!(commit);

    let s = canvas.sector(sector).unwrap();
    assert!(close(s.bounds.width, 320.0));
    assert!(close(s.bounds.height, 200.0));
    assert_eq!(s.position, Point::new(0.0, 0.0));
    assert_eq!(canvas.row(row).unwrap().y, 0.0);
    assert!(close(canvas.row(row).unwrap().visual.band_width, 320.0));
}

#[test]
fn test_left_resize_moves_origin() {
    let mut canvas = Canvas::new();
    let sector = sector_at_origin(&mut canvas);

    drag(
        &mut canvas,
        sector,
        TransformKind::Resize(Anchor::MiddleLeft),
        Point::new(0.0, 70.0),
        Point::new(-50.0, 90.0),
    );

    let s = canvas.sector(sector).unwrap();
    assert!(close(s.bounds.width, 270.0));
    assert!(close(s.bounds.height, 140.0));
    assert!(close(s.position.x, -50.0));
    assert!(close(s.position.y, 0.0));
}

#[test]
fn test_resize_respects_minimum_size() {
    let mut canvas = Canvas::new();
    let sector = sector_at_origin(&mut canvas);

    drag(
        &mut canvas,
        sector,
        TransformKind::Resize(Anchor::BottomRight),
        Point::new(220.0, 140.0),
        Point::new(-400.0, -400.0),
    );

    let s = canvas.sector(sector).unwrap();
    assert!(close(s.bounds.width, 10.0));
    assert!(close(s.bounds.height, 10.0));
}

#[test]
fn test_frames_do_not_accumulate() {
    let mut canvas = Canvas::new();
    let sector = sector_at_origin(&mut canvas);
    let mut session = TransformSession::begin(
        &canvas,
        sector,
        TransformKind::Resize(Anchor::BottomRight),
        Point::new(220.0, 140.0),
    )
    .unwrap()
    .unwrap();
    for x in [260.0, 300.0, 250.0, 240.0] {
        session.update(&mut canvas, Point::new(x, 140.0)).unwrap();
    }
    session.finish(&mut canvas).unwrap();
    assert!(close(canvas.sector(sector).unwrap().bounds.width, 240.0));
}

#[test]
fn test_sector_move() {
    let mut canvas = Canvas::new();
    let sector = sector_at_origin(&mut canvas);
    drag(
        &mut canvas,
        sector,
        TransformKind::Move,
        Point::new(10.0, 10.0),
        Point::new(60.0, 35.0),
    );
    assert_eq!(
        canvas.sector(sector).unwrap().position,
        Point::new(50.0, 25.0)
    );
}

#[test]
fn test_row_move_snaps_and_clamps() {
    let mut canvas = Canvas::new();
    let sector = sector_at_origin(&mut canvas);
    let row = canvas.create_row(sector, &RowParams::default()).unwrap();

    drag(
        &mut canvas,
        row,
        TransformKind::Move,
        Point::new(50.0, 10.0),
        Point::new(80.0, 51.0),
    );
    assert_eq!(canvas.row(row).unwrap().y, 42.0);

    drag(
        &mut canvas,
        row,
        TransformKind::Move,
        Point::new(50.0, 50.0),
        Point::new(50.0, 900.0),
    );
    assert_eq!(canvas.row(row).unwrap().y, 112.0);

    drag(
        &mut canvas,
        row,
        TransformKind::Move,
        Point::new(50.0, 50.0),
        Point::new(50.0, -900.0),
    );
    assert_eq!(canvas.row(row).unwrap().y, 0.0);
}

#[test]
fn test_unchanged_session_does_not_commit() {
    let mut canvas = Canvas::new();
    let sector = sector_at_origin(&mut canvas);
    let session =
        TransformSession::begin(&canvas, sector, TransformKind::Move, Point::new(0.0, 0.0))
            .unwrap()
            .unwrap();
    assert!(!session.changed());
    assert!(!session.finish(&mut canvas).unwrap());
}

#[test]
fn test_locked_and_seat_targets_do_not_start() {
    let mut canvas = Canvas::new();
    let locked = canvas
        .deserialize(&EntityData {
            kind: Some("sector".to_string()),
            shape: Some("rect".to_string()),
            width: Some(100.0),
            height: Some(100.0),
            draggable: false,
            ..EntityData::default()
        })
        .unwrap();
    assert!(TransformSession::begin(&canvas, locked, TransformKind::Move, Point::new(0.0, 0.0))
        .unwrap()
        .is_none());

    let sector = sector_at_origin(&mut canvas);
    let row = canvas.create_row(sector, &RowParams::default()).unwrap();
    let seat = canvas.node(row).unwrap().children[0];
    assert!(TransformSession::begin(&canvas, seat, TransformKind::Move, Point::new(0.0, 0.0))
        .unwrap()
        .is_none());

    // Sectors never rotate.
    assert!(TransformSession::begin(&canvas, sector, TransformKind::Rotate, Point::new(0.0, 0.0))
        .unwrap()
        .is_none());
    // Rect sectors have no vertices.
    assert!(
        TransformSession::begin(&canvas, sector, TransformKind::Vertex(0), Point::new(0.0, 0.0))
            .unwrap()
            .is_none()
    );
}

#[test]
fn test_free_shape_rotates_around_centre() {
    let mut canvas = Canvas::new();
    let id = canvas.insert_free_shape(
        EntityId::new(),
        FreeShape::new(
            ShapeGeometry::Rect {
                width: 100.0,
                height: 50.0,
            },
            Point::new(0.0, 0.0),
        ),
    );

    // From straight above the centre (50, 25) to straight right of it.
    drag(
        &mut canvas,
        id,
        TransformKind::Rotate,
        Point::new(50.0, -25.0),
        Point::new(100.0, 25.0),
    );

    let shape = canvas.free_shape(id).unwrap();
    assert!(close(shape.rotation, 90.0));
    assert!(close(shape.position.x, 75.0));
    assert!(close(shape.position.y, -25.0));
}

#[test]
fn test_vertex_drag() {
    let mut canvas = Canvas::new();
    let id = canvas
        .create_polygon_sector(&[
            Point::new(100.0, 100.0),
            Point::new(300.0, 100.0),
            Point::new(300.0, 250.0),
        ])
        .unwrap();
    drag(
        &mut canvas,
        id,
        TransformKind::Vertex(2),
        Point::new(300.0, 250.0),
        Point::new(350.0, 300.0),
    );
    let sector = canvas.sector(id).unwrap();
    assert_eq!(sector.bounds, Size::new(250.0, 200.0));
    assert_eq!(sector.position, Point::new(100.0, 100.0));
}
