use seatkit_designer::geometry::{Point, ShapeKind, Size};
use seatkit_designer::model::{EntityKind, RowParams};
use seatkit_designer::serialization::{DesignFile, EntityData};
use seatkit_designer::{Canvas, DesignerState, Error};
use tempfile::TempDir;

#[test]
fn test_design_file_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("hall.json");

    let mut canvas = Canvas::new();
    let sector = canvas.create_sector(ShapeKind::Ellipse, Point::new(40.0, 60.0), Size::new(220.0, 140.0));
    canvas.create_row(sector, &RowParams::default()).unwrap();

    let mut design = DesignFile::new("Main hall");
    design.entities = canvas.snapshot();
    design.viewport.scale = 1.5;
    design.save_to_file(&path).unwrap();

    let loaded = DesignFile::load_from_file(&path).unwrap();
    assert_eq!(loaded.metadata.name, "Main hall");
    assert_eq!(loaded.viewport.scale, 1.5);
    assert_eq!(loaded.entities, design.entities);
}

#[test]
fn test_designer_save_and_load() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("arena.json");

    let mut state = DesignerState::new();
    state.mount();
    state.create_sector_at(ShapeKind::Rect, Point::new(100.0, 100.0));
    state.add_row();
    state.add_row();
    state.viewport.set_scale(2.0);
    assert!(state.is_modified);
    state.save_to_file(&path).unwrap();
    assert!(!state.is_modified);
    let saved = state.canvas.snapshot();

    let mut other = DesignerState::new();
    other.mount();
    other.load_from_file(&path).unwrap();
    assert_eq!(other.canvas.snapshot(), saved);
    assert_eq!(other.viewport.scale(), 2.0);
    assert!(!other.can_undo());
    assert!(!other.can_redo());
    assert_eq!(other.display_name(), "arena.json");
    assert_eq!(other.selected_id(), None);
}

#[test]
fn test_loading_missing_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let mut state = DesignerState::new();
    let err = state
        .load_from_file(temp_dir.path().join("missing.json"))
        .unwrap_err();
    assert!(matches!(err, Error::File { .. }));
    assert!(err.to_string().contains("missing.json"));
}

#[test]
fn test_loading_garbage_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();
    let err = DesignFile::load_from_file(&path).unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

#[test]
fn test_sparse_payload_gets_defaults() {
    let json = r#"{
        "title": "Balcony",
        "x": 10,
        "y": 20,
        "children": [ { "name": "Front" }, { "seats": 4, "y": 40 } ]
    }"#;
    let data: EntityData = serde_json::from_str(json).unwrap();
    assert_eq!(data.entity_kind(), EntityKind::Sector);
    assert!(data.draggable);

    let mut canvas = Canvas::new();
    let sector = canvas.deserialize(&data).unwrap();
    let s = canvas.sector(sector).unwrap();
    assert_eq!(s.title, "Balcony");
    assert_eq!(s.bounds, Size::new(200.0, 120.0));
    assert_eq!(s.position, Point::new(10.0, 20.0));

    let rows = canvas.rows_in(sector);
    assert_eq!(rows.len(), 2);
    let front = rows.iter().find(|(_, r)| r.name == "Front").unwrap().1;
    assert_eq!(front.seats, 10);
    assert_eq!(front.row_height, 28.0);
    assert_eq!(front.ticket, "General");
    let second = rows.iter().find(|(_, r)| r.seats == 4).unwrap().1;
    assert_eq!(second.y, 40.0);
}

#[test]
fn test_snapshot_json_omits_derived_nodes() {
    let mut canvas = Canvas::new();
    let sector = canvas.create_sector(ShapeKind::Rect, Point::new(0.0, 0.0), Size::new(220.0, 140.0));
    canvas.create_row(sector, &RowParams::default()).unwrap();

    let json = serde_json::to_string(&canvas.snapshot()).unwrap();
    assert!(json.contains("\"kind\":\"sector\""));
    assert!(json.contains("\"kind\":\"row\""));
    assert!(!json.contains("seat\""));
    assert!(!json.contains("container"));
}
