use seatkit_designer::geometry::{Point, ShapeKind, Size};
use seatkit_designer::model::RowParams;
use seatkit_designer::naming::{ensure_unique_row_name, ensure_unique_title, next_row_letter};
use seatkit_designer::Canvas;

fn canvas_with_sectors(n: usize) -> Canvas {
    let mut canvas = Canvas::new();
    for i in 0..n {
        canvas.create_sector(
            ShapeKind::Rect,
            Point::new(i as f64 * 300.0, 0.0),
            Size::new(220.0, 140.0),
        );
    }
    canvas
}

#[test]
fn test_new_sectors_get_numbered_titles() {
    let canvas = canvas_with_sectors(3);
    let titles: Vec<&str> = canvas.sectors().map(|(_, s)| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Sector", "Sector (2)", "Sector (3)"]);
}

#[test]
fn test_blank_title_defaults_to_sector() {
    let canvas = Canvas::new();
    assert_eq!(ensure_unique_title(&canvas, "   ", None), "Sector");

    let canvas = canvas_with_sectors(1);
    assert_eq!(ensure_unique_title(&canvas, "", None), "Sector (2)");
}

#[test]
fn test_title_is_trimmed() {
    let canvas = canvas_with_sectors(1);
    assert_eq!(ensure_unique_title(&canvas, "  Balcony ", None), "Balcony");
}

#[test]
fn test_excluded_sector_keeps_its_title() {
    let canvas = canvas_with_sectors(2);
    let (first, _) = canvas.sectors().next().unwrap();
    assert_eq!(ensure_unique_title(&canvas, "Sector", Some(first)), "Sector");
    assert_eq!(ensure_unique_title(&canvas, "Sector (2)", Some(first)), "Sector (2) (2)");
}

#[test]
fn test_row_letters_and_row_name_collisions() {
    let mut canvas = canvas_with_sectors(1);
    let (sector, _) = canvas.sectors().next().unwrap();

    assert_eq!(next_row_letter(&canvas, sector), "Row A");
    let a = canvas.create_row(sector, &RowParams::default()).unwrap();
    assert_eq!(canvas.row(a).unwrap().name, "Row A");
    let b = canvas.create_row(sector, &RowParams::default()).unwrap();
    assert_eq!(canvas.row(b).unwrap().name, "Row B");

    assert_eq!(ensure_unique_row_name(&canvas, sector, "Row A", None), "Row A (2)");
    assert_eq!(ensure_unique_row_name(&canvas, sector, "Row A", Some(a)), "Row A");
    assert_eq!(ensure_unique_row_name(&canvas, sector, " ", None), "Row");
}

#[test]
fn test_row_names_are_scoped_per_sector() {
    let mut canvas = canvas_with_sectors(2);
    let ids: Vec<_> = canvas.sectors().map(|(id, _)| id).collect();
    canvas.create_row(ids[0], &RowParams::default()).unwrap();

    assert_eq!(next_row_letter(&canvas, ids[1]), "Row A");
    assert_eq!(ensure_unique_row_name(&canvas, ids[1], "Row A", None), "Row A");
}

#[test]
fn test_explicit_row_name_is_made_unique() {
    let mut canvas = canvas_with_sectors(1);
    let (sector, _) = canvas.sectors().next().unwrap();
    let params = RowParams {
        name: "Front".to_string(),
        ..RowParams::default()
    };
    let first = canvas.create_row(sector, &params).unwrap();
    let second = canvas.create_row(sector, &params).unwrap();
    assert_eq!(canvas.row(first).unwrap().name, "Front");
    assert_eq!(canvas.row(second).unwrap().name, "Front (2)");
}
