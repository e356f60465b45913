use super::*;
use crate::entry::{CatalogEntry, EntryKind};

const BOX: MapBounds = MapBounds { north: 40.0, south: 0.0, west: 60.0, east: 100.0 };

fn pt(lat: f64, lon: f64) -> GeoPoint {
    GeoPoint { lat, lon }
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// =============================================================
// project
// =============================================================

#[test]
fn project_north_west_corner_is_origin() {
    let pos = project(&BOX, pt(40.0, 60.0)).unwrap();
    assert!(approx(pos.left_pct, 0.0));
    assert!(approx(pos.top_pct, 0.0));
}

#[test]
fn project_south_east_corner_is_full_extent() {
    let pos = project(&BOX, pt(0.0, 100.0)).unwrap();
    assert!(approx(pos.left_pct, 100.0));
    assert!(approx(pos.top_pct, 100.0));
}

#[test]
fn project_center() {
    let pos = project(&BOX, pt(20.0, 80.0)).unwrap();
    assert!(approx(pos.left_pct, 50.0));
    assert!(approx(pos.top_pct, 50.0));
}

#[test]
fn project_outside_bounds_is_none() {
    assert!(project(&BOX, pt(41.0, 80.0)).is_none());
    assert!(project(&BOX, pt(-1.0, 80.0)).is_none());
    assert!(project(&BOX, pt(20.0, 59.0)).is_none());
    assert!(project(&BOX, pt(20.0, 101.0)).is_none());
}

#[test]
fn project_non_finite_point_is_none() {
    assert!(project(&BOX, pt(f64::NAN, 80.0)).is_none());
    assert!(project(&BOX, pt(20.0, f64::INFINITY)).is_none());
}

#[test]
fn project_degenerate_bounds_is_none() {
    let flat = MapBounds { north: 10.0, south: 10.0, west: 0.0, east: 10.0 };
    assert!(project(&flat, pt(10.0, 5.0)).is_none());
    let inverted = MapBounds { north: 0.0, south: 10.0, west: 0.0, east: 10.0 };
    assert!(project(&inverted, pt(5.0, 5.0)).is_none());
}

#[test]
fn marker_css_uses_percentages() {
    let pos = MarkerPosition { left_pct: 12.5, top_pct: 50.0 };
    assert_eq!(pos.css(), "left: 12.50%; top: 50.00%;");
}

// =============================================================
// markers
// =============================================================

#[test]
fn markers_skip_entries_without_projectable_location() {
    let catalog = Catalog::new(vec![
        CatalogEntry::new(1, EntryKind::Site, "inside", 4.0, 1.0).at(20.0, 80.0),
        CatalogEntry::new(2, EntryKind::Marketplace, "no location", 4.0, 1.0),
        CatalogEntry::new(3, EntryKind::Site, "outside", 4.0, 1.0).at(60.0, 80.0),
        CatalogEntry::new(4, EntryKind::Experience, "also inside", 4.0, 1.0).at(40.0, 60.0),
    ])
    .unwrap();

    let ids: Vec<u32> = markers(&catalog, &BOX).iter().map(|(id, _)| id.0).collect();
    assert_eq!(ids, vec![1, 4]);
}

#[test]
fn india_bounds_contain_every_seed_location() {
    let catalog = crate::seed::catalog().unwrap();
    let located = catalog.iter().filter(|e| e.location.is_some()).count();
    assert!(located > 0);
    assert_eq!(markers(&catalog, &INDIA_BOUNDS).len(), located);
}
