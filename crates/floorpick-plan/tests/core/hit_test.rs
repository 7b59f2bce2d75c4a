use floorpick_plan::geometry::ModelPoint;
use floorpick_plan::hit_test::{hit_test, polygon_contains, HitResult};
use floorpick_plan::registry::{Table, Zone, ZoneRegistry};

fn zone_a() -> Zone {
    Zone::from_coords("A", "Setor A", &[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)])
}

#[test]
fn test_single_zone_hit_and_miss() {
    let registry = ZoneRegistry::new(vec![zone_a()], Vec::new());

    match registry.hit_test(&ModelPoint::new(5.0, 5.0)) {
        HitResult::ZoneHit(zone) => assert_eq!(zone.id, "A"),
        other => panic!("expected zone A, got {}", other),
    }
    assert_eq!(registry.hit_test(&ModelPoint::new(15.0, 5.0)), HitResult::Miss);
}

#[test]
fn test_table_takes_priority_over_zone() {
    let registry = ZoneRegistry::new(
        vec![Zone::rectangle("A", "Setor A", 0.0, 0.0, 100.0, 100.0)],
        vec![Table::new(1, "Setor A", ModelPoint::new(50.0, 50.0), 10.0)],
    );

    match registry.hit_test(&ModelPoint::new(52.0, 51.0)) {
        HitResult::TableHit(table) => assert_eq!(table.id, 1),
        other => panic!("expected table 1, got {}", other),
    }

    // Outside the table radius but inside the zone
    match registry.hit_test(&ModelPoint::new(75.0, 75.0)) {
        HitResult::ZoneHit(zone) => assert_eq!(zone.id, "A"),
        other => panic!("expected zone A, got {}", other),
    }
}

#[test]
fn test_table_radius_is_inclusive() {
    let tables = vec![Table::new(9, "Setor B", ModelPoint::new(0.0, 0.0), 5.0)];
    let on_edge = hit_test(&ModelPoint::new(3.0, 4.0), &tables, &[]);
    assert!(matches!(on_edge, HitResult::TableHit(t) if t.id == 9));

    let just_outside = hit_test(&ModelPoint::new(3.0, 4.001), &tables, &[]);
    assert!(just_outside.is_miss());
}

#[test]
fn test_table_outside_any_zone_still_hits() {
    let tables = vec![Table::new(2, "Setor C", ModelPoint::new(500.0, 500.0), 12.0)];
    let zones = [zone_a()];
    let hit = hit_test(&ModelPoint::new(505.0, 495.0), &tables, &zones);
    assert_eq!(hit.sector_label(), Some("Setor C"));
}

#[test]
fn test_overlapping_tables_resolve_by_registration_order() {
    // Point is closer to table 2, but table 1 is registered first
    let tables = vec![
        Table::new(1, "Setor A", ModelPoint::new(0.0, 0.0), 10.0),
        Table::new(2, "Setor A", ModelPoint::new(8.0, 0.0), 10.0),
    ];
    let hit = hit_test(&ModelPoint::new(7.0, 0.0), &tables, &[]);
    assert!(matches!(hit, HitResult::TableHit(t) if t.id == 1));
}

#[test]
fn test_overlapping_zones_resolve_by_registration_order() {
    let zones = vec![
        Zone::rectangle("Z1", "Setor 1", 0.0, 0.0, 20.0, 20.0),
        Zone::rectangle("Z2", "Setor 2", 10.0, 10.0, 30.0, 30.0),
    ];
    let hit = hit_test(&ModelPoint::new(15.0, 15.0), &[], &zones);
    assert!(matches!(hit, HitResult::ZoneHit(z) if z.id == "Z1"));

    let hit = hit_test(&ModelPoint::new(25.0, 25.0), &[], &zones);
    assert!(matches!(hit, HitResult::ZoneHit(z) if z.id == "Z2"));
}

#[test]
fn test_concave_polygon_notch_is_outside() {
    // U shape: the notch between the arms is not part of the zone
    let u = Zone::from_coords(
        "U",
        "Setor U",
        &[
            (0.0, 0.0),
            (30.0, 0.0),
            (30.0, 30.0),
            (20.0, 30.0),
            (20.0, 10.0),
            (10.0, 10.0),
            (10.0, 30.0),
            (0.0, 30.0),
        ],
    );
    assert!(u.contains(&ModelPoint::new(5.0, 20.0)));
    assert!(u.contains(&ModelPoint::new(25.0, 20.0)));
    assert!(u.contains(&ModelPoint::new(15.0, 5.0)));
    assert!(!u.contains(&ModelPoint::new(15.0, 20.0)));
}

#[test]
fn test_degenerate_zone_never_matches() {
    let registry = ZoneRegistry::new(
        vec![
            Zone::from_coords("line", "Setor X", &[(0.0, 0.0), (10.0, 10.0)]),
            zone_a(),
        ],
        Vec::new(),
    );
    // The degenerate zone is skipped, the next one still matches
    let hit = registry.hit_test(&ModelPoint::new(5.0, 5.0));
    assert!(matches!(hit, HitResult::ZoneHit(z) if z.id == "A"));
}

#[test]
fn test_empty_registry_always_misses() {
    let registry = ZoneRegistry::new(Vec::new(), Vec::new());
    assert!(registry.hit_test(&ModelPoint::new(0.0, 0.0)).is_miss());
}

#[test]
fn test_non_finite_point_misses() {
    let registry = ZoneRegistry::new(
        vec![zone_a()],
        vec![Table::new(1, "Setor A", ModelPoint::new(5.0, 5.0), 3.0)],
    );
    assert!(registry.hit_test(&ModelPoint::new(f64::NAN, 5.0)).is_miss());
    assert!(registry.hit_test(&ModelPoint::new(f64::INFINITY, 5.0)).is_miss());
}

#[test]
fn test_hit_test_is_repeatable() {
    let registry = ZoneRegistry::new(
        vec![zone_a()],
        vec![Table::new(1, "Setor A", ModelPoint::new(2.0, 2.0), 1.0)],
    );
    let p = ModelPoint::new(2.5, 2.5);
    let first = registry.hit_test(&p);
    for _ in 0..10 {
        assert_eq!(registry.hit_test(&p), first);
    }
}

#[test]
fn test_polygon_contains_triangle() {
    let triangle: Vec<ModelPoint> = [(0.0, 0.0), (10.0, 0.0), (5.0, 10.0)]
        .into_iter()
        .map(ModelPoint::from)
        .collect();
    assert!(polygon_contains(&triangle, &ModelPoint::new(5.0, 3.0)));
    assert!(!polygon_contains(&triangle, &ModelPoint::new(1.0, 8.0)));
}
