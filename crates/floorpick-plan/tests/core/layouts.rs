use floorpick_plan::geometry::ModelPoint;
use floorpick_plan::hit_test::HitResult;
use floorpick_plan::layouts::{pool_image, pool_vector, TABLE_HIT_RADIUS};

#[test]
fn test_pool_vector_has_thirty_six_numbered_tables() {
    let plan = pool_vector();
    let tables = plan.registry.tables();
    assert_eq!(tables.len(), 36);
    for (i, table) in tables.iter().enumerate() {
        assert_eq!(table.id as usize, i + 1);
        assert_eq!(table.hit_radius, TABLE_HIT_RADIUS);
    }
    assert!(plan.registry.issues().is_empty());
}

#[test]
fn test_pool_vector_sector_assignment() {
    let plan = pool_vector();
    let label_of = |id: u32| {
        plan.registry
            .table(id)
            .map(|t| t.sector_label.clone())
            .unwrap_or_default()
    };
    assert_eq!(label_of(1), "Setor A");
    assert_eq!(label_of(8), "Setor A");
    assert_eq!(label_of(9), "Setor B");
    assert_eq!(label_of(16), "Setor B");
    assert_eq!(label_of(17), "Setor C");
    assert_eq!(label_of(26), "Setor C");
    assert_eq!(label_of(27), "Setor D");
    assert_eq!(label_of(36), "Setor D");
}

#[test]
fn test_pool_vector_tables_sit_inside_their_sector() {
    let plan = pool_vector();
    for table in plan.registry.tables() {
        let zone = plan
            .registry
            .zones()
            .iter()
            .find(|z| z.sector_label == table.sector_label)
            .expect("every table sector has a zone");
        assert!(
            zone.contains(&table.center),
            "table {} is outside {}",
            table.id,
            zone.id
        );
    }
}

#[test]
fn test_pool_vector_first_table_position() {
    let plan = pool_vector();
    let first = plan.registry.table(1).expect("table 1");
    assert_eq!(first.center, ModelPoint::new(67.52, 340.0));
    let second = plan.registry.table(2).expect("table 2");
    assert_eq!(second.center, ModelPoint::new(107.52, 340.0));
}

#[test]
fn test_pool_vector_dimensions() {
    let plan = pool_vector();
    assert_eq!(plan.name, "pool_vector");
    assert_eq!(plan.dimensions.width, 595.28);
    assert_eq!(plan.dimensions.height, 841.89);
    assert_eq!(plan.mapper().model_dimensions(), plan.dimensions);
}

#[test]
fn test_pool_vector_lawn_between_tables_is_a_zone_hit() {
    let plan = pool_vector();
    match plan.registry.hit_test(&ModelPoint::new(87.52, 370.0)) {
        HitResult::ZoneHit(zone) => assert_eq!(zone.id, "A"),
        other => panic!("expected zone A, got {}", other),
    }
}

#[test]
fn test_pool_vector_pool_is_a_miss() {
    let plan = pool_vector();
    assert!(plan.registry.hit_test(&ModelPoint::new(297.0, 420.0)).is_miss());
}

#[test]
fn test_pool_image_dimensions_and_zones() {
    let plan = pool_image();
    assert_eq!(plan.name, "pool_image");
    assert_eq!(plan.dimensions.width, 489.0);
    assert_eq!(plan.dimensions.height, 537.0);
    assert!(plan.registry.tables().is_empty());
    assert_eq!(plan.registry.zones().len(), 2);
    assert!(plan.registry.issues().is_empty());
}

#[test]
fn test_pool_image_non_convex_lawn() {
    let plan = pool_image();

    let hit = plan.registry.hit_test(&ModelPoint::new(50.0, 250.0));
    assert_eq!(hit.sector_label(), Some("Setor A"));

    // The wide part of the strip between y=100 and y=480
    let hit = plan.registry.hit_test(&ModelPoint::new(92.0, 250.0));
    assert_eq!(hit.sector_label(), Some("Setor A"));

    // Notch above the wide part
    assert!(plan.registry.hit_test(&ModelPoint::new(92.0, 50.0)).is_miss());

    let hit = plan.registry.hit_test(&ModelPoint::new(440.0, 250.0));
    assert_eq!(hit.sector_label(), Some("Setor B"));

    // Pool
    assert!(plan.registry.hit_test(&ModelPoint::new(244.0, 268.0)).is_miss());
}

#[test]
fn test_layout_factories_are_deterministic() {
    let a = pool_vector();
    let b = pool_vector();
    assert_eq!(a.registry.zones(), b.registry.zones());
    assert_eq!(a.registry.tables(), b.registry.tables());

    let a = pool_image();
    let b = pool_image();
    assert_eq!(a.registry.zones(), b.registry.zones());
}
