//! Built-in floor plans.
//!
//! Each factory is a pure function of static data: calling it twice yields
//! identical registries.

use crate::geometry::{ModelDimensions, ModelPoint};
use crate::registry::{Table, Zone, ZoneRegistry};
use crate::viewport::CoordinateMapper;

/// Hit radius of every table in the vector plan, equal to its drawn radius.
pub const TABLE_HIT_RADIUS: f64 = 12.0;

/// A floor plan: its logical size plus its selectable regions.
#[derive(Debug, Clone)]
pub struct FloorPlan {
    pub name: &'static str,
    pub dimensions: ModelDimensions,
    pub registry: ZoneRegistry,
}

impl FloorPlan {
    pub fn new(name: &'static str, dimensions: ModelDimensions, registry: ZoneRegistry) -> Self {
        Self {
            name,
            dimensions,
            registry,
        }
    }

    /// Mapper for this plan's model dimensions.
    pub fn mapper(&self) -> CoordinateMapper {
        CoordinateMapper::new(self.dimensions)
    }
}

/// Pool-side lawn over the aerial photo: 489 x 537 units, two curved lawn
/// strips either side of the pool, no individual tables.
pub fn pool_image() -> FloorPlan {
    let zones = vec![
        Zone::from_coords(
            "A",
            "Setor A",
            &[
                (0.0, 40.0),
                (85.0, 0.0),
                (85.0, 100.0),
                (100.0, 100.0),
                (100.0, 480.0),
                (85.0, 480.0),
                (85.0, 537.0),
                (0.0, 500.0),
            ],
        ),
        Zone::from_coords(
            "B",
            "Setor B",
            &[
                (400.0, 30.0),
                (489.0, 70.0),
                (489.0, 470.0),
                (400.0, 510.0),
                (400.0, 480.0),
                (385.0, 480.0),
                (385.0, 100.0),
                (400.0, 100.0),
            ],
        ),
    ];

    FloorPlan::new(
        "pool_image",
        ModelDimensions::new(489.0, 537.0),
        ZoneRegistry::new(zones, Vec::new()),
    )
}

/// Vector pool plan: 595.28 x 841.89 units, four lawn sectors around the
/// pool and 36 numbered tables.
///
/// Tables are numbered 1..=36 in sector order A, B, C, D, row by row.
pub fn pool_vector() -> FloorPlan {
    let zones = vec![
        Zone::rectangle("A", "Setor A", 42.52, 295.31, 132.52, 546.58),
        Zone::rectangle("B", "Setor B", 462.76, 295.31, 552.76, 546.58),
        Zone::rectangle("C", "Setor C", 142.52, 195.31, 452.76, 285.31),
        Zone::rectangle("D", "Setor D", 142.52, 556.58, 452.76, 646.58),
    ];

    let side_rows = [340.0, 400.0, 460.0, 520.0];
    let end_columns = [180.0, 240.0, 300.0, 360.0, 420.0];

    let sectors: [(&str, &[f64], &[f64]); 4] = [
        ("Setor A", &[67.52, 107.52], &side_rows),
        ("Setor B", &[487.76, 527.76], &side_rows),
        ("Setor C", &end_columns, &[220.0, 260.0]),
        ("Setor D", &end_columns, &[580.0, 620.0]),
    ];

    let mut tables = Vec::with_capacity(36);
    let mut next_id = 1;
    for (label, columns, rows) in sectors {
        for &y in rows {
            for &x in columns {
                tables.push(Table::new(
                    next_id,
                    label,
                    ModelPoint::new(x, y),
                    TABLE_HIT_RADIUS,
                ));
                next_id += 1;
            }
        }
    }

    FloorPlan::new(
        "pool_vector",
        ModelDimensions::new(595.28, 841.89),
        ZoneRegistry::new(zones, tables),
    )
}
