//! Static catalogue of selectable regions.
//!
//! A [`ZoneRegistry`] holds the zones (polygonal sectors) and tables (point
//! targets with a circular hit area) of one floor plan. It is built once per
//! session from static layout data and never changes afterwards; order is
//! significant because the first match wins.

use std::collections::HashSet;

use floorpick_core::GeometryError;
use serde::{Deserialize, Serialize};

use crate::geometry::ModelPoint;
use crate::hit_test::{self, HitResult};

/// A polygonal region of the plan, in model space.
///
/// The polygon is implicitly closed (the last vertex connects back to the
/// first). It may be non-convex but must not self-intersect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub id: String,
    pub sector_label: String,
    pub polygon: Vec<ModelPoint>,
}

impl Zone {
    pub fn new(
        id: impl Into<String>,
        sector_label: impl Into<String>,
        polygon: Vec<ModelPoint>,
    ) -> Self {
        Self {
            id: id.into(),
            sector_label: sector_label.into(),
            polygon,
        }
    }

    /// Builds a zone from `(x, y)` pairs.
    pub fn from_coords(
        id: impl Into<String>,
        sector_label: impl Into<String>,
        coords: &[(f64, f64)],
    ) -> Self {
        Self::new(
            id,
            sector_label,
            coords.iter().copied().map(ModelPoint::from).collect(),
        )
    }

    /// Axis-aligned rectangle zone spanning `(min_x, min_y)`-`(max_x, max_y)`.
    pub fn rectangle(
        id: impl Into<String>,
        sector_label: impl Into<String>,
        min_x: f64,
        min_y: f64,
        max_x: f64,
        max_y: f64,
    ) -> Self {
        Self::from_coords(
            id,
            sector_label,
            &[(min_x, min_y), (max_x, min_y), (max_x, max_y), (min_x, max_y)],
        )
    }

    /// Fewer than three vertices: never contains anything.
    pub fn is_degenerate(&self) -> bool {
        self.polygon.len() < 3
    }

    /// Whether `p` lies inside the polygon (even-odd ray casting).
    pub fn contains(&self, p: &ModelPoint) -> bool {
        hit_test::polygon_contains(&self.polygon, p)
    }

    /// Returns (min_x, min_y, max_x, max_y), or `None` for an empty polygon.
    pub fn bounding_box(&self) -> Option<(f64, f64, f64, f64)> {
        let first = self.polygon.first()?;
        Some(self.polygon.iter().fold(
            (first.x, first.y, first.x, first.y),
            |(min_x, min_y, max_x, max_y), p| {
                (min_x.min(p.x), min_y.min(p.y), max_x.max(p.x), max_y.max(p.y))
            },
        ))
    }

    fn validate(&self) -> Option<GeometryError> {
        if self.is_degenerate() {
            return Some(GeometryError::DegenerateZone {
                zone_id: self.id.clone(),
                vertices: self.polygon.len(),
            });
        }
        if self.polygon.iter().any(|p| !p.is_finite()) {
            return Some(GeometryError::NonFiniteVertex {
                zone_id: self.id.clone(),
            });
        }
        None
    }
}

/// A point target with a circular hit area, in model space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub id: u32,
    pub sector_label: String,
    pub center: ModelPoint,
    pub hit_radius: f64,
}

impl Table {
    pub fn new(id: u32, sector_label: impl Into<String>, center: ModelPoint, hit_radius: f64) -> Self {
        Self {
            id,
            sector_label: sector_label.into(),
            center,
            hit_radius,
        }
    }

    /// A table with a zero, negative or non-finite radius never matches.
    pub fn has_valid_radius(&self) -> bool {
        self.hit_radius.is_finite() && self.hit_radius > 0.0
    }

    /// Whether `p` is within `hit_radius` (inclusive) of the center.
    pub fn contains(&self, p: &ModelPoint) -> bool {
        self.has_valid_radius() && self.center.distance_to(p) <= self.hit_radius
    }
}

/// Ordered, immutable catalogue of the zones and tables of one floor plan.
#[derive(Debug, Clone, Default)]
pub struct ZoneRegistry {
    zones: Vec<Zone>,
    tables: Vec<Table>,
    issues: Vec<GeometryError>,
}

impl ZoneRegistry {
    /// Builds a registry, recording (and logging) every layout defect.
    ///
    /// Defective entries are kept in place so that registry order is
    /// preserved; they simply never match.
    pub fn new(zones: Vec<Zone>, tables: Vec<Table>) -> Self {
        let mut issues = Vec::new();

        let mut zone_ids = HashSet::new();
        for zone in &zones {
            if let Some(issue) = zone.validate() {
                issues.push(issue);
            }
            if !zone_ids.insert(zone.id.as_str()) {
                issues.push(GeometryError::DuplicateZoneId(zone.id.clone()));
            }
        }

        let mut table_ids = HashSet::new();
        for table in &tables {
            if !table.has_valid_radius() {
                issues.push(GeometryError::InvalidHitRadius {
                    table_id: table.id,
                    radius: table.hit_radius,
                });
            }
            if !table_ids.insert(table.id) {
                issues.push(GeometryError::DuplicateTableId(table.id));
            }
        }

        for issue in &issues {
            tracing::warn!("Floor plan layout defect: {}", issue);
        }
        tracing::debug!(
            "Zone registry built: {} zones, {} tables, {} issues",
            zones.len(),
            tables.len(),
            issues.len()
        );

        Self {
            zones,
            tables,
            issues,
        }
    }

    /// Zones in registry order.
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// Tables in registry order.
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    /// Layout defects found at construction time.
    pub fn issues(&self) -> &[GeometryError] {
        &self.issues
    }

    pub fn zone(&self, id: &str) -> Option<&Zone> {
        self.zones.iter().find(|z| z.id == id)
    }

    pub fn table(&self, id: u32) -> Option<&Table> {
        self.tables.iter().find(|t| t.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty() && self.tables.is_empty()
    }

    /// Hit-tests a model point against this registry (tables first).
    pub fn hit_test(&self, point: &ModelPoint) -> HitResult<'_> {
        hit_test::hit_test(point, &self.tables, &self.zones)
    }
}
