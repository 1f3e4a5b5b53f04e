//! Projected area of WKT geometries
//!
//! Every sub-geometry is projected into the UTM zone of its own interior
//! point, measured in the plane, and the km² contributions are summed.
//! Rounding happens once, on the total.

use std::str::FromStr;

use geo::{Area, Geometry, InteriorPoint};
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use super::utm::{UtmTransform, UtmZone};
use crate::errors::{IpIntelError, Result};

const SQUARE_METRES_PER_KM2: f64 = 1_000_000.0;

/// Area of a geometry plus the number of sub-geometries it was made of.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaResult {
    /// Total projected area in km², rounded half-to-even
    pub area_km2: i64,
    pub geometries: usize,
}

fn parse_wkt_text(wkt: &str) -> Result<wkt::Wkt<f64>> {
    wkt::Wkt::<f64>::from_str(wkt.trim()).map_err(|e| IpIntelError::wkt_parse(format!("{:?}", e)))
}

fn into_geometry(parsed: wkt::Wkt<f64>) -> Result<Geometry<f64>> {
    parsed
        .try_into()
        .map_err(|e: wkt::conversion::Error| IpIntelError::wkt_parse(format!("{:?}", e)))
}

/// Parse a WKT string into a geometry.
///
/// `POINT EMPTY` has no geo point form and comes back as an empty multipoint.
pub fn parse_wkt(wkt: &str) -> Result<Geometry<f64>> {
    into_geometry(parse_wkt_text(wkt)?)
}

/// Parse WKT and split it into the parts that are projected independently.
///
/// A top-level `POINT EMPTY` is one empty part, like `POLYGON EMPTY`.
fn parse_parts(wkt: &str) -> Result<Vec<Geometry<f64>>> {
    let parsed = parse_wkt_text(wkt)?;
    let empty_point = matches!(parsed, wkt::Wkt::Point(wkt::types::Point(None)));
    let geometry = into_geometry(parsed)?;
    if empty_point {
        return Ok(vec![geometry]);
    }
    Ok(sub_geometries(geometry))
}

/// Split a geometry into the parts that are projected independently.
///
/// Multi-geometries and collections yield their direct members; anything
/// else is a single part.
pub fn sub_geometries(geometry: Geometry<f64>) -> Vec<Geometry<f64>> {
    match geometry {
        Geometry::MultiPolygon(mp) => mp.0.into_iter().map(Geometry::Polygon).collect(),
        Geometry::MultiLineString(ml) => ml.0.into_iter().map(Geometry::LineString).collect(),
        Geometry::MultiPoint(mp) => mp.0.into_iter().map(Geometry::Point).collect(),
        Geometry::GeometryCollection(gc) => gc.0,
        other => vec![other],
    }
}

/// Unrounded km² area of one part, projected into the UTM zone of its
/// interior point. Empty parts have no interior point and measure 0.
pub fn projected_area_km2(mut geometry: Geometry<f64>) -> Result<f64> {
    let Some(point) = geometry.interior_point() else {
        return Ok(0.0);
    };

    let zone = UtmZone::from_lon_lat(point.x(), point.y());
    let transform = UtmTransform::new(zone)?;
    transform.project_in_place(&mut geometry)?;

    let area = geometry.unsigned_area() / SQUARE_METRES_PER_KM2;
    trace!("Sub-geometry projected into zone {}: {:.3} km²", zone, area);
    Ok(area)
}

/// Area calculation that reports parse and projection failures.
pub fn try_calculate_area(wkt: &str) -> Result<AreaResult> {
    let parts = parse_parts(wkt)?;
    let geometries = parts.len();

    let mut total = 0.0;
    for part in parts {
        total += projected_area_km2(part)?;
    }

    Ok(AreaResult {
        area_km2: total.round_ties_even() as i64,
        geometries,
    })
}

/// Area calculation for display purposes.
///
/// Input that cannot be parsed or projected yields `(0, 0)`, the same as an
/// empty geometry. Use [`try_calculate_area`] to tell the two apart.
pub fn calculate_area(wkt: &str) -> AreaResult {
    match try_calculate_area(wkt) {
        Ok(result) => result,
        Err(e) => {
            warn!("Area calculation failed, reporting empty area: {}", e);
            AreaResult::default()
        }
    }
}
