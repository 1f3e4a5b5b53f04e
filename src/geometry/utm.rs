//! UTM zone selection and WGS84 → UTM projection
//!
//! Zones are picked from a representative (interior) point of each geometry,
//! then every vertex is projected with `proj4rs` into that zone's metric grid.

use std::cell::RefCell;

use geo::{Coord, Geometry, MapCoordsInPlace};
use proj4rs::Proj;
use proj4rs::transform::transform;

use crate::errors::{IpIntelError, Result};

/// Geographic WGS84 (lon/lat, radians on the proj4rs side)
const WGS84_PROJ: &str = "+proj=longlat +datum=WGS84 +no_defs";

pub const MIN_ZONE: u8 = 1;
pub const MAX_ZONE: u8 = 60;

/// A UTM zone plus hemisphere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UtmZone {
    pub zone: u8,
    pub north: bool,
}

impl UtmZone {
    /// Zone from longitude, hemisphere from latitude sign (`lat >= 0` is north).
    ///
    /// `lon = 180` would land in zone 61; it is clamped back into 60.
    pub fn from_lon_lat(lon: f64, lat: f64) -> Self {
        let raw = ((lon + 180.0) / 6.0).floor() as i64 + 1;
        let zone = raw.clamp(MIN_ZONE as i64, MAX_ZONE as i64) as u8;
        Self {
            zone,
            north: lat >= 0.0,
        }
    }

    /// EPSG code of the WGS84 / UTM system (326zz north, 327zz south).
    pub fn epsg(&self) -> u32 {
        let base = if self.north { 32600 } else { 32700 };
        base + self.zone as u32
    }

    /// Central meridian in degrees.
    pub fn central_meridian(&self) -> f64 {
        self.zone as f64 * 6.0 - 183.0
    }

    pub fn proj_string(&self) -> String {
        let hemisphere = if self.north { "" } else { " +south" };
        format!(
            "+proj=utm +zone={}{} +datum=WGS84 +units=m +no_defs",
            self.zone, hemisphere
        )
    }
}

impl std::fmt::Display for UtmZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.zone, if self.north { 'N' } else { 'S' })
    }
}

/// Geographic → UTM transform for a single zone.
pub struct UtmTransform {
    source: Proj,
    target: Proj,
    zone: UtmZone,
}

impl UtmTransform {
    pub fn new(zone: UtmZone) -> Result<Self> {
        let source = Proj::from_proj_string(WGS84_PROJ).map_err(|e| {
            IpIntelError::projection(format!("Invalid source projection: {:?}", e))
        })?;
        let target = Proj::from_proj_string(&zone.proj_string()).map_err(|e| {
            IpIntelError::projection(format!("Invalid UTM zone {}: {:?}", zone, e))
        })?;

        Ok(Self {
            source,
            target,
            zone,
        })
    }

    pub fn zone(&self) -> UtmZone {
        self.zone
    }

    /// Project one lon/lat pair (degrees) into easting/northing (metres).
    pub fn forward(&self, lon: f64, lat: f64) -> Result<(f64, f64)> {
        let mut point = (lon.to_radians(), lat.to_radians(), 0.0);
        transform(&self.source, &self.target, &mut point).map_err(|e| {
            IpIntelError::projection(format!(
                "Failed to project ({}, {}) into zone {}: {:?}",
                lon, lat, self.zone, e
            ))
        })?;
        Ok((point.0, point.1))
    }

    /// Rewrite every vertex of `geometry` into this zone's grid.
    ///
    /// Stops projecting after the first failure; the geometry is then left
    /// partially projected and the error is returned.
    pub fn project_in_place(&self, geometry: &mut Geometry<f64>) -> Result<()> {
        let failure: RefCell<Option<IpIntelError>> = RefCell::new(None);
        let failure_ref = &failure;

        geometry.map_coords_in_place(|coord| {
            if failure_ref.borrow().is_some() {
                return coord;
            }
            match self.forward(coord.x, coord.y) {
                Ok((x, y)) => Coord { x, y },
                Err(e) => {
                    *failure_ref.borrow_mut() = Some(e);
                    coord
                }
            }
        });

        match failure.into_inner() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
