//! 几何面积计算模块
//!
//! 将 WKT 几何体投影到所在 UTM 分带后计算平面面积（km²）。

mod area;
mod utm;

pub use area::{
    AreaResult, calculate_area, parse_wkt, projected_area_km2, sub_geometries,
    try_calculate_area,
};
pub use utm::{MAX_ZONE, MIN_ZONE, UtmTransform, UtmZone};
