//! Projected area calculation

use geo::{Area, Coord, LineString, Polygon};
use ipintel::geometry::{
    AreaResult, UtmTransform, UtmZone, calculate_area, parse_wkt, projected_area_km2,
    sub_geometries, try_calculate_area,
};

/// 逐点投影后用几何库的平面面积计算，作为独立参照
fn reference_km2(ring: &[(f64, f64)]) -> f64 {
    let (lon, lat) = ring[0];
    let transform = UtmTransform::new(UtmZone::from_lon_lat(lon, lat)).unwrap();
    let coords: Vec<Coord<f64>> = ring
        .iter()
        .map(|&(x, y)| {
            let (e, n) = transform.forward(x, y).unwrap();
            Coord { x: e, y: n }
        })
        .collect();
    Polygon::new(LineString::new(coords), vec![]).unsigned_area() / 1_000_000.0
}

fn polygon_wkt(ring: &[(f64, f64)]) -> String {
    let points: Vec<String> = ring.iter().map(|(x, y)| format!("{} {}", x, y)).collect();
    format!("POLYGON(({}))", points.join(", "))
}

#[test]
fn test_single_polygon_matches_reference() {
    let rings: [&[(f64, f64)]; 3] = [
        &[(25.5, 60.9), (25.8, 60.9), (25.8, 61.1), (25.5, 61.1), (25.5, 60.9)],
        &[(-74.1, 40.6), (-73.8, 40.6), (-73.8, 40.9), (-74.1, 40.9), (-74.1, 40.6)],
        &[(151.0, -34.0), (151.3, -34.0), (151.15, -33.7), (151.0, -34.0)],
    ];

    for ring in rings {
        let result = calculate_area(&polygon_wkt(ring));
        let expected = reference_km2(ring);
        assert_eq!(result.geometries, 1);
        assert!(
            (result.area_km2 as f64 - expected).abs() <= 1.0,
            "{} vs {}",
            result.area_km2,
            expected
        );
    }
}

#[test]
fn test_multipolygon_counts_and_sums_before_rounding() {
    // 三个小多边形各自约 0.4 km²，单独四舍五入都为 0，总和应为 1
    let parts = [
        (24.90, 60.15),
        (24.95, 60.15),
        (25.00, 60.15),
    ];
    let side = 0.0113;
    let polygons: Vec<String> = parts
        .iter()
        .map(|&(x, y)| {
            format!(
                "(({x} {y}, {} {y}, {} {}, {x} {}, {x} {y}))",
                x + side,
                x + side,
                y + side * 0.5,
                y + side * 0.5
            )
        })
        .collect();
    let wkt = format!("MULTIPOLYGON({})", polygons.join(", "));

    let geometries = sub_geometries(parse_wkt(&wkt).unwrap());
    let areas: Vec<f64> = geometries
        .into_iter()
        .map(|g| projected_area_km2(g).unwrap())
        .collect();
    assert!(areas.iter().all(|a| a.round_ties_even() == 0.0), "areas {:?}", areas);
    let unrounded: f64 = areas.iter().sum();

    let result = calculate_area(&wkt);
    assert_eq!(result.geometries, 3);
    assert_eq!(result.area_km2, unrounded.round_ties_even() as i64);
    assert_eq!(result.area_km2, 1);
}

#[test]
fn test_disjoint_multipolygon_across_zones() {
    let wkt = "MULTIPOLYGON(((0 0, 1 0, 1 1, 0 1, 0 0)), ((100 10, 101 10, 101 11, 100 11, 100 10)))";
    let first = try_calculate_area("POLYGON((0 0, 1 0, 1 1, 0 1, 0 0))").unwrap();
    let second = try_calculate_area("POLYGON((100 10, 101 10, 101 11, 100 11, 100 10))").unwrap();

    let result = try_calculate_area(wkt).unwrap();
    assert_eq!(result.geometries, 2);
    assert!((result.area_km2 - (first.area_km2 + second.area_km2)).abs() <= 1);
}

#[test]
fn test_malformed_wkt_is_empty_result() {
    for input in ["NOT A GEOMETRY", "", "POLYGON((0 0, 1 0", "POLYGON((a b, c d))"] {
        assert_eq!(calculate_area(input), AreaResult::default(), "input: {:?}", input);
    }
}

#[test]
fn test_strict_variant_reports_malformed() {
    assert!(try_calculate_area("NOT A GEOMETRY").is_err());
}

#[test]
fn test_non_areal_geometries_are_counted() {
    let result = calculate_area("MULTIPOINT((1 1), (2 2))");
    assert_eq!(result, AreaResult { area_km2: 0, geometries: 2 });

    let result = calculate_area("LINESTRING(0 0, 1 1)");
    assert_eq!(result, AreaResult { area_km2: 0, geometries: 1 });
}
