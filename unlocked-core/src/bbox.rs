use unlocked_entities::geo::*;

/// The Earth's radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Approximate area of a viewport in km².
///
/// The bounding box is treated as a flat rectangle with
/// the width measured along the mean latitude.
pub fn estimate_area_km2(bbox: &MapBbox) -> f64 {
    let sw = bbox.southwest();
    let ne = bbox.northeast();
    let lat1 = sw.lat_deg().to_radians();
    let lat2 = ne.lat_deg().to_radians();
    let mut lng_deg_span = ne.lng_deg() - sw.lng_deg();
    if lng_deg_span < 0.0 {
        // crossing the antimeridian
        lng_deg_span += MapPoint::LNG_DEG_MAX - MapPoint::LNG_DEG_MIN;
    }
    let width = EARTH_RADIUS_KM * ((lat1 + lat2) / 2.0).cos() * lng_deg_span.to_radians();
    let height = EARTH_RADIUS_KM * (lat2 - lat1);
    (width * height).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bbox(sw: (f64, f64), ne: (f64, f64)) -> MapBbox {
        MapBbox::new(
            MapPoint::from_lat_lng_deg(sw.0, sw.1),
            MapPoint::from_lat_lng_deg(ne.0, ne.1),
        )
    }

    #[test]
    fn one_degree_square_at_the_equator() {
        let area = estimate_area_km2(&bbox((-0.5, -0.5), (0.5, 0.5)));
        // (6371 * PI / 180)² = 111.19²
        assert!((area - 12_363.0).abs() < 5.0, "area = {area}");
    }

    #[test]
    fn width_shrinks_towards_the_poles() {
        let equator = estimate_area_km2(&bbox((0.0, 0.0), (1.0, 1.0)));
        let north = estimate_area_km2(&bbox((60.0, 0.0), (61.0, 1.0)));
        assert!(north < equator * 0.51);
        assert!(north > equator * 0.48);
    }

    #[test]
    fn empty_bbox_has_no_area() {
        assert_eq!(0.0, estimate_area_km2(&bbox((48.0, 2.0), (48.0, 2.0))));
    }

    #[test]
    fn bbox_crossing_the_antimeridian() {
        let crossing = estimate_area_km2(&bbox((-17.0, 179.5), (-16.0, -179.5)));
        let regular = estimate_area_km2(&bbox((-17.0, 10.0), (-16.0, 11.0)));
        assert!((crossing - regular).abs() < 1e-6);
    }

    #[test]
    fn area_of_paris_viewport() {
        let area = estimate_area_km2(&bbox((48.8156, 2.2241), (48.9022, 2.4699)));
        assert!(area > 150.0 && area < 200.0, "area = {area}");
    }
}
