/// A geographical position in degrees (WGS 84).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct MapPoint {
    lat: f64,
    lng: f64,
}

impl MapPoint {
    pub const LAT_DEG_MIN: f64 = -90.0;
    pub const LAT_DEG_MAX: f64 = 90.0;
    pub const LNG_DEG_MIN: f64 = -180.0;
    pub const LNG_DEG_MAX: f64 = 180.0;

    pub const fn from_lat_lng_deg(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn try_from_lat_lng_deg(lat: f64, lng: f64) -> Option<Self> {
        let pos = Self::from_lat_lng_deg(lat, lng);
        pos.is_valid().then_some(pos)
    }

    pub const fn lat_deg(self) -> f64 {
        self.lat
    }

    pub const fn lng_deg(self) -> f64 {
        self.lng
    }

    pub fn is_valid(self) -> bool {
        (Self::LAT_DEG_MIN..=Self::LAT_DEG_MAX).contains(&self.lat)
            && (Self::LNG_DEG_MIN..=Self::LNG_DEG_MAX).contains(&self.lng)
    }
}

/// A rectangular viewport spanned by two corners.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MapBbox {
    sw: MapPoint,
    ne: MapPoint,
}

impl MapBbox {
    pub const fn new(sw: MapPoint, ne: MapPoint) -> Self {
        Self { sw, ne }
    }

    pub const fn southwest(&self) -> MapPoint {
        self.sw
    }

    pub const fn northeast(&self) -> MapPoint {
        self.ne
    }

    /// Both corners are valid and the southern edge
    /// does not lie north of the northern edge.
    ///
    /// Viewports that cross the antimeridian have a western
    /// edge with a greater longitude than the eastern edge
    /// and are still considered valid.
    pub fn is_valid(&self) -> bool {
        self.sw.is_valid() && self.ne.is_valid() && self.sw.lat_deg() <= self.ne.lat_deg()
    }

    pub fn center(&self) -> MapPoint {
        let lat = (self.sw.lat_deg() + self.ne.lat_deg()) / 2.0;
        let mut lng = (self.sw.lng_deg() + self.ne.lng_deg()) / 2.0;
        if self.sw.lng_deg() > self.ne.lng_deg() {
            // crossing the antimeridian
            lng += if lng > 0.0 { -180.0 } else { 180.0 };
        }
        MapPoint::from_lat_lng_deg(lat, lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_map_points() {
        assert!(MapPoint::from_lat_lng_deg(48.8566, 2.3522).is_valid());
        assert!(MapPoint::from_lat_lng_deg(-90.0, 180.0).is_valid());
        assert!(!MapPoint::from_lat_lng_deg(90.5, 0.0).is_valid());
        assert!(!MapPoint::from_lat_lng_deg(0.0, -180.1).is_valid());
        assert!(!MapPoint::from_lat_lng_deg(f64::NAN, 0.0).is_valid());
        assert!(MapPoint::try_from_lat_lng_deg(10.0, 500.0).is_none());
    }

    #[test]
    fn validate_bbox() {
        let sw = MapPoint::from_lat_lng_deg(48.8, 2.2);
        let ne = MapPoint::from_lat_lng_deg(48.9, 2.5);
        assert!(MapBbox::new(sw, ne).is_valid());
        assert!(!MapBbox::new(ne, sw).is_valid());
        // crossing the antimeridian
        let sw = MapPoint::from_lat_lng_deg(-20.0, 170.0);
        let ne = MapPoint::from_lat_lng_deg(-10.0, -170.0);
        assert!(MapBbox::new(sw, ne).is_valid());
    }

    #[test]
    fn bbox_center() {
        let bbox = MapBbox::new(
            MapPoint::from_lat_lng_deg(10.0, 20.0),
            MapPoint::from_lat_lng_deg(30.0, 40.0),
        );
        assert_eq!(MapPoint::from_lat_lng_deg(20.0, 30.0), bbox.center());
    }

    #[test]
    fn bbox_center_across_the_antimeridian() {
        let bbox = MapBbox::new(
            MapPoint::from_lat_lng_deg(-20.0, 170.0),
            MapPoint::from_lat_lng_deg(-10.0, -160.0),
        );
        assert_eq!(MapPoint::from_lat_lng_deg(-15.0, -175.0), bbox.center());
        let bbox = MapBbox::new(
            MapPoint::from_lat_lng_deg(-20.0, 160.0),
            MapPoint::from_lat_lng_deg(-10.0, -170.0),
        );
        assert_eq!(MapPoint::from_lat_lng_deg(-15.0, 175.0), bbox.center());
    }
}
