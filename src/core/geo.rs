//! Great-circle helpers and compass directions.

/// Mean Earth radius in miles
pub const EARTH_RADIUS_MI: f64 = 3958.8;

const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Latitude/longitude in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn distance_miles_to(&self, other: &Coordinates) -> f64 {
        haversine_distance(self.latitude, self.longitude, other.latitude, other.longitude)
    }

    pub fn bearing_to(&self, other: &Coordinates) -> f64 {
        initial_bearing(self.latitude, self.longitude, other.latitude, other.longitude)
    }
}

/// Great-circle distance in miles.
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (lat1, lon1) = (lat1.to_radians(), lon1.to_radians());
    let (lat2, lon2) = (lat2.to_radians(), lon2.to_radians());

    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_MI * c
}

/// Initial bearing from point 1 to point 2, in degrees within `[0, 360)`.
pub fn initial_bearing(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1 = lat1.to_radians();
    let lat2 = lat2.to_radians();
    let dlon = (lon2 - lon1).to_radians();

    let x = dlon.sin() * lat2.cos();
    let y = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos();

    x.atan2(y).to_degrees().rem_euclid(360.0)
}

/// 16-point compass name for an azimuth.
pub fn azimuth_direction(azimuth_deg: f64) -> &'static str {
    let index = ((azimuth_deg + 11.25).rem_euclid(360.0) / 22.5) as usize;
    COMPASS_POINTS[index.min(COMPASS_POINTS.len() - 1)]
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_zero_and_known_distance() {
        assert_eq!(haversine_distance(40.0, -112.0, 40.0, -112.0), 0.0);

        // KSLC -> KDEN is roughly 390 miles
        let slc = Coordinates::new(40.7884, -111.9778);
        let den = Coordinates::new(39.8561, -104.6737);
        let miles = slc.distance_miles_to(&den);
        assert!((380.0..400.0).contains(&miles), "got {}", miles);
    }

    #[test]
    fn test_bearing_cardinal_directions() {
        assert!((initial_bearing(0.0, 0.0, 10.0, 0.0) - 0.0).abs() < 1e-9);
        assert!((initial_bearing(0.0, 0.0, 0.0, 10.0) - 90.0).abs() < 1e-9);
        assert!((initial_bearing(10.0, 0.0, 0.0, 0.0) - 180.0).abs() < 1e-9);
        assert!((initial_bearing(0.0, 0.0, 0.0, -10.0) - 270.0).abs() < 1e-9);
    }

    #[test]
    fn test_azimuth_direction_boundaries() {
        assert_eq!(azimuth_direction(0.0), "N");
        assert_eq!(azimuth_direction(11.24), "N");
        assert_eq!(azimuth_direction(11.25), "NNE");
        assert_eq!(azimuth_direction(90.0), "E");
        assert_eq!(azimuth_direction(350.0), "N");
        assert_eq!(azimuth_direction(-90.0), "W");
    }
}
