//! Qibla bearing from observer coordinates.
//!
//! The mobile source hardcoded 295° for its home region; here the initial
//! great-circle bearing toward the Kaaba is computed from configured
//! coordinates, which reproduces that value for West Java.

/// Kaaba coordinates, Masjidil Haram.
pub const KAABA_LATITUDE: f64 = 21.4225;
pub const KAABA_LONGITUDE: f64 = 39.8262;

/// Initial great-circle bearing from (`latitude`, `longitude`) in degrees to
/// the Kaaba, normalized to [0, 360) measured clockwise from true north.
pub fn qibla_bearing(latitude: f64, longitude: f64) -> f64 {
    let phi1 = latitude.to_radians();
    let phi2 = KAABA_LATITUDE.to_radians();
    let delta_lambda = (KAABA_LONGITUDE - longitude).to_radians();

    let y = delta_lambda.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * delta_lambda.cos();

    (y.atan2(x).to_degrees() + 360.0) % 360.0
}

/// Eight-wind compass label for a bearing, in the app's language
/// (Utara, Timur Laut, ...).
pub fn compass_point(bearing: f64) -> &'static str {
    const POINTS: [&str; 8] = [
        "Utara",
        "Timur Laut",
        "Timur",
        "Tenggara",
        "Selatan",
        "Barat Daya",
        "Barat",
        "Barat Laut",
    ];
    let normalized = ((bearing % 360.0) + 360.0) % 360.0;
    let index = ((normalized + 22.5) / 45.0) as usize % 8;
    POINTS[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearing_from_bandung_matches_the_sources_constant() {
        // The mobile app hardcoded 295° for West Java.
        let bearing = qibla_bearing(-6.9175, 107.6191);
        assert!((bearing - 295.0).abs() < 1.0, "got {bearing}");
    }

    #[test]
    fn test_bearing_from_jakarta() {
        let bearing = qibla_bearing(-6.2088, 106.8456);
        assert!((bearing - 295.0).abs() < 1.0, "got {bearing}");
    }

    #[test]
    fn test_bearing_from_london() {
        let bearing = qibla_bearing(51.5074, -0.1278);
        assert!((bearing - 119.0).abs() < 1.0, "got {bearing}");
    }

    #[test]
    fn test_bearing_is_always_normalized() {
        for (lat, lon) in [(0.0, 0.0), (89.0, 179.0), (-89.0, -179.0), (21.4225, 39.8262)] {
            let bearing = qibla_bearing(lat, lon);
            assert!((0.0..360.0).contains(&bearing), "out of range for ({lat}, {lon}): {bearing}");
        }
    }

    #[test]
    fn test_compass_point_labels() {
        assert_eq!(compass_point(0.0), "Utara");
        assert_eq!(compass_point(90.0), "Timur");
        assert_eq!(compass_point(180.0), "Selatan");
        assert_eq!(compass_point(270.0), "Barat");
        assert_eq!(compass_point(295.0), "Barat Laut");
        assert_eq!(compass_point(359.9), "Utara");
        assert_eq!(compass_point(-45.0), "Barat Laut");
    }
}
