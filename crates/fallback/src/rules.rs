//! Geographic PM2.5 Estimation Rules

/// Rectangular region with a fixed PM2.5 estimate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PollutionBand {
    /// Inclusive latitude bounds
    pub latitude: (f64, f64),
    /// Inclusive longitude bounds
    pub longitude: (f64, f64),
    /// PM2.5 estimate (µg/m³) for any point inside the band
    pub pm25: f64,
}

impl PollutionBand {
    /// Whether the point falls inside the band (bounds inclusive)
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        (self.latitude.0..=self.latitude.1).contains(&latitude)
            && (self.longitude.0..=self.longitude.1).contains(&longitude)
    }
}

/// Known bands, checked in order. First match wins.
pub const POLLUTION_BANDS: [PollutionBand; 3] = [
    // Delhi NCR
    PollutionBand {
        latitude: (28.0, 29.0),
        longitude: (76.5, 77.5),
        pm25: 85.0,
    },
    // Mumbai
    PollutionBand {
        latitude: (18.8, 19.3),
        longitude: (72.7, 73.2),
        pm25: 45.0,
    },
    // Bengaluru
    PollutionBand {
        latitude: (12.8, 13.2),
        longitude: (77.4, 77.8),
        pm25: 35.0,
    },
];

/// Latitude below which the southern linear formula applies
const SOUTHERN_LATITUDE_LIMIT: f64 = 25.0;

/// Estimate PM2.5 from coordinates alone.
///
/// Falls through the named bands first, then a latitude-based linear
/// formula: `25 + 2·lat` south of 25°N, `40 + 1.5·lat` otherwise.
pub fn estimate_pm25(latitude: f64, longitude: f64) -> f64 {
    if let Some(band) = POLLUTION_BANDS
        .iter()
        .find(|band| band.contains(latitude, longitude))
    {
        return band.pm25;
    }

    if latitude < SOUTHERN_LATITUDE_LIMIT {
        25.0 + latitude * 2.0
    } else {
        40.0 + latitude * 1.5
    }
}
