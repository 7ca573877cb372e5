//! Typed Prediction Requests

use crate::error::ValidationError;
use crate::fields::{optional_number, LATITUDE, LONGITUDE, PM10, PM25};
use serde_json::Value;

/// Validated input for PM2.5 regression
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pm25Request {
    pub latitude: f64,
    pub longitude: f64,
    pub pm10: f64,
}

impl Pm25Request {
    /// PM10 assumed when the caller does not send one (µg/m³)
    pub const DEFAULT_PM10: f64 = 100.0;

    const REQUIRED: &'static [&'static str] = &[LATITUDE, LONGITUDE];

    /// Validate a `{Latitude, Longitude, PM10?}` body
    pub fn from_json(body: &Value) -> Result<Self, ValidationError> {
        // Presence is reported before type errors
        let (latitude, longitude) = match (
            optional_number(body, LATITUDE),
            optional_number(body, LONGITUDE),
        ) {
            (Ok(Some(latitude)), Ok(Some(longitude))) => (latitude, longitude),
            (Ok(None), _) | (_, Ok(None)) => {
                return Err(ValidationError::MissingFields(Self::REQUIRED))
            }
            (Err(e), _) | (_, Err(e)) => return Err(e),
        };

        let pm10 = optional_number(body, PM10)?.unwrap_or(Self::DEFAULT_PM10);

        Ok(Self {
            latitude,
            longitude,
            pm10,
        })
    }
}

/// Validated input for AQI classification
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryRequest {
    pub pm25: f64,
    pub pm10: f64,
    pub latitude: f64,
    pub longitude: f64,
}

impl CategoryRequest {
    /// Coordinates used when none are supplied (New Delhi)
    pub const REFERENCE_POINT: (f64, f64) = (28.61, 77.23);

    /// PM10 is estimated as PM2.5 times this ratio when absent
    pub const PM10_RATIO: f64 = 1.5;

    /// Validate a `{PM2.5, PM10?, Latitude?, Longitude?}` body
    pub fn from_json(body: &Value) -> Result<Self, ValidationError> {
        let pm25 = optional_number(body, PM25)?.ok_or(ValidationError::MissingField(PM25))?;
        let pm10 = optional_number(body, PM10)?.unwrap_or(pm25 * Self::PM10_RATIO);
        let latitude = optional_number(body, LATITUDE)?.unwrap_or(Self::REFERENCE_POINT.0);
        let longitude = optional_number(body, LONGITUDE)?.unwrap_or(Self::REFERENCE_POINT.1);

        Ok(Self {
            pm25,
            pm10,
            latitude,
            longitude,
        })
    }
}
