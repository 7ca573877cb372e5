//! Request Validation
//!
//! Turns untyped JSON request bodies into typed, fully-defaulted prediction
//! requests. All presence and type checks happen here, before any model or
//! fallback logic runs.

mod error;
mod fields;
mod request;

pub use error::ValidationError;
pub use fields::{parse_body, LATITUDE, LONGITUDE, PM10, PM25};
pub use request::{CategoryRequest, Pm25Request};
