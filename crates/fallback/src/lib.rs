//! Rule-Based Fallback Estimation
//!
//! Deterministic PM2.5 and AQI heuristics used when a trained model is
//! unavailable. Everything here is pure and dependency-free.

mod category;
mod rules;

pub use category::{categorize_aqi, AqiCategory};
pub use rules::{estimate_pm25, PollutionBand, POLLUTION_BANDS};
