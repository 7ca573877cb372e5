//! Route Handlers

pub mod health;
pub mod predictions;
