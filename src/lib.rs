//! NutriTrack Library
//!
//! BMI, calorie targets, meal plans and daily nutrition tracking.

pub mod build_info;
pub mod mcp;
pub mod models;
pub mod nutrition;
pub mod tools;
