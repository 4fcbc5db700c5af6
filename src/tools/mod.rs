//! NutriTrack Tools module
//!
//! Tool implementations behind the MCP server.

pub mod calculator;
pub mod status;
pub mod tracking;
