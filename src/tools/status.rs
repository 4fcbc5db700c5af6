//! NutriTrack Status Tool
//!
//! Provides runtime status information about the NutriTrack service.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;

/// Usage instructions for AI assistants
pub const NUTRITION_INSTRUCTIONS: &str = r#"
# NutriTrack Instructions

NutriTrack calculates BMI, daily calorie targets and meal plans, and keeps a
journal of meals, water and weight for the current session.

## Quick Calculations (no profile needed)

| Task | Tool |
|------|------|
| BMI and category | `calculate_bmi(weight, height)` |
| Daily calorie target | `calculate_daily_calories(age, gender, weight, height, activity_level, goal)` |
| Meal plan | `generate_meal_plan(...same fields...)` |

Units: weight in **kilograms**, height in **centimeters**, age in whole years.

Accepted values:
- gender: `male`, `female`, `other`
- activity_level: `sedentary`, `light`, `moderate`, `active`, `very active`
- goal: `weight loss`, `weight gain`, `maintenance` (default), `muscle gain`

## BMI Categories

| BMI | Category |
|-----|----------|
| below 18.5 | Underweight |
| 18.5 to below 25 | Normal weight |
| 25 to below 30 | Overweight |
| 30 and above | Obese |

## How the Calorie Target Is Computed

1. BMR (Mifflin-St Jeor): `10 x weight + 6.25 x height - 5 x age`, then `+5` for
   male or `-161` otherwise
2. TDEE = BMR x activity multiplier (1.2, 1.375, 1.55, 1.725, 1.9)
3. Target = TDEE x goal factor (weight loss 0.85, weight gain 1.15,
   maintenance 1.0, muscle gain 1.1), rounded to a whole number

## Tracking Workflow

1. `register_profile` once per session (computes BMI and the calorie goal)
2. `check_in` each day to keep the streak going
3. `log_meal`, `log_water`, `log_weight` as the day goes on
4. `get_profile` for today's calories, water and remaining calories
5. `get_meal_plan` for a plan based on the registered profile
6. `update_profile` when weight, activity or goal changes. BMI is recomputed
   when weight or height change; the calorie goal is recomputed when any of
   age, gender, weight, height, activity level or goal change

Meal types for `log_meal`: `breakfast`, `lunch`, `dinner`, `snack`.

The journal is held in memory and is cleared when the server restarts or a
new profile is registered.
"#;

/// Status response
#[derive(Debug, Serialize)]
pub struct NutriTrackStatus {
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    pub profile_registered: bool,

    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
}

impl StatusTracker {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    /// Get the current status
    pub fn get_status(&self, profile_registered: bool) -> NutriTrackStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        NutriTrackStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            profile_registered,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

impl Default for StatusTracker {
    fn default() -> Self {
        Self::new()
    }
}
