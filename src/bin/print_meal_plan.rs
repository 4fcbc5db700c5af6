//! Utility to print a meal plan for a profile stored as JSON
//!
//! Usage: print_meal_plan <profile.json>
//!
//! The file holds `age`, `gender`, `weight` (kg), `height` (cm),
//! `activity_level` and an optional `goal`.

use std::path::PathBuf;

use nutritrack::models::ProfileInput;
use nutritrack::nutrition::{compute_bmi, generate_meal_plan, BmiCategory};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .ok_or("Usage: print_meal_plan <profile.json>")?;

    let contents = std::fs::read_to_string(&path)?;
    let input: ProfileInput = serde_json::from_str(&contents)?;
    let profile = input.parse()?;

    let bmi = compute_bmi(profile.weight(), profile.height());
    eprintln!("Profile: {}", path.display());
    eprintln!("  BMI: {} ({})", bmi, BmiCategory::from_bmi(bmi).label());

    let plan = generate_meal_plan(&profile);
    println!("{}", serde_json::to_string_pretty(&plan)?);

    Ok(())
}
