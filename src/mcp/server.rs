//! NutriTrack MCP Server Implementation
//!
//! Implements the MCP server with all NutriTrack tools.

use std::sync::{Arc, Mutex as StdMutex};

use chrono::{Local, NaiveDate};
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::models::{MealLogCreate, ProfileInput, ProfileUpdate};
use crate::tools::calculator;
use crate::tools::status::StatusTracker;
use crate::tools::tracking::{self, Session};

/// NutriTrack MCP Service
#[derive(Clone)]
pub struct NutriTrackService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    session: Arc<StdMutex<Session>>,
    tool_router: ToolRouter<NutriTrackService>,
}

impl NutriTrackService {
    pub fn new() -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new())),
            session: Arc::new(StdMutex::new(Session::new())),
            tool_router: Self::tool_router(),
        }
    }

    /// Run a tool against the session. The lock is released before returning.
    fn with_session<T, F>(&self, f: F) -> Result<T, McpError>
    where
        F: FnOnce(&mut Session) -> Result<T, String>,
    {
        let mut session = self
            .session
            .lock()
            .map_err(|_| McpError::internal_error("Session state is unavailable", None))?;
        f(&mut session).map_err(|e| McpError::internal_error(e, None))
    }
}

impl Default for NutriTrackService {
    fn default() -> Self {
        Self::new()
    }
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

fn parse_date(date: Option<&str>) -> Result<NaiveDate, McpError> {
    match date {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| {
            McpError::invalid_params(format!("Invalid date '{}', expected YYYY-MM-DD: {}", s, e), None)
        }),
        None => Ok(Local::now().date_naive()),
    }
}

// ============================================================================
// Calculator Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalculateBmiParams {
    /// Weight in kilograms
    pub weight: f64,
    /// Height in centimeters
    pub height: f64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ProfileParams {
    /// Age in whole years
    pub age: i64,
    /// Gender: male, female, or other
    pub gender: String,
    /// Weight in kilograms
    pub weight: f64,
    /// Height in centimeters
    pub height: f64,
    /// Activity level: sedentary, light, moderate, active, or very active
    pub activity_level: String,
    /// Goal: weight loss, weight gain, maintenance, or muscle gain (default maintenance)
    pub goal: Option<String>,
}

impl From<ProfileParams> for ProfileInput {
    fn from(p: ProfileParams) -> Self {
        ProfileInput {
            age: Some(p.age),
            gender: Some(p.gender),
            weight: Some(p.weight),
            height: Some(p.height),
            activity_level: Some(p.activity_level),
            goal: p.goal,
        }
    }
}

// ============================================================================
// Profile Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RegisterProfileParams {
    /// Age in whole years
    pub age: i64,
    /// Gender: male, female, or other
    pub gender: String,
    /// Weight in kilograms
    pub weight: f64,
    /// Height in centimeters
    pub height: f64,
    /// Activity level: sedentary, light, moderate, active, or very active
    pub activity_level: String,
    /// Goal: weight loss, weight gain, maintenance, or muscle gain (default maintenance)
    pub goal: Option<String>,
    /// Target weight in kilograms (optional)
    pub target_weight: Option<f64>,
    /// Dietary restrictions: vegetarian, vegan, gluten-free, dairy-free, keto, paleo, none
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
    /// Water goal in glasses per day (default 8)
    pub water_goal: Option<u32>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct UpdateProfileParams {
    pub age: Option<i64>,
    pub gender: Option<String>,
    /// Weight in kilograms
    pub weight: Option<f64>,
    /// Height in centimeters
    pub height: Option<f64>,
    pub activity_level: Option<String>,
    pub goal: Option<String>,
    pub target_weight: Option<f64>,
    /// Replaces the full list of dietary restrictions
    pub dietary_restrictions: Option<Vec<String>>,
    /// Explicit calorie goal; ignored if a calorie-relevant field also changes
    pub daily_calorie_goal: Option<i64>,
    pub water_goal: Option<u32>,
}

impl From<UpdateProfileParams> for ProfileUpdate {
    fn from(p: UpdateProfileParams) -> Self {
        ProfileUpdate {
            profile: ProfileInput {
                age: p.age,
                gender: p.gender,
                weight: p.weight,
                height: p.height,
                activity_level: p.activity_level,
                goal: p.goal,
            },
            target_weight: p.target_weight,
            dietary_restrictions: p.dietary_restrictions,
            daily_calorie_goal: p.daily_calorie_goal,
            water_goal: p.water_goal,
        }
    }
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct DateParams {
    /// Date in ISO format: YYYY-MM-DD (defaults to today)
    pub date: Option<String>,
}

// ============================================================================
// Journal Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct LogMealParams {
    /// Meal name
    pub name: String,
    /// Calories (kcal)
    pub calories: f64,
    /// Protein in grams (default 0)
    pub protein: Option<f64>,
    /// Carbohydrates in grams (default 0)
    pub carbs: Option<f64>,
    /// Fat in grams (default 0)
    pub fat: Option<f64>,
    /// Meal type: breakfast, lunch, dinner, or snack
    pub meal_type: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct LogWaterParams {
    /// Number of glasses
    pub glasses: u32,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct LogWeightParams {
    /// Weight in kilograms
    pub weight: f64,
    /// Date in ISO format: YYYY-MM-DD (defaults to today)
    pub date: Option<String>,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl NutriTrackService {
    // --- Status ---

    #[tool(description = "Get the current status of the NutriTrack service including build info and process information")]
    async fn nutritrack_status(&self) -> Result<CallToolResult, McpError> {
        let registered = self.with_session(|s| Ok(s.account().is_ok()))?;
        let tracker = self.status_tracker.lock().await;
        json_result(&tracker.get_status(registered))
    }

    #[tool(description = "Get instructions for the NutriTrack tools: units, accepted values, formulas, and the tracking workflow. Call this before first use.")]
    fn nutrition_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::NUTRITION_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(NUTRITION_INSTRUCTIONS)]))
    }

    // --- Calculators ---

    #[tool(description = "Calculate BMI from weight (kg) and height (cm), with its category")]
    fn calculate_bmi(&self, Parameters(p): Parameters<CalculateBmiParams>) -> Result<CallToolResult, McpError> {
        let result = calculator::calculate_bmi(p.weight, p.height).map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Calculate the daily calorie target (BMR, TDEE, and goal-adjusted calories) for a profile")]
    fn calculate_daily_calories(&self, Parameters(p): Parameters<ProfileParams>) -> Result<CallToolResult, McpError> {
        let result = calculator::calculate_daily_calories(&p.into()).map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Generate a meal plan (macro split and four meals) for a profile")]
    fn generate_meal_plan(&self, Parameters(p): Parameters<ProfileParams>) -> Result<CallToolResult, McpError> {
        let result = calculator::generate_meal_plan(&p.into()).map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    // --- Profile ---

    #[tool(description = "Register the session profile. Computes BMI and daily calorie goal. Replaces any existing profile and clears the journal.")]
    fn register_profile(&self, Parameters(p): Parameters<RegisterProfileParams>) -> Result<CallToolResult, McpError> {
        let input = ProfileInput {
            age: Some(p.age),
            gender: Some(p.gender),
            weight: Some(p.weight),
            height: Some(p.height),
            activity_level: Some(p.activity_level),
            goal: p.goal,
        };
        let result = self.with_session(|s| {
            tracking::register_profile(s, &input, p.target_weight, &p.dietary_restrictions, p.water_goal)
        })?;
        json_result(&result)
    }

    #[tool(description = "Update profile fields. Recalculates BMI when weight or height change, and the calorie goal when age, gender, weight, height, activity level or goal change.")]
    fn update_profile(&self, Parameters(p): Parameters<UpdateProfileParams>) -> Result<CallToolResult, McpError> {
        let update: ProfileUpdate = p.into();
        let result = self.with_session(|s| tracking::update_profile(s, &update))?;
        json_result(&result)
    }

    #[tool(description = "Get the profile with derived values and totals for a day (defaults to today)")]
    fn get_profile(&self, Parameters(p): Parameters<DateParams>) -> Result<CallToolResult, McpError> {
        let date = parse_date(p.date.as_deref())?;
        let result = self.with_session(|s| tracking::get_profile(s, date))?;
        json_result(&result)
    }

    #[tool(description = "Get the meal plan for the registered profile")]
    fn get_meal_plan(&self) -> Result<CallToolResult, McpError> {
        let result = self.with_session(|s| tracking::get_meal_plan(s))?;
        json_result(&result)
    }

    #[tool(description = "Record a daily check-in and return the consecutive-day streak")]
    fn check_in(&self) -> Result<CallToolResult, McpError> {
        let today = Local::now().date_naive();
        let result = self.with_session(|s| tracking::check_in(s, today))?;
        json_result(&result)
    }

    // --- Journal ---

    #[tool(description = "Log a meal with calories and optional macros")]
    fn log_meal(&self, Parameters(p): Parameters<LogMealParams>) -> Result<CallToolResult, McpError> {
        let data = MealLogCreate {
            name: p.name,
            calories: p.calories,
            protein: p.protein,
            carbs: p.carbs,
            fat: p.fat,
            meal_type: p.meal_type,
        };
        let now = Local::now().naive_local();
        let result = self.with_session(|s| tracking::log_meal(s, data, now))?;
        json_result(&result)
    }

    #[tool(description = "Log glasses of water")]
    fn log_water(&self, Parameters(p): Parameters<LogWaterParams>) -> Result<CallToolResult, McpError> {
        let now = Local::now().naive_local();
        let result = self.with_session(|s| tracking::log_water(s, p.glasses, now))?;
        json_result(&result)
    }

    #[tool(description = "Log a weight reading in kilograms; it becomes the current weight")]
    fn log_weight(&self, Parameters(p): Parameters<LogWeightParams>) -> Result<CallToolResult, McpError> {
        let date = parse_date(p.date.as_deref())?;
        let result = self.with_session(|s| tracking::log_weight(s, p.weight, date))?;
        json_result(&result)
    }

    #[tool(description = "Get the weight history and current weight")]
    fn get_weight_history(&self) -> Result<CallToolResult, McpError> {
        let result = self.with_session(|s| tracking::get_weight_history(s))?;
        json_result(&result)
    }

    #[tool(description = "Get total calories logged per day, oldest first")]
    fn get_calorie_history(&self) -> Result<CallToolResult, McpError> {
        let result = self.with_session(|s| tracking::get_calorie_history(s))?;
        json_result(&result)
    }

    #[tool(description = "Get total glasses of water logged per day, oldest first")]
    fn get_water_history(&self) -> Result<CallToolResult, McpError> {
        let result = self.with_session(|s| tracking::get_water_history(s))?;
        json_result(&result)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for NutriTrackService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "nutritrack".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("NutriTrack".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "NutriTrack - BMI, calorie targets, meal plans and daily nutrition tracking. \
                 Call nutrition_instructions first. Weight is in kg, height in cm. \
                 Calculators: calculate_bmi, calculate_daily_calories, generate_meal_plan. \
                 Profile: register_profile, update_profile, get_profile, get_meal_plan, check_in. \
                 Journal: log_meal, log_water, log_weight, get_weight_history, get_calorie_history, get_water_history. \
                 Status: nutritrack_status."
                    .into(),
            ),
        }
    }
}
