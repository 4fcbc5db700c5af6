//! Profile and Journal MCP Tools
//!
//! Tools that work against the per-process [`Session`]: registering and
//! updating a profile, logging meals, water and weight, and reading totals.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::models::{
    parse_restrictions, Account, AccountOptions, DailySummary, DayTotal, Journal, LoginStreak,
    MealLog, MealLogCreate, MealPlan, ProfileInput, ProfileUpdate, Recalculation, WaterEntry,
    WeightEntry,
};
use crate::nutrition::{self, NutritionError, NutritionResult};

/// State kept for the lifetime of the server process
#[derive(Debug, Default)]
pub struct Session {
    account: Option<Account>,
    journal: Journal,
    streak: LoginStreak,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn account(&self) -> NutritionResult<&Account> {
        self.account.as_ref().ok_or(NutritionError::NotRegistered)
    }

    fn account_mut(&mut self) -> NutritionResult<&mut Account> {
        self.account.as_mut().ok_or(NutritionError::NotRegistered)
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }
}

/// Response for register_profile and update_profile
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub account: Account,
    pub recalculated: Recalculation,
}

/// Response for get_profile
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub account: Account,
    pub current_weight: Option<f64>,
    pub total_meals_logged: u64,
    pub login_streak: u32,
    pub today: DailySummary,
}

/// Response for log_meal
#[derive(Debug, Serialize)]
pub struct LogMealResponse {
    pub meal: MealLog,
    pub total_meals_logged: u64,
    pub calories_today: f64,
}

/// Response for log_water
#[derive(Debug, Serialize)]
pub struct LogWaterResponse {
    pub entry: WaterEntry,
    pub glasses_today: u32,
}

/// Response for log_weight and get_weight_history
#[derive(Debug, Serialize)]
pub struct WeightHistoryResponse {
    pub current_weight: Option<f64>,
    pub weight_history: Vec<WeightEntry>,
}

/// Response for check_in
#[derive(Debug, Serialize)]
pub struct CheckInResponse {
    pub login_streak: u32,
    pub last_check_in: Option<NaiveDate>,
}

// ============================================================================
// Profile Tools
// ============================================================================

/// Register a profile, replacing any previous one and starting a fresh journal
pub fn register_profile(
    session: &mut Session,
    input: &ProfileInput,
    target_weight: Option<f64>,
    dietary_restrictions: &[String],
    water_goal: Option<u32>,
) -> Result<AccountResponse, String> {
    let profile = input.parse().map_err(|e| format!("Invalid profile: {}", e))?;
    let dietary_restrictions =
        parse_restrictions(dietary_restrictions).map_err(|e| format!("Invalid profile: {}", e))?;

    let account = Account::register(
        profile,
        AccountOptions {
            target_weight,
            dietary_restrictions,
            water_goal,
        },
    )
    .map_err(|e| format!("Invalid profile: {}", e))?;

    tracing::info!(
        bmi = account.bmi,
        daily_calorie_goal = account.daily_calorie_goal,
        "Registered profile"
    );

    *session = Session {
        journal: Journal::with_current_weight(account.profile.weight()),
        account: Some(account.clone()),
        streak: LoginStreak::default(),
    };

    Ok(AccountResponse {
        account,
        recalculated: Recalculation {
            bmi: true,
            daily_calorie_goal: true,
        },
    })
}

/// Update profile fields and recompute derived values as needed
pub fn update_profile(session: &mut Session, update: &ProfileUpdate) -> Result<AccountResponse, String> {
    let account = session.account_mut().map_err(|e| e.to_string())?;
    let recalculated = account
        .apply_update(update)
        .map_err(|e| format!("Failed to update profile: {}", e))?;

    tracing::info!(
        bmi_recalculated = recalculated.bmi,
        calories_recalculated = recalculated.daily_calorie_goal,
        "Updated profile"
    );

    Ok(AccountResponse {
        account: account.clone(),
        recalculated,
    })
}

/// Get the profile with today's totals
pub fn get_profile(session: &Session, today: NaiveDate) -> Result<ProfileResponse, String> {
    let account = session.account().map_err(|e| e.to_string())?;
    let journal = session.journal();

    Ok(ProfileResponse {
        today: journal.daily_summary(today, account.daily_calorie_goal, account.water_goal),
        account: account.clone(),
        current_weight: journal.current_weight(),
        total_meals_logged: journal.total_meals_logged(),
        login_streak: session.streak.count,
    })
}

/// Meal plan for the registered profile
pub fn get_meal_plan(session: &Session) -> Result<MealPlan, String> {
    let account = session.account().map_err(|e| e.to_string())?;
    Ok(nutrition::generate_meal_plan(&account.profile))
}

/// Record a daily check-in and return the streak
pub fn check_in(session: &mut Session, today: NaiveDate) -> Result<CheckInResponse, String> {
    session.account().map_err(|e| e.to_string())?;
    let login_streak = session.streak.check_in(today);

    Ok(CheckInResponse {
        login_streak,
        last_check_in: session.streak.last_check_in,
    })
}

// ============================================================================
// Journal Tools
// ============================================================================

/// Log a meal
pub fn log_meal(session: &mut Session, data: MealLogCreate, now: NaiveDateTime) -> Result<LogMealResponse, String> {
    session.account().map_err(|e| e.to_string())?;

    let meal = session
        .journal
        .log_meal(data, now)
        .map_err(|e| format!("Failed to log meal: {}", e))?
        .clone();

    tracing::info!(name = %meal.name, calories = meal.calories, meal_type = meal.meal_type.as_str(), "Logged meal");

    Ok(LogMealResponse {
        meal,
        total_meals_logged: session.journal.total_meals_logged(),
        calories_today: session.journal.calories_on(now.date()),
    })
}

/// Log glasses of water
pub fn log_water(session: &mut Session, glasses: u32, now: NaiveDateTime) -> Result<LogWaterResponse, String> {
    session.account().map_err(|e| e.to_string())?;

    let entry = session
        .journal
        .log_water(glasses, now)
        .map_err(|e| format!("Failed to log water: {}", e))?
        .clone();

    Ok(LogWaterResponse {
        entry,
        glasses_today: session.journal.water_on(now.date()),
    })
}

/// Log a weight reading
pub fn log_weight(session: &mut Session, weight: f64, today: NaiveDate) -> Result<WeightHistoryResponse, String> {
    session.account().map_err(|e| e.to_string())?;

    let history = session
        .journal
        .log_weight(weight, today)
        .map_err(|e| format!("Failed to log weight: {}", e))?
        .to_vec();

    tracing::info!(weight, "Logged weight");

    Ok(WeightHistoryResponse {
        current_weight: session.journal.current_weight(),
        weight_history: history,
    })
}

pub fn get_weight_history(session: &Session) -> Result<WeightHistoryResponse, String> {
    session.account().map_err(|e| e.to_string())?;
    Ok(WeightHistoryResponse {
        current_weight: session.journal.current_weight(),
        weight_history: session.journal.weight_history().to_vec(),
    })
}

pub fn get_calorie_history(session: &Session) -> Result<Vec<DayTotal<f64>>, String> {
    session.account().map_err(|e| e.to_string())?;
    Ok(session.journal.calorie_history())
}

pub fn get_water_history(session: &Session) -> Result<Vec<DayTotal<u32>>, String> {
    session.account().map_err(|e| e.to_string())?;
    Ok(session.journal.water_history())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn now() -> NaiveDateTime {
        today().and_hms_opt(12, 30, 0).unwrap()
    }

    fn profile_input() -> ProfileInput {
        ProfileInput {
            age: Some(30),
            gender: Some("female".to_string()),
            weight: Some(80.0),
            height: Some(180.0),
            activity_level: Some("moderate".to_string()),
            goal: None,
        }
    }

    fn registered() -> Session {
        let mut session = Session::new();
        register_profile(&mut session, &profile_input(), Some(70.0), &["vegetarian".to_string()], None)
            .unwrap();
        session
    }

    #[test]
    fn test_tools_require_registration() {
        let mut session = Session::new();
        assert_eq!(get_meal_plan(&session).unwrap_err(), "No profile registered");
        assert!(log_water(&mut session, 2, now()).is_err());
        assert!(get_profile(&session, today()).is_err());
        assert!(check_in(&mut session, today()).is_err());
    }

    #[test]
    fn test_register_profile() {
        let mut session = Session::new();
        let response =
            register_profile(&mut session, &profile_input(), None, &[], Some(10)).unwrap();
        assert_eq!(response.account.daily_calorie_goal, 2502);
        assert_eq!(response.account.water_goal, 10);
        assert!(response.recalculated.bmi);

        let err = register_profile(&mut session, &profile_input(), None, &["fruitarian".to_string()], None)
            .unwrap_err();
        assert!(err.contains("dietary_restriction"), "{}", err);
    }

    #[test]
    fn test_register_seeds_current_weight() {
        let session = registered();
        assert_eq!(get_profile(&session, today()).unwrap().current_weight, Some(80.0));

        let history = get_weight_history(&session).unwrap();
        assert_eq!(history.current_weight, Some(80.0));
        assert!(history.weight_history.is_empty());
    }

    #[test]
    fn test_reregistering_starts_a_fresh_journal() {
        let mut session = registered();
        log_water(&mut session, 3, now()).unwrap();
        log_weight(&mut session, 78.0, today()).unwrap();

        let mut heavier = profile_input();
        heavier.weight = Some(85.0);
        register_profile(&mut session, &heavier, None, &[], None).unwrap();
        assert_eq!(session.journal().water_on(today()), 0);
        assert_eq!(session.journal().current_weight(), Some(85.0));
    }

    #[test]
    fn test_update_profile_and_meal_plan() {
        let mut session = registered();
        let update = ProfileUpdate {
            profile: ProfileInput {
                goal: Some("weight loss".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let response = update_profile(&mut session, &update).unwrap();
        assert!(response.recalculated.daily_calorie_goal);
        assert!(!response.recalculated.bmi);

        let plan = get_meal_plan(&session).unwrap();
        assert_eq!(plan.daily_calories, response.account.daily_calorie_goal);
        assert_eq!(plan.macro_split.protein, 35);
    }

    #[test]
    fn test_log_meal_and_profile_totals() {
        let mut session = registered();
        let meal = MealLogCreate {
            name: "Quinoa bowl".to_string(),
            calories: 520.0,
            protein: Some(18.0),
            meal_type: "lunch".to_string(),
            ..Default::default()
        };
        let response = log_meal(&mut session, meal, now()).unwrap();
        assert_eq!(response.total_meals_logged, 1);
        assert_eq!(response.calories_today, 520.0);

        log_water(&mut session, 2, now()).unwrap();
        let water = log_water(&mut session, 3, now()).unwrap();
        assert_eq!(water.glasses_today, 5);

        let profile = get_profile(&session, today()).unwrap();
        assert_eq!(profile.today.calories, 520.0);
        assert_eq!(profile.today.water_glasses, 5);
        assert_eq!(profile.today.meals.len(), 1);
        assert_eq!(profile.total_meals_logged, 1);
    }

    #[test]
    fn test_log_weight_and_histories() {
        let mut session = registered();
        let response = log_weight(&mut session, 79.4, today()).unwrap();
        assert_eq!(response.current_weight, Some(79.4));
        assert_eq!(get_weight_history(&session).unwrap().weight_history.len(), 1);
        assert!(log_weight(&mut session, -1.0, today()).is_err());

        assert!(get_calorie_history(&session).unwrap().is_empty());
        log_water(&mut session, 1, now()).unwrap();
        assert_eq!(get_water_history(&session).unwrap().len(), 1);
    }

    #[test]
    fn test_check_in_streak() {
        let mut session = registered();
        assert_eq!(check_in(&mut session, today()).unwrap().login_streak, 1);
        let tomorrow = today().succ_opt().unwrap();
        assert_eq!(check_in(&mut session, tomorrow).unwrap().login_streak, 2);
        assert_eq!(get_profile(&session, tomorrow).unwrap().login_streak, 2);
    }
}
