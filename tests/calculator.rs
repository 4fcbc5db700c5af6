use nutritrack::models::{
    Account, AccountOptions, ActivityLevel, Gender, Goal, Profile, ProfileInput, ProfileUpdate,
};
use nutritrack::nutrition::{
    build_meal_plan, compute_bmi, compute_daily_calories, generate_meal_plan, BmiCategory,
    NutritionError,
};

fn reference_input(gender: &str) -> ProfileInput {
    ProfileInput {
        age: Some(30),
        gender: Some(gender.to_string()),
        weight: Some(80.0),
        height: Some(180.0),
        activity_level: Some("moderate".to_string()),
        goal: Some("maintenance".to_string()),
    }
}

#[test]
fn bmi_reference_value_and_category() {
    let bmi = compute_bmi(70.0, 175.0);
    assert_eq!(bmi, 22.86);
    assert_eq!(BmiCategory::from_bmi(bmi).label(), "Normal weight");
    assert_eq!(BmiCategory::from_bmi(30.0).label(), "Obese");
}

#[test]
fn daily_calories_for_reference_profiles() {
    let male = reference_input("male").parse().unwrap();
    let female = reference_input("female").parse().unwrap();
    assert_eq!(compute_daily_calories(&male), 2759);
    assert_eq!(compute_daily_calories(&female), 2502);
}

#[test]
fn meal_plan_json_shape() {
    let plan = build_meal_plan(Goal::WeightLoss, 2000);
    let json = serde_json::to_value(&plan).unwrap();

    assert_eq!(json["goal"], "weight loss");
    assert_eq!(json["daily_calories"], 2000);
    assert_eq!(json["macro_split"]["carbs"], 40);
    assert_eq!(json["macro_split"]["protein"], 35);
    assert_eq!(json["macro_split"]["fat"], 25);
    assert_eq!(json["meals"][0]["name"], "Breakfast");
    assert_eq!(json["meals"][0]["calories"], 500);
    assert_eq!(json["meals"][2]["time"], "4:00 PM");
    assert_eq!(json["message"], "Personalized plan for weight loss at 2000 kcal/day.");
}

#[test]
fn profile_file_round_trips_into_plan() {
    let json = r#"{
        "age": 22,
        "gender": "male",
        "weight": 80,
        "height": 180,
        "activity_level": "light"
    }"#;
    let input: ProfileInput = serde_json::from_str(json).unwrap();
    let profile = Profile::try_from(input).unwrap();
    assert_eq!(profile.goal(), Goal::Maintenance);

    // 1820 * 1.375 = 2502.5, a true tie
    let plan = generate_meal_plan(&profile);
    assert_eq!(plan.daily_calories, 2503);
}

#[test]
fn invalid_profiles_are_rejected_before_calculation() {
    let mut input = reference_input("male");
    input.height = Some(0.0);
    assert!(matches!(
        input.parse(),
        Err(NutritionError::InvalidProfile { field: "height", .. })
    ));

    let mut input = reference_input("male");
    input.goal = Some("get shredded".to_string());
    assert!(matches!(
        input.parse(),
        Err(NutritionError::UnknownEnumValue { field: "goal", .. })
    ));
}

#[test]
fn account_keeps_derived_values_in_step_with_profile() {
    let profile = Profile::new(
        45,
        Gender::Other,
        68.0,
        165.0,
        ActivityLevel::Sedentary,
        Goal::Maintenance,
    )
    .unwrap();
    let mut account = Account::register(profile.clone(), AccountOptions::default()).unwrap();
    assert_eq!(account.daily_calorie_goal, compute_daily_calories(&profile));

    let update = ProfileUpdate {
        profile: ProfileInput {
            activity_level: Some("very active".to_string()),
            ..Default::default()
        },
        ..Default::default()
    };
    let recalculated = account.apply_update(&update).unwrap();
    assert!(recalculated.daily_calorie_goal);
    assert_eq!(
        account.daily_calorie_goal,
        compute_daily_calories(&account.profile)
    );
    assert_eq!(account.profile.activity_level(), ActivityLevel::VeryActive);
}
