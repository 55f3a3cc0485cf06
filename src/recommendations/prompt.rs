//! Prompt construction for the meal recommendation request.

use super::dto::RequestPayload;

pub const DEFAULT_CALORIE_TARGET: u32 = 500;
/// Upper bound on preparation time for the fast/easy slot, in minutes.
pub const FAST_MEAL_MAX_MINUTES: u32 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalorieBand {
    pub target: u32,
    pub min: u32,
    pub max: u32,
    /// Ceiling for the indulgent slot (target + 20%).
    pub indulgent_max: u32,
}

pub fn calorie_target(meal_type: &str) -> u32 {
    match meal_type.trim().to_ascii_lowercase().as_str() {
        "breakfast" => 400,
        "lunch" => 600,
        "dinner" => 700,
        _ => DEFAULT_CALORIE_TARGET,
    }
}

fn scaled(target: u32, factor: f64) -> u32 {
    (f64::from(target) * factor).round() as u32
}

impl CalorieBand {
    pub fn for_meal_type(meal_type: &str) -> Self {
        let target = calorie_target(meal_type);
        Self {
            target,
            min: scaled(target, 0.9),
            max: scaled(target, 1.1),
            indulgent_max: scaled(target, 1.2),
        }
    }
}

fn restrictions_line(restrictions: &[String]) -> String {
    if restrictions.is_empty() {
        "No dietary restrictions".to_string()
    } else {
        format!("Dietary restrictions: {}", restrictions.join(", "))
    }
}

pub fn render_prompt(payload: &RequestPayload) -> String {
    let user = &payload.user_data;
    let band = CalorieBand::for_meal_type(&payload.meal_type);
    let (min, max) = (band.min, band.max);

    format!(
        r#"You are a nutritionist and meal planning expert. Generate exactly 3 meal recommendations for {name} (age {age}).

User Profile:
- Weight Goal: {goal}
- {restrictions}
- Budget Level: {budget}
- Current Mood: {mood}
- Time of Day: {time_of_day}
- Meal Type: {meal_type}

Calorie Target: {target} calories (range: {min}-{max})

Generate three distinct meal options:

1. **The Optimized Meal**: A nutritionally perfect meal ({min}-{max} calories) that prioritizes fresh, home-cookable meals aligned with the weight goal. Must respect dietary restrictions.

2. **The Fast/Easy Meal**: A simple meal that can be prepared in max {fast_minutes} minutes, respecting budget constraints. If mood is 'Tired' or 'Busy', suggest minimal-ingredient recipes or pre-packaged healthy items. Calorie range: {min}-{max}.

3. **The Indulgent Meal**: A slightly higher-calorie (up to 20% above target, {indulgent_max} calories at most) but still healthy suggestion. Can be local takeout/delivery or a recipe that meets a 'Treat' mood preference.

Return ONLY valid JSON (no markdown, no extra text) in this exact format:
{{
  "optimizedMeal": {{
    "name": "Meal Name",
    "calories": 550,
    "macros": {{"protein": 25, "carbs": 65, "fat": 15}},
    "prepTime": 20,
    "recipe": "Brief cooking instructions or where to order",
    "type": "homemade"
  }},
  "fastEasyMeal": {{
    "name": "Meal Name",
    "calories": 520,
    "macros": {{"protein": 22, "carbs": 60, "fat": 16}},
    "prepTime": 10,
    "recipe": "Quick preparation steps",
    "type": "quick"
  }},
  "indulgentMeal": {{
    "name": "Meal Name",
    "calories": 650,
    "macros": {{"protein": 28, "carbs": 75, "fat": 22}},
    "prepTime": 15,
    "recipe": "Delivery link or recipe",
    "type": "indulgent"
  }}
}}"#,
        name = user.first_name,
        age = user.age,
        goal = user.weight_goal,
        restrictions = restrictions_line(&user.dietary_restrictions),
        budget = payload.budget,
        mood = payload.mood,
        time_of_day = payload.time_of_day,
        meal_type = payload.meal_type,
        target = band.target,
        fast_minutes = FAST_MEAL_MAX_MINUTES,
        indulgent_max = band.indulgent_max,
    )
}

#[cfg(test)]
mod prompt_tests {
    use super::*;
    use crate::recommendations::dto::UserProfile;

    fn ana(meal_type: &str, restrictions: Vec<String>) -> RequestPayload {
        RequestPayload {
            user_data: UserProfile {
                first_name: "Ana".into(),
                age: 30,
                weight_goal: "lose".into(),
                dietary_restrictions: restrictions,
                default_budget: "Low".into(),
            },
            meal_type: meal_type.into(),
            budget: "Low".into(),
            mood: "Tired".into(),
            time_of_day: "Morning".into(),
        }
    }

    #[test]
    fn bands_for_known_meal_types() {
        assert_eq!(
            CalorieBand::for_meal_type("breakfast"),
            CalorieBand { target: 400, min: 360, max: 440, indulgent_max: 480 }
        );
        let lunch = CalorieBand::for_meal_type("Lunch");
        assert_eq!((lunch.min, lunch.max), (540, 660));
        let dinner = CalorieBand::for_meal_type("DINNER");
        assert_eq!((dinner.min, dinner.max), (630, 770));
    }

    #[test]
    fn unknown_meal_type_uses_default_target() {
        for meal_type in ["Snack", "", "brunch"] {
            let band = CalorieBand::for_meal_type(meal_type);
            assert_eq!(band.target, DEFAULT_CALORIE_TARGET);
            assert_eq!((band.min, band.max), (450, 550));
        }
    }

    #[test]
    fn breakfast_prompt_states_target_and_range() {
        let prompt = render_prompt(&ana("Breakfast", vec!["vegetarian".into()]));
        assert!(prompt.contains("Calorie Target: 400 calories (range: 360-440)"));
        assert!(prompt.contains("for Ana (age 30)"));
        assert!(prompt.contains("- Dietary restrictions: vegetarian"));
        assert!(prompt.contains("- Current Mood: Tired"));
        assert!(prompt.contains("\"optimizedMeal\": {"));
    }

    #[test]
    fn empty_restrictions_are_spelled_out() {
        let prompt = render_prompt(&ana("Dinner", vec![]));
        assert!(prompt.contains("- No dietary restrictions"));
        assert!(prompt.contains("up to 20% above target, 840 calories at most"));
    }

    #[test]
    fn multiple_restrictions_are_comma_joined() {
        let prompt = render_prompt(&ana("Lunch", vec!["vegan".into(), "gluten-free".into()]));
        assert!(prompt.contains("Dietary restrictions: vegan, gluten-free"));
    }

    #[test]
    fn slot_rules_keep_their_wording() {
        let prompt = render_prompt(&ana("Breakfast", vec![]));
        assert!(prompt.contains(
            "1. **The Optimized Meal**: A nutritionally perfect meal (360-440 calories) that prioritizes fresh, home-cookable meals aligned with the weight goal."
        ));
        assert!(prompt.contains(
            "2. **The Fast/Easy Meal**: A simple meal that can be prepared in max 15 minutes, respecting budget constraints."
        ));
        assert!(prompt.contains(
            "3. **The Indulgent Meal**: A slightly higher-calorie (up to 20% above target, 480 calories at most) but still healthy suggestion."
        ));
    }

    #[test]
    fn blank_budget_is_embedded_as_given() {
        let mut payload = ana("Lunch", vec![]);
        payload.budget = String::new();
        let prompt = render_prompt(&payload);
        assert!(prompt.contains("- Budget Level: \n"));
        assert!(!prompt.contains("- Budget Level: Low"));
    }
}
