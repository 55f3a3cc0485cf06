use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub first_name: String,
    pub age: u32,
    pub weight_goal: String,
    pub dietary_restrictions: Vec<String>,
    pub default_budget: String,
}

/// Body of `POST /meal-recommendations`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestPayload {
    pub user_data: UserProfile,
    pub meal_type: String,
    pub budget: String,
    pub mood: String,
    pub time_of_day: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Macros {
    pub protein: i64,
    pub carbs: i64,
    pub fat: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MealOption {
    pub name: String,
    pub calories: i64,
    pub macros: Macros,
    pub prep_time: i64,
    pub recipe: String,
    #[serde(rename = "type")]
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponse {
    pub optimized_meal: MealOption,
    pub fast_easy_meal: MealOption,
    pub indulgent_meal: MealOption,
}
