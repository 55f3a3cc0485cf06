use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;
use tracing::{debug, warn};

use super::dto::{RecommendationResponse, RequestPayload};
use super::gemini::TextGenerator;
use super::prompt::render_prompt;
use crate::error::RecommendationError;

/// Returns the span from the first `{` to the last `}` in `text`.
pub(crate) fn extract_json_object(text: &str) -> Option<&str> {
    lazy_static! {
        static ref OBJECT_RE: Regex = Regex::new(r"(?s)\{.*\}").unwrap();
    }
    OBJECT_RE.find(text).map(|m| m.as_str())
}

/// Asks the model for three meal options and returns its JSON object as-is.
pub async fn generate_recommendation(
    generator: &dyn TextGenerator,
    payload: &RequestPayload,
) -> Result<Value, RecommendationError> {
    let prompt = render_prompt(payload);
    let text = generator.generate(&prompt).await?;

    let raw = extract_json_object(&text).ok_or(RecommendationError::NoJsonInResponse)?;
    let value: Value = serde_json::from_str(raw).map_err(RecommendationError::InvalidJson)?;

    // The reply is passed through untouched; schema drift is only reported.
    match serde_json::from_value::<RecommendationResponse>(value.clone()) {
        Ok(_) => debug!(meal_type = %payload.meal_type, "recommendation matches schema"),
        Err(e) => warn!(error = %e, meal_type = %payload.meal_type, "recommendation does not match schema"),
    }

    Ok(value)
}

#[cfg(test)]
mod service_tests {
    use super::*;
    use async_trait::async_trait;

    struct CannedGenerator(&'static str);

    #[async_trait]
    impl TextGenerator for CannedGenerator {
        async fn generate(&self, prompt: &str) -> Result<String, RecommendationError> {
            assert!(prompt.contains("Calorie Target: 600 calories"));
            Ok(self.0.to_string())
        }
    }

    fn lunch() -> RequestPayload {
        serde_json::from_value(serde_json::json!({
            "mealType": "Lunch",
            "budget": "High",
            "mood": "Treat",
            "timeOfDay": "Afternoon",
            "userData": {
                "firstName": "Sam",
                "age": 41,
                "weightGoal": "maintain",
                "dietaryRestrictions": ["halal"],
                "defaultBudget": "Medium"
            }
        }))
        .unwrap()
    }

    #[test]
    fn extract_spans_outermost_braces() {
        let text = "```json\n{\"a\": {\"b\": 1}}\n```";
        assert_eq!(extract_json_object(text), Some("{\"a\": {\"b\": 1}}"));
        assert_eq!(extract_json_object("no object here"), None);
        assert_eq!(extract_json_object("line1 {\n\"x\": 2\n} tail"), Some("{\n\"x\": 2\n}"));
    }

    #[tokio::test]
    async fn fenced_reply_is_unwrapped() {
        let generator = CannedGenerator("Here you go:\n```json\n{\"optimizedMeal\": {\"name\": \"Bowl\"}}\n```");
        let value = generate_recommendation(&generator, &lunch()).await.unwrap();
        assert_eq!(value["optimizedMeal"]["name"], "Bowl");
    }

    #[tokio::test]
    async fn reply_without_braces_fails() {
        let generator = CannedGenerator("I cannot help with that.");
        let err = generate_recommendation(&generator, &lunch()).await.unwrap_err();
        assert!(matches!(err, RecommendationError::NoJsonInResponse));
        assert_eq!(err.to_string(), "Could not parse JSON from AI response");
    }

    #[tokio::test]
    async fn malformed_object_fails() {
        let generator = CannedGenerator("{ not: json }");
        let err = generate_recommendation(&generator, &lunch()).await.unwrap_err();
        assert!(matches!(err, RecommendationError::InvalidJson(_)));
    }
}
