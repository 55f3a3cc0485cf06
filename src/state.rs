use crate::config::AppConfig;
use crate::recommendations::gemini::{GeminiClient, TextGenerator};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub generator: Arc<dyn TextGenerator>,
}

impl AppState {
    pub fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        if config.gemini.api_key.is_none() {
            tracing::warn!("GOOGLE_API_KEY is not set; recommendation requests will fail");
        }

        let generator =
            Arc::new(GeminiClient::new(config.gemini.clone())?) as Arc<dyn TextGenerator>;

        Ok(Self::from_parts(config, generator))
    }

    pub fn from_parts(config: Arc<AppConfig>, generator: Arc<dyn TextGenerator>) -> Self {
        Self { config, generator }
    }

    #[cfg(test)]
    pub fn fake(reply: &str) -> Self {
        use crate::error::RecommendationError;
        use async_trait::async_trait;

        struct FakeGenerator(String);
        #[async_trait]
        impl TextGenerator for FakeGenerator {
            async fn generate(&self, _prompt: &str) -> Result<String, RecommendationError> {
                Ok(self.0.clone())
            }
        }

        let config = Arc::new(AppConfig {
            host: "127.0.0.1".into(),
            port: 0,
            gemini: crate::config::GeminiConfig {
                api_key: Some("test".into()),
                api_base: "http://fake.local".into(),
                model: "fake".into(),
                timeout_secs: 1,
            },
        });

        let generator = Arc::new(FakeGenerator(reply.to_string())) as Arc<dyn TextGenerator>;
        Self { config, generator }
    }
}
