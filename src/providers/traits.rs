use async_trait::async_trait;

/// Text-generation boundary.
///
/// The scoring engine never sees a provider; only the briefing layer and
/// gateway state hold one, as an explicitly injected collaborator whose
/// lifecycle is owned by the caller. No process-wide client exists.
#[async_trait]
pub trait Provider: Send + Sync + std::fmt::Debug {
    async fn chat(&self, message: &str, model: &str, temperature: f64) -> anyhow::Result<String> {
        self.chat_with_system(None, message, model, temperature)
            .await
    }

    async fn chat_with_system(
        &self,
        system_prompt: Option<&str>,
        message: &str,
        model: &str,
        temperature: f64,
    ) -> anyhow::Result<String>;
}
