use async_trait::async_trait;

use crate::llm_client::{LlmClient, LlmError};

/// Executes one agent turn. Carried in `AppState` as `Arc<dyn AgentRuntime>`
/// so crews can run against the provider or offline.
#[async_trait]
pub trait AgentRuntime: Send + Sync {
    /// Short label for logs.
    fn name(&self) -> &str;

    async fn execute(&self, system: &str, prompt: &str) -> Result<String, LlmError>;
}

/// Runs agent turns through the provider.
pub struct LlmRuntime(pub LlmClient);

#[async_trait]
impl AgentRuntime for LlmRuntime {
    fn name(&self) -> &str {
        self.0.model()
    }

    async fn execute(&self, system: &str, prompt: &str) -> Result<String, LlmError> {
        self.0.call_text(prompt, system).await
    }
}

/// Used when no provider key is configured. Every turn yields an empty output.
pub struct OfflineRuntime;

#[async_trait]
impl AgentRuntime for OfflineRuntime {
    fn name(&self) -> &str {
        "offline"
    }

    async fn execute(&self, _system: &str, _prompt: &str) -> Result<String, LlmError> {
        Ok(String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_offline_runtime_returns_empty_output() {
        let out = OfflineRuntime.execute("system", "prompt").await.unwrap();
        assert!(out.is_empty());
        assert_eq!(OfflineRuntime.name(), "offline");
    }

    #[test]
    fn test_llm_runtime_is_named_after_model() {
        let client = LlmClient::new("key".to_string(), "claude-sonnet-4-5".to_string()).unwrap();
        assert_eq!(LlmRuntime(client).name(), "claude-sonnet-4-5");
    }
}
