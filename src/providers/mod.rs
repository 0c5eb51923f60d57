//! Text-generation provider boundary.
//!
//! The briefing layer talks to a model through the [`Provider`] trait; the
//! concrete client is constructed by the caller (CLI or gateway startup) and
//! passed down explicitly.

pub mod factory;
pub mod http_client;
pub mod openai;
pub mod traits;

pub use factory::create_provider;
pub use openai::OpenAiProvider;
pub use traits::Provider;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn openai_provider_round_trip() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("authorization", "Bearer sk-test"))
            .and(body_partial_json(json!({
                "model": "gpt-4o-mini",
                "messages": [
                    {"role": "system", "content": "be kind"},
                    {"role": "user", "content": "hello"}
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [
                    {"message": {"role": "assistant", "content": "hi there"}}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let provider = OpenAiProvider::with_chat_url(
            Some("sk-test"),
            format!("{}/v1/chat/completions", server.uri()),
        );
        let reply = provider
            .chat_with_system(Some("be kind"), "hello", "gpt-4o-mini", 0.7)
            .await
            .unwrap();
        assert_eq!(reply, "hi there");
    }

    #[tokio::test]
    async fn openai_provider_surfaces_auth_failures() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let provider = OpenAiProvider::with_chat_url(Some("sk-bad"), server.uri());
        let err = provider
            .chat("hello", "gpt-4o-mini", 0.7)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("authentication failed"));
    }

    #[tokio::test]
    async fn openai_provider_surfaces_server_errors() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let provider = OpenAiProvider::with_chat_url(Some("sk-test"), server.uri());
        let err = provider
            .chat("hello", "gpt-4o-mini", 0.7)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("request failed"));
    }
}
