use super::openai::OpenAiProvider;
use super::traits::Provider;
use crate::error::ProviderError;

/// Resolve an API key for a provider from config and environment variables.
///
/// Resolution order:
/// 1. Explicitly provided `api_key` parameter (trimmed, dropped if empty)
/// 2. Provider-specific environment variable (e.g. `OPENAI_API_KEY`)
/// 3. Generic fallback variables (`WELLPULSE_API_KEY`, `API_KEY`)
fn resolve_api_key(name: &str, explicit_api_key: Option<&str>) -> Option<String> {
    if let Some(key) = explicit_api_key.map(str::trim).filter(|k| !k.is_empty()) {
        return Some(key.to_string());
    }

    let provider_env_candidates: &[&str] = match name {
        "openai" => &["OPENAI_API_KEY"],
        _ => &[],
    };

    for env_var in provider_env_candidates
        .iter()
        .chain(["WELLPULSE_API_KEY", "API_KEY"].iter())
    {
        if let Ok(value) = std::env::var(env_var) {
            let value = value.trim();
            if !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }

    None
}

pub fn create_provider(
    name: &str,
    api_key: Option<&str>,
) -> Result<Box<dyn Provider>, ProviderError> {
    let resolved_key = resolve_api_key(name, api_key);
    let api_key = resolved_key.as_deref();
    match name {
        "openai" => Ok(Box::new(OpenAiProvider::new(api_key))),
        other => Err(ProviderError::Unknown {
            provider: other.to_string(),
        }),
    }
}
