//! Profile generation: prompt, single completion call, lenient JSON parse.

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::llm_client::{strip_json_fences, CompletionProvider};
use crate::profile::prompts::{build_profile_prompt, PROFILE_SYSTEM};

/// Request body for profile generation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GenerateProfileRequest {
    pub biography: String,
    #[serde(rename = "additionalContext")]
    pub additional_context: String,
}

/// Generates a profile and returns the model's JSON as-is.
///
/// Empty or non-JSON content yields `{}`. Transport and API failures are
/// returned as `AppError::Generation`.
pub async fn generate_profile(
    llm: &dyn CompletionProvider,
    request: &GenerateProfileRequest,
) -> Result<Value, AppError> {
    let prompt = build_profile_prompt(&request.biography, &request.additional_context);

    info!(
        "Requesting ideal customer profile (biography: {} chars, context: {} chars)",
        request.biography.chars().count(),
        request.additional_context.chars().count()
    );

    let content = llm
        .complete_json(PROFILE_SYSTEM, &prompt)
        .await
        .map_err(|e| AppError::Generation(e.to_string()))?;

    Ok(parse_profile_content(content.as_deref()))
}

/// Parses completion text as JSON, falling back to an empty object.
pub fn parse_profile_content(content: Option<&str>) -> Value {
    let Some(text) = content.map(strip_json_fences).filter(|t| !t.is_empty()) else {
        warn!("Completion returned no content, using empty profile");
        return Value::Object(Map::new());
    };

    match serde_json::from_str::<Value>(text) {
        Ok(value) => value,
        Err(e) => {
            warn!("Completion returned invalid JSON ({e}), using empty profile");
            Value::Object(Map::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::testing::ScriptedCompletion;

    #[test]
    fn test_parse_none_is_empty_object() {
        assert_eq!(parse_profile_content(None), json!({}));
    }

    #[test]
    fn test_parse_blank_is_empty_object() {
        assert_eq!(parse_profile_content(Some("   ")), json!({}));
    }

    #[test]
    fn test_parse_non_json_is_empty_object() {
        assert_eq!(
            parse_profile_content(Some("Desculpe, não posso ajudar.")),
            json!({})
        );
    }

    #[test]
    fn test_parse_fenced_json() {
        let value = parse_profile_content(Some("```json\n{\"a\": 1}\n```"));
        assert_eq!(value, json!({"a": 1}));
    }

    #[test]
    fn test_request_reads_camel_case_context() {
        let request: GenerateProfileRequest =
            serde_json::from_value(json!({"biography": "b", "additionalContext": "c"})).unwrap();
        assert_eq!(request.biography, "b");
        assert_eq!(request.additional_context, "c");

        let empty: GenerateProfileRequest = serde_json::from_value(json!({})).unwrap();
        assert!(empty.biography.is_empty());
    }

    #[tokio::test]
    async fn test_generate_sends_system_and_prompt() {
        let llm = ScriptedCompletion::replying(Some(r#"{"demographic_data":{"name":"Ana"}}"#));
        let request = GenerateProfileRequest {
            biography: "Nutricionista".to_string(),
            additional_context: "Atendimento online".to_string(),
        };

        let value = generate_profile(&llm, &request).await.unwrap();
        assert_eq!(value["demographic_data"]["name"], "Ana");

        let calls = llm.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, PROFILE_SYSTEM);
        assert!(calls[0].1.contains("Nutricionista"));
        assert!(calls[0].1.contains("Atendimento online"));
    }

    #[tokio::test]
    async fn test_generate_maps_provider_failure() {
        let llm = ScriptedCompletion::failing();
        let result = generate_profile(&llm, &GenerateProfileRequest::default()).await;
        assert!(matches!(result, Err(AppError::Generation(_))));
    }
}
