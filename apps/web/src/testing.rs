//! Test doubles and helpers shared by handler tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{body::to_bytes, response::Response};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::Value;
use uuid::Uuid;

use crate::auth::Claims;
use crate::config::Config;
use crate::llm_client::{CompletionProvider, LlmError};
use crate::state::AppState;
use crate::user_data::store::MemoryUserDataStore;

/// Completion provider that replays a fixed answer and records every call.
#[derive(Clone)]
pub struct ScriptedCompletion {
    reply: Option<Option<String>>,
    calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl ScriptedCompletion {
    pub fn replying(content: Option<&str>) -> Self {
        Self {
            reply: Some(content.map(str::to_string)),
            calls: Arc::default(),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            calls: Arc::default(),
        }
    }

    /// `(system, user)` pairs, in call order.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionProvider for ScriptedCompletion {
    async fn complete_json(&self, system: &str, user: &str) -> Result<Option<String>, LlmError> {
        self.calls
            .lock()
            .unwrap()
            .push((system.to_string(), user.to_string()));

        self.reply.clone().ok_or(LlmError::Api {
            status: 503,
            message: "upstream unavailable".to_string(),
        })
    }
}

pub fn test_state(llm: ScriptedCompletion) -> AppState {
    test_state_with_store(llm, Arc::new(MemoryUserDataStore::new()))
}

pub fn test_state_with_store(llm: ScriptedCompletion, store: Arc<MemoryUserDataStore>) -> AppState {
    AppState {
        store,
        llm: Arc::new(llm),
        config: Config::for_tests(),
    }
}

fn sign(config: &Config, user_id: Uuid, exp: i64) -> String {
    let claims = Claims {
        sub: user_id,
        email: Some("user@example.com".to_string()),
        exp,
        aud: config.auth_audience.clone(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.auth_jwt_secret.as_bytes()),
    )
    .unwrap()
}

/// A provider-style access token valid for one hour.
pub fn token_for(config: &Config, user_id: Uuid) -> String {
    sign(config, user_id, (Utc::now() + Duration::hours(1)).timestamp())
}

pub fn expired_token_for(config: &Config, user_id: Uuid) -> String {
    sign(config, user_id, (Utc::now() - Duration::hours(1)).timestamp())
}

pub fn session_cookie(user_id: Uuid) -> String {
    format!(
        "{}={}",
        crate::auth::SESSION_COOKIE,
        token_for(&Config::for_tests(), user_id)
    )
}

pub async fn read_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn read_json(response: Response) -> Value {
    serde_json::from_str(&read_text(response).await).unwrap()
}
