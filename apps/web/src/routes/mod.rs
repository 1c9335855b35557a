pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::auth::handlers as auth;
use crate::profile::handlers as profile;
use crate::state::AppState;
use crate::user_data::handlers as user_data;
use crate::views::{agent, home, login};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Pages
        .route("/", get(home::handle_home_page))
        .route("/login", get(login::handle_login_page))
        .route("/auth/callback", get(login::handle_auth_callback))
        .route(
            "/agents/perfil-cliente-ideal",
            get(agent::handle_agent_page).post(agent::handle_agent_generate),
        )
        // Session
        .route("/auth/session", post(auth::handle_create_session))
        .route("/auth/logout", post(auth::handle_logout))
        // API
        .route(
            "/api/ideal-customer-profile",
            post(profile::handle_generate_profile).fallback(profile::handle_method_not_allowed),
        )
        .route("/api/user-data", get(user_data::handle_get_user_data))
        .route("/api/user-data/:field", put(user_data::handle_save_field))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::build_router;
    use crate::testing::{read_json, test_state, ScriptedCompletion};

    #[tokio::test]
    async fn test_health() {
        let app = build_router(test_state(ScriptedCompletion::replying(None)));

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "copyos-web");
    }
}
