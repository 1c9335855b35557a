use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use tracing::error;

use crate::auth::MaybeUser;
use crate::state::AppState;
use crate::user_data::models::{UserDataField, UserDataView};
use crate::views::{escape_html, page};

/// Every accepted change is written immediately; over-limit input is reverted with a warning.
const AUTOSAVE_SCRIPT: &str = r#"
document.querySelectorAll('textarea[data-field]').forEach(function (el) {
  var field = el.dataset.field;
  var max = parseInt(el.dataset.max, 10);
  var counter = document.getElementById(field + '-count');
  var accepted = el.value;
  el.addEventListener('input', function () {
    var value = el.value;
    var length = Array.from(value).length;
    if (length > max) {
      el.value = accepted;
      notify(el.dataset.limitMessage, 'warning');
      return;
    }
    accepted = value;
    counter.textContent = length + '/' + max + ' caracteres';
    fetch('/api/user-data/' + field, {
      method: 'PUT',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify({ value: value })
    }).then(function (response) {
      if (response.status === 422) {
        return response.json().then(function (body) { notify(body.error, 'warning'); });
      }
      if (!response.ok) { throw new Error('status ' + response.status); }
    }).catch(function (error) {
      console.error('Error saving user data:', error);
      notify('Não foi possível salvar suas alterações.', 'error');
    });
  });
});
"#;

/// GET /
pub async fn handle_home_page(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
) -> Response {
    let Some(user) = user else {
        return Redirect::to("/login").into_response();
    };

    let data = match state.store.load(user.id).await {
        Ok(row) => row.map(UserDataView::from).unwrap_or_default(),
        Err(e) => {
            error!("Error loading user data: {e:?}");
            UserDataView::default()
        }
    };

    let biography = field_editor(
        UserDataField::Biography,
        &data.biography,
        "Biografia",
        "Conte quem você é, o que faz e suas principais conquistas (livros publicados, aparições na TV, etc.)",
        "Digite sua biografia aqui...",
        "",
    );
    let client_profile = field_editor(
        UserDataField::ClientProfile,
        &data.client_profile,
        "Perfil do Cliente Ideal",
        "Aqui é onde você descreve o seu cliente ideal em detalhes. Esta é a informação que alimentará quase todos os agentes.",
        "Descreva seu cliente ideal aqui...",
        r#"<p class="muted">Agentes disponíveis: <a href="/agents/perfil-cliente-ideal">[Perfil do Cliente Ideal]</a></p>"#,
    );

    let body = format!("{biography}{client_profile}");
    page("Início", Some(&user), &body, AUTOSAVE_SCRIPT).into_response()
}

fn field_editor(
    field: UserDataField,
    value: &str,
    title: &str,
    help: &str,
    placeholder: &str,
    extra: &str,
) -> String {
    let name = field.column();
    let max = field.max_chars();
    format!(
        r#"<section class="card" style="margin-bottom:1.5rem">
<h2>{title}</h2>
<p class="muted">{help}</p>
{extra}
<textarea id="{name}" data-field="{name}" data-max="{max}" data-limit-message="{limit}" rows="8" placeholder="{placeholder}">{value}</textarea>
<p class="muted" id="{name}-count">{count}/{max} caracteres</p>
</section>"#,
        title = escape_html(title),
        help = escape_html(help),
        limit = escape_html(&field.limit_message()),
        placeholder = escape_html(placeholder),
        value = escape_html(value),
        count = value.chars().count(),
    )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use tower::ServiceExt;
    use uuid::Uuid;

    use crate::routes::build_router;
    use crate::testing::{
        read_text, session_cookie, test_state, test_state_with_store, ScriptedCompletion,
    };
    use crate::user_data::models::UserDataField;
    use crate::user_data::store::{MemoryUserDataStore, UserDataStore};

    #[tokio::test]
    async fn test_redirects_to_login_without_session() {
        let app = build_router(test_state(ScriptedCompletion::replying(None)));

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/login");
    }

    #[tokio::test]
    async fn test_renders_saved_fields_escaped_with_counters() {
        let store = Arc::new(MemoryUserDataStore::new());
        let user_id = Uuid::new_v4();
        store
            .save_field(user_id, UserDataField::Biography, "Eu <3 vender")
            .await
            .unwrap();
        let app = build_router(test_state_with_store(
            ScriptedCompletion::replying(None),
            store,
        ));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header("cookie", session_cookie(user_id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = read_text(response).await;
        assert!(html.contains("Eu &lt;3 vender</textarea>"));
        assert!(html.contains("12/1000 caracteres"));
        assert!(html.contains("0/6000 caracteres"));
        assert!(html.contains(r#"data-field="client_profile""#));
        assert!(html.contains(r#"data-max="1000""#));
        assert!(!html.contains("maxlength"));
        assert!(html.contains("/agents/perfil-cliente-ideal"));
    }
}
