use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
};

use crate::auth::MaybeUser;
use crate::state::AppState;
use crate::views::{escape_html, page, BRAND};

/// Reads the provider's redirect fragment and hands the token to `/auth/session`.
const CALLBACK_SCRIPT: &str = r#"
(function () {
  var params = new URLSearchParams(window.location.hash.slice(1));
  var query = new URLSearchParams(window.location.search);
  var token = params.get('access_token');
  var failed = function (message) {
    document.getElementById('status').textContent = message;
    document.getElementById('retry').hidden = false;
  };
  if (!token) {
    failed(query.get('error_description') || params.get('error_description') || 'Sessão não encontrada.');
    return;
  }
  fetch('/auth/session', {
    method: 'POST',
    headers: { 'Content-Type': 'application/json' },
    body: JSON.stringify({ access_token: token })
  }).then(function (response) {
    if (!response.ok) { throw new Error('session rejected'); }
    window.location.replace('/');
  }).catch(function (error) {
    console.error('Error establishing session:', error);
    failed('Não foi possível entrar. Tente novamente.');
  });
})();
"#;

/// GET /login
pub async fn handle_login_page(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
) -> Response {
    if user.is_some() {
        return Redirect::to("/").into_response();
    }

    let body = format!(
        r#"<div class="card" style="max-width:28rem;margin:2rem auto;text-align:center">
<h1>Login {BRAND}</h1>
<p><a class="button" href="{href}">Entrar com {provider}</a></p>
</div>"#,
        href = escape_html(&state.config.authorize_url()),
        provider = escape_html(&provider_label(&state.config.auth_provider)),
    );

    page("Login", None, &body, "").into_response()
}

/// GET /auth/callback
pub async fn handle_auth_callback() -> Response {
    let body = r#"<div class="card" style="max-width:28rem;margin:2rem auto;text-align:center">
<p id="status">Entrando...</p>
<p id="retry" hidden><a class="button" href="/login">Voltar ao login</a></p>
</div>"#;

    page("Entrando", None, body, CALLBACK_SCRIPT).into_response()
}

fn provider_label(provider: &str) -> String {
    let mut chars = provider.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().to_string() + chars.as_str(),
    }
}
