//! Ideal customer profile agent page: additional context in, rendered profile out.

use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use tracing::error;

use crate::auth::{CurrentUser, MaybeUser};
use crate::profile::generator::{generate_profile, GenerateProfileRequest};
use crate::profile::markdown::{format_profile_markdown, markdown_to_html};
use crate::profile::models::IdealCustomerProfile;
use crate::state::AppState;
use crate::views::{escape_html, page};

const PAGE_TITLE: &str = "Perfil do Cliente Ideal";

const COPY_SCRIPT: &str = r#"
var copy = document.getElementById('copy-markdown');
if (copy) {
  copy.addEventListener('click', function () {
    var markdown = document.getElementById('markdown').value;
    navigator.clipboard.writeText(markdown).then(function () {
      notify('O conteúdo foi copiado para sua área de transferência', 'success');
    });
  });
}
var form = document.getElementById('generate');
form.addEventListener('submit', function () {
  var button = form.querySelector('button');
  button.disabled = true;
  button.textContent = 'Gerando...';
});
"#;

#[derive(Debug, Default, Deserialize)]
pub struct AgentForm {
    #[serde(default)]
    pub additional_context: String,
}

enum Outcome {
    Empty,
    Generated { markdown: String, html: String },
    Failed,
}

/// GET /agents/perfil-cliente-ideal
pub async fn handle_agent_page(MaybeUser(user): MaybeUser) -> Response {
    let Some(user) = user else {
        return Redirect::to("/login").into_response();
    };
    render(&user, "", Outcome::Empty).into_response()
}

/// POST /agents/perfil-cliente-ideal
///
/// Uses the stored biography plus the submitted context.
pub async fn handle_agent_generate(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
    Form(form): Form<AgentForm>,
) -> Response {
    let Some(user) = user else {
        return Redirect::to("/login").into_response();
    };

    let biography = match state.store.load(user.id).await {
        Ok(row) => row.map(|r| r.biography).unwrap_or_default(),
        Err(e) => {
            error!("Error loading user data: {e:?}");
            String::new()
        }
    };

    let request = GenerateProfileRequest {
        biography,
        additional_context: form.additional_context,
    };

    let outcome = match generate_profile(state.llm.as_ref(), &request).await {
        Ok(value) => {
            let markdown = format_profile_markdown(&IdealCustomerProfile::from_value(value));
            let html = markdown_to_html(&markdown);
            Outcome::Generated { markdown, html }
        }
        Err(e) => {
            error!("Error generating profile: {e}");
            Outcome::Failed
        }
    };

    render(&user, &request.additional_context, outcome).into_response()
}

fn render(user: &CurrentUser, additional_context: &str, outcome: Outcome) -> Html<String> {
    let (notice, copy_button, result) = match outcome {
        Outcome::Empty => (String::new(), String::new(), String::new()),
        Outcome::Failed => (
            r#"<div class="notice error"><strong>Erro ao gerar perfil</strong><br>Ocorreu um erro ao gerar o perfil do cliente ideal. Tente novamente.</div>"#.to_string(),
            String::new(),
            String::new(),
        ),
        Outcome::Generated { markdown, html } => (
            String::new(),
            format!(
                r#"<button type="button" id="copy-markdown" title="Copiar markdown">Copiar markdown</button><textarea id="markdown" hidden>{}</textarea>"#,
                escape_html(&markdown)
            ),
            html,
        ),
    };

    let body = format!(
        r#"<h1>{PAGE_TITLE}</h1>
{notice}
<div class="grid">
<section>
<h3>Contexto Adicional</h3>
<p class="muted">Use este campo para colocar qualquer informação relevante que será incluída no prompt final</p>
<form id="generate" method="post" action="/agents/perfil-cliente-ideal">
<textarea name="additional_context" rows="14" placeholder="Digite informações adicionais aqui...">{context}</textarea>
<p><button type="submit">Gerar Perfil</button></p>
</form>
</section>
<section>
<div style="display:flex;justify-content:space-between;align-items:center"><h3>Resultado</h3>{copy_button}</div>
<div class="card result markdown-content">{result}</div>
</section>
</div>"#,
        context = escape_html(additional_context),
    );

    page(PAGE_TITLE, Some(user), &body, COPY_SCRIPT)
}
