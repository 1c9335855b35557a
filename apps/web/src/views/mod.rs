//! Server-rendered pages. Markup is assembled with `format!`; every piece of
//! user or model text goes through `escape_html` first.

pub mod agent;
pub mod home;
pub mod login;

use axum::response::Html;

use crate::auth::CurrentUser;

pub const BRAND: &str = "copyOS";

const STYLE: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; background: #f7fafc; color: #1a202c; }
nav { background: #fff; box-shadow: 0 1px 2px rgba(0,0,0,.08); padding: .5rem 1rem; display: flex; justify-content: space-between; align-items: center; }
nav .brand { font-size: 1.25rem; font-weight: 700; color: #2b6cb0; text-decoration: none; }
nav form { display: inline; }
main { max-width: 72rem; margin: 0 auto; padding: 2rem 1rem; }
textarea { width: 100%; box-sizing: border-box; font: inherit; padding: .75rem; border: 1px solid #cbd5e0; border-radius: .375rem; }
button, .button { background: #3182ce; color: #fff; border: 0; border-radius: .375rem; padding: .5rem 1rem; cursor: pointer; text-decoration: none; display: inline-block; }
.muted { color: #718096; font-size: .875rem; }
.grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr)); gap: 2rem; }
.card { background: #fff; padding: 1.5rem; border-radius: .5rem; box-shadow: 0 1px 3px rgba(0,0,0,.1); }
.result { max-height: 80vh; overflow-y: auto; }
.result h1 { color: #2b6cb0; font-size: 1.5rem; }
.result h2 { color: #3182ce; font-size: 1.25rem; }
.notice { padding: .75rem 1rem; border-radius: .375rem; margin-bottom: 1rem; }
.notice.error { background: #fed7d7; }
#toasts { position: fixed; bottom: 1rem; right: 1rem; display: flex; flex-direction: column; gap: .5rem; }
.toast { padding: .75rem 1rem; border-radius: .375rem; color: #fff; box-shadow: 0 2px 6px rgba(0,0,0,.2); }
.toast.warning { background: #dd6b20; }
.toast.error { background: #e53e3e; }
.toast.success { background: #38a169; }
"#;

/// Non-blocking notifications, shared by every page.
const TOAST_SCRIPT: &str = r#"
function notify(message, status) {
  var box = document.getElementById('toasts');
  var toast = document.createElement('div');
  toast.className = 'toast ' + status;
  toast.textContent = message;
  box.appendChild(toast);
  setTimeout(function () { toast.remove(); }, 3000);
}
"#;

/// Escapes text for element content and double-quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

fn navigation(user: Option<&CurrentUser>) -> String {
    let account = match user {
        Some(user) => format!(
            r#"<span class="muted">{}</span> <form method="post" action="/auth/logout"><button type="submit">Sair</button></form>"#,
            escape_html(user.email.as_deref().unwrap_or(""))
        ),
        None => String::new(),
    };
    format!(r#"<nav><a class="brand" href="/">{BRAND}</a><div>{account}</div></nav>"#)
}

/// Full HTML document around `body`. `script` is appended after the toast helper.
pub fn page(title: &str, user: Option<&CurrentUser>, body: &str, script: &str) -> Html<String> {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html><html lang=\"pt-BR\"><head><meta charset=\"utf-8\">");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">");
    html.push_str(&format!("<title>{} · {BRAND}</title>", escape_html(title)));
    html.push_str("<style>");
    html.push_str(STYLE);
    html.push_str("</style></head><body>");
    html.push_str(&navigation(user));
    html.push_str("<main>");
    html.push_str(body);
    html.push_str("</main><div id=\"toasts\"></div><script>");
    html.push_str(TOAST_SCRIPT);
    html.push_str(script);
    html.push_str("</script></body></html>");
    Html(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b a="1">'x' & y</b>"#),
            "&lt;b a=&quot;1&quot;&gt;&#39;x&#39; &amp; y&lt;/b&gt;"
        );
    }

    #[test]
    fn test_navigation_shows_email_and_sign_out() {
        let user = CurrentUser {
            id: Uuid::new_v4(),
            email: Some("ana@example.com".to_string()),
        };
        let Html(html) = page("Início", Some(&user), "<p>oi</p>", "");
        assert!(html.contains("ana@example.com"));
        assert!(html.contains(r#"action="/auth/logout""#));
        assert!(html.contains("<p>oi</p>"));
    }

    #[test]
    fn test_navigation_without_user_has_no_sign_out() {
        let Html(html) = page("Login", None, "", "");
        assert!(!html.contains("/auth/logout"));
        assert!(html.contains(BRAND));
    }
}
