//! HTML page routes: `/`, `/login`, `/dashboard`, `/logout`.
//!
//! These carry no business logic, only session-presence redirects around
//! minimal HTML shells. The React frontend owns the real UI; the shells
//! exist so the server is usable stand-alone.

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::response::{Html, IntoResponse, Redirect, Response};

use crate::auth::session::clear_session_cookie;
use crate::config::AppEnv;
use crate::error::AppResult;
use crate::handlers::auth::delete_session_row;
use crate::middleware::auth::OptionalTeacher;
use crate::state::AppState;

const LOGIN_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>ClassTrack - Login</title></head>
<body>
  <h1>Teacher Login</h1>
  <form id="login-form">
    <input name="username" placeholder="Username or email" autocomplete="username">
    <input name="password" type="password" placeholder="Password" autocomplete="current-password">
    <button type="submit">Log in</button>
  </form>
</body>
</html>
"#;

/// GET /
///
/// Redirect to the dashboard when logged in, to the login page otherwise.
pub async fn index(teacher: OptionalTeacher) -> AppResult<Redirect> {
    Ok(match teacher.0 {
        Some(_) => Redirect::to("/dashboard"),
        None => Redirect::to("/login"),
    })
}

/// GET /login
pub async fn login_page(teacher: OptionalTeacher) -> AppResult<Response> {
    Ok(match teacher.0 {
        Some(_) => Redirect::to("/dashboard").into_response(),
        None => Html(LOGIN_PAGE).into_response(),
    })
}

/// GET /dashboard
pub async fn dashboard(teacher: OptionalTeacher) -> AppResult<Response> {
    let Some(current) = teacher.0 else {
        return Ok(Redirect::to("/login").into_response());
    };

    let page = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>ClassTrack - Dashboard</title></head>
<body>
  <h1>Welcome, {}</h1>
  <div id="students"></div>
  <a href="/logout">Log out</a>
</body>
</html>
"#,
        html_escape(&current.teacher.full_name)
    );
    Ok(Html(page).into_response())
}

/// GET /logout
///
/// Clears the session (row and cookie) and redirects to the login page.
pub async fn logout(
    State(state): State<AppState>,
    headers: axum::http::HeaderMap,
) -> AppResult<Response> {
    delete_session_row(&state, &headers).await?;
    let cookie = clear_session_cookie(state.config.env == AppEnv::Production);
    Ok(([(SET_COOKIE, cookie)], Redirect::to("/login")).into_response())
}

/// Minimal HTML escaping for interpolated profile fields.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::html_escape;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            html_escape(r#"<b>"A&B"</b>"#),
            "&lt;b&gt;&quot;A&amp;B&quot;&lt;/b&gt;"
        );
        assert_eq!(html_escape("John Smith"), "John Smith");
    }
}
