//! Unauthenticated admin endpoints for the file server hit counter.

use axum::{extract::State, http::StatusCode, response::Html};

use crate::handlers::AppState;

/// Renders the admin page for the given hit count.
pub fn render_report(hits: u64) -> String {
    format!(
        r#"<html>
  <body>
    <h1>Welcome, Chirpy Admin</h1>
    <p>Chirpy has been visited {} times!</p>
  </body>
</html>
"#,
        hits
    )
}

/// Report how often the file server has been hit
pub async fn metrics(State(state): State<AppState>) -> Html<String> {
    Html(render_report(state.hits.read()))
}

/// Reset the hit counter to zero
pub async fn reset(State(state): State<AppState>) -> StatusCode {
    state.hits.reset();
    tracing::info!("File server hit counter reset");
    StatusCode::OK
}
