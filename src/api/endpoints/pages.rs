//! HTML pages. Both are static; their inline scripts call the JSON API.

use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../../resources/templates/index.html");
const HISTORY_HTML: &str = include_str!("../../../resources/templates/history.html");

/// `GET /`: symptom intake form.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// `GET /history`: table of past analyses.
pub async fn history() -> Html<&'static str> {
    Html(HISTORY_HTML)
}
