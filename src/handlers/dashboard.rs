use axum::response::Html;

static DASHBOARD_HTML: &str = include_str!("../web/dashboard.html");

// GET /
pub async fn dashboard_page() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}
