//! Landing (quick start) page handler.

use axum::{extract::Extension, response::Html};
use handlebars::Handlebars;
use layout_common::{LayoutError, LayoutResult};
use map_layout::AppMetadata;
use serde::Serialize;
use std::sync::Arc;

use crate::state::AppState;

/// Landing page template. Values are HTML-escaped by handlebars.
const QUICK_START_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{name}}</title>
    <style>
        body { margin: 0; font-family: sans-serif; background: #fafafa; }
        .app-header { background: {{color}}; color: white; padding: 20px 40px; }
        .app-header h1 { margin: 0; font-size: 1.5rem; font-weight: 600; }
        .app-header .subtitle { opacity: 0.8; font-size: 0.9rem; margin-top: 4px; }
        .layouts { padding: 30px 40px; }
        .layouts a { color: {{color}}; font-weight: 500; }
    </style>
</head>
<body>
    <div class="app-header">
        <h1>{{name}}</h1>
        <div class="subtitle">{{description}}</div>
    </div>
    <div class="layouts">
        <h2>Layouts</h2>
        <ul>
            <li><a href="{{map_layout_url}}">Map Layout</a></li>
        </ul>
    </div>
</body>
</html>
"#;

#[derive(Serialize)]
struct QuickStartContext<'a> {
    name: &'a str,
    description: &'a str,
    color: &'a str,
    map_layout_url: String,
}

/// Render the landing page for `app`.
pub fn render_quick_start(app: &AppMetadata) -> LayoutResult<String> {
    let context = QuickStartContext {
        name: &app.name,
        description: &app.description,
        color: &app.color,
        map_layout_url: app.reverse("map_layout")?,
    };

    Handlebars::new()
        .render_template(QUICK_START_HTML, &context)
        .map_err(|e| LayoutError::Internal(format!("landing page template: {}", e)))
}

/// GET /layout-showcase - Landing page
pub async fn quick_start_handler(Extension(state): Extension<Arc<AppState>>) -> Html<String> {
    Html(state.landing_page.clone())
}
