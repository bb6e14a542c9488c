use askama::Template;
use axum::response::{Html, IntoResponse, Response};
use tracing::error;

use crate::web::error::ApiError;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub build_id: String,
}

pub async fn index_handler() -> Response {
    let template = IndexTemplate {
        build_id: option_env!("MERGINGTON_BUILD_ID")
            .unwrap_or("dev")
            .to_string(),
    };
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            error!(error = %err, "index_render_failed");
            ApiError::internal("Could not render page").into_response()
        }
    }
}
