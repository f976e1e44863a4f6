//! Askama Templates
//!
//! Template structs for rendering HTML pages. Output is HTML-escaped by
//! askama, so names go into the markup as submitted.

use askama::Template;
use askama_web::WebTemplate;
use junban_domain::ordering::OrderingPage;

const TITLE: &str = "Junban";

/// Submission form template.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub title: &'static str,
}

impl IndexTemplate {
    pub fn new() -> Self {
        Self { title: TITLE }
    }
}

impl Default for IndexTemplate {
    fn default() -> Self {
        Self::new()
    }
}

/// Stored page template, names in stored order.
#[derive(Template, WebTemplate)]
#[template(path = "result.html")]
pub struct ResultTemplate {
    pub title: &'static str,
    pub page_id: String,
    pub names: Vec<String>,
    pub enable_likes: bool,
}

impl ResultTemplate {
    pub fn new(page_id: String, page: OrderingPage) -> Self {
        let enable_likes = page.enable_likes();
        Self {
            title: TITLE,
            page_id,
            names: page.into_names(),
            enable_likes,
        }
    }
}
