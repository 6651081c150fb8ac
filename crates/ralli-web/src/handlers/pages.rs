//! Page handlers for serving HTML templates

use axum::{extract::Query, response::Html};
use ralli_core::Tab;
use serde::Deserialize;
use std::fmt::Write as _;
use tracing::warn;

const ADMIN_TEMPLATE: &str = include_str!("../../templates/admin.html");
const TABS_SLOT: &str = "<!-- tabs -->";
const INITIAL_TAB_SLOT: &str = "__INITIAL_TAB__";

/// Query parameters accepted by the admin page
#[derive(Debug, Default, Deserialize)]
pub struct AdminPageQuery {
    /// Slug of the tab to open first
    pub tab: Option<String>,
}

/// Admin console page, opened on the tab named by `?tab=`
pub async fn admin_page(Query(query): Query<AdminPageQuery>) -> Html<String> {
    let tab = query.tab.as_deref().map_or_else(Tab::default, |raw| {
        raw.parse::<Tab>().unwrap_or_else(|e| {
            warn!("Ignoring admin tab: {}", e);
            Tab::default()
        })
    });

    Html(render_admin(tab))
}

fn render_admin(active: Tab) -> String {
    let mut nav = String::new();
    for tab in Tab::ALL {
        let class = if tab == active { r#" class="active""# } else { "" };
        let _ = write!(
            nav,
            r#"<button data-tab="{}"{class}>{}</button>"#,
            tab.slug(),
            tab.label()
        );
    }

    ADMIN_TEMPLATE
        .replace(TABS_SLOT, &nav)
        .replace(INITIAL_TAB_SLOT, active.slug())
}

/// New components showcase page
pub async fn compynew_page() -> Html<&'static str> {
    Html(include_str!("../../templates/compynew.html"))
}

/// Join-game component demo page
pub async fn join_game_demo_page() -> Html<&'static str> {
    Html(include_str!("../../templates/join_game_demo.html"))
}
