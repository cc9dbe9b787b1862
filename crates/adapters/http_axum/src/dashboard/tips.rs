//! Dashboard page for the tip catalog.

use axum::extract::State;
use axum::response::Html;

use homedeck_app::ports::EventPublisher;

use super::{Tab, escape, layout};
use crate::state::AppState;

/// `GET /tips` — the static tip list.
pub async fn index<EP>(State(state): State<AppState<EP>>) -> Html<String>
where
    EP: EventPublisher + 'static,
{
    let body: String = state
        .tip_service
        .list_tips()
        .iter()
        .map(|tip| {
            format!(
                "<div class=\"card\">\n\
                 <h2>{}</h2>\n\
                 <p>{}</p>\n\
                 </div>\n",
                escape(&tip.title),
                escape(&tip.body)
            )
        })
        .collect();

    Html(layout("Tips", Tab::Tips, &body))
}
