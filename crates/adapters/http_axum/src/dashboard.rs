//! Server-side rendered HTML dashboard (no JavaScript).
//!
//! Pages are assembled by plain string building: a shared layout with a
//! two-tab navigation (devices, tips), and interactive controls as HTML
//! forms that POST and redirect (PRG pattern).

pub mod devices;
pub mod tips;

use axum::Router;
use axum::routing::{get, post};

use homedeck_app::ports::EventPublisher;

use crate::state::AppState;

/// Seconds between automatic page reloads.
const REFRESH_SECONDS: u32 = 10;

/// Build the dashboard sub-router for SSR HTML pages.
pub fn routes<EP>() -> Router<AppState<EP>>
where
    EP: EventPublisher + 'static,
{
    Router::new()
        .route("/", get(devices::index::<EP>))
        .route("/devices/{id}/toggle", post(devices::toggle::<EP>))
        .route(
            "/devices/{id}/temperature",
            post(devices::adjust_temperature::<EP>),
        )
        .route("/tips", get(tips::index::<EP>))
}

/// Which navigation tab is highlighted.
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum Tab {
    Devices,
    Tips,
}

/// Wrap page content in the shared HTML shell.
pub(crate) fn layout(title: &str, active: Tab, body: &str) -> String {
    let tab = |href: &str, label: &str, which: Tab| {
        let class = if which == active { " class=\"active\"" } else { "" };
        format!("<a href=\"{href}\"{class}>{label}</a>")
    };
    let nav = format!(
        "{}{}",
        tab("/", "Devices", Tab::Devices),
        tab("/tips", "Tips", Tab::Tips)
    );

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta http-equiv=\"refresh\" content=\"{REFRESH_SECONDS}\">\n\
         <title>{title} — homedeck</title>\n\
         <style>{STYLE}</style>\n\
         </head>\n\
         <body>\n\
         <header><h1>{title}</h1><nav>{nav}</nav></header>\n\
         <main>\n{body}</main>\n\
         </body>\n\
         </html>\n"
    )
}

const STYLE: &str = "\
    body{font-family:sans-serif;margin:0;background:#192f6a;color:#fff}\
    header{display:flex;justify-content:space-between;align-items:center;padding:1rem 2rem}\
    nav a{color:#ddd;margin-left:1rem;text-decoration:none}\
    nav a.active{color:#fff;font-weight:bold}\
    main{max-width:40rem;margin:0 auto;padding:0 1rem 2rem}\
    .card{background:rgba(255,255,255,.15);border-radius:10px;padding:1rem;margin-bottom:1rem}\
    .card h2{margin:0 0 .5rem;font-size:1.1rem}\
    .row{display:flex;justify-content:space-between;align-items:center}\
    .temp{display:flex;justify-content:center;align-items:center;gap:1rem;margin-top:.75rem}\
    button{background:#007aff;color:#fff;border:none;border-radius:8px;padding:.5rem 1rem;cursor:pointer}\
    .muted{color:#ddd;font-size:.85rem}";

/// Minimal HTML escaping for text interpolated into pages.
pub(crate) fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_escape_html_metacharacters() {
        assert_eq!(
            escape("a <b> & \"c\""),
            "a &lt;b&gt; &amp; &quot;c&quot;"
        );
    }

    #[test]
    fn should_mark_the_active_tab() {
        let page = layout("Devices", Tab::Devices, "<p>hi</p>");
        assert!(page.contains("<a href=\"/\" class=\"active\">Devices</a>"));
        assert!(page.contains("<a href=\"/tips\">Tips</a>"));
    }

    #[test]
    fn should_include_meta_refresh() {
        let page = layout("Tips", Tab::Tips, "");
        assert!(page.contains("http-equiv=\"refresh\""));
    }
}
