//! Dashboard page and form handlers for devices.

use axum::extract::{Form, Path, State};
use axum::response::{Html, Redirect};
use serde::Deserialize;

use homedeck_app::ports::EventPublisher;
use homedeck_domain::device::Device;
use homedeck_domain::id::DeviceId;

use super::{Tab, escape, layout};
use crate::state::AppState;

/// Form body for the −/+ temperature buttons.
#[derive(Debug, Deserialize)]
pub struct AdjustTemperatureForm {
    /// Signed increment carried by a hidden input.
    pub delta: i32,
}

fn device_card(device: &Device) -> String {
    let name = escape(&device.name);
    let id = escape(device.id.as_str());
    let status = if device.on { "On" } else { "Off" };
    let switch_label = if device.on { "Turn off" } else { "Turn on" };

    let mut card = format!(
        "<div class=\"card\">\n\
         <h2>{name}</h2>\n\
         <div class=\"row\"><span>{status}</span>\n\
         <form method=\"post\" action=\"/devices/{id}/toggle\">\
         <button type=\"submit\">{switch_label}</button></form></div>\n"
    );

    // The temperature controls mirror the original card: visible only while
    // the device is both temperature-capable and switched on.
    if device.on
        && let Some(thermostat) = device.thermostat
    {
        let value = thermostat.value;
        card.push_str(&format!(
            "<div class=\"temp\">\n\
             <form method=\"post\" action=\"/devices/{id}/temperature\">\
             <input type=\"hidden\" name=\"delta\" value=\"-1\">\
             <button type=\"submit\">−</button></form>\n\
             <span>{value}°C</span>\n\
             <form method=\"post\" action=\"/devices/{id}/temperature\">\
             <input type=\"hidden\" name=\"delta\" value=\"1\">\
             <button type=\"submit\">+</button></form>\n\
             </div>\n"
        ));
        card.push_str(&format!(
            "<p class=\"muted\">range {} to {}°C</p>\n",
            thermostat.range.min, thermostat.range.max
        ));
    }

    card.push_str("</div>\n");
    card
}

/// `GET /` — device cards in display order.
pub async fn index<EP>(State(state): State<AppState<EP>>) -> Html<String>
where
    EP: EventPublisher + 'static,
{
    let body: String = state
        .device_service
        .list_devices()
        .iter()
        .map(device_card)
        .collect();

    Html(layout("Devices", Tab::Devices, &body))
}

/// `POST /devices/{id}/toggle` — flip and redirect back (PRG).
///
/// Unknown ids redirect silently: the registry treats them as a no-op and the
/// page simply re-renders unchanged.
pub async fn toggle<EP>(State(state): State<AppState<EP>>, Path(id): Path<String>) -> Redirect
where
    EP: EventPublisher + 'static,
{
    // A publisher failure still leaves the state correctly mutated, so the
    // redirect is unconditional.
    if let Err(err) = state.device_service.toggle_device(&DeviceId::new(id)).await {
        tracing::error!(error = %err, "toggle failed to publish");
    }
    Redirect::to("/")
}

/// `POST /devices/{id}/temperature` — clamped adjust and redirect back (PRG).
pub async fn adjust_temperature<EP>(
    State(state): State<AppState<EP>>,
    Path(id): Path<String>,
    Form(form): Form<AdjustTemperatureForm>,
) -> Redirect
where
    EP: EventPublisher + 'static,
{
    if let Err(err) = state
        .device_service
        .adjust_temperature(&DeviceId::new(id), form.delta)
        .await
    {
        tracing::error!(error = %err, "temperature adjustment failed to publish");
    }
    Redirect::to("/")
}
