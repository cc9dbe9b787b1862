//! Seed tables — the fixed device list and tip catalog the session starts
//! with.
//!
//! These are literal tables, not configuration: the demo is defined by
//! exactly these five appliances and ten tips. State resets to this table on
//! every restart.

use homedeck_domain::device::{Device, TempRange, Thermostat};
use homedeck_domain::tip::Tip;

fn device(
    id: &str,
    name: &str,
    on: bool,
    thermostat: Option<(i32, i32, i32)>,
) -> Device {
    let mut builder = Device::builder().id(id).name(name).on(on);
    if let Some((value, min, max)) = thermostat {
        // The table below is fixed; these constructors cannot fail for it.
        let range = TempRange { min, max };
        builder = builder.thermostat(Thermostat { value, range });
    }
    match builder.build() {
        Ok(device) => device,
        Err(err) => unreachable!("seed table entry {id} failed validation: {err}"),
    }
}

/// The five simulated appliances, in display order.
#[must_use]
pub fn devices() -> Vec<Device> {
    vec![
        device("ac", "Air Conditioner", false, Some((22, 16, 30))),
        device("fridge", "Fridge", true, None),
        device("oven", "Oven", false, Some((180, 100, 250))),
        device("washer", "Washing Machine", false, None),
        device("tv", "TV", false, None),
    ]
}

/// The ten energy-saving tips, in display order.
#[must_use]
pub fn tips() -> Vec<Tip> {
    vec![
        Tip::new(
            "1",
            "Saving energy",
            "Switch appliances off when you are not using them to save power and \
             money. Prefer energy-saving bulbs and appliances with a high \
             efficiency rating.",
        ),
        Tip::new(
            "2",
            "Washing machine care",
            "Clean the filters regularly and pick a suitable wash programme to \
             extend the machine's life and save water and electricity.",
        ),
        Tip::new(
            "3",
            "Optimal fridge temperature",
            "Keep the main compartment around 4°C and the freezer at -18°C to \
             keep food fresh while saving energy.",
        ),
        Tip::new(
            "4",
            "Air conditioning and health",
            "Clean the air conditioner's filters at least once a month and keep \
             the temperature around 22°C for comfort and less wear on the unit.",
        ),
        Tip::new(
            "5",
            "TV standby mode",
            "Unplug the TV when you are not watching to cut standby consumption. \
             Use timers and the built-in energy-saving modes.",
        ),
        Tip::new(
            "6",
            "Oven and cooking",
            "Use cookware that matches the hob size and keep lids on pots to \
             reduce cooking time and energy.",
        ),
        Tip::new(
            "7",
            "Home lighting",
            "Use LED lighting, which is cheaper to run and lasts longer, and make \
             the most of natural daylight.",
        ),
        Tip::new(
            "8",
            "Appliances on standby",
            "Switch appliances off completely instead of leaving them on standby \
             to avoid unnecessary consumption.",
        ),
        Tip::new(
            "9",
            "Planning the laundry",
            "Run the washing machine with a full load to save water and energy, \
             and use economy programmes when possible.",
        ),
        Tip::new(
            "10",
            "Appliance maintenance",
            "Regular maintenance and cleaning keeps every appliance efficient and \
             lowers the risk of expensive repairs.",
        ),
    ]
}
