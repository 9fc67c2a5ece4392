// src/application/interaction.rs
//
// Typed list-item interaction events.
// Only the fields the app reads are carried; platform event objects
// never cross into the library.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InteractionEvent {
    Press { click_count: u32 },
}

impl InteractionEvent {
    pub fn press(click_count: u32) -> Self {
        InteractionEvent::Press { click_count }
    }

    pub fn is_double_press(&self) -> bool {
        matches!(self, InteractionEvent::Press { click_count: 2 })
    }
}

/// React to a press on a product card. Returns true on a double press.
pub fn handle_card_press(product_id: &str, event: &InteractionEvent) -> bool {
    log::trace!("card press on {}: {:?}", product_id, event);
    let double = event.is_double_press();
    if double {
        log::debug!("Double pressed on {}", product_id);
    }
    double
}
