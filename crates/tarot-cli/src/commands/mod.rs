pub mod daily;
pub mod deck;
pub mod guide;
pub mod install;
pub mod menu;
pub mod reading;

use tarot_core::Tarot;

/// Load the bundled deck. A broken deck is not something a reading can recover from.
pub fn load_deck() -> Result<Tarot, String> {
    Tarot::new().map_err(|e| format!("cannot load the tarot deck: {e}"))
}
