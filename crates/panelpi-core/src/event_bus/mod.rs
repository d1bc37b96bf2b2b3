//! # Event Bus Module
//!
//! Publish/subscribe between the status view and the rest of the panel.
//!
//! Each status view is handed its own `Arc<EventBus>`.

mod bus;
mod events;

pub use bus::*;
pub use events::*;
