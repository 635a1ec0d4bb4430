//! Messages exchanged between the UI, App, and Store layers

pub mod render;
pub mod store;
pub mod ui_events;

pub use render::RenderState;
pub use store::{StoreCommand, StoreResponse};
pub use ui_events::UiEvent;
