//! # EcoCycle TUI
//!
//! A terminal-based client for scheduling door-to-door recyclable pickups.
//!
//! ## Features
//! - Four-step scheduling wizard (items, details, time, address)
//! - Order list with status filters and order detail view
//! - Pending-order cancellation with confirmation
//! - Address book with default-address handling
//! - Profile, recycling guide, and settings screens
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Store Layer (Tokio) - in-process mock data service

pub mod models;
pub mod constants;
pub mod ui;
pub mod messages;
pub mod app;
pub mod store;

// Re-export commonly used types
pub use models::{Address, Category, Order, OrderStatus, TimeSlot, User};
pub use messages::{RenderState, StoreCommand, StoreResponse, UiEvent};
pub use app::{AppActor, AppState};
pub use store::{DataStore, StoreActor};
