//! Render state - data structure sent from App layer to UI for rendering

use crate::app::state::{AddressFormState, FormField, OrderFilter, WizardState};
use crate::messages::ui_events::{AppTab, InputMode, Route};
use crate::models::{Address, AddressDraft, Category, Order, User};

/// Complete state needed by the UI to render one frame
#[derive(Debug, Clone)]
pub struct RenderState {
    // Navigation
    pub route: Route,
    pub active_tab: AppTab,
    pub input_mode: InputMode,

    // Popups
    pub show_help: bool,
    pub confirm_prompt: Option<String>,
    pub status_message: Option<String>,

    // Session data
    pub user: Option<User>,
    pub categories: Vec<Category>,

    // Home
    pub home_cursor: usize,

    // Orders (already filtered)
    pub orders: Vec<Order>,
    pub orders_loading: bool,
    pub order_filter: OrderFilter,
    pub orders_cursor: usize,

    // Order detail
    pub order_detail: Option<Order>,
    pub detail_loading: bool,

    // Address book
    pub addresses: Vec<Address>,
    pub addresses_loading: bool,
    pub addresses_cursor: usize,

    // Profile
    pub profile_cursor: usize,

    // Flows
    pub wizard: WizardState,
    pub form_draft: AddressDraft,
    pub form_field: FormField,
    pub form_saving: bool,
}

impl Default for RenderState {
    fn default() -> Self {
        let form = AddressFormState::default();
        RenderState {
            route: Route::Home,
            active_tab: AppTab::Home,
            input_mode: InputMode::Normal,
            show_help: false,
            confirm_prompt: None,
            status_message: None,
            user: None,
            categories: Vec::new(),
            home_cursor: 0,
            orders: Vec::new(),
            orders_loading: false,
            order_filter: OrderFilter::All,
            orders_cursor: 0,
            order_detail: None,
            detail_loading: false,
            addresses: Vec::new(),
            addresses_loading: false,
            addresses_cursor: 0,
            profile_cursor: 0,
            wizard: WizardState::default(),
            form_draft: form.draft,
            form_field: form.field,
            form_saving: false,
        }
    }
}
