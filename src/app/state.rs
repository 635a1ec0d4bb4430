//! App state - pure data structure with no I/O logic

use chrono::{DateTime, Duration, Local, Timelike};

use crate::constants::PLACEHOLDER_IMAGE_URL;
use crate::messages::ui_events::{InputMode, Route};
use crate::messages::RenderState;
use crate::models::{
    Address, AddressDraft, Category, DateBucket, Order, OrderStatus, TimeSlot, User,
};

/// Status filter tabs on the order list. `InProgress` is the merged
/// Accepted/InProgress bucket the original UI shows as one tab.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OrderFilter {
    #[default]
    All,
    Pending,
    InProgress,
    Completed,
}

impl OrderFilter {
    pub const ALL: [OrderFilter; 4] = [
        OrderFilter::All,
        OrderFilter::Pending,
        OrderFilter::InProgress,
        OrderFilter::Completed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            OrderFilter::All => "All",
            OrderFilter::Pending => "Pending",
            OrderFilter::InProgress => "In progress",
            OrderFilter::Completed => "Completed",
        }
    }

    pub fn matches(&self, status: OrderStatus) -> bool {
        match self {
            OrderFilter::All => true,
            OrderFilter::Pending => status == OrderStatus::Pending,
            OrderFilter::InProgress => {
                matches!(status, OrderStatus::Accepted | OrderStatus::InProgress)
            }
            OrderFilter::Completed => status == OrderStatus::Completed,
        }
    }

    /// Client-side partition of an already-fetched list.
    pub fn apply(&self, orders: &[Order]) -> Vec<Order> {
        orders
            .iter()
            .filter(|o| self.matches(o.status))
            .cloned()
            .collect()
    }

    pub fn next(&self) -> OrderFilter {
        match self {
            OrderFilter::All => OrderFilter::Pending,
            OrderFilter::Pending => OrderFilter::InProgress,
            OrderFilter::InProgress => OrderFilter::Completed,
            OrderFilter::Completed => OrderFilter::All,
        }
    }

    pub fn prev(&self) -> OrderFilter {
        match self {
            OrderFilter::All => OrderFilter::Completed,
            OrderFilter::Pending => OrderFilter::All,
            OrderFilter::InProgress => OrderFilter::Pending,
            OrderFilter::Completed => OrderFilter::InProgress,
        }
    }
}

/// Destructive action awaiting a yes/no confirmation
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfirmAction {
    DeleteAddress(String),
    CancelOrder(String),
}

impl ConfirmAction {
    pub fn prompt(&self) -> &'static str {
        match self {
            ConfirmAction::DeleteAddress(_) => "Delete this address?",
            ConfirmAction::CancelOrder(_) => "Cancel this order?",
        }
    }
}

/// The four ordered wizard steps
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum WizardStep {
    #[default]
    Category,
    Details,
    Time,
    Address,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::Category,
        WizardStep::Details,
        WizardStep::Time,
        WizardStep::Address,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            WizardStep::Category => "Items",
            WizardStep::Details => "Details",
            WizardStep::Time => "Time",
            WizardStep::Address => "Address",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            WizardStep::Category => 0,
            WizardStep::Details => 1,
            WizardStep::Time => 2,
            WizardStep::Address => 3,
        }
    }

    pub fn next(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Category => Some(WizardStep::Details),
            WizardStep::Details => Some(WizardStep::Time),
            WizardStep::Time => Some(WizardStep::Address),
            WizardStep::Address => None,
        }
    }

    pub fn prev(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Category => None,
            WizardStep::Details => Some(WizardStep::Category),
            WizardStep::Time => Some(WizardStep::Details),
            WizardStep::Address => Some(WizardStep::Time),
        }
    }
}

/// Which text input the details step is editing
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DetailsField {
    #[default]
    Quantity,
    Remark,
}

/// Draft state accumulated by the scheduling wizard. Dropped whole when the
/// wizard exits; nothing survives across runs.
#[derive(Clone, Debug, Default)]
pub struct WizardState {
    pub step: WizardStep,
    pub selected_categories: Vec<String>,
    pub quantity: String,
    pub remark: String,
    pub date: DateBucket,
    pub slot: Option<TimeSlot>,
    pub addresses: Vec<Address>,
    pub selected_address: Option<Address>,
    pub cursor: usize,
    pub details_field: DetailsField,
    pub submitting: bool,
    pub addresses_request: Option<u64>,
    pub submit_request: Option<u64>,
}

impl WizardState {
    /// Completeness predicate gating forward navigation out of `step`.
    pub fn step_complete(&self, step: WizardStep) -> bool {
        match step {
            WizardStep::Category => !self.selected_categories.is_empty(),
            WizardStep::Details => !self.quantity.is_empty(),
            WizardStep::Time => self.slot.is_some(),
            WizardStep::Address => self.selected_address.is_some(),
        }
    }

    pub fn can_advance(&self) -> bool {
        self.step_complete(self.step)
    }

    pub fn toggle_category(&mut self, id: &str) {
        if let Some(pos) = self.selected_categories.iter().position(|c| c == id) {
            self.selected_categories.remove(pos);
        } else {
            self.selected_categories.push(id.to_string());
        }
    }

    /// Build the order to submit. `None` while any required choice is
    /// missing, or if the appointment instant cannot be formed.
    pub fn build_order(&self, user_id: &str, now: DateTime<Local>) -> Option<Order> {
        let slot = self.slot?;
        let address = self.selected_address.clone()?;
        if self.selected_categories.is_empty() || self.quantity.is_empty() {
            return None;
        }
        let appointment_time = appointment_at(now, self.date, slot)?;

        Some(Order {
            id: format!("ord_{}", now.timestamp_millis()),
            user_id: user_id.to_string(),
            category_ids: self.selected_categories.clone(),
            quantity: self.quantity.clone(),
            remark: self.remark.clone(),
            image_urls: vec![PLACEHOLDER_IMAGE_URL.to_string()],
            appointment_time,
            address,
            status: OrderStatus::Pending,
            recycler: None,
            create_time: now,
        })
    }
}

/// Appointment instant: the selected day at the slot's start hour sharp.
pub fn appointment_at(
    now: DateTime<Local>,
    date: DateBucket,
    slot: TimeSlot,
) -> Option<DateTime<Local>> {
    (now + Duration::days(date.day_offset()))
        .with_hour(slot.start_hour())?
        .with_minute(0)?
        .with_second(0)?
        .with_nanosecond(0)
}

/// Address edit form fields, in tab order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Phone,
    Detail,
    Tag,
    Default,
}

impl FormField {
    pub fn next(&self) -> FormField {
        match self {
            FormField::Name => FormField::Phone,
            FormField::Phone => FormField::Detail,
            FormField::Detail => FormField::Tag,
            FormField::Tag => FormField::Default,
            FormField::Default => FormField::Name,
        }
    }

    pub fn prev(&self) -> FormField {
        match self {
            FormField::Name => FormField::Default,
            FormField::Phone => FormField::Name,
            FormField::Detail => FormField::Phone,
            FormField::Tag => FormField::Detail,
            FormField::Default => FormField::Tag,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, FormField::Name | FormField::Phone | FormField::Detail)
    }
}

/// Address create/edit form
#[derive(Clone, Debug, Default)]
pub struct AddressFormState {
    pub draft: AddressDraft,
    pub field: FormField,
    pub saving: bool,
    pub load_request: Option<u64>,
    pub save_request: Option<u64>,
}

/// Main application state - pure data, no I/O
pub struct AppState {
    // Navigation
    pub route: Route,
    pub back_stack: Vec<Route>,
    pub input_mode: InputMode,

    // Popups
    pub show_help: bool,
    pub confirm: Option<ConfirmAction>,
    pub status_message: Option<String>,

    // Session data
    pub user: Option<User>,
    pub user_request: Option<u64>,
    pub categories: Vec<Category>,
    pub categories_request: Option<u64>,

    // Home
    pub home_cursor: usize,

    // Orders
    pub orders: Vec<Order>,
    pub orders_loading: bool,
    pub orders_request: Option<u64>,
    pub order_filter: OrderFilter,
    pub orders_cursor: usize,

    // Order detail
    pub order_detail: Option<Order>,
    pub detail_loading: bool,
    pub detail_request: Option<u64>,
    pub cancel_request: Option<u64>,

    // Address book
    pub addresses: Vec<Address>,
    pub addresses_loading: bool,
    pub addresses_request: Option<u64>,
    pub addresses_cursor: usize,
    pub delete_request: Option<u64>,

    // Profile
    pub profile_cursor: usize,

    // Flows
    pub wizard: WizardState,
    pub form: AddressFormState,

    next_request_id: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            route: Route::Home,
            back_stack: Vec::new(),
            input_mode: InputMode::Normal,
            show_help: false,
            confirm: None,
            status_message: None,
            user: None,
            user_request: None,
            categories: Vec::new(),
            categories_request: None,
            home_cursor: 0,
            orders: Vec::new(),
            orders_loading: false,
            orders_request: None,
            order_filter: OrderFilter::All,
            orders_cursor: 0,
            order_detail: None,
            detail_loading: false,
            detail_request: None,
            cancel_request: None,
            addresses: Vec::new(),
            addresses_loading: false,
            addresses_request: None,
            addresses_cursor: 0,
            delete_request: None,
            profile_cursor: 0,
            wizard: WizardState::default(),
            form: AddressFormState::default(),
            next_request_id: 1,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Orders visible under the active filter
    pub fn filtered_orders(&self) -> Vec<Order> {
        self.order_filter.apply(&self.orders)
    }

    /// Convert state to RenderState for the UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            route: self.route.clone(),
            active_tab: self.route.tab(),
            input_mode: self.input_mode,
            show_help: self.show_help,
            confirm_prompt: self.confirm.as_ref().map(|c| c.prompt().to_string()),
            status_message: self.status_message.clone(),
            user: self.user.clone(),
            categories: self.categories.clone(),
            home_cursor: self.home_cursor,
            orders: self.filtered_orders(),
            orders_loading: self.orders_loading,
            order_filter: self.order_filter,
            orders_cursor: self.orders_cursor,
            order_detail: self.order_detail.clone(),
            detail_loading: self.detail_loading,
            addresses: self.addresses.clone(),
            addresses_loading: self.addresses_loading,
            addresses_cursor: self.addresses_cursor,
            profile_cursor: self.profile_cursor,
            wizard: self.wizard.clone(),
            form_draft: self.form.draft.clone(),
            form_field: self.form.field,
            form_saving: self.form.saving,
        }
    }
}
