//! Command handlers - business logic for processing UI events

use chrono::Local;

use crate::app::state::{
    AddressFormState, AppState, ConfirmAction, DetailsField, FormField, WizardState, WizardStep,
};
use crate::constants::{QUICK_QUANTITY_TAGS, REMARK_MAX_LEN};
use crate::messages::ui_events::{AppTab, InputMode, Route};
use crate::messages::StoreCommand;
use crate::messages::StoreResponse;
use crate::models::AddressDraft;

/// Entries on the profile menu, in display order.
pub const PROFILE_MENU: [&str; 3] = ["Saved addresses", "Settings", "Contact support"];

impl AppState {
    // ========================
    // Navigation
    // ========================

    pub fn switch_tab(&mut self, tab: AppTab) -> Vec<StoreCommand> {
        self.back_stack.clear();
        self.input_mode = InputMode::Normal;
        self.route = match tab {
            AppTab::Home => Route::Home,
            AppTab::Orders => Route::Orders,
            AppTab::Schedule => {
                // A fresh wizard run every time the tab is opened
                self.wizard = WizardState::default();
                Route::Schedule
            }
            AppTab::Guide => Route::Guide,
            AppTab::Profile => Route::Profile,
        };
        self.mount_commands()
    }

    pub fn push_route(&mut self, route: Route) -> Vec<StoreCommand> {
        self.back_stack.push(self.route.clone());
        self.route = route;
        self.input_mode = InputMode::Normal;
        self.mount_commands()
    }

    /// Back out of the current screen. Inside the wizard this first walks
    /// steps backwards; from the first step it exits and drops the draft.
    pub fn back(&mut self) -> Vec<StoreCommand> {
        if self.route == Route::Schedule {
            if let Some(prev) = self.wizard.step.prev() {
                self.wizard.step = prev;
                self.wizard.cursor = 0;
                return Vec::new();
            }
            self.wizard = WizardState::default();
        }

        self.input_mode = InputMode::Normal;
        match self.back_stack.pop() {
            Some(route) => {
                self.route = route;
                self.mount_commands()
            }
            None if self.route != Route::Home => {
                self.route = Route::Home;
                self.mount_commands()
            }
            None => Vec::new(),
        }
    }

    pub fn open_schedule(&mut self) -> Vec<StoreCommand> {
        self.switch_tab(AppTab::Schedule)
    }

    pub fn open_guide(&mut self) -> Vec<StoreCommand> {
        self.switch_tab(AppTab::Guide)
    }

    /// Re-run the current screen's mount loads
    pub fn refresh(&mut self) -> Vec<StoreCommand> {
        self.mount_commands()
    }

    /// Store requests a screen issues when it becomes visible
    fn mount_commands(&mut self) -> Vec<StoreCommand> {
        self.status_message = None;
        let mut cmds = Vec::new();

        match self.route.clone() {
            Route::Home => {
                if self.user.is_none() && self.user_request.is_none() {
                    let id = self.next_id();
                    self.user_request = Some(id);
                    cmds.push(StoreCommand::GetUser { id });
                }
                if self.categories.is_empty() && self.categories_request.is_none() {
                    let id = self.next_id();
                    self.categories_request = Some(id);
                    cmds.push(StoreCommand::ListCategories { id });
                }
                let id = self.next_id();
                self.orders_request = Some(id);
                self.orders_loading = true;
                cmds.push(StoreCommand::ListOrders { id });
            }
            Route::Orders => {
                let id = self.next_id();
                self.orders_request = Some(id);
                self.orders_loading = true;
                cmds.push(StoreCommand::ListOrders { id });
            }
            Route::OrderDetail(order_id) => {
                let id = self.next_id();
                self.detail_request = Some(id);
                self.detail_loading = true;
                cmds.push(StoreCommand::GetOrder { id, order_id });
            }
            Route::AddressList => {
                let id = self.next_id();
                self.addresses_request = Some(id);
                self.addresses_loading = true;
                cmds.push(StoreCommand::ListAddresses { id });
            }
            Route::AddressEdit(Some(address_id)) => {
                self.form = AddressFormState::default();
                let id = self.next_id();
                self.form.load_request = Some(id);
                cmds.push(StoreCommand::GetAddress { id, address_id });
            }
            Route::AddressEdit(None) => {
                self.form = AddressFormState::default();
            }
            Route::Schedule => {
                // Wizard entry invariant: load the address book so the
                // default address can be pre-selected.
                let id = self.next_id();
                self.wizard.addresses_request = Some(id);
                cmds.push(StoreCommand::ListAddresses { id });
            }
            Route::Profile => {
                if self.user.is_none() && self.user_request.is_none() {
                    let id = self.next_id();
                    self.user_request = Some(id);
                    cmds.push(StoreCommand::GetUser { id });
                }
            }
            Route::Guide | Route::Settings => {}
        }

        cmds
    }

    // ========================
    // Cursor movement
    // ========================

    fn cursor_list_len(&self) -> usize {
        match &self.route {
            Route::Home => self.categories.len(),
            Route::Orders => self.filtered_orders().len(),
            Route::AddressList => self.addresses.len(),
            Route::Profile => PROFILE_MENU.len(),
            Route::Schedule => match self.wizard.step {
                WizardStep::Category => self.categories.len(),
                WizardStep::Details => QUICK_QUANTITY_TAGS.len(),
                WizardStep::Time => crate::models::TimeSlot::ALL.len(),
                WizardStep::Address => self.wizard.addresses.len(),
            },
            _ => 0,
        }
    }

    fn cursor_mut(&mut self) -> Option<&mut usize> {
        match &self.route {
            Route::Home => Some(&mut self.home_cursor),
            Route::Orders => Some(&mut self.orders_cursor),
            Route::AddressList => Some(&mut self.addresses_cursor),
            Route::Profile => Some(&mut self.profile_cursor),
            Route::Schedule => Some(&mut self.wizard.cursor),
            _ => None,
        }
    }

    pub fn cursor_up(&mut self) {
        if let Some(cursor) = self.cursor_mut() {
            *cursor = cursor.saturating_sub(1);
        }
    }

    pub fn cursor_down(&mut self) {
        let len = self.cursor_list_len();
        if let Some(cursor) = self.cursor_mut() {
            if len > 0 && *cursor + 1 < len {
                *cursor += 1;
            }
        }
    }

    // ========================
    // Activation (Enter)
    // ========================

    pub fn activate(&mut self) -> Vec<StoreCommand> {
        match self.route.clone() {
            Route::Orders => {
                let orders = self.filtered_orders();
                match orders.get(self.orders_cursor) {
                    Some(order) => self.push_route(Route::OrderDetail(order.id.clone())),
                    None => Vec::new(),
                }
            }
            Route::Profile => match self.profile_cursor {
                0 => self.push_route(Route::AddressList),
                1 => self.push_route(Route::Settings),
                _ => {
                    self.status_message = Some(String::from("Support line: 555-0199"));
                    Vec::new()
                }
            },
            Route::Schedule => self.wizard_advance().into_iter().collect(),
            _ => Vec::new(),
        }
    }

    // ========================
    // Selection (Space)
    // ========================

    pub fn select(&mut self) {
        match &self.route {
            Route::Schedule => self.wizard_select(),
            Route::AddressEdit(_) => match self.form.field {
                FormField::Tag => self.form.draft.tag = self.form.draft.tag.next(),
                FormField::Default => self.form.draft.is_default = !self.form.draft.is_default,
                _ => {}
            },
            _ => {}
        }
    }

    fn wizard_select(&mut self) {
        let cursor = self.wizard.cursor;
        match self.wizard.step {
            WizardStep::Category => {
                if let Some(cat) = self.categories.get(cursor) {
                    let id = cat.id.clone();
                    self.wizard.toggle_category(&id);
                }
            }
            WizardStep::Details => {
                if let Some(tag) = QUICK_QUANTITY_TAGS.get(cursor) {
                    self.wizard.quantity = (*tag).to_string();
                }
            }
            WizardStep::Time => {
                if let Some(slot) = crate::models::TimeSlot::ALL.get(cursor) {
                    self.wizard.slot = Some(*slot);
                }
            }
            WizardStep::Address => {
                self.wizard.selected_address = self.wizard.addresses.get(cursor).cloned();
            }
        }
    }

    // ========================
    // Wizard
    // ========================

    /// Advance one step, or submit from the last one. Refused while the
    /// current step's completeness predicate fails.
    pub fn wizard_advance(&mut self) -> Option<StoreCommand> {
        if !self.wizard.can_advance() {
            return None;
        }
        match self.wizard.step.next() {
            Some(next) => {
                self.wizard.step = next;
                self.wizard.cursor = 0;
                None
            }
            None => self.prepare_submit(),
        }
    }

    /// Build and send the order. The in-flight flag suppresses a second
    /// submission while the first is pending.
    pub fn prepare_submit(&mut self) -> Option<StoreCommand> {
        if self.wizard.submitting {
            return None;
        }
        let user = self.user.as_ref()?;
        let order = self.wizard.build_order(&user.id, Local::now())?;

        let id = self.next_id();
        self.wizard.submit_request = Some(id);
        self.wizard.submitting = true;
        Some(StoreCommand::CreateOrder { id, order })
    }

    pub fn edit_quantity(&mut self) {
        if self.route == Route::Schedule && self.wizard.step == WizardStep::Details {
            self.wizard.details_field = DetailsField::Quantity;
            self.input_mode = InputMode::Editing;
        }
    }

    pub fn edit_remark(&mut self) {
        if self.route == Route::Schedule && self.wizard.step == WizardStep::Details {
            self.wizard.details_field = DetailsField::Remark;
            self.input_mode = InputMode::Editing;
        }
    }

    pub fn date_next(&mut self) {
        if self.wizard.step == WizardStep::Time {
            self.wizard.date = match self.wizard.date {
                crate::models::DateBucket::Today => crate::models::DateBucket::Tomorrow,
                crate::models::DateBucket::Tomorrow => crate::models::DateBucket::Future,
                crate::models::DateBucket::Future => crate::models::DateBucket::Future,
            };
        }
    }

    pub fn date_prev(&mut self) {
        if self.wizard.step == WizardStep::Time {
            self.wizard.date = match self.wizard.date {
                crate::models::DateBucket::Today => crate::models::DateBucket::Today,
                crate::models::DateBucket::Tomorrow => crate::models::DateBucket::Today,
                crate::models::DateBucket::Future => crate::models::DateBucket::Tomorrow,
            };
        }
    }

    // ========================
    // Orders
    // ========================

    pub fn next_filter(&mut self) {
        self.order_filter = self.order_filter.next();
        self.orders_cursor = 0;
    }

    pub fn prev_filter(&mut self) {
        self.order_filter = self.order_filter.prev();
        self.orders_cursor = 0;
    }

    /// Order targeted by detail-or-list actions
    fn action_order(&self) -> Option<crate::models::Order> {
        match &self.route {
            Route::OrderDetail(_) => self.order_detail.clone(),
            Route::Orders => self.filtered_orders().get(self.orders_cursor).cloned(),
            _ => None,
        }
    }

    pub fn request_cancel_order(&mut self) {
        match self.action_order() {
            Some(order) if order.status.can_cancel() => {
                self.confirm = Some(ConfirmAction::CancelOrder(order.id));
            }
            Some(_) => {
                self.status_message = Some(String::from("Only pending orders can be cancelled"));
            }
            None => {}
        }
    }

    /// Terminal stand-in for the `tel:` deep link
    pub fn call_recycler(&mut self) {
        match self.action_order().and_then(|o| o.recycler) {
            Some(recycler) => {
                self.status_message =
                    Some(format!("Dialing {} at {}...", recycler.name, recycler.phone));
            }
            None => {
                self.status_message = Some(String::from("No recycler assigned yet"));
            }
        }
    }

    // ========================
    // Address book
    // ========================

    pub fn new_address(&mut self) -> Vec<StoreCommand> {
        match &self.route {
            Route::AddressList => self.push_route(Route::AddressEdit(None)),
            // Wizard address step offers "use a new address"
            Route::Schedule if self.wizard.step == WizardStep::Address => {
                self.push_route(Route::AddressEdit(None))
            }
            _ => Vec::new(),
        }
    }

    pub fn edit_address(&mut self) -> Vec<StoreCommand> {
        match self.addresses.get(self.addresses_cursor) {
            Some(addr) => {
                let id = addr.id.clone();
                self.push_route(Route::AddressEdit(Some(id)))
            }
            None => Vec::new(),
        }
    }

    pub fn request_delete_address(&mut self) {
        if let Some(addr) = self.addresses.get(self.addresses_cursor) {
            self.confirm = Some(ConfirmAction::DeleteAddress(addr.id.clone()));
        }
    }

    pub fn save_address_form(&mut self) -> Option<StoreCommand> {
        if self.form.saving || !self.form.draft.is_complete() {
            return None;
        }
        let id = self.next_id();
        self.form.save_request = Some(id);
        self.form.saving = true;
        Some(StoreCommand::SaveAddress {
            id,
            draft: self.form.draft.clone(),
        })
    }

    // ========================
    // Confirmation prompt
    // ========================

    pub fn confirm_yes(&mut self) -> Option<StoreCommand> {
        match self.confirm.take()? {
            ConfirmAction::CancelOrder(order_id) => {
                let id = self.next_id();
                self.cancel_request = Some(id);
                Some(StoreCommand::CancelOrder { id, order_id })
            }
            ConfirmAction::DeleteAddress(address_id) => {
                let id = self.next_id();
                self.delete_request = Some(id);
                Some(StoreCommand::DeleteAddress { id, address_id })
            }
        }
    }

    pub fn confirm_no(&mut self) {
        self.confirm = None;
    }

    // ========================
    // Text input
    // ========================

    pub fn start_editing(&mut self) {
        if let Route::AddressEdit(_) = self.route {
            if self.form.field.is_text() {
                self.input_mode = InputMode::Editing;
            }
        }
    }

    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn next_field(&mut self) {
        if let Route::AddressEdit(_) = self.route {
            self.form.field = self.form.field.next();
            if self.input_mode == InputMode::Editing && !self.form.field.is_text() {
                self.input_mode = InputMode::Normal;
            }
        }
    }

    pub fn prev_field(&mut self) {
        if let Route::AddressEdit(_) = self.route {
            self.form.field = self.form.field.prev();
            if self.input_mode == InputMode::Editing && !self.form.field.is_text() {
                self.input_mode = InputMode::Normal;
            }
        }
    }

    pub fn enter_char(&mut self, c: char) {
        match &self.route {
            Route::Schedule => match self.wizard.details_field {
                DetailsField::Quantity => self.wizard.quantity.push(c),
                DetailsField::Remark => {
                    if self.wizard.remark.chars().count() < REMARK_MAX_LEN {
                        self.wizard.remark.push(c);
                    }
                }
            },
            Route::AddressEdit(_) => {
                if let Some(field) = self.form_text_field_mut() {
                    field.push(c);
                }
            }
            _ => {}
        }
    }

    pub fn delete_char(&mut self) {
        match &self.route {
            Route::Schedule => match self.wizard.details_field {
                DetailsField::Quantity => {
                    self.wizard.quantity.pop();
                }
                DetailsField::Remark => {
                    self.wizard.remark.pop();
                }
            },
            Route::AddressEdit(_) => {
                if let Some(field) = self.form_text_field_mut() {
                    field.pop();
                }
            }
            _ => {}
        }
    }

    fn form_text_field_mut(&mut self) -> Option<&mut String> {
        match self.form.field {
            FormField::Name => Some(&mut self.form.draft.contact_name),
            FormField::Phone => Some(&mut self.form.draft.contact_phone),
            FormField::Detail => Some(&mut self.form.draft.detail),
            FormField::Tag | FormField::Default => None,
        }
    }

    // ========================
    // Help popup
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }

    // ========================
    // Store response handling
    // ========================

    pub fn handle_response(&mut self, response: StoreResponse) -> Vec<StoreCommand> {
        match response {
            StoreResponse::Addresses { id, addresses } => {
                if self.wizard.addresses_request == Some(id) {
                    self.wizard.addresses_request = None;
                    self.wizard.addresses = addresses;
                    // Pre-select the default address on wizard entry
                    if self.wizard.selected_address.is_none() {
                        self.wizard.selected_address =
                            self.wizard.addresses.iter().find(|a| a.is_default).cloned();
                    }
                } else if self.addresses_request == Some(id) {
                    self.addresses_request = None;
                    self.addresses_loading = false;
                    self.addresses = addresses;
                    if self.addresses_cursor >= self.addresses.len() {
                        self.addresses_cursor = self.addresses.len().saturating_sub(1);
                    }
                }
                Vec::new()
            }
            StoreResponse::Address { id, address } => {
                if self.form.load_request == Some(id) {
                    self.form.load_request = None;
                    if let Some(addr) = address {
                        self.form.draft = AddressDraft::from_address(&addr);
                    }
                }
                Vec::new()
            }
            StoreResponse::AddressSaved { id, .. } => {
                if self.form.save_request == Some(id) {
                    self.form.save_request = None;
                    self.form.saving = false;
                    let cmds = self.back();
                    self.status_message = Some(String::from("Address saved"));
                    cmds
                } else {
                    Vec::new()
                }
            }
            StoreResponse::AddressDeleted { id } => {
                if self.delete_request == Some(id) {
                    self.delete_request = None;
                    // Optimistic refresh of whatever list is showing
                    self.refresh()
                } else {
                    Vec::new()
                }
            }
            StoreResponse::Orders { id, orders } => {
                if self.orders_request == Some(id) {
                    self.orders_request = None;
                    self.orders_loading = false;
                    self.orders = orders;
                    let len = self.filtered_orders().len();
                    if self.orders_cursor >= len {
                        self.orders_cursor = len.saturating_sub(1);
                    }
                }
                Vec::new()
            }
            StoreResponse::Order { id, order } => {
                if self.detail_request == Some(id) {
                    self.detail_request = None;
                    self.detail_loading = false;
                    self.order_detail = order;
                }
                Vec::new()
            }
            StoreResponse::OrderCreated { id, .. } => {
                if self.wizard.submit_request == Some(id) {
                    self.wizard = WizardState::default();
                    self.back_stack.clear();
                    self.route = Route::Orders;
                    let cmds = self.mount_commands();
                    self.status_message = Some(String::from("Pickup scheduled"));
                    cmds
                } else {
                    Vec::new()
                }
            }
            StoreResponse::OrderCancelled { id, cancelled } => {
                if self.cancel_request == Some(id) {
                    self.cancel_request = None;
                    let cmds = self.refresh();
                    if !cancelled {
                        self.status_message =
                            Some(String::from("Order can no longer be cancelled"));
                    }
                    cmds
                } else {
                    Vec::new()
                }
            }
            StoreResponse::Categories { id, categories } => {
                if self.categories_request == Some(id) {
                    self.categories_request = None;
                    self.categories = categories;
                }
                Vec::new()
            }
            StoreResponse::CurrentUser { id, user } => {
                if self.user_request == Some(id) {
                    self.user_request = None;
                    self.user = Some(user);
                }
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Address, AddressTag, Category, DateBucket, Order, OrderStatus, TimeSlot, User,
    };
    use chrono::{Datelike, Timelike};

    fn seeded_user() -> User {
        User {
            id: "u123".into(),
            name: "Sam Carter".into(),
            phone: "555-0138".into(),
            avatar: String::new(),
            points: 1250,
        }
    }

    fn category(id: &str, name: &str) -> Category {
        Category {
            id: id.into(),
            name: name.into(),
            icon: String::new(),
            price_desc: String::new(),
        }
    }

    fn address(id: &str, is_default: bool) -> Address {
        Address {
            id: id.into(),
            contact_name: "Sam Carter".into(),
            contact_phone: "555-0138".into(),
            detail: "Building 1".into(),
            tag: AddressTag::Home,
            is_default,
        }
    }

    fn order(id: &str, status: OrderStatus) -> Order {
        Order {
            id: id.into(),
            user_id: "u123".into(),
            category_ids: vec!["c1".into()],
            quantity: "5kg".into(),
            remark: String::new(),
            image_urls: Vec::new(),
            appointment_time: chrono::Local::now(),
            address: address("a1", true),
            status,
            recycler: None,
            create_time: chrono::Local::now(),
        }
    }

    /// State with the wizard open and the address book already answered.
    fn wizard_state() -> AppState {
        let mut state = AppState::new();
        state.user = Some(seeded_user());
        state.categories = vec![category("c1", "Paper"), category("c2", "Plastic")];
        let cmds = state.switch_tab(AppTab::Schedule);
        assert!(matches!(cmds.as_slice(), [StoreCommand::ListAddresses { .. }]));

        let id = state.wizard.addresses_request.unwrap();
        state.handle_response(StoreResponse::Addresses {
            id,
            addresses: vec![address("a1", true), address("a2", false)],
        });
        state
    }

    #[test]
    fn test_wizard_preselects_default_address() {
        let state = wizard_state();
        assert_eq!(
            state.wizard.selected_address.as_ref().map(|a| a.id.as_str()),
            Some("a1")
        );
    }

    #[test]
    fn test_advance_blocked_without_category() {
        let mut state = wizard_state();
        let cmds = state.activate();
        assert!(cmds.is_empty());
        assert_eq!(state.wizard.step, WizardStep::Category);
    }

    #[test]
    fn test_wizard_end_to_end_submission() {
        let mut state = wizard_state();

        // Step 1: pick category c1
        state.select();
        let _ = state.activate();
        assert_eq!(state.wizard.step, WizardStep::Details);

        // Step 2: type the quantity, leave a remark
        state.edit_quantity();
        for c in "5kg".chars() {
            state.enter_char(c);
        }
        state.stop_editing();
        state.edit_remark();
        for c in "ring the doorbell".chars() {
            state.enter_char(c);
        }
        state.stop_editing();
        let _ = state.activate();
        assert_eq!(state.wizard.step, WizardStep::Time);

        // Step 3: today, 09:00-10:00
        state.select();
        assert_eq!(state.wizard.slot, Some(TimeSlot::Morning9));
        assert_eq!(state.wizard.date, DateBucket::Today);
        let _ = state.activate();
        assert_eq!(state.wizard.step, WizardStep::Address);

        // Step 4: default address already selected, submit
        let cmds = state.activate();
        let order = match cmds.as_slice() {
            [StoreCommand::CreateOrder { order, .. }] => order.clone(),
            other => panic!("expected CreateOrder, got {other:?}"),
        };

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.category_ids, vec!["c1".to_string()]);
        assert_eq!(order.quantity, "5kg");
        assert_eq!(order.remark, "ring the doorbell");
        assert_eq!(order.address.id, "a1");
        assert_eq!(order.appointment_time.hour(), 9);
        assert_eq!(order.appointment_time.minute(), 0);
        assert_eq!(
            order.appointment_time.date_naive(),
            chrono::Local::now().date_naive()
        );
        assert!(state.wizard.submitting);

        // A second Enter while in flight must not enqueue another order
        assert!(state.activate().is_empty());
    }

    #[test]
    fn test_submission_navigates_to_orders() {
        let mut state = wizard_state();
        state.wizard.submitting = true;
        state.wizard.submit_request = Some(42);

        let cmds = state.handle_response(StoreResponse::OrderCreated {
            id: 42,
            order_id: "ord_x".into(),
        });
        assert_eq!(state.route, Route::Orders);
        assert!(matches!(cmds.as_slice(), [StoreCommand::ListOrders { .. }]));
        assert!(!state.wizard.submitting);
    }

    #[test]
    fn test_back_from_first_step_drops_draft() {
        let mut state = wizard_state();
        state.select(); // pick a category
        let _ = state.activate();
        let _ = state.back(); // Details -> Category
        assert_eq!(state.wizard.step, WizardStep::Category);
        let _ = state.back(); // exit the wizard
        assert_ne!(state.route, Route::Schedule);
        assert!(state.wizard.selected_categories.is_empty());
    }

    #[test]
    fn test_remark_capped_at_limit() {
        let mut state = wizard_state();
        state.select();
        let _ = state.activate();
        state.edit_remark();
        for _ in 0..(REMARK_MAX_LEN + 50) {
            state.enter_char('x');
        }
        assert_eq!(state.wizard.remark.chars().count(), REMARK_MAX_LEN);
    }

    #[test]
    fn test_in_progress_filter_merges_accepted_and_in_progress() {
        let mut state = AppState::new();
        state.orders = vec![
            order("o1", OrderStatus::Pending),
            order("o2", OrderStatus::Accepted),
            order("o3", OrderStatus::InProgress),
            order("o4", OrderStatus::Completed),
            order("o5", OrderStatus::Cancelled),
        ];
        state.order_filter = crate::app::state::OrderFilter::InProgress;

        let ids: Vec<_> = state.filtered_orders().into_iter().map(|o| o.id).collect();
        assert_eq!(ids, vec!["o2".to_string(), "o3".to_string()]);
    }

    #[test]
    fn test_cancel_requires_confirmation() {
        let mut state = AppState::new();
        state.route = Route::Orders;
        state.orders = vec![order("o1", OrderStatus::Pending)];

        state.request_cancel_order();
        assert!(state.confirm.is_some());

        let cmd = state.confirm_yes();
        assert!(matches!(cmd, Some(StoreCommand::CancelOrder { .. })));
        assert!(state.confirm.is_none());
    }

    #[test]
    fn test_cancel_refused_for_completed_order() {
        let mut state = AppState::new();
        state.route = Route::Orders;
        state.orders = vec![order("o1", OrderStatus::Completed)];

        state.request_cancel_order();
        assert!(state.confirm.is_none());
        assert!(state.status_message.is_some());
    }

    #[test]
    fn test_confirm_no_clears_prompt() {
        let mut state = AppState::new();
        state.route = Route::Orders;
        state.orders = vec![order("o1", OrderStatus::Pending)];
        state.request_cancel_order();
        state.confirm_no();
        assert!(state.confirm.is_none());
    }

    #[test]
    fn test_save_blocked_until_form_complete() {
        let mut state = AppState::new();
        let _ = state.push_route(Route::AddressEdit(None));
        assert!(state.save_address_form().is_none());

        for c in "Sam".chars() {
            state.enter_char(c);
        }
        state.next_field();
        for c in "555-0100".chars() {
            state.enter_char(c);
        }
        state.next_field();
        for c in "Dock 9".chars() {
            state.enter_char(c);
        }

        let cmd = state.save_address_form();
        assert!(matches!(cmd, Some(StoreCommand::SaveAddress { .. })));
        // Second save while in flight is suppressed
        assert!(state.save_address_form().is_none());
    }

    #[test]
    fn test_delete_refreshes_address_list() {
        let mut state = AppState::new();
        let _ = state.push_route(Route::AddressList);
        let id = state.addresses_request.unwrap();
        state.handle_response(StoreResponse::Addresses {
            id,
            addresses: vec![address("a1", true), address("a2", false)],
        });

        state.addresses_cursor = 1;
        state.request_delete_address();
        let cmd = state.confirm_yes().expect("delete command");
        let request_id = match cmd {
            StoreCommand::DeleteAddress { id, address_id } => {
                assert_eq!(address_id, "a2");
                id
            }
            other => panic!("expected DeleteAddress, got {other:?}"),
        };

        let cmds = state.handle_response(StoreResponse::AddressDeleted { id: request_id });
        assert!(matches!(cmds.as_slice(), [StoreCommand::ListAddresses { .. }]));
    }

    #[test]
    fn test_stale_responses_are_ignored() {
        let mut state = AppState::new();
        let _ = state.switch_tab(AppTab::Orders);
        state.handle_response(StoreResponse::Orders {
            id: 9999,
            orders: vec![order("o1", OrderStatus::Pending)],
        });
        assert!(state.orders.is_empty());
        assert!(state.orders_loading);
    }
}
