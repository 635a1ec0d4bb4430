//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Bottom navigation tabs
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum AppTab {
    #[default]
    Home,
    Orders,
    Schedule,
    Guide,
    Profile,
}

impl AppTab {
    pub fn label(&self) -> &'static str {
        match self {
            AppTab::Home => "Home",
            AppTab::Orders => "Orders",
            AppTab::Schedule => "Schedule",
            AppTab::Guide => "Guide",
            AppTab::Profile => "Profile",
        }
    }

    pub const ALL: [AppTab; 5] = [
        AppTab::Home,
        AppTab::Orders,
        AppTab::Schedule,
        AppTab::Guide,
        AppTab::Profile,
    ];
}

/// Navigable screens
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum Route {
    #[default]
    Home,
    Schedule,
    Orders,
    OrderDetail(String),
    AddressList,
    /// `None` creates a new address, `Some(id)` edits an existing one
    AddressEdit(Option<String>),
    Profile,
    Settings,
    Guide,
}

impl Route {
    /// Tab a route belongs to, for highlighting the tab bar.
    pub fn tab(&self) -> AppTab {
        match self {
            Route::Home => AppTab::Home,
            Route::Schedule => AppTab::Schedule,
            Route::Orders | Route::OrderDetail(_) => AppTab::Orders,
            Route::Guide => AppTab::Guide,
            Route::Profile
            | Route::Settings
            | Route::AddressList
            | Route::AddressEdit(_) => AppTab::Profile,
        }
    }
}

/// Input mode
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Events generated from user input in the UI layer
#[derive(Debug, Clone)]
pub enum UiEvent {
    // Navigation
    SwitchTab(AppTab),
    Back,
    CursorUp,
    CursorDown,
    /// Enter: open the selection, advance the wizard, or submit
    Activate,
    /// Space: toggle/select the option under the cursor
    Select,
    Refresh,

    // Orders
    NextFilter,
    PrevFilter,
    CancelOrder,
    CallRecycler,

    // Home shortcuts
    OpenSchedule,
    OpenGuide,

    // Address book
    NewAddress,
    EditAddress,
    DeleteAddress,
    SaveAddressForm,
    NextField,
    PrevField,

    // Text input
    StartEditing,
    StopEditing,
    CharInput(char),
    Backspace,

    // Wizard details/time steps
    EditQuantity,
    EditRemark,
    DateNext,
    DatePrev,

    // Confirmation prompt
    ConfirmYes,
    ConfirmNo,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(
    key: KeyEvent,
    route: &Route,
    input_mode: InputMode,
    show_help: bool,
    show_confirm: bool,
) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char('c') = key.code {
            return Some(UiEvent::Quit);
        }
    }

    // Popups swallow everything else
    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    if show_confirm {
        return match key.code {
            KeyCode::Char('y') | KeyCode::Enter => Some(UiEvent::ConfirmYes),
            KeyCode::Char('n') | KeyCode::Esc => Some(UiEvent::ConfirmNo),
            _ => None,
        };
    }

    if input_mode == InputMode::Editing {
        return match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(UiEvent::StopEditing),
            KeyCode::Tab => Some(UiEvent::NextField),
            KeyCode::Backspace => Some(UiEvent::Backspace),
            KeyCode::Char(c) => Some(UiEvent::CharInput(c)),
            _ => None,
        };
    }

    // Global normal-mode keys
    match key.code {
        KeyCode::Char('q') => return Some(UiEvent::Quit),
        KeyCode::Char('?') => return Some(UiEvent::ToggleHelp),
        KeyCode::Esc => return Some(UiEvent::Back),
        KeyCode::Char('1') => return Some(UiEvent::SwitchTab(AppTab::Home)),
        KeyCode::Char('2') => return Some(UiEvent::SwitchTab(AppTab::Orders)),
        KeyCode::Char('3') => return Some(UiEvent::SwitchTab(AppTab::Schedule)),
        KeyCode::Char('4') => return Some(UiEvent::SwitchTab(AppTab::Guide)),
        KeyCode::Char('5') => return Some(UiEvent::SwitchTab(AppTab::Profile)),
        _ => {}
    }

    match route {
        Route::Home => handle_home_keys(key),
        Route::Orders => handle_orders_keys(key),
        Route::OrderDetail(_) => handle_order_detail_keys(key),
        Route::Schedule => handle_wizard_keys(key),
        Route::AddressList => handle_address_list_keys(key),
        Route::AddressEdit(_) => handle_address_form_keys(key),
        Route::Profile => handle_list_nav_keys(key),
        Route::Guide | Route::Settings => handle_list_nav_keys(key),
    }
}

fn handle_home_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Up => Some(UiEvent::CursorUp),
        KeyCode::Down => Some(UiEvent::CursorDown),
        KeyCode::Enter | KeyCode::Char('s') => Some(UiEvent::OpenSchedule),
        KeyCode::Char('g') => Some(UiEvent::OpenGuide),
        KeyCode::Char('r') => Some(UiEvent::Refresh),
        _ => None,
    }
}

fn handle_orders_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Up => Some(UiEvent::CursorUp),
        KeyCode::Down => Some(UiEvent::CursorDown),
        KeyCode::Enter => Some(UiEvent::Activate),
        KeyCode::Left => Some(UiEvent::PrevFilter),
        KeyCode::Right | KeyCode::Char('f') => Some(UiEvent::NextFilter),
        KeyCode::Char('x') => Some(UiEvent::CancelOrder),
        KeyCode::Char('r') => Some(UiEvent::Refresh),
        _ => None,
    }
}

fn handle_order_detail_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Char('x') => Some(UiEvent::CancelOrder),
        KeyCode::Char('p') => Some(UiEvent::CallRecycler),
        KeyCode::Char('r') => Some(UiEvent::Refresh),
        _ => None,
    }
}

fn handle_wizard_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Up => Some(UiEvent::CursorUp),
        KeyCode::Down => Some(UiEvent::CursorDown),
        KeyCode::Char(' ') => Some(UiEvent::Select),
        KeyCode::Enter => Some(UiEvent::Activate),
        KeyCode::Left => Some(UiEvent::DatePrev),
        KeyCode::Right => Some(UiEvent::DateNext),
        KeyCode::Char('e') => Some(UiEvent::EditQuantity),
        KeyCode::Char('m') => Some(UiEvent::EditRemark),
        KeyCode::Char('a') => Some(UiEvent::NewAddress),
        _ => None,
    }
}

fn handle_address_list_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Up => Some(UiEvent::CursorUp),
        KeyCode::Down => Some(UiEvent::CursorDown),
        KeyCode::Char('n') => Some(UiEvent::NewAddress),
        KeyCode::Char('e') | KeyCode::Enter => Some(UiEvent::EditAddress),
        KeyCode::Char('d') => Some(UiEvent::DeleteAddress),
        KeyCode::Char('r') => Some(UiEvent::Refresh),
        _ => None,
    }
}

fn handle_address_form_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Tab | KeyCode::Down => Some(UiEvent::NextField),
        KeyCode::BackTab | KeyCode::Up => Some(UiEvent::PrevField),
        KeyCode::Char('e') | KeyCode::Enter => Some(UiEvent::StartEditing),
        KeyCode::Char(' ') => Some(UiEvent::Select),
        KeyCode::Char('s') => Some(UiEvent::SaveAddressForm),
        _ => None,
    }
}

fn handle_list_nav_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Up => Some(UiEvent::CursorUp),
        KeyCode::Down => Some(UiEvent::CursorDown),
        KeyCode::Enter => Some(UiEvent::Activate),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyEventKind, KeyEventState};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_confirm_prompt_swallows_keys() {
        let ev = key_to_ui_event(press(KeyCode::Char('y')), &Route::Orders, InputMode::Normal, false, true);
        assert!(matches!(ev, Some(UiEvent::ConfirmYes)));
        let ev = key_to_ui_event(press(KeyCode::Char('x')), &Route::Orders, InputMode::Normal, false, true);
        assert!(ev.is_none());
    }

    #[test]
    fn test_editing_mode_captures_chars() {
        let route = Route::AddressEdit(None);
        let ev = key_to_ui_event(press(KeyCode::Char('q')), &route, InputMode::Editing, false, false);
        assert!(matches!(ev, Some(UiEvent::CharInput('q'))));
    }

    #[test]
    fn test_route_tab_mapping() {
        assert_eq!(Route::OrderDetail("ord_001".into()).tab(), AppTab::Orders);
        assert_eq!(Route::AddressEdit(None).tab(), AppTab::Profile);
    }
}
