//! App actor - message loop processing UI events and store responses

use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::messages::{RenderState, StoreCommand, StoreResponse, UiEvent};

/// App actor that processes UI events and store responses
pub struct AppActor {
    state: AppState,
    store_tx: mpsc::UnboundedSender<StoreCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        store_tx: mpsc::UnboundedSender<StoreCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        AppActor {
            state: AppState::new(),
            store_tx,
            render_tx,
        }
    }

    /// Run the actor message loop
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut store_rx: mpsc::UnboundedReceiver<StoreResponse>,
    ) {
        // Kick off the home screen loads and show the first frame
        let initial = self.state.refresh();
        self.send_commands(initial);
        let _ = self.render_tx.send(self.state.to_render_state());

        loop {
            tokio::select! {
                Some(event) = ui_rx.recv() => {
                    if self.handle_ui_event(event) {
                        // Quit signal received
                        let _ = self.store_tx.send(StoreCommand::Shutdown);
                        break;
                    }
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                Some(response) = store_rx.recv() => {
                    let followups = self.state.handle_response(response);
                    self.send_commands(followups);
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                else => break,
            }
        }
    }

    fn send_commands(&self, cmds: Vec<StoreCommand>) {
        for cmd in cmds {
            let _ = self.store_tx.send(cmd);
        }
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            // Navigation
            UiEvent::SwitchTab(tab) => {
                let cmds = self.state.switch_tab(tab);
                self.send_commands(cmds);
            }
            UiEvent::Back => {
                let cmds = self.state.back();
                self.send_commands(cmds);
            }
            UiEvent::CursorUp => self.state.cursor_up(),
            UiEvent::CursorDown => self.state.cursor_down(),
            UiEvent::Activate => {
                let cmds = self.state.activate();
                self.send_commands(cmds);
            }
            UiEvent::Select => self.state.select(),
            UiEvent::Refresh => {
                let cmds = self.state.refresh();
                self.send_commands(cmds);
            }

            // Orders
            UiEvent::NextFilter => self.state.next_filter(),
            UiEvent::PrevFilter => self.state.prev_filter(),
            UiEvent::CancelOrder => self.state.request_cancel_order(),
            UiEvent::CallRecycler => self.state.call_recycler(),

            // Home shortcuts
            UiEvent::OpenSchedule => {
                let cmds = self.state.open_schedule();
                self.send_commands(cmds);
            }
            UiEvent::OpenGuide => {
                let cmds = self.state.open_guide();
                self.send_commands(cmds);
            }

            // Address book
            UiEvent::NewAddress => {
                let cmds = self.state.new_address();
                self.send_commands(cmds);
            }
            UiEvent::EditAddress => {
                let cmds = self.state.edit_address();
                self.send_commands(cmds);
            }
            UiEvent::DeleteAddress => self.state.request_delete_address(),
            UiEvent::SaveAddressForm => {
                if let Some(cmd) = self.state.save_address_form() {
                    let _ = self.store_tx.send(cmd);
                }
            }
            UiEvent::NextField => self.state.next_field(),
            UiEvent::PrevField => self.state.prev_field(),

            // Text input
            UiEvent::StartEditing => self.state.start_editing(),
            UiEvent::StopEditing => self.state.stop_editing(),
            UiEvent::CharInput(c) => self.state.enter_char(c),
            UiEvent::Backspace => self.state.delete_char(),

            // Wizard
            UiEvent::EditQuantity => self.state.edit_quantity(),
            UiEvent::EditRemark => self.state.edit_remark(),
            UiEvent::DateNext => self.state.date_next(),
            UiEvent::DatePrev => self.state.date_prev(),

            // Confirmation prompt
            UiEvent::ConfirmYes => {
                if let Some(cmd) = self.state.confirm_yes() {
                    let _ = self.store_tx.send(cmd);
                }
            }
            UiEvent::ConfirmNo => self.state.confirm_no(),

            // Popups
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),

            // System
            UiEvent::Quit => return true,
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::ui_events::AppTab;
    use crate::store::StoreActor;

    /// Full loop: wizard submission travels App -> Store -> App and lands
    /// the user on the order list with the new order on top.
    #[tokio::test]
    async fn test_submission_round_trip() {
        let (store_tx, store_cmd_rx) = mpsc::unbounded_channel();
        let (store_resp_tx, store_rx) = mpsc::unbounded_channel();
        let (render_tx, mut render_rx) = mpsc::unbounded_channel();
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();

        tokio::spawn(StoreActor::without_latency(store_resp_tx).run(store_cmd_rx));
        tokio::spawn(AppActor::new(store_tx, render_tx).run(ui_rx, store_rx));

        // Wait for the home mounts (user, categories, orders) to land
        let mut frame = render_rx.recv().await.unwrap();
        while frame.user.is_none() || frame.categories.is_empty() || frame.orders_loading {
            frame = render_rx.recv().await.unwrap();
        }

        ui_tx.send(UiEvent::SwitchTab(AppTab::Schedule)).unwrap();
        // Wait for the wizard's address load to pre-select the default
        let mut frame = render_rx.recv().await.unwrap();
        while frame.wizard.selected_address.is_none() {
            frame = render_rx.recv().await.unwrap();
        }

        let events = [
            UiEvent::Select,   // first category
            UiEvent::Activate, // -> details
            UiEvent::Select,   // first quick quantity tag
            UiEvent::Activate, // -> time
            UiEvent::Select,   // 09:00-10:00 today
            UiEvent::Activate, // -> address
            UiEvent::Activate, // submit
        ];
        for event in events {
            ui_tx.send(event).unwrap();
        }

        let mut frame = render_rx.recv().await.unwrap();
        loop {
            if frame.route == crate::messages::ui_events::Route::Orders
                && !frame.orders_loading
                && frame.orders.len() == 3
            {
                break;
            }
            frame = render_rx.recv().await.unwrap();
        }

        let newest = &frame.orders[0];
        assert!(newest.id.starts_with("ord_"));
        assert_eq!(newest.status, crate::models::OrderStatus::Pending);
        assert_eq!(newest.address.id, "a1");

        ui_tx.send(UiEvent::Quit).unwrap();
    }
}
