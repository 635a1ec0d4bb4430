//! EcoCycle TUI - Actor-based recyclable pickup client
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - central state machine processing events
//! - Store Layer (Tokio) - async in-process data service

mod models;
mod constants;
mod ui;
mod messages;
mod app;
mod store;

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, widgets::*};
use tokio::sync::mpsc;

use app::commands::PROFILE_MENU;
use app::state::{DetailsField, FormField, OrderFilter, WizardStep};
use app::AppActor;
use constants::{APP_NAME, APP_VERSION, QUICK_QUANTITY_TAGS};
use messages::ui_events::{key_to_ui_event, InputMode, Route};
use messages::{RenderState, StoreCommand, StoreResponse, UiEvent};
use models::{DateBucket, TimeSlot};
use store::StoreActor;
use ui::{category_names, format_time, order_row, render_input, status_color};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", "ecocycle.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (store_cmd_tx, store_cmd_rx) = mpsc::unbounded_channel::<StoreCommand>();
    let (store_resp_tx, store_resp_rx) = mpsc::unbounded_channel::<StoreResponse>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn store actor
    let store_actor = StoreActor::new(store_resp_tx);
    tokio::spawn(store_actor.run(store_cmd_rx));

    // Spawn app actor
    let app_actor = AppActor::new(store_cmd_tx, render_tx);
    tokio::spawn(app_actor.run(ui_rx, store_resp_rx));

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        // Draw with current state
        terminal.draw(|f| draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) = key_to_ui_event(
                    key,
                    &current_state.route,
                    current_state.input_mode,
                    current_state.show_help,
                    current_state.confirm_prompt.is_some(),
                ) {
                    if matches!(event, UiEvent::Quit) {
                        let _ = ui_tx.send(event);
                        break;
                    }
                    let _ = ui_tx.send(event);
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_tab_bar(f, state, main_chunks[0]);

    match &state.route {
        Route::Home => draw_home(f, state, main_chunks[1]),
        Route::Orders => draw_orders(f, state, main_chunks[1]),
        Route::OrderDetail(_) => draw_order_detail(f, state, main_chunks[1]),
        Route::Schedule => draw_wizard(f, state, main_chunks[1]),
        Route::AddressList => draw_address_list(f, state, main_chunks[1]),
        Route::AddressEdit(id) => draw_address_form(f, state, id.is_some(), main_chunks[1]),
        Route::Profile => draw_profile(f, state, main_chunks[1]),
        Route::Guide => draw_guide(f, main_chunks[1]),
        Route::Settings => draw_settings(f, main_chunks[1]),
    }

    draw_status_bar(f, state, main_chunks[2]);

    if state.show_help {
        draw_help_popup(f, state, area);
    }

    if let Some(prompt) = &state.confirm_prompt {
        draw_confirm_popup(f, prompt, area);
    }
}

fn draw_tab_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    use messages::ui_events::AppTab;

    let mut spans = Vec::new();
    for (i, tab) in AppTab::ALL.iter().enumerate() {
        let label = format!(" {}:{} ", i + 1, tab.label());
        let style = if *tab == state.active_tab {
            Style::default().fg(Color::Black).bg(Color::Green).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_home(f: &mut Frame, state: &RenderState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Greeting banner
            Constraint::Min(8),    // Category grid
            Constraint::Length(4), // Recent order
            Constraint::Length(3), // Guide teaser
        ])
        .split(area);

    // Greeting
    let greeting = match &state.user {
        Some(user) => format!(" Hi {}, turn your clutter into points ({} pts) ", user.name, user.points),
        None => String::from(" Loading profile... "),
    };
    let banner = Paragraph::new(greeting)
        .style(Style::default().fg(Color::Green).bold())
        .block(Block::default().borders(Borders::ALL).title(format!(" {APP_NAME} ")));
    f.render_widget(banner, chunks[0]);

    // Category grid
    let items: Vec<ListItem> = state
        .categories
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let style = if i == state.home_cursor {
                Style::default().fg(Color::Yellow).bold()
            } else {
                Style::default()
            };
            ListItem::new(format!("  {} {:<12} {}", c.icon, c.name, c.price_desc)).style(style)
        })
        .collect();
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" What we collect (Enter: schedule a pickup) "),
    );
    f.render_widget(list, chunks[1]);

    // Most recent order, if any
    let recent = match state.orders.first() {
        Some(order) => Line::from(vec![
            Span::raw(format!("  {} ", format_time(&order.appointment_time))),
            Span::raw(format!("{} ", category_names(order, &state.categories))),
            Span::styled(
                order.status.label(),
                Style::default().fg(status_color(order.status)),
            ),
        ]),
        None if state.orders_loading => Line::from("  Loading..."),
        None => Line::from("  No pickups yet. Press Enter to schedule your first one."),
    };
    let recent = Paragraph::new(recent)
        .block(Block::default().borders(Borders::ALL).title(" Latest pickup "));
    f.render_widget(recent, chunks[2]);

    let teaser = Paragraph::new("  Not sure what's recyclable? Press 'g' for the sorting guide.")
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(teaser, chunks[3]);
}

fn draw_orders(f: &mut Frame, state: &RenderState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    // Filter tabs
    let titles: Vec<&str> = OrderFilter::ALL.iter().map(|fl| fl.label()).collect();
    let selected = OrderFilter::ALL
        .iter()
        .position(|fl| *fl == state.order_filter)
        .unwrap_or(0);
    f.render_widget(ui::render_tabs(&titles, selected), chunks[0]);

    if state.orders_loading {
        let loading = Paragraph::new("Loading orders...")
            .block(Block::default().borders(Borders::ALL).title(" Orders "));
        f.render_widget(loading, chunks[1]);
        return;
    }

    if state.orders.is_empty() {
        let empty = Paragraph::new("No orders under this filter.\n\nPress '3' to schedule a pickup.")
            .block(Block::default().borders(Borders::ALL).title(" Orders "));
        f.render_widget(empty, chunks[1]);
        return;
    }

    let items: Vec<ListItem> = state
        .orders
        .iter()
        .enumerate()
        .map(|(i, order)| order_row(order, &state.categories, i == state.orders_cursor))
        .collect();
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Orders (Enter: detail, x: cancel, Left/Right: filter) "),
    );
    f.render_widget(list, chunks[1]);
}

fn draw_order_detail(f: &mut Frame, state: &RenderState, area: Rect) {
    let order = match &state.order_detail {
        Some(order) => order,
        None => {
            let msg = if state.detail_loading {
                "Loading order..."
            } else {
                "Order not found."
            };
            let p = Paragraph::new(msg)
                .block(Block::default().borders(Borders::ALL).title(" Order "));
            f.render_widget(p, area);
            return;
        }
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Progress / status
            Constraint::Length(4), // Address
            Constraint::Length(5), // Items
            Constraint::Length(4), // Recycler
            Constraint::Min(4),    // Order info
        ])
        .split(area);

    // Status header: a four-stop progress line, or the cancelled banner
    let header = match order.status.progress_index() {
        Some(idx) => {
            let stops = ["Pending", "Accepted", "In progress", "Completed"];
            let spans: Vec<Span> = stops
                .iter()
                .enumerate()
                .flat_map(|(i, stop)| {
                    let style = if i <= idx {
                        Style::default().fg(status_color(order.status)).bold()
                    } else {
                        Style::default().fg(Color::DarkGray)
                    };
                    let sep = if i == 0 { "" } else { " -> " };
                    vec![Span::raw(sep), Span::styled(*stop, style)]
                })
                .collect();
            Line::from(spans)
        }
        None => Line::from(Span::styled(
            "This order was cancelled",
            Style::default().fg(Color::DarkGray),
        )),
    };
    let header = Paragraph::new(header)
        .block(Block::default().borders(Borders::ALL).title(format!(" {} ", order.id)));
    f.render_widget(header, chunks[0]);

    // Pickup address
    let addr = &order.address;
    let addr_text = format!(
        "{} {} [{}]\n{}",
        addr.contact_name,
        addr.contact_phone,
        addr.tag.label(),
        addr.detail
    );
    let addr_widget = Paragraph::new(addr_text)
        .block(Block::default().borders(Borders::ALL).title(" Pickup address "));
    f.render_widget(addr_widget, chunks[1]);

    // Items
    let items_text = format!(
        "{}\nEstimated quantity: {}\nRemark: {}",
        category_names(order, &state.categories),
        order.quantity,
        if order.remark.is_empty() { "-" } else { &order.remark }
    );
    let items_widget = Paragraph::new(items_text)
        .block(Block::default().borders(Borders::ALL).title(" Items "));
    f.render_widget(items_widget, chunks[2]);

    // Assigned recycler
    let recycler_text = match &order.recycler {
        Some(r) => format!("{}  {}  rating {:.1}\nPress 'p' to call", r.name, r.phone, r.rating),
        None => String::from("Not assigned yet"),
    };
    let recycler_widget = Paragraph::new(recycler_text)
        .block(Block::default().borders(Borders::ALL).title(" Recycler "));
    f.render_widget(recycler_widget, chunks[3]);

    // Order info
    let mut info = vec![
        Line::from(format!("Appointment: {}", format_time(&order.appointment_time))),
        Line::from(format!("Created:     {}", format_time(&order.create_time))),
        Line::from(vec![
            Span::raw("Status:      "),
            Span::styled(
                order.status.label(),
                Style::default().fg(status_color(order.status)),
            ),
        ]),
    ];
    if order.status.can_cancel() {
        info.push(Line::from(Span::styled(
            "Press 'x' to cancel this order",
            Style::default().fg(Color::DarkGray),
        )));
    }
    let info_widget = Paragraph::new(info)
        .block(Block::default().borders(Borders::ALL).title(" Info "));
    f.render_widget(info_widget, chunks[4]);
}

fn draw_wizard(f: &mut Frame, state: &RenderState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    // Step progress header
    let titles: Vec<&str> = WizardStep::ALL.iter().map(|s| s.label()).collect();
    f.render_widget(ui::render_tabs(&titles, state.wizard.step.index()), chunks[0]);

    match state.wizard.step {
        WizardStep::Category => draw_wizard_categories(f, state, chunks[1]),
        WizardStep::Details => draw_wizard_details(f, state, chunks[1]),
        WizardStep::Time => draw_wizard_time(f, state, chunks[1]),
        WizardStep::Address => draw_wizard_address(f, state, chunks[1]),
    }
}

fn draw_wizard_categories(f: &mut Frame, state: &RenderState, area: Rect) {
    let items: Vec<ListItem> = state
        .categories
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let picked = state.wizard.selected_categories.contains(&c.id);
            let marker = if picked { "[x]" } else { "[ ]" };
            let style = if i == state.wizard.cursor {
                Style::default().fg(Color::Yellow).bold()
            } else if picked {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            };
            ListItem::new(format!(" {marker} {} {:<12} {}", c.icon, c.name, c.price_desc)).style(style)
        })
        .collect();
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" What are we picking up? (Space: toggle, Enter: next) "),
    );
    f.render_widget(list, area);
}

fn draw_wizard_details(f: &mut Frame, state: &RenderState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Quantity input
            Constraint::Min(4),    // Quick tags
            Constraint::Length(3), // Remark input
        ])
        .split(area);

    let editing_quantity = state.input_mode == InputMode::Editing
        && state.wizard.details_field == DetailsField::Quantity;
    f.render_widget(
        render_input(&state.wizard.quantity, " Estimated quantity ('e' to edit) ", editing_quantity),
        chunks[0],
    );

    let items: Vec<ListItem> = QUICK_QUANTITY_TAGS
        .iter()
        .enumerate()
        .map(|(i, tag)| {
            let style = if i == state.wizard.cursor {
                Style::default().fg(Color::Yellow).bold()
            } else {
                Style::default()
            };
            ListItem::new(format!("  {tag}")).style(style)
        })
        .collect();
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Quick estimates (Space: use) "),
    );
    f.render_widget(list, chunks[1]);

    let editing_remark = state.input_mode == InputMode::Editing
        && state.wizard.details_field == DetailsField::Remark;
    f.render_widget(
        render_input(&state.wizard.remark, " Remark for the recycler ('m' to edit) ", editing_remark),
        chunks[2],
    );
}

fn draw_wizard_time(f: &mut Frame, state: &RenderState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(4)])
        .split(area);

    // Day picker
    let days: Vec<Span> = DateBucket::ALL
        .iter()
        .map(|d| {
            let style = if *d == state.wizard.date {
                Style::default().fg(Color::Black).bg(Color::Green).bold()
            } else {
                Style::default().fg(Color::Gray)
            };
            Span::styled(format!(" {} ", d.label()), style)
        })
        .collect();
    let day_bar = Paragraph::new(Line::from(days))
        .block(Block::default().borders(Borders::ALL).title(" Day (Left/Right) "));
    f.render_widget(day_bar, chunks[0]);

    // Slot list
    let items: Vec<ListItem> = TimeSlot::ALL
        .iter()
        .enumerate()
        .map(|(i, slot)| {
            let picked = state.wizard.slot == Some(*slot);
            let marker = if picked { "(x)" } else { "( )" };
            let style = if i == state.wizard.cursor {
                Style::default().fg(Color::Yellow).bold()
            } else if picked {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            };
            ListItem::new(format!(" {marker} {}", slot.label())).style(style)
        })
        .collect();
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Time slot (Space: pick, Enter: next) "),
    );
    f.render_widget(list, chunks[1]);
}

fn draw_wizard_address(f: &mut Frame, state: &RenderState, area: Rect) {
    if state.wizard.addresses.is_empty() {
        let empty = Paragraph::new("No saved addresses.\n\nPress 'a' to add one.")
            .block(Block::default().borders(Borders::ALL).title(" Pickup address "));
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = state
        .wizard
        .addresses
        .iter()
        .enumerate()
        .map(|(i, addr)| {
            let picked = state
                .wizard
                .selected_address
                .as_ref()
                .map(|a| a.id == addr.id)
                .unwrap_or(false);
            let marker = if picked { "(x)" } else { "( )" };
            let default_mark = if addr.is_default { " [default]" } else { "" };
            let style = if i == state.wizard.cursor {
                Style::default().fg(Color::Yellow).bold()
            } else if picked {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            };
            ListItem::new(format!(
                " {marker} {} {} - {}{}",
                addr.contact_name, addr.contact_phone, addr.detail, default_mark
            ))
            .style(style)
        })
        .collect();

    let title = if state.wizard.submitting {
        " Pickup address (submitting...) "
    } else {
        " Pickup address (Space: pick, Enter: submit, a: new) "
    };
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(list, area);
}

fn draw_address_list(f: &mut Frame, state: &RenderState, area: Rect) {
    if state.addresses_loading {
        let loading = Paragraph::new("Loading addresses...")
            .block(Block::default().borders(Borders::ALL).title(" Addresses "));
        f.render_widget(loading, area);
        return;
    }

    if state.addresses.is_empty() {
        let empty = Paragraph::new("No saved addresses.\n\nPress 'n' to add one.")
            .block(Block::default().borders(Borders::ALL).title(" Addresses "));
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = state
        .addresses
        .iter()
        .enumerate()
        .map(|(i, addr)| {
            let default_mark = if addr.is_default { " [default]" } else { "" };
            let style = if i == state.addresses_cursor {
                Style::default().fg(Color::Yellow).bold()
            } else {
                Style::default()
            };
            ListItem::new(format!(
                "  [{}] {} {} - {}{}",
                addr.tag.label(),
                addr.contact_name,
                addr.contact_phone,
                addr.detail,
                default_mark
            ))
            .style(style)
        })
        .collect();
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Addresses (n: new, e: edit, d: delete) "),
    );
    f.render_widget(list, area);
}

fn draw_address_form(f: &mut Frame, state: &RenderState, is_edit: bool, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Name
            Constraint::Length(3), // Phone
            Constraint::Length(3), // Detail
            Constraint::Length(3), // Tag + default
            Constraint::Min(1),    // Hint
        ])
        .split(area);

    let editing = state.input_mode == InputMode::Editing;
    f.render_widget(
        render_input(
            &state.form_draft.contact_name,
            " Contact name ",
            state.form_field == FormField::Name && editing,
        ),
        chunks[0],
    );
    f.render_widget(
        render_input(
            &state.form_draft.contact_phone,
            " Phone ",
            state.form_field == FormField::Phone && editing,
        ),
        chunks[1],
    );
    f.render_widget(
        render_input(
            &state.form_draft.detail,
            " Address detail ",
            state.form_field == FormField::Detail && editing,
        ),
        chunks[2],
    );

    let tag_style = |focused: bool| {
        if focused {
            Style::default().fg(Color::Yellow).bold()
        } else {
            Style::default()
        }
    };
    let default_mark = if state.form_draft.is_default { "[x]" } else { "[ ]" };
    let row = Line::from(vec![
        Span::styled(
            format!(" Tag: {} ", state.form_draft.tag.label()),
            tag_style(state.form_field == FormField::Tag),
        ),
        Span::raw("   "),
        Span::styled(
            format!("{default_mark} Default address"),
            tag_style(state.form_field == FormField::Default),
        ),
    ]);
    let row = Paragraph::new(row)
        .block(Block::default().borders(Borders::ALL).title(" Options (Space: toggle) "));
    f.render_widget(row, chunks[3]);

    let title = if is_edit { "Edit address" } else { "New address" };
    let hint = if state.form_saving {
        format!(" {title}: saving...")
    } else {
        format!(" {title}: Tab/arrows move, 'e' edit field, 's' save, Esc back")
    };
    let hint = Paragraph::new(hint).style(Style::default().fg(Color::DarkGray));
    f.render_widget(hint, chunks[4]);
}

fn draw_profile(f: &mut Frame, state: &RenderState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // User card
            Constraint::Min(6),    // Points trend
            Constraint::Length(5), // Menu
        ])
        .split(area);

    let card = match &state.user {
        Some(user) => format!(
            " {} {}\n {}  |  {} points",
            user.avatar, user.name, user.phone, user.points
        ),
        None => String::from(" Loading profile..."),
    };
    let card = Paragraph::new(card)
        .block(Block::default().borders(Borders::ALL).title(" Account "));
    f.render_widget(card, chunks[0]);

    // Recent recycling activity, points per month
    let trend: [(&str, u64); 6] = [
        ("Mar", 120),
        ("Apr", 260),
        ("May", 180),
        ("Jun", 310),
        ("Jul", 240),
        ("Aug", 140),
    ];
    let chart = BarChart::default()
        .block(Block::default().borders(Borders::ALL).title(" Points earned "))
        .data(&trend)
        .bar_width(5)
        .bar_gap(2)
        .bar_style(Style::default().fg(Color::Green))
        .value_style(Style::default().fg(Color::Black).bg(Color::Green));
    f.render_widget(chart, chunks[1]);

    let items: Vec<ListItem> = PROFILE_MENU
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let style = if i == state.profile_cursor {
                Style::default().fg(Color::Yellow).bold()
            } else {
                Style::default()
            };
            ListItem::new(format!("  {entry}")).style(style)
        })
        .collect();
    let menu = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Menu (Enter: open) "));
    f.render_widget(menu, chunks[2]);
}

fn draw_guide(f: &mut Frame, area: Rect) {
    let text = r#"
 RECYCLABLE
   Paper        newspapers, cardboard, office paper
   Plastic      bottles, containers, clean film
   Metal        cans, scrap, wire
   Clothing     wearable clothes, shoes, bags
   Electronics  phones, laptops, small gadgets
   Appliances   fridges, washers, air conditioners

 NOT ACCEPTED
   Food waste, ceramics, hazardous chemicals,
   medical waste, heavily soiled packaging

 TIPS
   Rinse containers, flatten cardboard, and bundle
   paper. Heavier, sorted loads earn more points.
"#;
    let guide = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title(" Sorting guide "))
        .wrap(Wrap { trim: false });
    f.render_widget(guide, area);
}

fn draw_settings(f: &mut Frame, area: Rect) {
    let text = format!(
        "\n {APP_NAME} v{APP_VERSION}\n\n Notifications   on\n Region          Beijing\n Data            in-memory demo dataset\n\n Esc: back"
    );
    let settings = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title(" Settings "));
    f.render_widget(settings, area);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let hint = if let Some(message) = &state.status_message {
        message.clone()
    } else if state.input_mode == InputMode::Editing {
        String::from(" Esc/Enter: stop editing | Backspace: delete ")
    } else {
        match &state.route {
            Route::Home => String::from(" Enter: schedule | g: guide | 1-5: tabs | ?: help | q: quit "),
            Route::Orders => String::from(" Enter: detail | x: cancel | Left/Right: filter | r: refresh "),
            Route::OrderDetail(_) => String::from(" x: cancel | p: call recycler | Esc: back "),
            Route::Schedule => String::from(" Space: select | Enter: next | Esc: previous step "),
            Route::AddressList => String::from(" n: new | e: edit | d: delete | Esc: back "),
            Route::AddressEdit(_) => String::from(" e: edit field | s: save | Esc: back "),
            _ => String::from(" 1-5: tabs | ?: help | q: quit "),
        }
    };

    let bar = Paragraph::new(hint).style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, _state: &RenderState, area: Rect) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = r#"
 ECOCYCLE TUI - Keyboard Shortcuts

 NAVIGATION
   1-5                Switch tabs
   Up / Down          Move cursor
   Enter              Open / advance / submit
   Esc                Back (previous wizard step)

 SCHEDULING
   Space              Toggle category, pick slot/address
   e / m              Edit quantity / remark
   Left / Right       Pick the day

 ORDERS
   Left / Right       Cycle status filter
   x                  Cancel a pending order
   p                  Call the recycler (detail view)

 ADDRESSES
   n / e / d          New / edit / delete
   s                  Save the form

 GENERAL
   r                  Refresh current screen
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn draw_confirm_popup(f: &mut Frame, prompt: &str, area: Rect) {
    let popup_area = centered_rect(40, 20, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Confirm ")
        .style(Style::default().bg(Color::Black));

    let body = format!("\n {prompt}\n\n y/Enter: yes    n/Esc: no");
    let confirm = Paragraph::new(body).block(block);

    f.render_widget(Clear, popup_area);
    f.render_widget(confirm, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
