use chrono::{DateTime, Local};
use ratatui::{prelude::*, widgets::*};

use crate::models::{Category, Order, OrderStatus};

/// Renders a text input field with cursor
pub fn render_input<'a>(content: &'a str, title: &'a str, is_focused: bool) -> Paragraph<'a> {
    let style = if is_focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(title);

    Paragraph::new(content).block(block)
}

/// Renders tabs
pub fn render_tabs<'a>(titles: &[&'a str], selected: usize) -> Tabs<'a> {
    let titles: Vec<Line> = titles.iter().map(|t| Line::from(*t)).collect();

    Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(Style::default().fg(Color::Yellow).bold())
        .divider("|")
}

/// Order status color
pub fn status_color(status: OrderStatus) -> Color {
    match status {
        OrderStatus::Pending => Color::Yellow,
        OrderStatus::Accepted => Color::Cyan,
        OrderStatus::InProgress => Color::Blue,
        OrderStatus::Completed => Color::Green,
        OrderStatus::Cancelled => Color::DarkGray,
    }
}

/// Short date-time used in order rows and detail fields
pub fn format_time(time: &DateTime<Local>) -> String {
    time.format("%Y-%m-%d %H:%M").to_string()
}

/// Category names for an order's ids, joined for display. Ids with no
/// known category fall back to the raw id.
pub fn category_names(order: &Order, categories: &[Category]) -> String {
    order
        .category_ids
        .iter()
        .map(|id| {
            categories
                .iter()
                .find(|c| &c.id == id)
                .map(|c| c.name.clone())
                .unwrap_or_else(|| id.clone())
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// One-line order summary for list rows
pub fn order_row<'a>(order: &Order, categories: &[Category], selected: bool) -> ListItem<'a> {
    let marker = if selected { "> " } else { "  " };
    let line = Line::from(vec![
        Span::raw(format!("{marker}{} ", format_time(&order.appointment_time))),
        Span::raw(format!("{:<28} ", category_names(order, categories))),
        Span::styled(
            order.status.label(),
            Style::default().fg(status_color(order.status)),
        ),
    ]);
    let style = if selected {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    ListItem::new(line).style(style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Address, AddressTag, Recycler};

    fn sample_order() -> Order {
        Order {
            id: "ord_1".into(),
            user_id: "u123".into(),
            category_ids: vec!["c1".into(), "c9".into()],
            quantity: "5kg".into(),
            remark: String::new(),
            image_urls: Vec::new(),
            appointment_time: Local::now(),
            address: Address {
                id: "a1".into(),
                contact_name: "Sam".into(),
                contact_phone: "555-0138".into(),
                detail: "Building 1".into(),
                tag: AddressTag::Home,
                is_default: true,
            },
            status: OrderStatus::Pending,
            recycler: Some(Recycler {
                name: "Wei Li".into(),
                phone: "555-0177".into(),
                rating: 4.8,
            }),
            create_time: Local::now(),
        }
    }

    #[test]
    fn test_category_names_fall_back_to_id() {
        let categories = vec![Category {
            id: "c1".into(),
            name: "Paper".into(),
            icon: String::new(),
            price_desc: String::new(),
        }];
        assert_eq!(category_names(&sample_order(), &categories), "Paper, c9");
    }

    #[test]
    fn test_status_colors_distinguish_terminal_states() {
        assert_ne!(
            status_color(OrderStatus::Completed),
            status_color(OrderStatus::Cancelled)
        );
    }
}
