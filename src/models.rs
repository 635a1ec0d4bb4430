use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a pickup order.
///
/// `Pending -> Accepted -> InProgress -> Completed` is driven by the
/// (out-of-scope) dispatch side; the only client-initiated transition is
/// `Pending -> Cancelled`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Accepted,
    InProgress,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Accepted => "Accepted",
            OrderStatus::InProgress => "On the way",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Terminal states never change again.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }

    /// Only pending orders may be cancelled by the user.
    pub fn can_cancel(&self) -> bool {
        matches!(self, OrderStatus::Pending)
    }

    /// Position on the four-step progress track, if the order is on it.
    pub fn progress_index(&self) -> Option<usize> {
        match self {
            OrderStatus::Pending => Some(0),
            OrderStatus::Accepted => Some(1),
            OrderStatus::InProgress => Some(2),
            OrderStatus::Completed => Some(3),
            OrderStatus::Cancelled => None,
        }
    }
}

/// The signed-in user. Read-only in every current flow.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub avatar: String,
    pub points: u32,
}

/// Label attached to a saved address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AddressTag {
    #[default]
    Home,
    Company,
    Other,
}

impl AddressTag {
    pub fn label(&self) -> &'static str {
        match self {
            AddressTag::Home => "Home",
            AddressTag::Company => "Company",
            AddressTag::Other => "Other",
        }
    }

    pub fn next(&self) -> AddressTag {
        match self {
            AddressTag::Home => AddressTag::Company,
            AddressTag::Company => AddressTag::Other,
            AddressTag::Other => AddressTag::Home,
        }
    }
}

/// A saved pickup address. At most one address is flagged default;
/// the store enforces that on save.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Address {
    pub id: String,
    pub contact_name: String,
    pub contact_phone: String,
    pub detail: String,
    pub tag: AddressTag,
    pub is_default: bool,
}

/// Editable address fields, `id: None` meaning "create".
#[derive(Clone, Debug, Default)]
pub struct AddressDraft {
    pub id: Option<String>,
    pub contact_name: String,
    pub contact_phone: String,
    pub detail: String,
    pub tag: AddressTag,
    pub is_default: bool,
}

impl AddressDraft {
    /// Name, phone and detail are required before saving.
    pub fn is_complete(&self) -> bool {
        !self.contact_name.is_empty()
            && !self.contact_phone.is_empty()
            && !self.detail.is_empty()
    }

    pub fn from_address(address: &Address) -> Self {
        AddressDraft {
            id: Some(address.id.clone()),
            contact_name: address.contact_name.clone(),
            contact_phone: address.contact_phone.clone(),
            detail: address.detail.clone(),
            tag: address.tag,
            is_default: address.is_default,
        }
    }
}

/// A recyclable catalog entry. Static, seeded at startup.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub price_desc: String,
}

/// Field worker assigned to an order by the dispatch side.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Recycler {
    pub name: String,
    pub phone: String,
    pub rating: f32,
}

/// A pickup order. The address is a snapshot taken at creation time;
/// later edits to the address book do not touch past orders.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub user_id: String,
    pub category_ids: Vec<String>,
    pub quantity: String,
    pub remark: String,
    pub image_urls: Vec<String>,
    pub appointment_time: DateTime<Local>,
    pub address: Address,
    pub status: OrderStatus,
    pub recycler: Option<Recycler>,
    pub create_time: DateTime<Local>,
}

/// Relative appointment day offered by the wizard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DateBucket {
    #[default]
    Today,
    Tomorrow,
    Future,
}

impl DateBucket {
    pub fn day_offset(&self) -> i64 {
        match self {
            DateBucket::Today => 0,
            DateBucket::Tomorrow => 1,
            DateBucket::Future => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DateBucket::Today => "Today",
            DateBucket::Tomorrow => "Tomorrow",
            DateBucket::Future => "Day after",
        }
    }

    pub const ALL: [DateBucket; 3] = [DateBucket::Today, DateBucket::Tomorrow, DateBucket::Future];
}

/// One of the six fixed one-hour appointment windows. Being a closed enum,
/// a slot always carries a valid start hour; there is no label parsing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeSlot {
    Morning9,
    Morning10,
    Morning11,
    Afternoon14,
    Afternoon15,
    Afternoon16,
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 6] = [
        TimeSlot::Morning9,
        TimeSlot::Morning10,
        TimeSlot::Morning11,
        TimeSlot::Afternoon14,
        TimeSlot::Afternoon15,
        TimeSlot::Afternoon16,
    ];

    pub fn start_hour(&self) -> u32 {
        match self {
            TimeSlot::Morning9 => 9,
            TimeSlot::Morning10 => 10,
            TimeSlot::Morning11 => 11,
            TimeSlot::Afternoon14 => 14,
            TimeSlot::Afternoon15 => 15,
            TimeSlot::Afternoon16 => 16,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeSlot::Morning9 => "09:00-10:00",
            TimeSlot::Morning10 => "10:00-11:00",
            TimeSlot::Morning11 => "11:00-12:00",
            TimeSlot::Afternoon14 => "14:00-15:00",
            TimeSlot::Afternoon15 => "15:00-16:00",
            TimeSlot::Afternoon16 => "16:00-17:00",
        }
    }

    pub fn is_morning(&self) -> bool {
        self.start_hour() < 12
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_cancel_guard() {
        assert!(OrderStatus::Pending.can_cancel());
        assert!(!OrderStatus::Accepted.can_cancel());
        assert!(!OrderStatus::Completed.can_cancel());
        assert!(!OrderStatus::Cancelled.can_cancel());
    }

    #[test]
    fn test_terminal_states() {
        assert!(OrderStatus::Completed.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
        assert!(!OrderStatus::InProgress.is_terminal());
    }

    #[test]
    fn test_slot_hours_match_labels() {
        for slot in TimeSlot::ALL {
            let prefix = format!("{:02}:", slot.start_hour());
            assert!(slot.label().starts_with(&prefix));
        }
    }

    #[test]
    fn test_slot_grouping() {
        let morning: Vec<_> = TimeSlot::ALL.iter().filter(|s| s.is_morning()).collect();
        assert_eq!(morning.len(), 3);
    }

    #[test]
    fn test_date_bucket_offsets() {
        assert_eq!(DateBucket::Today.day_offset(), 0);
        assert_eq!(DateBucket::Tomorrow.day_offset(), 1);
        assert_eq!(DateBucket::Future.day_offset(), 2);
    }

    #[test]
    fn test_draft_completeness() {
        let mut draft = AddressDraft {
            contact_name: "Sam".into(),
            contact_phone: "555-0100".into(),
            detail: "Building 1".into(),
            ..Default::default()
        };
        assert!(draft.is_complete());
        draft.detail.clear();
        assert!(!draft.is_complete());
    }
}
