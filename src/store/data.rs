//! In-memory session store - the canonical collections behind the store actor
//!
//! One `DataStore` is constructed per session and owned by the actor; nothing
//! else holds a reference, so mutations need no locking. Every read hands out
//! clones, never views into the collections.

use chrono::{DateTime, Local, TimeZone};

use crate::models::{
    Address, AddressDraft, AddressTag, Category, Order, OrderStatus, Recycler, User,
};

/// Owned collections for one session, seeded with demo data.
pub struct DataStore {
    user: User,
    categories: Vec<Category>,
    addresses: Vec<Address>,
    orders: Vec<Order>,
    address_seq: u64,
}

/// Fixed timestamp for seed records. Falls back to "now" on an invalid
/// local time, which cannot happen for the values used below.
fn seed_time(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(y, m, d, h, min, 0)
        .single()
        .unwrap_or_else(Local::now)
}

impl DataStore {
    pub fn new() -> Self {
        let user = User {
            id: String::from("u123"),
            name: String::from("Sam Carter"),
            phone: String::from("555-0138"),
            avatar: String::from("https://picsum.photos/100/100"),
            points: 1250,
        };

        let categories = vec![
            Category {
                id: "c1".into(),
                name: "Paper".into(),
                icon: "📄".into(),
                price_desc: "0.80/kg".into(),
            },
            Category {
                id: "c2".into(),
                name: "Plastic".into(),
                icon: "🧴".into(),
                price_desc: "0.50/kg".into(),
            },
            Category {
                id: "c3".into(),
                name: "Metal".into(),
                icon: "🔩".into(),
                price_desc: "1.20/kg".into(),
            },
            Category {
                id: "c4".into(),
                name: "Clothing".into(),
                icon: "👕".into(),
                price_desc: "0.40/kg".into(),
            },
            Category {
                id: "c5".into(),
                name: "Electronics".into(),
                icon: "📱".into(),
                price_desc: "priced per item".into(),
            },
            Category {
                id: "c6".into(),
                name: "Appliances".into(),
                icon: "📺".into(),
                price_desc: "priced per item".into(),
            },
        ];

        let addresses = vec![
            Address {
                id: "a1".into(),
                contact_name: "Sam Carter".into(),
                contact_phone: "555-0138".into(),
                detail: "Building 1, Apt 202, Sunrise Court, Chaoyang".into(),
                tag: AddressTag::Home,
                is_default: true,
            },
            Address {
                id: "a2".into(),
                contact_name: "Riley Carter".into(),
                contact_phone: "555-0139".into(),
                detail: "Tower A, Hillside Tech Park, Haidian".into(),
                tag: AddressTag::Company,
                is_default: false,
            },
        ];

        let orders = vec![
            Order {
                id: "ord_001".into(),
                user_id: "u123".into(),
                category_ids: vec!["c1".into()],
                quantity: "10kg".into(),
                remark: String::new(),
                image_urls: vec!["https://picsum.photos/200/200".into()],
                appointment_time: seed_time(2023, 10, 27, 10, 0),
                address: addresses[0].clone(),
                status: OrderStatus::Completed,
                recycler: Some(Recycler {
                    name: "Wei Li".into(),
                    phone: "555-0135".into(),
                    rating: 4.8,
                }),
                create_time: seed_time(2023, 10, 26, 9, 0),
            },
            Order {
                id: "ord_002".into(),
                user_id: "u123".into(),
                category_ids: vec!["c2".into(), "c3".into()],
                quantity: "2 bags".into(),
                remark: String::new(),
                image_urls: Vec::new(),
                appointment_time: seed_time(2023, 11, 15, 14, 30),
                address: addresses[0].clone(),
                status: OrderStatus::Pending,
                recycler: None,
                create_time: seed_time(2023, 11, 15, 8, 0),
            },
        ];

        DataStore {
            user,
            categories,
            addresses,
            orders,
            address_seq: 3,
        }
    }

    pub fn user(&self) -> User {
        self.user.clone()
    }

    pub fn categories(&self) -> Vec<Category> {
        self.categories.clone()
    }

    /// Full address book, insertion order preserved.
    pub fn list_addresses(&self) -> Vec<Address> {
        self.addresses.clone()
    }

    pub fn get_address(&self, id: &str) -> Option<Address> {
        self.addresses.iter().find(|a| a.id == id).cloned()
    }

    /// Create or update an address.
    ///
    /// Enforces the at-most-one-default invariant here: a draft flagged
    /// default clears the flag on every other stored address first.
    pub fn save_address(&mut self, draft: AddressDraft) -> Address {
        if draft.is_default {
            for addr in &mut self.addresses {
                addr.is_default = false;
            }
        }

        let id = match draft.id {
            Some(id) => id,
            None => {
                let id = format!("a{}", self.address_seq);
                self.address_seq += 1;
                id
            }
        };

        let saved = Address {
            id: id.clone(),
            contact_name: draft.contact_name,
            contact_phone: draft.contact_phone,
            detail: draft.detail,
            tag: draft.tag,
            is_default: draft.is_default,
        };

        match self.addresses.iter_mut().find(|a| a.id == id) {
            Some(existing) => *existing = saved.clone(),
            None => self.addresses.push(saved.clone()),
        }

        saved
    }

    /// Idempotent: removing an unknown id is a no-op.
    pub fn delete_address(&mut self, id: &str) {
        self.addresses.retain(|a| a.id != id);
    }

    /// All orders, newest first (creation prepends).
    pub fn list_orders(&self) -> Vec<Order> {
        self.orders.clone()
    }

    pub fn get_order(&self, id: &str) -> Option<Order> {
        self.orders.iter().find(|o| o.id == id).cloned()
    }

    /// Prepends the fully constructed order. The caller owns id generation.
    pub fn create_order(&mut self, order: Order) {
        self.orders.insert(0, order);
    }

    /// Cancel a pending order. Returns whether the transition happened;
    /// unknown ids and non-pending orders are left untouched.
    pub fn cancel_order(&mut self, id: &str) -> bool {
        match self.orders.iter_mut().find(|o| o.id == id) {
            Some(order) if order.status.can_cancel() => {
                order.status = OrderStatus::Cancelled;
                true
            }
            _ => false,
        }
    }
}

impl Default for DataStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, default: bool) -> AddressDraft {
        AddressDraft {
            id: None,
            contact_name: name.into(),
            contact_phone: "555-0100".into(),
            detail: "Somewhere 42".into(),
            tag: AddressTag::Other,
            is_default: default,
        }
    }

    #[test]
    fn test_seeded_collections() {
        let store = DataStore::new();
        assert_eq!(store.list_addresses().len(), 2);
        assert_eq!(store.categories().len(), 6);
        assert_eq!(store.list_orders().len(), 2);
        assert_eq!(store.user().id, "u123");
    }

    #[test]
    fn test_save_with_default_keeps_single_default() {
        let mut store = DataStore::new();
        let saved = store.save_address(draft("New Place", true));
        let defaults: Vec<_> = store
            .list_addresses()
            .into_iter()
            .filter(|a| a.is_default)
            .collect();
        assert_eq!(defaults.len(), 1);
        assert_eq!(defaults[0].id, saved.id);
    }

    #[test]
    fn test_save_new_assigns_fresh_id() {
        let mut store = DataStore::new();
        let first = store.save_address(draft("First", false));
        let second = store.save_address(draft("Second", false));
        assert_ne!(first.id, second.id);
        assert_eq!(store.list_addresses().len(), 4);
    }

    #[test]
    fn test_save_existing_replaces_in_place() {
        let mut store = DataStore::new();
        let mut update = draft("Renamed", false);
        update.id = Some("a2".into());
        store.save_address(update);

        let addrs = store.list_addresses();
        assert_eq!(addrs.len(), 2);
        assert_eq!(addrs[1].id, "a2");
        assert_eq!(addrs[1].contact_name, "Renamed");
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut store = DataStore::new();
        store.delete_address("a2");
        assert!(store.get_address("a2").is_none());
        // Second delete of the same id is a no-op
        store.delete_address("a2");
        assert_eq!(store.list_addresses().len(), 1);
        store.delete_address("never-existed");
        assert_eq!(store.list_addresses().len(), 1);
    }

    #[test]
    fn test_create_order_prepends() {
        let mut store = DataStore::new();
        let mut order = store.get_order("ord_002").unwrap();
        order.id = "ord_new".into();
        store.create_order(order);
        assert_eq!(store.list_orders()[0].id, "ord_new");
    }

    #[test]
    fn test_cancel_pending_order() {
        let mut store = DataStore::new();
        assert!(store.cancel_order("ord_002"));
        assert_eq!(
            store.get_order("ord_002").unwrap().status,
            OrderStatus::Cancelled
        );
    }

    #[test]
    fn test_cancel_completed_order_is_refused() {
        // ord_001 is seeded Completed; cancellation is guarded to Pending.
        let mut store = DataStore::new();
        assert!(!store.cancel_order("ord_001"));
        assert_eq!(
            store.get_order("ord_001").unwrap().status,
            OrderStatus::Completed
        );
    }

    #[test]
    fn test_cancel_unknown_order_is_noop() {
        let mut store = DataStore::new();
        assert!(!store.cancel_order("ord_404"));
        assert_eq!(store.list_orders().len(), 2);
    }

    #[test]
    fn test_order_address_is_a_snapshot() {
        let mut store = DataStore::new();
        let mut update = AddressDraft::from_address(&store.get_address("a1").unwrap());
        update.detail = "Moved somewhere else".into();
        store.save_address(update);

        // Past orders keep the address as it was at creation time.
        let order = store.get_order("ord_001").unwrap();
        assert_eq!(order.address.detail, "Building 1, Apt 202, Sunrise Court, Chaoyang");
    }
}
