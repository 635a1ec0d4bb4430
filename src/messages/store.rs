//! Store messages - communication between App and Store layers

use crate::models::{Address, AddressDraft, Category, Order, User};

/// Commands sent from App layer to the Store layer
#[derive(Debug, Clone)]
pub enum StoreCommand {
    /// Fetch the full address book
    ListAddresses { id: u64 },
    /// Fetch a single address by id
    GetAddress { id: u64, address_id: String },
    /// Create or update an address (draft id decides which)
    SaveAddress { id: u64, draft: AddressDraft },
    /// Remove an address; a no-op for unknown ids
    DeleteAddress { id: u64, address_id: String },
    /// Fetch all orders
    ListOrders { id: u64 },
    /// Fetch a single order by id
    GetOrder { id: u64, order_id: String },
    /// Store a fully constructed order
    CreateOrder { id: u64, order: Order },
    /// Cancel a pending order
    CancelOrder { id: u64, order_id: String },
    /// Fetch the static recyclable catalog
    ListCategories { id: u64 },
    /// Fetch the signed-in user
    GetUser { id: u64 },
    /// Shutdown the store actor
    Shutdown,
}

/// Responses sent from the Store layer back to the App layer.
///
/// The mock store models no failures: every command gets exactly one
/// response after its simulated latency.
#[derive(Debug, Clone)]
pub enum StoreResponse {
    Addresses { id: u64, addresses: Vec<Address> },
    Address { id: u64, address: Option<Address> },
    AddressSaved { id: u64, address: Address },
    AddressDeleted { id: u64 },
    Orders { id: u64, orders: Vec<Order> },
    Order { id: u64, order: Option<Order> },
    OrderCreated { id: u64, order_id: String },
    /// `cancelled` is false when the order was absent or not pending
    OrderCancelled { id: u64, cancelled: bool },
    Categories { id: u64, categories: Vec<Category> },
    CurrentUser { id: u64, user: User },
}

impl StoreResponse {
    /// Get the request ID the response answers
    pub fn id(&self) -> u64 {
        match self {
            StoreResponse::Addresses { id, .. } => *id,
            StoreResponse::Address { id, .. } => *id,
            StoreResponse::AddressSaved { id, .. } => *id,
            StoreResponse::AddressDeleted { id } => *id,
            StoreResponse::Orders { id, .. } => *id,
            StoreResponse::Order { id, .. } => *id,
            StoreResponse::OrderCreated { id, .. } => *id,
            StoreResponse::OrderCancelled { id, .. } => *id,
            StoreResponse::Categories { id, .. } => *id,
            StoreResponse::CurrentUser { id, .. } => *id,
        }
    }
}
