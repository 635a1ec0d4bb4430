//! Store actor - serves data commands from an owned in-memory store
//!
//! Commands are processed strictly in arrival order by a single owner, which
//! is what makes the lock-free `DataStore` sound. Each operation sleeps a
//! fixed simulated latency in the 200-800ms band before it is applied, the
//! same figures the backing service would exhibit.

use std::time::Duration;

use tokio::sync::mpsc;

use crate::messages::{StoreCommand, StoreResponse};
use crate::store::data::DataStore;

/// Simulated round-trip for each operation.
fn latency_for(cmd: &StoreCommand) -> Duration {
    let ms = match cmd {
        StoreCommand::ListAddresses { .. } => 300,
        StoreCommand::GetAddress { .. } => 200,
        StoreCommand::SaveAddress { .. } => 500,
        StoreCommand::DeleteAddress { .. } => 300,
        StoreCommand::ListOrders { .. } => 300,
        StoreCommand::GetOrder { .. } => 300,
        StoreCommand::CreateOrder { .. } => 800,
        StoreCommand::CancelOrder { .. } => 500,
        StoreCommand::ListCategories { .. } => 200,
        StoreCommand::GetUser { .. } => 200,
        StoreCommand::Shutdown => 0,
    };
    Duration::from_millis(ms)
}

/// Actor owning the session's `DataStore`
pub struct StoreActor {
    store: DataStore,
    response_tx: mpsc::UnboundedSender<StoreResponse>,
    simulate_latency: bool,
}

impl StoreActor {
    pub fn new(response_tx: mpsc::UnboundedSender<StoreResponse>) -> Self {
        StoreActor {
            store: DataStore::new(),
            response_tx,
            simulate_latency: true,
        }
    }

    /// Same actor with the artificial delays disabled, for tests.
    pub fn without_latency(response_tx: mpsc::UnboundedSender<StoreResponse>) -> Self {
        StoreActor {
            store: DataStore::new(),
            response_tx,
            simulate_latency: false,
        }
    }

    /// Run the store actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<StoreCommand>) {
        while let Some(cmd) = cmd_rx.recv().await {
            if matches!(cmd, StoreCommand::Shutdown) {
                tracing::info!("Store actor shutting down");
                break;
            }

            if self.simulate_latency {
                tokio::time::sleep(latency_for(&cmd)).await;
            }

            let response = self.apply(cmd);
            let _ = self.response_tx.send(response);
        }
    }

    fn apply(&mut self, cmd: StoreCommand) -> StoreResponse {
        match cmd {
            StoreCommand::ListAddresses { id } => {
                let addresses = self.store.list_addresses();
                tracing::info!(id, count = addresses.len(), "Listed addresses");
                StoreResponse::Addresses { id, addresses }
            }
            StoreCommand::GetAddress { id, address_id } => StoreResponse::Address {
                id,
                address: self.store.get_address(&address_id),
            },
            StoreCommand::SaveAddress { id, draft } => {
                let address = self.store.save_address(draft);
                tracing::info!(id, address_id = %address.id, "Saved address");
                StoreResponse::AddressSaved { id, address }
            }
            StoreCommand::DeleteAddress { id, address_id } => {
                self.store.delete_address(&address_id);
                tracing::info!(id, %address_id, "Deleted address");
                StoreResponse::AddressDeleted { id }
            }
            StoreCommand::ListOrders { id } => {
                let orders = self.store.list_orders();
                tracing::info!(id, count = orders.len(), "Listed orders");
                StoreResponse::Orders { id, orders }
            }
            StoreCommand::GetOrder { id, order_id } => StoreResponse::Order {
                id,
                order: self.store.get_order(&order_id),
            },
            StoreCommand::CreateOrder { id, order } => {
                let order_id = order.id.clone();
                tracing::info!(id, %order_id, "Created order");
                self.store.create_order(order);
                StoreResponse::OrderCreated { id, order_id }
            }
            StoreCommand::CancelOrder { id, order_id } => {
                let cancelled = self.store.cancel_order(&order_id);
                tracing::info!(id, %order_id, cancelled, "Cancel order");
                StoreResponse::OrderCancelled { id, cancelled }
            }
            StoreCommand::ListCategories { id } => StoreResponse::Categories {
                id,
                categories: self.store.categories(),
            },
            StoreCommand::GetUser { id } => StoreResponse::CurrentUser {
                id,
                user: self.store.user(),
            },
            StoreCommand::Shutdown => unreachable!("handled in run loop"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AddressDraft;

    fn spawn_actor() -> (
        mpsc::UnboundedSender<StoreCommand>,
        mpsc::UnboundedReceiver<StoreResponse>,
    ) {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (resp_tx, resp_rx) = mpsc::unbounded_channel();
        tokio::spawn(StoreActor::without_latency(resp_tx).run(cmd_rx));
        (cmd_tx, resp_rx)
    }

    #[tokio::test]
    async fn test_list_addresses_roundtrip() {
        let (tx, mut rx) = spawn_actor();
        tx.send(StoreCommand::ListAddresses { id: 7 }).unwrap();

        match rx.recv().await.unwrap() {
            StoreResponse::Addresses { id, addresses } => {
                assert_eq!(id, 7);
                assert_eq!(addresses.len(), 2);
                assert!(addresses[0].is_default);
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_save_then_delete_address() {
        let (tx, mut rx) = spawn_actor();
        let draft = AddressDraft {
            id: None,
            contact_name: "Jo".into(),
            contact_phone: "555-0101".into(),
            detail: "Dock 9".into(),
            is_default: true,
            ..Default::default()
        };
        tx.send(StoreCommand::SaveAddress { id: 1, draft }).unwrap();

        let saved_id = match rx.recv().await.unwrap() {
            StoreResponse::AddressSaved { address, .. } => {
                assert!(address.is_default);
                address.id
            }
            other => panic!("unexpected response: {other:?}"),
        };

        tx.send(StoreCommand::DeleteAddress { id: 2, address_id: saved_id.clone() })
            .unwrap();
        assert!(matches!(
            rx.recv().await.unwrap(),
            StoreResponse::AddressDeleted { id: 2 }
        ));

        tx.send(StoreCommand::GetAddress { id: 3, address_id: saved_id })
            .unwrap();
        match rx.recv().await.unwrap() {
            StoreResponse::Address { address, .. } => assert!(address.is_none()),
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_cancel_completed_order_reports_no_transition() {
        let (tx, mut rx) = spawn_actor();
        tx.send(StoreCommand::CancelOrder { id: 1, order_id: "ord_001".into() })
            .unwrap();
        match rx.recv().await.unwrap() {
            StoreResponse::OrderCancelled { cancelled, .. } => assert!(!cancelled),
            other => panic!("unexpected response: {other:?}"),
        }

        tx.send(StoreCommand::GetOrder { id: 2, order_id: "ord_001".into() })
            .unwrap();
        match rx.recv().await.unwrap() {
            StoreResponse::Order { order, .. } => {
                assert_eq!(order.unwrap().status, crate::models::OrderStatus::Completed);
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }
}
