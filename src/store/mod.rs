//! Store layer - in-process mock data service with simulated latency

pub mod actor;
pub mod data;

pub use actor::StoreActor;
pub use data::DataStore;
