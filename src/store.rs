pub mod client_store;
pub use client_store::ClientStore;
pub mod accommodation_store;
pub use accommodation_store::AccommodationStore;
pub mod stay_store;
pub use stay_store::StayStore;
