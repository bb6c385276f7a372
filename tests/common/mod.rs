mod fixtures;
pub use fixtures::*;

// Reexporta os tipos mais usados nos testes
pub use pousada::models::{
    Accommodation, AccommodationPayload, Address, Client, ClientKind, ClientPayload, Document,
    DocumentPayload, DocumentType, Stay, StayPayload, StayStatus,
};
pub use pousada::services::{
    views, AccommodationService, ClientService, DashboardService, StayService,
};
pub use pousada::store::{AccommodationStore, ClientStore, StayStore};
pub use pousada::{App, AppError, AppState};
