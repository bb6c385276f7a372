pub mod clients;
pub use clients::{Address, Client, ClientKind, ClientPayload, Document, DocumentPayload, DocumentType};
pub mod accommodations;
pub use accommodations::{Accommodation, AccommodationPayload};
pub mod stays;
pub use stays::{Stay, StayPayload, StayStatus};
pub mod dashboard;
pub use dashboard::DashboardSummary;
