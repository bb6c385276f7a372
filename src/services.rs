pub mod client_service;
pub use client_service::ClientService;
pub mod accommodation_service;
pub use accommodation_service::AccommodationService;
pub mod stay_service;
pub use stay_service::StayService;
pub mod dashboard_service;
pub use dashboard_service::DashboardService;
pub mod views;
