// src/services/dashboard_service.rs

use chrono::NaiveDate;

use crate::{
    models::{dashboard::DashboardSummary, stays::StayStatus},
    services::views,
    store::{AccommodationStore, ClientStore, StayStore},
};

#[derive(Debug, Clone, Default)]
pub struct DashboardService;

impl DashboardService {
    pub fn new() -> Self {
        Self
    }

    // Varreduras lineares sobre as três coleções, recalculadas por chamada
    pub fn summary(
        &self,
        clients: &ClientStore,
        accommodations: &AccommodationStore,
        stays: &StayStore,
        today: NaiveDate,
    ) -> DashboardSummary {
        let titular_count = clients.titulares().count();
        let active_stays = stays
            .list()
            .iter()
            .filter(|stay| views::stay_status(stay.end_date, today) == StayStatus::Active)
            .count();

        DashboardSummary {
            total_clients: clients.len(),
            titular_count,
            dependente_count: clients.len() - titular_count,
            total_accommodations: accommodations.len(),
            total_stays: stays.len(),
            active_stays,
            finished_stays: stays.len() - active_stays,
        }
    }
}
