// src/pages/app_shell.rs

use chrono::NaiveDate;

use super::{AccommodationsPage, ClientsPage, StaysPage};
use crate::{config::AppState, models::dashboard::DashboardSummary, services::DashboardService};

// Abas da aplicação, espelhando o menu lateral
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveTab {
    #[default]
    Dashboard,
    Clients,
    Accommodations,
    Stays,
}

/// Casca da aplicação: dona do estado e dos três controladores de página.
/// As páginas são independentes entre si; cada operação recebe por
/// empréstimo apenas a coleção da própria página.
#[derive(Debug, Default)]
pub struct App {
    pub state: AppState,
    pub active_tab: ActiveTab,
    pub clients_page: ClientsPage,
    pub accommodations_page: AccommodationsPage,
    pub stays_page: StaysPage,
    dashboard: DashboardService,
}

impl App {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            ..Self::default()
        }
    }

    pub fn select_tab(&mut self, tab: ActiveTab) {
        self.active_tab = tab;
    }

    // Resumo do painel, recalculado a cada chamada
    pub fn dashboard_summary(&self, today: NaiveDate) -> DashboardSummary {
        self.dashboard.summary(
            &self.state.clients,
            &self.state.accommodations,
            &self.state.stays,
            today,
        )
    }
}
