// src/config.rs

pub mod seed;

use crate::store::{AccommodationStore, ClientStore, StayStore};

// O estado compartilhado da aplicação: as três coleções moram aqui, num
// dono único, e toda mutação passa pelos serviços. Nada é persistido: o
// estado vive e morre com o processo.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub clients: ClientStore,
    pub accommodations: AccommodationStore,
    pub stays: StayStore,
}

impl AppState {
    // Estado vazio
    pub fn new() -> Self {
        Self::default()
    }

    // Estado com a carga de demonstração
    pub fn seeded() -> Self {
        let state = seed::sample_state();
        tracing::info!(
            "✅ Carga de demonstração pronta: {} clientes, {} acomodações, {} hospedagens",
            state.clients.len(),
            state.accommodations.len(),
            state.stays.len()
        );
        state
    }
}
