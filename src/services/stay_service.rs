// src/services/stay_service.rs

use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::{required_field, AppError},
    models::stays::{Stay, StayPayload},
    store::StayStore,
};

#[derive(Debug, Clone, Default)]
pub struct StayService;

impl StayService {
    pub fn new() -> Self {
        Self
    }

    // Só exige os campos obrigatórios. Não valida se os IDs apontados
    // existem nem se há sobreposição de reservas no mesmo pacote.
    pub fn create(&self, store: &mut StayStore, payload: &StayPayload) -> Result<Stay, AppError> {
        payload.validate()?;

        let stay = self.assemble(Uuid::new_v4(), payload)?;
        store.insert(stay.clone());

        tracing::info!(
            "Hospedagem registrada: {} a {}",
            stay.start_date,
            stay.end_date
        );
        Ok(stay)
    }

    pub fn update(
        &self,
        store: &mut StayStore,
        id: Uuid,
        payload: &StayPayload,
    ) -> Result<Stay, AppError> {
        payload.validate()?;

        if store.find(id).is_none() {
            return Err(AppError::StayNotFound);
        }

        let stay = self.assemble(id, payload)?;
        store.replace(stay.clone());

        tracing::info!("Hospedagem {} atualizada", stay.id);
        Ok(stay)
    }

    pub fn delete(&self, store: &mut StayStore, id: Uuid) {
        store.remove(id);
        tracing::info!("Hospedagem {id} removida");
    }

    pub fn list<'a>(&self, store: &'a StayStore) -> &'a [Stay] {
        store.list()
    }

    fn assemble(&self, id: Uuid, payload: &StayPayload) -> Result<Stay, AppError> {
        Ok(Stay {
            id,
            client_id: payload.client_id.ok_or_else(|| required_field("clientId"))?,
            accommodation_id: payload
                .accommodation_id
                .ok_or_else(|| required_field("accommodationId"))?,
            start_date: payload
                .start_date
                .ok_or_else(|| required_field("startDate"))?,
            end_date: payload.end_date.ok_or_else(|| required_field("endDate"))?,
        })
    }
}
