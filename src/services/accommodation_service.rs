// src/services/accommodation_service.rs

use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    models::accommodations::{Accommodation, AccommodationPayload},
    store::AccommodationStore,
};

#[derive(Debug, Clone, Default)]
pub struct AccommodationService;

impl AccommodationService {
    pub fn new() -> Self {
        Self
    }

    pub fn create(
        &self,
        store: &mut AccommodationStore,
        payload: &AccommodationPayload,
    ) -> Result<Accommodation, AppError> {
        payload.validate()?;

        let accommodation = self.assemble(Uuid::new_v4(), payload);
        store.insert(accommodation.clone());

        tracing::info!("Acomodação '{}' cadastrada", accommodation.package_name);
        Ok(accommodation)
    }

    pub fn update(
        &self,
        store: &mut AccommodationStore,
        id: Uuid,
        payload: &AccommodationPayload,
    ) -> Result<Accommodation, AppError> {
        payload.validate()?;

        if store.find(id).is_none() {
            return Err(AppError::AccommodationNotFound);
        }

        let accommodation = self.assemble(id, payload);
        store.replace(accommodation.clone());

        tracing::info!("Acomodação '{}' atualizada", accommodation.package_name);
        Ok(accommodation)
    }

    // Não confere hospedagens existentes: a exclusão deixa os registros que
    // apontam para o pacote com a referência pendurada.
    pub fn delete(&self, store: &mut AccommodationStore, id: Uuid) {
        store.remove(id);
        tracing::info!("Acomodação {id} removida");
    }

    pub fn list<'a>(&self, store: &'a AccommodationStore) -> &'a [Accommodation] {
        store.list()
    }

    fn assemble(&self, id: Uuid, payload: &AccommodationPayload) -> Accommodation {
        Accommodation {
            id,
            package_name: payload.package_name.clone(),
            garage_spots: payload.garage_spots,
            single_beds: payload.single_beds,
            double_beds: payload.double_beds,
            climate_control: payload.climate_control,
            suite_count: payload.suite_count,
        }
    }
}
