// src/pages/accommodations_page.rs

use uuid::Uuid;

use super::dialog::Dialog;
use crate::{
    common::error::AppError,
    models::accommodations::{Accommodation, AccommodationPayload},
    services::AccommodationService,
    store::AccommodationStore,
};

// Controlador da página de acomodações
#[derive(Debug, Default)]
pub struct AccommodationsPage {
    service: AccommodationService,
    pub dialog: Dialog<Accommodation>,
    pub form: AccommodationPayload,
}

impl AccommodationsPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_new(&mut self) {
        self.form = AccommodationPayload::default();
        self.dialog = Dialog::open_new();
    }

    pub fn open_edit(&mut self, accommodation: &Accommodation) {
        self.form = AccommodationPayload::from(accommodation);
        self.dialog = Dialog::open_edit(accommodation.clone());
    }

    pub fn cancel(&mut self) {
        self.dialog.close();
    }

    pub fn submit(&mut self, store: &mut AccommodationStore) -> Result<Accommodation, AppError> {
        let saved = match self.dialog.editing() {
            Some(editing) => self.service.update(store, editing.id, &self.form)?,
            None => self.service.create(store, &self.form)?,
        };

        self.form = AccommodationPayload::default();
        self.dialog.close();
        Ok(saved)
    }

    pub fn remove(&mut self, store: &mut AccommodationStore, id: Uuid) {
        self.service.delete(store, id);
    }
}
