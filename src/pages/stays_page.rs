// src/pages/stays_page.rs

use uuid::Uuid;

use super::dialog::Dialog;
use crate::{
    common::error::AppError,
    models::stays::{Stay, StayPayload},
    services::StayService,
    store::StayStore,
};

// Controlador da página de hospedagens. A leitura da lista resolve nomes de
// cliente e acomodação via `services::views`, nunca direto nas coleções
// das outras páginas.
#[derive(Debug, Default)]
pub struct StaysPage {
    service: StayService,
    pub dialog: Dialog<Stay>,
    pub form: StayPayload,
}

impl StaysPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_new(&mut self) {
        self.form = StayPayload::default();
        self.dialog = Dialog::open_new();
    }

    pub fn open_edit(&mut self, stay: &Stay) {
        self.form = StayPayload::from(stay);
        self.dialog = Dialog::open_edit(stay.clone());
    }

    pub fn cancel(&mut self) {
        self.dialog.close();
    }

    pub fn submit(&mut self, store: &mut StayStore) -> Result<Stay, AppError> {
        let saved = match self.dialog.editing() {
            Some(editing) => self.service.update(store, editing.id, &self.form)?,
            None => self.service.create(store, &self.form)?,
        };

        self.form = StayPayload::default();
        self.dialog.close();
        Ok(saved)
    }

    pub fn remove(&mut self, store: &mut StayStore, id: Uuid) {
        self.service.delete(store, id);
    }
}
