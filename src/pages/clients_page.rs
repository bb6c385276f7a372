// src/pages/clients_page.rs

use uuid::Uuid;

use super::dialog::Dialog;
use crate::{
    common::error::AppError,
    models::clients::{Client, ClientPayload},
    services::ClientService,
    store::ClientStore,
};

// Controlador da página de clientes: o diálogo e o formulário em edição.
// A página não guarda a coleção; recebe o handle a cada operação.
#[derive(Debug, Default)]
pub struct ClientsPage {
    service: ClientService,
    pub dialog: Dialog<Client>,
    pub form: ClientPayload,
}

impl ClientsPage {
    pub fn new() -> Self {
        Self::default()
    }

    // "Novo Cliente": abre o diálogo com o formulário zerado
    pub fn open_new(&mut self) {
        self.form = ClientPayload::default();
        self.dialog = Dialog::open_new();
    }

    // "Editar": abre o diálogo pré-preenchido a partir do registro
    pub fn open_edit(&mut self, client: &Client) {
        self.form = ClientPayload::from(client);
        self.dialog = Dialog::open_edit(client.clone());
    }

    pub fn cancel(&mut self) {
        self.dialog.close();
    }

    // Submit: cria ou atualiza conforme o modo do diálogo. Validação
    // reprovada mantém o diálogo aberto e a coleção intocada.
    pub fn submit(&mut self, store: &mut ClientStore) -> Result<Client, AppError> {
        let saved = match self.dialog.editing() {
            Some(editing) => self.service.update(store, editing.id, &self.form)?,
            None => self.service.create(store, &self.form)?,
        };

        self.form = ClientPayload::default();
        self.dialog.close();
        Ok(saved)
    }

    pub fn remove(&mut self, store: &mut ClientStore, id: Uuid) {
        self.service.delete(store, id);
    }
}
