// src/store/client_store.rs

use uuid::Uuid;

use crate::models::clients::{Client, ClientKind};

// A coleção de clientes, em memória e em ordem de inserção. O acesso bruto
// mora aqui; regras de montagem e cópia de dados ficam no serviço.
#[derive(Debug, Clone, Default)]
pub struct ClientStore {
    records: Vec<Client>,
}

impl ClientStore {
    pub fn new() -> Self {
        Self::default()
    }

    // Busca um cliente pelo seu ID
    pub fn find(&self, id: Uuid) -> Option<&Client> {
        self.records.iter().find(|c| c.id == id)
    }

    // Acrescenta o registro ao final da lista
    pub fn insert(&mut self, client: Client) {
        self.records.push(client);
    }

    // Substitui o registro de mesmo ID; false se o ID não existir
    pub fn replace(&mut self, client: Client) -> bool {
        match self.records.iter_mut().find(|c| c.id == client.id) {
            Some(slot) => {
                *slot = client;
                true
            }
            None => false,
        }
    }

    // Remove por ID, sem checar vínculos; ID ausente é um no-op
    pub fn remove(&mut self, id: Uuid) {
        self.records.retain(|c| c.id != id);
    }

    pub fn list(&self) -> &[Client] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    // Somente titulares: as opções do select "Titular Responsável"
    pub fn titulares(&self) -> impl Iterator<Item = &Client> {
        self.records.iter().filter(|c| c.kind == ClientKind::Titular)
    }
}
