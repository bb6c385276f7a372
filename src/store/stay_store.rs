// src/store/stay_store.rs

use uuid::Uuid;

use crate::models::stays::Stay;

// A coleção de hospedagens, em ordem de inserção
#[derive(Debug, Clone, Default)]
pub struct StayStore {
    records: Vec<Stay>,
}

impl StayStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find(&self, id: Uuid) -> Option<&Stay> {
        self.records.iter().find(|s| s.id == id)
    }

    pub fn insert(&mut self, stay: Stay) {
        self.records.push(stay);
    }

    // Substitui o registro de mesmo ID; false se o ID não existir
    pub fn replace(&mut self, stay: Stay) -> bool {
        match self.records.iter_mut().find(|s| s.id == stay.id) {
            Some(slot) => {
                *slot = stay;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: Uuid) {
        self.records.retain(|s| s.id != id);
    }

    pub fn list(&self) -> &[Stay] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
