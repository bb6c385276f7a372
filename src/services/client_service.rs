// src/services/client_service.rs

use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::{required_field, AppError},
    models::clients::{Client, ClientKind, ClientPayload, Document, DocumentType},
    store::ClientStore,
};

#[derive(Debug, Clone, Default)]
pub struct ClientService;

impl ClientService {
    pub fn new() -> Self {
        Self
    }

    // =========================================================================
    //  CADASTRO
    // =========================================================================

    pub fn create(
        &self,
        store: &mut ClientStore,
        payload: &ClientPayload,
    ) -> Result<Client, AppError> {
        payload.validate()?;

        let client = self.assemble(Uuid::new_v4(), payload, store)?;
        store.insert(client.clone());

        tracing::info!("Cliente '{}' cadastrado", client.full_name);
        Ok(client)
    }

    // A mesma montagem (e a mesma cópia do titular) roda de novo a cada edição
    pub fn update(
        &self,
        store: &mut ClientStore,
        id: Uuid,
        payload: &ClientPayload,
    ) -> Result<Client, AppError> {
        payload.validate()?;

        if store.find(id).is_none() {
            return Err(AppError::ClientNotFound);
        }

        let client = self.assemble(id, payload, store)?;
        store.replace(client.clone());

        tracing::info!("Cliente '{}' atualizado", client.full_name);
        Ok(client)
    }

    // Remoção incondicional: dependentes e hospedagens que apontam para este
    // cliente permanecem no sistema com a referência pendurada.
    pub fn delete(&self, store: &mut ClientStore, id: Uuid) {
        store.remove(id);
        tracing::info!("Cliente {id} removido");
    }

    pub fn list<'a>(&self, store: &'a ClientStore) -> &'a [Client] {
        store.list()
    }

    // =========================================================================
    //  MONTAGEM DO REGISTRO
    // =========================================================================

    fn assemble(
        &self,
        id: Uuid,
        payload: &ClientPayload,
        store: &ClientStore,
    ) -> Result<Client, AppError> {
        let birth_date = payload.birth_date.ok_or_else(|| required_field("birthDate"))?;

        // Telefones em branco são descartados
        let mut phones: Vec<String> = payload
            .phones
            .iter()
            .filter(|phone| !phone.trim().is_empty())
            .cloned()
            .collect();

        // Documento sem número = linha não preenchida; sai da gravação em
        // silêncio. Linhas novas ganham ID aqui.
        let documents: Vec<Document> = payload
            .documents
            .iter()
            .filter(|doc| !doc.number.trim().is_empty())
            .map(|doc| Document {
                id: doc.id.unwrap_or_else(Uuid::new_v4),
                doc_type: doc.doc_type,
                number: doc.number.clone(),
                issue_date: doc.issue_date,
                other_label: (doc.doc_type == DocumentType::Outro
                    && !doc.other_label.trim().is_empty())
                .then(|| doc.other_label.clone()),
            })
            .collect();

        let mut address = payload.address.clone();

        // A referência ao titular só é gravada em dependentes
        let holder_id = match payload.kind {
            ClientKind::Dependente => payload.holder_id,
            ClientKind::Titular => None,
        };

        // Dependente herda telefones e endereço do titular no momento da
        // gravação (cópia, não vínculo). Titular não resolvido: mantém o que
        // foi digitado, sem erro.
        if payload.kind == ClientKind::Dependente {
            if let Some(holder) = holder_id.and_then(|holder_id| store.find(holder_id)) {
                phones = holder.phones.clone();
                address = holder.address.clone();
            }
        }

        Ok(Client {
            id,
            full_name: payload.full_name.clone(),
            social_name: (!payload.social_name.trim().is_empty())
                .then(|| payload.social_name.clone()),
            birth_date,
            phones,
            address,
            documents,
            kind: payload.kind,
            holder_id,
        })
    }
}
