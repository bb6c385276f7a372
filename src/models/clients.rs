// src/models/clients.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// --- ENUMS ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClientKind {
    #[default]
    Titular,
    Dependente,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DocumentType {
    #[default]
    #[serde(rename = "RG")]
    Rg,
    #[serde(rename = "CPF")]
    Cpf,
    Passaporte,
    #[serde(rename = "CNH")]
    Cnh,
    Outro,
}

// --- ENDEREÇO ---

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub number: String,
    pub district: String,
    pub city: String,
    pub postal_code: String,
}

// --- DOCUMENTO ---

// Um documento só existe dentro do cliente dono; não há coleção própria.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: Uuid,
    pub doc_type: DocumentType,
    pub number: String,
    pub issue_date: Option<NaiveDate>,

    // Preenchido apenas quando doc_type = Outro (ex: "OAB", "CRM")
    pub other_label: Option<String>,
}

impl Document {
    // Rótulo exibido nas listagens: o tipo, ou o texto livre quando "Outro"
    pub fn display_label(&self) -> &str {
        match (&self.doc_type, &self.other_label) {
            (DocumentType::Outro, Some(label)) => label,
            (DocumentType::Rg, _) => "RG",
            (DocumentType::Cpf, _) => "CPF",
            (DocumentType::Passaporte, _) => "Passaporte",
            (DocumentType::Cnh, _) => "CNH",
            (DocumentType::Outro, None) => "Outro",
        }
    }
}

// --- CLIENTE (O Dado) ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: Uuid,

    pub full_name: String,
    pub social_name: Option<String>,
    pub birth_date: NaiveDate,

    pub phones: Vec<String>,
    pub address: Address,
    pub documents: Vec<Document>,

    pub kind: ClientKind,

    // Referência ao titular responsável; presente só quando kind = Dependente.
    // Telefones e endereço do dependente são uma CÓPIA feita na gravação, não
    // um vínculo vivo: editar o titular depois não altera os dependentes.
    pub holder_id: Option<Uuid>,
}

// --- FORMULÁRIO ---

// Dados do formulário de cadastro/edição de cliente. Linhas de telefone e de
// documento em branco são permitidas aqui; o serviço descarta na gravação.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ClientPayload {
    #[validate(length(min = 1, message = "required"))]
    pub full_name: String,

    // "" = não informado
    pub social_name: String,

    #[validate(required(message = "required"))]
    pub birth_date: Option<NaiveDate>,

    pub phones: Vec<String>,
    pub address: Address,
    pub documents: Vec<DocumentPayload>,

    pub kind: ClientKind,
    pub holder_id: Option<Uuid>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentPayload {
    // None enquanto a linha ainda não foi salva
    pub id: Option<Uuid>,
    pub doc_type: DocumentType,
    pub number: String,
    pub issue_date: Option<NaiveDate>,
    pub other_label: String,
}

impl Default for DocumentPayload {
    fn default() -> Self {
        Self {
            id: None,
            doc_type: DocumentType::Rg,
            number: String::new(),
            issue_date: None,
            other_label: String::new(),
        }
    }
}

impl Default for ClientPayload {
    // Formulário zerado: uma linha de telefone e uma de documento em branco
    fn default() -> Self {
        Self {
            full_name: String::new(),
            social_name: String::new(),
            birth_date: None,
            phones: vec![String::new()],
            address: Address::default(),
            documents: vec![DocumentPayload::default()],
            kind: ClientKind::Titular,
            holder_id: None,
        }
    }
}

impl ClientPayload {
    // "Adicionar" telefone: acrescenta uma linha em branco
    pub fn add_phone(&mut self) {
        self.phones.push(String::new());
    }

    // Remove a linha; a lista nunca fica sem pelo menos uma linha
    pub fn remove_phone(&mut self, index: usize) {
        if index < self.phones.len() {
            self.phones.remove(index);
        }
        if self.phones.is_empty() {
            self.phones.push(String::new());
        }
    }

    pub fn set_phone(&mut self, index: usize, value: impl Into<String>) {
        if let Some(slot) = self.phones.get_mut(index) {
            *slot = value.into();
        }
    }

    pub fn add_document(&mut self) {
        self.documents.push(DocumentPayload::default());
    }

    // Remove a linha; mantém sempre pelo menos uma linha de documento
    pub fn remove_document(&mut self, index: usize) {
        if index < self.documents.len() {
            self.documents.remove(index);
        }
        if self.documents.is_empty() {
            self.documents.push(DocumentPayload::default());
        }
    }
}

impl From<&Client> for ClientPayload {
    // Pré-preenche o formulário de edição a partir do registro
    fn from(client: &Client) -> Self {
        let phones = if client.phones.is_empty() {
            vec![String::new()]
        } else {
            client.phones.clone()
        };

        Self {
            full_name: client.full_name.clone(),
            social_name: client.social_name.clone().unwrap_or_default(),
            birth_date: Some(client.birth_date),
            phones,
            address: client.address.clone(),
            documents: client
                .documents
                .iter()
                .map(|doc| DocumentPayload {
                    id: Some(doc.id),
                    doc_type: doc.doc_type,
                    number: doc.number.clone(),
                    issue_date: doc.issue_date,
                    other_label: doc.other_label.clone().unwrap_or_default(),
                })
                .collect(),
            kind: client.kind,
            holder_id: client.holder_id,
        }
    }
}
