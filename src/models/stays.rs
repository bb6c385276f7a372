// src/models/stays.rs

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// --- ENUMS ---

// Situação derivada da data de fim; nunca é gravada no registro.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StayStatus {
    Active,
    Finished,
}

impl fmt::Display for StayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StayStatus::Active => write!(f, "Ativa"),
            StayStatus::Finished => write!(f, "Finalizada"),
        }
    }
}

// --- HOSPEDAGEM ---

// Vincula um cliente a uma acomodação por um intervalo de datas. As chaves
// estrangeiras são apenas IDs soltos: excluir o cliente ou a acomodação
// deixa a referência pendurada, resolvida com um rótulo fixo na exibição.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stay {
    pub id: Uuid,
    pub client_id: Uuid,
    pub accommodation_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

// Dados do formulário de hospedagem. O formulário sugere fim >= início,
// mas a gravação não impõe a ordem das datas.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StayPayload {
    #[validate(required(message = "required"))]
    pub client_id: Option<Uuid>,

    #[validate(required(message = "required"))]
    pub accommodation_id: Option<Uuid>,

    #[validate(required(message = "required"))]
    pub start_date: Option<NaiveDate>,

    #[validate(required(message = "required"))]
    pub end_date: Option<NaiveDate>,
}

impl From<&Stay> for StayPayload {
    fn from(stay: &Stay) -> Self {
        Self {
            client_id: Some(stay.client_id),
            accommodation_id: Some(stay.accommodation_id),
            start_date: Some(stay.start_date),
            end_date: Some(stay.end_date),
        }
    }
}
