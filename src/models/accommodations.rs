// src/models/accommodations.rs

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// Pacote de acomodação: descritor estático do quarto/suíte. Não é unidade
// de inventário; hospedagens sobrepostas no mesmo pacote não são barradas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Accommodation {
    pub id: Uuid,
    pub package_name: String,
    pub garage_spots: u32,
    pub single_beds: u32,
    pub double_beds: u32,
    pub climate_control: bool,
    pub suite_count: u32,
}

// Dados do formulário de pacote
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AccommodationPayload {
    #[validate(length(min = 1, message = "required"))]
    pub package_name: String,
    pub garage_spots: u32,
    pub single_beds: u32,
    pub double_beds: u32,
    pub climate_control: bool,
    pub suite_count: u32,
}

impl From<&Accommodation> for AccommodationPayload {
    fn from(accommodation: &Accommodation) -> Self {
        Self {
            package_name: accommodation.package_name.clone(),
            garage_spots: accommodation.garage_spots,
            single_beds: accommodation.single_beds,
            double_beds: accommodation.double_beds,
            climate_control: accommodation.climate_control,
            suite_count: accommodation.suite_count,
        }
    }
}
