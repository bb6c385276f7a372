use chrono::NaiveDate;
use uuid::Uuid;

use pousada::models::{
    AccommodationPayload, Address, ClientKind, ClientPayload, DocumentPayload, DocumentType,
    StayPayload,
};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("data de calendário válida")
}

/// Payload de titular preenchido como o formulário enviaria
pub fn titular_payload(name: &str) -> ClientPayload {
    ClientPayload {
        full_name: name.to_string(),
        social_name: String::new(),
        birth_date: Some(date(1985, 3, 15)),
        phones: vec!["(11) 99999-1234".to_string()],
        address: Address {
            street: "Rua das Flores".into(),
            number: "123".into(),
            district: "Centro".into(),
            city: "São Paulo".into(),
            postal_code: "01234-567".into(),
        },
        documents: vec![DocumentPayload {
            id: None,
            doc_type: DocumentType::Rg,
            number: "12.345.678-9".into(),
            issue_date: Some(date(2020, 1, 15)),
            other_label: String::new(),
        }],
        kind: ClientKind::Titular,
        holder_id: None,
    }
}

/// Payload de dependente com contato próprio, que a gravação troca pelo
/// contato do titular quando a referência resolve
pub fn dependente_payload(name: &str, holder_id: Uuid) -> ClientPayload {
    let mut payload = titular_payload(name);
    payload.kind = ClientKind::Dependente;
    payload.holder_id = Some(holder_id);
    payload.phones = vec!["(99) 00000-0000".to_string()];
    payload.address = Address {
        street: "Rua Própria".into(),
        number: "1".into(),
        district: "Bairro Próprio".into(),
        city: "Outra Cidade".into(),
        postal_code: "99999-000".into(),
    };
    payload
}

pub fn accommodation_payload(name: &str) -> AccommodationPayload {
    AccommodationPayload {
        package_name: name.to_string(),
        garage_spots: 1,
        single_beds: 2,
        double_beds: 1,
        climate_control: true,
        suite_count: 1,
    }
}

pub fn stay_payload(
    client_id: Uuid,
    accommodation_id: Uuid,
    start: NaiveDate,
    end: NaiveDate,
) -> StayPayload {
    StayPayload {
        client_id: Some(client_id),
        accommodation_id: Some(accommodation_id),
        start_date: Some(start),
        end_date: Some(end),
    }
}
