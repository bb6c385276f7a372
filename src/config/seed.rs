// src/config/seed.rs

use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
    config::AppState,
    models::accommodations::Accommodation,
    models::clients::{Address, Client, ClientKind, Document, DocumentType},
    models::stays::Stay,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("data de calendário válida")
}

fn document(doc_type: DocumentType, number: &str, issued: NaiveDate) -> Document {
    Document {
        id: Uuid::new_v4(),
        doc_type,
        number: number.to_string(),
        issue_date: Some(issued),
        other_label: None,
    }
}

// Carga de demonstração: cinco clientes (um dependente), seis pacotes e
// seis hospedagens, com as chaves estrangeiras amarradas entre as coleções.
pub fn sample_state() -> AppState {
    let mut state = AppState::new();

    // --- CLIENTES ---

    let joao_address = Address {
        street: "Rua das Flores".into(),
        number: "123".into(),
        district: "Centro".into(),
        city: "São Paulo".into(),
        postal_code: "01234-567".into(),
    };
    let joao_phones = vec!["(11) 99999-1234".to_string(), "(11) 3333-5678".to_string()];

    let joao = Client {
        id: Uuid::new_v4(),
        full_name: "João Silva Santos".into(),
        social_name: Some("João Santos".into()),
        birth_date: date(1985, 3, 15),
        phones: joao_phones.clone(),
        address: joao_address.clone(),
        documents: vec![
            document(DocumentType::Rg, "12.345.678-9", date(2020, 1, 15)),
            document(DocumentType::Cpf, "123.456.789-00", date(2018, 5, 20)),
            document(DocumentType::Passaporte, "BR123456", date(2022, 8, 10)),
        ],
        kind: ClientKind::Titular,
        holder_id: None,
    };

    let maria = Client {
        id: Uuid::new_v4(),
        full_name: "Maria Oliveira Costa".into(),
        social_name: None,
        birth_date: date(1990, 7, 22),
        phones: vec!["(21) 88888-9876".into(), "(21) 2222-1111".into()],
        address: Address {
            street: "Avenida Copacabana".into(),
            number: "456".into(),
            district: "Copacabana".into(),
            city: "Rio de Janeiro".into(),
            postal_code: "22070-001".into(),
        },
        documents: vec![
            document(DocumentType::Rg, "98.765.432-1", date(2019, 3, 12)),
            document(DocumentType::Cpf, "987.654.321-00", date(2017, 11, 8)),
        ],
        kind: ClientKind::Titular,
        holder_id: None,
    };

    // Dependente do João: telefones e endereço são a cópia feita na gravação
    let pedro = Client {
        id: Uuid::new_v4(),
        full_name: "Pedro Silva Santos".into(),
        social_name: None,
        birth_date: date(2010, 12, 3),
        phones: joao_phones,
        address: joao_address,
        documents: vec![
            document(DocumentType::Rg, "11.222.333-4", date(2023, 1, 10)),
            document(DocumentType::Cpf, "111.222.333-44", date(2023, 1, 10)),
        ],
        kind: ClientKind::Dependente,
        holder_id: Some(joao.id),
    };

    let ana = Client {
        id: Uuid::new_v4(),
        full_name: "Ana Carolina Ferreira".into(),
        social_name: Some("Carol Ferreira".into()),
        birth_date: date(1988, 11, 30),
        phones: vec!["(31) 77777-5555".into()],
        address: Address {
            street: "Rua da Liberdade".into(),
            number: "789".into(),
            district: "Savassi".into(),
            city: "Belo Horizonte".into(),
            postal_code: "30112-000".into(),
        },
        documents: vec![
            document(DocumentType::Rg, "55.666.777-8", date(2020, 9, 25)),
            document(DocumentType::Cpf, "555.666.777-88", date(2018, 4, 12)),
            document(DocumentType::Passaporte, "BR789012", date(2023, 2, 18)),
        ],
        kind: ClientKind::Titular,
        holder_id: None,
    };

    let carlos = Client {
        id: Uuid::new_v4(),
        full_name: "Carlos Eduardo Lima".into(),
        social_name: None,
        birth_date: date(1975, 5, 18),
        phones: vec!["(85) 66666-4444".into()],
        address: Address {
            street: "Avenida Beira Mar".into(),
            number: "321".into(),
            district: "Meireles".into(),
            city: "Fortaleza".into(),
            postal_code: "60165-121".into(),
        },
        documents: vec![
            document(DocumentType::Rg, "33.444.555-6", date(2018, 12, 5)),
            document(DocumentType::Cpf, "333.444.555-66", date(2016, 8, 22)),
        ],
        kind: ClientKind::Titular,
        holder_id: None,
    };

    // --- ACOMODAÇÕES ---

    let packages = [
        ("Suíte Master Oceânica", 2, 0, 1, true, 1),
        ("Apartamento Família Premium", 1, 2, 1, true, 2),
        ("Quarto Standard", 1, 2, 0, false, 0),
        ("Suíte Executiva", 1, 0, 1, true, 1),
        ("Apartamento Luxo Vista Mar", 2, 1, 2, true, 3),
        ("Quarto Econômico", 0, 1, 0, false, 0),
    ];

    let accommodations: Vec<Accommodation> = packages
        .iter()
        .map(
            |&(name, garage, single, double, climate, suites)| Accommodation {
                id: Uuid::new_v4(),
                package_name: name.to_string(),
                garage_spots: garage,
                single_beds: single,
                double_beds: double,
                climate_control: climate,
                suite_count: suites,
            },
        )
        .collect();

    // --- HOSPEDAGENS ---

    let bookings = [
        (joao.id, accommodations[0].id, date(2024, 1, 15), date(2024, 1, 20)),
        (maria.id, accommodations[1].id, date(2024, 2, 10), date(2024, 2, 17)),
        (ana.id, accommodations[3].id, date(2024, 3, 5), date(2024, 3, 12)),
        (carlos.id, accommodations[2].id, date(2024, 1, 25), date(2024, 1, 30)),
        (joao.id, accommodations[4].id, date(2024, 12, 20), date(2024, 12, 27)),
        (maria.id, accommodations[0].id, date(2024, 12, 15), date(2024, 12, 22)),
    ];

    for client in [joao, maria, pedro, ana, carlos] {
        state.clients.insert(client);
    }
    for accommodation in accommodations {
        state.accommodations.insert(accommodation);
    }
    for (client_id, accommodation_id, start_date, end_date) in bookings {
        state.stays.insert(Stay {
            id: Uuid::new_v4(),
            client_id,
            accommodation_id,
            start_date,
            end_date,
        });
    }

    state
}
