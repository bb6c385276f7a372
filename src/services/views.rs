// src/services/views.rs
//
// Visões derivadas: funções puras, sem efeito colateral, recalculadas a
// cada leitura (nenhum cache). É o único caminho pelo qual uma página lê
// dados das coleções das outras.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use uuid::Uuid;

use crate::{
    models::stays::StayStatus,
    store::{AccommodationStore, ClientStore},
};

// Rótulos fixos para referência pendurada; resolução nunca dá erro.
pub const CLIENT_NOT_FOUND: &str = "Cliente não encontrado";
pub const ACCOMMODATION_NOT_FOUND: &str = "Acomodação não encontrada";

const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Idade em anos completos: desconta um ano enquanto o aniversário deste
/// ano ainda não chegou.
pub fn age(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let mut years = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        years -= 1;
    }
    years
}

/// Duração da hospedagem em dias: teto da diferença absoluta entre as duas
/// datas. Intervalo invertido conta como o intervalo ordenado, nunca erro.
pub fn duration_days(start: NaiveDate, end: NaiveDate) -> i64 {
    duration_days_between(start.and_time(NaiveTime::MIN), end.and_time(NaiveTime::MIN))
}

// O teto é sobre milissegundos: qualquer fração de dia conta como um dia.
pub fn duration_days_between(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    let diff_ms = (end - start).num_milliseconds().abs();
    (diff_ms as u64).div_ceil(MS_PER_DAY as u64) as i64
}

/// Ativa enquanto a data de fim não passou; fim hoje ainda conta como ativa.
pub fn stay_status(end_date: NaiveDate, today: NaiveDate) -> StayStatus {
    if end_date >= today {
        StayStatus::Active
    } else {
        StayStatus::Finished
    }
}

pub fn resolve_client_name(id: Uuid, clients: &ClientStore) -> String {
    clients
        .find(id)
        .map(|client| client.full_name.clone())
        .unwrap_or_else(|| CLIENT_NOT_FOUND.to_string())
}

pub fn resolve_accommodation_name(id: Uuid, accommodations: &AccommodationStore) -> String {
    accommodations
        .find(id)
        .map(|accommodation| accommodation.package_name.clone())
        .unwrap_or_else(|| ACCOMMODATION_NOT_FOUND.to_string())
}

// Data no formato brasileiro (dd/mm/aaaa), usada nas listagens
pub fn format_date_br(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}
