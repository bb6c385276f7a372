//! Testes das visões derivadas: idade, duração, situação e resolução de
//! nomes. Tudo função pura, recalculada por chamada.

mod common;

use chrono::NaiveTime;
use common::*;
use uuid::Uuid;

// =============================================================================
//  IDADE
// =============================================================================

#[test]
fn test_age_counts_completed_years() {
    assert_eq!(views::age(date(2010, 12, 3), date(2024, 6, 1)), 13);
}

#[test]
fn test_age_day_before_birthday_not_incremented() {
    assert_eq!(views::age(date(1985, 3, 15), date(2024, 3, 14)), 38);
}

#[test]
fn test_age_on_birthday_increments() {
    assert_eq!(views::age(date(1985, 3, 15), date(2024, 3, 15)), 39);
}

// =============================================================================
//  DURAÇÃO
// =============================================================================

#[test]
fn test_duration_identical_dates_is_zero() {
    let d = date(2024, 5, 10);
    assert_eq!(views::duration_days(d, d), 0);
}

#[test]
fn test_duration_is_symmetric() {
    let start = date(2024, 1, 15);
    let end = date(2024, 1, 20);
    assert_eq!(views::duration_days(start, end), 5);
    assert_eq!(views::duration_days(end, start), 5);
}

#[test]
fn test_duration_rounds_any_fraction_of_day_up() {
    // Uma hora de diferença no mesmo dia já conta como um dia
    let start = date(2024, 1, 15).and_time(NaiveTime::from_hms_opt(10, 0, 0).expect("hora válida"));
    let end = date(2024, 1, 15).and_time(NaiveTime::from_hms_opt(11, 0, 0).expect("hora válida"));
    assert_eq!(views::duration_days_between(start, end), 1);
    assert_eq!(views::duration_days_between(end, start), 1);
}

#[test]
fn test_duration_across_year_boundary() {
    assert_eq!(views::duration_days(date(2024, 12, 27), date(2025, 1, 2)), 6);
}

// =============================================================================
//  SITUAÇÃO
// =============================================================================

#[test]
fn test_status_ending_today_is_active() {
    let today = date(2024, 6, 1);
    assert_eq!(views::stay_status(today, today), StayStatus::Active);
}

#[test]
fn test_status_ended_yesterday_is_finished() {
    let today = date(2024, 6, 1);
    assert_eq!(
        views::stay_status(date(2024, 5, 31), today),
        StayStatus::Finished
    );
}

#[test]
fn test_status_future_end_is_active() {
    let today = date(2024, 6, 1);
    assert_eq!(
        views::stay_status(date(2024, 12, 27), today),
        StayStatus::Active
    );
}

#[test]
fn test_status_labels_in_portuguese() {
    assert_eq!(StayStatus::Active.to_string(), "Ativa");
    assert_eq!(StayStatus::Finished.to_string(), "Finalizada");
}

// =============================================================================
//  RESOLUÇÃO DE NOMES E FORMATAÇÃO
// =============================================================================

#[test]
fn test_resolve_names_present_and_missing() -> anyhow::Result<()> {
    let mut clients = ClientStore::new();
    let mut accommodations = AccommodationStore::new();

    let client = ClientService::new().create(&mut clients, &titular_payload("Ana Carolina"))?;
    let package = AccommodationService::new()
        .create(&mut accommodations, &accommodation_payload("Quarto Standard"))?;

    assert_eq!(views::resolve_client_name(client.id, &clients), "Ana Carolina");
    assert_eq!(
        views::resolve_accommodation_name(package.id, &accommodations),
        "Quarto Standard"
    );

    // ID ausente cai no rótulo fixo, sem erro
    assert_eq!(
        views::resolve_client_name(Uuid::new_v4(), &clients),
        views::CLIENT_NOT_FOUND
    );
    assert_eq!(
        views::resolve_accommodation_name(Uuid::new_v4(), &accommodations),
        views::ACCOMMODATION_NOT_FOUND
    );

    Ok(())
}

#[test]
fn test_format_date_br() {
    assert_eq!(views::format_date_br(date(2024, 1, 15)), "15/01/2024");
}
