//! Testes do resumo do painel e da casca da aplicação.

mod common;

use common::*;
use pousada::pages::ActiveTab;

#[test]
fn test_summary_over_seeded_state() {
    let app = App::new(AppState::seeded());

    // Com "hoje" fixo em 2024-06-01: quatro hospedagens já encerradas e
    // duas marcadas para dezembro ainda ativas
    let summary = app.dashboard_summary(date(2024, 6, 1));

    assert_eq!(summary.total_clients, 5);
    assert_eq!(summary.titular_count, 4);
    assert_eq!(summary.dependente_count, 1);
    assert_eq!(summary.total_accommodations, 6);
    assert_eq!(summary.total_stays, 6);
    assert_eq!(summary.active_stays, 2);
    assert_eq!(summary.finished_stays, 4);
}

#[test]
fn test_summary_recomputes_after_mutation() -> anyhow::Result<()> {
    let mut app = App::new(AppState::seeded());

    // Remove uma hospedagem encerrada: o resumo acompanha sem cache
    let finished_id = app
        .state
        .stays
        .list()
        .iter()
        .find(|stay| views::stay_status(stay.end_date, date(2024, 6, 1)) == StayStatus::Finished)
        .map(|stay| stay.id)
        .expect("a carga de demonstração tem hospedagens encerradas");
    app.stays_page.remove(&mut app.state.stays, finished_id);

    let summary = app.dashboard_summary(date(2024, 6, 1));
    assert_eq!(summary.total_stays, 5);
    assert_eq!(summary.finished_stays, 3);
    assert_eq!(summary.active_stays, 2);

    Ok(())
}

#[test]
fn test_empty_state_summary_is_all_zeros() {
    let app = App::new(AppState::new());
    let summary = app.dashboard_summary(date(2024, 6, 1));

    assert_eq!(summary.total_clients, 0);
    assert_eq!(summary.total_accommodations, 0);
    assert_eq!(summary.total_stays, 0);
    assert_eq!(summary.active_stays, 0);
}

#[test]
fn test_app_starts_on_dashboard_tab() {
    let mut app = App::new(AppState::new());
    assert_eq!(app.active_tab, ActiveTab::Dashboard);

    app.select_tab(ActiveTab::Stays);
    assert_eq!(app.active_tab, ActiveTab::Stays);
}

#[test]
fn test_seeded_dependente_shares_titular_contact() {
    let app = App::new(AppState::seeded());

    // A carga de demonstração respeita a regra de cópia do titular
    let dependente = app
        .state
        .clients
        .list()
        .iter()
        .find(|client| client.kind == ClientKind::Dependente)
        .expect("a carga tem um dependente");
    let titular = dependente
        .holder_id
        .and_then(|holder_id| app.state.clients.find(holder_id))
        .expect("o titular do dependente existe");

    assert_eq!(dependente.phones, titular.phones);
    assert_eq!(dependente.address, titular.address);
}
