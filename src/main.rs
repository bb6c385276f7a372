// src/main.rs

use chrono::{Days, Local};

use pousada::{
    config::AppState,
    pages::{ActiveTab, App},
    services::views,
};

// Driver de demonstração: monta o estado com a carga de exemplo e percorre
// os fluxos das páginas. Sem argumentos, sem rede, sem disco: tudo em
// memória, como a aplicação real.
fn main() -> anyhow::Result<()> {
    // Inicializa o logger
    tracing_subscriber::fmt().with_target(false).compact().init();

    let today = Local::now().date_naive();
    let mut app = App::new(AppState::seeded());

    // A listagem de hospedagens como a página monta: nomes resolvidos e
    // duração/situação derivadas a cada leitura
    app.select_tab(ActiveTab::Stays);
    for stay in app.state.stays.list() {
        tracing::info!(
            "🏨 {} — {} ({} a {}, {} dias, {})",
            views::resolve_client_name(stay.client_id, &app.state.clients),
            views::resolve_accommodation_name(stay.accommodation_id, &app.state.accommodations),
            views::format_date_br(stay.start_date),
            views::format_date_br(stay.end_date),
            views::duration_days(stay.start_date, stay.end_date),
            views::stay_status(stay.end_date, today),
        );
    }

    // Registra uma hospedagem nova pelo fluxo do diálogo
    let first_client = app.state.clients.list().first().map(|c| c.id);
    let first_package = app.state.accommodations.list().first().map(|a| a.id);
    if let (Some(client_id), Some(accommodation_id)) = (first_client, first_package) {
        app.select_tab(ActiveTab::Stays);
        app.stays_page.open_new();
        app.stays_page.form.client_id = Some(client_id);
        app.stays_page.form.accommodation_id = Some(accommodation_id);
        app.stays_page.form.start_date = Some(today);
        app.stays_page.form.end_date = today.checked_add_days(Days::new(3));

        let stay = app.stays_page.submit(&mut app.state.stays)?;
        tracing::info!(
            "✅ Nova hospedagem de {} dias para {}",
            views::duration_days(stay.start_date, stay.end_date),
            views::resolve_client_name(stay.client_id, &app.state.clients)
        );

        // Exclusão sem cascata: a hospedagem recém-criada fica com a
        // referência pendurada e a listagem cai no rótulo fixo
        app.select_tab(ActiveTab::Clients);
        app.clients_page.remove(&mut app.state.clients, client_id);
        tracing::info!(
            "Cliente removido; hospedagem agora exibe: {}",
            views::resolve_client_name(stay.client_id, &app.state.clients)
        );
    }

    // Resumo do painel
    app.select_tab(ActiveTab::Dashboard);
    let summary = app.dashboard_summary(today);
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
