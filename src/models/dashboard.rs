// src/models/dashboard.rs

use serde::Serialize;

// Resumo do painel (os cards do topo)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_clients: usize,        // Clientes cadastrados
    pub titular_count: usize,        // Quantos são titulares
    pub dependente_count: usize,     // Quantos são dependentes
    pub total_accommodations: usize, // Pacotes de acomodação
    pub total_stays: usize,          // Hospedagens registradas
    pub active_stays: usize,         // Com data de fim ainda não passada
    pub finished_stays: usize,       // Já encerradas
}
