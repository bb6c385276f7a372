use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia. Quase tudo no
// domínio é "pular em silêncio" (referência pendurada vira rótulo fixo,
// titular não resolvido mantém o que foi digitado); só chega aqui o que de
// fato bloqueia uma gravação.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Cliente não encontrado")]
    ClientNotFound,

    #[error("Acomodação não encontrada")]
    AccommodationNotFound,

    #[error("Hospedagem não encontrada")]
    StayNotFound,
}

// Erro de campo obrigatório no mesmo formato que o `validator` produz
pub fn required_field(field: &'static str) -> AppError {
    let mut errors = validator::ValidationErrors::new();
    errors.add(field, validator::ValidationError::new("required"));
    AppError::ValidationError(errors)
}
