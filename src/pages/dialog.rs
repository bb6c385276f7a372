// src/pages/dialog.rs

/// Controlador do diálogo de formulário. Só existem dois estados: fechado,
/// ou aberto, para cadastro (sem registro) ou edição (com o registro que
/// pré-preencheu o formulário).
#[derive(Debug, Clone, PartialEq)]
pub enum Dialog<T> {
    Closed,
    Open {
        editing: Option<T>,
    },
}

// Sem exigir `T: Default`: o estado inicial é sempre Closed
impl<T> Default for Dialog<T> {
    fn default() -> Self {
        Self::Closed
    }
}

impl<T> Dialog<T> {
    pub fn open_new() -> Self {
        Self::Open { editing: None }
    }

    pub fn open_edit(record: T) -> Self {
        Self::Open {
            editing: Some(record),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    // O registro em edição, se o diálogo estiver em modo de edição
    pub fn editing(&self) -> Option<&T> {
        match self {
            Self::Open { editing } => editing.as_ref(),
            Self::Closed => None,
        }
    }

    pub fn close(&mut self) {
        *self = Self::Closed;
    }
}
