use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Falha de alocacao: {what}")]
    Allocation {
        what: &'static str,
        #[source]
        source: TryReserveError,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;

/// Reserve exactly `additional` slots, turning allocator failure into a
/// reportable error instead of an abort.
pub fn reserve_exact<T>(buf: &mut Vec<T>, additional: usize, what: &'static str) -> Result<()> {
    buf.try_reserve_exact(additional)
        .map_err(|source| GameError::Allocation { what, source })
}
