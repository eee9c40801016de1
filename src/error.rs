use thiserror::Error;

/// Errors that can occur while building or encoding a molecule.
#[derive(Debug, Error)]
pub enum BobError {
    /// The atom list and the interaction matrix do not describe the same molecule.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// A bag carries a bond type that the schema of the same molecule does not know.
    ///
    /// The schema covers every label reachable from the alphabet, so this
    /// indicates a bug rather than bad input.
    #[error("bond type '{0}' is not part of the bond schema")]
    SchemaViolation(String),

    #[error("unknown element symbol '{0}'")]
    UnknownElement(String),

    #[error("invalid xyz data in line {line}: {detail}")]
    Xyz { line: usize, detail: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl BobError {
    pub(crate) fn shape_mismatch(atoms: usize, shape: &[usize]) -> Self {
        Self::MalformedInput(format!(
            "{atoms} atoms but interaction matrix has shape {shape:?}"
        ))
    }

    pub(crate) fn xyz(line: usize, detail: impl Into<String>) -> Self {
        Self::Xyz {
            line,
            detail: detail.into(),
        }
    }
}

pub type BobResult<T> = Result<T, BobError>;
