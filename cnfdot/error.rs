use thiserror::Error;

use crate::namer::ClusterId;

#[derive(Debug, Error)]
pub enum CnfDotError {
    #[error("CNF expression not found in stdin")]
    MissingStdin,

    #[error("could not read CNF")]
    Io(#[from] std::io::Error),

    #[error("CNF is not valid JSON")]
    MalformedJson(#[source] serde_json::Error),

    /// `literal` is `None` when the clause itself is not a list.
    #[error("{}: {reason}", describe_location(.clause, .literal))]
    MalformedClause {
        clause: usize,
        literal: Option<usize>,
        reason: String,
    },

    #[error("CNF must be a list of clauses, found {found}")]
    NotAList { found: String },

    #[error("position {position} is out of range for clause #{cluster} with {len} literals")]
    OutOfRange {
        cluster: ClusterId,
        position: usize,
        len: usize,
    },
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn describe_location(clause: &usize, literal: &Option<usize>) -> String {
    match literal {
        Some(literal) => format!("clause #{clause}, literal #{literal}"),
        None => format!("clause #{clause}"),
    }
}

pub type Result<T> = std::result::Result<T, CnfDotError>;
