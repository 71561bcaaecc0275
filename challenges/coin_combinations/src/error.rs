use std::path::PathBuf;

use thiserror::Error;

/// Problems with the token stream handed to a solver.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("malformed token {token:?}: {reason}")]
    Malformed { token: String, reason: String },

    #[error("test case {case} declares no denominations")]
    NoDenominations { case: usize },

    #[error("test case {case}: {n} coins with target {x} exceed the {limit} cell table limit")]
    TargetTooLarge {
        case: usize,
        n: usize,
        x: usize,
        limit: usize,
    },
}

/// Failure to run one `N.in` / `N.out` case file pair.
#[derive(Debug, Error)]
pub enum CaseError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("solver rejected input: {0}")]
    Solve(#[from] InputError),

    #[error("output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
