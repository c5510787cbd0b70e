use std::fmt;

use crate::decode::{CategoryRecord, ProductRecord};

pub type RequestId = u64;

/// Completion events emitted by the engine thread.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    ProductsFetched {
        request_id: RequestId,
        result: Result<Vec<ProductRecord>, FetchError>,
    },
    CategoriesFetched {
        request_id: RequestId,
        result: Result<Vec<CategoryRecord>, FetchError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Decode,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid catalog url"),
            FailureKind::HttpStatus(code) => {
                write!(f, "request failed with HTTP status {code}")
            }
            FailureKind::Timeout => write!(f, "the request timed out"),
            FailureKind::TooLarge { max_bytes, .. } => {
                write!(f, "response exceeded the {max_bytes}-byte limit")
            }
            FailureKind::Decode => write!(f, "unexpected response from the catalog service"),
            FailureKind::Network => write!(f, "network error while contacting the catalog"),
        }
    }
}
