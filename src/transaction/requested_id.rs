//! Transaction IDs as sent by clients.

use serde::{Deserialize, Serialize};

use crate::transaction::TransactionId;

/// A transaction ID taken from a request body.
///
/// Clients may send the ID as a JSON number or as a string. Anything that does
/// not look like an ID is kept so that it can be treated as "no such
/// transaction" rather than failing the whole request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequestedId {
    /// An ID sent as a JSON number, e.g. `42`.
    Number(i64),
    /// An ID sent as a JSON string, e.g. `"42"`.
    Text(String),
    /// Any other JSON value, e.g. `null` or `1.5`.
    Malformed(serde_json::Value),
}

impl RequestedId {
    /// The transaction ID this refers to, or `None` if it is malformed.
    ///
    /// A malformed ID cannot match any transaction.
    pub fn parse(&self) -> Option<TransactionId> {
        let id = match self {
            RequestedId::Number(id) => *id,
            RequestedId::Text(text) => text.trim().parse().ok()?,
            RequestedId::Malformed(_) => return None,
        };

        (id > 0).then_some(id)
    }
}

impl From<TransactionId> for RequestedId {
    fn from(id: TransactionId) -> Self {
        RequestedId::Number(id)
    }
}
