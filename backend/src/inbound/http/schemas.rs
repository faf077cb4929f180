//! Wire bodies shared by several endpoints.
//!
//! Domain types stay framework-agnostic; these structs carry the serde and
//! OpenAPI derives for the JSON the HTTP surface emits.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Single human-readable message.
///
/// Used by `/ping` and by client-facing errors (400, 404).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    /// Message text.
    #[schema(example = "Nenhum usuário foi localizado com o id fornecido")]
    pub message: String,
}

impl MessageResponse {
    /// Wrap a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Raw failure reported by the store, returned with status 500.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Underlying error message.
    #[schema(example = "duplicate key value violates unique constraint \"users_email_key\"")]
    pub error: String,
}
