use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Identity of the caller, as asserted by the identity provider's token
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthenticatedUser {
    /// Opaque user identifier (`sub` claim). Stores are owned by this value.
    pub user_id: String,
    /// Provider session id (`sid` claim), when the token carries one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}
