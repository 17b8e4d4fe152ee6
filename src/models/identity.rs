/// Caller identity resolved from the bearer credential's subject claim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: String,
}
