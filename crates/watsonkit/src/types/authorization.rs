//! Authorization v1 types.

/// Parameters for `get_token`.
#[derive(Debug, Clone, Default)]
pub struct GetTokenParams {
    /// URL of the service the token is for.
    pub url: String,
}
