/// Reasons a credential can be refused.
///
/// The `Display` text of the two credential variants is the message sent
/// to clients.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// No token was supplied.
    #[error("Unauthorized")]
    MissingCredential,

    /// Token is malformed, signed with another secret, or expired.
    #[error("Invalid token")]
    InvalidCredential,

    /// Token could not be signed.
    #[error("Failed to sign token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),
}
