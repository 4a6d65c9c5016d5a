pub mod claims;
pub mod errors;
pub mod handler;
pub mod issuer;
pub mod verifier;

pub use claims::SessionClaims;
pub use claims::TokenKind;
pub use claims::TokenSubject;
pub use errors::JwtError;
pub use handler::JwtHandler;
pub use issuer::TokenIssuer;
pub use issuer::TokenPair;
pub use issuer::TokenSecrets;
pub use verifier::TokenVerifier;
