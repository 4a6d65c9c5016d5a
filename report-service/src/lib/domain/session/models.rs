use std::fmt;
use std::str::FromStr;

use auth::TokenPair;
use auth::TokenSubject;
use chrono::DateTime;
use chrono::Utc;

use crate::session::errors::EmailError;

/// Sales person identity.
///
/// Owned by the persistence layer; the session core only reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesPerson {
    pub id: SalesPersonId,
    pub name: String,
    pub email: EmailAddress,
    pub department: String,
    pub is_manager: bool,
    pub password_hash: String,
}

impl SalesPerson {
    /// Identity facts to embed in session tokens.
    pub fn token_subject(&self) -> TokenSubject {
        TokenSubject::new(self.id.0, self.email.as_str(), self.is_manager)
    }
}

/// Sales person unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SalesPersonId(pub i64);

impl fmt::Display for SalesPersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser. Comparison is
/// case-sensitive: `Yamada@example.com` and `yamada@example.com` are different keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to open a session with validated fields
#[derive(Debug)]
pub struct LoginCommand {
    pub email: EmailAddress,
    pub password: String,
}

impl LoginCommand {
    pub fn new(email: EmailAddress, password: String) -> Self {
        Self { email, password }
    }
}

/// Outcome of a successful login or refresh.
#[derive(Debug, Clone)]
pub struct SessionGrant {
    pub sales_person: SalesPerson,
    pub tokens: TokenPair,
    /// Expiry of the access token
    pub expires_at: DateTime<Utc>,
}

impl SessionGrant {
    pub fn new(sales_person: SalesPerson, tokens: TokenPair) -> Self {
        let expires_at = tokens.access_expires_at;
        Self {
            sales_person,
            tokens,
            expires_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_address_valid() {
        let email = EmailAddress::new("yamada@example.com".to_string()).unwrap();
        assert_eq!(email.as_str(), "yamada@example.com");
    }

    #[test]
    fn test_email_address_invalid() {
        assert!(EmailAddress::new("not-an-email".to_string()).is_err());
        assert!(EmailAddress::new(String::new()).is_err());
    }

    #[test]
    fn test_email_address_is_case_sensitive() {
        let lower = EmailAddress::new("yamada@example.com".to_string()).unwrap();
        let upper = EmailAddress::new("Yamada@example.com".to_string()).unwrap();
        assert_ne!(lower, upper);
    }

    #[test]
    fn test_token_subject() {
        let sales_person = SalesPerson {
            id: SalesPersonId(2),
            name: "田中花子".to_string(),
            email: EmailAddress::new("tanaka@example.com".to_string()).unwrap(),
            department: "営業1課".to_string(),
            is_manager: true,
            password_hash: "$argon2id$test_hash".to_string(),
        };

        assert_eq!(
            sales_person.token_subject(),
            TokenSubject::new(2, "tanaka@example.com", true)
        );
    }
}
