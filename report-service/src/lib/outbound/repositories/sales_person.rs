use async_trait::async_trait;
use sqlx::FromRow;
use sqlx::PgPool;

use crate::domain::session::models::EmailAddress;
use crate::domain::session::models::SalesPerson;
use crate::domain::session::models::SalesPersonId;
use crate::domain::session::ports::SalesPersonRepository;
use crate::session::errors::SessionError;

pub struct PostgresSalesPersonRepository {
    pool: PgPool,
}

impl PostgresSalesPersonRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct SalesPersonRecord {
    sales_person_id: i64,
    name: String,
    email: String,
    department: String,
    is_manager: bool,
    password_hash: String,
}

impl TryFrom<SalesPersonRecord> for SalesPerson {
    type Error = SessionError;

    fn try_from(record: SalesPersonRecord) -> Result<Self, Self::Error> {
        Ok(SalesPerson {
            id: SalesPersonId(record.sales_person_id),
            name: record.name,
            email: EmailAddress::new(record.email).map_err(|e| {
                SessionError::DatabaseError(format!(
                    "Stored email of sales person {} is invalid: {}",
                    record.sales_person_id, e
                ))
            })?,
            department: record.department,
            is_manager: record.is_manager,
            password_hash: record.password_hash,
        })
    }
}

#[async_trait]
impl SalesPersonRepository for PostgresSalesPersonRepository {
    async fn find_by_id(&self, id: &SalesPersonId) -> Result<Option<SalesPerson>, SessionError> {
        let record = sqlx::query_as::<_, SalesPersonRecord>(
            r#"
            SELECT sales_person_id, name, email, department, is_manager, password_hash
            FROM sales_persons
            WHERE sales_person_id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| SessionError::DatabaseError(e.to_string()))?;

        record.map(SalesPerson::try_from).transpose()
    }

    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<SalesPerson>, SessionError> {
        let record = sqlx::query_as::<_, SalesPersonRecord>(
            r#"
            SELECT sales_person_id, name, email, department, is_manager, password_hash
            FROM sales_persons
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| SessionError::DatabaseError(e.to_string()))?;

        record.map(SalesPerson::try_from).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(email: &str) -> SalesPersonRecord {
        SalesPersonRecord {
            sales_person_id: 7,
            name: "鈴木一郎".to_string(),
            email: email.to_string(),
            department: "営業2課".to_string(),
            is_manager: false,
            password_hash: "$argon2id$test_hash".to_string(),
        }
    }

    #[test]
    fn test_record_into_sales_person() {
        let sales_person = SalesPerson::try_from(record("suzuki@example.com")).unwrap();

        assert_eq!(sales_person.id, SalesPersonId(7));
        assert_eq!(sales_person.email.as_str(), "suzuki@example.com");
        assert_eq!(sales_person.department, "営業2課");
    }

    #[test]
    fn test_corrupt_stored_email_is_a_database_error() {
        let result = SalesPerson::try_from(record("bad stored email"));

        assert!(matches!(result, Err(SessionError::DatabaseError(_))));
    }
}
