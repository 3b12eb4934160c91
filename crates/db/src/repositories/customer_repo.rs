//! Repository for the `customers` table.

use intake_core::customer::CustomerRecord;
use intake_core::types::DbId;
use sqlx::sqlite::SqliteConnection;
use sqlx::Connection;

use crate::models::customer::Customer;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, birthday, email, phone, address, contact_method";

pub struct CustomerRepo;

impl CustomerRepo {
    /// Insert a customer inside its own transaction, returning the assigned id.
    ///
    /// Values are always bound as parameters. On error the transaction is
    /// dropped and rolled back, so no partial row is left behind.
    pub async fn create(
        conn: &mut SqliteConnection,
        input: &CustomerRecord,
    ) -> Result<DbId, sqlx::Error> {
        let mut tx = conn.begin().await?;

        let result = sqlx::query(
            "INSERT INTO customers (name, birthday, email, phone, address, contact_method)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&input.name)
        .bind(&input.birthday)
        .bind(&input.email)
        .bind(&input.phone)
        .bind(&input.address)
        .bind(&input.contact_method)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn find_by_id(
        conn: &mut SqliteConnection,
        id: DbId,
    ) -> Result<Option<Customer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM customers WHERE id = ?");
        sqlx::query_as::<_, Customer>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// Number of stored customers.
    pub async fn count(conn: &mut SqliteConnection) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM customers")
            .fetch_one(conn)
            .await
    }
}
