//! Customer row model.

use intake_core::types::DbId;
use sqlx::FromRow;

/// A row from the `customers` table.
///
/// Only `name` is NOT NULL in the schema; the other text columns may be NULL
/// for rows written by other tools.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Customer {
    pub id: DbId,
    pub name: String,
    pub birthday: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub contact_method: Option<String>,
}
