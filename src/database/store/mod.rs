//! Typed query functions over the entity tables. Lookups that feed the
//! mutation path map a missing row to [`DatabaseError::NotFound`] so handlers
//! can resolve existence before any authorization check.

pub mod comments;
pub mod favorites;
pub mod games;
pub mod movies;
pub mod users;
pub mod wishlists;

use crate::database::manager::DatabaseError;

pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}

pub(crate) fn not_found(entity: &str, id: uuid::Uuid) -> DatabaseError {
    DatabaseError::NotFound(format!("{} {} not found", entity, id))
}
