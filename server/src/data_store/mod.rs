//! The backend part of the backend: the database interface
//!
//! The primary entry point to this module is the function [get_store_from_env], which returns an
//! object implementing the [AskRoomStore] trait. This object can be shared between threads in a
//! global application state and be used to create [AskRoomStoreFacade] instances for interaction
//! with the database, using the data models from the [models] module.
//!
//! The primary implementation of [AskRoomStore] ([postgres::PgDataStore]) wraps a PostgreSQL
//! connection pool and its corresponding [AskRoomStoreFacade] objects
//! ([postgres::PgDataStoreFacade]) hold a reference to one pooled connection each, using the
//! Diesel query DSL for implementing the database interaction.
//!
//! There is also a mock implementation for unittests.

use crate::cli_error::CliError;
use crate::cli_error::CliError::UnexpectedStoreError;
use crate::setup;

pub mod models;
mod postgres;
mod schema;
#[cfg(test)]
pub mod store_mock;

/// Get an [AskRoomStore] instance, according to the "DATABASE_URL" environment variable.
///
/// The DATABASE_URL must be a PostgreSQL connection url, following the schema
/// "postgres://{user}:{password}@{host}/{database}".
pub fn get_store_from_env() -> Result<impl AskRoomStore, CliError> {
    postgres::PgDataStore::new(&setup::get_database_url_from_env()?)
        .map_err(|err| UnexpectedStoreError(err.to_string()))
}

pub type RoomId = uuid::Uuid;
pub type QuestionId = uuid::Uuid;

pub trait AskRoomStoreFacade {
    /// Get all rooms together with the number of questions asked in each of them.
    ///
    /// Rooms without any question are included with a question count of zero. The rows are sorted
    /// by the rooms' creation timestamp, oldest room first.
    fn list_rooms_with_question_counts(
        &mut self,
    ) -> Result<Vec<models::RoomQuestionCount>, StoreError>;

    /// Delete all rows from all tables, dependent tables first.
    fn reset_all_data(&mut self) -> Result<(), StoreError>;

    fn create_room(&mut self, room: models::NewRoom) -> Result<RoomId, StoreError>;
    fn create_question(&mut self, question: models::NewQuestion)
        -> Result<QuestionId, StoreError>;
}

pub trait AskRoomStore: Send + Sync {
    fn get_facade<'a>(&'a self) -> Result<Box<dyn AskRoomStoreFacade + 'a>, StoreError>;
}

#[derive(Debug)]
pub enum StoreError {
    /// Connection the database failed. See string description for details.
    ConnectionError(String),
    /// The query could not be executed because of some error not covered by the other members (see
    /// string description)
    QueryError(diesel::result::Error),
    /// Database transaction could not be commited due to a conflicting concurrent transaction
    TransactionConflict,
    /// The requested entity does not exist
    NotExisting,
    /// The entity could not be created because it already exists.
    ConflictEntityExists,
    /// The provided data is invalid, i.e. it does not match the expected ranges or violates a
    /// SQL constraint. See string description for details.
    InvalidInputData(String),
    /// Some data queried from the database could not be deserialized. See string description for
    /// details.
    InvalidDataInDatabase(String),
}

impl From<diesel::result::Error> for StoreError {
    fn from(error: diesel::result::Error) -> Self {
        match error {
            diesel::result::Error::NotFound => Self::NotExisting,
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UniqueViolation,
                _,
            ) => Self::ConflictEntityExists,
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::SerializationFailure,
                _,
            ) => Self::TransactionConflict,
            diesel::result::Error::DatabaseError(
                e @ diesel::result::DatabaseErrorKind::ForeignKeyViolation
                | e @ diesel::result::DatabaseErrorKind::CheckViolation,
                _,
            ) => Self::InvalidInputData(format!("{:?}", e)),
            diesel::result::Error::SerializationError(e) => Self::InvalidInputData(e.to_string()),
            diesel::result::Error::DeserializationError(e) => {
                Self::InvalidDataInDatabase(e.to_string())
            }
            _ => Self::QueryError(error),
        }
    }
}

impl From<r2d2::Error> for StoreError {
    fn from(error: r2d2::Error) -> Self {
        Self::ConnectionError(error.to_string())
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ConnectionError(e) => write!(f, "Error connecting to database: {}", e),
            Self::QueryError(e) => write!(f, "Error while executing database query: {}", e),
            Self::TransactionConflict => f.write_str("Database transaction could not be commited due to a conflicting concurrent transaction"),
            Self::NotExisting => f.write_str("Database record does not exist."),
            Self::ConflictEntityExists => f.write_str("Database record exists already."),
            Self::InvalidInputData(e) => {
                write!(f, "Data to be stored in database is not valid: {}", e)
            }
            StoreError::InvalidDataInDatabase(e) => {
                write!(f, "Data queried from database could not be deserialized: {}", e)
            },
        }
    }
}

impl std::error::Error for StoreError {}
