use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

#[derive(Clone, Debug, Insertable)]
#[diesel(table_name=super::schema::rooms)]
pub struct NewRoom {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Insertable)]
#[diesel(table_name=super::schema::questions)]
pub struct NewQuestion {
    pub id: Uuid,
    pub room_id: Uuid,
    pub question: String,
    pub created_at: DateTime<Utc>,
}

/// One result row of the room listing aggregation.
///
/// There is no matching table; the row is loaded from a grouped join query, so the field order
/// must match the select clause in [super::postgres].
#[derive(Clone, Debug, Queryable)]
pub struct RoomQuestionCount {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub question_count: i64,
}

impl From<RoomQuestionCount> for askroom_api_types::RoomQuestionCount {
    fn from(value: RoomQuestionCount) -> Self {
        Self {
            id: value.id,
            name: value.name,
            created_at: value.created_at,
            question_count: value.question_count,
        }
    }
}
