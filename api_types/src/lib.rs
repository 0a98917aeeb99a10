
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One row of the room listing: a room together with the number of questions
/// that have been asked in it. The room description is not part of the
/// listing.
#[derive(Serialize, Deserialize)]
pub struct RoomQuestionCount {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "questionCount")]
    pub question_count: i64,
}
