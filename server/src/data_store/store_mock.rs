use crate::data_store::models::{NewQuestion, NewRoom, RoomQuestionCount};
use crate::data_store::{AskRoomStore, AskRoomStoreFacade, QuestionId, RoomId, StoreError};
use std::sync::Mutex;

/**
 * A mock [AskRoomStore] implementation for testing.
 *
 * The simulated database consists of the [StoreMockData] structure with vectors of entities. These
 * can be directly modified by the tests.
 *
 * The interface functions of this mock don't do any error checking. Instead, the
 * [StoreMockData::next_error] attribute can be set to simulate a database error.
 */
#[derive(Default)]
pub struct StoreMock {
    pub data: Mutex<StoreMockData>,
}

impl AskRoomStore for StoreMock {
    fn get_facade<'a>(&'a self) -> Result<Box<dyn AskRoomStoreFacade + 'a>, StoreError> {
        Ok(Box::new(StoreMockFacade { store: self }))
    }
}

#[derive(Default)]
pub struct StoreMockData {
    pub rooms: Vec<NewRoom>,
    pub questions: Vec<NewQuestion>,
    /// If not none, the next call to a store facade method will return this error.
    pub next_error: Option<StoreError>,
}

struct StoreMockFacade<'a> {
    store: &'a StoreMock,
}

impl<'a> AskRoomStoreFacade for StoreMockFacade<'a> {
    fn list_rooms_with_question_counts(
        &mut self,
    ) -> Result<Vec<RoomQuestionCount>, StoreError> {
        let mut data = self.store.data.lock().expect("Error while locking mutex.");
        if let Some(e) = data.next_error.take() {
            return Err(e);
        }
        let mut result: Vec<RoomQuestionCount> = data
            .rooms
            .iter()
            .map(|room| RoomQuestionCount {
                id: room.id,
                name: room.name.clone(),
                created_at: room.created_at,
                question_count: data
                    .questions
                    .iter()
                    .filter(|question| question.room_id == room.id)
                    .count() as i64,
            })
            .collect();
        result.sort_by_key(|room| room.created_at);
        Ok(result)
    }

    fn reset_all_data(&mut self) -> Result<(), StoreError> {
        let mut data = self.store.data.lock().expect("Error while locking mutex.");
        if let Some(e) = data.next_error.take() {
            return Err(e);
        }
        data.questions.clear();
        data.rooms.clear();
        Ok(())
    }

    fn create_room(&mut self, room: NewRoom) -> Result<RoomId, StoreError> {
        let mut data = self.store.data.lock().expect("Error while locking mutex.");
        if let Some(e) = data.next_error.take() {
            return Err(e);
        }
        let room_id = room.id;
        data.rooms.push(room);
        Ok(room_id)
    }

    fn create_question(&mut self, question: NewQuestion) -> Result<QuestionId, StoreError> {
        let mut data = self.store.data.lock().expect("Error while locking mutex.");
        if let Some(e) = data.next_error.take() {
            return Err(e);
        }
        let question_id = question.id;
        data.questions.push(question);
        Ok(question_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use uuid::uuid;

    fn room(id: uuid::Uuid, name: &str, created_at: chrono::DateTime<chrono::Utc>) -> NewRoom {
        NewRoom {
            id,
            name: name.to_string(),
            description: "".to_string(),
            created_at,
        }
    }

    #[test]
    fn test_listing_counts_and_ordering() {
        let store = StoreMock::default();
        let newer_room_id = uuid!("0190c3a0-0000-7000-8000-000000000001");
        let older_room_id = uuid!("0190c3a0-0000-7000-8000-000000000002");
        {
            let mut data = store.data.lock().unwrap();
            // inserted newest first, to make sure the listing sorts
            data.rooms.push(room(
                newer_room_id,
                "Newer Room",
                chrono::Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
            ));
            data.rooms.push(room(
                older_room_id,
                "Older Room",
                chrono::Utc.with_ymd_and_hms(2025, 2, 1, 12, 0, 0).unwrap(),
            ));
            data.questions.push(NewQuestion {
                id: uuid!("0190c3a0-0000-7000-8000-00000000000a"),
                room_id: newer_room_id,
                question: "How does the mock count questions?".to_string(),
                created_at: chrono::Utc.with_ymd_and_hms(2025, 6, 2, 9, 0, 0).unwrap(),
            });
        }

        let mut facade = store.get_facade().unwrap();
        let listing = facade.list_rooms_with_question_counts().unwrap();
        assert_eq!(listing.len(), 2);
        assert_eq!(listing[0].id, older_room_id);
        assert_eq!(listing[0].question_count, 0);
        assert_eq!(listing[1].id, newer_room_id);
        assert_eq!(listing[1].question_count, 1);
    }

    #[test]
    fn test_next_error_is_returned_once() {
        let store = StoreMock::default();
        store.data.lock().unwrap().next_error =
            Some(StoreError::ConnectionError("connection refused".to_string()));

        let mut facade = store.get_facade().unwrap();
        assert!(facade.list_rooms_with_question_counts().is_err());
        assert!(facade.list_rooms_with_question_counts().is_ok());
    }
}
