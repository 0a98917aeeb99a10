use super::{models, schema, AskRoomStore, AskRoomStoreFacade, QuestionId, RoomId, StoreError};
use diesel::pg::PgConnection;
use diesel::prelude::*;

#[derive(Clone)]
pub struct PgDataStore {
    pool: diesel::r2d2::Pool<diesel::r2d2::ConnectionManager<PgConnection>>,
}

impl PgDataStore {
    pub fn new(database_url: &str) -> Result<Self, StoreError> {
        let connection_manager = diesel::r2d2::ConnectionManager::<PgConnection>::new(database_url);
        Ok(Self {
            pool: diesel::r2d2::Pool::builder()
                .test_on_check_out(true)
                .min_idle(Some(2))
                .build(connection_manager)?,
        })
    }
}

impl AskRoomStore for PgDataStore {
    fn get_facade<'a>(&'a self) -> Result<Box<dyn AskRoomStoreFacade + 'a>, StoreError> {
        Ok(Box::new(PgDataStoreFacade::with_pooled_connection(
            self.pool.get()?,
        )))
    }
}

pub struct PgDataStoreFacade {
    connection: diesel::r2d2::PooledConnection<diesel::r2d2::ConnectionManager<PgConnection>>,
}

impl PgDataStoreFacade {
    pub fn with_pooled_connection(
        connection: diesel::r2d2::PooledConnection<diesel::r2d2::ConnectionManager<PgConnection>>,
    ) -> Self {
        Self { connection }
    }
}

impl AskRoomStoreFacade for PgDataStoreFacade {
    fn list_rooms_with_question_counts(
        &mut self,
    ) -> Result<Vec<models::RoomQuestionCount>, StoreError> {
        use diesel::dsl::count;
        use schema::{questions, rooms};

        rooms::table
            .left_join(questions::table)
            .group_by((rooms::id, rooms::name, rooms::created_at))
            .select((
                rooms::id,
                rooms::name,
                rooms::created_at,
                // counting the nullable join column keeps rooms without questions at zero
                count(questions::id.nullable()),
            ))
            .order_by(rooms::created_at.asc())
            .load::<models::RoomQuestionCount>(&mut self.connection)
            .map_err(|e| e.into())
    }

    fn reset_all_data(&mut self) -> Result<(), StoreError> {
        use schema::{questions, rooms};

        self.connection.transaction(|connection| {
            // questions carry the foreign key to rooms, so they go first
            diesel::delete(questions::table).execute(connection)?;
            diesel::delete(rooms::table).execute(connection)?;
            Ok(())
        })
    }

    fn create_room(&mut self, room: models::NewRoom) -> Result<RoomId, StoreError> {
        use schema::rooms::dsl::*;

        Ok(diesel::insert_into(rooms)
            .values(&room)
            .returning(id)
            .get_result::<RoomId>(&mut self.connection)?)
    }

    fn create_question(
        &mut self,
        new_question: models::NewQuestion,
    ) -> Result<QuestionId, StoreError> {
        use schema::questions::dsl::*;

        Ok(diesel::insert_into(questions)
            .values(&new_question)
            .returning(id)
            .get_result::<QuestionId>(&mut self.connection)?)
    }
}
