use super::fixtures::FixtureGenerator;
use crate::cli_error::CliError;
use crate::data_store::models::{NewQuestion, NewRoom};
use crate::data_store::{get_store_from_env, AskRoomStore};
use uuid::Uuid;

/// Number of fixture rooms created by [seed_database]
const SEED_ROOM_COUNT: usize = 2;
/// Number of fixture questions created in each room
const SEED_QUESTIONS_PER_ROOM: usize = 1;

/// Reset the database and fill it with generated development fixture data.
///
/// All existing rows are deleted first, dependent tables before their parents. Afterwards
/// [SEED_ROOM_COUNT] rooms with [SEED_QUESTIONS_PER_ROOM] questions each are created, with
/// generated names and descriptions. Meant for development databases only; the data loss is
/// intentional.
pub fn seed_database() -> Result<(), CliError> {
    let data_store_pool = get_store_from_env()?;
    let mut generator = FixtureGenerator::new();
    let (room_count, question_count) = reset_and_populate(&data_store_pool, &mut generator)?;

    // Release the database connections before reporting; nothing below needs them.
    drop(data_store_pool);

    println!(
        "Database seeded with {} rooms and {} questions of fixture data.",
        room_count, question_count
    );
    Ok(())
}

fn reset_and_populate(
    store: &impl AskRoomStore,
    generator: &mut FixtureGenerator,
) -> Result<(usize, usize), CliError> {
    let mut facade = store.get_facade()?;

    facade.reset_all_data()?;

    let mut question_count = 0;
    for _ in 0..SEED_ROOM_COUNT {
        let room_id = facade.create_room(NewRoom {
            id: Uuid::now_v7(),
            name: generator.organization_name(),
            description: generator.filler_paragraph(),
            created_at: chrono::Utc::now(),
        })?;
        // Questions reference their parent room by id, so they can only be inserted once the
        // room insert has returned.
        for _ in 0..SEED_QUESTIONS_PER_ROOM {
            facade.create_question(NewQuestion {
                id: Uuid::now_v7(),
                room_id,
                question: generator.question_sentence(),
                created_at: chrono::Utc::now(),
            })?;
            question_count += 1;
        }
    }

    Ok((SEED_ROOM_COUNT, question_count))
}
