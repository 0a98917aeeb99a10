use super::APIError;
use crate::web::AppState;
use actix_web::{get, web, Responder};

#[get("/rooms")]
async fn list_rooms(state: web::Data<AppState>) -> Result<impl Responder, APIError> {
    let rooms: Vec<askroom_api_types::RoomQuestionCount> =
        web::block(move || -> Result<_, APIError> {
            let mut store = state.store.get_facade()?;
            Ok(store.list_rooms_with_question_counts()?)
        })
        .await??
        .into_iter()
        .map(|room| room.into())
        .collect();

    Ok(web::Json(rooms))
}
