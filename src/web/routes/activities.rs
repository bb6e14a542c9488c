use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::database::{Activities, ActivityStore};
use crate::services::activity_directory_service;
use crate::web::error::ApiError;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct SignupQuery {
    pub email: String,
}

pub async fn activities_handler(State(store): State<ActivityStore>) -> Json<Activities> {
    Json(activity_directory_service::list_activities(&store))
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    query: Result<Query<SignupQuery>, QueryRejection>,
    State(store): State<ActivityStore>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Query(query) = query?;
    let message = activity_directory_service::sign_up(&store, &activity_name, &query.email)?;
    Ok(Json(MessageResponse { message }))
}

pub async fn unregister_handler(
    Path((activity_name, email)): Path<(String, String)>,
    State(store): State<ActivityStore>,
) -> Result<Json<MessageResponse>, ApiError> {
    let message = activity_directory_service::unregister(&store, &activity_name, &email)?;
    Ok(Json(MessageResponse { message }))
}
