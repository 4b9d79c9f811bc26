//! Success bodies for the write endpoints.

use crate::model::{Created, Message};
use axum::{http::StatusCode, Json};

pub fn created(id: i32) -> (StatusCode, Json<Created>) {
    (
        StatusCode::CREATED,
        Json(Created {
            message: "Product added successfully".into(),
            id,
        }),
    )
}

pub fn message(text: &str) -> (StatusCode, Json<Message>) {
    (
        StatusCode::OK,
        Json(Message {
            message: text.to_string(),
        }),
    )
}
