use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("database connection failed: {0}")]
    Connect(#[source] DbErr),
    #[error("query failed: {0}")]
    Query(#[source] DbErr),
    #[error("serialization failed: {0}")]
    Serialize(String),
}

impl From<DbErr> for AppError {
    fn from(e: DbErr) -> Self {
        AppError::from_db(e)
    }
}

#[derive(Serialize)]
struct ErrorBody<'a, 'b> {
    error: &'a str,
    message: &'b str
}

impl AppError {
    fn kind(&self) -> &'static str {
        match self {
            Self::Connect(_) => "DB_CONNECT",
            Self::Query(_) => "DB_QUERY",
            Self::Serialize(_) => "SERIALIZATION",
        }
    }
    fn from_db(err: DbErr) -> Self {
        match &err {
            DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => AppError::Connect(err),
            _ => AppError::Query(err),
        }
    }
}

impl ResponseError for AppError {
    // every failure class surfaces as a 500; the kind only shows up in the body
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
    fn error_response(&self) -> HttpResponse {
        let message = self.to_string();
        HttpResponse::build(self.status_code())
            .json(ErrorBody { error: self.kind(), message: &message })
    }
}
