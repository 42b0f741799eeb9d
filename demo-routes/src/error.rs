use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use image_effect::ImageEffectError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Unknown filter type: {0:?}")]
    UnknownFilter(String),

    #[error("No image was submitted")]
    MissingImage,

    #[error("Malformed form: {0}")]
    MalformedForm(String),

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Image processing error: {0}")]
    Transform(#[from] ImageEffectError),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<MultipartError> for AppError {
    fn from(e: MultipartError) -> Self {
        AppError::MalformedForm(e.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::UnknownFilter(_) | AppError::MissingImage | AppError::MalformedForm(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Transform(ImageEffectError::FilterNotFound(_)) => StatusCode::BAD_REQUEST,
            AppError::Storage(_) | AppError::Transform(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        if status.is_server_error() {
            log::warn!("{self}");
        }

        (status, self.to_string()).into_response()
    }
}
