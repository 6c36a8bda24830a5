// src/presentation/http/controllers/images.rs
use crate::application::{
    commands::images::UploadImageCommand, dto::UploadedImageDto, queries::images::GetImageQuery,
};
use crate::presentation::http::{
    error::{HttpError, HttpResult, IntoHttpResult},
    extractors::AdminApi,
    state::HttpState,
};
use axum::{
    Extension, Json,
    extract::{Multipart, Path, multipart::MultipartError, multipart::MultipartRejection},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

const UPLOAD_FIELD: &str = "image";
const IMAGE_CACHE_CONTROL: &str = "public, max-age=31536000";

fn no_file() -> HttpError {
    HttpError::new(StatusCode::BAD_REQUEST, "No file uploaded").json()
}

fn multipart_error(err: &MultipartError) -> HttpError {
    tracing::warn!(error = %err, "malformed upload body");
    HttpError::new(err.status(), err.body_text()).json()
}

pub async fn upload_image(
    _: AdminApi,
    Extension(state): Extension<HttpState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> HttpResult<Json<UploadedImageDto>> {
    let Ok(mut multipart) = multipart else {
        return Err(no_file());
    };

    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| multipart_error(&err))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let Some(file_name) = field.file_name().filter(|name| !name.is_empty()) else {
            continue;
        };
        let file_name = file_name.to_string();
        let content_type = field.content_type().unwrap_or_default().to_string();
        let data = field.bytes().await.map_err(|err| multipart_error(&err))?;

        upload = Some(UploadImageCommand {
            content_type,
            file_name: Some(file_name),
            data,
        });
        break;
    }

    let command = upload.ok_or_else(no_file)?;
    state
        .services
        .image_commands
        .upload_image(command)
        .await
        .map_err(|err| HttpError::from_error(err).json())
        .map(Json)
}

pub async fn serve_image(
    Extension(state): Extension<HttpState>,
    Path(filename): Path<String>,
) -> HttpResult<Response> {
    let image = state
        .services
        .image_queries
        .get_image(GetImageQuery { filename })
        .await
        .into_http()?;

    let content_type = HeaderValue::from_str(&image.content_type)
        .unwrap_or_else(|_| HeaderValue::from_static("application/octet-stream"));
    Ok((
        [
            (header::CONTENT_TYPE, content_type),
            (
                header::CACHE_CONTROL,
                HeaderValue::from_static(IMAGE_CACHE_CONTROL),
            ),
        ],
        image.data,
    )
        .into_response())
}
