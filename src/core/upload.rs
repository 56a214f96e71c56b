use crate::models::UploadedImage;
use crate::services::inference::GENERIC_CONTENT_TYPE;
use actix_multipart::{Field, Multipart};
use actix_web::{http::{header, StatusCode}, HttpRequest};
use futures::TryStreamExt;
use thiserror::Error;

/// Multipart field that carries the image
pub const IMAGE_FIELD: &str = "image";

/// Client input defects on `/analyze`
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Image file is required")]
    MissingImage,

    #[error("Only one image file is allowed")]
    MultipleImages,

    #[error("Image file exceeds the {limit} byte limit")]
    TooLarge { limit: usize },

    #[error("Invalid multipart payload: {0}")]
    Malformed(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),
}

impl ValidationError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ValidationError::TooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    /// Body text sent to the client
    pub fn client_message(&self) -> &'static str {
        match self {
            ValidationError::MissingImage => "Image file is required",
            ValidationError::MultipleImages => "Only one image file is allowed",
            ValidationError::TooLarge { .. } => "Image file is too large",
            ValidationError::Malformed(_) => "Invalid multipart payload",
            ValidationError::InvalidQuery(_) => "Invalid query",
        }
    }
}

fn malformed(err: actix_multipart::MultipartError) -> ValidationError {
    ValidationError::Malformed(err.to_string())
}

/// True when the request declares a `multipart/*` body
pub fn is_multipart(req: &HttpRequest) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.trim_start().to_ascii_lowercase().starts_with("multipart/"))
        .unwrap_or(false)
}

/// Only parts named `image` that carry a filename are treated as files
fn is_image_file(field: &Field) -> bool {
    field.name() == Some(IMAGE_FIELD)
        && field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .is_some()
}

async fn drain(field: &mut Field) -> Result<(), ValidationError> {
    while field.try_next().await.map_err(malformed)?.is_some() {}
    Ok(())
}

/// Pull the single `image` file out of a multipart body.
///
/// Other fields are read and discarded. The image is buffered in memory and
/// rejected as soon as it grows past `max_bytes`.
pub async fn extract_image(mut payload: Multipart, max_bytes: usize) -> Result<UploadedImage, ValidationError> {
    let mut image: Option<UploadedImage> = None;

    while let Some(mut field) = payload.try_next().await.map_err(malformed)? {
        if !is_image_file(&field) {
            drain(&mut field).await?;
            continue;
        }

        if image.is_some() {
            return Err(ValidationError::MultipleImages);
        }

        let mime_type = field
            .content_type()
            .map(|mime| mime.to_string())
            .unwrap_or_else(|| GENERIC_CONTENT_TYPE.to_string());

        let mut bytes = Vec::new();
        while let Some(chunk) = field.try_next().await.map_err(malformed)? {
            if bytes.len() + chunk.len() > max_bytes {
                return Err(ValidationError::TooLarge { limit: max_bytes });
            }
            bytes.extend_from_slice(&chunk);
        }

        image = Some(UploadedImage::new(bytes, mime_type));
    }

    image
        .filter(|img| !img.is_empty())
        .ok_or(ValidationError::MissingImage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_is_multipart() {
        let req = TestRequest::default()
            .insert_header((header::CONTENT_TYPE, "multipart/form-data; boundary=abc"))
            .to_http_request();
        assert!(is_multipart(&req));

        let req = TestRequest::default()
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .to_http_request();
        assert!(!is_multipart(&req));

        assert!(!is_multipart(&TestRequest::default().to_http_request()));
    }

    #[test]
    fn test_client_messages_and_status() {
        assert_eq!(ValidationError::MissingImage.client_message(), "Image file is required");
        assert_eq!(ValidationError::MissingImage.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ValidationError::TooLarge { limit: 10 }.status_code(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(
            ValidationError::Malformed("boundary".into()).client_message(),
            "Invalid multipart payload"
        );
        assert_eq!(ValidationError::InvalidQuery("tone".into()).status_code(), StatusCode::BAD_REQUEST);
    }
}
