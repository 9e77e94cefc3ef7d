use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Response},
    Form, Json,
};
use serde::de::DeserializeOwned;
use serde_json::json;

/// Request body read as JSON or as an urlencoded form, depending on the
/// `Content-Type` header. Any other (or missing) content type yields
/// `T::default()`, i.e. an empty body. So does a JSON body with no content.
#[derive(Debug, Clone, Default)]
pub struct JsonOrForm<T>(pub T);

enum BodyKind {
    Json,
    Form,
    Empty,
}

fn body_kind(request: &Request) -> BodyKind {
    let content_type = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    if content_type.starts_with("application/json") {
        BodyKind::Json
    } else if content_type.starts_with("application/x-www-form-urlencoded") {
        BodyKind::Form
    } else {
        BodyKind::Empty
    }
}

fn bad_request(message: String) -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({ "message": message }))).into_response()
}

#[async_trait]
impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default + Send,
{
    type Rejection = Response;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        match body_kind(&request) {
            BodyKind::Json => {
                let bytes = Bytes::from_request(request, state)
                    .await
                    .map_err(IntoResponse::into_response)?;
                if bytes.iter().all(u8::is_ascii_whitespace) {
                    return Ok(JsonOrForm(T::default()));
                }

                serde_json::from_slice(&bytes)
                    .map(JsonOrForm)
                    .map_err(|e| bad_request(format!("Malformed JSON body: {}", e)))
            }
            BodyKind::Form => {
                let Form(value) = Form::<T>::from_request(request, state)
                    .await
                    .map_err(|e| bad_request(e.body_text()))?;
                Ok(JsonOrForm(value))
            }
            BodyKind::Empty => Ok(JsonOrForm(T::default())),
        }
    }
}
