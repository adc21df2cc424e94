use std::sync::Arc;

use poem::http::{HeaderValue, Method, StatusCode, header};
use poem::{Endpoint, EndpointExt, IntoResponse, Request, endpoint::BoxEndpoint};
use poem_openapi::error::{ContentTypeError, ParseParamError, ParseRequestPayloadError};
use poem_openapi::{Object, payload::Json};

use business::domain::shared::value_objects::EntityId;

pub const INVALID_ITEM_ID: &str = "Invalid item ID";
pub const INVALID_SHOPPING_LIST_ID: &str = "Invalid shopping list ID";
pub const INTERNAL_ERROR: &str = "Internal server error";
pub const INVALID_REQUEST_BODY: &str = "Invalid request body";
pub const UNSUPPORTED_CONTENT_TYPE: &str = "Request body must be JSON";

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            message: message.to_string(),
        }
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

/// Body for a 400 raised by the REST layer before reaching a use case.
pub fn validation_error(message: &str) -> Json<ErrorResponse> {
    Json(ErrorResponse::new("ValidationError", message))
}

/// Parses a path or body identifier, answering `message` when malformed.
pub fn parse_id(raw: &str, message: &str) -> Result<EntityId, Json<ErrorResponse>> {
    EntityId::parse(raw).map_err(|_| validation_error(message))
}

/// Wraps the API so requests rejected before a handler runs still answer
/// with an `ErrorResponse`.
///
/// A POST or PATCH without a `Content-Type` is handled as an empty JSON
/// object, letting the handler report the missing field itself.
pub fn with_error_contract<E>(endpoint: E) -> BoxEndpoint<'static>
where
    E: Endpoint + 'static,
{
    endpoint
        .around(default_json_body)
        .catch_error(reject_payload)
        .catch_error(reject_param)
        .catch_error(reject_content_type)
        .boxed()
}

async fn default_json_body<E: Endpoint>(
    endpoint: Arc<E>,
    mut req: Request,
) -> poem::Result<E::Output> {
    let has_body_method = *req.method() == Method::POST || *req.method() == Method::PATCH;
    if has_body_method && !req.headers().contains_key(header::CONTENT_TYPE) {
        req.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        req.set_body("{}");
    }
    endpoint.call(req).await
}

async fn reject_payload(err: ParseRequestPayloadError) -> impl IntoResponse {
    tracing::debug!(reason = %err.reason, "rejected request body");
    validation_error(INVALID_REQUEST_BODY).with_status(StatusCode::BAD_REQUEST)
}

async fn reject_param(err: ParseParamError) -> impl IntoResponse {
    let message = format!("Invalid {} parameter", err.name);
    validation_error(&message).with_status(StatusCode::BAD_REQUEST)
}

async fn reject_content_type(_: ContentTypeError) -> impl IntoResponse {
    validation_error(UNSUPPORTED_CONTENT_TYPE).with_status(StatusCode::BAD_REQUEST)
}
