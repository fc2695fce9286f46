use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use service::errors::ServiceError;
use tracing::{debug, error, warn};

pub const MSG_CONSTRAINT: &str = "Existe alguma constraint na entidade sendo utilizada.";
pub const MSG_EMPTY_RESULT: &str = "O parâmetro enviado não corresponde a nenhum objeto no servidor.";
pub const MSG_INVALID_BODY: &str = "O objeto enviado no corpo da requisição é inválido.";
pub const MSG_INVALID_PARAM: &str = "O parâmetro enviado na requisição é inválido.";
pub const MSG_INTERNAL: &str = "Erro interno no servidor.";

/// Error response shared by every resource.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: &'static str,
    pub message: String,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    pub status: u16,
    pub error: String,
    pub message: String,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &'static str, message: impl Into<String>) -> Self {
        Self { status, error, message: message.into() }
    }

    fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Bad Request", message)
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            status: self.status.as_u16(),
            error: self.error.to_string(),
            message: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::ConstraintViolation(detail) => {
                warn!(%detail, "constraint violation");
                Self::bad_request(MSG_CONSTRAINT)
            }
            ServiceError::EmptyResult(detail) => {
                debug!(%detail, "empty result");
                Self::bad_request(MSG_EMPTY_RESULT)
            }
            ServiceError::Validation(detail) => Self::bad_request(format!("{} {}", MSG_INVALID_BODY, detail)),
            ServiceError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, "Not Found", msg),
            ServiceError::Db(detail) => {
                error!(%detail, "database error");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", MSG_INTERNAL)
            }
        }
    }
}

impl From<JsonRejection> for JsonApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(format!("{} {}", MSG_INVALID_BODY, rejection.body_text()))
    }
}

impl From<PathRejection> for JsonApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::bad_request(format!("{} {}", MSG_INVALID_PARAM, rejection.body_text()))
    }
}

impl From<QueryRejection> for JsonApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::bad_request(format!("{} {}", MSG_INVALID_PARAM, rejection.body_text()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping_is_consistent() {
        let cases = [
            (ServiceError::ConstraintViolation("fk".into()), StatusCode::BAD_REQUEST),
            (ServiceError::EmptyResult("none".into()), StatusCode::BAD_REQUEST),
            (ServiceError::Validation("nome".into()), StatusCode::BAD_REQUEST),
            (ServiceError::not_found("Peca", 1), StatusCode::NOT_FOUND),
            (ServiceError::Db("down".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(JsonApiError::from(err).status, status);
        }
    }

    #[test]
    fn db_details_are_not_leaked() {
        let e = JsonApiError::from(ServiceError::Db("password=hunter2".into()));
        assert_eq!(e.message, MSG_INTERNAL);
    }

    #[test]
    fn constraint_message_is_fixed() {
        let e = JsonApiError::from(ServiceError::ConstraintViolation("FOREIGN KEY constraint failed".into()));
        assert_eq!(e.message, MSG_CONSTRAINT);
    }
}
