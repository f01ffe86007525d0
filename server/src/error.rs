use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use error_stack::Report;
use kernel::prelude::validation::FieldErrors;
use kernel::KernelError;
use std::process::{ExitCode, Termination};

#[derive(Debug)]
pub struct StackTrace(Report<KernelError>);

impl From<Report<KernelError>> for StackTrace {
    fn from(e: Report<KernelError>) -> Self {
        StackTrace(e)
    }
}

impl Termination for StackTrace {
    fn report(self) -> ExitCode {
        self.0.report()
    }
}

#[derive(Debug)]
pub enum ErrorStatus {
    NotFound,
    Validation(FieldErrors),
    MalformedBody(JsonRejection),
    Kernel(Report<KernelError>),
}

impl From<Report<KernelError>> for ErrorStatus {
    fn from(e: Report<KernelError>) -> Self {
        ErrorStatus::Kernel(e)
    }
}

impl From<FieldErrors> for ErrorStatus {
    fn from(e: FieldErrors) -> Self {
        ErrorStatus::Validation(e)
    }
}

impl From<JsonRejection> for ErrorStatus {
    fn from(e: JsonRejection) -> Self {
        ErrorStatus::MalformedBody(e)
    }
}

impl IntoResponse for ErrorStatus {
    fn into_response(self) -> Response {
        match self {
            ErrorStatus::NotFound => {
                tracing::debug!("No filiaal with the requested id");
                StatusCode::NOT_FOUND.into_response()
            }
            ErrorStatus::Validation(errors) => {
                tracing::debug!("Rejected filiaal: {errors}");
                (StatusCode::BAD_REQUEST, Json(errors)).into_response()
            }
            ErrorStatus::MalformedBody(rejection) => {
                tracing::debug!("Unreadable body: {rejection}");
                StatusCode::BAD_REQUEST.into_response()
            }
            ErrorStatus::Kernel(report) => {
                tracing::error!("{report:?}");
                match report.current_context() {
                    KernelError::Timeout => StatusCode::SERVICE_UNAVAILABLE,
                    KernelError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
                }
                .into_response()
            }
        }
    }
}
