use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::fmt::{self, Debug, Display};

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    pub code: i32,
    pub message: String,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.message, self.code)
    }
}

impl std::error::Error for Error {}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        reqwest_error(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        dataset_error(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        io_error(err)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_message) = match self.code {
            1..=99 => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
            _ => (StatusCode::BAD_REQUEST, self.message.as_str()),
        };

        let body = Json(json!({
            "code": self.code,
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

pub fn unknown_port_error(id: &str) -> Error {
    Error {
        code: 102,
        message: format!("unknown port: {}", id),
    }
}

pub fn empty_path_error() -> Error {
    Error {
        code: 103,
        message: "path must contain at least one coordinate".into(),
    }
}

pub fn invalid_route_key_error(key: &str) -> Error {
    Error {
        code: 104,
        message: format!("invalid route key: {}", key),
    }
}

pub fn config_error(name: &str) -> Error {
    Error {
        code: 2,
        message: format!("invalid configuration value for {}", name),
    }
}

pub fn reqwest_error(_: reqwest::Error) -> Error {
    Error {
        code: 3,
        message: "reqwest error".into(),
    }
}

pub fn upstream_error() -> Error {
    Error {
        code: 4,
        message: "upstream error".into(),
    }
}

pub fn dataset_error<T: Debug>(err: T) -> Error {
    Error {
        code: 6,
        message: format!("malformed route dataset: {:?}", err),
    }
}

pub fn io_error(_: std::io::Error) -> Error {
    Error {
        code: 7,
        message: "io error".into(),
    }
}

pub fn server_error<T: Debug>(_: T) -> Error {
    Error {
        code: 8,
        message: "server error".into(),
    }
}
