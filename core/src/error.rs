// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use http::StatusCode;
use std::fmt;
use thiserror::Error;

/// The error type for jmsapi operations
#[derive(Error, Debug)]
#[error("{message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    status: Option<StatusCode>,
    body: Option<String>,
    #[source]
    source: Option<anyhow::Error>,
}

/// The kind of error that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required environment variable or file is absent
    ConfigMissing,

    /// The request body could not be serialized
    RequestEncode,

    /// The request could not be constructed (bad method, uri, header value)
    RequestInvalid,

    /// A header requested for signing is absent from the request
    MissingHeader,

    /// Signing failed, including credential resolution failures
    SignFailed,

    /// Credentials exist but are invalid or were rejected by their source
    CredentialInvalid,

    /// The http call itself failed (dns, connect, timeout)
    Transport,

    /// The response body could not be read
    ResponseRead,

    /// The server answered with a status outside of `[200, 400)`
    ServerStatus,

    /// The response body could not be deserialized
    ResponseDecode,

    /// Unexpected errors
    Unexpected,
}

impl Error {
    /// Create a new error with the given kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
            body: None,
            source: None,
        }
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Prefix the message with the operation that produced this error.
    ///
    /// The kind is kept untouched.
    pub fn with_context(mut self, context: impl fmt::Display) -> Self {
        self.message = format!("{context}: {}", self.message);
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Status code returned by the server, only set for [`ErrorKind::ServerStatus`].
    pub fn status(&self) -> Option<StatusCode> {
        self.status
    }

    /// Raw response body, only set for [`ErrorKind::ServerStatus`].
    pub fn response_body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Check if this error happened while authenticating the request.
    pub fn is_sign_error(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::MissingHeader | ErrorKind::SignFailed | ErrorKind::CredentialInvalid
        )
    }
}

// Convenience constructors
impl Error {
    /// Create a config missing error
    pub fn config_missing(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigMissing, message)
    }

    /// Create a request encode error
    pub fn request_encode(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RequestEncode, message)
    }

    /// Create a request invalid error
    pub fn request_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RequestInvalid, message)
    }

    /// Create a missing header error for the given header name
    pub fn missing_header(name: &str) -> Self {
        Self::new(
            ErrorKind::MissingHeader,
            format!("missing required header for signing: {name}"),
        )
    }

    /// Create a sign failed error
    pub fn sign_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::SignFailed, message)
    }

    /// Create a credential invalid error
    pub fn credential_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CredentialInvalid, message)
    }

    /// Create a transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Transport, message)
    }

    /// Create a response read error
    pub fn response_read(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ResponseRead, message)
    }

    /// Create a server status error carrying the status code and raw body.
    pub fn server_status(status: StatusCode, body: impl Into<String>) -> Self {
        let body = body.into();
        let mut err = Self::new(
            ErrorKind::ServerStatus,
            format!(
                "server response code is not ok, code:{}, content:{}",
                status.as_u16(),
                body
            ),
        );
        err.status = Some(status);
        err.body = Some(body);
        err
    }

    /// Create a response decode error
    pub fn response_decode(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ResponseDecode, message)
    }

    /// Create an unexpected error
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::ConfigMissing => write!(f, "missing configuration"),
            ErrorKind::RequestEncode => write!(f, "request encode failed"),
            ErrorKind::RequestInvalid => write!(f, "invalid request"),
            ErrorKind::MissingHeader => write!(f, "missing header"),
            ErrorKind::SignFailed => write!(f, "sign request failed"),
            ErrorKind::CredentialInvalid => write!(f, "invalid credentials"),
            ErrorKind::Transport => write!(f, "transport error"),
            ErrorKind::ResponseRead => write!(f, "response read failed"),
            ErrorKind::ServerStatus => write!(f, "server error"),
            ErrorKind::ResponseDecode => write!(f, "response decode failed"),
            ErrorKind::Unexpected => write!(f, "unexpected error"),
        }
    }
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;

// Common From implementations
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(err)
    }
}

impl From<std::fmt::Error> for Error {
    fn from(err: std::fmt::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::Error> for Error {
    fn from(err: http::Error) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::InvalidHeaderValue> for Error {
    fn from(err: http::header::InvalidHeaderValue) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::uri::InvalidUri> for Error {
    fn from(err: http::uri::InvalidUri) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::uri::InvalidUriParts> for Error {
    fn from(err: http::uri::InvalidUriParts) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::ToStrError> for Error {
    fn from(err: http::header::ToStrError) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Self::unexpected(err.to_string()).with_source(anyhow::Error::from(err))
    }
}
