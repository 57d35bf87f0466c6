// Figure SDK - A client library for the Figure upload hosting service
// Copyright (C) 2025 Figure SDK Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Error types for the Figure SDK

use thiserror::Error;

/// Result type alias using the SDK's error
pub type Result<T> = std::result::Result<T, FigureError>;

/// Errors that can occur while talking to Figure or decoding its data
#[derive(Error, Debug)]
pub enum FigureError {
    /// Neither a usable token nor an issuer able to produce one
    #[error("Invalid credential: {0}")]
    InvalidCredential(String),

    /// The endpoint URL could not be parsed
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// The server answered with a status the operation does not accept
    #[error("Unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// Requested size is not present on the upload
    #[error("No media for size '{0}'")]
    NotFound(String),

    /// Encoding a value to JSON failed
    #[error("Serialization error: {0}")]
    Serialization(#[source] serde_json::Error),

    /// Persisted media carries a format version this SDK cannot read
    #[error("Unsupported media format version {found:?} (expected {expected})")]
    VersionMismatch { expected: u64, found: Option<u64> },

    /// JSON received from the server or from storage is malformed
    #[error("Decode error: {0}")]
    Decode(#[source] serde_json::Error),

    /// The HTTP exchange itself failed
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A token issuer could not produce a token
    #[error("Token issuer error: {0}")]
    Issuer(String),
}
