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

//! Figure SDK
//!
//! Client library for Figure, a hosting service for user uploads. Users
//! upload files anonymously; an application then claims them with its
//! token, retrieves the scaled versions Figure generated, and deletes them
//! when no longer needed.
//!
//! ```ignore
//! use figure_sdk::{FigureClient, Token};
//!
//! let client = FigureClient::from_token("https://figure.example", Token::new("app-token"))?;
//! client.claim(1042, "secret-from-user").await?;
//!
//! let upload = client.retrieve(1042).await?;
//! let original = upload.media("original")?;
//! let cached = original.to_json()?;
//! ```

pub mod api;
pub mod auth;
pub mod error;
pub mod logger;
pub mod models;

pub use api::{FigureClient, HttpTransport, Response, Transport, TransportConfig};
pub use auth::{Credential, Token, TokenIssuer};
pub use error::{FigureError, Result};
pub use models::{Media, Upload};
