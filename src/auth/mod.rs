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

//! Credentials used to authenticate against Figure
//!
//! The client either receives a ready [`Token`] or asks a [`TokenIssuer`]
//! (usually the SSO server) to produce one for the application named in
//! the endpoint URL. How the issuer obtains the token is up to it.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;

/// Bearer credential identifying the calling application
#[derive(Clone, PartialEq, Eq)]
pub struct Token {
    id: String,
}

impl Token {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Identifier sent to the server as the `token` query parameter
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token").field("id", &"<redacted>").finish()
    }
}

impl From<String> for Token {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

impl From<&str> for Token {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Something able to issue tokens for an application
#[async_trait]
pub trait TokenIssuer: Send + Sync {
    /// Produce a token for the application `app_id`
    async fn issue(&self, app_id: &str) -> Result<Token>;
}

/// What a client is built from: a resolved token or an issuer
#[derive(Clone)]
pub enum Credential {
    Token(Token),
    Issuer(Arc<dyn TokenIssuer>),
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credential::Token(token) => f.debug_tuple("Token").field(token).finish(),
            Credential::Issuer(_) => f.write_str("Issuer(..)"),
        }
    }
}

impl From<Token> for Credential {
    fn from(token: Token) -> Self {
        Credential::Token(token)
    }
}

impl From<Arc<dyn TokenIssuer>> for Credential {
    fn from(issuer: Arc<dyn TokenIssuer>) -> Self {
        Credential::Issuer(issuer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_token() {
        let token = Token::new("s3cr3t-token");
        let debug = format!("{:?}", Credential::from(token));
        assert!(!debug.contains("s3cr3t"));
        assert!(debug.contains("redacted"));
    }

    #[test]
    fn test_token_id() {
        assert_eq!(Token::from("abc").id(), "abc");
        assert_eq!(Token::from(String::from("abc")), Token::new("abc"));
    }
}
