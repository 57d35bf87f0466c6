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

//! Figure API access

mod client;
mod transport;

pub use client::FigureClient;
pub use transport::{HttpTransport, Response, Transport, TransportConfig};
pub use reqwest::Method;
