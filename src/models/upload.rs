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

//! Upload model
//!
//! An upload is one file a user sent to Figure together with every scaled
//! version the service generated from it, grouped by size name.

use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::media::{Media, POSTER_KIND};
use crate::error::{FigureError, Result};

/// Top level of the upload payload. Sizes stay undecoded until asked for.
#[derive(Debug, Clone, Deserialize)]
struct UploadPayload {
    #[serde(rename = "type")]
    kind: String,

    #[serde(default, deserialize_with = "size_map")]
    media: BTreeMap<String, Value>,
}

/// One file of an upload, either a size or one of its posters
#[derive(Debug, Clone, Deserialize)]
struct MediaFile {
    mime: String,
    width: u32,
    height: u32,
    url: String,
}

/// Still frames for animations and videos
#[derive(Debug, Clone, Deserialize)]
struct Posters {
    #[serde(default)]
    poster: Option<Vec<MediaFile>>,
}

/// Accepts an object of sizes; `null` and `[]` mean no sizes
fn size_map<'de, D>(deserializer: D) -> std::result::Result<BTreeMap<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Object(sizes) => Ok(sizes.into_iter().collect()),
        Value::Null => Ok(BTreeMap::new()),
        Value::Array(list) if list.is_empty() => Ok(BTreeMap::new()),
        other => Err(D::Error::custom(format!(
            "expected a map of sizes, found {}",
            other
        ))),
    }
}

/// A user upload as described by Figure
#[derive(Debug, Clone)]
pub struct Upload {
    payload: UploadPayload,
    raw: Value,
}

impl Upload {
    /// Decode the `payload` object the server returns for an upload.
    ///
    /// Only the type and the list of sizes are checked here; each size is
    /// decoded when it is requested.
    pub fn from_payload(raw: Value) -> Result<Self> {
        let payload = UploadPayload::deserialize(&raw).map_err(FigureError::Decode)?;
        Ok(Self { payload, raw })
    }

    /// Type of the upload: `image`, `animation` or `video`
    pub fn kind(&self) -> &str {
        &self.payload.kind
    }

    /// Scaled version of the upload in its original format, so a video
    /// upload yields a video here.
    pub fn media(&self, size: &str) -> Result<Media> {
        let file: MediaFile = self.decode_size(size)?;

        Ok(Media::new(
            self.payload.kind.clone(),
            file.mime,
            file.width,
            file.height,
            file.url,
        ))
    }

    /// Poster images for a size, in the order the server lists them.
    ///
    /// Posters are still images whatever the upload type is, so clients
    /// can show something without downloading a large video.
    pub fn poster(&self, size: &str) -> Result<Vec<Media>> {
        let posters: Posters = self.decode_size(size)?;

        Ok(posters
            .poster
            .unwrap_or_default()
            .into_iter()
            .map(|p| Media::new(POSTER_KIND, p.mime, p.width, p.height, p.url))
            .collect())
    }

    /// Size names available on this upload, sorted
    pub fn sizes(&self) -> impl Iterator<Item = &str> {
        self.payload.media.keys().map(String::as_str)
    }

    pub fn has_size(&self, size: &str) -> bool {
        self.payload.media.contains_key(size)
    }

    /// The payload exactly as received
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    fn decode_size<'a, T: Deserialize<'a>>(&'a self, size: &str) -> Result<T> {
        let value = self
            .payload
            .media
            .get(size)
            .ok_or_else(|| FigureError::NotFound(size.to_string()))?;

        T::deserialize(value).map_err(FigureError::Decode)
    }
}
