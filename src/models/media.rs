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

//! Media model
//!
//! A [`Media`] is one concrete file Figure scaled from the original upload,
//! ready to be served as an image or video. It persists as a small
//! versioned JSON object so applications can cache it next to their own
//! records.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{FigureError, Result};

/// Version written into every persisted media record
pub const MEDIA_FORMAT_VERSION: u64 = 1;

/// Kind given to poster frames, which are always still images
pub const POSTER_KIND: &str = "image";

/// A single scaled variant of an upload
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "MediaRecord", into = "MediaRecord")]
pub struct Media {
    kind: String,
    mime: String,
    width: u32,
    height: u32,
    url: String,
}

/// On-disk shape of a [`Media`]
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MediaRecord {
    #[serde(default)]
    version: Option<u64>,

    #[serde(rename = "type")]
    kind: String,

    mime: String,
    width: u32,
    height: u32,
    url: String,
}

impl Media {
    /// Create a media description. Dimensions are taken as given, so
    /// non-visual media may report `0`.
    pub fn new(
        kind: impl Into<String>,
        mime: impl Into<String>,
        width: u32,
        height: u32,
        url: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            mime: mime.into(),
            width,
            height,
            url: url.into(),
        }
    }

    /// Coarse category: `image`, `animation` or `video`
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// IANA media type of the file
    pub fn mime(&self) -> &str {
        &self.mime
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Absolute URL the variant can be fetched from
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Encode as the versioned persistence format
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(FigureError::Serialization)
    }

    /// Decode a record produced by [`Media::to_json`].
    ///
    /// The version is checked before anything else: a record with any
    /// version other than [`MEDIA_FORMAT_VERSION`], or none at all, is
    /// rejected even if the remaining fields look valid.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json).map_err(FigureError::Decode)?;
        check_version(value.get("version"))?;

        serde_json::from_value(value).map_err(FigureError::Decode)
    }
}

fn check_version(version: Option<&Value>) -> Result<()> {
    let found = version.and_then(Value::as_u64);

    if found == Some(MEDIA_FORMAT_VERSION) {
        Ok(())
    } else {
        Err(FigureError::VersionMismatch {
            expected: MEDIA_FORMAT_VERSION,
            found,
        })
    }
}

impl TryFrom<MediaRecord> for Media {
    type Error = FigureError;

    fn try_from(record: MediaRecord) -> Result<Self> {
        if record.version != Some(MEDIA_FORMAT_VERSION) {
            return Err(FigureError::VersionMismatch {
                expected: MEDIA_FORMAT_VERSION,
                found: record.version,
            });
        }

        Ok(Self {
            kind: record.kind,
            mime: record.mime,
            width: record.width,
            height: record.height,
            url: record.url,
        })
    }
}

impl From<Media> for MediaRecord {
    fn from(media: Media) -> Self {
        Self {
            version: Some(MEDIA_FORMAT_VERSION),
            kind: media.kind,
            mime: media.mime,
            width: media.width,
            height: media.height,
            url: media.url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Media {
        Media::new("image", "image/webp", 1280, 720, "https://cdn.example/u/1/original.webp")
    }

    #[test]
    fn test_round_trip() {
        let media = sample();
        let json = media.to_json().unwrap();
        assert_eq!(Media::from_json(&json).unwrap(), media);
    }

    #[test]
    fn test_round_trip_zero_dimensions() {
        let media = Media::new("video", "audio/ogg", 0, 0, "https://cdn.example/a.ogg");
        let json = media.to_json().unwrap();
        assert_eq!(Media::from_json(&json).unwrap(), media);
    }

    #[test]
    fn test_to_json_shape() {
        let value: Value = serde_json::from_str(&sample().to_json().unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "version": 1,
                "type": "image",
                "mime": "image/webp",
                "width": 1280,
                "height": 720,
                "url": "https://cdn.example/u/1/original.webp"
            })
        );
    }

    #[test]
    fn test_from_json_rejects_other_version() {
        let json = json!({
            "version": 2,
            "type": "image",
            "mime": "image/png",
            "width": 10,
            "height": 10,
            "url": "https://x/a.png"
        })
        .to_string();

        match Media::from_json(&json) {
            Err(FigureError::VersionMismatch { expected, found }) => {
                assert_eq!(expected, 1);
                assert_eq!(found, Some(2));
            }
            other => panic!("expected VersionMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_from_json_rejects_missing_version() {
        let json = r#"{"type":"image","mime":"image/png","width":1,"height":1,"url":"u"}"#;
        assert!(matches!(
            Media::from_json(json),
            Err(FigureError::VersionMismatch { found: None, .. })
        ));
    }

    #[test]
    fn test_version_checked_before_fields() {
        // Fields missing as well, but the version wins
        assert!(matches!(
            Media::from_json(r#"{"version":"1"}"#),
            Err(FigureError::VersionMismatch { found: None, .. })
        ));
    }

    #[test]
    fn test_from_json_ignores_extra_fields() {
        let json = r#"{"version":1,"type":"animation","mime":"image/gif","width":4,"height":3,"url":"https://x/a.gif","blurhash":"LKO2"}"#;
        let media = Media::from_json(json).unwrap();
        assert_eq!(media.kind(), "animation");
        assert_eq!(media.mime(), "image/gif");
        assert_eq!((media.width(), media.height()), (4, 3));
        assert_eq!(media.url(), "https://x/a.gif");
    }

    #[test]
    fn test_from_json_missing_field_is_decode_error() {
        let json = r#"{"version":1,"type":"image","mime":"image/png","width":1,"height":1}"#;
        assert!(matches!(Media::from_json(json), Err(FigureError::Decode(_))));
    }

    #[test]
    fn test_from_json_malformed() {
        assert!(matches!(Media::from_json("{not json"), Err(FigureError::Decode(_))));
    }

    #[test]
    fn test_embedded_in_other_structures() {
        #[derive(Serialize, Deserialize)]
        struct Avatar {
            user: String,
            media: Media,
        }

        let avatar = Avatar { user: "ana".into(), media: sample() };
        let json = serde_json::to_value(&avatar).unwrap();
        assert_eq!(json["media"]["version"], 1);

        let back: Avatar = serde_json::from_value(json).unwrap();
        assert_eq!(back.media, sample());
    }
}
