use std::collections::HashMap;

use tracing::debug;
use zbus::zvariant::{ObjectPath, OwnedObjectPath, Value};

use crate::types::{DEFAULT_TRACK_ID, Microseconds};
use crate::validate::validate;
use crate::value::{FieldValue, Metadata};
use crate::wire::{STRING_ARRAY, WireType, to_wire};

/// Track metadata as serialized for the wire, keyed by wire key.
pub type WireMetadata = HashMap<String, Value<'static>>;

/// Every metadata field the protocol declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataField {
    /// `mpris:trackid`
    TrackId,
    /// `mpris:length`
    Length,
    /// `mpris:artUrl`
    ArtUrl,
    /// `xesam:url`
    Url,
    /// `xesam:title`
    Title,
    /// `xesam:artist`
    Artist,
    /// `xesam:album`
    Album,
    /// `xesam:albumArtist`
    AlbumArtist,
    /// `xesam:discNumber`
    DiscNumber,
    /// `xesam:trackNumber`
    TrackNumber,
    /// `xesam:comment`
    Comment,
}

/// All declared metadata fields.
pub const METADATA_FIELDS: &[MetadataField] = &[
    MetadataField::TrackId,
    MetadataField::Length,
    MetadataField::ArtUrl,
    MetadataField::Url,
    MetadataField::Title,
    MetadataField::Artist,
    MetadataField::Album,
    MetadataField::AlbumArtist,
    MetadataField::DiscNumber,
    MetadataField::TrackNumber,
    MetadataField::Comment,
];

impl MetadataField {
    /// Wire key of this field.
    pub fn key(self) -> &'static str {
        match self {
            Self::TrackId => "mpris:trackid",
            Self::Length => "mpris:length",
            Self::ArtUrl => "mpris:artUrl",
            Self::Url => "xesam:url",
            Self::Title => "xesam:title",
            Self::Artist => "xesam:artist",
            Self::Album => "xesam:album",
            Self::AlbumArtist => "xesam:albumArtist",
            Self::DiscNumber => "xesam:discNumber",
            Self::TrackNumber => "xesam:trackNumber",
            Self::Comment => "xesam:comment",
        }
    }

    /// Parse a wire key into its declared field.
    pub fn from_key(key: &str) -> Option<Self> {
        METADATA_FIELDS
            .iter()
            .copied()
            .find(|field| field.key() == key)
    }

    /// Wire type declared for this field.
    pub fn wire_type(self) -> WireType {
        match self {
            Self::TrackId => WireType::ObjectPath,
            Self::Length => WireType::Int64,
            Self::ArtUrl | Self::Url | Self::Title | Self::Album => WireType::String,
            Self::Artist | Self::AlbumArtist | Self::Comment => STRING_ARRAY,
            Self::DiscNumber | Self::TrackNumber => WireType::Int32,
        }
    }
}

/// Structured sparse metadata for one track.
///
/// Every slot except the track id is optional; absent slots are omitted
/// from the wire payload rather than emitted as null. The track id always
/// has a concrete value so consumers can address the track.
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataRecord {
    /// Track title
    pub title: Option<String>,

    /// Performing artists
    pub artists: Option<Vec<String>>,

    /// Album name
    pub album: Option<String>,

    /// Album artists
    pub album_artists: Option<Vec<String>>,

    /// Track length in microseconds
    pub length: Option<Microseconds>,

    /// URI the track can be opened from
    pub url: Option<String>,

    /// URI of the cover art
    pub art_url: Option<String>,

    /// Disc the track appears on
    pub disc_no: Option<i32>,

    /// Position of the track on its disc
    pub track_no: Option<i32>,

    /// Free-form comments
    pub comments: Option<Vec<String>>,

    /// Object path identifying the track, always present
    pub track_id: OwnedObjectPath,
}

impl Default for MetadataRecord {
    fn default() -> Self {
        Self {
            title: None,
            artists: None,
            album: None,
            album_artists: None,
            length: None,
            url: None,
            art_url: None,
            disc_no: None,
            track_no: None,
            comments: None,
            track_id: ObjectPath::from_static_str_unchecked(DEFAULT_TRACK_ID).into(),
        }
    }
}

impl MetadataRecord {
    /// Project the record into the raw sparse mapping form.
    ///
    /// Non-absent slots only, except the track id which is always present.
    pub fn to_map(&self) -> Metadata {
        let mut metadata = Metadata::new();

        let mut put = |field: MetadataField, value: Option<FieldValue>| {
            if let Some(value) = value {
                metadata.insert(field.key().to_string(), value);
            }
        };

        put(
            MetadataField::TrackId,
            Some(FieldValue::ObjPath(self.track_id.clone())),
        );
        put(MetadataField::Length, self.length.map(FieldValue::from));
        put(
            MetadataField::ArtUrl,
            self.art_url.clone().map(FieldValue::from),
        );
        put(MetadataField::Url, self.url.clone().map(FieldValue::from));
        put(MetadataField::Title, self.title.clone().map(FieldValue::from));
        put(
            MetadataField::Artist,
            self.artists.clone().map(FieldValue::from),
        );
        put(MetadataField::Album, self.album.clone().map(FieldValue::from));
        put(
            MetadataField::AlbumArtist,
            self.album_artists.clone().map(FieldValue::from),
        );
        put(
            MetadataField::DiscNumber,
            self.disc_no.map(FieldValue::from),
        );
        put(
            MetadataField::TrackNumber,
            self.track_no.map(FieldValue::from),
        );
        put(
            MetadataField::Comment,
            self.comments.clone().map(FieldValue::from),
        );

        metadata
    }
}

/// A performing artist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artist {
    /// Artist name
    pub name: String,
}

impl Default for Artist {
    fn default() -> Self {
        Self {
            name: "Default Artist".to_string(),
        }
    }
}

/// An album a track belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct Album {
    /// URI of the album cover art
    pub art_url: Option<String>,

    /// Album artists
    pub artists: Vec<Artist>,

    /// Album name
    pub name: String,
}

impl Default for Album {
    fn default() -> Self {
        Self {
            art_url: None,
            artists: Vec::new(),
            name: "Default Album".to_string(),
        }
    }
}

/// One track as held by the playback queue.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    /// Album the track belongs to
    pub album: Option<Album>,

    /// URI of the cover art
    pub art_url: Option<String>,

    /// Performing artists
    pub artists: Vec<Artist>,

    /// Disc the track appears on
    pub disc_no: Option<i32>,

    /// Track length in microseconds
    pub length: Microseconds,

    /// Track title
    pub name: String,

    /// Object path identifying the track
    pub track_id: OwnedObjectPath,

    /// Position of the track on its disc
    pub track_no: Option<i32>,

    /// URI the track can be opened from
    pub uri: Option<String>,
}

impl Default for Track {
    fn default() -> Self {
        Self {
            album: None,
            art_url: None,
            artists: Vec::new(),
            disc_no: None,
            length: 0,
            name: "Default Track".to_string(),
            track_id: ObjectPath::from_static_str_unchecked(DEFAULT_TRACK_ID).into(),
            track_no: None,
            uri: None,
        }
    }
}

impl From<&Track> for MetadataRecord {
    fn from(track: &Track) -> Self {
        let artists = if track.artists.is_empty() {
            None
        } else {
            Some(track.artists.iter().map(|a| a.name.clone()).collect())
        };

        let album_artists = track.album.as_ref().and_then(|album| {
            if album.artists.is_empty() {
                None
            } else {
                Some(album.artists.iter().map(|a| a.name.clone()).collect())
            }
        });

        let art_url = track
            .art_url
            .clone()
            .or_else(|| track.album.as_ref().and_then(|album| album.art_url.clone()));

        Self {
            title: Some(track.name.clone()),
            artists,
            album: track.album.as_ref().map(|album| album.name.clone()),
            album_artists,
            length: (track.length > 0).then_some(track.length),
            url: track.uri.clone(),
            art_url,
            disc_no: track.disc_no,
            track_no: track.track_no,
            comments: None,
            track_id: track.track_id.clone(),
        }
    }
}

/// Serialize a sparse metadata mapping for the wire.
///
/// Each pair is validated first; invalid or absent entries are dropped
/// silently because partial metadata is a normal state, not an error.
/// Iteration order never affects the result.
pub fn encode(metadata: &Metadata) -> WireMetadata {
    let mut wire = WireMetadata::new();

    for (key, value) in metadata {
        match validate(key, value) {
            Ok(()) => {
                let Some(field) = MetadataField::from_key(key) else {
                    continue;
                };

                if let Some(wire_value) = to_wire(value, field.wire_type()) {
                    wire.insert(field.key().to_string(), wire_value);
                } else {
                    debug!(key = %key, "metadata value does not fit its declared wire type");
                }
            }
            Err(reason) => {
                debug!(key = %key, %reason, "dropping metadata entry");
            }
        }
    }

    wire
}

/// Serialize a structured metadata record for the wire.
pub fn encode_record(record: &MetadataRecord) -> WireMetadata {
    encode(&record.to_map())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn full_record() -> MetadataRecord {
        MetadataRecord {
            title: Some("Song".to_string()),
            artists: Some(vec!["A".to_string(), "B".to_string()]),
            album: Some("LP".to_string()),
            album_artists: Some(vec!["A".to_string()]),
            length: Some(120_000_000),
            url: Some("file:///music/song.flac".to_string()),
            art_url: Some("file:///music/cover.png".to_string()),
            disc_no: Some(1),
            track_no: Some(7),
            comments: Some(vec!["best take".to_string()]),
            track_id: ObjectPath::from_static_str_unchecked("/t/1").into(),
        }
    }

    #[test]
    fn default_record_encodes_only_the_track_id() {
        let wire = encode_record(&MetadataRecord::default());

        assert_eq!(wire.len(), 1);
        let track_id = wire.get("mpris:trackid").unwrap();
        assert_eq!(track_id.value_signature().to_string(), "o");
    }

    #[test]
    fn full_record_round_trips_its_field_set() {
        let record = full_record();
        let wire = encode_record(&record);

        let mut keys: Vec<&str> = wire.keys().map(String::as_str).collect();
        keys.sort_unstable();

        let mut expected: Vec<&str> = METADATA_FIELDS.iter().map(|f| f.key()).collect();
        expected.sort_unstable();

        assert_eq!(keys, expected);
    }

    #[test]
    fn sparse_record_emits_exactly_its_populated_fields() {
        let record = MetadataRecord {
            title: Some("Song".to_string()),
            length: Some(120_000_000),
            track_id: ObjectPath::from_static_str_unchecked("/t/1").into(),
            ..Default::default()
        };

        let wire = encode_record(&record);

        let mut keys: Vec<&str> = wire.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["mpris:length", "mpris:trackid", "xesam:title"]);
    }

    #[test]
    fn null_lists_and_unknown_keys_are_dropped() {
        let mut metadata = Metadata::new();
        metadata.insert(
            "xesam:artist".to_string(),
            FieldValue::StrList(vec![None, None]),
        );
        metadata.insert("xesam:lyricist".to_string(), FieldValue::from("who"));
        metadata.insert("xesam:title".to_string(), FieldValue::from("kept"));

        let wire = encode(&metadata);

        assert_eq!(wire.len(), 1);
        assert!(wire.contains_key("xesam:title"));
    }

    #[test]
    fn track_record_defaults_are_the_reserved_ones() {
        let track = Track::default();

        assert_eq!(track.name, "Default Track");
        assert_eq!(track.track_id.as_str(), DEFAULT_TRACK_ID);
        assert_eq!(Album::default().name, "Default Album");
        assert_eq!(Artist::default().name, "Default Artist");
    }

    #[test]
    fn track_conversion_prefers_track_art_over_album_art() {
        let track = Track {
            art_url: Some("file:///track.png".to_string()),
            album: Some(Album {
                art_url: Some("file:///album.png".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let record = MetadataRecord::from(&track);
        assert_eq!(record.art_url.as_deref(), Some("file:///track.png"));
        assert_eq!(record.album.as_deref(), Some("Default Album"));
    }
}
