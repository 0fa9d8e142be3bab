use std::collections::HashMap;

use zbus::zvariant::OwnedObjectPath;

use crate::types::{LoopStatus, Ordering, PlayState, PlaylistEntry};

/// Sparse track metadata keyed by wire key (`mpris:trackid`, `xesam:title`, …).
pub type Metadata = HashMap<String, FieldValue>;

/// A loosely-typed value read from the player state, before wire conversion.
///
/// This is the tagged form of the values a state accessor hands the engine.
/// [`FieldValue::Absent`] is the designated "no value" sentinel, distinct
/// from a present-but-empty value. List variants carry optional elements so
/// a list that holds nothing but absent entries stays representable; such
/// lists are rejected by the validator rather than emitted.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// No value at all
    Absent,
    /// Boolean value
    Bool(bool),
    /// String value
    Str(String),
    /// Floating point value
    Double(f64),
    /// Signed 32-bit value
    Int32(i32),
    /// Signed 64-bit value
    Int64(i64),
    /// Unsigned 32-bit value
    UInt32(u32),
    /// Unsigned 64-bit value
    UInt64(u64),
    /// D-Bus object path
    ObjPath(OwnedObjectPath),
    /// List of strings, possibly with absent elements
    StrList(Vec<Option<String>>),
    /// List of object paths, possibly with absent elements
    ObjPathList(Vec<Option<OwnedObjectPath>>),
    /// Nested sparse metadata mapping
    Metadata(Metadata),
    /// One playlist entry
    Playlist(PlaylistEntry),
    /// A playlist entry that may be absent (the `ActivePlaylist` shape)
    MaybePlaylist(Option<PlaylistEntry>),
    /// List of playlist entries
    Playlists(Vec<PlaylistEntry>),
}

/// Runtime-type descriptor for a [`FieldValue`], one tag per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// The absent sentinel
    Absent,
    /// Boolean
    Bool,
    /// String
    Str,
    /// Floating point
    Double,
    /// Signed 32-bit integer
    Int32,
    /// Signed 64-bit integer
    Int64,
    /// Unsigned 32-bit integer
    UInt32,
    /// Unsigned 64-bit integer
    UInt64,
    /// Object path
    ObjPath,
    /// String list
    StrList,
    /// Object path list
    ObjPathList,
    /// Nested metadata mapping
    Metadata,
    /// Playlist entry
    Playlist,
    /// Optional playlist entry
    MaybePlaylist,
    /// Playlist entry list
    Playlists,
}

impl FieldValue {
    /// Runtime-type tag of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Absent => ValueKind::Absent,
            Self::Bool(_) => ValueKind::Bool,
            Self::Str(_) => ValueKind::Str,
            Self::Double(_) => ValueKind::Double,
            Self::Int32(_) => ValueKind::Int32,
            Self::Int64(_) => ValueKind::Int64,
            Self::UInt32(_) => ValueKind::UInt32,
            Self::UInt64(_) => ValueKind::UInt64,
            Self::ObjPath(_) => ValueKind::ObjPath,
            Self::StrList(_) => ValueKind::StrList,
            Self::ObjPathList(_) => ValueKind::ObjPathList,
            Self::Metadata(_) => ValueKind::Metadata,
            Self::Playlist(_) => ValueKind::Playlist,
            Self::MaybePlaylist(_) => ValueKind::MaybePlaylist,
            Self::Playlists(_) => ValueKind::Playlists,
        }
    }

    /// Whether this value is the absent sentinel.
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Int32(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Int64(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        Self::UInt32(value)
    }
}

impl From<u64> for FieldValue {
    fn from(value: u64) -> Self {
        Self::UInt64(value)
    }
}

impl From<OwnedObjectPath> for FieldValue {
    fn from(value: OwnedObjectPath) -> Self {
        Self::ObjPath(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        Self::StrList(value.into_iter().map(Some).collect())
    }
}

impl From<Vec<OwnedObjectPath>> for FieldValue {
    fn from(value: Vec<OwnedObjectPath>) -> Self {
        Self::ObjPathList(value.into_iter().map(Some).collect())
    }
}

impl From<Metadata> for FieldValue {
    fn from(value: Metadata) -> Self {
        Self::Metadata(value)
    }
}

impl From<PlaylistEntry> for FieldValue {
    fn from(value: PlaylistEntry) -> Self {
        Self::Playlist(value)
    }
}

impl From<Option<PlaylistEntry>> for FieldValue {
    fn from(value: Option<PlaylistEntry>) -> Self {
        Self::MaybePlaylist(value)
    }
}

impl From<Vec<PlaylistEntry>> for FieldValue {
    fn from(value: Vec<PlaylistEntry>) -> Self {
        Self::Playlists(value)
    }
}

impl From<PlayState> for FieldValue {
    fn from(value: PlayState) -> Self {
        Self::Str(value.as_str().to_string())
    }
}

impl From<LoopStatus> for FieldValue {
    fn from(value: LoopStatus) -> Self {
        Self::Str(value.as_str().to_string())
    }
}

impl From<Ordering> for FieldValue {
    fn from(value: Ordering) -> Self {
        Self::Str(value.as_str().to_string())
    }
}

impl From<Vec<Ordering>> for FieldValue {
    fn from(value: Vec<Ordering>) -> Self {
        Self::StrList(
            value
                .into_iter()
                .map(|ordering| Some(ordering.as_str().to_string()))
                .collect(),
        )
    }
}
