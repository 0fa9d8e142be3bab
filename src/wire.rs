use zbus::zvariant::{Array, Dict, ObjectPath, Signature, Structure, Value};

use crate::error::ExportError;
use crate::metadata::{MetadataField, encode};
use crate::types::{PlaylistEntry, Property};
use crate::value::{FieldValue, ValueKind};

/// Wire-level type of a protocol field.
///
/// Scalar tags form the closed base set; composite types are built by
/// composition rather than by pasting signature fragments together. Each
/// declared field maps to exactly one of these, fixed at definition time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireType {
    /// D-Bus `b`
    Boolean,
    /// D-Bus `s`
    String,
    /// D-Bus `d`
    Double,
    /// D-Bus `i`
    Int32,
    /// D-Bus `x`
    Int64,
    /// D-Bus `u`
    UInt32,
    /// D-Bus `t`
    UInt64,
    /// D-Bus `o`
    ObjectPath,
    /// D-Bus `v`
    Variant,
    /// D-Bus `aX` for an element type `X`
    Array(&'static WireType),
    /// D-Bus `{KV}` dictionary entry
    DictEntry(&'static WireType, &'static WireType),
    /// D-Bus `(...)` structure
    Struct(&'static [WireType]),
}

/// Array of strings (`as`).
pub const STRING_ARRAY: WireType = WireType::Array(&WireType::String);

/// Array of object paths (`ao`).
pub const OBJ_ARRAY: WireType = WireType::Array(&WireType::ObjectPath);

/// One metadata entry (`{sv}`).
pub const METADATA_ENTRY: WireType = WireType::DictEntry(&WireType::String, &WireType::Variant);

/// Metadata mapping (`a{sv}`).
pub const METADATA: WireType = WireType::Array(&METADATA_ENTRY);

/// One playlist (`(oss)`).
pub const PLAYLIST: WireType =
    WireType::Struct(&[WireType::ObjectPath, WireType::String, WireType::String]);

/// Array of playlists (`a(oss)`).
pub const PLAYLISTS: WireType = WireType::Array(&PLAYLIST);

/// A playlist that may be absent (`(b(oss))`).
pub const MAYBE_PLAYLIST: WireType = WireType::Struct(&[WireType::Boolean, PLAYLIST]);

impl WireType {
    /// Render the canonical D-Bus signature for this type.
    pub fn signature(&self) -> String {
        match self {
            Self::Boolean => "b".to_string(),
            Self::String => "s".to_string(),
            Self::Double => "d".to_string(),
            Self::Int32 => "i".to_string(),
            Self::Int64 => "x".to_string(),
            Self::UInt32 => "u".to_string(),
            Self::UInt64 => "t".to_string(),
            Self::ObjectPath => "o".to_string(),
            Self::Variant => "v".to_string(),
            Self::Array(inner) => format!("a{}", inner.signature()),
            Self::DictEntry(key, value) => {
                format!("{{{}{}}}", key.signature(), value.signature())
            }
            Self::Struct(fields) => {
                let inner: String = fields.iter().map(Self::signature).collect();
                format!("({inner})")
            }
        }
    }
}

impl Property {
    /// Wire type declared for this property.
    pub fn wire_type(self) -> WireType {
        match self {
            Self::ActivePlaylist => MAYBE_PLAYLIST,
            Self::CanControl
            | Self::CanEditTracks
            | Self::CanGoNext
            | Self::CanGoPrevious
            | Self::CanPause
            | Self::CanPlay
            | Self::CanQuit
            | Self::CanRaise
            | Self::CanSeek
            | Self::CanSetFullscreen
            | Self::Fullscreen
            | Self::HasTrackList
            | Self::Shuffle => WireType::Boolean,
            Self::DesktopEntry | Self::Identity | Self::LoopStatus | Self::PlaybackStatus => {
                WireType::String
            }
            Self::MaximumRate | Self::MinimumRate | Self::Rate | Self::Volume => WireType::Double,
            Self::Metadata => METADATA,
            Self::Orderings | Self::SupportedMimeTypes | Self::SupportedUriSchemes => STRING_ARRAY,
            Self::PlaylistCount => WireType::UInt32,
            Self::Position => WireType::Int64,
            Self::Tracks => OBJ_ARRAY,
        }
    }
}

/// Look up the wire type declared for a metadata wire key.
///
/// Total over the declared metadata fields.
///
/// # Errors
///
/// Returns [`ExportError::UnknownField`] for any undeclared key.
pub fn wire_type_of(key: &str) -> Result<WireType, ExportError> {
    MetadataField::from_key(key)
        .map(MetadataField::wire_type)
        .ok_or_else(|| ExportError::UnknownField(key.to_string()))
}

/// Internal runtime type a value must have to serialize as `ty`.
///
/// Returns `None` for compositions no declared field uses.
pub fn internal_type_of(ty: &WireType) -> Option<ValueKind> {
    match *ty {
        WireType::Boolean => Some(ValueKind::Bool),
        WireType::String => Some(ValueKind::Str),
        WireType::Double => Some(ValueKind::Double),
        WireType::Int32 => Some(ValueKind::Int32),
        WireType::Int64 => Some(ValueKind::Int64),
        WireType::UInt32 => Some(ValueKind::UInt32),
        WireType::UInt64 => Some(ValueKind::UInt64),
        WireType::ObjectPath => Some(ValueKind::ObjPath),
        ty if ty == STRING_ARRAY => Some(ValueKind::StrList),
        ty if ty == OBJ_ARRAY => Some(ValueKind::ObjPathList),
        ty if ty == METADATA => Some(ValueKind::Metadata),
        ty if ty == PLAYLIST => Some(ValueKind::Playlist),
        ty if ty == MAYBE_PLAYLIST => Some(ValueKind::MaybePlaylist),
        ty if ty == PLAYLISTS => Some(ValueKind::Playlists),
        _ => None,
    }
}

/// Convert a field value to its wire representation under `ty`.
///
/// Conversion is exact per type tag; a mismatch (or the absent sentinel)
/// yields `None` and the caller drops the field. Absent elements inside
/// list values are skipped.
pub fn to_wire(value: &FieldValue, ty: WireType) -> Option<Value<'static>> {
    match (value, ty) {
        (FieldValue::Bool(value), WireType::Boolean) => Some(Value::from(*value)),
        (FieldValue::Str(value), WireType::String) => Some(Value::from(value.clone())),
        (FieldValue::Double(value), WireType::Double) => Some(Value::from(*value)),
        (FieldValue::Int32(value), WireType::Int32) => Some(Value::from(*value)),
        (FieldValue::Int64(value), WireType::Int64) => Some(Value::from(*value)),
        (FieldValue::UInt32(value), WireType::UInt32) => Some(Value::from(*value)),
        (FieldValue::UInt64(value), WireType::UInt64) => Some(Value::from(*value)),
        (FieldValue::ObjPath(path), WireType::ObjectPath) => {
            Some(Value::ObjectPath(path.clone().into_inner()))
        }
        (FieldValue::StrList(items), ty) if ty == STRING_ARRAY => {
            let present: Vec<String> = items.iter().flatten().cloned().collect();
            Some(Value::from(present))
        }
        (FieldValue::ObjPathList(items), ty) if ty == OBJ_ARRAY => {
            let present: Vec<ObjectPath<'static>> = items
                .iter()
                .flatten()
                .map(|path| path.clone().into_inner())
                .collect();
            Some(Value::from(present))
        }
        (FieldValue::Metadata(metadata), ty) if ty == METADATA => {
            Some(Value::Dict(Dict::from(encode(metadata))))
        }
        (FieldValue::Playlist(entry), ty) if ty == PLAYLIST => Some(playlist_value(entry)),
        (FieldValue::MaybePlaylist(entry), ty) if ty == MAYBE_PLAYLIST => {
            Some(maybe_playlist_value(entry.as_ref()))
        }
        (FieldValue::Playlists(entries), ty) if ty == PLAYLISTS => playlists_value(entries),
        _ => None,
    }
}

fn playlist_fields(entry: &PlaylistEntry) -> (ObjectPath<'static>, String, String) {
    (
        entry.id.clone().into_inner(),
        entry.name.clone(),
        entry.icon.clone(),
    )
}

fn playlist_value(entry: &PlaylistEntry) -> Value<'static> {
    Value::Structure(Structure::from(playlist_fields(entry)))
}

// Built from concrete field types; a Value field would serialize as a
// variant and turn the signature into (bv).
fn maybe_playlist_value(entry: Option<&PlaylistEntry>) -> Value<'static> {
    match entry {
        Some(entry) => Value::from((true, playlist_fields(entry))),
        None => Value::from((
            false,
            (
                ObjectPath::from_static_str_unchecked("/"),
                String::new(),
                String::new(),
            ),
        )),
    }
}

fn playlists_value(entries: &[PlaylistEntry]) -> Option<Value<'static>> {
    let signature = Signature::try_from(PLAYLIST.signature().as_str()).ok()?;
    let mut array = Array::new(&signature);

    for entry in entries {
        array.append(playlist_value(entry)).ok()?;
    }

    Some(Value::Array(array))
}
