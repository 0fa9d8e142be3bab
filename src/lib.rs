//! mpris-export - project a media player's state onto the MPRIS object model.
//!
//! This crate is the type-and-change-notification engine that sits between a
//! player adapter (which owns real playback state) and a D-Bus transport:
//!
//! - Static wire type tables mapping every protocol field to its D-Bus type
//! - Validation deciding whether a value is legal for a field before it is
//!   serialized
//! - A metadata codec turning sparse track records into `a{sv}` payloads
//! - Property groups pairing each logical state-change event with the exact
//!   set of properties that must be announced together
//! - A change notifier batching one announcement per event
//! - Interface descriptors with per-property read/write capabilities
//!
//! The transport and the adapter stay outside this crate, behind the
//! [`notify::StateAccessor`] and [`notify::ChangeAnnouncer`] traits.
//!
//! # Quick Start
//!
//! ```rust
//! use mpris_export::{MetadataRecord, encode_record};
//!
//! let record = MetadataRecord {
//!     title: Some("Song".to_string()),
//!     length: Some(120_000_000),
//!     ..Default::default()
//! };
//!
//! let wire = encode_record(&record);
//! assert!(wire.contains_key("xesam:title"));
//! ```

/// Bus-name sanitization for exported players.
pub mod bus_name;

/// Error types and result alias.
pub mod error;

/// Property group registry and state-change events.
pub mod groups;

/// Interface descriptors and the capability surface.
pub mod interface;

/// Metadata fields, track records, and the wire codec.
pub mod metadata;

/// Change notification batching.
pub mod notify;

/// Protocol constants, properties, and playback enums.
pub mod types;

/// Value admissibility rules.
pub mod validate;

/// The tagged value model at the accessor boundary.
pub mod value;

/// Wire type tables and wire-value conversion.
pub mod wire;

pub use bus_name::bus_name_for;
pub use error::{AccessorError, ExportError, InvalidReason, Result};
pub use groups::{StateEvent, verify_tables};
pub use interface::{Access, Interface, InterfaceDescriptor, PropertySpec};
pub use metadata::{
    Album, Artist, MetadataField, MetadataRecord, Track, WireMetadata, encode, encode_record,
};
pub use notify::{ChangeAnnouncer, ChangeNotifier, StateAccessor};
pub use types::{
    ActivePlaylist, LoopStatus, Microseconds, Ordering, PlayState, PlaylistEntry, Property, Rate,
    Volume,
};
pub use validate::{is_valid, require_valid, validate};
pub use value::{FieldValue, Metadata, ValueKind};
pub use wire::{WireType, internal_type_of, to_wire, wire_type_of};
