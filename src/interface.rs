use std::fmt;

use crate::error::ExportError;
use crate::types::Property;
use crate::wire::WireType;

/// The four interfaces the protocol groups its object model into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interface {
    /// `org.mpris.MediaPlayer2`
    Root,
    /// `org.mpris.MediaPlayer2.Player`
    Player,
    /// `org.mpris.MediaPlayer2.TrackList`
    TrackList,
    /// `org.mpris.MediaPlayer2.Playlists`
    Playlists,
}

impl Interface {
    /// Full D-Bus name of the interface.
    pub fn name(self) -> &'static str {
        match self {
            Self::Root => "org.mpris.MediaPlayer2",
            Self::Player => "org.mpris.MediaPlayer2.Player",
            Self::TrackList => "org.mpris.MediaPlayer2.TrackList",
            Self::Playlists => "org.mpris.MediaPlayer2.Playlists",
        }
    }

    /// Static descriptor for the interface.
    pub fn descriptor(self) -> &'static InterfaceDescriptor {
        match self {
            Self::Root => &ROOT_DESCRIPTOR,
            Self::Player => &PLAYER_DESCRIPTOR,
            Self::TrackList => &TRACK_LIST_DESCRIPTOR,
            Self::Playlists => &PLAYLISTS_DESCRIPTOR,
        }
    }
}

impl fmt::Display for Interface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Read/write capability an interface declares for a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Property can only be read
    Read,
    /// Property accepts writes
    ReadWrite,
}

/// One property as declared by an interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertySpec {
    /// The declared property
    pub property: Property,

    /// Its read/write capability
    pub access: Access,
}

impl PropertySpec {
    /// Wire type of the declared property.
    pub fn wire_type(&self) -> WireType {
        self.property.wire_type()
    }
}

/// Static description of one interface: name, properties, methods.
///
/// Consulted by the transport adapter to register the object and to reject
/// writes to read-only properties before they reach player logic. Fixed at
/// definition time, never mutated.
#[derive(Debug)]
pub struct InterfaceDescriptor {
    /// Which interface this describes
    pub interface: Interface,

    /// Properties the interface declares, with capabilities
    pub properties: &'static [PropertySpec],

    /// Method names the interface declares
    pub methods: &'static [&'static str],
}

impl InterfaceDescriptor {
    /// Look up the declaration of one property.
    pub fn property(&self, property: Property) -> Option<&PropertySpec> {
        self.properties.iter().find(|spec| spec.property == property)
    }

    /// Whether the interface declares the property at all.
    pub fn declares(&self, property: Property) -> bool {
        self.property(property).is_some()
    }

    /// Whether a declared property accepts writes.
    pub fn writable(&self, property: Property) -> bool {
        self.property(property)
            .is_some_and(|spec| spec.access == Access::ReadWrite)
    }

    /// Reject writes the capability surface does not allow.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::UndeclaredProperty`] when the interface does
    /// not declare the property, [`ExportError::ReadOnlyProperty`] when it
    /// declares it read-only.
    pub fn ensure_writable(&self, property: Property) -> Result<(), ExportError> {
        match self.property(property) {
            None => Err(ExportError::UndeclaredProperty {
                property,
                interface: self.interface,
            }),
            Some(spec) if spec.access == Access::Read => Err(ExportError::ReadOnlyProperty {
                property,
                interface: self.interface,
            }),
            Some(_) => Ok(()),
        }
    }
}

const fn read(property: Property) -> PropertySpec {
    PropertySpec {
        property,
        access: Access::Read,
    }
}

const fn read_write(property: Property) -> PropertySpec {
    PropertySpec {
        property,
        access: Access::ReadWrite,
    }
}

/// Descriptor of the root (session) interface.
pub static ROOT_DESCRIPTOR: InterfaceDescriptor = InterfaceDescriptor {
    interface: Interface::Root,
    properties: &[
        read(Property::CanQuit),
        read(Property::CanRaise),
        read_write(Property::Fullscreen),
        read(Property::CanSetFullscreen),
        read(Property::HasTrackList),
        read(Property::Identity),
        read(Property::DesktopEntry),
        read(Property::SupportedUriSchemes),
        read(Property::SupportedMimeTypes),
    ],
    methods: &["Raise", "Quit"],
};

/// Descriptor of the player interface.
pub static PLAYER_DESCRIPTOR: InterfaceDescriptor = InterfaceDescriptor {
    interface: Interface::Player,
    properties: &[
        read(Property::PlaybackStatus),
        read_write(Property::LoopStatus),
        read_write(Property::Rate),
        read_write(Property::Shuffle),
        read(Property::Metadata),
        read_write(Property::Volume),
        read(Property::Position),
        read(Property::MinimumRate),
        read(Property::MaximumRate),
        read(Property::CanGoNext),
        read(Property::CanGoPrevious),
        read(Property::CanPlay),
        read(Property::CanPause),
        read(Property::CanSeek),
        read(Property::CanControl),
    ],
    methods: &[
        "Next",
        "Previous",
        "Pause",
        "PlayPause",
        "Stop",
        "Play",
        "Seek",
        "SetPosition",
        "OpenUri",
    ],
};

/// Descriptor of the track list interface.
pub static TRACK_LIST_DESCRIPTOR: InterfaceDescriptor = InterfaceDescriptor {
    interface: Interface::TrackList,
    properties: &[read(Property::Tracks), read(Property::CanEditTracks)],
    methods: &["GetTracksMetadata", "AddTrack", "RemoveTrack", "GoTo"],
};

/// Descriptor of the playlists interface.
pub static PLAYLISTS_DESCRIPTOR: InterfaceDescriptor = InterfaceDescriptor {
    interface: Interface::Playlists,
    properties: &[
        read(Property::PlaylistCount),
        read(Property::Orderings),
        read(Property::ActivePlaylist),
    ],
    methods: &["ActivatePlaylist", "GetPlaylists"],
};

/// All interface descriptors, for registration walks.
pub static ALL_DESCRIPTORS: [&InterfaceDescriptor; 4] = [
    &ROOT_DESCRIPTOR,
    &PLAYER_DESCRIPTOR,
    &TRACK_LIST_DESCRIPTOR,
    &PLAYLISTS_DESCRIPTOR,
];
