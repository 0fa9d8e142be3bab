use std::fmt;

use zbus::zvariant::OwnedObjectPath;

/// Position or duration expressed in MPRIS microseconds.
pub type Microseconds = i64;

/// Playback volume on the unit interval (0.0 = muted, 1.0 = full).
pub type Volume = f64;

/// Playback rate multiplier (1.0 = normal speed).
pub type Rate = f64;

/// D-Bus object path every MPRIS player is registered under.
pub const DBUS_PATH: &str = "/org/mpris/MediaPlayer2";

/// Root MPRIS interface name; the other interfaces suffix it.
pub const ROOT_INTERFACE: &str = "org.mpris.MediaPlayer2";

/// Reserved path announced when the track list has no current track.
pub const NO_TRACK: &str = "/org/mpris/MediaPlayer2/TrackList/NoTrack";

/// Track id used when the adapter never assigned one.
pub const DEFAULT_TRACK_ID: &str = "/default/1";

/// Mime types advertised when the adapter declares none.
pub const DEFAULT_MIME_TYPES: &[&str] = &["audio/mpeg", "application/ogg", "video/mpeg"];

/// URI schemes advertised when the adapter declares none.
pub const DEFAULT_URI_SCHEMES: &[&str] = &["file"];

/// Position of the start of a track.
pub const BEGINNING: Microseconds = 0;

/// Normal playback rate.
pub const DEFAULT_RATE: Rate = 1.0;
/// Rate reported while paused.
pub const PAUSE_RATE: Rate = 0.0;
/// Lowest rate the defaults advertise.
pub const MIN_RATE: Rate = 1.0;
/// Highest rate the defaults advertise.
pub const MAX_RATE: Rate = 1.0;

/// Muted volume.
pub const MUTE_VOLUME: Volume = 0.0;
/// Full volume.
pub const MAX_VOLUME: Volume = 1.0;

/// Playlist count reported when the adapter declares none.
pub const DEFAULT_PLAYLIST_COUNT: u32 = 1;

/// Orderings advertised when the adapter declares none.
pub const DEFAULT_ORDERINGS: &[Ordering] = &[Ordering::Alphabetical, Ordering::User];

/// Every property declared across the four MPRIS interfaces.
///
/// Each member has exactly one wire type, fixed at definition time and
/// never inferred from a value (see [`crate::wire`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Property {
    /// Currently active playlist, if any
    ActivePlaylist,
    /// Whether the player accepts control commands at all
    CanControl,
    /// Whether tracks can be added or removed
    CanEditTracks,
    /// Whether the player can skip to the next track
    CanGoNext,
    /// Whether the player can go back to the previous track
    CanGoPrevious,
    /// Whether playback can be paused
    CanPause,
    /// Whether playback can be started
    CanPlay,
    /// Whether the player can be asked to quit
    CanQuit,
    /// Whether the player can be raised to the foreground
    CanRaise,
    /// Whether the player supports seeking
    CanSeek,
    /// Whether fullscreen can be toggled
    CanSetFullscreen,
    /// Desktop entry name of the player application
    DesktopEntry,
    /// Whether the player is fullscreen
    Fullscreen,
    /// Whether a track list interface is available
    HasTrackList,
    /// Human-readable player name
    Identity,
    /// Current loop mode
    LoopStatus,
    /// Highest playback rate the player supports
    MaximumRate,
    /// Metadata of the current track
    Metadata,
    /// Lowest playback rate the player supports
    MinimumRate,
    /// Playlist orderings the player supports
    Orderings,
    /// Current playback state
    PlaybackStatus,
    /// Number of playlists available
    PlaylistCount,
    /// Current playback position
    Position,
    /// Current playback rate
    Rate,
    /// Whether shuffle is enabled
    Shuffle,
    /// Mime types the player can open
    SupportedMimeTypes,
    /// URI schemes the player can open
    SupportedUriSchemes,
    /// Track ids currently in the track list
    Tracks,
    /// Current volume level
    Volume,
}

impl Property {
    /// Property name as announced on the wire.
    pub fn name(self) -> &'static str {
        match self {
            Self::ActivePlaylist => "ActivePlaylist",
            Self::CanControl => "CanControl",
            Self::CanEditTracks => "CanEditTracks",
            Self::CanGoNext => "CanGoNext",
            Self::CanGoPrevious => "CanGoPrevious",
            Self::CanPause => "CanPause",
            Self::CanPlay => "CanPlay",
            Self::CanQuit => "CanQuit",
            Self::CanRaise => "CanRaise",
            Self::CanSeek => "CanSeek",
            Self::CanSetFullscreen => "CanSetFullscreen",
            Self::DesktopEntry => "DesktopEntry",
            Self::Fullscreen => "Fullscreen",
            Self::HasTrackList => "HasTrackList",
            Self::Identity => "Identity",
            Self::LoopStatus => "LoopStatus",
            Self::MaximumRate => "MaximumRate",
            Self::Metadata => "Metadata",
            Self::MinimumRate => "MinimumRate",
            Self::Orderings => "Orderings",
            Self::PlaybackStatus => "PlaybackStatus",
            Self::PlaylistCount => "PlaylistCount",
            Self::Position => "Position",
            Self::Rate => "Rate",
            Self::Shuffle => "Shuffle",
            Self::SupportedMimeTypes => "SupportedMimeTypes",
            Self::SupportedUriSchemes => "SupportedUriSchemes",
            Self::Tracks => "Tracks",
            Self::Volume => "Volume",
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Current playback state of the exported player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayState {
    /// Player is currently playing
    Playing,

    /// Player is paused
    Paused,

    /// Player is stopped
    #[default]
    Stopped,
}

impl PlayState {
    /// Wire representation of the state.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Playing => "Playing",
            Self::Paused => "Paused",
            Self::Stopped => "Stopped",
        }
    }
}

impl From<&str> for PlayState {
    fn from(status: &str) -> Self {
        match status {
            "Playing" => Self::Playing,
            "Paused" => Self::Paused,
            _ => Self::Stopped,
        }
    }
}

impl fmt::Display for PlayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Loop mode for track or playlist repetition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopStatus {
    /// No looping
    #[default]
    None,

    /// Loop current track
    Track,

    /// Loop entire playlist
    Playlist,
}

impl LoopStatus {
    /// Wire representation of the mode.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Track => "Track",
            Self::Playlist => "Playlist",
        }
    }
}

impl From<&str> for LoopStatus {
    fn from(status: &str) -> Self {
        match status {
            "Track" => Self::Track,
            "Playlist" => Self::Playlist,
            _ => Self::None,
        }
    }
}

impl fmt::Display for LoopStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Playlist ordering the player advertises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ordering {
    /// Alphabetical ordering by name
    Alphabetical,

    /// User-defined ordering
    User,
}

impl Ordering {
    /// Wire representation of the ordering.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Alphabetical => "Alphabetical",
            Self::User => "User",
        }
    }
}

impl From<&str> for Ordering {
    fn from(ordering: &str) -> Self {
        match ordering {
            "User" => Self::User,
            _ => Self::Alphabetical,
        }
    }
}

impl fmt::Display for Ordering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One playlist as exposed on the playlists interface.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaylistEntry {
    /// Object path identifying the playlist
    pub id: OwnedObjectPath,

    /// Human-readable playlist name
    pub name: String,

    /// URI of an icon for the playlist, empty when none exists
    pub icon: String,
}

/// The playlist currently active, when one is.
pub type ActivePlaylist = Option<PlaylistEntry>;
