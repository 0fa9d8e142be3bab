use std::collections::BTreeSet;
use std::sync::LazyLock;

use crate::error::ExportError;
use crate::interface::Interface;
use crate::types::Property;

/// Properties announced when playback reaches the end of a track.
pub const ON_ENDED_PROPS: &[Property] = &[Property::PlaybackStatus];

/// Properties announced when the volume changes.
pub const ON_VOLUME_PROPS: &[Property] = &[Property::Metadata, Property::Volume];

/// Properties announced when playback state changes wholesale.
pub const ON_PLAYBACK_PROPS: &[Property] = &[
    Property::CanControl,
    Property::MaximumRate,
    Property::Metadata,
    Property::MinimumRate,
    Property::PlaybackStatus,
    Property::Rate,
];

/// Properties announced when play/pause is toggled.
pub const ON_PLAYPAUSE_PROPS: &[Property] = &[Property::PlaybackStatus];

/// Properties announced when the current title changes.
pub const ON_TITLE_PROPS: &[Property] = &[Property::Metadata];

/// Properties announced when a playback option changes.
pub const ON_OPTION_PROPS: &[Property] = &[
    Property::CanGoNext,
    Property::CanGoPrevious,
    Property::CanPause,
    Property::CanPlay,
    Property::LoopStatus,
    Property::Shuffle,
];

/// Properties announced after a seek.
pub const ON_SEEK_PROPS: &[Property] = &[Property::CanSeek, Property::Position];

/// Properties announced when the track list changes.
pub const ON_TRACKS_PROPS: &[Property] = &[Property::CanEditTracks, Property::Tracks];

/// Properties announced when the playlist set changes.
pub const ON_PLAYLIST_PROPS: &[Property] = &[
    Property::ActivePlaylist,
    Property::Orderings,
    Property::PlaylistCount,
];

/// Properties announced when root interface state changes.
pub const ON_ROOT_PROPS: &[Property] = &[
    Property::CanQuit,
    Property::CanRaise,
    Property::CanSetFullscreen,
    Property::DesktopEntry,
    Property::Fullscreen,
    Property::HasTrackList,
    Property::Identity,
    Property::SupportedMimeTypes,
    Property::SupportedUriSchemes,
];

/// Deduplicated union of every player-interface event group.
///
/// A property appearing in several groups appears here exactly once.
static ON_PLAYER_PROPS: LazyLock<Vec<Property>> = LazyLock::new(|| {
    let union: BTreeSet<Property> = [
        ON_ENDED_PROPS,
        ON_OPTION_PROPS,
        ON_PLAYBACK_PROPS,
        ON_PLAYPAUSE_PROPS,
        ON_SEEK_PROPS,
        ON_TITLE_PROPS,
        ON_VOLUME_PROPS,
    ]
    .into_iter()
    .flatten()
    .copied()
    .collect();

    union.into_iter().collect()
});

/// A logical state-change event and the property group it announces.
///
/// Each event resolves to a fixed, duplicate-free, order-irrelevant set of
/// properties on exactly one interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateEvent {
    /// Playback reached the end of the current track
    PlaybackEnded,

    /// Volume changed
    VolumeChanged,

    /// Playback state changed (rate, status, metadata, controllability)
    PlaybackChanged,

    /// Play/pause was toggled
    PlayPauseToggled,

    /// The current title changed
    TitleChanged,

    /// A playback option (loop, shuffle, transport capability) changed
    OptionsChanged,

    /// A seek happened
    Seeked,

    /// Umbrella event announcing every player property
    PlayerRefreshed,

    /// The track list changed
    TracksChanged,

    /// The playlist set changed
    PlaylistsChanged,

    /// Root interface state changed
    RootChanged,
}

/// Every declared event, for table verification.
pub const ALL_EVENTS: &[StateEvent] = &[
    StateEvent::PlaybackEnded,
    StateEvent::VolumeChanged,
    StateEvent::PlaybackChanged,
    StateEvent::PlayPauseToggled,
    StateEvent::TitleChanged,
    StateEvent::OptionsChanged,
    StateEvent::Seeked,
    StateEvent::PlayerRefreshed,
    StateEvent::TracksChanged,
    StateEvent::PlaylistsChanged,
    StateEvent::RootChanged,
];

impl StateEvent {
    /// Interface the event's group belongs to.
    pub fn interface(self) -> Interface {
        match self {
            Self::RootChanged => Interface::Root,
            Self::TracksChanged => Interface::TrackList,
            Self::PlaylistsChanged => Interface::Playlists,
            _ => Interface::Player,
        }
    }

    /// The exact property set announced for this event.
    pub fn properties(self) -> &'static [Property] {
        match self {
            Self::PlaybackEnded => ON_ENDED_PROPS,
            Self::VolumeChanged => ON_VOLUME_PROPS,
            Self::PlaybackChanged => ON_PLAYBACK_PROPS,
            Self::PlayPauseToggled => ON_PLAYPAUSE_PROPS,
            Self::TitleChanged => ON_TITLE_PROPS,
            Self::OptionsChanged => ON_OPTION_PROPS,
            Self::Seeked => ON_SEEK_PROPS,
            Self::PlayerRefreshed => ON_PLAYER_PROPS.as_slice(),
            Self::TracksChanged => ON_TRACKS_PROPS,
            Self::PlaylistsChanged => ON_PLAYLIST_PROPS,
            Self::RootChanged => ON_ROOT_PROPS,
        }
    }
}

/// Check the static tables against each other.
///
/// Every group must only reference properties its owning interface
/// declares. Meant to run once at startup, before serving; a failure here
/// is fatal.
///
/// # Errors
///
/// Returns [`ExportError::TableInconsistency`] naming the first event and
/// property that disagree.
pub fn verify_tables() -> Result<(), ExportError> {
    for event in ALL_EVENTS {
        let descriptor = event.interface().descriptor();

        for property in event.properties() {
            if !descriptor.declares(*property) {
                return Err(ExportError::TableInconsistency(format!(
                    "event {event:?} announces {property}, which {} does not declare",
                    descriptor.interface
                )));
            }
        }
    }

    Ok(())
}
