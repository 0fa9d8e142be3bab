//! Integration tests for the projection engine end to end.

#![cfg_attr(test, allow(clippy::unwrap_used))]

use std::collections::{BTreeSet, HashMap};
use std::sync::Mutex;

use mpris_export::{
    AccessorError, ChangeAnnouncer, ChangeNotifier, FieldValue, LoopStatus, Metadata,
    MetadataRecord, Ordering, PlayState, PlaylistEntry, Property, StateAccessor, StateEvent,
    encode_record, verify_tables, wire_type_of,
};
use zbus::zvariant::{ObjectPath, Value};

/// A player state frozen at interesting values.
struct FakePlayer {
    /// Properties whose reads should fail outright.
    broken: Vec<Property>,
}

impl FakePlayer {
    fn new() -> Self {
        Self { broken: Vec::new() }
    }

    fn with_broken(broken: Vec<Property>) -> Self {
        Self { broken }
    }

    fn active_playlist() -> PlaylistEntry {
        PlaylistEntry {
            id: ObjectPath::from_static_str_unchecked("/p/favourites").into(),
            name: "Favourites".to_string(),
            icon: String::new(),
        }
    }

    fn metadata() -> Metadata {
        let record = MetadataRecord {
            title: Some("Song".to_string()),
            length: Some(120_000_000),
            track_id: ObjectPath::from_static_str_unchecked("/t/1").into(),
            ..Default::default()
        };
        record.to_map()
    }
}

impl StateAccessor for FakePlayer {
    fn get(&self, property: Property) -> Result<FieldValue, AccessorError> {
        if self.broken.contains(&property) {
            return Err(AccessorError::new("simulated backend failure"));
        }

        Ok(match property {
            Property::PlaybackStatus => FieldValue::from(PlayState::Playing),
            Property::LoopStatus => FieldValue::from(LoopStatus::Track),
            Property::Rate | Property::MinimumRate | Property::MaximumRate => {
                FieldValue::from(1.0)
            }
            Property::Volume => FieldValue::from(0.5),
            Property::Position => FieldValue::from(42_000_000_i64),
            Property::Metadata => FieldValue::Metadata(Self::metadata()),
            Property::CanControl
            | Property::CanGoNext
            | Property::CanGoPrevious
            | Property::CanPause
            | Property::CanPlay
            | Property::CanSeek => FieldValue::from(true),
            Property::Shuffle => FieldValue::from(false),
            Property::ActivePlaylist => FieldValue::from(Some(Self::active_playlist())),
            Property::Orderings => {
                FieldValue::from(vec![Ordering::Alphabetical, Ordering::User])
            }
            Property::PlaylistCount => FieldValue::from(2_u32),
            _ => FieldValue::Absent,
        })
    }
}

#[derive(Default)]
struct RecordingAnnouncer {
    batches: Mutex<Vec<(String, HashMap<Property, Value<'static>>)>>,
}

impl RecordingAnnouncer {
    fn take(&self) -> Vec<(String, HashMap<Property, Value<'static>>)> {
        std::mem::take(&mut *self.batches.lock().unwrap())
    }
}

impl ChangeAnnouncer for RecordingAnnouncer {
    fn announce_changed(
        &self,
        interface: &str,
        changed: HashMap<Property, Value<'static>>,
        invalidated: &[Property],
    ) -> zbus::Result<()> {
        assert!(invalidated.is_empty(), "engine must never invalidate");
        self.batches
            .lock()
            .unwrap()
            .push((interface.to_string(), changed));
        Ok(())
    }
}

mod tables {
    use super::*;

    #[test]
    fn startup_verification_passes() {
        verify_tables().unwrap();
    }

    #[test]
    fn wire_type_lookup_is_idempotent() {
        let first = wire_type_of("mpris:length").unwrap();
        let second = wire_type_of("mpris:length").unwrap();
        assert_eq!(first, second);
    }
}

mod codec {
    use super::*;

    #[test]
    fn populated_fields_round_trip_without_gain_or_loss() {
        let wire = encode_record(&MetadataRecord {
            title: Some("Song".to_string()),
            length: Some(120_000_000),
            track_id: ObjectPath::from_static_str_unchecked("/t/1").into(),
            ..Default::default()
        });

        let mut keys: Vec<&str> = wire.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["mpris:length", "mpris:trackid", "xesam:title"]);
    }

    #[test]
    fn default_record_yields_only_the_default_track_id() {
        let wire = encode_record(&MetadataRecord::default());

        assert_eq!(wire.len(), 1);
        let track_id = wire.get("mpris:trackid").unwrap();
        assert_eq!(
            *track_id,
            Value::ObjectPath(ObjectPath::from_static_str_unchecked("/default/1"))
        );
    }
}

mod notification {
    use super::*;

    #[test]
    fn seek_event_announces_exactly_its_group() {
        let notifier = ChangeNotifier::new(RecordingAnnouncer::default());

        notifier.notify(StateEvent::Seeked, &FakePlayer::new()).unwrap();

        let batches = notifier.announcer().take();
        assert_eq!(batches.len(), 1);

        let (interface, changed) = &batches[0];
        assert_eq!(interface, "org.mpris.MediaPlayer2.Player");

        let announced: BTreeSet<Property> = changed.keys().copied().collect();
        let expected: BTreeSet<Property> =
            [Property::CanSeek, Property::Position].into_iter().collect();
        assert_eq!(announced, expected);
    }

    #[test]
    fn failed_reads_degrade_to_a_partial_batch() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("debug"))
            .with_test_writer()
            .try_init();

        let notifier = ChangeNotifier::new(RecordingAnnouncer::default());
        let player = FakePlayer::with_broken(vec![Property::CanSeek]);

        notifier.notify(StateEvent::Seeked, &player).unwrap();

        let batches = notifier.announcer().take();
        assert_eq!(batches.len(), 1);

        let (_, changed) = &batches[0];
        assert_eq!(changed.len(), 1);
        assert_eq!(
            changed.get(&Property::Position),
            Some(&Value::from(42_000_000_i64))
        );
    }

    #[test]
    fn metadata_bearing_events_encode_through_the_codec() {
        let notifier = ChangeNotifier::new(RecordingAnnouncer::default());

        notifier
            .notify(StateEvent::TitleChanged, &FakePlayer::new())
            .unwrap();

        let batches = notifier.announcer().take();
        let (_, changed) = &batches[0];

        let metadata = changed.get(&Property::Metadata).unwrap();
        assert_eq!(metadata.value_signature().to_string(), "a{sv}");
    }

    #[test]
    fn umbrella_event_batches_once_for_the_whole_surface() {
        let notifier = ChangeNotifier::new(RecordingAnnouncer::default());

        notifier
            .notify(StateEvent::PlayerRefreshed, &FakePlayer::new())
            .unwrap();

        let batches = notifier.announcer().take();
        assert_eq!(batches.len(), 1);

        let (_, changed) = &batches[0];
        assert!(changed.contains_key(&Property::PlaybackStatus));
        assert!(changed.contains_key(&Property::Volume));
        assert!(changed.contains_key(&Property::Metadata));
    }

    #[test]
    fn options_event_announces_string_typed_modes() {
        let notifier = ChangeNotifier::new(RecordingAnnouncer::default());

        notifier
            .notify(StateEvent::OptionsChanged, &FakePlayer::new())
            .unwrap();

        let batches = notifier.announcer().take();
        let (_, changed) = &batches[0];

        assert_eq!(
            changed.get(&Property::LoopStatus),
            Some(&Value::from("Track".to_string()))
        );
        assert_eq!(changed.get(&Property::Shuffle), Some(&Value::from(false)));
    }

    #[test]
    fn playlists_event_announces_playlist_typed_values() {
        let notifier = ChangeNotifier::new(RecordingAnnouncer::default());

        notifier
            .notify(StateEvent::PlaylistsChanged, &FakePlayer::new())
            .unwrap();

        let batches = notifier.announcer().take();
        assert_eq!(batches.len(), 1);

        let (interface, changed) = &batches[0];
        assert_eq!(interface, "org.mpris.MediaPlayer2.Playlists");

        let active = changed.get(&Property::ActivePlaylist).unwrap();
        assert_eq!(active.value_signature().to_string(), "(b(oss))");

        let orderings = changed.get(&Property::Orderings).unwrap();
        assert_eq!(
            *orderings,
            Value::from(vec!["Alphabetical".to_string(), "User".to_string()])
        );

        assert_eq!(changed.get(&Property::PlaylistCount), Some(&Value::U32(2)));
    }

    #[test]
    fn root_event_targets_the_root_interface() {
        let notifier = ChangeNotifier::new(RecordingAnnouncer::default());

        notifier
            .notify(StateEvent::RootChanged, &FakePlayer::new())
            .unwrap();

        let batches = notifier.announcer().take();
        let (interface, changed) = &batches[0];

        assert_eq!(interface, "org.mpris.MediaPlayer2");
        // FakePlayer has no root state, so the batch is empty but still
        // announced exactly once.
        assert!(changed.is_empty());
    }
}
