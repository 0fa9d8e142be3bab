use std::collections::HashMap;

use tracing::{debug, warn};
use zbus::zvariant::Value;

use crate::error::{AccessorError, ExportError};
use crate::groups::StateEvent;
use crate::types::Property;
use crate::value::FieldValue;
use crate::wire::to_wire;

/// Read access to the live player state, one property at a time.
///
/// Implemented by the adapter that owns real playback state. The accessor
/// supplies any synchronization it needs; reads for one batch may
/// interleave with concurrent mutation, and the announced snapshot is
/// accepted as eventually consistent.
pub trait StateAccessor {
    /// Read the current value of one property.
    ///
    /// Return [`FieldValue::Absent`] for a property that merely has no
    /// current value; errors are for genuine read failures.
    ///
    /// # Errors
    ///
    /// Returns [`AccessorError`] when the read itself fails.
    fn get(&self, property: Property) -> Result<FieldValue, AccessorError>;

    /// Read every property in a group, omitting failed reads.
    fn get_all(&self, properties: &[Property]) -> HashMap<Property, FieldValue> {
        properties
            .iter()
            .filter_map(|property| match self.get(*property) {
                Ok(value) => Some((*property, value)),
                Err(source) => {
                    let error = ExportError::AccessorRead {
                        property: *property,
                        source,
                    };
                    warn!(%error, "state accessor read failed");
                    None
                }
            })
            .collect()
    }
}

/// Transport-side sink for batched change announcements.
///
/// The engine always passes an empty invalidated set; the parameter is
/// retained for protocol compatibility.
pub trait ChangeAnnouncer {
    /// Emit one `PropertiesChanged`-style announcement.
    ///
    /// # Errors
    ///
    /// Returns a transport error when emission fails.
    fn announce_changed(
        &self,
        interface: &str,
        changed: HashMap<Property, Value<'static>>,
        invalidated: &[Property],
    ) -> zbus::Result<()>;
}

/// Batches the property group of a state-change event into one announcement.
#[derive(Debug)]
pub struct ChangeNotifier<A> {
    announcer: A,
}

impl<A: ChangeAnnouncer> ChangeNotifier<A> {
    /// Wrap a transport announcer.
    pub fn new(announcer: A) -> Self {
        Self { announcer }
    }

    /// The wrapped announcer.
    pub fn announcer(&self) -> &A {
        &self.announcer
    }

    /// Announce the property group of `event` from current state.
    ///
    /// Each property in the group is read through the accessor; a failed
    /// read is logged and that property omitted, never failing the batch.
    /// Absent values and values that do not fit their declared wire type
    /// are omitted the same way. Exactly one announcement is made per
    /// call, whatever the group size.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Announce`] when the transport rejects the
    /// batched announcement.
    pub fn notify<S: StateAccessor>(
        &self,
        event: StateEvent,
        state: &S,
    ) -> Result<(), ExportError> {
        let mut changed = HashMap::new();

        for property in event.properties() {
            let value = match state.get(*property) {
                Ok(value) => value,
                Err(source) => {
                    let error = ExportError::AccessorRead {
                        property: *property,
                        source,
                    };
                    warn!(%error, "omitting property from batch");
                    continue;
                }
            };

            if value.is_absent() {
                debug!(property = %property, "property has no current value");
                continue;
            }

            match to_wire(&value, property.wire_type()) {
                Some(wire_value) => {
                    changed.insert(*property, wire_value);
                }
                None => {
                    debug!(property = %property, "value does not fit its declared wire type");
                }
            }
        }

        self.announcer
            .announce_changed(event.interface().name(), changed, &[])?;

        Ok(())
    }
}
