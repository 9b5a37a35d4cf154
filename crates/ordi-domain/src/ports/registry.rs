//! Registration storage port

use crate::error::Result;
use crate::value_objects::{RegistrationEntry, Sequence, ServiceKey};

/// Container-side storage of registration entries
///
/// Implementations must keep every entry of one abstraction retrievable in
/// the order it was registered. Registration happens before the container is
/// built and is single-threaded, hence `&mut self`.
pub trait ServiceRegistry {
    /// Reserve the next sequence number for `abstraction`
    fn next_sequence(&mut self, abstraction: ServiceKey) -> Sequence;

    /// Store a producer under its abstraction
    ///
    /// Rejects an entry whose sequence does not strictly follow the last
    /// sequence stored for the same abstraction.
    fn register_producer(&mut self, entry: RegistrationEntry) -> Result<()>;

    /// Whether at least one producer is stored under `abstraction`
    fn is_registered(&self, abstraction: ServiceKey) -> bool;
}
