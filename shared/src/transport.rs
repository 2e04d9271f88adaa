// ObserverKey

/// Identifies one connected observer on the authority's transport.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct ObserverKey(u64);

impl ObserverKey {
    pub fn from_u64(value: u64) -> Self {
        ObserverKey(value)
    }

    pub fn to_u64(&self) -> u64 {
        self.0
    }
}

// Transport

/// The consumed transport seam.
///
/// Implementations must provide one reliable, order-preserving channel per
/// observer: payloads passed to `send_to` for the same observer arrive
/// exactly once, in send order. Replication does no application-level
/// resequencing; a transport that loses or reorders payloads breaks the
/// convergence guarantee. Sends never block on delivery.
pub trait Transport {
    /// Whether the current process holds the authority role.
    fn is_authority(&self) -> bool;

    /// Queues a payload for one observer.
    fn send_to(&mut self, observer: &ObserverKey, payload: Vec<u8>);

    /// Queues a mutation request for delivery to the authority process.
    /// Fire-and-forget: no acknowledgment is awaited.
    fn send_command(&mut self, payload: Vec<u8>);
}
