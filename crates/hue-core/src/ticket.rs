#![forbid(unsafe_code)]

//! Generation tickets for palette requests.
//!
//! Every submission takes a fresh [`RequestTicket`] from the
//! [`RequestSequencer`], which invalidates all earlier tickets. A response is
//! applied only if its ticket is still current, so a slow early response can
//! never overwrite the palette of a later request.

/// Identifies one palette request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestTicket(u64);

impl RequestTicket {
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Issues monotonically increasing tickets and remembers the latest.
#[derive(Debug, Clone, Default)]
pub struct RequestSequencer {
    latest: u64,
}

impl RequestSequencer {
    #[must_use]
    pub const fn new() -> Self {
        Self { latest: 0 }
    }

    /// Issue a new ticket, superseding every ticket issued before it.
    pub fn issue(&mut self) -> RequestTicket {
        self.latest += 1;
        RequestTicket(self.latest)
    }

    #[must_use]
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest != 0 && ticket.0 == self.latest
    }

    #[must_use]
    pub fn latest(&self) -> Option<RequestTicket> {
        (self.latest != 0).then_some(RequestTicket(self.latest))
    }
}
