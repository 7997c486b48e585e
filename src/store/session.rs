use crate::models::{Measurement, Station};
use crate::store::Dataset;
use tracing::trace;

/// A scoped read-only view of a [`Dataset`].
///
/// Released in `Drop`, so every exit path of a request (including `?` and
/// panics) gives the session back.
pub struct Session<'a> {
    dataset: &'a Dataset,
    id: u64,
}

impl<'a> Session<'a> {
    pub(crate) fn new(dataset: &'a Dataset, id: u64) -> Self {
        trace!(session = id, "Session opened");
        Self { dataset, id }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn stations(&self) -> &'a [Station] {
        self.dataset.stations()
    }

    pub fn measurements(&self) -> &'a [Measurement] {
        self.dataset.measurements()
    }
}

impl Drop for Session<'_> {
    fn drop(&mut self) {
        self.dataset.release_session();
        trace!(session = self.id, "Session closed");
    }
}
