//! Serialized surface updates.
//!
//! All display mutations flow through one mpsc channel drained by a single
//! task that owns the surface. Concurrent producers submit fire-and-forget
//! closures; the drain task applies them one at a time in submission order,
//! so callers never lock the surface.

use tokio::{sync::mpsc, task::JoinHandle};

use crate::surface::{Surface, SurfaceError};

/// A queued surface mutation.
pub type Update = Box<dyn FnOnce(&mut dyn Surface) -> Result<(), SurfaceError> + Send>;

/// Handle for submitting surface updates.
#[derive(Clone)]
pub struct Dispatcher {
    tx: mpsc::UnboundedSender<Update>,
}

impl Dispatcher {
    /// Spawn the drain task owning `surface`.
    ///
    /// The task applies queued updates until every `Dispatcher` clone is
    /// dropped, then returns the surface.
    pub fn spawn<S>(surface: S) -> (Self, JoinHandle<S>)
    where
        S: Surface + 'static,
    {
        let (tx, mut rx) = mpsc::unbounded_channel::<Update>();

        let handle = tokio::spawn(async move {
            let mut surface = surface;
            while let Some(update) = rx.recv().await {
                if let Err(error) = update(&mut surface) {
                    tracing::warn!("dropping surface update: {error}");
                }
            }
            surface
        });

        (Self { tx }, handle)
    }

    /// Queue one surface update. Never blocks.
    ///
    /// Updates are applied strictly in submission order; a failing update
    /// is logged and dropped without disturbing the ones behind it.
    pub fn submit<F>(&self, update: F)
    where
        F: FnOnce(&mut dyn Surface) -> Result<(), SurfaceError> + Send + 'static,
    {
        if self.tx.send(Box::new(update)).is_err() {
            tracing::warn!("surface update dropped: render task stopped");
        }
    }
}
