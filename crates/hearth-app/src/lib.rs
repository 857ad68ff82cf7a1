//! Application layer for Hearth
//!
//! Seams between the pure rendering core and its collaborators: typed
//! transport events in, serialized surface updates out. The transport and
//! the concrete terminal are black boxes on either side.
//!
//! # Components
//!
//! - [`ChatEvent`]: typed events pushed by the transport
//! - [`Surface`]: named-region terminal surface abstraction
//! - [`Dispatcher`]: single-writer update stream over any [`Surface`]
//! - [`ChatView`]: turns events into formatted surface updates

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod dispatcher;
mod event;
mod surface;
mod view;

pub use dispatcher::{Dispatcher, Update};
pub use event::ChatEvent;
pub use surface::{Region, Surface, SurfaceError};
pub use view::ChatView;
