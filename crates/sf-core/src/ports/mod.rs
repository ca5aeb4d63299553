//! Port interfaces for the application layer
//!
//! Ports define the contract between the form use cases and the outside
//! world: the timer service, the pseudo-random source and the presentation
//! surface. The engine only ever talks to these traits, so the same core runs
//! under a terminal driver, a GUI binding or a paused test clock.

mod presenter;
mod random;
mod timer;

pub use presenter::FormPresenterPort;
pub use random::{RandomPort, RandomPortExt};
pub use timer::TimerPort;
