//! Rendering helpers kept apart from the emitter: styling and timestamps are pure and
//! testable without touching process-wide state.

pub mod style;
pub mod timestamp;

pub use style::{StyleFn, Styler};
pub use timestamp::Clock;
