//! Output side of the emitter: a single byte-stream sink and its TTY check.

mod sink;

pub use sink::Sink;
