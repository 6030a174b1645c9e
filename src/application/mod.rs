// Application layer - read-only reports derived from the domain entities.
// Anything that talks to the outside world (storage, transport, UI) lives
// in the calling application, not here.

pub mod reporting;

pub use reporting::*;
