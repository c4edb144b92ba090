//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Form and upload state are plain `intake` types held in component-owned
//! signals. Only the notice channel is shared through context.

pub mod notices;
