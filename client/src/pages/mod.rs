//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page creates the state its components bind to and passes it down as
//! props; the two pages share nothing but the notice channel.

pub mod classify;
pub mod report;
