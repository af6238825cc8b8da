//! UCI (Universal Chess Interface) front end
//!
//! A minimal subset: enough for a GUI or match runner to set up positions
//! and ask for a move at a fixed depth.

pub mod protocol;

pub use protocol::UCI;
