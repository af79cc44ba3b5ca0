//! Session state: the process-wide authentication record and its lifecycle.
//!
//! DESIGN
//! ======
//! Split in three so each piece is testable alone: `session` is a plain
//! state container with pure transitions, `store` is the persisted
//! token-slot seam, and `manager` drives the async auth flows that connect
//! the two to the auth service.

pub mod manager;
pub mod session;
pub mod store;
