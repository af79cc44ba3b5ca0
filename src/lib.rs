//! # adminboard
//!
//! Client-side core for the enterprise admin dashboard: authentication and
//! session lifecycle, role-gated route decisions, and typed clients for the
//! dashboard's backend endpoints.
//!
//! This crate deliberately contains no UI. It models the state and decisions
//! a dashboard frontend needs — login/logout/refresh/validate flows, a
//! process-wide session container with explicit transitions, and a pure
//! route-guard function — so they can be tested without rendering anything.

pub mod config;
pub mod guard;
pub mod services;
pub mod state;
pub mod token;
pub mod types;
