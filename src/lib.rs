//! HTTP relay that forwards one-time-passcode send and verify requests
//! to a third-party SMS verification provider.
//!
//! The provider owns all OTP state (code generation, expiry, attempt
//! limits, delivery); this crate only normalizes phone numbers, shapes
//! requests and responses, and translates provider outcomes into a
//! uniform `{success, ...}` JSON surface.

pub mod app;
pub mod config;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod phone;
pub mod routes;
pub mod verify;
