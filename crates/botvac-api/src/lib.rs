//! Async client for the Neato Botvac "Nucleo" cloud API.
//!
//! Nucleo is the vendor endpoint a Botvac Connected robot is paired with.
//! Every message to a robot is a signed POST to a single per-robot URL;
//! the command itself travels in a small JSON envelope, and the request
//! is authenticated with an HMAC-SHA256 signature computed from the robot
//! serial, the `Date` header, and the exact body bytes.
//!
//! This crate owns transport mechanics only:
//!
//! - **[`NucleoClient`]** — builds the signed envelope, performs exactly
//!   one request/response cycle per call, and hands back the parsed JSON
//!   body untouched. One inherent method per vendor command.
//! - **[`auth`]** — the pure signature computation, kept independently
//!   callable because it is security-critical and must be testable
//!   against known vectors without a network in sight.
//! - **Request payloads** ([`requests`]) — typed wire shapes for the
//!   commands that carry parameters (`startCleaning`, `setPreferences`,
//!   `setSchedule`).
//!
//! Interpreting the response (capability gating, state tracking) is the
//! job of `botvac-core`.

pub mod auth;
pub mod client;
pub mod commands;
pub mod error;
pub mod requests;

// ── Primary re-exports ──────────────────────────────────────────────
pub use client::NucleoClient;
pub use error::Error;
pub use requests::{CleaningParams, RobotPreferences, ScheduleEvent};
