//! Capability-gated controller for Neato Botvac robots.
//!
//! A Botvac robot self-reports which services (house cleaning, spot
//! cleaning, schedule, ...) and which commands (start, stop, pause,
//! resume, go-to-base) its firmware currently offers, plus an API
//! "dialect" per service that dictates what the `startCleaning`
//! parameters must look like. This crate owns the logic that takes the
//! raw state payload from `botvac-api` and turns it into something safe
//! to drive:
//!
//! - **[`RobotSnapshot`]** — an immutable, fully-parsed view of the
//!   robot's capabilities and status. Parsing fails closed: a missing
//!   field or an unrecognized service/command key rejects the whole
//!   payload, so a snapshot never holds partial or unknown data.
//!
//! - **[`Robot`]** — the controller. Holds one snapshot, replaces it
//!   wholesale after every successful mutating call, and refuses any
//!   operation the firmware has not advertised — before a single byte
//!   goes on the wire.
//!
//! - **Dialect handling** ([`params`]) — a pure function mapping
//!   `(dialect, category, mode, passes)` to the exact parameter shape
//!   that firmware family expects.
//!
//! Every refusal is a distinct [`CoreError`] variant, so callers can
//! tell "this robot can't do that" from "not right now" from "the
//! network ate it".

pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod params;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::RobotConfig;
pub use controller::Robot;
pub use error::CoreError;
pub use model::{
    ApiDialect, CleaningCategory, CleaningMode, CleaningPasses, NavigationMode, ParseError,
    RobotAction, RobotCommand, RobotService, RobotSnapshot, RobotState, SpotSize,
};
