// ── Core error types ──
//
// Every refusal is a distinct, named variant — callers react
// differently to "this firmware doesn't have that" (prompt the user)
// than to "not in a state where that works" (try again later), so no
// failure collapses into a generic bucket and none returns a sentinel.

use thiserror::Error;

use crate::model::{ApiDialect, ParseError, RobotCommand, RobotService};

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Capability preconditions ─────────────────────────────────────
    /// The firmware does not advertise the service this operation needs.
    #[error("Service not available on this robot: {0}")]
    ServiceUnavailable(RobotService),

    /// The firmware reports this command as not currently invokable.
    #[error("Command not available right now: {0}")]
    CommandUnavailable(RobotCommand),

    /// Neither house nor spot cleaning is advertised.
    #[error("No cleaning service available on this robot")]
    CleaningUnavailable,

    /// Eco mode requested on a firmware family that has no eco mode.
    #[error("Eco mode not supported by dialect {dialect}")]
    EcoUnsupported { dialect: ApiDialect },

    /// The robot reports a dialect this client has no parameter shape for.
    #[error("Unknown device dialect: {0:?}")]
    UnknownDialect(String),

    /// Return-to-base requires the robot to have located its dock once.
    #[error("Robot has never seen its dock")]
    DockNeverSeen,

    /// Go-to-base still unavailable after the pause fallback.
    #[error("Cannot return to base at this time")]
    BaseUnavailable,

    // ── State parsing ────────────────────────────────────────────────
    /// The state payload was rejected; the previous snapshot is kept.
    #[error("State payload rejected: {0}")]
    State(#[from] ParseError),

    // ── Transport ────────────────────────────────────────────────────
    /// Transport-layer failure, propagated unchanged.
    #[error(transparent)]
    Api(#[from] botvac_api::Error),
}
