// ── Parsed state snapshot ──
//
// One `getRobotState` payload becomes one immutable `RobotSnapshot`.
// Parsing is total and fails closed: a missing required field, an
// unrecognized service or command key, or an out-of-range code rejects
// the whole payload. Nothing is ever partially applied, so a snapshot's
// availability tables only ever contain the fixed, known key sets.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;
use strum::{EnumCount, IntoEnumIterator};
use thiserror::Error;

use super::capability::{ApiDialect, RobotCommand, RobotService};
use super::status::{RobotAction, RobotState};

// ── ParseError ──────────────────────────────────────────────────────

/// Why a state payload was rejected.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The payload is structurally wrong (missing field, wrong type).
    #[error("Malformed state payload: {message}")]
    Malformed { message: String },

    /// `availableServices` named a key outside the known set.
    #[error("Unknown service in state payload: {0:?}")]
    UnknownService(String),

    /// `availableCommands` named a key outside the known set.
    #[error("Unknown command in state payload: {0:?}")]
    UnknownCommand(String),

    /// `state` was outside 0-4.
    #[error("State code out of range: {0}")]
    InvalidState(u8),

    /// `action` was outside 0-10.
    #[error("Action code out of range: {0}")]
    InvalidAction(u8),

    /// `details.charge` was outside 0-100.
    #[error("Battery charge out of range: {0}")]
    ChargeOutOfRange(u8),

    /// The robot advertised no services at all, so no dialect exists.
    #[error("State payload advertises no services")]
    NoServices,
}

// ── Wire shapes ─────────────────────────────────────────────────────
//
// Intermediate deserialization targets. Extra top-level fields
// (cleaning, meta, version, ...) are ignored; the maps are validated
// key-by-key afterwards.

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireState {
    state: u8,
    action: u8,
    details: WireDetails,
    available_services: BTreeMap<String, String>,
    available_commands: BTreeMap<String, bool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireDetails {
    is_charging: bool,
    is_docked: bool,
    is_schedule_enabled: bool,
    dock_has_been_seen: bool,
    charge: u8,
}

// ── RobotSnapshot ───────────────────────────────────────────────────

/// Immutable point-in-time view of one robot's capabilities and status.
///
/// Produced fresh by [`parse`](Self::parse) and replaced wholesale by
/// the controller after every successful mutating call — never patched
/// in place.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct RobotSnapshot {
    dialect: ApiDialect,
    state: RobotState,
    action: RobotAction,
    is_charging: bool,
    is_docked: bool,
    is_schedule_enabled: bool,
    has_seen_dock: bool,
    charge: u8,
    services: [bool; RobotService::COUNT],
    commands: [bool; RobotCommand::COUNT],
}

impl RobotSnapshot {
    /// Parse one `getRobotState` response body.
    pub fn parse(payload: &Value) -> Result<Self, ParseError> {
        let wire: WireState =
            serde_json::from_value(payload.clone()).map_err(|e| ParseError::Malformed {
                message: e.to_string(),
            })?;

        let state = RobotState::from_wire(wire.state).ok_or(ParseError::InvalidState(wire.state))?;
        let action =
            RobotAction::from_wire(wire.action).ok_or(ParseError::InvalidAction(wire.action))?;
        if wire.details.charge > 100 {
            return Err(ParseError::ChargeOutOfRange(wire.details.charge));
        }

        // Reject unknown keys before applying anything.
        let mut services = [false; RobotService::COUNT];
        for key in wire.available_services.keys() {
            let service = RobotService::from_wire(key)
                .ok_or_else(|| ParseError::UnknownService(key.clone()))?;
            services[service.idx()] = true;
        }
        let mut commands = [false; RobotCommand::COUNT];
        for (key, &available) in &wire.available_commands {
            let command = RobotCommand::from_wire(key)
                .ok_or_else(|| ParseError::UnknownCommand(key.clone()))?;
            commands[command.idx()] = available;
        }

        // Every service is assumed to report the same dialect; take the
        // first advertised one in fixed enum order so the choice is
        // deterministic.
        let dialect = RobotService::iter()
            .find_map(|s| wire.available_services.get(s.wire_name()))
            .map(|tag| ApiDialect::from_wire(tag))
            .ok_or(ParseError::NoServices)?;

        Ok(Self {
            dialect,
            state,
            action,
            is_charging: wire.details.is_charging,
            is_docked: wire.details.is_docked,
            is_schedule_enabled: wire.details.is_schedule_enabled,
            has_seen_dock: wire.details.dock_has_been_seen,
            charge: wire.details.charge,
            services,
            commands,
        })
    }

    // ── Accessors ───────────────────────────────────────────────────

    pub fn dialect(&self) -> &ApiDialect {
        &self.dialect
    }

    pub fn state(&self) -> RobotState {
        self.state
    }

    pub fn action(&self) -> RobotAction {
        self.action
    }

    pub fn is_charging(&self) -> bool {
        self.is_charging
    }

    pub fn is_docked(&self) -> bool {
        self.is_docked
    }

    pub fn is_schedule_enabled(&self) -> bool {
        self.is_schedule_enabled
    }

    pub fn has_seen_dock(&self) -> bool {
        self.has_seen_dock
    }

    /// Battery charge in percent, 0-100.
    pub fn charge(&self) -> u8 {
        self.charge
    }

    /// Whether the firmware advertises the given service.
    pub fn service_available(&self, service: RobotService) -> bool {
        self.services[service.idx()]
    }

    /// Whether the firmware reports the given command as currently
    /// invokable. This can flip between snapshots as the robot moves
    /// through states.
    pub fn command_available(&self, command: RobotCommand) -> bool {
        self.commands[command.idx()]
    }

    /// Whether either cleaning service is advertised.
    pub fn any_cleaning_service(&self) -> bool {
        self.service_available(RobotService::HouseCleaning)
            || self.service_available(RobotService::SpotCleaning)
    }
}
