// ── Capability identifiers ──
//
// The firmware advertises capabilities under fixed wire names. Modeling
// them as enums (rather than string-keyed maps) makes "unknown
// capability" a compile-time impossibility for callers; only external
// input can name an unknown key, and that is rejected at parse time.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter};

// ── RobotService ────────────────────────────────────────────────────

/// A service the firmware may advertise under `availableServices`.
///
/// The set is fixed. `EasyConnect` appears on real robots but is
/// undocumented by the vendor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumCount, EnumIter)]
pub enum RobotService {
    FindMe,
    GeneralInfo,
    HouseCleaning,
    LocalStats,
    ManualCleaning,
    Preferences,
    Schedule,
    SpotCleaning,
    EasyConnect,
}

impl RobotService {
    /// The key this service appears under in the state payload.
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::FindMe => "findMe",
            Self::GeneralInfo => "generalInfo",
            Self::HouseCleaning => "houseCleaning",
            Self::LocalStats => "localStats",
            Self::ManualCleaning => "manualCleaning",
            Self::Preferences => "preferences",
            Self::Schedule => "schedule",
            Self::SpotCleaning => "spotCleaning",
            Self::EasyConnect => "easyConnect",
        }
    }

    /// Resolve a wire key to a known service, if any.
    pub fn from_wire(name: &str) -> Option<Self> {
        match name {
            "findMe" => Some(Self::FindMe),
            "generalInfo" => Some(Self::GeneralInfo),
            "houseCleaning" => Some(Self::HouseCleaning),
            "localStats" => Some(Self::LocalStats),
            "manualCleaning" => Some(Self::ManualCleaning),
            "preferences" => Some(Self::Preferences),
            "schedule" => Some(Self::Schedule),
            "spotCleaning" => Some(Self::SpotCleaning),
            "easyConnect" => Some(Self::EasyConnect),
            _ => None,
        }
    }

    /// Index into the snapshot's fixed availability table.
    pub(crate) fn idx(self) -> usize {
        self as usize
    }
}

impl fmt::Display for RobotService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

// ── RobotCommand ────────────────────────────────────────────────────

/// A command the firmware reports under `availableCommands`.
///
/// The reported value is a bool per command: the set of keys is fixed,
/// and availability can flip as the robot changes state (e.g. `goToBase`
/// only becomes available from certain states).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumCount, EnumIter)]
pub enum RobotCommand {
    Start,
    Stop,
    Pause,
    Resume,
    GoToBase,
}

impl RobotCommand {
    /// The key this command appears under in the state payload.
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
            Self::Pause => "pause",
            Self::Resume => "resume",
            Self::GoToBase => "goToBase",
        }
    }

    /// Resolve a wire key to a known command, if any.
    pub fn from_wire(name: &str) -> Option<Self> {
        match name {
            "start" => Some(Self::Start),
            "stop" => Some(Self::Stop),
            "pause" => Some(Self::Pause),
            "resume" => Some(Self::Resume),
            "goToBase" => Some(Self::GoToBase),
            _ => None,
        }
    }

    /// Index into the snapshot's fixed availability table.
    pub(crate) fn idx(self) -> usize {
        self as usize
    }
}

impl fmt::Display for RobotCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

// ── ApiDialect ──────────────────────────────────────────────────────

/// Firmware family tag, reported per service in `availableServices`.
///
/// Determines the parameter shape `startCleaning` must use. All
/// services on one robot are assumed to report the same dialect; the
/// snapshot keeps the first one advertised. An unrecognized tag still
/// parses — it only becomes an error if a cleaning run is attempted
/// with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ApiDialect {
    Basic1,
    Basic2,
    Micro2,
    Minimal2,
    Other(String),
}

impl ApiDialect {
    pub fn from_wire(tag: &str) -> Self {
        match tag {
            "basic-1" => Self::Basic1,
            "basic-2" => Self::Basic2,
            "micro-2" => Self::Micro2,
            "minimal-2" => Self::Minimal2,
            other => Self::Other(other.to_owned()),
        }
    }

    /// Whether this firmware family understands eco mode.
    pub fn supports_eco(&self) -> bool {
        matches!(self, Self::Basic1 | Self::Basic2)
    }
}

impl fmt::Display for ApiDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic1 => f.write_str("basic-1"),
            Self::Basic2 => f.write_str("basic-2"),
            Self::Micro2 => f.write_str("micro-2"),
            Self::Minimal2 => f.write_str("minimal-2"),
            Self::Other(tag) => f.write_str(tag),
        }
    }
}
