// ── Robot status enums ──

use serde::{Deserialize, Serialize};

/// Top-level robot status, wire ints 0-4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RobotState {
    Invalid,
    Idle,
    Busy,
    Paused,
    Error,
}

impl RobotState {
    /// Map the wire integer; anything out of range is rejected.
    pub fn from_wire(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Invalid),
            1 => Some(Self::Idle),
            2 => Some(Self::Busy),
            3 => Some(Self::Paused),
            4 => Some(Self::Error),
            _ => None,
        }
    }

    pub fn is_busy(self) -> bool {
        matches!(self, Self::Busy)
    }
}

/// What the robot is currently doing, wire ints 0-10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RobotAction {
    Invalid,
    HouseCleaning,
    SpotCleaning,
    ManualCleaning,
    Docking,
    UserMenuActive,
    SuspendedCleaning,
    Updating,
    CopyingLogs,
    RecoveringLocation,
    IecTest,
}

impl RobotAction {
    /// Map the wire integer; anything out of range is rejected.
    pub fn from_wire(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Invalid),
            1 => Some(Self::HouseCleaning),
            2 => Some(Self::SpotCleaning),
            3 => Some(Self::ManualCleaning),
            4 => Some(Self::Docking),
            5 => Some(Self::UserMenuActive),
            6 => Some(Self::SuspendedCleaning),
            7 => Some(Self::Updating),
            8 => Some(Self::CopyingLogs),
            9 => Some(Self::RecoveringLocation),
            10 => Some(Self::IecTest),
            _ => None,
        }
    }

    pub fn is_cleaning(self) -> bool {
        matches!(
            self,
            Self::HouseCleaning | Self::SpotCleaning | Self::ManualCleaning
        )
    }
}
