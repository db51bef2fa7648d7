// ── Cleaning run parameters ──
//
// Domain-side enums for the startCleaning knobs. The wire codes are
// vendor-fixed and shared by every dialect; which of them a dialect
// actually accepts is decided in `params`.

use serde::{Deserialize, Serialize};

/// What to clean: the whole house or a spot around the robot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CleaningCategory {
    House,
    Spot,
}

impl CleaningCategory {
    pub fn code(self) -> u8 {
        match self {
            Self::House => 2,
            Self::Spot => 3,
        }
    }
}

/// Suction mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CleaningMode {
    Eco,
    Turbo,
}

impl CleaningMode {
    pub fn code(self) -> u8 {
        match self {
            Self::Eco => 1,
            Self::Turbo => 2,
        }
    }
}

/// How many passes over the area (the wire calls this `modifier`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CleaningPasses {
    Single,
    Double,
}

impl CleaningPasses {
    pub fn code(self) -> u8 {
        match self {
            Self::Single => 1,
            Self::Double => 2,
        }
    }
}

/// Dimensions of a spot-cleaning area, in cm.
///
/// The vendor accepts 100-400 on each axis and only the `basic-1` and
/// `basic-2` dialects take the fields at all; other dialects clean a
/// firmware-fixed spot around the robot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpotSize {
    pub width_cm: u16,
    pub height_cm: u16,
}

/// Navigation style for dialects that take it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationMode {
    Normal,
    ExtraCare,
}

impl NavigationMode {
    pub fn code(self) -> u8 {
        match self {
            Self::Normal => 1,
            Self::ExtraCare => 2,
        }
    }
}
