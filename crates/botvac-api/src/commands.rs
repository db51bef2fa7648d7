// ── Vendor command surface ──
//
// One inherent method per Nucleo command, all thin pass-throughs over
// `NucleoClient::execute`. No availability gating happens here — the
// firmware advertises which of these a given robot actually supports,
// and `botvac-core` enforces that before calling in.

use serde_json::Value;

use crate::client::NucleoClient;
use crate::error::Error;
use crate::requests::{CleaningParams, RobotPreferences, ScheduleEvent};

/// The only schedule type the vendor defines.
const SCHEDULE_TYPE_BASIC: u8 = 1;

impl NucleoClient {
    // ── State & info ────────────────────────────────────────────────

    /// Fetch the robot's full state payload (status, capabilities,
    /// battery, dock details).
    pub async fn get_robot_state(&self) -> Result<Value, Error> {
        self.execute("getRobotState", None).await
    }

    /// Dismiss the alert currently showing on the robot.
    pub async fn dismiss_current_alert(&self) -> Result<Value, Error> {
        self.execute("dismissCurrentAlert", None).await
    }

    /// Fetch static robot information (model, firmware).
    pub async fn get_robot_info(&self) -> Result<Value, Error> {
        self.execute("getRobotInfo", None).await
    }

    /// Make the robot chirp so it can be located.
    pub async fn find_me(&self) -> Result<Value, Error> {
        self.execute("findMe", None).await
    }

    /// Fetch general info (battery details, language on some models).
    pub async fn get_general_info(&self) -> Result<Value, Error> {
        self.execute("getGeneralInfo", None).await
    }

    /// Fetch locally accumulated usage statistics.
    pub async fn get_local_stats(&self) -> Result<Value, Error> {
        self.execute("getLocalStats", None).await
    }

    /// Fetch manual-cleaning connection info.
    pub async fn get_robot_manual_cleaning_info(&self) -> Result<Value, Error> {
        self.execute("getRobotManualCleaningInfo", None).await
    }

    // ── Cleaning ────────────────────────────────────────────────────

    /// Start a cleaning run. The parameter shape must already match the
    /// robot's dialect — see `botvac-core` for the selection logic.
    pub async fn start_cleaning(&self, params: &CleaningParams) -> Result<Value, Error> {
        let params = serde_json::to_value(params).map_err(|e| Error::Encode {
            message: format!("encoding cleaning params: {e}"),
        })?;
        self.execute("startCleaning", Some(params)).await
    }

    /// Stop the current cleaning run.
    pub async fn stop_cleaning(&self) -> Result<Value, Error> {
        self.execute("stopCleaning", None).await
    }

    /// Pause the current cleaning run.
    pub async fn pause_cleaning(&self) -> Result<Value, Error> {
        self.execute("pauseCleaning", None).await
    }

    /// Resume a paused cleaning run.
    pub async fn resume_cleaning(&self) -> Result<Value, Error> {
        self.execute("resumeCleaning", None).await
    }

    /// Send the robot back to its dock.
    ///
    /// On the wire this issues `resumeCleaning`: when the robot is
    /// paused and reports `goToBase` available, resuming docks it.
    /// Vendor quirk, kept as the reference clients do it.
    pub async fn send_to_base(&self) -> Result<Value, Error> {
        self.execute("resumeCleaning", None).await
    }

    // ── Preferences ─────────────────────────────────────────────────

    /// Fetch the robot's stored preferences.
    pub async fn get_preferences(&self) -> Result<Value, Error> {
        self.execute("getPreferences", None).await
    }

    /// Replace the robot's stored preferences.
    pub async fn set_preferences(&self, prefs: &RobotPreferences) -> Result<Value, Error> {
        let params = serde_json::to_value(prefs).map_err(|e| Error::Encode {
            message: format!("encoding preferences: {e}"),
        })?;
        self.execute("setPreferences", Some(params)).await
    }

    // ── Schedule ────────────────────────────────────────────────────

    /// Fetch the weekly cleaning schedule.
    pub async fn get_schedule(&self) -> Result<Value, Error> {
        self.execute("getSchedule", None).await
    }

    /// Replace the weekly cleaning schedule.
    pub async fn set_schedule(&self, events: &[ScheduleEvent]) -> Result<Value, Error> {
        let params = serde_json::json!({
            "type": SCHEDULE_TYPE_BASIC,
            "events": events,
        });
        self.execute("setSchedule", Some(params)).await
    }

    /// Turn scheduled cleaning on.
    pub async fn enable_schedule(&self) -> Result<Value, Error> {
        self.execute("enableSchedule", None).await
    }

    /// Turn scheduled cleaning off.
    pub async fn disable_schedule(&self) -> Result<Value, Error> {
        self.execute("disableSchedule", None).await
    }
}
