// ── Typed request payloads for Nucleo commands ──
//
// Wire shapes only: the integer codes here are what the firmware
// understands, and optional fields are skipped (never null) because
// older firmware rejects keys it does not expect. Which fields a given
// robot wants is decided in `botvac-core` from the reported dialect.

use serde::{Deserialize, Serialize};

// ── startCleaning ──────────────────────────────────────────────────

/// Parameters for `startCleaning`.
///
/// All codes are vendor-fixed: category 2 house / 3 spot, mode 1 eco /
/// 2 turbo, modifier 1 single / 2 double pass, navigationMode 1 normal /
/// 2 extra care. Spot dimensions are in cm (the vendor accepts
/// 100-400) and only make sense for spot cleaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleaningParams {
    pub category: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier: Option<u8>,
    #[serde(rename = "navigationMode", skip_serializing_if = "Option::is_none")]
    pub navigation_mode: Option<u8>,
    #[serde(rename = "spotWidth", skip_serializing_if = "Option::is_none")]
    pub spot_width: Option<u16>,
    #[serde(rename = "spotHeight", skip_serializing_if = "Option::is_none")]
    pub spot_height: Option<u16>,
}

// ── setPreferences ─────────────────────────────────────────────────

/// Parameters for `setPreferences`.
///
/// The three reminder intervals are required by the vendor; everything
/// else is optional and omitted when unset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RobotPreferences {
    pub dirtbin_alert_reminder_interval: u32,
    pub filter_change_reminder_interval: u32,
    pub brush_change_reminder_interval: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub robot_sounds: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dirtbin_alert: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_alerts: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leds: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_clicks: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clock_24h: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

// ── setSchedule ────────────────────────────────────────────────────

/// One entry in the robot's weekly cleaning schedule.
///
/// `day` is 0 (Sunday) through 6 (Saturday); `start_time` is `HH:MM`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEvent {
    pub day: u8,
    pub start_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<u8>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn cleaning_params_skip_unset_fields() {
        let params = CleaningParams {
            category: 2,
            mode: None,
            modifier: None,
            navigation_mode: Some(1),
            spot_width: None,
            spot_height: None,
        };
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json, serde_json::json!({"category": 2, "navigationMode": 1}));
    }

    #[test]
    fn cleaning_params_spot_dimensions_on_the_wire() {
        let params = CleaningParams {
            category: 3,
            mode: Some(2),
            modifier: Some(1),
            navigation_mode: None,
            spot_width: Some(200),
            spot_height: Some(150),
        };
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "category": 3, "mode": 2, "modifier": 1,
                "spotWidth": 200, "spotHeight": 150
            })
        );
    }

    #[test]
    fn schedule_event_wire_shape() {
        let event = ScheduleEvent {
            day: 1,
            start_time: "08:30".into(),
            mode: Some(1),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"day": 1, "startTime": "08:30", "mode": 1})
        );
    }
}
