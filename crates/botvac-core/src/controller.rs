// ── Robot controller ──
//
// One `Robot` per physical robot. Holds exactly one snapshot, fetched
// at construction and replaced wholesale after every successful
// mutating call — state transitions are always driven by what the
// server said, never inferred locally. Mutating operations take
// `&mut self`, so exclusive access during the read-snapshot /
// call-transport / replace-snapshot cycle is enforced by the borrow
// checker.

use serde_json::Value;
use tracing::debug;

use botvac_api::{NucleoClient, RobotPreferences, ScheduleEvent};

use crate::config::RobotConfig;
use crate::error::CoreError;
use crate::model::{
    ApiDialect, CleaningCategory, CleaningMode, CleaningPasses, RobotAction, RobotCommand,
    RobotService, RobotSnapshot, RobotState, SpotSize,
};
use crate::params::cleaning_params;

/// Capability-gated controller for one robot.
///
/// Construction fetches and parses the robot state; a `Robot` never
/// exists half-initialized. Every mutating operation checks the
/// firmware-advertised capabilities before touching the network and
/// refreshes the snapshot from the response afterwards.
pub struct Robot {
    client: NucleoClient,
    snapshot: RobotSnapshot,
}

impl Robot {
    /// Connect to the robot described by `config`.
    pub async fn connect(config: RobotConfig) -> Result<Self, CoreError> {
        let mut client = NucleoClient::new(config.serial, config.secret)
            .map_err(CoreError::Api)?
            .with_base_url(config.base_url);
        if let Some(agent) = config.agent {
            client = client.with_agent(agent);
        }
        Self::with_client(client).await
    }

    /// Connect through a pre-built transport (test seam).
    pub async fn with_client(client: NucleoClient) -> Result<Self, CoreError> {
        let payload = client.get_robot_state().await?;
        let snapshot = RobotSnapshot::parse(&payload)?;
        debug!(serial = client.serial(), dialect = %snapshot.dialect(), "connected");
        Ok(Self { client, snapshot })
    }

    // ── Snapshot accessors ──────────────────────────────────────────

    /// The current snapshot. Replaced wholesale after mutating calls.
    pub fn snapshot(&self) -> &RobotSnapshot {
        &self.snapshot
    }

    pub fn is_service_available(&self, service: RobotService) -> bool {
        self.snapshot.service_available(service)
    }

    pub fn is_command_available(&self, command: RobotCommand) -> bool {
        self.snapshot.command_available(command)
    }

    pub fn is_charging(&self) -> bool {
        self.snapshot.is_charging()
    }

    pub fn is_docked(&self) -> bool {
        self.snapshot.is_docked()
    }

    pub fn is_schedule_enabled(&self) -> bool {
        self.snapshot.is_schedule_enabled()
    }

    pub fn has_seen_dock(&self) -> bool {
        self.snapshot.has_seen_dock()
    }

    /// Battery charge in percent, 0-100.
    pub fn battery_charge(&self) -> u8 {
        self.snapshot.charge()
    }

    pub fn state(&self) -> RobotState {
        self.snapshot.state()
    }

    pub fn action(&self) -> RobotAction {
        self.snapshot.action()
    }

    pub fn dialect(&self) -> &ApiDialect {
        self.snapshot.dialect()
    }

    /// Re-fetch the state and replace the snapshot.
    pub async fn refresh(&mut self) -> Result<(), CoreError> {
        let payload = self.client.get_robot_state().await?;
        self.snapshot = RobotSnapshot::parse(&payload)?;
        Ok(())
    }

    // ── Cleaning operations ─────────────────────────────────────────

    /// Turbo house clean, single pass.
    pub async fn clean_house(&mut self) -> Result<(), CoreError> {
        self.start_cleaning(
            CleaningCategory::House,
            CleaningMode::Turbo,
            CleaningPasses::Single,
            None,
        )
        .await
    }

    /// Eco house clean, single pass.
    pub async fn eco_clean_house(&mut self) -> Result<(), CoreError> {
        self.start_cleaning(
            CleaningCategory::House,
            CleaningMode::Eco,
            CleaningPasses::Single,
            None,
        )
        .await
    }

    /// Turbo spot clean, single pass.
    pub async fn clean_spot(&mut self) -> Result<(), CoreError> {
        self.start_cleaning(
            CleaningCategory::Spot,
            CleaningMode::Turbo,
            CleaningPasses::Single,
            None,
        )
        .await
    }

    /// Turbo spot clean, double pass.
    pub async fn deep_clean_spot(&mut self) -> Result<(), CoreError> {
        self.start_cleaning(
            CleaningCategory::Spot,
            CleaningMode::Turbo,
            CleaningPasses::Double,
            None,
        )
        .await
    }

    /// Eco spot clean, single pass.
    pub async fn eco_clean_spot(&mut self) -> Result<(), CoreError> {
        self.start_cleaning(
            CleaningCategory::Spot,
            CleaningMode::Eco,
            CleaningPasses::Single,
            None,
        )
        .await
    }

    /// Eco spot clean, double pass.
    pub async fn eco_deep_clean_spot(&mut self) -> Result<(), CoreError> {
        self.start_cleaning(
            CleaningCategory::Spot,
            CleaningMode::Eco,
            CleaningPasses::Double,
            None,
        )
        .await
    }

    /// Turbo spot clean of an explicitly sized area, single pass.
    ///
    /// The dimensions only reach the wire on dialects that take them
    /// (`basic-1`, `basic-2`); elsewhere the firmware cleans its fixed
    /// spot and the size is ignored.
    pub async fn clean_spot_area(&mut self, size: SpotSize) -> Result<(), CoreError> {
        self.start_cleaning(
            CleaningCategory::Spot,
            CleaningMode::Turbo,
            CleaningPasses::Single,
            Some(size),
        )
        .await
    }

    /// Turbo spot clean of an explicitly sized area, double pass.
    pub async fn deep_clean_spot_area(&mut self, size: SpotSize) -> Result<(), CoreError> {
        self.start_cleaning(
            CleaningCategory::Spot,
            CleaningMode::Turbo,
            CleaningPasses::Double,
            Some(size),
        )
        .await
    }

    /// Shared entry point for all six cleaning operations.
    ///
    /// Gates, in order: eco support by dialect, the category's cleaning
    /// service, the `start` command flag. Only then is the dialect's
    /// parameter shape built and sent. All checks run before any
    /// network traffic.
    async fn start_cleaning(
        &mut self,
        category: CleaningCategory,
        mode: CleaningMode,
        passes: CleaningPasses,
        spot: Option<SpotSize>,
    ) -> Result<(), CoreError> {
        if mode == CleaningMode::Eco && !self.snapshot.dialect().supports_eco() {
            return Err(CoreError::EcoUnsupported {
                dialect: self.snapshot.dialect().clone(),
            });
        }

        let required = match category {
            CleaningCategory::House => RobotService::HouseCleaning,
            CleaningCategory::Spot => RobotService::SpotCleaning,
        };
        if !self.snapshot.service_available(required) {
            return Err(CoreError::ServiceUnavailable(required));
        }
        if !self.snapshot.command_available(RobotCommand::Start) {
            return Err(CoreError::CommandUnavailable(RobotCommand::Start));
        }

        let params = cleaning_params(self.snapshot.dialect(), category, mode, passes, spot)?;
        let payload = self.client.start_cleaning(&params).await?;
        self.snapshot = RobotSnapshot::parse(&payload)?;
        Ok(())
    }

    /// Stop the current cleaning run.
    pub async fn stop_cleaning(&mut self) -> Result<(), CoreError> {
        self.check_cleaning_command(RobotCommand::Stop)?;
        let payload = self.client.stop_cleaning().await?;
        self.snapshot = RobotSnapshot::parse(&payload)?;
        Ok(())
    }

    /// Pause the current cleaning run.
    pub async fn pause_cleaning(&mut self) -> Result<(), CoreError> {
        self.check_cleaning_command(RobotCommand::Pause)?;
        let payload = self.client.pause_cleaning().await?;
        self.snapshot = RobotSnapshot::parse(&payload)?;
        Ok(())
    }

    /// Resume a paused cleaning run.
    pub async fn resume_cleaning(&mut self) -> Result<(), CoreError> {
        self.check_cleaning_command(RobotCommand::Resume)?;
        let payload = self.client.resume_cleaning().await?;
        self.snapshot = RobotSnapshot::parse(&payload)?;
        Ok(())
    }

    /// Send the robot back to its dock.
    ///
    /// `goToBase` is only invokable from certain robot states. If it is
    /// not currently available but `pause` is, pausing first often makes
    /// it available — so this performs a bounded, single-retry state
    /// transition: pause, re-read the advertised commands from the pause
    /// response, and try again. At most two transport calls.
    pub async fn return_to_base(&mut self) -> Result<(), CoreError> {
        if !self.snapshot.any_cleaning_service() {
            return Err(CoreError::CleaningUnavailable);
        }
        if !self.snapshot.has_seen_dock() {
            return Err(CoreError::DockNeverSeen);
        }

        if !self.snapshot.command_available(RobotCommand::GoToBase) {
            if self.snapshot.command_available(RobotCommand::Pause) {
                debug!("goToBase unavailable, pausing first");
                let payload = self.client.pause_cleaning().await?;
                self.snapshot = RobotSnapshot::parse(&payload)?;
            }
            if !self.snapshot.command_available(RobotCommand::GoToBase) {
                return Err(CoreError::BaseUnavailable);
            }
        }

        let payload = self.client.send_to_base().await?;
        self.snapshot = RobotSnapshot::parse(&payload)?;
        Ok(())
    }

    /// Stop/pause/resume share the same precondition shape: some
    /// cleaning service must exist, and the command flag must be set.
    fn check_cleaning_command(&self, command: RobotCommand) -> Result<(), CoreError> {
        if !self.snapshot.any_cleaning_service() {
            return Err(CoreError::CleaningUnavailable);
        }
        if !self.snapshot.command_available(command) {
            return Err(CoreError::CommandUnavailable(command));
        }
        Ok(())
    }

    // ── Schedule ────────────────────────────────────────────────────

    /// Turn scheduled cleaning on. The vendor does not return a state
    /// payload for this call, so the snapshot is not refreshed.
    pub async fn enable_schedule(&mut self) -> Result<(), CoreError> {
        self.client.enable_schedule().await?;
        Ok(())
    }

    /// Turn scheduled cleaning off. No snapshot refresh, as above.
    pub async fn disable_schedule(&mut self) -> Result<(), CoreError> {
        self.client.disable_schedule().await?;
        Ok(())
    }

    /// Fetch the weekly schedule.
    pub async fn get_schedule(&self) -> Result<Value, CoreError> {
        self.check_service(RobotService::Schedule)?;
        Ok(self.client.get_schedule().await?)
    }

    /// Replace the weekly schedule.
    pub async fn set_schedule(&self, events: &[ScheduleEvent]) -> Result<Value, CoreError> {
        self.check_service(RobotService::Schedule)?;
        Ok(self.client.set_schedule(events).await?)
    }

    // ── Info & preferences ──────────────────────────────────────────

    /// Make the robot chirp so it can be located.
    pub async fn find_me(&self) -> Result<Value, CoreError> {
        self.check_service(RobotService::FindMe)?;
        Ok(self.client.find_me().await?)
    }

    /// General info (battery details, language on some models).
    pub async fn get_general_info(&self) -> Result<Value, CoreError> {
        self.check_service(RobotService::GeneralInfo)?;
        Ok(self.client.get_general_info().await?)
    }

    /// Locally accumulated usage statistics.
    pub async fn get_local_stats(&self) -> Result<Value, CoreError> {
        self.check_service(RobotService::LocalStats)?;
        Ok(self.client.get_local_stats().await?)
    }

    /// Manual-cleaning connection info.
    pub async fn get_manual_cleaning_info(&self) -> Result<Value, CoreError> {
        self.check_service(RobotService::ManualCleaning)?;
        Ok(self.client.get_robot_manual_cleaning_info().await?)
    }

    /// The robot's stored preferences.
    pub async fn get_preferences(&self) -> Result<Value, CoreError> {
        self.check_service(RobotService::Preferences)?;
        Ok(self.client.get_preferences().await?)
    }

    /// Replace the robot's stored preferences.
    pub async fn set_preferences(&self, prefs: &RobotPreferences) -> Result<Value, CoreError> {
        self.check_service(RobotService::Preferences)?;
        Ok(self.client.set_preferences(prefs).await?)
    }

    /// Static robot information (model, firmware). Not service-gated;
    /// every firmware answers it.
    pub async fn get_robot_info(&self) -> Result<Value, CoreError> {
        Ok(self.client.get_robot_info().await?)
    }

    /// Dismiss the alert currently showing on the robot.
    pub async fn dismiss_current_alert(&self) -> Result<Value, CoreError> {
        Ok(self.client.dismiss_current_alert().await?)
    }

    fn check_service(&self, service: RobotService) -> Result<(), CoreError> {
        if !self.snapshot.service_available(service) {
            return Err(CoreError::ServiceUnavailable(service));
        }
        Ok(())
    }
}
