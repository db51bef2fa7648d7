//! Domain model: capability identifiers, status enums, and the parsed
//! state snapshot.

mod capability;
mod cleaning;
mod snapshot;
mod status;

pub use capability::{ApiDialect, RobotCommand, RobotService};
pub use cleaning::{CleaningCategory, CleaningMode, CleaningPasses, NavigationMode, SpotSize};
pub use snapshot::{ParseError, RobotSnapshot};
pub use status::{RobotAction, RobotState};
