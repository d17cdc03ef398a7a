//! Domain-based type organization, matching the structure in `update/`:
//! - auth: session and credential types
//! - resource: generic REST resource container
//! - wifi / ap / ntp / security / system: device resource schemas
//! - sprinkler: watering schedule and live status
//! - features / notification / scan / upload: client-side state

pub mod ap;
pub mod auth;
pub mod features;
pub mod notification;
pub mod ntp;
pub mod resource;
pub mod scan;
pub mod security;
pub mod sprinkler;
pub mod system;
pub mod upload;
pub mod wifi;

pub use ap::*;
pub use auth::*;
pub use features::*;
pub use notification::*;
pub use ntp::*;
pub use resource::*;
pub use scan::*;
pub use security::*;
pub use sprinkler::*;
pub use system::*;
pub use upload::*;
pub use wifi::*;
