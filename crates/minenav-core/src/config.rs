//! Behavior switches for the controller.

use crate::{FlagPolicy, JumpMode};

/// Path prefix of the pages the overlay activates on.
pub const DEFAULT_PATH_PREFIX: &str = "/game/";

/// Controller configuration.
///
/// Every field has a default, so hosts only need to supply what they change.
///
/// # Examples
///
/// ```
/// use minenav_core::{FlagPolicy, JumpMode, NavConfig};
///
/// let config = NavConfig {
///     jump_mode: JumpMode::Edge,
///     ..NavConfig::default()
/// };
/// assert_eq!(config.path_prefix, "/game/");
/// assert_eq!(config.flag_policy, FlagPolicy::PressThenContextMenu);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NavConfig {
    /// Pages whose path starts with this prefix activate the overlay.
    pub path_prefix: String,
    /// Behavior of the capital-letter jump keys.
    pub jump_mode: JumpMode,
    /// Input sequence used to flag a cell.
    pub flag_policy: FlagPolicy,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            path_prefix: DEFAULT_PATH_PREFIX.to_owned(),
            jump_mode: JumpMode::default(),
            flag_policy: FlagPolicy::default(),
        }
    }
}
