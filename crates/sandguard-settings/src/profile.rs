use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Which base rule configuration a compilation is checked against.
///
/// Hosts pass an opaque key; unrecognized keys resolve to the default so a
/// newer host never makes an older engine fail to configure itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Ordinary game code. The default when the host names no profile.
    #[default]
    Unknown,
    /// Menu code, which additionally sees the menu namespace.
    Menu,
}

impl Profile {
    /// Resolve an opaque profile key.
    pub fn from_key(key: &str) -> Self {
        match key {
            "menu" => Profile::Menu,
            // default
            _ => Profile::Unknown,
        }
    }

    /// Stable key naming this profile in logs and fingerprints.
    pub fn key(self) -> &'static str {
        match self {
            Profile::Unknown => "unknown",
            Profile::Menu => "menu",
        }
    }
}
