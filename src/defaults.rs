//! Step defaults loaded through a [`FileSource`].

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::ports::files::FileSource;

/// Options shared by every step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepOptions {
    /// Free-form test parameter.
    #[serde(rename = "testParam", default, skip_serializing_if = "Option::is_none")]
    pub test_param: Option<String>,
}

/// A defaults file: step options grouped under `general`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepDefaults {
    /// Options applied to all steps.
    #[serde(default)]
    pub general: StepOptions,
}

/// Reads `name` from `source` and parses it as YAML step defaults.
///
/// # Errors
///
/// Returns an error if the content cannot be opened or read, or is not a
/// valid defaults document.
pub fn load_step_defaults(source: &dyn FileSource, name: &str) -> Result<StepDefaults, String> {
    let mut reader = source.open(name).map_err(|e| format!("Failed to open {name}: {e}"))?;
    let mut content = String::new();
    reader.read_to_string(&mut content).map_err(|e| format!("Failed to read {name}: {e}"))?;
    if content.trim().is_empty() {
        return Ok(StepDefaults::default());
    }
    serde_yaml::from_str(&content).map_err(|e| format!("Failed to parse {name}: {e}"))
}
