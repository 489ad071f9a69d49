//! Serializable snapshot of the emitter settings.
//!
//! Tools that keep their own TOML config can embed a `[termlog]` table (or hand over a whole
//! document) and apply it in one step. Nothing here touches the filesystem or environment;
//! callers pass the text in.

use crate::output::Sink;
use serde::{Deserialize, Serialize};

/// Standard stream a config can point the sink at. Files and custom writers are set in code
/// through [`crate::set_sink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    #[default]
    Stderr,
    Stdout,
}

impl From<Target> for Sink {
    fn from(target: Target) -> Self {
        match target {
            Target::Stderr => Self::Stderr,
            Target::Stdout => Self::Stdout,
        }
    }
}

/// An empty document must reproduce the library defaults, hence `#[serde(default)]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Requested only; ignored while the sink is not a terminal.
    pub colors: bool,
    /// Shows the `HH:MM:SS` column.
    pub timestamps: bool,
    /// `None` leaves the current sink (a file, a writer, a terminal) in place.
    pub target: Option<Target>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            colors: true,
            timestamps: false,
            target: None,
        }
    }
}

impl Config {
    /// Parses a TOML document whose top-level keys are `colors`, `timestamps` and `target`.
    ///
    /// # Errors
    /// Returns [`crate::Error::ConfigParse`] on syntax errors or unknown values.
    pub fn from_toml(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// # Errors
    /// Returns [`crate::Error::Format`] if serialization fails.
    pub fn to_toml(&self) -> Result<String, crate::Error> {
        Ok(toml::to_string(self)?)
    }

    /// Installs target, colors and timestamps together; no line sees a partial update.
    pub fn apply(&self) {
        crate::logger::configure(self.target.map(Sink::from), self.colors, self.timestamps);
    }
}
