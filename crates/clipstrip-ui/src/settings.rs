// crates/clipstrip-ui/src/settings.rs
//
// Shell settings, read once at start-up from `clipstrip.json` in the working
// directory. Every field is optional:
//
//   {
//     "media_duration": 95.5,
//     "thumbnail_url_template": "http://localhost:8000/thumbs/{sec}.jpg",
//     "player": { "slot_count": 7, "step_seconds": 0.5 }
//   }

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use clipstrip_core::{PlayerConfig, ThumbnailResolver};

pub const SETTINGS_FILE: &str = "clipstrip.json";

const SEC_TOKEN: &str = "{sec}";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub player:                 PlayerConfig,
    /// Length of the software-clocked media, in seconds.
    pub media_duration:         f64,
    pub thumbnail_url_template: Option<String>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            player:                 PlayerConfig::default(),
            media_duration:         120.0,
            thumbnail_url_template: None,
        }
    }
}

impl AppSettings {
    pub fn from_json(src: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(src).context("parsing settings JSON")?;
        settings.player.validate().context("invalid player settings")?;
        if !settings.media_duration.is_finite() || settings.media_duration <= 0.0 {
            anyhow::bail!("media_duration must be positive, got {}", settings.media_duration);
        }
        Ok(settings)
    }

    /// A missing file is not an error; an unreadable or invalid one is.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let src = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_json(&src).with_context(|| format!("loading {}", path.display()))
    }

    pub fn load_or_default() -> Self {
        let path = Path::new(SETTINGS_FILE);
        match Self::load(path) {
            Ok(s) => {
                info!(duration = s.media_duration, "settings loaded");
                s
            }
            Err(e) => {
                warn!("{e:#}; using defaults");
                Self::default()
            }
        }
    }

    /// Template resolver when a usable template is configured, else the
    /// local placeholder frames.
    pub fn resolver(&self) -> ThumbnailResolver {
        match &self.thumbnail_url_template {
            Some(t) if t.contains(SEC_TOKEN) => ThumbnailResolver::Template(t.clone()),
            Some(t) => {
                warn!(template = %t, "thumbnail template has no {{sec}} token; using placeholders");
                ThumbnailResolver::Placeholder
            }
            None => ThumbnailResolver::Placeholder,
        }
    }
}
