use serde::{Deserialize, Deserializer, Serialize};

use crate::storage::{KeyValueStore, ACCESSIBILITY_KEY};

pub const DEFAULT_FONT_SIZE: u8 = 16;
pub const MIN_FONT_SIZE: u8 = 12;
pub const MAX_FONT_SIZE: u8 = 24;
const FONT_STEP: u8 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilitySettings {
    #[serde(deserialize_with = "font_size_from_number")]
    pub font_size: u8,
    pub color_blind_mode: bool,
}

/// Accepts any JSON number for `fontSize` and rounds it into the allowed range.
fn font_size_from_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    let size = f64::deserialize(deserializer)?;
    Ok(size
        .round()
        .clamp(f64::from(MIN_FONT_SIZE), f64::from(MAX_FONT_SIZE)) as u8)
}

impl Default for AccessibilitySettings {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            color_blind_mode: false,
        }
    }
}

impl AccessibilitySettings {
    /// Reads the stored settings; anything unreadable gives the defaults.
    pub fn load(store: &impl KeyValueStore) -> Self {
        let Some(raw) = store.get(ACCESSIBILITY_KEY) else {
            return Self::default();
        };
        match serde_json::from_str::<AccessibilitySettings>(&raw) {
            Ok(settings) => settings.clamped(),
            Err(err) => {
                log::warn!("Ignoring stored accessibility settings: {err}");
                Self::default()
            }
        }
    }

    pub fn save(&self, store: &impl KeyValueStore) {
        match serde_json::to_string(self) {
            Ok(json) => store.set(ACCESSIBILITY_KEY, &json),
            Err(err) => log::warn!("Could not serialize accessibility settings: {err}"),
        }
    }

    pub fn larger(self) -> Self {
        Self {
            font_size: self.font_size.saturating_add(FONT_STEP),
            ..self
        }
        .clamped()
    }

    pub fn smaller(self) -> Self {
        Self {
            font_size: self.font_size.saturating_sub(FONT_STEP),
            ..self
        }
        .clamped()
    }

    pub fn with_color_blind_mode(self, enabled: bool) -> Self {
        Self {
            color_blind_mode: enabled,
            ..self
        }
    }

    fn clamped(self) -> Self {
        Self {
            font_size: self.font_size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn stored_json_uses_camel_case() {
        let store = MemoryStore::default();
        AccessibilitySettings {
            font_size: 20,
            color_blind_mode: true,
        }
        .save(&store);
        assert_eq!(
            store.get(ACCESSIBILITY_KEY).as_deref(),
            Some(r#"{"fontSize":20,"colorBlindMode":true}"#)
        );
        assert_eq!(AccessibilitySettings::load(&store).font_size, 20);
    }

    #[test]
    fn malformed_json_loads_defaults() {
        let store = MemoryStore::default();
        store.set(ACCESSIBILITY_KEY, "{fontSize: big}");
        assert_eq!(AccessibilitySettings::load(&store), AccessibilitySettings::default());
    }

    #[test]
    fn out_of_range_font_size_is_clamped_on_load() {
        let store = MemoryStore::default();
        store.set(ACCESSIBILITY_KEY, r#"{"fontSize":200,"colorBlindMode":false}"#);
        assert_eq!(AccessibilitySettings::load(&store).font_size, MAX_FONT_SIZE);
    }

    #[test]
    fn oversized_font_size_keeps_color_blind_flag() {
        let store = MemoryStore::default();
        store.set(ACCESSIBILITY_KEY, r#"{"fontSize":300,"colorBlindMode":true}"#);
        assert_eq!(
            AccessibilitySettings::load(&store),
            AccessibilitySettings {
                font_size: MAX_FONT_SIZE,
                color_blind_mode: true,
            }
        );
    }

    #[test]
    fn fractional_and_negative_font_sizes_are_rounded_and_clamped() {
        let store = MemoryStore::default();
        store.set(ACCESSIBILITY_KEY, r#"{"fontSize":18.0,"colorBlindMode":true}"#);
        let settings = AccessibilitySettings::load(&store);
        assert_eq!(settings.font_size, 18);
        assert!(settings.color_blind_mode);

        store.set(ACCESSIBILITY_KEY, r#"{"fontSize":-1,"colorBlindMode":true}"#);
        let settings = AccessibilitySettings::load(&store);
        assert_eq!(settings.font_size, MIN_FONT_SIZE);
        assert!(settings.color_blind_mode);
    }

    #[test]
    fn font_steps_stop_at_the_bounds() {
        let mut settings = AccessibilitySettings::default();
        for _ in 0..10 {
            settings = settings.larger();
        }
        assert_eq!(settings.font_size, MAX_FONT_SIZE);
        for _ in 0..10 {
            settings = settings.smaller();
        }
        assert_eq!(settings.font_size, MIN_FONT_SIZE);
    }
}
