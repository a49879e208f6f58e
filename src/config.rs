//! Round tuning. Defaults match the shipped game; a page may override any field
//! through a `<script id="game-config" type="application/json">` element.

use serde::{Deserialize, Serialize};

pub const CONFIG_ELEMENT_ID: &str = "game-config";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Collectibles needed to win.
    pub goal: u32,
    /// Countdown length of a round.
    pub round_secs: u32,
    pub spawn_period_ms: u32,
    pub countdown_period_ms: u32,
    /// Chance that a spawner tick places anything at all.
    pub spawn_chance: f64,
    /// Chance that a placed spawn is a hazard.
    pub hazard_chance: f64,
    /// Pause between reaching the goal and declaring the win.
    pub win_delay_ms: u32,
    /// Emoji drops released on a loss.
    pub flood_count: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            goal: 25,
            round_secs: 45,
            spawn_period_ms: 900,
            countdown_period_ms: 1000,
            spawn_chance: 0.8,
            hazard_chance: 0.18,
            win_delay_ms: 700,
            flood_count: 60,
        }
    }
}

impl GameConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<GameConfig>(raw).map(GameConfig::sanitized)
    }

    /// Reads the page config element. Missing element means defaults.
    pub fn from_document() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        let Some(raw) = raw else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(cfg) => cfg,
            Err(err) => {
                log::warn!("ignoring malformed #{CONFIG_ELEMENT_ID}: {err}");
                Self::default()
            }
        }
    }

    /// Replaces out-of-range fields with their defaults.
    pub fn sanitized(mut self) -> Self {
        let d = Self::default();
        if self.goal == 0 {
            log::warn!("goal must be positive, using {}", d.goal);
            self.goal = d.goal;
        }
        if self.round_secs == 0 {
            log::warn!("round_secs must be positive, using {}", d.round_secs);
            self.round_secs = d.round_secs;
        }
        if self.spawn_period_ms == 0 {
            self.spawn_period_ms = d.spawn_period_ms;
        }
        if self.countdown_period_ms == 0 {
            self.countdown_period_ms = d.countdown_period_ms;
        }
        if !(0.0..=1.0).contains(&self.spawn_chance) {
            log::warn!("spawn_chance {} out of range", self.spawn_chance);
            self.spawn_chance = d.spawn_chance;
        }
        if !(0.0..=1.0).contains(&self.hazard_chance) {
            log::warn!("hazard_chance {} out of range", self.hazard_chance);
            self.hazard_chance = d.hazard_chance;
        }
        self
    }

    /// Score that triggers the halfway toast.
    pub fn halfway(&self) -> u32 {
        self.goal / 2
    }
}
