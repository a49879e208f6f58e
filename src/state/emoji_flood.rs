// Crying-emoji flood shown on a loss.
use rand::Rng;

pub const FLOOD_EMOJI: &str = "😭";
pub const MAX_DELAY_MS: f64 = 1000.0;
pub const MIN_FALL_MS: f64 = 3000.0;
pub const MAX_FALL_MS: f64 = 6500.0;
/// Extra time after the slowest drop before the layer is removed.
pub const CLEANUP_BUFFER_MS: u32 = 1200;

#[derive(Clone, Debug, PartialEq)]
pub struct EmojiDrop {
    /// Horizontal position, percent of container width.
    pub left_pct: f64,
    pub size_px: u32,
    pub delay_ms: f64,
    pub duration_ms: f64,
    pub drift_px: f64,
}

impl EmojiDrop {
    pub fn style(&self) -> String {
        format!(
            "left:{:.2}%; font-size:{}px; opacity:0.95; animation:emojiFall {:.0}ms linear {:.0}ms forwards; transform:translateX({:.1}px);",
            self.left_pct, self.size_px, self.duration_ms, self.delay_ms, self.drift_px
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EmojiFlood {
    pub drops: Vec<EmojiDrop>,
}

impl EmojiFlood {
    pub fn new<R: Rng>(rng: &mut R, count: u32) -> Self {
        let drops = (0..count)
            .map(|_| EmojiDrop {
                left_pct: rng.random::<f64>() * 100.0,
                size_px: 18 + rng.random_range(0..40),
                delay_ms: rng.random::<f64>() * MAX_DELAY_MS,
                duration_ms: MIN_FALL_MS + rng.random::<f64>() * (MAX_FALL_MS - MIN_FALL_MS),
                drift_px: (rng.random::<f64>() - 0.5) * 60.0,
            })
            .collect();
        Self { drops }
    }

    /// How long the flood layer stays mounted: the latest possible landing plus a buffer.
    pub fn lifetime_ms() -> u32 {
        (MAX_DELAY_MS + MAX_FALL_MS) as u32 + CLEANUP_BUFFER_MS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn drops_stay_in_documented_ranges() {
        let mut rng = Pcg32::seed_from_u64(5);
        let flood = EmojiFlood::new(&mut rng, 60);
        assert_eq!(flood.drops.len(), 60);
        for d in &flood.drops {
            assert!((0.0..100.0).contains(&d.left_pct));
            assert!((18..58).contains(&d.size_px));
            assert!(d.delay_ms < 1000.0);
            assert!((3000.0..6500.0).contains(&d.duration_ms));
            assert!(d.drift_px.abs() <= 30.0);
        }
    }

    #[test]
    fn lifetime_outlasts_every_drop() {
        let mut rng = Pcg32::seed_from_u64(8);
        let flood = EmojiFlood::new(&mut rng, 200);
        let slowest = flood
            .drops
            .iter()
            .map(|d| d.delay_ms + d.duration_ms)
            .fold(0.0, f64::max);
        assert!(slowest < EmojiFlood::lifetime_ms() as f64);
        assert_eq!(EmojiFlood::lifetime_ms(), 8700);
    }

    #[test]
    fn style_carries_animation() {
        let drop = EmojiDrop { left_pct: 12.5, size_px: 20, delay_ms: 100.0, duration_ms: 4000.0, drift_px: -3.0 };
        let style = drop.style();
        assert!(style.contains("left:12.50%"));
        assert!(style.contains("emojiFall 4000ms linear 100ms"));
    }
}
