pub mod confetti;
pub mod emoji_flood;
pub mod grid;
pub mod spawner;
pub mod toast;

pub use confetti::ConfettiBurst;
pub use emoji_flood::EmojiFlood;
pub use grid::{GRID_COLUMNS, Grid, Spawn, SpawnId, SpawnKind};
pub use toast::{Toast, ToastKind};
