// Achievement toast shown above the grid.
use serde::{Deserialize, Serialize};

pub const DEFAULT_TOAST_MS: u32 = 2200;
pub const SHORT_TOAST_MS: u32 = 1200;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToastKind {
    Started,
    Halfway,
    GoalReached,
    Hit,
    Won,
    Lost,
}

impl ToastKind {
    pub fn message(self) -> &'static str {
        match self {
            ToastKind::Started => "Game started! Collect the cans!",
            ToastKind::Halfway => "Halfway there! Keep going 🌊",
            ToastKind::GoalReached => "Goal reached! Well done 🎉",
            ToastKind::Hit => "Boom! You hit a bomb: -1",
            ToastKind::Won => "You saved the island! 🎉",
            ToastKind::Lost => "Time up! Try again.",
        }
    }

    pub fn duration_ms(self) -> u32 {
        match self {
            ToastKind::Started | ToastKind::Hit => SHORT_TOAST_MS,
            _ => DEFAULT_TOAST_MS,
        }
    }
}

/// A shown toast. `id` is unique per showing so a late dismissal of an older
/// toast cannot hide a newer one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
}

impl Toast {
    pub fn message(&self) -> &'static str {
        self.kind.message()
    }

    pub fn duration_ms(&self) -> u32 {
        self.kind.duration_ms()
    }
}
