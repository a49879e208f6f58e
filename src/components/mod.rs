pub mod app;
pub mod confetti_canvas;
pub mod controls_panel;
pub mod emoji_flood;
pub mod grid_view;
pub mod stats_panel;
pub mod toast_banner;
