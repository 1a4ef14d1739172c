use std::time::Duration;

pub const APP_TITLE: &str = "enum.land";
pub const INPUT_TITLE: &str = " domain ";
pub const RESULTS_TITLE: &str = " Subdomains ";
pub const ERROR_TITLE: &str = " error ";
pub const LOADING_LABEL: &str = "Loading…";
pub const KEY_HINTS: &str = "Esc quit · ↑/↓ scroll · Ctrl-U clear";

/// Delay between iterations of the UI loop.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);
/// How long the input thread blocks waiting for a terminal event.
pub const INPUT_POLL: Duration = Duration::from_millis(50);
pub const PAGE_SCROLL: i32 = 10;
