pub mod banner;
pub mod render;
pub mod tui;

use crate::domain::Theme;

/// Prints the welcome banner and applies the theme for all subsequent inquire
/// prompts. Call once at startup (e.g. in main after tracing init).
pub fn init_ui(theme: Theme) {
    banner::print_welcome();
    tui::apply_theme(theme);
}
