//! Token-driven style resolution for a small set of themeable UI components.
//!
//! Components declare variants; [`style`] resolves them against the
//! [`theme::Palette`] and the spacing scale into renderer-agnostic
//! appearances, and a host [`ui::Renderer`] draws the result.

mod config;
pub mod css;
pub mod error;
pub mod logging;
pub mod style;
pub mod theme;
pub mod tokens;
pub mod ui;

pub use error::{ToolkitError, ToolkitResult};
pub use theme::{ColorToken, Palette, Theme, ThemeMode};
pub use tokens::{parse_hex, try_parse_hex, Color, Spacing};

/// Entrypoint for hosts: sets up logging and loads the user's theme.
pub fn init() -> ToolkitResult<Theme> {
    logging::init();
    let theme = Theme::load()?;
    tracing::info!(overrides = theme.len(), "theme ready");
    Ok(theme)
}
