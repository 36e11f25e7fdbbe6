use std::collections::BTreeMap;

use crate::tokens::{parse_hex, Color};

/// Semantic color roles. Every role has a compiled-in fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColorToken {
    Primary,
    Secondary,
    Success,
    Warning,
    Destructive,
    TextPrimary,
    TextSecondary,
    BackgroundPrimary,
    BackgroundSecondary,
    Border,
}

impl ColorToken {
    pub const ALL: [ColorToken; 10] = [
        Self::Primary,
        Self::Secondary,
        Self::Success,
        Self::Warning,
        Self::Destructive,
        Self::TextPrimary,
        Self::TextSecondary,
        Self::BackgroundPrimary,
        Self::BackgroundSecondary,
        Self::Border,
    ];

    pub const fn fallback_hex(self) -> &'static str {
        match self {
            Self::Primary => "007AFF",
            Self::Secondary => "5856D6",
            Self::Success => "34C759",
            Self::Warning => "FF9500",
            Self::Destructive => "FF3B30",
            Self::TextPrimary => "000000",
            Self::TextSecondary => "6B7280",
            Self::BackgroundPrimary => "FFFFFF",
            Self::BackgroundSecondary => "F3F4F6",
            Self::Border => "E5E7EB",
        }
    }

    pub fn fallback(self) -> Color {
        parse_hex(self.fallback_hex())
    }

    /// Key used for this token in `theme.json`.
    pub const fn config_key(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Destructive => "destructive",
            Self::TextPrimary => "text_primary",
            Self::TextSecondary => "text_secondary",
            Self::BackgroundPrimary => "background_primary",
            Self::BackgroundSecondary => "background_secondary",
            Self::Border => "border",
        }
    }
}

/// Named color overrides supplied by the host. Tokens without an override use
/// their fallback.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Theme {
    colors: BTreeMap<ColorToken, Color>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color(mut self, token: ColorToken, color: Color) -> Self {
        self.set_color(token, color);
        self
    }

    pub fn set_color(&mut self, token: ColorToken, color: Color) {
        self.colors.insert(token, color);
    }

    pub fn color(&self, token: ColorToken) -> Option<Color> {
        self.colors.get(&token).copied()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Two-tier color lookup: theme override first, compiled fallback second.
#[derive(Debug, Clone, Copy, Default)]
pub struct Palette<'a> {
    theme: Option<&'a Theme>,
}

impl<'a> Palette<'a> {
    pub const fn new(theme: Option<&'a Theme>) -> Self {
        Self { theme }
    }

    pub const fn fallback() -> Self {
        Self { theme: None }
    }

    pub fn theme(&self) -> Option<&'a Theme> {
        self.theme
    }

    pub fn color(&self, token: ColorToken) -> Color {
        self.theme
            .and_then(|theme| theme.color(token))
            .unwrap_or_else(|| token.fallback())
    }
}
