use crate::theme::{ColorToken, Palette};
use crate::tokens::{Color, Font, FontToken};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextStyle {
    LargeTitle,
    Title1,
    Title2,
    Title3,
    Headline,
    #[default]
    Body,
    Subheadline,
    Footnote,
    Callout,
    Caption,
}

impl TextStyle {
    pub const ALL: [TextStyle; 10] = [
        Self::LargeTitle,
        Self::Title1,
        Self::Title2,
        Self::Title3,
        Self::Headline,
        Self::Body,
        Self::Subheadline,
        Self::Footnote,
        Self::Callout,
        Self::Caption,
    ];

    pub const fn font_token(self) -> FontToken {
        match self {
            Self::LargeTitle => FontToken::LargeTitle,
            Self::Title1 => FontToken::Title,
            Self::Title2 => FontToken::Title2,
            Self::Title3 => FontToken::Title3,
            Self::Headline => FontToken::Headline,
            Self::Body => FontToken::Body,
            Self::Subheadline => FontToken::Subheadline,
            Self::Footnote => FontToken::Footnote,
            Self::Callout => FontToken::Callout,
            Self::Caption => FontToken::Caption,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ColorStyle {
    #[default]
    Primary,
    Secondary,
    Destructive,
    Success,
    /// Bypasses the palette entirely.
    Custom(Color),
}

impl ColorStyle {
    pub fn resolve(self, palette: &Palette<'_>) -> Color {
        match self {
            Self::Primary => palette.color(ColorToken::TextPrimary),
            Self::Secondary => palette.color(ColorToken::TextSecondary),
            Self::Destructive => palette.color(ColorToken::Destructive),
            Self::Success => palette.color(ColorToken::Success),
            Self::Custom(color) => color,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextAppearance {
    pub font: Font,
    pub color: Color,
}

pub fn resolve_text(style: TextStyle, color: ColorStyle, palette: &Palette<'_>) -> TextAppearance {
    TextAppearance {
        font: Font::of(style.font_token()),
        color: color.resolve(palette),
    }
}
