use super::COMPONENT_TOKENS;
use crate::theme::{ColorToken, Palette};
use crate::tokens::Color;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardStyle {
    pub padding: f64,
    /// `None` resolves to the palette's secondary background.
    pub background: Option<Color>,
    pub corner_radius: f64,
    pub has_shadow: bool,
}

impl Default for CardStyle {
    fn default() -> Self {
        Self {
            padding: COMPONENT_TOKENS.card_padding,
            background: None,
            corner_radius: COMPONENT_TOKENS.card_radius,
            has_shadow: false,
        }
    }
}

/// Drop shadow. Always present; an invisible shadow is fully transparent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    pub color: Color,
    pub radius: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Shadow {
    pub fn is_visible(&self) -> bool {
        !self.color.is_transparent()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardAppearance {
    pub padding: f64,
    pub background: Color,
    pub corner_radius: f64,
    pub shadow: Shadow,
}

pub fn resolve_card(style: &CardStyle, palette: &Palette<'_>) -> CardAppearance {
    let (offset_x, offset_y) = COMPONENT_TOKENS.card_shadow_offset;
    // The horizontal offset applies even when the shadow is hidden.
    let shadow = if style.has_shadow {
        Shadow {
            color: Color::BLACK.with_opacity(COMPONENT_TOKENS.card_shadow_opacity),
            radius: COMPONENT_TOKENS.card_shadow_radius,
            offset_x,
            offset_y,
        }
    } else {
        Shadow {
            color: Color::CLEAR,
            radius: 0.0,
            offset_x,
            offset_y: 0.0,
        }
    };

    CardAppearance {
        padding: style.padding,
        background: style
            .background
            .unwrap_or_else(|| palette.color(ColorToken::BackgroundSecondary)),
        corner_radius: style.corner_radius,
        shadow,
    }
}
