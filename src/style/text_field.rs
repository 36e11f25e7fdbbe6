use super::{resolve_text, ColorStyle, TextAppearance, TextStyle, VisualSpec, COMPONENT_TOKENS};
use crate::theme::{ColorToken, Palette};
use crate::tokens::{Color, Font, FontToken};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextFieldStyle {
    #[default]
    Default,
    Error,
    Disabled,
}

impl TextFieldStyle {
    pub const ALL: [TextFieldStyle; 3] = [Self::Default, Self::Error, Self::Disabled];

    pub const fn is_disabled(self) -> bool {
        matches!(self, Self::Disabled)
    }

    fn border_color(self, palette: &Palette<'_>) -> Color {
        match self {
            Self::Default => palette.color(ColorToken::Border),
            Self::Error => palette.color(ColorToken::Destructive),
            Self::Disabled => palette
                .color(ColorToken::Border)
                .with_opacity(COMPONENT_TOKENS.field_disabled_border_opacity),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextFieldAppearance {
    pub field: VisualSpec,
    /// Style for the optional label above the field.
    pub label: TextAppearance,
    /// Style for the optional error message below the field.
    pub error_message: TextAppearance,
    pub slot_spacing: f64,
}

/// `enabled` is the host's state; a `Disabled` style stays inert regardless.
pub fn resolve_text_field(
    style: TextFieldStyle,
    enabled: bool,
    palette: &Palette<'_>,
) -> TextFieldAppearance {
    let interactive = enabled && !style.is_disabled();
    let field = VisualSpec {
        foreground: palette.color(ColorToken::TextPrimary),
        background: palette.color(ColorToken::BackgroundSecondary),
        border_color: style.border_color(palette),
        border_width: COMPONENT_TOKENS.border_width,
        corner_radius: COMPONENT_TOKENS.field_radius,
        vertical_padding: COMPONENT_TOKENS.field_padding,
        horizontal_padding: COMPONENT_TOKENS.field_padding,
        font: Font::of(FontToken::Body),
        content_opacity: 1.0,
        opacity: if interactive {
            1.0
        } else {
            COMPONENT_TOKENS.field_disabled_opacity
        },
        interactive,
    };


    TextFieldAppearance {
        field,
        label: resolve_text(TextStyle::Subheadline, ColorStyle::Secondary, palette),
        error_message: resolve_text(TextStyle::Caption, ColorStyle::Destructive, palette),
        slot_spacing: COMPONENT_TOKENS.field_slot_spacing,
    }
}
