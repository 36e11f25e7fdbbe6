use super::{resolve_text, ColorStyle, TextAppearance, TextStyle};
use crate::theme::{ColorToken, Palette};
use crate::tokens::Color;

/// Which side of the switch the label sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LabelPosition {
    #[default]
    Leading,
    Trailing,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToggleAppearance {
    pub tint: Color,
    pub label: TextAppearance,
    pub label_position: LabelPosition,
    pub interactive: bool,
}

pub fn resolve_toggle(
    label_position: LabelPosition,
    enabled: bool,
    palette: &Palette<'_>,
) -> ToggleAppearance {
    ToggleAppearance {
        tint: palette.color(ColorToken::Primary),
        label: resolve_text(TextStyle::Body, ColorStyle::Primary, palette),
        label_position,
        interactive: enabled,
    }
}
