//! Pure style resolution: variant + state in, visual specification out.
//!
//! Every resolver is a total function over closed enums. Nothing here is
//! cached; callers resolve again on every state change.

mod button;
mod card;
mod text;
mod text_field;
mod toggle;

use crate::tokens::{Color, Font, Spacing};

pub use button::{
    resolve_button, ButtonAppearance, ButtonSize, ButtonState, ButtonStyle, ProgressIndicator,
};
pub use card::{resolve_card, CardAppearance, CardStyle, Shadow};
pub use text::{resolve_text, ColorStyle, TextAppearance, TextStyle};
pub use text_field::{resolve_text_field, TextFieldAppearance, TextFieldStyle};
pub use toggle::{resolve_toggle, LabelPosition, ToggleAppearance};

/// Renderer-agnostic paint, spacing and typography for one control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualSpec {
    pub foreground: Color,
    pub background: Color,
    pub border_color: Color,
    pub border_width: f64,
    pub corner_radius: f64,
    pub vertical_padding: f64,
    pub horizontal_padding: f64,
    pub font: Font,
    /// Opacity of the label/content only.
    pub content_opacity: f64,
    /// Opacity of the whole composited control.
    pub opacity: f64,
    pub interactive: bool,
}

/// Compile-time component metrics, not user-overridable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentTokens {
    pub button_radius_small: f64,
    pub button_radius_medium: f64,
    pub button_radius_large: f64,
    pub button_content_gap: f64,
    pub button_disabled_opacity: f64,
    pub button_loading_content_opacity: f64,
    pub progress_scale: f64,
    pub secondary_fill_opacity: f64,
    pub secondary_border_opacity: f64,
    pub border_width: f64,
    pub card_padding: f64,
    pub card_radius: f64,
    pub card_shadow_opacity: f64,
    pub card_shadow_radius: f64,
    pub card_shadow_offset: (f64, f64),
    pub field_radius: f64,
    pub field_padding: f64,
    pub field_slot_spacing: f64,
    pub field_disabled_opacity: f64,
    pub field_disabled_border_opacity: f64,
}

pub const COMPONENT_TOKENS: ComponentTokens = ComponentTokens {
    button_radius_small: 6.0,
    button_radius_medium: 8.0,
    button_radius_large: 10.0,
    button_content_gap: Spacing::Xs.value(),
    button_disabled_opacity: 0.5,
    button_loading_content_opacity: 0.7,
    progress_scale: 0.8,
    secondary_fill_opacity: 0.1,
    secondary_border_opacity: 0.3,
    border_width: 1.0,
    card_padding: Spacing::Md.value(),
    card_radius: 12.0,
    // Heavy for a drop shadow, but that is the shipped look.
    card_shadow_opacity: 0.8,
    card_shadow_radius: 8.0,
    card_shadow_offset: (5.0, 5.0),
    field_radius: 8.0,
    field_padding: Spacing::Sm.value(),
    field_slot_spacing: Spacing::Xxs.value(),
    field_disabled_opacity: 0.6,
    field_disabled_border_opacity: 0.5,
};

#[cfg(test)]
mod tests {
    use super::COMPONENT_TOKENS;

    #[test]
    fn component_tokens_keep_button_radius_ladder() {
        let tokens = COMPONENT_TOKENS;
        assert_eq!(tokens.button_radius_small, 6.0);
        assert_eq!(tokens.button_radius_medium, 8.0);
        assert_eq!(tokens.button_radius_large, 10.0);
    }

    #[test]
    fn component_tokens_derive_spacing_from_scale() {
        let tokens = COMPONENT_TOKENS;
        assert_eq!(tokens.button_content_gap, 8.0);
        assert_eq!(tokens.card_padding, 16.0);
        assert_eq!(tokens.field_padding, 12.0);
        assert_eq!(tokens.field_slot_spacing, 4.0);
    }

    #[test]
    fn component_tokens_opacities_are_fractions() {
        let tokens = COMPONENT_TOKENS;
        for value in [
            tokens.button_disabled_opacity,
            tokens.button_loading_content_opacity,
            tokens.progress_scale,
            tokens.secondary_fill_opacity,
            tokens.secondary_border_opacity,
            tokens.card_shadow_opacity,
            tokens.field_disabled_opacity,
            tokens.field_disabled_border_opacity,
        ] {
            assert!(value > 0.0 && value < 1.0, "{value}");
        }
    }
}
