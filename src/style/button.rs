use super::{VisualSpec, COMPONENT_TOKENS};
use crate::theme::{ColorToken, Palette};
use crate::tokens::{Color, Font, FontToken, FontWeight, Spacing};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ButtonStyle {
    #[default]
    Primary,
    Secondary,
    Destructive,
    Ghost,
}

impl ButtonStyle {
    pub const ALL: [ButtonStyle; 4] = [
        Self::Primary,
        Self::Secondary,
        Self::Destructive,
        Self::Ghost,
    ];

    pub const fn has_border(self) -> bool {
        matches!(self, Self::Secondary)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Destructive => "destructive",
            Self::Ghost => "ghost",
        }
    }

    fn foreground(self, palette: &Palette<'_>) -> Color {
        match self {
            Self::Primary | Self::Destructive => Color::WHITE,
            Self::Secondary | Self::Ghost => palette.color(ColorToken::Primary),
        }
    }

    fn background(self, palette: &Palette<'_>) -> Color {
        match self {
            Self::Primary => palette.color(ColorToken::Primary),
            Self::Secondary => palette
                .color(ColorToken::Primary)
                .with_opacity(COMPONENT_TOKENS.secondary_fill_opacity),
            Self::Destructive => palette.color(ColorToken::Destructive),
            Self::Ghost => Color::CLEAR,
        }
    }

    fn border_color(self, palette: &Palette<'_>) -> Color {
        match self {
            Self::Secondary => palette
                .color(ColorToken::Primary)
                .with_opacity(COMPONENT_TOKENS.secondary_border_opacity),
            Self::Primary | Self::Destructive | Self::Ghost => Color::CLEAR,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ButtonSize {
    pub const ALL: [ButtonSize; 3] = [Self::Small, Self::Medium, Self::Large];

    pub const fn vertical_padding(self) -> Spacing {
        match self {
            Self::Small => Spacing::Xs,
            Self::Medium => Spacing::Sm,
            Self::Large => Spacing::Md,
        }
    }

    pub const fn horizontal_padding(self) -> Spacing {
        match self {
            Self::Small => Spacing::Sm,
            Self::Medium => Spacing::Md,
            Self::Large => Spacing::Lg,
        }
    }

    pub const fn corner_radius(self) -> f64 {
        match self {
            Self::Small => COMPONENT_TOKENS.button_radius_small,
            Self::Medium => COMPONENT_TOKENS.button_radius_medium,
            Self::Large => COMPONENT_TOKENS.button_radius_large,
        }
    }

    pub const fn font(self) -> Font {
        match self {
            Self::Small => Font::new(FontToken::Subheadline, FontWeight::Medium),
            Self::Medium | Self::Large => Font::new(FontToken::Body, FontWeight::Semibold),
        }
    }
}

/// Host-owned state layered on top of the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ButtonState {
    pub enabled: bool,
    pub loading: bool,
}

impl ButtonState {
    pub const fn new(enabled: bool, loading: bool) -> Self {
        Self { enabled, loading }
    }
}

impl Default for ButtonState {
    fn default() -> Self {
        Self::new(true, false)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressIndicator {
    pub tint: Color,
    pub scale: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonAppearance {
    pub spec: VisualSpec,
    /// Indeterminate spinner laid out before the label while loading.
    pub progress: Option<ProgressIndicator>,
    pub content_gap: f64,
    pub accessibility_hint: &'static str,
}

pub fn resolve_button(
    style: ButtonStyle,
    size: ButtonSize,
    state: ButtonState,
    palette: &Palette<'_>,
) -> ButtonAppearance {
    let foreground = style.foreground(palette);
    let border_width = if style.has_border() {
        COMPONENT_TOKENS.border_width
    } else {
        0.0
    };

    let spec = VisualSpec {
        foreground,
        background: style.background(palette),
        border_color: style.border_color(palette),
        border_width,
        corner_radius: size.corner_radius(),
        vertical_padding: size.vertical_padding().value(),
        horizontal_padding: size.horizontal_padding().value(),
        font: size.font(),
        content_opacity: if state.loading {
            COMPONENT_TOKENS.button_loading_content_opacity
        } else {
            1.0
        },
        opacity: if state.enabled {
            1.0
        } else {
            COMPONENT_TOKENS.button_disabled_opacity
        },
        interactive: state.enabled && !state.loading,
    };

    let progress = state.loading.then_some(ProgressIndicator {
        tint: foreground,
        scale: COMPONENT_TOKENS.progress_scale,
    });

    ButtonAppearance {
        spec,
        progress,
        content_gap: COMPONENT_TOKENS.button_content_gap,
        accessibility_hint: if state.loading { "Loading" } else { "" },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    fn resolve(style: ButtonStyle, size: ButtonSize, state: ButtonState) -> ButtonAppearance {
        resolve_button(style, size, state, &Palette::fallback())
    }

    #[test]
    fn destructive_large_button_resolves_expected_spec() {
        let spec = resolve(
            ButtonStyle::Destructive,
            ButtonSize::Large,
            ButtonState::default(),
        )
        .spec;

        assert_eq!(spec.foreground, Color::WHITE);
        assert_eq!(spec.background, ColorToken::Destructive.fallback());
        assert_eq!(spec.border_width, 0.0);
        assert_eq!(spec.corner_radius, 10.0);
        assert_eq!(spec.vertical_padding, 16.0);
        assert_eq!(spec.horizontal_padding, 24.0);
        assert_eq!(spec.font, Font::new(FontToken::Body, FontWeight::Semibold));
    }

    #[test]
    fn resolution_is_pure() {
        let first = resolve(ButtonStyle::Primary, ButtonSize::Medium, ButtonState::default());
        let second = resolve(ButtonStyle::Primary, ButtonSize::Medium, ButtonState::default());
        assert_eq!(first, second);
    }

    #[test]
    fn corner_radius_grows_with_size() {
        let radii: Vec<f64> = ButtonSize::ALL
            .iter()
            .map(|size| resolve(ButtonStyle::Primary, *size, ButtonState::default()))
            .map(|appearance| appearance.spec.corner_radius)
            .collect();
        assert_eq!(radii, [6.0, 8.0, 10.0]);
        assert!(radii.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn only_secondary_has_a_border() {
        for style in ButtonStyle::ALL {
            for size in ButtonSize::ALL {
                let spec = resolve(style, size, ButtonState::default()).spec;
                if style == ButtonStyle::Secondary {
                    assert!(spec.border_width > 0.0);
                    assert_eq!(
                        spec.border_color,
                        ColorToken::Primary.fallback().with_opacity(0.3)
                    );
                } else {
                    assert_eq!(spec.border_width, 0.0, "{}", style.name());
                    assert!(spec.border_color.is_transparent());
                }
            }
        }
    }

    #[test]
    fn colors_follow_style() {
        let primary = ColorToken::Primary.fallback();
        let cases = [
            (ButtonStyle::Primary, Color::WHITE, primary),
            (ButtonStyle::Secondary, primary, primary.with_opacity(0.1)),
            (
                ButtonStyle::Destructive,
                Color::WHITE,
                ColorToken::Destructive.fallback(),
            ),
            (ButtonStyle::Ghost, primary, Color::CLEAR),
        ];
        for (style, foreground, background) in cases {
            let spec = resolve(style, ButtonSize::Medium, ButtonState::default()).spec;
            assert_eq!(spec.foreground, foreground, "{}", style.name());
            assert_eq!(spec.background, background, "{}", style.name());
        }
    }

    #[test]
    fn padding_and_font_follow_size() {
        let small = resolve(ButtonStyle::Ghost, ButtonSize::Small, ButtonState::default()).spec;
        assert_eq!((small.vertical_padding, small.horizontal_padding), (8.0, 12.0));
        assert_eq!(
            small.font,
            Font::new(FontToken::Subheadline, FontWeight::Medium)
        );

        let medium = resolve(ButtonStyle::Ghost, ButtonSize::Medium, ButtonState::default()).spec;
        assert_eq!((medium.vertical_padding, medium.horizontal_padding), (12.0, 16.0));
        assert_eq!(medium.font, Font::new(FontToken::Body, FontWeight::Semibold));
    }

    #[test]
    fn loading_dims_label_and_requests_tinted_spinner() {
        let appearance = resolve(
            ButtonStyle::Secondary,
            ButtonSize::Medium,
            ButtonState::new(true, true),
        );

        assert!(!appearance.spec.interactive);
        assert_eq!(appearance.spec.content_opacity, 0.7);
        assert_eq!(appearance.spec.opacity, 1.0);
        assert_eq!(appearance.accessibility_hint, "Loading");
        let progress = appearance.progress.expect("loading shows a spinner");
        assert_eq!(progress.tint, appearance.spec.foreground);
        assert_eq!(progress.scale, 0.8);
    }

    #[test]
    fn disabled_fades_whole_control_without_touching_colors() {
        let enabled = resolve(ButtonStyle::Primary, ButtonSize::Small, ButtonState::default());
        let disabled = resolve(
            ButtonStyle::Primary,
            ButtonSize::Small,
            ButtonState::new(false, false),
        );

        assert_eq!(disabled.spec.opacity, 0.5);
        assert!(!disabled.spec.interactive);
        assert_eq!(disabled.spec.foreground, enabled.spec.foreground);
        assert_eq!(disabled.spec.background, enabled.spec.background);
        assert_eq!(disabled.spec.content_opacity, 1.0);
        assert!(disabled.progress.is_none());
        assert_eq!(disabled.accessibility_hint, "");
    }

    #[test]
    fn theme_primary_flows_into_every_primary_derived_color() {
        let brand = Color::from_rgb8(0x12, 0xAB, 0x34);
        let theme = Theme::new().with_color(ColorToken::Primary, brand);
        let palette = Palette::new(Some(&theme));

        let secondary = resolve_button(
            ButtonStyle::Secondary,
            ButtonSize::Medium,
            ButtonState::default(),
            &palette,
        )
        .spec;
        assert_eq!(secondary.foreground, brand);
        assert_eq!(secondary.background, brand.with_opacity(0.1));
        assert_eq!(secondary.border_color, brand.with_opacity(0.3));
    }
}
