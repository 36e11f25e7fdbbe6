use std::fmt;

use super::{ButtonNode, Component, RenderContext, Renderer};
use crate::style::{resolve_button, ButtonAppearance, ButtonSize, ButtonState, ButtonStyle};
use crate::theme::Palette;

/// Tappable control with a text label.
pub struct Button {
    title: String,
    style: ButtonStyle,
    size: ButtonSize,
    full_width: bool,
    loading: bool,
    on_activate: Box<dyn Fn()>,
}

impl Button {
    pub fn new(title: impl Into<String>, on_activate: impl Fn() + 'static) -> Self {
        Self {
            title: title.into(),
            style: ButtonStyle::default(),
            size: ButtonSize::default(),
            full_width: false,
            loading: false,
            on_activate: Box::new(on_activate),
        }
    }

    pub fn style(mut self, style: ButtonStyle) -> Self {
        self.style = style;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn appearance(&self, palette: &Palette<'_>, enabled: bool) -> ButtonAppearance {
        resolve_button(
            self.style,
            self.size,
            ButtonState::new(enabled, self.loading),
            palette,
        )
    }

    /// Handles one discrete user activation. The callback runs only while the
    /// button is enabled and not loading; returns whether it ran.
    pub fn activate(&self, enabled: bool) -> bool {
        if !enabled || self.loading {
            tracing::debug!(
                title = self.title.as_str(),
                enabled,
                loading = self.loading,
                "ignoring activation of inert button"
            );
            return false;
        }
        (self.on_activate)();
        true
    }
}

impl Component for Button {
    fn render<R: Renderer>(&self, renderer: &mut R, ctx: &RenderContext<'_>) {
        renderer.button(&ButtonNode {
            title: &self.title,
            appearance: self.appearance(&ctx.palette, ctx.enabled),
            full_width: self.full_width,
        });
    }
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("title", &self.title)
            .field("style", &self.style)
            .field("size", &self.size)
            .field("full_width", &self.full_width)
            .field("loading", &self.loading)
            .finish_non_exhaustive()
    }
}
