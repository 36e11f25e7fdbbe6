use super::{Component, RenderContext, Renderer};
use crate::style::{resolve_card, CardAppearance, CardStyle};
use crate::theme::Palette;
use crate::tokens::Color;

/// Styled surface around arbitrary content. The content is rendered in place
/// and never inspected.
#[derive(Debug, Clone, PartialEq)]
pub struct Card<C> {
    style: CardStyle,
    content: C,
}

impl<C> Card<C> {
    pub fn new(content: C) -> Self {
        Self {
            style: CardStyle::default(),
            content,
        }
    }

    pub fn padding(mut self, padding: f64) -> Self {
        self.style.padding = padding;
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.style.background = Some(color);
        self
    }

    pub fn corner_radius(mut self, corner_radius: f64) -> Self {
        self.style.corner_radius = corner_radius;
        self
    }

    pub fn shadow(mut self, has_shadow: bool) -> Self {
        self.style.has_shadow = has_shadow;
        self
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    pub fn appearance(&self, palette: &Palette<'_>) -> CardAppearance {
        resolve_card(&self.style, palette)
    }
}

impl<C: Component> Component for Card<C> {
    fn render<R: Renderer>(&self, renderer: &mut R, ctx: &RenderContext<'_>) {
        renderer.begin_card(&self.appearance(&ctx.palette));
        self.content.render(renderer, ctx);
        renderer.end_card();
    }
}
