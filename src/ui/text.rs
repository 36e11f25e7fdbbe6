use super::{Component, RenderContext, Renderer};
use crate::style::{resolve_text, ColorStyle, TextAppearance, TextStyle};
use crate::theme::Palette;

#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    content: String,
    style: TextStyle,
    color: ColorStyle,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            style: TextStyle::default(),
            color: ColorStyle::default(),
        }
    }

    pub fn style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    pub fn color(mut self, color: ColorStyle) -> Self {
        self.color = color;
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn appearance(&self, palette: &Palette<'_>) -> TextAppearance {
        resolve_text(self.style, self.color, palette)
    }
}

impl Component for Text {
    fn render<R: Renderer>(&self, renderer: &mut R, ctx: &RenderContext<'_>) {
        renderer.text(&self.content, &self.appearance(&ctx.palette));
    }
}
