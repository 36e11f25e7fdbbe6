//! Component facades. Each one keeps only its declared inputs, resolves a
//! fresh appearance on every render and hands it to a host [`Renderer`].

mod button;
mod card;
mod text;
mod text_field;
mod toggle;

use crate::style::{
    ButtonAppearance, CardAppearance, TextAppearance, TextFieldAppearance, ToggleAppearance,
};
use crate::theme::{Palette, Theme};

pub use button::Button;
pub use card::Card;
pub use text::Text;
pub use text_field::TextField;
pub use toggle::Toggle;

/// Explicit inputs that a host would otherwise provide implicitly.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub palette: Palette<'a>,
    pub enabled: bool,
}

impl<'a> RenderContext<'a> {
    pub const fn new(theme: Option<&'a Theme>) -> Self {
        Self {
            palette: Palette::new(theme),
            enabled: true,
        }
    }

    pub fn with_enabled(self, enabled: bool) -> Self {
        Self { enabled, ..self }
    }
}

impl Default for RenderContext<'_> {
    fn default() -> Self {
        Self::new(None)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonNode<'a> {
    pub title: &'a str,
    pub appearance: ButtonAppearance,
    /// Layout hint: stretch to the available width.
    pub full_width: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextFieldNode<'a> {
    pub placeholder: &'a str,
    pub value: &'a str,
    pub label: Option<&'a str>,
    pub error_message: Option<&'a str>,
    pub appearance: TextFieldAppearance,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToggleNode<'a> {
    pub label: &'a str,
    pub is_on: bool,
    pub appearance: ToggleAppearance,
}

/// Host drawing surface. Implementations draw, lay out and hit-test; they
/// receive fully resolved appearances and never resolve styles themselves.
pub trait Renderer {
    fn button(&mut self, node: &ButtonNode<'_>);

    fn text(&mut self, content: &str, appearance: &TextAppearance);

    fn text_field(&mut self, node: &TextFieldNode<'_>);

    fn toggle(&mut self, node: &ToggleNode<'_>);

    /// Opens a card surface; everything rendered until [`Renderer::end_card`]
    /// is the card's content.
    fn begin_card(&mut self, appearance: &CardAppearance);

    fn end_card(&mut self);
}

pub trait Component {
    fn render<R: Renderer>(&self, renderer: &mut R, ctx: &RenderContext<'_>);
}

impl Component for () {
    fn render<R: Renderer>(&self, _renderer: &mut R, _ctx: &RenderContext<'_>) {}
}

impl<T: Component + ?Sized> Component for &T {
    fn render<R: Renderer>(&self, renderer: &mut R, ctx: &RenderContext<'_>) {
        (**self).render(renderer, ctx);
    }
}

impl<T: Component> Component for [T] {
    fn render<R: Renderer>(&self, renderer: &mut R, ctx: &RenderContext<'_>) {
        for child in self {
            child.render(renderer, ctx);
        }
    }
}

impl<T: Component> Component for Vec<T> {
    fn render<R: Renderer>(&self, renderer: &mut R, ctx: &RenderContext<'_>) {
        self.as_slice().render(renderer, ctx);
    }
}

macro_rules! impl_component_for_tuple {
    ($($name:ident),+) => {
        impl<$($name: Component),+> Component for ($($name,)+) {
            #[allow(non_snake_case)]
            fn render<Rend: Renderer>(&self, renderer: &mut Rend, ctx: &RenderContext<'_>) {
                let ($($name,)+) = self;
                $($name.render(renderer, ctx);)+
            }
        }
    };
}

impl_component_for_tuple!(A);
impl_component_for_tuple!(A, B);
impl_component_for_tuple!(A, B, C);
impl_component_for_tuple!(A, B, C, D);
