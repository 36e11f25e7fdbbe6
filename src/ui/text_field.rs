use std::fmt;

use super::{Component, RenderContext, Renderer, TextFieldNode};
use crate::style::{resolve_text_field, TextFieldAppearance, TextFieldStyle};
use crate::theme::Palette;

/// Labeled single-line input. Holds a snapshot of the host-owned value and
/// reports edits through `on_change`; it never mutates the value itself.
pub struct TextField {
    placeholder: String,
    value: String,
    style: TextFieldStyle,
    label: Option<String>,
    error_message: Option<String>,
    on_change: Box<dyn Fn(String)>,
}

impl TextField {
    pub fn new(
        placeholder: impl Into<String>,
        value: impl Into<String>,
        on_change: impl Fn(String) + 'static,
    ) -> Self {
        Self {
            placeholder: placeholder.into(),
            value: value.into(),
            style: TextFieldStyle::default(),
            label: None,
            error_message: None,
            on_change: Box::new(on_change),
        }
    }

    pub fn style(mut self, style: TextFieldStyle) -> Self {
        self.style = style;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn appearance(&self, palette: &Palette<'_>, enabled: bool) -> TextFieldAppearance {
        resolve_text_field(self.style, enabled, palette)
    }

    fn accepts_input(&self, enabled: bool) -> bool {
        enabled && !self.style.is_disabled()
    }

    /// Forwards an edit to the host. Disabled fields drop it; returns whether
    /// it was forwarded.
    pub fn input(&self, value: impl Into<String>, enabled: bool) -> bool {
        if !self.accepts_input(enabled) {
            tracing::debug!(
                placeholder = self.placeholder.as_str(),
                "ignoring edit on disabled text field"
            );
            return false;
        }
        (self.on_change)(value.into());
        true
    }
}

fn non_empty(slot: &Option<String>) -> Option<&str> {
    slot.as_deref().filter(|text| !text.is_empty())
}

impl Component for TextField {
    fn render<R: Renderer>(&self, renderer: &mut R, ctx: &RenderContext<'_>) {
        renderer.text_field(&TextFieldNode {
            placeholder: &self.placeholder,
            value: &self.value,
            label: non_empty(&self.label),
            error_message: non_empty(&self.error_message),
            appearance: self.appearance(&ctx.palette, ctx.enabled),
        });
    }
}

impl fmt::Debug for TextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextField")
            .field("placeholder", &self.placeholder)
            .field("value", &self.value)
            .field("style", &self.style)
            .field("label", &self.label)
            .field("error_message", &self.error_message)
            .finish_non_exhaustive()
    }
}
