use std::fmt;

use super::{Component, RenderContext, Renderer, ToggleNode};
use crate::style::{resolve_toggle, LabelPosition, ToggleAppearance};
use crate::theme::Palette;

/// Labeled on/off switch over a host-owned boolean.
pub struct Toggle {
    label: String,
    is_on: bool,
    label_position: LabelPosition,
    on_change: Box<dyn Fn(bool)>,
}

impl Toggle {
    pub fn new(label: impl Into<String>, is_on: bool, on_change: impl Fn(bool) + 'static) -> Self {
        Self {
            label: label.into(),
            is_on,
            label_position: LabelPosition::default(),
            on_change: Box::new(on_change),
        }
    }

    pub fn label_position(mut self, label_position: LabelPosition) -> Self {
        self.label_position = label_position;
        self
    }

    pub fn is_on(&self) -> bool {
        self.is_on
    }

    pub fn appearance(&self, palette: &Palette<'_>, enabled: bool) -> ToggleAppearance {
        resolve_toggle(self.label_position, enabled, palette)
    }

    /// Requests the opposite of the current snapshot from the host.
    pub fn toggle(&self, enabled: bool) -> bool {
        if !enabled {
            tracing::debug!(label = self.label.as_str(), "ignoring flip of disabled toggle");
            return false;
        }
        (self.on_change)(!self.is_on);
        true
    }
}

impl Component for Toggle {
    fn render<R: Renderer>(&self, renderer: &mut R, ctx: &RenderContext<'_>) {
        renderer.toggle(&ToggleNode {
            label: &self.label,
            is_on: self.is_on,
            appearance: self.appearance(&ctx.palette, ctx.enabled),
        });
    }
}

impl fmt::Debug for Toggle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Toggle")
            .field("label", &self.label)
            .field("is_on", &self.is_on)
            .field("label_position", &self.label_position)
            .finish_non_exhaustive()
    }
}
