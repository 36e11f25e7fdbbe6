//! Reference [`Renderer`] for CSS-styled hosts: turns resolved appearances
//! into one rule per control.

use std::fmt::Write as _;

use crate::style::{CardAppearance, LabelPosition, TextAppearance, VisualSpec};
use crate::tokens::Font;
use crate::ui::{ButtonNode, Component, RenderContext, Renderer, TextFieldNode, ToggleNode};

const CLASS_PREFIX: &str = "tk";

/// Collects CSS text. Each control gets a numbered class, e.g. `.tk-button-0`.
#[derive(Debug, Default)]
pub struct CssRenderer {
    css: String,
    next_id: usize,
    open_cards: Vec<String>,
}

impl CssRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.css
    }

    pub fn finish(self) -> String {
        if !self.open_cards.is_empty() {
            tracing::warn!(
                open = self.open_cards.len(),
                "css output finished with unclosed cards"
            );
        }
        self.css
    }

    fn class(&mut self, kind: &str) -> String {
        let class = format!("{CLASS_PREFIX}-{kind}-{}", self.next_id);
        self.next_id += 1;
        class
    }

    fn rule(&mut self, selector: &str, declarations: &[String]) {
        let _ = writeln!(self.css, "{selector} {{");
        for declaration in declarations {
            let _ = writeln!(self.css, "  {declaration};");
        }
        let _ = writeln!(self.css, "}}");
    }

    fn text_rule(&mut self, selector: &str, appearance: &TextAppearance) {
        let mut declarations = font_declarations(appearance.font);
        declarations.push(format!("color: {}", appearance.color.to_css()));
        self.rule(selector, &declarations);
    }
}

fn font_declarations(font: Font) -> Vec<String> {
    vec![
        format!("font: var(--{CLASS_PREFIX}-font-{})", font.token.name()),
        format!("font-weight: {}", font.weight.value()),
    ]
}

fn spec_declarations(spec: &VisualSpec) -> Vec<String> {
    let mut declarations = vec![
        format!("color: {}", spec.foreground.to_css()),
        format!("background: {}", spec.background.to_css()),
    ];
    if spec.border_width > 0.0 {
        declarations.push(format!(
            "border: {}px solid {}",
            spec.border_width,
            spec.border_color.to_css()
        ));
    } else {
        declarations.push("border: none".to_string());
    }
    declarations.push(format!("border-radius: {}px", spec.corner_radius));
    declarations.push(format!(
        "padding: {}px {}px",
        spec.vertical_padding, spec.horizontal_padding
    ));
    declarations.extend(font_declarations(spec.font));
    declarations.push(format!("opacity: {}", spec.opacity));
    if !spec.interactive {
        declarations.push("pointer-events: none".to_string());
    }
    declarations
}

impl Renderer for CssRenderer {
    fn button(&mut self, node: &ButtonNode<'_>) {
        let class = self.class("button");
        let appearance = &node.appearance;
        let mut declarations = spec_declarations(&appearance.spec);
        if node.full_width {
            declarations.push("width: 100%".to_string());
        }
        self.rule(&format!(".{class}"), &declarations);
        self.rule(
            &format!(".{class} .{CLASS_PREFIX}-label"),
            &[format!("opacity: {}", appearance.spec.content_opacity)],
        );
        if let Some(progress) = appearance.progress {
            self.rule(
                &format!(".{class} .{CLASS_PREFIX}-progress"),
                &[
                    format!("color: {}", progress.tint.to_css()),
                    format!("transform: scale({})", progress.scale),
                    format!("margin-right: {}px", appearance.content_gap),
                ],
            );
        }
    }

    fn text(&mut self, _content: &str, appearance: &TextAppearance) {
        let class = self.class("text");
        self.text_rule(&format!(".{class}"), appearance);
    }

    fn text_field(&mut self, node: &TextFieldNode<'_>) {
        let class = self.class("text-field");
        let appearance = &node.appearance;
        self.rule(&format!(".{class} input"), &spec_declarations(&appearance.field));
        self.rule(
            &format!(".{class}"),
            &[format!("gap: {}px", appearance.slot_spacing)],
        );
        if node.label.is_some() {
            self.text_rule(&format!(".{class} .{CLASS_PREFIX}-label"), &appearance.label);
        }
        if node.error_message.is_some() {
            self.text_rule(
                &format!(".{class} .{CLASS_PREFIX}-error"),
                &appearance.error_message,
            );
        }
    }

    fn toggle(&mut self, node: &ToggleNode<'_>) {
        let class = self.class("toggle");
        let appearance = &node.appearance;
        let direction = match appearance.label_position {
            LabelPosition::Leading => "row",
            LabelPosition::Trailing => "row-reverse",
        };
        let mut declarations = vec![
            format!("accent-color: {}", appearance.tint.to_css()),
            format!("flex-direction: {direction}"),
        ];
        if !appearance.interactive {
            declarations.push("pointer-events: none".to_string());
        }
        self.rule(&format!(".{class}"), &declarations);
        self.text_rule(&format!(".{class} .{CLASS_PREFIX}-label"), &appearance.label);
    }

    fn begin_card(&mut self, appearance: &CardAppearance) {
        let class = self.class("card");
        let shadow = appearance.shadow;
        self.rule(
            &format!(".{class}"),
            &[
                format!("background: {}", appearance.background.to_css()),
                format!("border-radius: {}px", appearance.corner_radius),
                format!("padding: {}px", appearance.padding),
                format!(
                    "box-shadow: {}px {}px {}px {}",
                    shadow.offset_x,
                    shadow.offset_y,
                    shadow.radius,
                    shadow.color.to_css()
                ),
            ],
        );
        self.open_cards.push(class);
    }

    fn end_card(&mut self) {
        match self.open_cards.pop() {
            Some(class) => {
                let _ = writeln!(self.css, "/* end .{class} */");
            }
            None => tracing::warn!("end_card called without an open card"),
        }
    }
}

/// Renders a component tree to CSS text in one call.
pub fn render_css<C: Component + ?Sized>(component: &C, ctx: &RenderContext<'_>) -> String {
    let mut renderer = CssRenderer::new();
    component.render(&mut renderer, ctx);
    renderer.finish()
}
