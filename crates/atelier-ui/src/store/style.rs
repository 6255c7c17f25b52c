//! Derived views of the attribute record: the CSS custom properties a
//! preview box consumes, and a JSON snapshot for hosts.

use serde_json::{json, Value};

use crate::options::{Choice, FlexDirection};

use super::attributes::{Attributes, BoxEdges, StackAttributes};

/// Formats a number the way CSS expects it: no trailing `.0`, and float
/// noise past six decimals dropped.
pub(crate) fn css_number(n: f64) -> String {
    let rounded = (n * 1e6).round() / 1e6;
    if rounded.fract() == 0.0 && rounded.abs() < 1e15 {
        format!("{}", rounded as i64)
    } else {
        format!("{rounded}")
    }
}

/// Bare numbers become pixel lengths; anything else passes through.
fn px(v: &str) -> String {
    match v.trim().parse::<f64>() {
        Ok(n) => format!("{}px", css_number(n)),
        Err(_) => v.to_string(),
    }
}

/// CSS custom properties for the preview box, in a stable order.
///
/// Absent attributes produce no declaration. Opacity is written as a 0–1
/// fraction of the stored percentage.
pub fn box_style(attrs: &Attributes) -> Vec<(&'static str, String)> {
    let mut decls: Vec<(&'static str, String)> = Vec::new();
    let mut push = |name: &'static str, v: Option<String>| {
        if let Some(v) = v {
            decls.push((name, v));
        }
    };

    let stack = attrs.stack.as_ref();
    push("--mb--ai", stack.map(|s| s.align_items.flex_value().to_string()));
    push("--mb--blr", attrs.blur.map(css_number));
    push("--mb--d", stack.map(|s| s.display.clone()));
    push("--mb--fxd", stack.map(|s| s.flex_direction.css().to_string()));
    push("--mb--h", attrs.height.clone());
    push("--mb--jc", stack.map(|s| s.justify_content.flex_value().to_string()));
    push("--mb--mt", attrs.margin.as_ref().map(|m| m.top.clone()));
    push("--mb--mb", attrs.margin.as_ref().map(|m| m.bottom.clone()));
    push("--mb--ml", attrs.margin.as_ref().map(|m| m.left.clone()));
    push("--mb--mr", attrs.margin.as_ref().map(|m| m.right.clone()));
    push("--mb--pt", attrs.padding.as_ref().map(|p| p.top.clone()));
    push("--mb--pb", attrs.padding.as_ref().map(|p| p.bottom.clone()));
    push("--mb--pl", attrs.padding.as_ref().map(|p| p.left.clone()));
    push("--mb--pr", attrs.padding.as_ref().map(|p| p.right.clone()));
    push("--mb--op", attrs.opacity.map(|o| css_number(o / 100.0)));
    push("--mb--ov", attrs.overflow.map(|o| o.css().to_string()));
    push("--mb--w", attrs.width.clone());
    push("--mb-ms--sp", stack.map(|s| px(&s.gap)));

    decls
}

/// `"column"` for vertical stacks, `"row"` otherwise (including no stack).
pub fn stack_direction(attrs: &Attributes) -> &'static str {
    match attrs.stack.as_ref().map(|s| s.flex_direction) {
        Some(FlexDirection::Column) => "column",
        _ => "row",
    }
}

fn edges_json(e: &BoxEdges) -> Value {
    json!({ "top": e.top, "bottom": e.bottom, "left": e.left, "right": e.right })
}

fn stack_json(s: &StackAttributes) -> Value {
    json!({
        "display": s.display,
        "alignItems": s.align_items.css(),
        "justifyContent": s.justify_content.css(),
        "flexDirection": s.flex_direction.css(),
        "gap": s.gap,
    })
}

/// Snapshot of every attribute, absent ones as `null`, keyed by attribute name.
pub fn to_json(attrs: &Attributes) -> Value {
    json!({
        "height": attrs.height,
        "width": attrs.width,
        "margin": attrs.margin.as_ref().map(edges_json),
        "padding": attrs.padding.as_ref().map(edges_json),
        "stack": attrs.stack.as_ref().map(stack_json),
        "overflow": attrs.overflow.map(|o| o.css()),
        "opacity": attrs.opacity,
        "blur": attrs.blur,
        "font": attrs.font.as_ref().map(|f| json!({
            "family": f.family,
            "size": f.size,
            "weight": f.weight.numeric(),
        })),
        "letterSpacing": attrs.letter_spacing,
        "lineHeight": attrs.line_height,
        "textAlign": attrs.text_align.map(|t| t.css()),
        "textDecoration": attrs.text_decoration.map(|t| t.css()),
    })
}
