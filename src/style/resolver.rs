//! Folds a utility-class string into a [`StyleRecord`].
//!
//! Tokens are applied left to right, so a later token overrides an earlier
//! token of the same purpose. Unknown tokens are ignored.

use log::trace;

use super::palette;
use crate::models::{
    colors::Color,
    style::{
        CrossAlign, Display, FlexDirection, Gradient, Justify, LineHeight, StyleRecord, TextAlign,
    },
};

/// Canvas units per step of the numeric spacing scale (`p-4` = 0.2).
pub const SPACING_UNIT: f64 = 0.05;

/// Points per CSS pixel, used by arbitrary `text-[Npx]` sizes.
const PT_PER_PX: f64 = 0.75;

/// Gradient angle when no `bg-gradient-to-*` token is present (diagonal).
pub const DEFAULT_GRADIENT_ANGLE: f64 = 315.0;

/// Radius bucket (in pixels) for `rounded-full`.
pub const ROUNDED_FULL: f64 = 9999.0;

const BORDER_SIDES: [&str; 6] = ["t", "b", "l", "r", "x", "y"];
const ROUNDED_SIDES: [&str; 12] = ["t", "b", "l", "r", "tl", "tr", "bl", "br", "s", "e", "ss", "ee"];

/// Gradient endpoints collected while folding; finalised once all tokens are seen.
#[derive(Default)]
struct GradientParts {
    from: Option<Color>,
    to: Option<Color>,
    angle: Option<f64>,
}

/// Resolves a whitespace-separated class string into a style record.
///
/// Pure: the same input always yields an equal record, and `resolve("")`
/// yields `StyleRecord::default()`.
pub fn resolve(class_name: &str) -> StyleRecord {
    let mut style = StyleRecord::default();
    let mut gradient = GradientParts::default();

    for token in class_name.split_whitespace() {
        // Variant tokens (`hover:bg-blue-700`, `md:grid-cols-2`) never apply to a static page.
        if token.contains(':') {
            continue;
        }
        if !apply_token(&mut style, &mut gradient, token) {
            trace!("[resolve] ignoring unrecognised token '{}'", token);
        }
    }

    style.gradient = match (gradient.from, gradient.to) {
        (None, None) => None,
        (from, to) => {
            // One endpoint alone still yields a (flat) gradient.
            let from = from.or(to).unwrap_or(Color::WHITE);
            let to = to.unwrap_or(from);
            Some(Gradient {
                from,
                to,
                angle: gradient.angle.unwrap_or(DEFAULT_GRADIENT_ANGLE),
            })
        }
    };

    style
}

/// Applies one token. Returns false when the token is not recognised.
fn apply_token(style: &mut StyleRecord, gradient: &mut GradientParts, token: &str) -> bool {
    match token {
        "flex" | "inline-flex" => {
            style.display = Some(Display::Flex);
            return true;
        }
        "grid" | "inline-grid" => {
            style.display = Some(Display::Grid);
            return true;
        }
        "block" | "inline-block" => {
            style.display = Some(Display::Block);
            return true;
        }
        "flex-row" | "flex-row-reverse" => {
            style.flex_direction = Some(FlexDirection::Row);
            return true;
        }
        "flex-col" | "flex-col-reverse" => {
            style.flex_direction = Some(FlexDirection::Column);
            return true;
        }
        "border" => {
            style.border = Some(true);
            style.border_width = Some(1.0);
            return true;
        }
        "border-0" | "border-none" => {
            style.border = Some(false);
            style.border_width = Some(0.0);
            return true;
        }
        "rounded" => {
            style.border_radius = Some(4.0);
            return true;
        }
        "shadow" => {
            style.shadow = Some(true);
            return true;
        }
        "shadow-none" => {
            style.shadow = Some(false);
            return true;
        }
        _ => {}
    }

    if let Some(rest) = token.strip_prefix("grid-cols-") {
        if let Ok(columns) = rest.parse::<u32>() {
            if columns > 0 {
                style.grid_columns = Some(columns);
                return true;
            }
        }
        return false;
    }
    if let Some(rest) = token.strip_prefix("space-y-") {
        if let Some(gap) = spacing(rest) {
            style.stack = Some(true);
            style.gap = Some(gap);
            return true;
        }
        return false;
    }
    if let Some(rest) = token
        .strip_prefix("gap-x-")
        .or_else(|| token.strip_prefix("gap-y-"))
        .or_else(|| token.strip_prefix("gap-"))
    {
        return set(&mut style.gap, spacing(rest));
    }
    if let Some(rest) = token.strip_prefix("px-") {
        return set(&mut style.padding_x, spacing(rest));
    }
    if let Some(rest) = token.strip_prefix("py-") {
        return set(&mut style.padding_y, spacing(rest));
    }
    if let Some(rest) = token.strip_prefix("p-") {
        if let Some(value) = spacing(rest) {
            style.padding = Some(value);
            // A later uniform padding overrides earlier per-axis paddings.
            style.padding_x = None;
            style.padding_y = None;
            return true;
        }
        return false;
    }
    if let Some(rest) = token.strip_prefix("my-").or_else(|| token.strip_prefix("m-")) {
        if let Some(value) = spacing(rest) {
            style.margin_top = Some(value);
            style.margin_bottom = Some(value);
            return true;
        }
        return false;
    }
    if let Some(rest) = token.strip_prefix("mt-") {
        return set(&mut style.margin_top, spacing(rest));
    }
    if let Some(rest) = token.strip_prefix("mb-") {
        return set(&mut style.margin_bottom, spacing(rest));
    }
    if let Some(rest) = token.strip_prefix("size-") {
        if let Some(value) = spacing(rest) {
            style.width = Some(value);
            style.height = Some(value);
            return true;
        }
        return false;
    }
    if let Some(rest) = token.strip_prefix("w-") {
        return set(&mut style.width, spacing(rest));
    }
    if let Some(rest) = token.strip_prefix("h-") {
        return set(&mut style.height, spacing(rest));
    }
    if let Some(rest) = token.strip_prefix("leading-") {
        return set(&mut style.line_height, line_height(rest));
    }
    if let Some(rest) = token.strip_prefix("items-") {
        return set(&mut style.align_items, cross_align(rest));
    }
    if let Some(rest) = token.strip_prefix("justify-") {
        return set(&mut style.justify, justify(rest));
    }
    if let Some(rest) = token.strip_prefix("font-") {
        return set(&mut style.bold, font_weight(rest));
    }
    if let Some(rest) = token.strip_prefix("text-") {
        return apply_text_token(style, rest);
    }
    if let Some(rest) = token.strip_prefix("bg-gradient-to-") {
        return set(&mut gradient.angle, gradient_angle(rest));
    }
    if let Some(rest) = token.strip_prefix("bg-") {
        return set(&mut style.background, palette::lookup(rest));
    }
    if let Some(rest) = token.strip_prefix("from-") {
        return set(&mut gradient.from, palette::lookup(rest));
    }
    if let Some(rest) = token.strip_prefix("to-") {
        return set(&mut gradient.to, palette::lookup(rest));
    }
    if let Some(rest) = token.strip_prefix("border-") {
        return apply_border_token(style, rest);
    }
    if let Some(rest) = token.strip_prefix("rounded-") {
        return set(&mut style.border_radius, radius_bucket(rest));
    }
    if let Some(rest) = token.strip_prefix("shadow-") {
        if matches!(rest, "sm" | "md" | "lg" | "xl" | "2xl" | "inner") {
            style.shadow = Some(true);
            return true;
        }
        return false;
    }

    false
}

/// Stores `value` into `slot` when present. Returns whether anything was stored.
fn set<T>(slot: &mut Option<T>, value: Option<T>) -> bool {
    match value {
        Some(v) => {
            *slot = Some(v);
            true
        }
        None => false,
    }
}

/// `text-*`: alignment, font size or color.
fn apply_text_token(style: &mut StyleRecord, rest: &str) -> bool {
    let align = match rest {
        "left" | "start" => Some(TextAlign::Left),
        "center" => Some(TextAlign::Center),
        "right" | "end" => Some(TextAlign::Right),
        "justify" => Some(TextAlign::Justify),
        _ => None,
    };
    if align.is_some() {
        return set(&mut style.text_align, align);
    }
    if let Some(size) = font_size(rest) {
        style.font_size = Some(size);
        return true;
    }
    set(&mut style.color, palette::lookup(rest))
}

/// `border-*`: width, side, or color.
fn apply_border_token(style: &mut StyleRecord, rest: &str) -> bool {
    if let Ok(width) = rest.parse::<f64>() {
        style.border = Some(width > 0.0);
        style.border_width = Some(width);
        return true;
    }

    let (side, width) = match rest.split_once('-') {
        Some((side, width)) => (side, Some(width)),
        None => (rest, None),
    };
    if BORDER_SIDES.contains(&side) {
        match width {
            None => {
                style.border = Some(true);
                style.border_width = Some(1.0);
                return true;
            }
            Some(w) => {
                if let Ok(w) = w.parse::<f64>() {
                    style.border = Some(w > 0.0);
                    style.border_width = Some(w);
                    return true;
                }
                // `border-t-gray-200` style side colors fall through to the color lookup.
                if let Some(color) = palette::lookup(w) {
                    style.border = Some(true);
                    style.border_color = Some(color);
                    return true;
                }
                return false;
            }
        }
    }

    if let Some(color) = palette::lookup(rest) {
        style.border = Some(true);
        style.border_color = Some(color);
        return true;
    }
    false
}

/// Parses the numeric spacing scale (`4`, `1.5`, `px`) into canvas units.
fn spacing(value: &str) -> Option<f64> {
    if value == "px" {
        return Some(0.25 * SPACING_UNIT);
    }
    let steps = value.parse::<f64>().ok()?;
    (steps.is_finite() && steps >= 0.0).then_some(steps * SPACING_UNIT)
}

/// Named font sizes in points, plus arbitrary `[Npx]`/`[Npt]` values.
fn font_size(value: &str) -> Option<f64> {
    let named = match value {
        "xs" => 10.0,
        "sm" => 11.0,
        "base" => 13.0,
        "lg" => 15.0,
        "xl" => 18.0,
        "2xl" => 22.0,
        "3xl" => 28.0,
        "4xl" => 34.0,
        "5xl" => 42.0,
        "6xl" => 52.0,
        _ => {
            let inner = value.strip_prefix('[')?.strip_suffix(']')?;
            if let Some(px) = inner.strip_suffix("px") {
                return px.parse::<f64>().ok().map(|v| v * PT_PER_PX);
            }
            if let Some(pt) = inner.strip_suffix("pt") {
                return pt.parse::<f64>().ok();
            }
            return None;
        }
    };
    Some(named)
}

fn font_weight(value: &str) -> Option<bool> {
    match value {
        "bold" | "semibold" | "extrabold" | "black" => Some(true),
        "normal" | "medium" | "light" | "thin" | "extralight" => Some(false),
        _ => None,
    }
}

fn line_height(value: &str) -> Option<LineHeight> {
    let relative = match value {
        "none" => 1.0,
        "tight" => 1.25,
        "snug" => 1.375,
        "normal" => 1.5,
        "relaxed" => 1.625,
        "loose" => 2.0,
        _ => return spacing(value).map(LineHeight::Absolute),
    };
    Some(LineHeight::Relative(relative))
}

fn cross_align(value: &str) -> Option<CrossAlign> {
    match value {
        "start" => Some(CrossAlign::Start),
        "center" => Some(CrossAlign::Center),
        "end" => Some(CrossAlign::End),
        "stretch" => Some(CrossAlign::Stretch),
        "baseline" => Some(CrossAlign::Baseline),
        _ => None,
    }
}

fn justify(value: &str) -> Option<Justify> {
    match value {
        "start" => Some(Justify::Start),
        "center" => Some(Justify::Center),
        "end" => Some(Justify::End),
        "between" => Some(Justify::Between),
        "around" => Some(Justify::Around),
        "evenly" => Some(Justify::Evenly),
        _ => None,
    }
}

fn gradient_angle(direction: &str) -> Option<f64> {
    match direction {
        "r" => Some(0.0),
        "br" => Some(45.0),
        "b" => Some(90.0),
        "bl" => Some(135.0),
        "l" => Some(180.0),
        "tl" => Some(225.0),
        "t" => Some(270.0),
        "tr" => Some(315.0),
        _ => None,
    }
}

/// Radius bucket in pixels for `rounded-<size>` and side variants like `rounded-t-lg`.
fn radius_bucket(value: &str) -> Option<f64> {
    let size = match value.split_once('-') {
        Some((side, size)) if ROUNDED_SIDES.contains(&side) => size,
        _ if ROUNDED_SIDES.contains(&value) => return Some(4.0),
        _ => value,
    };
    match size {
        "none" => Some(0.0),
        "sm" => Some(2.0),
        "md" => Some(6.0),
        "lg" => Some(8.0),
        "xl" => Some(12.0),
        "2xl" => Some(16.0),
        "3xl" => Some(24.0),
        "full" => Some(ROUNDED_FULL),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Option<f64>, b: f64) -> bool {
        a.map_or(false, |a| (a - b).abs() < 1e-9)
    }

    #[test]
    fn test_card_classes_resolve() {
        let style = resolve("bg-blue-600 text-white font-bold rounded-xl p-3");
        assert_eq!(style.background, palette::lookup("blue-600"));
        assert_eq!(style.color, Some(Color::WHITE));
        assert_eq!(style.bold, Some(true));
        assert_eq!(style.border_radius, Some(12.0));
        assert!(approx(style.padding, 3.0 * SPACING_UNIT));
    }

    #[test]
    fn test_empty_and_unknown_tokens_yield_default() {
        assert_eq!(resolve(""), StyleRecord::default());
        assert_eq!(resolve("   "), StyleRecord::default());
        assert_eq!(
            resolve("transition hover:bg-blue-700 max-w-7xl mx-auto relative"),
            StyleRecord::default()
        );
    }

    #[test]
    fn test_resolve_is_pure() {
        let class = "flex items-center gap-2 bg-gradient-to-br from-blue-50 to-purple-100";
        assert_eq!(resolve(class), resolve(class));
    }

    #[test]
    fn test_later_tokens_win() {
        let style = resolve("text-gray-600 text-sm text-red-600 text-lg");
        assert_eq!(style.color, palette::lookup("red-600"));
        assert_eq!(style.font_size, Some(15.0));

        let style = resolve("px-4 p-2");
        assert!(approx(Some(style.padding_x_or(1.0)), 0.1));
        let style = resolve("p-2 px-4");
        assert!(approx(Some(style.padding_x_or(1.0)), 0.2));
        assert!(approx(Some(style.padding_y_or(1.0)), 0.1));
    }

    #[test]
    fn test_font_sizes_and_weights() {
        assert_eq!(resolve("text-xs").font_size, Some(10.0));
        assert_eq!(resolve("text-3xl").font_size, Some(28.0));
        assert_eq!(resolve("text-[16px]").font_size, Some(12.0));
        assert_eq!(resolve("font-semibold").bold, Some(true));
        assert_eq!(resolve("font-bold font-normal").bold, Some(false));
    }

    #[test]
    fn test_gradient_endpoints() {
        let style = resolve("bg-gradient-to-r from-blue-50 to-blue-100");
        let g = style.gradient.expect("gradient expected");
        assert_eq!(g.from, palette::lookup("blue-50").unwrap());
        assert_eq!(g.to, palette::lookup("blue-100").unwrap());
        assert_eq!(g.angle, 0.0);

        let style = resolve("from-green-50");
        let g = style.gradient.expect("single endpoint still yields a gradient");
        assert_eq!(g.from, g.to);
        assert_eq!(g.angle, DEFAULT_GRADIENT_ANGLE);

        let style = resolve("bg-gradient-to-br to-orange-100");
        let g = style.gradient.unwrap();
        assert_eq!(g.from, palette::lookup("orange-100").unwrap());
        assert_eq!(g.angle, 45.0);
    }

    #[test]
    fn test_borders() {
        let style = resolve("border-2 border-gray-300");
        assert!(style.has_border());
        assert_eq!(style.border_width, Some(2.0));
        assert_eq!(style.border_color, palette::lookup("gray-300"));

        let style = resolve("border-l-4 border-blue-500");
        assert_eq!(style.border_width, Some(4.0));
        assert!(style.has_border());

        assert!(resolve("border").has_border());
        assert!(resolve("border-t").has_border());
        assert!(!resolve("border border-0").has_border());
        assert!(!resolve("bg-white").has_border());
    }

    #[test]
    fn test_radius_buckets() {
        assert_eq!(resolve("rounded").border_radius, Some(4.0));
        assert_eq!(resolve("rounded-lg").border_radius, Some(8.0));
        assert_eq!(resolve("rounded-t-xl").border_radius, Some(12.0));
        assert_eq!(resolve("rounded-full").border_radius, Some(ROUNDED_FULL));
        assert_eq!(resolve("rounded-none").border_radius, Some(0.0));
    }

    #[test]
    fn test_layout_modes() {
        let style = resolve("grid grid-cols-3 gap-4");
        assert_eq!(style.display, Some(Display::Grid));
        assert_eq!(style.grid_columns, Some(3));
        assert!(approx(style.gap, 0.2));

        let style = resolve("flex flex-col items-center justify-between");
        assert_eq!(style.display, Some(Display::Flex));
        assert_eq!(style.flex_direction, Some(FlexDirection::Column));
        assert_eq!(style.align_items, Some(CrossAlign::Center));
        assert_eq!(style.justify, Some(Justify::Between));

        let style = resolve("space-y-2");
        assert_eq!(style.stack, Some(true));
        assert!(approx(style.gap, 0.1));
    }

    #[test]
    fn test_sizes_margins_and_line_height() {
        let style = resolve("w-8 h-8 mb-2 mt-1 leading-6 shadow-md");
        assert!(approx(style.width, 0.4));
        assert!(approx(style.height, 0.4));
        assert!(approx(style.margin_bottom, 0.1));
        assert!(approx(style.margin_top, 0.05));
        assert_eq!(style.line_height, Some(LineHeight::Absolute(6.0 * SPACING_UNIT)));
        assert_eq!(style.shadow, Some(true));

        let style = resolve("h-full w-1/2 p-1.5 leading-tight");
        assert_eq!(style.width, None);
        assert_eq!(style.height, None);
        assert!(approx(style.padding, 0.075));
        assert_eq!(style.line_height, Some(LineHeight::Relative(1.25)));
    }
}
