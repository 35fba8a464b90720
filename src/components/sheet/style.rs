//! Inline style and class composition for the sheet container.

use crate::models::{SheetFrame, SheetMode};

/// Inline style for the sheet container.
///
/// Fixed-height sheets get their custom height (or `auto`) and always scroll;
/// expandable sheets only scroll once fullscreen. `extra` is appended last so
/// caller overrides win.
pub fn container_style(
    frame: &SheetFrame,
    mode: SheetMode,
    custom_height: Option<f64>,
    extra: Option<&str>,
) -> String {
    let mut style = format!("bottom: {}px;", frame.offset);

    if !mode.is_expandable() {
        match custom_height {
            Some(height) => style.push_str(&format!(" height: {}px;", height)),
            None => style.push_str(" height: auto;"),
        }
    }

    let overflow_y = if frame.is_fullscreen || !mode.is_expandable() {
        "scroll"
    } else {
        "hidden"
    };
    style.push_str(&format!(" overflow-y: {}; overflow-x: hidden;", overflow_y));

    if let Some(extra) = extra.map(str::trim).filter(|s| !s.is_empty()) {
        style.push(' ');
        style.push_str(extra);
    }
    style
}

/// Join class names, skipping empty ones.
pub fn class_list(classes: &[&str]) -> String {
    classes
        .iter()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AnimationTrigger;

    fn frame(offset: f64, is_fullscreen: bool) -> SheetFrame {
        SheetFrame {
            offset,
            animation: AnimationTrigger::None,
            is_fullscreen,
        }
    }

    #[test]
    fn test_fixed_height_auto() {
        assert_eq!(
            container_style(&frame(0.0, false), SheetMode::FixedHeight, None, None),
            "bottom: 0px; height: auto; overflow-y: scroll; overflow-x: hidden;"
        );
    }

    #[test]
    fn test_fixed_height_custom() {
        assert_eq!(
            container_style(&frame(-25.5, false), SheetMode::FixedHeight, Some(320.0), None),
            "bottom: -25.5px; height: 320px; overflow-y: scroll; overflow-x: hidden;"
        );
    }

    #[test]
    fn test_expandable_half_and_full() {
        assert_eq!(
            container_style(&frame(-400.0, false), SheetMode::Expandable, Some(320.0), None),
            "bottom: -400px; overflow-y: hidden; overflow-x: hidden;"
        );
        assert_eq!(
            container_style(&frame(0.0, true), SheetMode::Expandable, None, None),
            "bottom: 0px; overflow-y: scroll; overflow-x: hidden;"
        );
    }

    #[test]
    fn test_extra_style_appended() {
        let style = container_style(
            &frame(0.0, true),
            SheetMode::Expandable,
            None,
            Some("  border-radius: 12px; "),
        );
        assert!(style.ends_with("overflow-x: hidden; border-radius: 12px;"));
        assert_eq!(
            container_style(&frame(0.0, true), SheetMode::Expandable, None, Some("   ")),
            "bottom: 0px; overflow-y: scroll; overflow-x: hidden;"
        );
    }

    #[test]
    fn test_class_list() {
        assert_eq!(class_list(&["container", "", "  ", "card"]), "container card");
        assert_eq!(
            class_list(&["container", AnimationTrigger::OpenFull.class_name()]),
            "container bottom-sheet__animate-open-full"
        );
        assert_eq!(class_list(&[]), "");
    }
}
