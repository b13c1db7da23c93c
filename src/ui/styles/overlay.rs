// SPDX-License-Identifier: MPL-2.0
//! Overlay styles for modal scrims.

use crate::ui::design_tokens::{opacity, palette::BLACK};
use iced::widget::container;
use iced::{Background, Color, Theme};

/// Dimming layer drawn behind modal dialogs.
///
/// Blocks visual focus on the workspace while a confirmation prompt is open.
#[must_use]
pub fn scrim(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..BLACK
        })),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrim_is_translucent_black() {
        let style = scrim(&Theme::Light);
        let Some(Background::Color(bg)) = style.background else {
            panic!("Expected color background")
        };
        assert_eq!(bg.a, opacity::OVERLAY_MEDIUM);
        assert_eq!((bg.r, bg.g, bg.b), (0.0, 0.0, 0.0));
    }
}
