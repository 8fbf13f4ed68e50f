//! Slow Computer theme — e-ink optimized
//!
//! Pure black and white. No grays. 1px black outlines.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

/// Only two colors exist on this machine.
pub struct SlowColors;

impl SlowColors {
    pub const WHITE: Color32 = Color32::from_rgb(255, 255, 255);
    pub const BLACK: Color32 = Color32::from_rgb(0, 0, 0);
}

/// Theme configuration for slow computer apps
#[derive(Debug, Clone)]
pub struct SlowTheme {
    pub font_size_body: f32,
    pub font_size_heading: f32,
    pub font_size_small: f32,
    pub window_padding: f32,
    pub item_spacing: f32,
}

impl Default for SlowTheme {
    fn default() -> Self {
        Self {
            font_size_body: 14.0,
            font_size_heading: 22.0,
            font_size_small: 11.0,
            window_padding: 8.0,
            item_spacing: 4.0,
        }
    }
}

impl SlowTheme {
    /// Apply the slow computer theme to an egui context
    pub fn apply(&self, ctx: &egui::Context) {
        ctx.set_style(self.style());
    }

    /// Build the full egui style without touching a context.
    pub fn style(&self) -> Style {
        let mut style = Style::default();

        style.text_styles = [
            (TextStyle::Small, FontId::new(self.font_size_small, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(self.font_size_heading, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(self.font_size_body, FontFamily::Monospace)),
        ]
        .into();

        style.visuals = Self::visuals();
        style.spacing.window_margin = egui::Margin::same(self.window_padding);
        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);
        style.spacing.button_padding = egui::vec2(8.0, 4.0);
        style
    }

    /// Pure black & white visuals.
    pub fn visuals() -> Visuals {
        let mut visuals = Visuals::light();

        visuals.window_fill = SlowColors::WHITE;
        visuals.panel_fill = SlowColors::WHITE;
        visuals.faint_bg_color = SlowColors::WHITE;
        visuals.extreme_bg_color = SlowColors::WHITE;

        visuals.window_rounding = Rounding::ZERO;
        visuals.menu_rounding = Rounding::ZERO;
        visuals.window_stroke = Stroke::new(1.0, SlowColors::BLACK);

        let bw = |ws: &mut egui::style::WidgetVisuals| {
            ws.bg_fill = SlowColors::WHITE;
            ws.weak_bg_fill = SlowColors::WHITE;
            ws.bg_stroke = Stroke::new(1.0, SlowColors::BLACK);
            ws.fg_stroke = Stroke::new(1.0, SlowColors::BLACK);
            ws.rounding = Rounding::ZERO;
        };
        bw(&mut visuals.widgets.noninteractive);
        bw(&mut visuals.widgets.inactive);
        bw(&mut visuals.widgets.hovered);
        bw(&mut visuals.widgets.active);
        bw(&mut visuals.widgets.open);

        visuals.window_shadow = egui::epaint::Shadow::NONE;
        visuals.popup_shadow = egui::epaint::Shadow::NONE;

        visuals.selection.bg_fill = SlowColors::BLACK;
        visuals.selection.stroke = Stroke::new(1.0, SlowColors::WHITE);
        visuals
    }

    /// Readout frame: white fill, 1px black outline
    pub fn display_frame() -> egui::Frame {
        egui::Frame::none()
            .fill(SlowColors::WHITE)
            .stroke(Stroke::new(1.0, SlowColors::BLACK))
            .inner_margin(egui::Margin::symmetric(8.0, 4.0))
    }
}

/// Menu bar styling helper
pub fn menu_bar<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> egui::InnerResponse<R> {
    egui::Frame::none()
        .fill(SlowColors::WHITE)
        .stroke(Stroke::new(1.0, SlowColors::BLACK))
        .inner_margin(egui::Margin::symmetric(4.0, 2.0))
        .show(ui, |ui| ui.horizontal(add_contents).inner)
}

/// Strip Tab and Cmd+/- zoom keys before the app reads input.
/// Call this at the start of your app's update() function.
pub fn consume_special_keys(ctx: &egui::Context) {
    ctx.input_mut(|i| i.events.retain(|event| !is_special_key(event)));
}

fn is_special_key(event: &egui::Event) -> bool {
    match event {
        egui::Event::Key { key: egui::Key::Tab, .. } => true,
        egui::Event::Key { key, modifiers, .. } => {
            modifiers.command
                && matches!(key, egui::Key::Plus | egui::Key::Minus | egui::Key::Equals)
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: egui::Key, modifiers: egui::Modifiers) -> egui::Event {
        egui::Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers,
        }
    }

    #[test]
    fn test_visuals_are_black_and_white() {
        let v = SlowTheme::visuals();
        for ws in [&v.widgets.inactive, &v.widgets.hovered, &v.widgets.active] {
            assert_eq!(ws.bg_fill, SlowColors::WHITE);
            assert_eq!(ws.fg_stroke.color, SlowColors::BLACK);
            assert_eq!(ws.rounding, Rounding::ZERO);
        }
        assert_eq!(v.panel_fill, SlowColors::WHITE);
    }

    #[test]
    fn test_style_uses_theme_sizes() {
        let theme = SlowTheme { font_size_body: 18.0, ..Default::default() };
        let style = theme.style();
        assert_eq!(style.text_styles[&TextStyle::Body].size, 18.0);
        assert_eq!(style.spacing.item_spacing, egui::vec2(4.0, 4.0));
    }

    #[test]
    fn test_special_keys() {
        assert!(is_special_key(&key(egui::Key::Tab, egui::Modifiers::NONE)));
        assert!(is_special_key(&key(egui::Key::Plus, egui::Modifiers::COMMAND)));
        assert!(!is_special_key(&key(egui::Key::Plus, egui::Modifiers::NONE)));
        assert!(!is_special_key(&key(egui::Key::Num7, egui::Modifiers::NONE)));
    }
}
