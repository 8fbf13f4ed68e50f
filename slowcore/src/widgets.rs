//! Custom widgets — pure black and white

use crate::theme::SlowColors;
use egui::{Response, Ui, Widget};

/// A fixed-size button: white bg, 1px outline, inverted while pressed or
/// selected.
pub struct SlowButton<'a> {
    text: &'a str,
    size: egui::Vec2,
    font_size: f32,
    selected: bool,
}

impl<'a> SlowButton<'a> {
    pub fn new(text: &'a str, size: egui::Vec2) -> Self {
        Self { text, size, font_size: 14.0, selected: false }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }
}

impl<'a> Widget for SlowButton<'a> {
    fn ui(self, ui: &mut Ui) -> Response {
        let (rect, response) = ui.allocate_exact_size(self.size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            let inverted = response.is_pointer_button_down_on() || self.selected;
            let (fill, ink) = if inverted {
                (SlowColors::BLACK, SlowColors::WHITE)
            } else {
                (SlowColors::WHITE, SlowColors::BLACK)
            };
            let outline = if response.hovered() { 2.0 } else { 1.0 };

            painter.rect_filled(rect, 0.0, fill);
            painter.rect_stroke(rect, 0.0, egui::Stroke::new(outline, SlowColors::BLACK));
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.text,
                egui::FontId::proportional(self.font_size),
                ink,
            );
        }

        response
    }
}
