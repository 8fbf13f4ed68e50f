//! SlowCalc application

use crate::engine::Calculator;
use crate::event::{Event, BUTTON_ROWS};
use crate::keys;
use crate::settings::CalcSettings;
use egui::Context;
use slowcore::repaint::RepaintController;
use slowcore::theme::{consume_special_keys, menu_bar, SlowColors, SlowTheme};
use slowcore::widgets::SlowButton;

const COLUMNS: f32 = 4.0;
const BUTTON_HEIGHT: f32 = 38.0;

pub struct SlowCalcApp {
    calc: Calculator,
    settings: CalcSettings,
    show_about: bool,
    repaint: RepaintController,
}

impl SlowCalcApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, settings: CalcSettings) -> Self {
        Self {
            calc: Calculator::new(),
            settings,
            show_about: false,
            repaint: RepaintController::new(),
        }
    }

    fn dispatch(&mut self, event: Event) {
        self.calc.dispatch(event);
        self.repaint.mark_needs_repaint();
    }

    fn handle_keys(&mut self, ctx: &Context) {
        consume_special_keys(ctx);
        let events = ctx.input(keys::events_from_input);
        for event in events {
            self.dispatch(event);
        }
    }

    fn render_display(&self, ui: &mut egui::Ui) {
        let display_height = self.settings.display_font_size + 20.0;
        SlowTheme::display_frame().show(ui, |ui| {
            ui.set_min_height(display_height);
            ui.set_max_height(display_height);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(self.calc.display())
                        .font(egui::FontId::proportional(self.settings.display_font_size))
                        .strong(),
                );
            });
        });
    }

    fn render_buttons(&mut self, ui: &mut egui::Ui) {
        let spacing = ui.spacing().item_spacing.x;
        let btn_w = (ui.available_width() - spacing * (COLUMNS - 1.0)) / COLUMNS;
        let pending = self.calc.state().pending_operator;
        let mut pressed = None;

        for row in BUTTON_ROWS {
            ui.horizontal(|ui| {
                for label in row.iter() {
                    let Ok(event) = Event::from_label(label) else {
                        log::error!("no event for button {:?}", label);
                        continue;
                    };
                    // "AC" spans two columns, "C" sits in the last one
                    let width = match event {
                        Event::ClearAll => btn_w * 2.0 + spacing,
                        _ => btn_w,
                    };
                    if event == Event::Backspace {
                        ui.add_space(btn_w + spacing);
                    }
                    let selected = matches!(event, Event::Operator(op) if Some(op) == pending);
                    let button = SlowButton::new(label, egui::vec2(width, BUTTON_HEIGHT))
                        .font_size(18.0)
                        .selected(selected);
                    if ui.add(button).clicked() {
                        pressed = Some(event);
                    }
                }
            });
        }

        if let Some(event) = pressed {
            self.dispatch(event);
        }
    }

    fn render_about(&mut self, ctx: &Context) {
        egui::Window::new("about calculator")
            .collapsible(false)
            .resizable(false)
            .default_width(240.0)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("calculator");
                    ui.label(concat!("version ", env!("CARGO_PKG_VERSION")));
                    ui.add_space(4.0);
                    ui.label("calculator for slowOS");
                });
                ui.add_space(4.0);
                ui.separator();
                ui.label("keys: 0-9 . + - * / Enter");
                ui.label("Backspace: C   Esc: AC");
                ui.vertical_centered(|ui| {
                    if ui.button("ok").clicked() {
                        self.show_about = false;
                    }
                });
            });
    }
}

impl eframe::App for SlowCalcApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.repaint.begin_frame(ctx);
        self.handle_keys(ctx);

        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            menu_bar(ui, |ui| {
                ui.menu_button("edit", |ui| {
                    if ui.button("clear all").clicked() {
                        self.dispatch(Event::ClearAll);
                        ui.close_menu();
                    }
                });
                ui.menu_button("help", |ui| {
                    if ui.button("about").clicked() {
                        self.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(SlowColors::WHITE).inner_margin(egui::Margin::same(8.0)))
            .show(ctx, |ui| {
                self.render_display(ui);
                ui.add_space(8.0);
                self.render_buttons(ui);
            });

        if self.show_about {
            self.render_about(ctx);
        }
        self.repaint.end_frame(ctx);
    }
}
