//! SlowCalc - A calculator for the Slow Computer

use eframe::NativeOptions;
use slowcalc::app::SlowCalcApp;
use slowcalc::settings::CalcSettings;

fn main() -> eframe::Result<()> {
    let settings = CalcSettings::load();
    slowcore::logging::init(&settings.log_level);
    log::info!("starting calculator ({})", CalcSettings::config_path().display());

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size([settings.window_width, settings.window_height])
        .with_title("calculator");
    if let Some(pos) = slowcore::cascade_position() {
        viewport = viewport.with_position(pos);
    }
    let options = NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "calculator",
        options,
        Box::new(|cc| {
            slowcore::SlowTheme::default().apply(&cc.egui_ctx);
            Box::new(SlowCalcApp::new(cc, settings))
        }),
    )
}
