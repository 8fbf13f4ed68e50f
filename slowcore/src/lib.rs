//! slowcore — shared library for slow computer applications

pub mod logging;
pub mod repaint;
pub mod storage;
pub mod theme;
pub mod widgets;

pub use repaint::RepaintController;
pub use theme::SlowTheme;

/// Window position offset from the `SLOWOS_CASCADE` env var, used to stagger
/// multiple instances of the same app.
pub fn cascade_position() -> Option<egui::Pos2> {
    std::env::var("SLOWOS_CASCADE")
        .ok()
        .and_then(|s| cascade_offset(&s))
}

fn cascade_offset(value: &str) -> Option<egui::Pos2> {
    value.trim().parse::<u32>().ok().map(|n| {
        let offset = (n as f32) * 30.0;
        egui::Pos2::new(100.0 + offset, 100.0 + offset)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cascade_offset() {
        assert_eq!(cascade_offset("0"), Some(egui::Pos2::new(100.0, 100.0)));
        assert_eq!(cascade_offset("2"), Some(egui::Pos2::new(160.0, 160.0)));
        assert_eq!(cascade_offset("x"), None);
    }
}
