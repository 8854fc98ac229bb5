//! Rotating moon drawn on a braille canvas.

use crate::app::state::AppState;
use crate::ui::layout;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Circle, Points};
use ratatui::widgets::Paragraph;

/// (latitude, longitude, radius) of each crater, radians and moon radii.
const CRATERS: &[(f64, f64, f64)] = &[
    (0.3, 0.0, 0.12),
    (-0.5, 0.9, 0.08),
    (0.7, 1.8, 0.1),
    (-0.1, 2.6, 0.15),
    (0.1, 3.5, 0.07),
    (-0.7, 4.2, 0.11),
    (0.5, 5.1, 0.09),
    (-0.3, 5.8, 0.06),
];

/// Radians of rotation per tick.
const SPIN: f64 = 0.02;

/// Projected center of every crater facing the viewer, on a unit sphere.
pub fn visible_craters(tick: u64) -> Vec<(f64, f64, f64)> {
    let rotation = tick as f64 * SPIN;
    CRATERS
        .iter()
        .filter_map(|&(lat, lon, size)| {
            let lon = lon + rotation;
            if lon.cos() <= 0.0 {
                return None;
            }
            Some((lat.cos() * lon.sin(), lat.sin(), size * lon.cos()))
        })
        .collect()
}

pub fn render(frame: &mut Frame, content: Rect, state: &AppState) {
    // Cells are about twice as tall as wide.
    let aspect = f64::from(content.width.max(1)) / (f64::from(content.height.max(1)) * 2.0);
    let craters = visible_craters(state.tick_count);
    let (bright, _) = state.starfield.points_at(state.tick_count, 2.0 * aspect, 2.0);
    let stars: Vec<(f64, f64)> = bright.iter().map(|&(x, y)| (x - aspect, y - 1.0)).collect();

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([-aspect, aspect])
        .y_bounds([-1.0, 1.0])
        .paint(|ctx| {
            ctx.draw(&Points { coords: &stars, color: Theme::STAR_BRIGHT });
            ctx.layer();
            ctx.draw(&Circle { x: 0.0, y: 0.0, radius: 0.8, color: Theme::MOON });
            for &(x, y, r) in &craters {
                ctx.draw(&Circle { x: x * 0.8, y: y * 0.8, radius: r * 0.8, color: Theme::CRATER });
            }
        });
    frame.render_widget(canvas, content);

    frame.render_widget(
        Paragraph::new(Span::styled("← Back", Theme::back_link())),
        layout::back_link(content),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_front_facing_craters() {
        for tick in [0, 10, 100, 157, 1000] {
            for (x, y, r) in visible_craters(tick) {
                assert!(x.abs() <= 1.0 && y.abs() <= 1.0);
                assert!(r > 0.0);
            }
        }
    }

    #[test]
    fn test_rotation_changes_visible_set() {
        let a = visible_craters(0);
        let b = visible_craters(79); // roughly half a turn
        assert!(!a.is_empty());
        assert_ne!(a, b);
    }
}
