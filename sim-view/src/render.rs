//! Stateless drawing helpers for the particle canvas.
//!
//! Nothing in here mutates simulation state; the viewer hands in the
//! painter, the canvas rect, and a read-only view of the particles.

use glam::Vec2;
use sim_core::particle::Particle;
use sim_core::types::ParticleKind;

/// Grid overlay spacing in pixels.
const GRID_STEP: f32 = 20.0;

/// Fill color keyed by particle kind.
pub fn kind_color(kind: ParticleKind) -> egui::Color32 {
    match kind {
        ParticleKind::Rock => egui::Color32::from_rgb(0x6c, 0x75, 0x7d),
        ParticleKind::Paper => egui::Color32::from_rgb(0x0d, 0x6e, 0xfd),
        ParticleKind::Scissors => egui::Color32::from_rgb(0xdc, 0x35, 0x45),
    }
}

/// Maps a world position onto the canvas rect.
///
/// The canvas is fixed-size with no pan or zoom, so this is a plain
/// offset by the rect origin.
pub fn world_to_screen(rect: egui::Rect, pos: Vec2) -> egui::Pos2 {
    egui::pos2(rect.min.x + pos.x, rect.min.y + pos.y)
}

/// Clears the canvas to its background color.
pub fn clear_canvas(painter: &egui::Painter, rect: egui::Rect) {
    painter.rect_filled(rect, egui::CornerRadius::ZERO, egui::Color32::WHITE);
}

/// Draws the cosmetic fixed-step grid overlay.
pub fn draw_grid(painter: &egui::Painter, rect: egui::Rect) {
    let stroke = egui::Stroke::new(1.0, egui::Color32::from_rgb(0xee, 0xee, 0xee));

    let mut x = rect.min.x;
    while x < rect.max.x {
        painter.line_segment(
            [egui::pos2(x, rect.min.y), egui::pos2(x, rect.max.y)],
            stroke,
        );
        x += GRID_STEP;
    }

    let mut y = rect.min.y;
    while y < rect.max.y {
        painter.line_segment(
            [egui::pos2(rect.min.x, y), egui::pos2(rect.max.x, y)],
            stroke,
        );
        y += GRID_STEP;
    }
}

/// Draws every particle as a filled disk of the shared radius, colored
/// by its current kind.
pub fn draw_particles(
    painter: &egui::Painter,
    rect: egui::Rect,
    particles: &[Particle],
    radius: f32,
) {
    for p in particles {
        painter.circle_filled(world_to_screen(rect, p.pos), radius, kind_color(p.kind));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_kind_has_a_distinct_color() {
        let colors: Vec<_> = ParticleKind::ALL.iter().map(|&k| kind_color(k)).collect();
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
        assert_ne!(colors[0], colors[2]);
    }

    #[test]
    fn world_to_screen_offsets_by_the_rect_origin() {
        let rect = egui::Rect::from_min_size(egui::pos2(40.0, 25.0), egui::vec2(800.0, 600.0));

        let p = world_to_screen(rect, Vec2::new(100.0, 50.0));
        assert_eq!(p, egui::pos2(140.0, 75.0));

        let origin = world_to_screen(rect, Vec2::ZERO);
        assert_eq!(origin, rect.min);
    }
}
