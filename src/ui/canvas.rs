//! Plot-Canvas: Kurve, Kontrollpolygon und Marker über egui_plot.
//!
//! Übersetzt außerdem den Maus-Input des Frames in Zeiger-Events in
//! Datenkoordinaten. Positionen außerhalb der Plot-Fläche werden zu `None`.

use crate::app::PointerEvent;
use crate::shared::RenderScene;
use egui_plot::{Legend, Line, LineStyle, MarkerShape, Plot, PlotBounds, Points};
use glam::DVec2;

/// Zeichnet die Szene und gibt die Zeiger-Events dieses Frames zurück.
///
/// Reihenfolge innerhalb eines Frames: Press, Move, Release.
pub fn render_canvas(ui: &mut egui::Ui, scene: &RenderScene) -> Vec<PointerEvent> {
    ui.vertical_centered(|ui| {
        ui.heading(scene.options.title.as_str());
    });

    let plot_response = Plot::new("bezier_plot")
        .legend(Legend::default())
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .allow_double_click_reset(false)
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                scene.bounds.min(),
                scene.bounds.max(),
            ));

            plot_ui.line(
                Line::new("Bézier curve", to_plot_points(scene.curve.iter()))
                    .color(to_color32(scene.options.curve_color))
                    .width(scene.options.curve_width),
            );
            plot_ui.line(
                Line::new(
                    "Control polygon",
                    to_plot_points(scene.control_points.iter()),
                )
                .color(to_color32(scene.options.polygon_color))
                .style(LineStyle::dashed_dense()),
            );
            plot_ui.points(
                Points::new("Control points", to_plot_points(scene.control_points.iter()))
                    .shape(MarkerShape::Circle)
                    .filled(true)
                    .radius(scene.options.marker_radius)
                    .color(to_color32(scene.options.marker_color)),
            );

            if let Some(dragged) = scene
                .dragged_index
                .and_then(|index| scene.control_points.get(index))
            {
                plot_ui.points(
                    Points::new("Dragged", to_plot_points([dragged].iter()))
                        .shape(MarkerShape::Circle)
                        .filled(true)
                        .radius(scene.options.marker_radius * 1.5)
                        .color(to_color32(scene.options.marker_color_dragged)),
                );
            }
        });

    let transform = &plot_response.transform;
    let frame = *transform.frame();
    let bounds = transform.bounds();
    let (min, max) = (bounds.min(), bounds.max());

    let (pressed, released, moved, latest) = ui.input(|i| {
        (
            i.pointer.primary_pressed(),
            i.pointer.primary_released(),
            i.pointer.delta() != egui::Vec2::ZERO,
            i.pointer.latest_pos(),
        )
    });
    let pos = latest.and_then(|screen| screen_to_data(frame, min, max, screen));

    let mut events = Vec::new();
    if pressed {
        events.push(PointerEvent::press(pos));
    }
    if moved {
        events.push(PointerEvent::motion(pos));
    }
    if released {
        events.push(PointerEvent::release(pos));
    }
    events
}

/// Konvertiert eine Screen-Position in Datenkoordinaten.
///
/// `frame` ist die Plot-Fläche in Screen-Koordinaten, `min`/`max` die sichtbaren
/// Datengrenzen. Screen-y wächst nach unten, Daten-y nach oben.
/// Liegt `screen` außerhalb von `frame`, ist das Ergebnis `None`.
pub fn screen_to_data(
    frame: egui::Rect,
    min: [f64; 2],
    max: [f64; 2],
    screen: egui::Pos2,
) -> Option<DVec2> {
    if frame.width() <= 0.0 || frame.height() <= 0.0 || !frame.contains(screen) {
        return None;
    }
    let fx = f64::from((screen.x - frame.left()) / frame.width());
    let fy = f64::from((frame.bottom() - screen.y) / frame.height());
    Some(DVec2::new(
        min[0] + fx * (max[0] - min[0]),
        min[1] + fy * (max[1] - min[1]),
    ))
}

fn to_plot_points<'a>(points: impl Iterator<Item = &'a DVec2>) -> Vec<[f64; 2]> {
    points.map(|p| p.to_array()).collect()
}

fn to_color32(color: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (color[0] * 255.0) as u8,
        (color[1] * 255.0) as u8,
        (color[2] * 255.0) as u8,
        (color[3] * 255.0) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn frame() -> egui::Rect {
        egui::Rect::from_min_max(egui::pos2(100.0, 50.0), egui::pos2(700.0, 550.0))
    }

    #[test]
    fn test_screen_corners_map_to_data_bounds() {
        let (min, max) = ([-1.0, -1.0], [5.0, 4.0]);

        let bottom_left = screen_to_data(frame(), min, max, egui::pos2(100.0, 550.0))
            .expect("Ecke liegt im Plot");
        let top_right = screen_to_data(frame(), min, max, egui::pos2(700.0, 50.0))
            .expect("Ecke liegt im Plot");

        assert_relative_eq!(bottom_left.x, -1.0, epsilon = 1e-9);
        assert_relative_eq!(bottom_left.y, -1.0, epsilon = 1e-9);
        assert_relative_eq!(top_right.x, 5.0, epsilon = 1e-9);
        assert_relative_eq!(top_right.y, 4.0, epsilon = 1e-9);
    }

    #[test]
    fn test_screen_center_maps_to_data_center() {
        let pos = screen_to_data(frame(), [-1.0, -1.0], [5.0, 4.0], egui::pos2(400.0, 300.0))
            .expect("Mitte liegt im Plot");

        assert_relative_eq!(pos.x, 2.0, epsilon = 1e-9);
        assert_relative_eq!(pos.y, 1.5, epsilon = 1e-9);
    }

    #[test]
    fn test_outside_frame_is_none() {
        let (min, max) = ([-1.0, -1.0], [5.0, 4.0]);

        assert!(screen_to_data(frame(), min, max, egui::pos2(50.0, 300.0)).is_none());
        assert!(screen_to_data(frame(), min, max, egui::pos2(400.0, 600.0)).is_none());
        assert!(screen_to_data(egui::Rect::NOTHING, min, max, egui::pos2(0.0, 0.0)).is_none());
    }

    #[test]
    fn test_color_conversion() {
        assert_eq!(to_color32([1.0, 0.0, 0.0, 1.0]), egui::Color32::RED);
    }
}
