//! Macroquad host for the painter's-algorithm viewer: scene building,
//! keyboard mapping and 2D drawing of projected frames.

use bsp_painter::{ControlAction, Frame, Polygon, ProjectedPolygon, ViewSettings};
use macroquad::prelude::*;
use macroquad::window::Conf;
use nalgebra::{Point3, Vector3};

/// Fill colors cycled over the boxes of the demo scene.
pub const BOX_COLORS: [&str; 6] = [
    "#ff6666", "#66cc66", "#6666ff", "#ffcc66", "#cc66ff", "#66ffff",
];

/// Window configuration for the viewer binary, sized to the default canvas.
pub fn window_conf() -> Conf {
    let size = ViewSettings::default().canvas_size.round() as i32;
    Conf {
        window_title: "BSP Painter".to_owned(),
        window_width: size,
        window_height: size,
        window_resizable: false,
        ..Default::default()
    }
}

/// How a key produces actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Fires every frame while held.
    Held,
    /// Fires once per press.
    Pressed,
}

/// Keyboard bindings. Orbit, tilt and roll repeat while held; pan and zoom fire per press.
pub const KEY_BINDINGS: [(KeyCode, Trigger, ControlAction); 12] = [
    (KeyCode::A, Trigger::Held, ControlAction::OrbitLeft),
    (KeyCode::D, Trigger::Held, ControlAction::OrbitRight),
    (KeyCode::W, Trigger::Held, ControlAction::TiltUp),
    (KeyCode::S, Trigger::Held, ControlAction::TiltDown),
    (KeyCode::Q, Trigger::Held, ControlAction::RollLeft),
    (KeyCode::E, Trigger::Held, ControlAction::RollRight),
    (KeyCode::X, Trigger::Pressed, ControlAction::ZoomIn),
    (KeyCode::Z, Trigger::Pressed, ControlAction::ZoomOut),
    (KeyCode::Left, Trigger::Pressed, ControlAction::PanLeft),
    (KeyCode::Right, Trigger::Pressed, ControlAction::PanRight),
    (KeyCode::Up, Trigger::Pressed, ControlAction::PanUp),
    (KeyCode::Down, Trigger::Pressed, ControlAction::PanDown),
];

/// Returns the actions triggered by the keyboard this frame.
pub fn poll_actions() -> Vec<ControlAction> {
    KEY_BINDINGS
        .iter()
        .filter(|(key, trigger, _)| match trigger {
            Trigger::Held => is_key_down(*key),
            Trigger::Pressed => is_key_pressed(*key),
        })
        .map(|(_, _, action)| *action)
        .collect()
}

fn to_macroquad(color: bsp_painter::Color) -> Color {
    Color::from_rgba(color.r, color.g, color.b, color.a)
}

/// Fills and outlines a single projected polygon (fan triangulation).
pub fn draw_polygon(polygon: &ProjectedPolygon) {
    let points: Vec<Vec2> = polygon
        .screen_points()
        .map(|(x, y)| vec2(x as f32, y as f32))
        .collect();
    if points.len() < 3 {
        return;
    }

    let fill = to_macroquad(polygon.fill);
    for i in 1..points.len() - 1 {
        draw_triangle(points[0], points[i], points[i + 1], fill);
    }

    let stroke = to_macroquad(polygon.stroke);
    for (i, a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        draw_line(a.x, a.y, b.x, b.y, 1.0, stroke);
    }
}

/// Draws a frame in order, skipping polygons entirely behind the camera.
pub fn draw_frame(frame: &Frame) {
    for polygon in frame.visible() {
        draw_polygon(polygon);
    }
}

/// Generates the 6 faces of an axis-aligned box with its minimum corner at
/// `origin` and extents `size`.
pub fn generate_box(
    origin: Point3<f64>,
    size: Vector3<f64>,
    fill: bsp_painter::Color,
) -> Vec<Polygon> {
    let corner =
        |x: f64, y: f64, z: f64| origin + Vector3::new(x * size.x, y * size.y, z * size.z);

    // 8 corners of the box
    let corners = [
        corner(0.0, 0.0, 0.0), // 0: left-bottom-back
        corner(1.0, 0.0, 0.0), // 1: right-bottom-back
        corner(1.0, 1.0, 0.0), // 2: right-top-back
        corner(0.0, 1.0, 0.0), // 3: left-top-back
        corner(0.0, 0.0, 1.0), // 4: left-bottom-front
        corner(1.0, 0.0, 1.0), // 5: right-bottom-front
        corner(1.0, 1.0, 1.0), // 6: right-top-front
        corner(0.0, 1.0, 1.0), // 7: left-top-front
    ];

    let faces: [[usize; 4]; 6] = [
        [0, 1, 2, 3], // back (-Z)
        [4, 5, 6, 7], // front (+Z)
        [0, 1, 5, 4], // bottom (-Y)
        [3, 2, 6, 7], // top (+Y)
        [0, 3, 7, 4], // left (-X)
        [1, 2, 6, 5], // right (+X)
    ];

    faces
        .iter()
        .map(|indices| Polygon::new(indices.iter().map(|&i| corners[i]).collect(), fill))
        .collect()
}

/// Generates the demo scene: two rows of three boxes on the y = 0 floor.
pub fn generate_box_grid() -> Vec<Polygon> {
    const SPACING_X: f64 = 220.0;
    const SPACING_Z: f64 = 300.0;
    let box_size = Vector3::new(100.0, 150.0, 100.0);

    let mut polygons = Vec::with_capacity(6 * BOX_COLORS.len());
    for row in 0..2 {
        for col in 0..3 {
            let x = -SPACING_X + col as f64 * SPACING_X;
            let z = -SPACING_Z / 2.0 + row as f64 * SPACING_Z;
            let fill = BOX_COLORS[(row * 3 + col) % BOX_COLORS.len()]
                .parse()
                .unwrap_or(bsp_painter::Color::WHITE);
            polygons.extend(generate_box(Point3::new(x - 50.0, 0.0, z - 50.0), box_size, fill));
        }
    }
    polygons
}
