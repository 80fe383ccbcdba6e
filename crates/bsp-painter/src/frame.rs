//! Per-tick output and the render-loop instance that produces it.

use tracing::info;

use crate::bsp::{scene_center, BspTree, FnVisitor};
use crate::{Camera, Color, ControlAction, OrbitController, Polygon, ProjectedVertex, ViewSettings};

/// A polygon projected to screen space, ready for a 2D fill/stroke surface.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedPolygon {
    pub vertices: Vec<ProjectedVertex>,
    pub fill: Color,
    pub stroke: Color,
}

impl ProjectedPolygon {
    /// Projects every vertex of `polygon` through `camera`.
    pub fn project(polygon: &Polygon, camera: &Camera, canvas_size: f64, stroke: Color) -> Self {
        Self {
            vertices: polygon
                .vertices()
                .iter()
                .map(|v| camera.project(v, canvas_size))
                .collect(),
            fill: polygon.fill(),
            stroke,
        }
    }

    /// True when every vertex is behind the camera; such polygons are not drawn.
    pub fn is_behind(&self) -> bool {
        self.vertices.iter().all(|v| v.behind)
    }

    /// Screen coordinates of the vertices, in winding order.
    pub fn screen_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.vertices.iter().map(|v| (v.x, v.y))
    }
}

/// One frame of ordered, projected geometry. Draw in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    /// Polygons in back-to-front order.
    pub polygons: Vec<ProjectedPolygon>,
}

impl Frame {
    /// Polygons that have at least one vertex in front of the camera.
    pub fn visible(&self) -> impl Iterator<Item = &ProjectedPolygon> {
        self.polygons.iter().filter(|p| !p.is_behind())
    }

    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }
}

/// The render-loop instance: a static scene plus the camera orbiting it.
///
/// The host applies control events as they arrive and calls
/// [`tick`](Viewer::tick) once per frame.
#[derive(Debug, Clone)]
pub struct Viewer {
    tree: BspTree,
    controller: OrbitController,
    settings: ViewSettings,
}

impl Viewer {
    /// Builds the BSP tree for `polygons` and starts orbiting the scene center.
    ///
    /// The center averages every input polygon, including ones the build
    /// later discards.
    pub fn new(polygons: Vec<Polygon>, settings: ViewSettings) -> Self {
        let pivot = scene_center(&polygons);
        let tree = BspTree::from_polygons(polygons);
        let camera = Camera::new(settings.initial_camera, settings.initial_zoom);
        let controller = OrbitController::new(camera, pivot, settings.orbit);

        info!(
            polygons = tree.polygon_count(),
            depth = tree.depth(),
            pivot = ?pivot,
            "viewer ready"
        );

        Self {
            tree,
            controller,
            settings,
        }
    }

    #[inline]
    pub fn tree(&self) -> &BspTree {
        &self.tree
    }

    #[inline]
    pub fn controller(&self) -> &OrbitController {
        &self.controller
    }

    #[inline]
    pub fn controller_mut(&mut self) -> &mut OrbitController {
        &mut self.controller
    }

    #[inline]
    pub fn settings(&self) -> &ViewSettings {
        &self.settings
    }

    /// Applies a control event; takes effect on the next tick.
    pub fn apply(&mut self, action: ControlAction) {
        self.controller.apply(action);
    }

    /// Advances the camera one frame and returns the ordered, projected scene.
    pub fn tick(&mut self) -> Frame {
        self.controller.tick();
        self.render()
    }

    /// Projects the scene from the current camera without advancing it.
    pub fn render(&self) -> Frame {
        let camera = self.controller.camera();
        let canvas_size = self.settings.canvas_size;
        let stroke = self.settings.stroke;

        let mut polygons = Vec::with_capacity(self.tree.polygon_count());
        let mut visitor = FnVisitor::new(|group: &[Polygon]| {
            polygons.extend(
                group
                    .iter()
                    .map(|p| ProjectedPolygon::project(p, camera, canvas_size, stroke)),
            );
        });
        self.tree.traverse_back_to_front(camera.position(), &mut visitor);

        Frame { polygons }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    fn make_quad(z: f64, fill: Color) -> Polygon {
        Polygon::new(
            vec![
                Point3::new(-10.0, -10.0, z),
                Point3::new(10.0, -10.0, z),
                Point3::new(10.0, 10.0, z),
                Point3::new(-10.0, 10.0, z),
            ],
            fill,
        )
    }

    fn settings() -> ViewSettings {
        ViewSettings::default().with_camera(Point3::new(0.0, 0.0, -100.0), 1.0)
    }

    #[test]
    fn empty_scene_renders_empty_frames() {
        let mut viewer = Viewer::new(vec![], settings());
        assert_eq!(viewer.controller().pivot(), Point3::origin());
        assert!(viewer.tick().is_empty());
    }

    #[test]
    fn pivot_averages_discarded_polygons_too() {
        // Spans the z = 0 plane of the first quad, so the build drops it
        let spanning = Polygon::new(
            vec![
                Point3::new(300.0, 0.0, -10.0),
                Point3::new(300.0, 0.0, 10.0),
                Point3::new(300.0, 30.0, 10.0),
            ],
            Color::WHITE,
        );
        let viewer = Viewer::new(vec![make_quad(0.0, Color::BLACK), spanning], settings());

        assert_eq!(viewer.tree().polygon_count(), 1);
        let expected = Point3::new(150.0, 5.0, 5.0 / 3.0);
        assert!((viewer.controller().pivot() - expected).norm() < 1e-9);
    }

    #[test]
    fn frame_is_ordered_back_to_front() {
        let near = Color::rgb(255, 0, 0);
        let far = Color::rgb(0, 0, 255);
        // Camera at z = -100 looking toward +z: z = -5 is nearer than z = 5
        let mut viewer = Viewer::new(vec![make_quad(5.0, far), make_quad(-5.0, near)], settings());

        let frame = viewer.tick();
        let fills: Vec<Color> = frame.polygons.iter().map(|p| p.fill).collect();
        assert_eq!(fills, vec![far, near]);
        assert!(frame.polygons.iter().all(|p| p.stroke == settings().stroke));
    }

    #[test]
    fn projected_vertices_are_centered_on_pivot() {
        let mut viewer = Viewer::new(vec![make_quad(0.0, Color::WHITE)], settings());
        let frame = viewer.tick();
        assert_eq!(frame.visible().count(), 1);

        let center = frame.polygons[0]
            .screen_points()
            .fold((0.0, 0.0), |(sx, sy), (x, y)| (sx + x / 4.0, sy + y / 4.0));
        assert!((center.0 - 300.0).abs() < 1e-6, "{center:?}");
        assert!((center.1 - 300.0).abs() < 1e-6, "{center:?}");
    }

    #[test]
    fn polygons_behind_camera_are_flagged_not_removed() {
        let polygons = vec![make_quad(0.0, Color::WHITE), make_quad(-500.0, Color::BLACK)];
        let mut viewer = Viewer::new(polygons, settings());
        // Pivot is at z = -250, so the camera at z = -100 faces -z and has
        // the z = 0 quad behind it
        let frame = viewer.tick();

        assert_eq!(frame.len(), 2);
        assert_eq!(frame.visible().count(), 1);
        let hidden = frame.polygons.iter().find(|p| p.is_behind()).unwrap();
        assert_eq!(hidden.fill, Color::WHITE);
    }

    #[test]
    fn ticks_keep_every_polygon_while_orbiting() {
        let polygons: Vec<Polygon> = (0..4)
            .map(|i| make_quad(i as f64 * 10.0, Color::rgb(i * 60, 0, 0)))
            .collect();
        let mut viewer = Viewer::new(polygons, settings());

        for action in ControlAction::ALL.iter().cycle().take(120) {
            viewer.apply(*action);
            assert_eq!(viewer.tick().len(), 4);
        }
    }
}
