use bsp_painter::{ViewSettings, Viewer};
use bsp_painter_viz::{draw_frame, generate_box_grid, poll_actions, window_conf};
use macroquad::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

#[macroquad::main(window_conf)]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let polygons = generate_box_grid();
    tracing::info!(polygons = polygons.len(), "scene generated");

    let mut viewer = Viewer::new(polygons, ViewSettings::default());

    loop {
        for action in poll_actions() {
            viewer.apply(action);
        }
        let frame = viewer.tick();

        clear_background(WHITE);
        draw_frame(&frame);

        let controller = viewer.controller();
        draw_text(
            &format!(
                "Polygons: {} | Visible: {} | Flipped: {}",
                frame.len(),
                frame.visible().count(),
                controller.is_flipped()
            ),
            10.0,
            20.0,
            18.0,
            DARKGRAY,
        );
        draw_text(
            "WASD orbit/tilt | Q/E roll | Z/X zoom | arrows pan",
            10.0,
            40.0,
            16.0,
            GRAY,
        );

        next_frame().await
    }
}
