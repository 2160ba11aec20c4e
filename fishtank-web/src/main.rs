use macroquad::prelude::*;

const DEFAULT_SNAPSHOT_PATH: &str = "snapshot.json";

#[macroquad::main("Fishtank")]
async fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_SNAPSHOT_PATH.to_string());

    let mut surface = match fishtank_web_lib::load_surface(&path).await {
        Ok(surface) => surface,
        Err(err) => {
            show_error_forever(&err.0).await;
            return;
        }
    };

    let (width, height) = surface.screen_size();
    request_new_screen_size(width, height);

    loop {
        surface.update();
        surface.render();

        next_frame().await;
    }
}

async fn show_error_forever(message: &str) {
    loop {
        clear_background(BLACK);
        draw_text(message, 20.0, 40.0, 24.0, RED);
        next_frame().await;
    }
}
