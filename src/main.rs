use macroquad::prelude::*;
use torus_life::{
    input::{self, PanDrag},
    presets, EngineError, LifeEngine, PixelBuffer, RenderSettings, ViewTransform,
};
use tracing::error;
use tracing_subscriber::EnvFilter;

const GRID_WIDTH: usize = 200;
const GRID_HEIGHT: usize = 100;

fn window_conf() -> Conf {
    Conf {
        window_title: "Torus of Life".to_owned(),
        window_width: 1000,
        window_height: 600,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(err) = run().await {
        // Emergency exit: nothing sensible to show without an engine
        error!(%err, "engine failure");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), EngineError> {
    // macroquad's prelude globs its own `rand` module; reach past it
    let mut rng = ::rand::rng();
    let mut engine = LifeEngine::create(GRID_WIDTH, GRID_HEIGHT)?;
    engine.randomize(&mut rng)?;

    let mut frame = PixelBuffer::new(GRID_WIDTH, GRID_HEIGHT);
    let mut image = Image::gen_image_color(GRID_WIDTH as u16, GRID_HEIGHT as u16, BLACK);
    let texture = Texture2D::from_image(&image);
    // One texel per cell; let the view transform do the upscaling
    texture.set_filter(FilterMode::Nearest);

    let mut view = ViewTransform::new(GRID_WIDTH as f32, GRID_HEIGHT as f32);
    let mut viewport = (0.0, 0.0);
    let mut drag = PanDrag::default();

    let patterns = presets::all_patterns();
    let pattern_keys = [
        KeyCode::Key1,
        KeyCode::Key2,
        KeyCode::Key3,
        KeyCode::Key4,
        KeyCode::Key5,
    ];

    let mut settings = RenderSettings::empty();
    let mut auto_iterate = false;
    let mut updates_per_second: f32 = 10.0;
    let mut update_timer: f32 = 0.0;

    loop {
        // Viewport follows window resizes
        let screen = (screen_width(), screen_height());
        if screen != viewport {
            viewport = screen;
            view.set_viewport(screen.0, screen.1);
        }

        // Gestures
        input::handle_zoom(&mut view);
        input::handle_pan(&mut view, &mut drag);
        input::handle_cell_toggle(&mut engine, &view)?;

        // Keyboard shortcuts
        if is_key_pressed(KeyCode::Space) {
            auto_iterate = !auto_iterate;
        }
        if is_key_pressed(KeyCode::I) {
            auto_iterate = false;
            engine.iterate()?;
        }
        if is_key_pressed(KeyCode::R) {
            engine.recreate(GRID_WIDTH, GRID_HEIGHT)?;
            engine.randomize(&mut rng)?;
        }
        if is_key_pressed(KeyCode::B) {
            settings.toggle(RenderSettings::SHOW_DEATHBIRTH);
        }
        if is_key_pressed(KeyCode::H) {
            view.fit_center();
        }
        // Number keys stamp a preset centered on the grid
        for (key, pattern) in pattern_keys.iter().zip(&patterns) {
            if is_key_pressed(*key) {
                let (w, h) = engine.dimensions()?;
                let x = (w as i32 - pattern.width as i32) / 2;
                let y = (h as i32 - pattern.height as i32) / 2;
                engine.place_pattern(pattern, x, y)?;
            }
        }
        if is_key_pressed(KeyCode::Up) {
            updates_per_second = (updates_per_second + 1.0).clamp(1.0, 60.0);
        }
        if is_key_pressed(KeyCode::Down) {
            updates_per_second = (updates_per_second - 1.0).clamp(1.0, 60.0);
        }

        // Auto-iterate at a fixed cadence
        if auto_iterate {
            update_timer += get_frame_time();
            if update_timer >= 1.0 / updates_per_second {
                engine.iterate()?;
                update_timer = 0.0;
            }
        }

        // Encode the generation and blit it through the view transform
        engine.render(&mut frame, settings)?;
        image.bytes.copy_from_slice(frame.bytes());
        texture.update(&image);

        clear_background(BLACK);
        let (x, y, w, h) = view.content_rect();
        draw_texture_ex(
            &texture,
            x,
            y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(w, h)),
                ..Default::default()
            },
        );

        let mut title = format!("#{}", engine.generation());
        if auto_iterate {
            title += &format!(" - auto {updates_per_second:.0}/s");
        }
        draw_text(&title, 10.0, 20.0, 24.0, GRAY);

        next_frame().await;
    }
}
