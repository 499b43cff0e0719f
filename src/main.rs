use anyhow::{Context, Result};
use macroquad::prelude::Conf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use worm::Settings;
use worm::assets::{food_image, window_icon};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn load_settings() -> Result<Settings> {
    let path = Settings::default_path();
    let settings = Settings::load(&path)
        .with_context(|| format!("loading settings from {}", path.display()))?;
    info!(path = %path.display(), seed = ?settings.seed, "settings ready");
    Ok(settings)
}

fn load_food(settings: &Settings) -> Result<macroquad::prelude::Image> {
    let image = food_image(settings.food_sprite.as_deref()).context("loading assets")?;
    info!(width = image.width, height = image.height, "food sprite ready");
    Ok(image)
}

fn window_conf(settings: &Settings) -> Conf {
    Conf {
        window_title: "Worm".to_owned(),
        window_width: settings.window_width as i32,
        window_height: settings.window_height as i32,
        window_resizable: false,
        high_dpi: false,
        icon: Some(window_icon()),
        ..Default::default()
    }
}

fn main() -> Result<()> {
    init_tracing();
    let (settings, food) = match load_settings().and_then(|s| load_food(&s).map(|food| (s, food))) {
        Ok(loaded) => loaded,
        Err(err) => {
            error!(error = ?err, "startup failed");
            return Err(err);
        }
    };
    macroquad::Window::from_config(window_conf(&settings), worm::app::run(settings, food));
    Ok(())
}
