use std::path::Path;

use macroquad::prelude::*;

use farm_shop::input::{InputHandler, InputRouter};
use farm_shop::render::{draw_shop_screen, MacroquadRenderer};
use farm_shop::ui::ShopScreenLayout;
use farm_shop::{ShopConfig, ShopSession};

const DEFAULT_CONFIG: &str = "data/seed_shop.toml";
const SPRITE_DIR: &str = "assets/items";
const BACKGROUND: Color = Color::new(0.420, 0.557, 0.306, 1.0); // rgba(107, 142, 78, 255) grass

fn window_conf() -> Conf {
    Conf {
        window_title: "Seed Shop".to_string(),
        window_width: 1280,
        window_height: 720,
        fullscreen: false,
        ..Default::default()
    }
}

fn load_config() -> ShopConfig {
    let path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG.to_string());
    match ShopConfig::load(Path::new(&path)) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("{}; using built-in shop", e);
            ShopConfig::default()
        }
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    let config = load_config();
    let catalog = config.catalog();
    let mut session = ShopSession::from_config(&config);
    let mut renderer = MacroquadRenderer::new(&catalog, Path::new(SPRITE_DIR)).await;

    let mut screen = vec2(screen_width(), screen_height());
    let mut router = InputRouter::new(ShopScreenLayout::new(screen, &config.layout));
    let mut input_handler = InputHandler::new();

    loop {
        let current = vec2(screen_width(), screen_height());
        if current != screen {
            screen = current;
            router.set_layout(ShopScreenLayout::new(screen, &config.layout));
        }

        match input_handler.process(&router, &mut session) {
            Some(Ok(receipt)) => log::info!(
                "{:?} {} x {} complete",
                receipt.direction,
                receipt.quantity,
                receipt.item_id
            ),
            Some(Err(e)) => log::debug!("Transaction rejected: {}", e),
            None => {}
        }

        clear_background(BACKGROUND);
        draw_shop_screen(&mut renderer, &session, router.layout(), 1.0);

        next_frame().await;
    }
}
