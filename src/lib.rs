#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod camera;
mod cancel;
mod config;
mod constants;
mod dom;
mod experience;
mod frame;
mod particles;
mod passes;
mod render;
mod scene;
mod viewport;

use config::ExperienceConfig;
use experience::Experience;
use frame::AnimationLoop;

thread_local! {
    static RUNNING: RefCell<Option<AnimationLoop>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("starfield starting");

    spawn_local(async move {
        if let Err(e) = run(ExperienceConfig::default()).await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Stop the animation loop; the last frame stays on the canvas.
#[wasm_bindgen]
pub fn stop() {
    if let Some(animation) = RUNNING.with(|r| r.borrow_mut().take()) {
        animation.stop();
    }
}

async fn run(config: ExperienceConfig) -> anyhow::Result<()> {
    let experience = Rc::new(RefCell::new(Experience::new(config).await?));

    let window = web_sys::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    // Weak so a stopped loop can free the experience.
    let on_resize = Rc::downgrade(&experience);
    dom::on_window_resize(&window, move || {
        if let Some(exp) = on_resize.upgrade() {
            exp.borrow_mut().resize();
        }
    });

    let animation = Experience::animate(&experience);
    RUNNING.with(|r| *r.borrow_mut() = Some(animation));
    Ok(())
}
