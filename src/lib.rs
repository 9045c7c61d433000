#![cfg(target_arch = "wasm32")]
use heimer_core::{Environment, OrbitControls, Scene, SceneConfig};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod device;
mod dom;
mod environment;
mod events;
mod frame;
mod input;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("heimer-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, constants::CANVAS_ID)?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::wire_canvas_resize(&canvas);

    let seed: u64 = rand::random();
    let scene = Scene::new(&SceneConfig::default(), seed)?;
    let box_count = scene.box_count();
    let mut orbit = OrbitControls::default();
    scene.sync_orbit(&mut orbit);
    log::info!("[init] seed={:#x} boxes={}", seed, box_count);

    let scene = Rc::new(RefCell::new(scene));
    let orbit = Rc::new(RefCell::new(orbit));
    let clock = Instant::now();

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        scene: scene.clone(),
        orbit: orbit.clone(),
        pointer: Rc::new(RefCell::new(input::PointerState::default())),
        clock,
    });

    let gpu = frame::init_gpu(&canvas, box_count).await;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        orbit,
        canvas,
        gpu,
        clock,
        last_instant: Instant::now(),
    }));

    // Background arrives later; the sky shows a gradient until then
    let env = Environment::for_device(dom::is_mobile());
    let frame_env = frame_ctx.clone();
    spawn_local(async move {
        match environment::load(env).await {
            Ok(bitmap) => {
                if let Some(gpu) = frame_env.borrow_mut().gpu.as_mut() {
                    gpu.set_environment(&bitmap);
                }
            }
            Err(e) => log::error!("[env] {:?} background unavailable: {:?}", env, e),
        }
    });

    frame::start_loop(frame_ctx);
    Ok(())
}
