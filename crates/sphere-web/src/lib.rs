#![cfg(target_arch = "wasm32")]
use rand::rngs::StdRng;
use rand::SeedableRng;
use sphere_core::{
    randomness_target, twist_target, Camera, Channel, Ease, MorphSet, OrbitControls, ScrollTimeline,
    SphereGeometry, Viewport, INTRO_DROP_HEIGHT, INTRO_DURATION_SECONDS, SPHERE_HEIGHT_SEGMENTS,
    SPHERE_RADIUS, SPHERE_WIDTH_SEGMENTS,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod dom;
mod events;
mod frame;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("sphere-web starting");

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

    let canvas_el = document
        .query_selector("canvas.webgl")
        .ok()
        .flatten()
        .ok_or_else(|| anyhow::anyhow!("missing canvas.webgl"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::sync_canvas_backing_size(&canvas);
    let (vw, vh) = dom::window_inner_size(&window);
    let viewport = Rc::new(RefCell::new(Viewport::new(
        vw,
        vh,
        window.device_pixel_ratio(),
    )));

    // Base point cloud plus the two morph targets. The jitter target draws
    // from entropy, so every page load gets its own cloud.
    let geometry = SphereGeometry::new(SPHERE_RADIUS, SPHERE_WIDTH_SEGMENTS, SPHERE_HEIGHT_SEGMENTS);
    let mut rng = StdRng::from_entropy();
    let mut morphs = MorphSet::new();
    morphs.push(randomness_target(&geometry.positions, &mut rng));
    morphs.push(twist_target(&geometry.positions));
    log::info!(
        "[scene] {} points, {} morph targets",
        geometry.vertex_count(),
        morphs.len()
    );

    // Scroll sections drive the timeline; the intro drop runs on the clock.
    let sections = dom::measure_sections(&document, &window);
    log::info!("[timeline] {} scroll sections", sections.len());
    let mut timeline = ScrollTimeline::new(sections);
    timeline.intro(
        Channel::PositionY,
        INTRO_DROP_HEIGHT,
        0.0,
        INTRO_DURATION_SECONDS,
        Ease::OutExpo,
    );
    timeline.tween(1, Channel::Randomness, 1.0, Ease::OutQuad)?;
    timeline.tween(2, Channel::Randomness, 0.0, Ease::Linear)?;
    timeline.tween(2, Channel::Twist, 1.0, Ease::Linear)?;
    timeline.tween(3, Channel::Twist, 0.0, Ease::Linear)?;
    timeline.tween(3, Channel::RotationY, std::f32::consts::TAU, Ease::Linear)?;
    let timeline = Rc::new(RefCell::new(timeline));

    let camera = Camera::initial(viewport.borrow().aspect());
    let controls = Rc::new(RefCell::new(OrbitControls::from_eye(
        camera.eye,
        camera.target,
    )));

    // Initialize WebGPU
    let gpu = frame::init_gpu(&canvas, geometry.vertex_count()).await;

    events::wire_resize(&canvas, viewport.clone(), timeline.clone());
    events::wire_orbit_input(&canvas, controls.clone());

    let vertex_count = geometry.vertex_count();
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        geometry,
        morphs,
        params: Default::default(),
        timeline,
        controls,
        viewport,
        camera,
        gpu,
        blended: Vec::with_capacity(vertex_count),
        last_instant: instant::Instant::now(),
    }));
    // Start RAF loop
    frame::start_loop(frame_ctx);

    Ok(())
}
