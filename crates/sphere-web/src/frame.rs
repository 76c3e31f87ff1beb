use crate::dom;
use crate::render;
use glam::Vec3;
use instant::Instant;
use sphere_core::{
    Camera, MorphSet, OrbitControls, SceneParams, ScrollTimeline, SphereGeometry, Viewport,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the per-frame callback touches, constructed once in `init`.
pub struct FrameContext {
    pub geometry: SphereGeometry,
    pub morphs: MorphSet,
    // Written by the timeline, read by the renderer. Nothing else touches it.
    pub params: SceneParams,
    pub timeline: Rc<RefCell<ScrollTimeline>>,
    pub controls: Rc<RefCell<OrbitControls>>,
    pub viewport: Rc<RefCell<Viewport>>,
    pub camera: Camera,

    pub gpu: Option<render::GpuState<'static>>,
    // Scratch buffer reused for the blended positions.
    pub blended: Vec<Vec3>,

    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let Some(window) = web::window() else {
            return;
        };
        let scroll_y = dom::scroll_offset(&window);
        let viewport = *self.viewport.borrow();

        // Tween pass: timeline is the single writer of the params record.
        self.timeline
            .borrow_mut()
            .advance(scroll_y, viewport.height, dt_sec, &mut self.params);

        // Copy the tweened morph influences into the blend.
        if self.geometry.take_positions_dirty() {
            log::debug!("[scene] position buffer refresh folded into this frame's upload");
        }
        let weights = self.params.morph_weights();
        if let Err(e) =
            self.morphs
                .blend_into(&self.geometry.positions, &weights, &mut self.blended)
        {
            log::error!("[morph] {e}");
            return;
        }

        // One damping step, then the camera follows the controls.
        {
            let mut controls = self.controls.borrow_mut();
            controls.update(dt_sec);
            self.camera.eye = controls.eye();
            self.camera.target = controls.target();
        }
        self.camera.aspect = viewport.aspect();

        if let Some(g) = &mut self.gpu {
            let (w, h) = viewport.backing_size();
            g.resize_if_needed(w, h);
            if let Err(e) = g.render(&self.camera, self.params.model_matrix(), &self.blended) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    max_points: usize,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, max_points).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
