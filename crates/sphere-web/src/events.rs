use std::cell::RefCell;
use std::rc::Rc;

use sphere_core::{OrbitControls, ScrollTimeline, Viewport};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;

/// Pointer drag bookkeeping for the orbit controls.
#[derive(Default, Clone, Copy)]
pub struct DragState {
    pub active: bool,
    pub last_x: f32,
    pub last_y: f32,
}

/// Window resize: resync the canvas backing store, recompute the viewport and
/// re-measure the scroll sections (layout shifts move every trigger).
pub fn wire_resize(
    canvas: &web::HtmlCanvasElement,
    viewport: Rc<RefCell<Viewport>>,
    timeline: Rc<RefCell<ScrollTimeline>>,
) {
    let canvas = canvas.clone();
    let closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas);
        if let Some(window) = web::window() {
            let (w, h) = dom::window_inner_size(&window);
            let dpr = window.device_pixel_ratio();
            let next = viewport.borrow().resized(w, h, dpr);
            *viewport.borrow_mut() = next;
            if let Some(document) = window.document() {
                timeline
                    .borrow_mut()
                    .set_sections(dom::measure_sections(&document, &window));
            }
        }
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Pointer + wheel input on the canvas drives the orbit controls.
pub fn wire_orbit_input(canvas: &web::HtmlCanvasElement, controls: Rc<RefCell<OrbitControls>>) {
    let drag = Rc::new(RefCell::new(DragState::default()));

    {
        let drag = drag.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            *drag.borrow_mut() = DragState {
                active: true,
                last_x: ev.client_x() as f32,
                last_y: ev.client_y() as f32,
            };
        }) as Box<dyn FnMut(_)>);
        _ = canvas
            .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    {
        let drag = drag.clone();
        let controls = controls.clone();
        let canvas_move = canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let mut d = drag.borrow_mut();
            if !d.active {
                return;
            }
            let x = ev.client_x() as f32;
            let y = ev.client_y() as f32;
            let rect = canvas_move.get_bounding_client_rect();
            let w = (rect.width() as f32).max(1.0);
            let h = (rect.height() as f32).max(1.0);
            controls
                .borrow_mut()
                .rotate((x - d.last_x) / w, (y - d.last_y) / h);
            d.last_x = x;
            d.last_y = y;
        }) as Box<dyn FnMut(_)>);
        _ = canvas
            .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    for ended in ["pointerup", "pointerleave"] {
        let drag = drag.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            drag.borrow_mut().active = false;
        }) as Box<dyn FnMut(_)>);
        _ = canvas.add_event_listener_with_callback(ended, closure.as_ref().unchecked_ref());
        closure.forget();
    }

    {
        let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
            controls.borrow_mut().dolly(ev.delta_y() as f32);
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
        _ = canvas.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
