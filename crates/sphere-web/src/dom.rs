use sphere_core::{SectionRect, MAX_PIXEL_RATIO};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Window inner size in CSS pixels.
pub fn window_inner_size(window: &web::Window) -> (f32, f32) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (w as f32, h as f32)
}

#[inline]
pub fn scroll_offset(window: &web::Window) -> f32 {
    window.scroll_y().unwrap_or(0.0) as f32
}

/// Keep the canvas backing store at CSS size times the clamped pixel ratio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio().min(MAX_PIXEL_RATIO);
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Measure every `.section` element into document-space rectangles, in DOM
/// order. Client rects are viewport-relative, so the current scroll offset is
/// folded back in.
pub fn measure_sections(document: &web::Document, window: &web::Window) -> Vec<SectionRect> {
    let list = document.get_elements_by_class_name("section");
    let scroll_y = scroll_offset(window);
    let mut sections = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(el) = list.item(i) {
            let rect = el.get_bounding_client_rect();
            sections.push(SectionRect {
                top: rect.top() as f32 + scroll_y,
                height: rect.height() as f32,
            });
        }
    }
    sections
}
