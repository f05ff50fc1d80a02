use raindrops_core::CanvasSize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn device_pixel_ratio() -> f64 {
    web::window()
        .map(|w| w.device_pixel_ratio())
        .unwrap_or(1.0)
}

/// Match the backing store to CSS size × devicePixelRatio; returns the CSS size.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> CanvasSize {
    let dpr = device_pixel_ratio();
    let rect = canvas.get_bounding_client_rect();
    let w_px = (rect.width() * dpr) as u32;
    let h_px = (rect.height() * dpr) as u32;
    canvas.set_width(w_px.max(1));
    canvas.set_height(h_px.max(1));
    CanvasSize::new(rect.width() as f32, rect.height() as f32)
}

/// Decoded value of `key` in the page's query string, if present.
pub fn query_param(key: &str) -> Option<String> {
    let search = web::window()?.location().search().ok()?;
    let params = web::UrlSearchParams::new_with_str(&search).ok()?;
    params.get(key)
}

/// Attach `handler` to `event` on the window for the lifetime of the page.
pub fn add_window_listener(event: &str, handler: impl FnMut(web::Event) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    if let Some(window) = web::window() {
        if let Err(e) =
            window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        {
            log::error!("add {} listener error: {:?}", event, e);
        }
    }
    closure.forget();
}
