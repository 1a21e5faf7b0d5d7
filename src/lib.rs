#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod attrs;
mod constants;
mod dom;
mod frame;
mod input;
mod listeners;
mod mount;
mod paint;

use constants::{
    CELL_SIZE_ATTR, ICON_ATTR, ICON_COLOR_ATTR, ICON_SIZE_ATTR, ICON_SPEED_ATTR, SEED_ATTR,
    WIREFRAME_ATTR,
};
use mount::Mount;

thread_local! {
    // Canvases picked up from markup stay animated for the page's lifetime.
    static AUTO_MOUNTS: RefCell<Vec<Mount>> = const { RefCell::new(Vec::new()) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("wireframe-web starting");

    if let Err(e) = auto_mount() {
        log::error!("auto-mount error: {:?}", e);
    }
    Ok(())
}

/// Mount every `<canvas data-wireframe>` and `<canvas data-wireframe-icon>`
/// present in the document.
fn auto_mount() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let mut mounted = Vec::new();

    for canvas in canvases_with(&document, WIREFRAME_ATTR)? {
        let variant = canvas.get_attribute(WIREFRAME_ATTR).unwrap_or_default();
        let seed = canvas.get_attribute(SEED_ATTR);
        let cell = canvas.get_attribute(CELL_SIZE_ATTR);
        let result = attrs::wireframe_config(&variant, seed.as_deref(), cell.as_deref())
            .map_err(anyhow::Error::from)
            .and_then(|config| Mount::wireframe(&canvas, &config));
        match result {
            Ok(m) => mounted.push(m),
            Err(e) => log::warn!("[mount] skipping wireframe canvas: {:#}", e),
        }
    }

    for canvas in canvases_with(&document, ICON_ATTR)? {
        let kind = canvas.get_attribute(ICON_ATTR).unwrap_or_default();
        let size = canvas.get_attribute(ICON_SIZE_ATTR);
        let color = canvas.get_attribute(ICON_COLOR_ATTR);
        let speed = canvas.get_attribute(ICON_SPEED_ATTR);
        let result =
            attrs::icon_settings(&kind, size.as_deref(), color.as_deref(), speed.as_deref())
                .map_err(anyhow::Error::from)
                .and_then(|settings| Mount::icon(&canvas, &settings));
        match result {
            Ok(m) => mounted.push(m),
            Err(e) => log::warn!("[mount] skipping icon canvas: {:#}", e),
        }
    }

    log::info!("[mount] auto-mounted {} canvases", mounted.len());
    AUTO_MOUNTS.with(|mounts| mounts.borrow_mut().extend(mounted));
    Ok(())
}

fn canvases_with(
    document: &web::Document,
    attr: &str,
) -> anyhow::Result<Vec<web::HtmlCanvasElement>> {
    let list = document
        .query_selector_all(&format!("canvas[{}]", attr))
        .map_err(|e| anyhow::anyhow!("querySelectorAll failed: {:?}", e))?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::HtmlCanvasElement>().ok())
        .collect())
}

/// A running animation attached to one canvas.
///
/// Call `unmount()` to stop it; dropping the handle on the JS side (`free()`)
/// does the same.
#[wasm_bindgen]
pub struct WireframeHandle {
    mount: Option<Mount>,
}

#[wasm_bindgen]
impl WireframeHandle {
    /// Stop the frame loop and remove all listeners. Safe to call twice.
    pub fn unmount(&mut self) {
        self.mount.take();
    }

    #[wasm_bindgen(js_name = isMounted)]
    pub fn is_mounted(&self) -> bool {
        self.mount.as_ref().is_some_and(Mount::is_running)
    }

    /// "scatter", "mesh", "floating" or "icon"; empty once unmounted.
    pub fn variant(&self) -> String {
        self.mount
            .as_ref()
            .map(|m| m.name().to_string())
            .unwrap_or_default()
    }
}

/// Start a background wireframe on `canvas`.
///
/// Returns `undefined` (and logs why) when the canvas has no 2D context or
/// the variant is unknown.
#[wasm_bindgen(js_name = mountWireframe)]
pub fn mount_wireframe(
    canvas: &web::HtmlCanvasElement,
    variant: &str,
    seed: Option<u32>,
) -> Option<WireframeHandle> {
    let mut config = match attrs::wireframe_config(variant, None, None) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("[mount] {}", e);
            return None;
        }
    };
    config.seed = seed.map(u64::from);
    match Mount::wireframe(canvas, &config) {
        Ok(mount) => Some(WireframeHandle { mount: Some(mount) }),
        Err(e) => {
            log::warn!("[mount] wireframe failed: {:#}", e);
            None
        }
    }
}

#[wasm_bindgen(js_name = mountIcon)]
pub fn mount_icon(
    canvas: &web::HtmlCanvasElement,
    kind: &str,
    size: Option<f32>,
    color: Option<String>,
    speed: Option<f32>,
) -> Option<WireframeHandle> {
    let size = size.map(|s| s.to_string());
    let speed = speed.map(|s| s.to_string());
    let result = attrs::icon_settings(kind, size.as_deref(), color.as_deref(), speed.as_deref())
        .map_err(anyhow::Error::from)
        .and_then(|settings| Mount::icon(canvas, &settings));
    match result {
        Ok(mount) => Some(WireframeHandle { mount: Some(mount) }),
        Err(e) => {
            log::warn!("[mount] icon failed: {:#}", e);
            None
        }
    }
}
