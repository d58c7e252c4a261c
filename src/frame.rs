use crate::overlay;
use crate::render;
use crate::render::recover::{self, SurfaceRecovery};
use instant::Instant;
use room_core::{ParticleField, PlacardImage, Presenter, SceneGraph, ThemeMode};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Long stalls (background tabs) are not replayed as one giant step
const MAX_FRAME_DT_SEC: f32 = 0.1;

/// Page chrome values last pushed to the DOM.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChromeState {
    pub close_visible: bool,
    pub theme: ThemeMode,
}

pub struct FrameContext<'a> {
    pub presenter: Rc<RefCell<Presenter>>,
    pub scene: Rc<RefCell<Option<SceneGraph>>>,
    pub particles: ParticleField,
    /// Decoded project images waiting for their texture upload.
    pub placard_images: Rc<RefCell<Vec<PlacardImage>>>,

    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,

    pub chrome: ChromeState,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let dt_sec = dt.as_secs_f32().min(MAX_FRAME_DT_SEC);

        self.particles.advance();
        self.presenter.borrow_mut().advance(dt_sec);
        self.sync_chrome();

        let mut device_lost = false;
        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            if self.particles.take_dirty() {
                g.upload_wall(&self.particles);
            }
            for image in self.placard_images.borrow_mut().drain(..) {
                g.upload_placard(&image);
            }
            let presenter = self.presenter.borrow();
            let scene = self.scene.borrow();
            let result = g.render(
                presenter.state(),
                scene.as_ref(),
                &presenter.config().layout,
            );
            if let Err(e) = result {
                match recover::recovery_for(&e) {
                    SurfaceRecovery::Reconfigure => {
                        log::warn!("surface {:?}; reconfiguring", e);
                        g.reconfigure();
                    }
                    SurfaceRecovery::SkipFrame => log::warn!("skipped frame: {:?}", e),
                    SurfaceRecovery::Fatal => {
                        log::error!("render error: {:?}; rendering stopped", e);
                        device_lost = true;
                    }
                }
            }
        }
        if device_lost {
            self.gpu = None;
        }
    }

    fn sync_chrome(&mut self) {
        let presenter = self.presenter.borrow();
        let state = presenter.state();
        let next = ChromeState {
            close_visible: state.close_visible,
            theme: state.theme,
        };
        if next.close_visible != self.chrome.close_visible {
            overlay::set_close_visible(&self.document, next.close_visible);
        }
        if next.theme != self.chrome.theme {
            overlay::apply_theme(&self.document, next.theme);
        }
        self.chrome = next;
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    wall_size: u32,
    placard_count: usize,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, wall_size, placard_count).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
