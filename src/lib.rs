#![cfg(target_arch = "wasm32")]
use glam::Vec3;
use instant::Instant;
use room_core::{DeviceClass, ParticleField, PlacardImage, Presenter, RoomConfig, SceneGraph};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod camera;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod loader;
mod overlay;
mod render;

use constants::*;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

// Evaluated once; layout does not follow later viewport changes.
fn detect_device(window: &web::Window) -> DeviceClass {
    let compact = window
        .match_media(COMPACT_MEDIA_QUERY)
        .ok()
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false);
    if compact {
        DeviceClass::Compact
    } else {
        DeviceClass::Desktop
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("room-web starting");

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

    let canvas: web::HtmlCanvasElement = dom::query(&document, CANVAS_SELECTOR)
        .ok_or_else(|| anyhow::anyhow!("missing {}", CANVAS_SELECTOR))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let device = detect_device(&window);
    let config = RoomConfig::for_device(device);
    log::info!("[assets] device={:?}", device);
    let particles = ParticleField::new(config.particles, rand::random());
    let wall_size = particles.size();
    let room_scale = config.room_scale;
    let project_images: Vec<String> = config.projects.iter().map(|p| p.image.clone()).collect();
    let placard_count = project_images.len();

    let presenter = Rc::new(RefCell::new(Presenter::new(config)));
    let scene: Rc<RefCell<Option<SceneGraph>>> = Rc::new(RefCell::new(None));
    let theme = presenter.borrow().state().theme;
    overlay::apply_theme(&document, theme);

    events::wire_contact_menu(&document);

    let placard_images: Rc<RefCell<Vec<PlacardImage>>> = Rc::new(RefCell::new(Vec::new()));
    spawn_local(load_assets(
        AssetTargets {
            document: document.clone(),
            canvas: canvas.clone(),
            presenter: presenter.clone(),
            scene: scene.clone(),
            placard_images: placard_images.clone(),
        },
        room_scale,
        project_images,
    ));

    let gpu = frame::init_gpu(&canvas, wall_size, placard_count).await;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        presenter,
        scene,
        particles,
        placard_images,
        document,
        canvas,
        gpu,
        chrome: frame::ChromeState {
            close_visible: false,
            theme,
        },
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}

struct AssetTargets {
    document: web::Document,
    canvas: web::HtmlCanvasElement,
    presenter: Rc<RefCell<Presenter>>,
    scene: Rc<RefCell<Option<SceneGraph>>>,
    placard_images: Rc<RefCell<Vec<PlacardImage>>>,
}

// Room first; scene interaction is armed only once it is in place. The chair
// and the project images may fail without consequence; a placard without its
// image keeps its plain tint.
async fn load_assets(targets: AssetTargets, room_scale: f32, project_images: Vec<String>) {
    let AssetTargets {
        document,
        canvas,
        presenter,
        scene,
        placard_images,
    } = targets;
    let mut room = match loader::load_scene(ROOM_MANIFEST_URL).await {
        Ok(g) => g,
        Err(e) => {
            log::error!("[assets] room failed to load: {:?}", e);
            return;
        }
    };
    room.scale(room_scale);
    {
        let mut p = presenter.borrow_mut();
        p.attach_scene(&room);
        for id in render::scene::WALL_TEXTS {
            p.attach_text(id);
        }
    }
    *scene.borrow_mut() = Some(room);
    overlay::hide_loader(&document);

    events::wire_menu_buttons(&document, &presenter);
    events::wire_input_handlers(events::InputWiring {
        canvas,
        presenter: presenter.clone(),
        drag_state: Rc::new(RefCell::new(input::DragState::default())),
    });

    match loader::load_scene(CHAIR_MANIFEST_URL).await {
        Ok(chair) => {
            if let Some(room) = scene.borrow_mut().as_mut() {
                room.merge_decor(chair, Vec3::from(CHAIR_OFFSET), CHAIR_SCALE);
            }
        }
        Err(e) => log::warn!("[assets] chair failed to load: {:?}", e),
    }

    for (index, url) in project_images.iter().enumerate() {
        match loader::load_placard_image(index, url).await {
            Ok(image) => placard_images.borrow_mut().push(image),
            Err(e) => log::warn!("[assets] project image {} failed to load: {:?}", url, e),
        }
    }
}
