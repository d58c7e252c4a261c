use crate::camera;
use crate::constants::{CHROME_IDS, LINK_TARGET};
use crate::dom;
use crate::input;
use glam::Vec2;
use room_core::Presenter;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub presenter: Rc<RefCell<Presenter>>,
    pub drag_state: Rc<RefCell<input::DragState>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
    wire_wheel(&w);
    wire_scene_click(&w);
}

#[inline]
fn client_pos(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

fn wire_pointerdown(w: &InputWiring) {
    let w2 = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        w2.drag_state.borrow_mut().press(client_pos(&ev));
        let _ = w2.canvas.set_pointer_capture(ev.pointer_id());
    }) as Box<dyn FnMut(_)>);
    let _ = w
        .canvas
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w2 = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let delta = w2.drag_state.borrow_mut().move_to(client_pos(&ev));
        if let Some(d) = delta {
            let height = w2.canvas.client_height() as f32;
            w2.presenter.borrow_mut().orbit_drag(d.x, d.y, height);
        }
    }) as Box<dyn FnMut(_)>);
    let _ = w
        .canvas
        .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let drag = w.drag_state.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        drag.borrow_mut().release();
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        let _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_wheel(w: &InputWiring) {
    let presenter = w.presenter.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        if presenter.borrow_mut().orbit_zoom(ev.delta_y() as f32) {
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    let _ = w
        .canvas
        .add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}

// Clicks anywhere in the window are cast into the scene, except on page
// controls that overlap the book on small screens.
fn wire_scene_click(w: &InputWiring) {
    let presenter = w.presenter.clone();
    let drag = w.drag_state.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        if drag.borrow_mut().take_suppressed_click() {
            return;
        }
        if CHROME_IDS
            .iter()
            .any(|id| dom::target_within(ev.target(), id))
        {
            return;
        }
        let Some(window) = web::window() else {
            return;
        };
        let pos = client_pos(&ev);
        let camera = presenter.borrow().state().camera;
        let Some(ray) = camera::client_to_world_ray(&window, pos.x, pos.y, &camera) else {
            return;
        };
        let to_open = presenter.borrow_mut().handle_click(&ray);
        for url in to_open {
            log::info!("[pick] open {}", url);
            if let Err(e) = window.open_with_url_and_target(&url, LINK_TARGET) {
                log::warn!("[pick] window.open failed: {:?}", e);
            }
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        let _ = wnd.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
