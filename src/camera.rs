use room_core::pick::{pointer_to_ndc, Ray};
use room_core::{CameraPose, Projection};
use web_sys as web;

/// Compute a world-space ray from a click in window (client) coordinates.
///
/// The canvas covers the whole viewport, so the window's inner size is the
/// reference for normalized device coordinates.
#[inline]
pub fn client_to_world_ray(
    window: &web::Window,
    client_x: f32,
    client_y: f32,
    camera: &CameraPose,
) -> Option<Ray> {
    let width = window.inner_width().ok()?.as_f64()? as f32;
    let height = window.inner_height().ok()?.as_f64()? as f32;
    let ndc = pointer_to_ndc(client_x, client_y, width, height);
    let projection = Projection::with_aspect(width / height.max(1.0));
    Some(Ray::from_ndc(ndc, camera, &projection))
}
