use super::helpers;
use wgpu;

/// Depth buffer matching the surface size; recreated on resize.
pub(crate) struct DepthTarget {
    #[allow(dead_code)]
    pub(crate) tex: wgpu::Texture,
    pub(crate) view: wgpu::TextureView,
}

impl DepthTarget {
    pub(crate) fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let (tex, view) = helpers::create_texture_2d(
            device,
            "depth_tex",
            width.max(1),
            height.max(1),
            helpers::DEPTH_FORMAT,
            wgpu::TextureUsages::RENDER_ATTACHMENT,
        );
        Self { tex, view }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        *self = Self::new(device, width, height);
    }
}
