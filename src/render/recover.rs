//! What the frame loop does when the swap chain refuses a frame.

/// Action to take after `get_current_texture` failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceRecovery {
    /// Configure the surface again; the next frame should succeed.
    Reconfigure,
    /// Drop this frame and try again on the next one.
    SkipFrame,
    /// The device cannot continue; stop rendering.
    Fatal,
}

pub fn recovery_for(err: &wgpu::SurfaceError) -> SurfaceRecovery {
    match err {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => SurfaceRecovery::Reconfigure,
        wgpu::SurfaceError::OutOfMemory => SurfaceRecovery::Fatal,
        _ => SurfaceRecovery::SkipFrame,
    }
}
