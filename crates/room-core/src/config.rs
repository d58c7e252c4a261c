//! Startup configuration: camera presets, project list, layout and timings.
//!
//! Resolved once for a [`DeviceClass`]; nothing here is re-evaluated on
//! resize.

use crate::constants::*;
use crate::state::{CameraPose, ViewMode};
use glam::{Vec2, Vec3};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceClass {
    Desktop,
    /// Small viewports (phones, narrow tablets).
    Compact,
}

impl DeviceClass {
    pub fn from_viewport_width(width_px: f64) -> Self {
        if width_px <= COMPACT_MAX_WIDTH_PX {
            DeviceClass::Compact
        } else {
            DeviceClass::Desktop
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPresets {
    pub default: CameraPose,
    pub about: CameraPose,
    pub projects: CameraPose,
}

impl CameraPresets {
    pub fn desktop() -> Self {
        Self {
            default: CameraPose::new(
                Vec3::new(1.009_028_6, 0.546_363_9, 0.498_344_97),
                Vec3::new(-0.831_329_76, 0.938_339_95, 0.724_071_45),
            ),
            about: CameraPose::new(Vec3::new(0.12, 0.2, 0.55), Vec3::new(-1.54, 0.13, 1.41)),
            projects: CameraPose::new(Vec3::new(1.0, 0.45, 0.01), Vec3::new(0.05, 0.05, 0.0)),
        }
    }

    pub fn pose(&self, mode: ViewMode) -> CameraPose {
        match mode {
            ViewMode::Default => self.default,
            ViewMode::About => self.about,
            ViewMode::Projects => self.projects,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitLimits {
    pub target: Vec3,
    pub min_distance: f32,
    pub max_distance: f32,
    pub min_azimuth: f32,
    pub max_azimuth: f32,
    pub min_polar: f32,
    pub max_polar: f32,
}

impl Default for OrbitLimits {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
            min_azimuth: ORBIT_MIN_AZIMUTH,
            max_azimuth: ORBIT_MAX_AZIMUTH,
            min_polar: ORBIT_MIN_POLAR,
            max_polar: ORBIT_MAX_POLAR,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProjectEntry {
    pub image: String,
    pub url: Option<String>,
    pub caption: Option<String>,
}

impl ProjectEntry {
    pub fn new(image: &str, url: Option<&str>, caption: Option<&str>) -> Self {
        Self {
            image: image.to_string(),
            url: url.map(str::to_string),
            caption: caption.map(str::to_string),
        }
    }
}

pub fn default_projects() -> Vec<ProjectEntry> {
    vec![
        ProjectEntry::new(
            "textures/CPDA-CERTIFICATE.png",
            Some("https://drive.google.com/file/d/1u3bKzoCHs79pRz9iZ2yhqLICt_B4f6Bv/view?usp=drive_link"),
            Some("CPDA-CERTIFICATE"),
        ),
        ProjectEntry::new(
            "textures/real_time_object_detection.png",
            Some("https://github.com/akshat8415/real_time_object_detection_using_python"),
            Some("Real Time Object Detection"),
        ),
        ProjectEntry::new(
            "textures/socialmedia_engagement_tool.png",
            Some("https://github.com/akshat8415/socialmedia_analyzer/tree/main"),
            Some("Social Media Engagement Tool"),
        ),
        ProjectEntry::new(
            "textures/AdptiveEcho_voiceClone_agent.png",
            Some("https://github.com/akshat8415/voiceclone-gpt-agent"),
            Some("Voice Clone intelligent Agent"),
        ),
        ProjectEntry::new("textures/cargoViz-website.png", None, Some("CargoViz Website")),
    ]
}

/// Grid placement of project placards on the back wall.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacardLayout {
    pub columns: usize,
    pub origin: Vec2,
    pub spacing: Vec2,
    pub depth: f32,
    pub size: Vec2,
    pub caption_offset: Vec2,
    pub caption_size: Vec2,
}

impl Default for PlacardLayout {
    fn default() -> Self {
        Self {
            columns: PLACARD_COLUMNS,
            origin: Vec2::from(PLACARD_ORIGIN),
            spacing: Vec2::from(PLACARD_SPACING),
            depth: PLACARD_DEPTH,
            size: Vec2::from(PLACARD_SIZE),
            caption_offset: Vec2::from(CAPTION_OFFSET),
            caption_size: Vec2::from(CAPTION_SIZE),
        }
    }
}

impl PlacardLayout {
    /// Baseline (resting) center of the placard at `index`.
    pub fn anchor(&self, index: usize) -> Vec3 {
        let columns = self.columns.max(1);
        let col = (index % columns) as f32;
        let row = (index / columns) as f32;
        Vec3::new(
            self.origin.x + col * self.spacing.x,
            self.origin.y - row * self.spacing.y,
            self.depth,
        )
    }

    pub fn caption_anchor(&self, placard: Vec3) -> Vec3 {
        Vec3::new(
            placard.x + self.caption_offset.x + self.caption_size.x * 0.5,
            placard.y + self.caption_offset.y,
            placard.z,
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleSettings {
    pub count: usize,
    pub canvas_size: u32,
    pub link_distance: f32,
    pub speed_span: f32,
    pub radius_min: f32,
    pub radius_span: f32,
}

impl Default for ParticleSettings {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            canvas_size: PARTICLE_CANVAS_SIZE,
            link_distance: PARTICLE_LINK_DISTANCE,
            speed_span: PARTICLE_SPEED_SPAN,
            radius_min: PARTICLE_RADIUS_MIN,
            radius_span: PARTICLE_RADIUS_SPAN,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timings {
    pub camera: f32,
    pub book_cover: f32,
    pub theme: f32,
    pub placard_fade_in: f32,
    pub placard_lift: f32,
    pub placard_fade_out: f32,
    pub placard_stagger: f32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            camera: CAMERA_TRANSITION_SEC,
            book_cover: BOOK_COVER_SEC,
            theme: THEME_TRANSITION_SEC,
            placard_fade_in: PLACARD_FADE_IN_SEC,
            placard_lift: PLACARD_LIFT_SEC,
            placard_fade_out: PLACARD_FADE_OUT_SEC,
            placard_stagger: PLACARD_STAGGER_SEC,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RoomConfig {
    pub device: DeviceClass,
    pub presets: CameraPresets,
    pub orbit: OrbitLimits,
    pub projects: Vec<ProjectEntry>,
    pub layout: PlacardLayout,
    pub particles: ParticleSettings,
    pub timings: Timings,
    /// Uniform scale applied to the loaded room.
    pub room_scale: f32,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            device: DeviceClass::Desktop,
            presets: CameraPresets::desktop(),
            orbit: OrbitLimits::default(),
            projects: default_projects(),
            layout: PlacardLayout::default(),
            particles: ParticleSettings::default(),
            timings: Timings::default(),
            room_scale: 1.0,
        }
    }
}

impl RoomConfig {
    pub fn for_device(device: DeviceClass) -> Self {
        let mut config = Self::default();
        config.apply_device(device);
        config
    }

    /// One-time override of the desktop defaults for `device`.
    fn apply_device(&mut self, device: DeviceClass) {
        self.device = device;
        if device == DeviceClass::Desktop {
            return;
        }
        self.room_scale = 0.95;
        self.presets.about =
            CameraPose::new(Vec3::new(0.09, 0.23, 0.51), Vec3::new(-1.57, 0.0, 1.57));
        self.presets.projects =
            CameraPose::new(Vec3::new(1.1, 0.82, 0.5), Vec3::new(0.0, 0.0, 1.55));
        self.layout.depth = PLACARD_DEPTH_COMPACT;
        self.orbit.max_distance = 1.5;
        self.orbit.max_azimuth = std::f32::consts::PI * 0.75;
    }
}
