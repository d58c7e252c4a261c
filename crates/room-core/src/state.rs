//! Scene-side state owned by the presentation state machine.
//!
//! These types avoid platform-specific APIs so the web frontend and host-side
//! tests share them. The renderer reads a `SceneState` every frame; only the
//! `Presenter` and its `Timeline` write to it.

use crate::constants::*;
use glam::{EulerRot, Mat4, Quat, Vec3};

/// Which camera preset / scene focus is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewMode {
    Default,
    About,
    Projects,
}

/// Visual palette axis, independent of `ViewMode`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// CSS class applied to `<body>` for this theme.
    pub fn body_class(self) -> &'static str {
        match self {
            ThemeMode::Light => "light-theme",
            ThemeMode::Dark => "dark-theme",
        }
    }
}

/// Camera position plus Euler rotation (XYZ order, radians).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub rotation: Vec3,
}

impl CameraPose {
    pub const fn new(position: Vec3, rotation: Vec3) -> Self {
        Self { position, rotation }
    }

    pub fn orientation(&self) -> Quat {
        Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        )
    }

    /// World transform of the camera (camera looks down its local -Z).
    pub fn world_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation(), self.position)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        self.world_matrix().inverse()
    }

    pub fn forward(&self) -> Vec3 {
        self.orientation() * Vec3::NEG_Z
    }

    /// Pose at `eye` looking at `target` with +Y up.
    pub fn looking_at(eye: Vec3, target: Vec3) -> Self {
        let view = Mat4::look_at_rh(eye, target, Vec3::Y);
        let (_, rot, _) = view.inverse().to_scale_rotation_translation();
        let (x, y, z) = rot.to_euler(EulerRot::XYZ);
        Self {
            position: eye,
            rotation: Vec3::new(x, y, z),
        }
    }
}

/// Perspective projection parameters.
#[derive(Clone, Copy, Debug)]
pub struct Projection {
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Projection {
    pub fn with_aspect(aspect: f32) -> Self {
        Self {
            aspect: if aspect.is_finite() && aspect > 0.0 {
                aspect
            } else {
                1.0
            },
            fovy_radians: CAMERA_FOV_Y_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LightId {
    Room,
    Ambient,
    Fan(u8),
    WallText(u8),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightKind {
    Ambient,
    Point,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Light {
    pub id: LightId,
    pub kind: LightKind,
    pub position: Vec3,
    pub color: Vec3,
    pub intensity: f32,
    /// Cutoff distance for point lights; 0 means unbounded.
    pub distance: f32,
}

/// Named lights retargeted by theme transitions.
#[derive(Clone, Debug, PartialEq)]
pub struct LightRig {
    lights: Vec<Light>,
}

impl LightRig {
    pub const FAN_COUNT: u8 = 5;
    pub const WALL_TEXT_COUNT: u8 = 4;

    /// The room's light setup in the light theme.
    pub fn standard() -> Self {
        let mut lights = vec![
            Light {
                id: LightId::Ambient,
                kind: LightKind::Ambient,
                position: Vec3::ZERO,
                color: Vec3::from(WHITE),
                intensity: AMBIENT_DAY,
                distance: 0.0,
            },
            Light {
                id: LightId::Room,
                kind: LightKind::Point,
                position: Vec3::new(0.3, 2.0, 0.5),
                color: Vec3::from(WHITE),
                intensity: ROOM_LIGHT_DAY,
                distance: 10.0,
            },
        ];

        // PC case fans: one red, the rest green
        let fans: [([f32; 3], f32); Self::FAN_COUNT as usize] = [
            ([0.0, 0.29, -0.29], 0.2),
            ([-0.15, 0.29, -0.29], 0.12),
            ([0.21, 0.29, -0.29], 0.2),
            ([0.21, 0.19, -0.29], 0.2),
            ([0.21, 0.08, -0.29], FAN_GLOW_DISTANCE_DAY),
        ];
        for (i, (pos, distance)) in fans.into_iter().enumerate() {
            let color = if i == 0 {
                Vec3::new(1.0, 0.0, 0.0)
            } else {
                Vec3::new(0.0, 1.0, 0.0)
            };
            lights.push(Light {
                id: LightId::Fan(i as u8),
                kind: LightKind::Point,
                position: Vec3::from(pos),
                color,
                intensity: 30.0,
                distance,
            });
        }

        // Red wash over the wall lettering, off during the day
        let wall_z = [0.24, 0.42, 0.01, -0.14];
        for (i, z) in wall_z.into_iter().enumerate() {
            lights.push(Light {
                id: LightId::WallText(i as u8),
                kind: LightKind::Point,
                position: Vec3::new(-0.2, 0.6, z),
                color: Vec3::new(1.0, 0.0, 0.0),
                intensity: WALL_TEXT_LIGHT_DAY,
                distance: 1.1,
            });
        }
        Self { lights }
    }

    pub fn get(&self, id: LightId) -> Option<&Light> {
        self.lights.iter().find(|l| l.id == id)
    }

    pub fn get_mut(&mut self, id: LightId) -> Option<&mut Light> {
        self.lights.iter_mut().find(|l| l.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Light> {
        self.lights.iter()
    }

    pub fn len(&self) -> usize {
        self.lights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lights.is_empty()
    }

    pub fn wall_text_ids() -> impl Iterator<Item = LightId> {
        (0..Self::WALL_TEXT_COUNT).map(LightId::WallText)
    }

    /// The fan whose glow radius grows at night.
    pub const NIGHT_GLOW_FAN: LightId = LightId::Fan(4);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TextId {
    Title,
    Subtitle,
    Email,
}

impl TextId {
    pub fn palette(self, theme: ThemeMode) -> [[f32; 3]; 2] {
        match (self, theme) {
            (TextId::Title, ThemeMode::Light) => TITLE_COLORS_DAY,
            (TextId::Title, ThemeMode::Dark) => TITLE_COLORS_NIGHT,
            (TextId::Subtitle, ThemeMode::Light) => SUBTITLE_COLORS_DAY,
            (TextId::Subtitle, ThemeMode::Dark) => SUBTITLE_COLORS_NIGHT,
            // The contact line keeps its day colors at night.
            (TextId::Email, _) => SUBTITLE_COLORS_DAY,
        }
    }

    /// Where the text sits on the wall and its extent (width, height).
    pub fn placement(self) -> (Vec3, [f32; 2]) {
        match self {
            TextId::Title => (Vec3::new(-0.27, 0.55, 0.5), [0.7, 0.08]),
            TextId::Subtitle => (Vec3::new(-0.255, 0.5, 0.5), [0.75, 0.018]),
            TextId::Email => (Vec3::new(-0.255, 0.46, 0.5), [0.32, 0.018]),
        }
    }
}

/// Two-material text mesh: front face and extruded sides.
#[derive(Clone, Debug, PartialEq)]
pub struct TextMaterial {
    pub id: TextId,
    pub faces: [Vec3; 2],
}

/// One project's clickable plane plus its optional caption.
#[derive(Clone, Debug, PartialEq)]
pub struct Placard {
    pub index: usize,
    /// Grid position with the placard at rest (baseline height).
    pub anchor: Vec3,
    /// Current height; animates between baseline and baseline + lift.
    pub y: f32,
    pub opacity: f32,
    pub scale: f32,
    pub has_caption: bool,
    pub caption_visible: bool,
}

impl Placard {
    pub fn position(&self) -> Vec3 {
        Vec3::new(self.anchor.x, self.y, self.anchor.z)
    }

    pub fn is_hidden(&self) -> bool {
        self.scale <= 0.0
    }
}

/// Everything the presentation layer animates, in one explicit place.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneState {
    pub view: ViewMode,
    pub theme: ThemeMode,
    pub camera: CameraPose,
    pub orbit_enabled: bool,
    pub close_visible: bool,
    /// Book cover rotation about X; `None` until the room has loaded.
    pub book_cover: Option<f32>,
    /// Light switch rotation about Z; `None` until the room has loaded.
    pub light_switch: Option<f32>,
    pub lights: LightRig,
    pub texts: Vec<TextMaterial>,
    pub placards: Vec<Placard>,
    /// Shared rotation of the case fans about their axle, in `[0, TAU)`.
    pub fan_angle: f32,
}

impl SceneState {
    pub fn new(camera: CameraPose) -> Self {
        Self {
            view: ViewMode::Default,
            theme: ThemeMode::Light,
            camera,
            orbit_enabled: true,
            close_visible: false,
            book_cover: None,
            light_switch: None,
            lights: LightRig::standard(),
            texts: Vec::new(),
            placards: Vec::new(),
            fan_angle: 0.0,
        }
    }

    pub fn text(&self, id: TextId) -> Option<&TextMaterial> {
        self.texts.iter().find(|t| t.id == id)
    }
}
