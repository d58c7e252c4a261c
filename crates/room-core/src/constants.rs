use std::f32::consts::PI;

// Shared presentation tuning constants used by the core and the web frontend.

// Particle wall texture
pub const PARTICLE_CANVAS_SIZE: u32 = 1024; // square raster edge in pixels
pub const PARTICLE_COUNT: usize = 200;
pub const PARTICLE_LINK_DISTANCE: f32 = 80.0; // pixels; closer pairs get a connecting line
pub const PARTICLE_SPEED_SPAN: f32 = 1.2; // velocity per axis drawn from [-span/2, span/2)
pub const PARTICLE_RADIUS_MIN: f32 = 0.6;
pub const PARTICLE_RADIUS_SPAN: f32 = 0.6;
pub const PARTICLE_DOT_ALPHA: f32 = 0.7;
pub const PARTICLE_LINK_ALPHA: f32 = 0.2;

// Vertical background gradient, top to bottom
pub const WALL_GRADIENT: [(f32, [u8; 3]); 3] = [
    (0.0, [0x00, 0x1f, 0x3f]), // navy
    (0.5, [0x00, 0x74, 0xd9]), // bright blue
    (1.0, [0x00, 0xc0, 0xff]), // sky
];

// Transition timing (seconds)
pub const CAMERA_TRANSITION_SEC: f32 = 1.5;
pub const BOOK_COVER_SEC: f32 = 1.5;
pub const THEME_TRANSITION_SEC: f32 = 0.8;
pub const PLACARD_FADE_IN_SEC: f32 = 1.5;
pub const PLACARD_LIFT_SEC: f32 = 1.0;
pub const PLACARD_FADE_OUT_SEC: f32 = 1.0;
pub const PLACARD_STAGGER_SEC: f32 = 0.1; // added per placard index

// Placard motion
pub const PLACARD_LIFT: f32 = 0.05; // world units above baseline while shown

// Room light levels
pub const ROOM_LIGHT_DAY: f32 = 2.5;
pub const ROOM_LIGHT_NIGHT: f32 = 0.6;
pub const ROOM_LIGHT_READING: f32 = 1.0; // dimmed so the open book stays legible
pub const ROOM_LIGHT_RESTING: f32 = 1.6; // level restored by reset in the light theme
pub const AMBIENT_DAY: f32 = 0.6;
pub const AMBIENT_NIGHT: f32 = 0.05;
pub const WALL_TEXT_LIGHT_DAY: f32 = 0.0;
pub const WALL_TEXT_LIGHT_NIGHT: f32 = 0.6;
pub const FAN_GLOW_DISTANCE_DAY: f32 = 0.05;
pub const FAN_GLOW_DISTANCE_NIGHT: f32 = 1.0;
/// Case fan spin rate, about one turn per second.
pub const FAN_SPIN_RAD_PER_SEC: f32 = std::f32::consts::TAU;

// Light colors (linear RGB)
pub const WHITE: [f32; 3] = [1.0, 1.0, 1.0];
pub const ROOM_LIGHT_NIGHT_COLOR: [f32; 3] = [0.2725, 0.2314, 0.6863];
pub const AMBIENT_NIGHT_COLOR: [f32; 3] = [0.1725, 0.2314, 0.6863];

// Text face colors: [front, side]
pub const TITLE_COLORS_DAY: [[f32; 3]; 2] = [[0.09, 0.12, 0.15], [1.0, 1.0, 1.0]];
pub const TITLE_COLORS_NIGHT: [[f32; 3]; 2] = [[1.0, 1.0, 1.0], [0.6, 0.6, 0.6]];
pub const SUBTITLE_COLORS_DAY: [[f32; 3]; 2] = [[0.09, 0.12, 0.15], [1.0, 1.0, 1.0]];
pub const SUBTITLE_COLORS_NIGHT: [[f32; 3]; 2] = [[0.8, 0.8, 0.8], [0.8, 0.8, 0.8]];

// Prop angles (radians)
pub const BOOK_OPEN_ANGLE: f32 = PI;
pub const BOOK_CLOSED_ANGLE: f32 = 0.0;
pub const SWITCH_ON_ANGLE: f32 = PI / 7.0;
pub const SWITCH_OFF_ANGLE: f32 = 0.0;

// Camera projection
pub const CAMERA_FOV_Y_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.01;
pub const CAMERA_FAR: f32 = 1000.0;

// Orbit limits
pub const ORBIT_MIN_DISTANCE: f32 = 0.9;
pub const ORBIT_MAX_DISTANCE: f32 = 1.6;
pub const ORBIT_MIN_AZIMUTH: f32 = 0.2;
pub const ORBIT_MAX_AZIMUTH: f32 = PI * 0.78;
pub const ORBIT_MIN_POLAR: f32 = 0.3;
pub const ORBIT_MAX_POLAR: f32 = PI / 2.0;
pub const ORBIT_ZOOM_STEP: f32 = 0.95; // distance scale per wheel notch

// Viewport breakpoint separating compact (mobile) layouts
pub const COMPACT_MAX_WIDTH_PX: f64 = 992.0;

// Placard grid
pub const PLACARD_COLUMNS: usize = 3;
pub const PLACARD_ORIGIN: [f32; 2] = [0.3, 1.0];
pub const PLACARD_SPACING: [f32; 2] = [0.8, 0.55];
pub const PLACARD_DEPTH: f32 = -1.15;
pub const PLACARD_DEPTH_COMPACT: f32 = -1.13;
pub const PLACARD_SIZE: [f32; 2] = [0.71, 0.4];
pub const PLACARD_IMAGE_SIZE: [u32; 2] = [512, 288]; // texels per array layer, same aspect as PLACARD_SIZE
pub const CAPTION_OFFSET: [f32; 2] = [-0.32, -0.27]; // relative to placard anchor
pub const CAPTION_SIZE: [f32; 2] = [0.6, 0.035];
