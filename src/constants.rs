/// Page wiring: DOM ids, selectors and asset URLs.
///
/// Scene tuning lives in `room_core::constants`; only values that name things
/// on the hosting page belong here.
// Canvas the renderer draws into
pub const CANVAS_SELECTOR: &str = ".experience-canvas";

// Menu and chrome element ids
pub const ABOUT_MENU_ID: &str = "about-menu";
pub const PROJECTS_MENU_ID: &str = "projects-menu";
pub const LOGO_ID: &str = "logo";
pub const CLOSE_BUTTON_ID: &str = "close-btn";
pub const CONTACT_BUTTON_ID: &str = "contact-btn";
pub const LOADER_ID: &str = "loader-wrapper";

// Contact dropdown
pub const CONTACT_MENU_SELECTOR: &str = ".contact-menu";
pub const CONTACT_DROPDOWN_SELECTOR: &str = ".contact-menu__dropdown";
pub const CONTACT_DROPDOWN_OPEN_CLASS: &str = "contact-menu__dropdown--open";

// Clicks landing on these elements never reach the scene
pub const CHROME_IDS: [&str; 2] = [CLOSE_BUTTON_ID, PROJECTS_MENU_ID];

// Resolved once at startup
pub const COMPACT_MEDIA_QUERY: &str = "(max-width: 992px)";

// Scene manifests
pub const ROOM_MANIFEST_URL: &str = "models/room.json";
pub const CHAIR_MANIFEST_URL: &str = "models/chair.json";

// Decorative chair placement
pub const CHAIR_OFFSET: [f32; 3] = [0.55, -0.26, 0.75];
pub const CHAIR_SCALE: f32 = 0.2;

// Target for project links
pub const LINK_TARGET: &str = "_blank";
