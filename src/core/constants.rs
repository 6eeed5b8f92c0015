// Shared scene/interaction tuning constants used by the web frontend.

// Camera
pub const CAMERA_DISTANCE: f32 = 600.0; // camera z; planes live at z = 0
pub const CAMERA_NEAR: f32 = 100.0;
pub const CAMERA_FAR: f32 = 2000.0;

// Plane geometry
pub const GRID_SEGMENTS: u32 = 10; // subdivisions per axis for vertex distortion
pub const MAX_GRID_SEGMENTS: u32 = 255; // (n + 1)² vertices must stay addressable by u16 indices

// Hover transition
pub const HOVER_DURATION_SEC: f32 = 1.0;
pub const HOVER_POINT_DEFAULT: [f32; 2] = [0.5, 0.5];

// Scroll-speed distortion
pub const WARP_STRENGTH: f32 = 0.5;
pub const WARP_FALLOFF_END: f32 = 0.4; // falloff reaches zero at this v (measured from top)
pub const WARP_FALLOFF_POWER: i32 = 4;

// Smooth scroll
pub const SCROLL_EASE: f32 = 0.1; // fraction of remaining distance covered per frame
pub const SCROLL_SPEED_NORM_PX: f32 = 200.0; // distance that maps to |speed| = 1
pub const SCROLL_SPEED_SMOOTHING: f32 = 0.2;
pub const SCROLL_SNAP_EPSILON_PX: f32 = 0.01;

// Orbit controls
pub const ORBIT_DAMPING_FACTOR: f32 = 0.05;
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;
pub const ORBIT_POLAR_EPSILON: f32 = 1e-6;

// Output
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Startup readiness
pub const READINESS_TIMEOUT_MS: u32 = 6000;
pub const DEFAULT_FONT_FAMILIES: [&str; 2] = ["Open Sans", "Playfair Display"];

// DOM
pub const CONTAINER_ID: &str = "container";
