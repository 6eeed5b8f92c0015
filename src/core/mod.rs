//! Platform-neutral gallery logic: layout mapping, camera, scroll tracking,
//! hover transitions, picking and frame orchestration. Everything here runs
//! on the host as well as in the browser.

pub mod camera;
pub mod config;
pub mod constants;
pub mod controls;
pub mod distortion;
pub mod error;
pub mod gallery;
pub mod geometry;
pub mod layout;
pub mod readiness;
pub mod scroll;
pub mod sketch;
pub mod tween;

pub use camera::Camera;
pub use config::SketchConfig;
pub use gallery::{Gallery, ImagePlane, ImageSource, MaterialTemplate, TextureHandle};
pub use layout::{DomRect, Viewport};
pub use scroll::{ScrollSource, ScrollState, SmoothScroll};
pub use sketch::{CancelToken, Command, CommandQueue, FrameSink, FrameView, Sketch};

// Shaders bundled as string constants
pub static PLANE_WGSL: &str = include_str!("../../shaders/plane.wgsl");
pub static DISTORTION_WGSL: &str = include_str!("../../shaders/distortion.wgsl");
