//! Per-frame orchestration: input commands, scroll sync, uniforms.
//!
//! Input and resize handlers never touch the sketch directly. They push a
//! [`Command`] onto the shared [`CommandQueue`], and the queue is drained at
//! the start of the next frame, so all mutation happens inside `frame`.

use super::camera::Camera;
use super::config::SketchConfig;
use super::controls::OrbitControls;
use super::distortion::DistortionState;
use super::gallery::{Gallery, ImagePlane};
use super::layout::{DomRect, Viewport};
use super::scroll::{ScrollSource, ScrollState};
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Pointer position in CSS pixels relative to the container.
    PointerMove { x: f32, y: f32 },
    PointerDown { x: f32, y: f32 },
    PointerUp,
    HoverEnter(usize),
    HoverLeave(usize),
    /// New viewport size. `rects` is set only when re-capture is enabled and
    /// holds viewport-relative boxes measured against the currently rendered
    /// scroll offset.
    Resize {
        viewport: Viewport,
        rects: Option<Vec<DomRect>>,
    },
}

/// FIFO of pending commands shared between event handlers and the loop.
#[derive(Clone, Debug, Default)]
pub struct CommandQueue(Rc<RefCell<VecDeque<Command>>>);

impl CommandQueue {
    pub fn push(&self, cmd: Command) {
        self.0.borrow_mut().push_back(cmd);
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    fn drain(&self) -> Vec<Command> {
        self.0.borrow_mut().drain(..).collect()
    }
}

/// Shared stop flag checked before each frame is scheduled.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Uninitialized,
    Running { frames: u64 },
    Stopped { frames: u64 },
}

/// Everything the renderer needs to draw one frame.
pub struct FrameView<'a> {
    pub elapsed: f32,
    pub viewport: Viewport,
    pub camera: &'a Camera,
    pub planes: &'a [ImagePlane],
    pub scroll: ScrollState,
    pub distortion: DistortionState,
}

/// Draw target for a prepared frame (the GPU renderer in the browser).
pub trait FrameSink {
    type Error: std::fmt::Debug;
    fn present(&mut self, frame: &FrameView<'_>) -> Result<(), Self::Error>;
}

pub struct Sketch<S: ScrollSource> {
    config: SketchConfig,
    viewport: Viewport,
    camera: Camera,
    controls: OrbitControls,
    scroll: S,
    scroll_state: ScrollState,
    gallery: Gallery,
    distortion: DistortionState,
    queue: CommandQueue,
    cancel: CancelToken,
    state: LoopState,
}

impl<S: ScrollSource> Sketch<S> {
    pub fn new(config: SketchConfig, viewport: Viewport, scroll: S, mut gallery: Gallery) -> Self {
        let camera = Camera::new(
            viewport,
            config.camera_distance,
            config.camera_near,
            config.camera_far,
        );
        let scroll_state = scroll.state();
        gallery.update_positions(scroll_state.offset, viewport);
        Self {
            controls: OrbitControls::new(config.orbit_controls),
            distortion: DistortionState::new(config.warp_strength),
            config,
            viewport,
            camera,
            scroll,
            scroll_state,
            gallery,
            queue: CommandQueue::default(),
            cancel: CancelToken::default(),
            state: LoopState::Uninitialized,
        }
    }

    pub fn queue(&self) -> CommandQueue {
        self.queue.clone()
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn scroll_state(&self) -> ScrollState {
        self.scroll_state
    }

    pub fn distortion(&self) -> DistortionState {
        self.distortion
    }

    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    /// Advance the scene to `elapsed` seconds since start and return the
    /// frame to draw.
    pub fn frame(&mut self, elapsed: f32) -> FrameView<'_> {
        self.apply_commands(elapsed);

        self.controls.update(&mut self.camera);

        self.scroll.step();
        self.scroll_state = self.scroll.state();

        self.gallery
            .update_positions(self.scroll_state.offset, self.viewport);
        self.distortion.scroll_speed = self.scroll_state.speed;
        self.gallery.tick(elapsed);

        self.state = match self.state {
            LoopState::Running { frames } => LoopState::Running { frames: frames + 1 },
            _ => LoopState::Running { frames: 1 },
        };

        FrameView {
            elapsed,
            viewport: self.viewport,
            camera: &self.camera,
            planes: self.gallery.planes(),
            scroll: self.scroll_state,
            distortion: self.distortion,
        }
    }

    /// Run one frame into `sink` unless cancelled. Returns whether the loop
    /// should schedule another frame.
    pub fn run_frame<R: FrameSink>(&mut self, elapsed: f32, sink: &mut R) -> bool {
        if self.cancel.is_cancelled() {
            self.stop();
            return false;
        }
        let view = self.frame(elapsed);
        if let Err(e) = sink.present(&view) {
            log::error!("render error: {:?}", e);
        }
        !self.cancel.is_cancelled()
    }

    fn stop(&mut self) {
        let frames = match self.state {
            LoopState::Running { frames } | LoopState::Stopped { frames } => frames,
            LoopState::Uninitialized => 0,
        };
        if !matches!(self.state, LoopState::Stopped { .. }) {
            log::info!("[sketch] frame loop stopped after {} frames", frames);
        }
        self.state = LoopState::Stopped { frames };
    }

    fn apply_commands(&mut self, now: f32) {
        for cmd in self.queue.drain() {
            match cmd {
                Command::PointerMove { x, y } => {
                    if self.controls.is_dragging() {
                        self.controls.drag_to(Vec2::new(x, y), self.viewport.height);
                    }
                    let ndc = self.viewport.to_ndc(x, y);
                    let (ro, rd) = self.camera.ray_from_ndc(ndc);
                    self.gallery.apply_pointer_ray(ro, rd);
                }
                Command::PointerDown { x, y } => self.controls.begin_drag(Vec2::new(x, y)),
                Command::PointerUp => self.controls.end_drag(),
                Command::HoverEnter(i) => self.gallery.hover_enter(i, now),
                Command::HoverLeave(i) => self.gallery.hover_leave(i, now),
                Command::Resize { viewport, rects } => self.resize(viewport, rects),
            }
        }
    }

    fn resize(&mut self, viewport: Viewport, rects: Option<Vec<DomRect>>) {
        if viewport.width <= 0.0 || viewport.height <= 0.0 {
            return;
        }
        self.viewport = viewport;
        self.camera.resize(viewport);
        self.scroll.resize();
        if let Some(mut rects) = rects {
            for r in &mut rects {
                r.top += self.scroll_state.offset;
            }
            if let Err(e) = self.gallery.recapture(&rects) {
                log::warn!("[sketch] keeping captured rects: {}", e);
            }
        }
        log::info!(
            "[sketch] resize {}x{} fov={:.2}",
            viewport.width,
            viewport.height,
            self.camera.fov_deg
        );
    }
}
