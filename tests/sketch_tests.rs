// Host-side tests for the frame orchestrator: ordering, commands, cancellation.

use scroll_gallery::core::layout::{DomRect, Viewport};
use scroll_gallery::core::scroll::{ScrollSource, ScrollState};
use scroll_gallery::core::sketch::{Command, FrameSink, FrameView, LoopState, Sketch};
use scroll_gallery::core::{Gallery, ImageSource, MaterialTemplate, SketchConfig, TextureHandle};

/// Replays a fixed list of scroll states, one per step, then holds the last.
struct ScriptedScroll {
    script: Vec<ScrollState>,
    cursor: usize,
    resized: usize,
}

impl ScriptedScroll {
    fn new(script: &[(f32, f32)]) -> Self {
        Self {
            script: script
                .iter()
                .map(|&(offset, speed)| ScrollState { offset, speed })
                .collect(),
            cursor: 0,
            resized: 0,
        }
    }
}

impl ScrollSource for ScriptedScroll {
    fn step(&mut self) {
        if self.cursor + 1 < self.script.len() {
            self.cursor += 1;
        }
    }

    fn state(&self) -> ScrollState {
        self.script[self.cursor]
    }

    fn resize(&mut self) {
        self.resized += 1;
    }
}

#[derive(Default)]
struct Recorder {
    frames: Vec<(f32, f32, f32, Vec<(f32, f32)>)>,
}

impl FrameSink for Recorder {
    type Error = String;

    fn present(&mut self, frame: &FrameView<'_>) -> Result<(), String> {
        self.frames.push((
            frame.elapsed,
            frame.scroll.offset,
            frame.distortion.scroll_speed,
            frame
                .planes
                .iter()
                .map(|p| (p.position.x, p.position.y))
                .collect(),
        ));
        Ok(())
    }
}

fn scenario_gallery() -> Gallery {
    let rects = [
        DomRect::new(0.0, 0.0, 100.0, 100.0),
        DomRect::new(500.0, 200.0, 50.0, 80.0),
        DomRect::new(1200.0, 0.0, 300.0, 150.0),
    ];
    Gallery::build(
        &MaterialTemplate::new(1.0),
        rects.iter().enumerate().map(|(i, r)| ImageSource {
            rect: *r,
            texture: Ok(TextureHandle(i)),
        }),
    )
}

fn sketch(script: &[(f32, f32)]) -> Sketch<ScriptedScroll> {
    let config = SketchConfig {
        orbit_controls: false,
        ..SketchConfig::default()
    };
    Sketch::new(
        config,
        Viewport::new(800.0, 600.0),
        ScriptedScroll::new(script),
        scenario_gallery(),
    )
}

#[test]
fn frames_follow_scroll_and_push_speed() {
    let mut s = sketch(&[(0.0, 0.0), (0.0, 0.0), (300.0, 0.8)]);
    assert_eq!(s.state(), LoopState::Uninitialized);
    let mut rec = Recorder::default();

    assert!(s.run_frame(0.016, &mut rec));
    assert!(s.run_frame(0.032, &mut rec));
    assert_eq!(s.state(), LoopState::Running { frames: 2 });

    let (t0, off0, speed0, planes0) = &rec.frames[0];
    assert_eq!((*t0, *off0, *speed0), (0.016, 0.0, 0.0));
    assert_eq!(planes0[0], (-350.0, 250.0));

    let (_, off1, speed1, planes1) = &rec.frames[1];
    assert_eq!(*off1, 300.0);
    assert_eq!(*speed1, 0.8);
    assert_eq!(planes1[0], (-350.0, 550.0));
    assert!(s.gallery().planes().iter().all(|p| p.uniforms.time == 0.032));
}

#[test]
fn plane_count_never_changes() {
    let mut s = sketch(&[(0.0, 0.0), (100.0, 0.1), (250.0, 0.3)]);
    let mut rec = Recorder::default();
    for i in 0..30 {
        s.run_frame(i as f32 / 60.0, &mut rec);
    }
    assert!(rec.frames.iter().all(|f| f.3.len() == 3));
    assert_eq!(s.gallery().len(), 3);
}

#[test]
fn cancel_stops_a_bounded_run() {
    let mut s = sketch(&[(0.0, 0.0)]);
    let token = s.cancel_token();
    let mut rec = Recorder::default();
    let mut scheduled = 0;
    for i in 0..100 {
        if i == 5 {
            token.cancel();
        }
        if !s.run_frame(i as f32 * 0.016, &mut rec) {
            break;
        }
        scheduled += 1;
    }
    assert_eq!(scheduled, 5);
    assert_eq!(rec.frames.len(), 5);
    assert_eq!(s.state(), LoopState::Stopped { frames: 5 });
}

#[test]
fn hover_commands_are_applied_at_frame_time() {
    let mut s = sketch(&[(0.0, 0.0)]);
    let q = s.queue();
    let mut rec = Recorder::default();
    s.run_frame(0.0, &mut rec);

    q.push(Command::HoverEnter(2));
    assert_eq!(q.len(), 1);
    s.run_frame(1.0, &mut rec);
    assert!(q.is_empty());
    // Tween started this frame, so it has not moved yet.
    assert_eq!(s.gallery().planes()[2].uniforms.hover_state, 0.0);
    assert_eq!(s.gallery().planes()[2].hover_target(), 1.0);

    s.run_frame(1.5, &mut rec);
    let mid = s.gallery().planes()[2].uniforms.hover_state;
    assert!(mid > 0.0 && mid < 1.0);

    // Leaving before completion reverses from the current value.
    q.push(Command::HoverLeave(2));
    s.run_frame(1.5, &mut rec);
    assert_eq!(s.gallery().planes()[2].uniforms.hover_state, mid);
    s.run_frame(2.5, &mut rec);
    assert_eq!(s.gallery().planes()[2].uniforms.hover_state, 0.0);
}

#[test]
fn pointer_move_updates_hover_point() {
    let mut s = sketch(&[(0.0, 0.0)]);
    let mut rec = Recorder::default();
    s.run_frame(0.0, &mut rec);
    s.queue().push(Command::PointerMove { x: 50.0, y: 50.0 });
    s.run_frame(0.1, &mut rec);
    let [u, v] = s.gallery().planes()[0].uniforms.hover;
    assert!((u - 0.5).abs() < 1e-2 && (v - 0.5).abs() < 1e-2);

    s.queue().push(Command::PointerMove { x: 10.0, y: 90.0 });
    s.run_frame(0.2, &mut rec);
    let [u, v] = s.gallery().planes()[0].uniforms.hover;
    assert!((u - 0.1).abs() < 1e-2, "u={}", u);
    assert!((v - 0.1).abs() < 1e-2, "v={}", v);
}

#[test]
fn resize_updates_camera_but_keeps_rects_by_default() {
    let mut s = sketch(&[(0.0, 0.0)]);
    let mut rec = Recorder::default();
    s.run_frame(0.0, &mut rec);
    let fov_before = s.camera().fov_deg;

    s.queue().push(Command::Resize {
        viewport: Viewport::new(1200.0, 900.0),
        rects: None,
    });
    s.run_frame(0.1, &mut rec);

    let expected = (2.0 * (900.0f32 / 2.0 / 600.0).atan()).to_degrees();
    assert!((s.camera().fov_deg - expected).abs() < 1e-4);
    assert!(s.camera().fov_deg > fov_before);
    assert_eq!(s.viewport(), Viewport::new(1200.0, 900.0));
    assert_eq!(s.gallery().planes()[0].rect, DomRect::new(0.0, 0.0, 100.0, 100.0));
    // Same rect, new viewport center.
    let p = s.gallery().planes()[0].position;
    assert_eq!((p.x, p.y), (-550.0, 400.0));
}

#[test]
fn resize_with_recaptured_rects_shifts_by_rendered_offset() {
    let mut s = sketch(&[(0.0, 0.0), (200.0, 0.0)]);
    let mut rec = Recorder::default();
    s.run_frame(0.0, &mut rec);
    assert_eq!(s.scroll_state().offset, 200.0);

    // Viewport-relative rects as measured on screen while scrolled by 200.
    let rects = vec![
        DomRect::new(-150.0, 10.0, 100.0, 100.0),
        DomRect::new(300.0, 200.0, 50.0, 80.0),
        DomRect::new(1000.0, 0.0, 300.0, 150.0),
    ];
    s.queue().push(Command::Resize {
        viewport: Viewport::new(800.0, 600.0),
        rects: Some(rects),
    });
    s.run_frame(0.1, &mut rec);
    let r = s.gallery().planes()[0].rect;
    assert_eq!((r.top, r.left), (50.0, 10.0));

    // Wrong count is rejected and the old rects stay.
    s.queue().push(Command::Resize {
        viewport: Viewport::new(800.0, 600.0),
        rects: Some(vec![DomRect::default()]),
    });
    s.run_frame(0.2, &mut rec);
    assert_eq!(s.gallery().planes()[0].rect.top, 50.0);
}

#[test]
fn degenerate_resize_is_ignored() {
    let mut s = sketch(&[(0.0, 0.0)]);
    let mut rec = Recorder::default();
    s.queue().push(Command::Resize {
        viewport: Viewport::new(0.0, 0.0),
        rects: None,
    });
    s.run_frame(0.0, &mut rec);
    assert_eq!(s.viewport(), Viewport::new(800.0, 600.0));
}

#[test]
fn orbit_drag_moves_camera_with_damping() {
    let mut s = Sketch::new(
        SketchConfig::default(),
        Viewport::new(800.0, 600.0),
        ScriptedScroll::new(&[(0.0, 0.0)]),
        scenario_gallery(),
    );
    let mut rec = Recorder::default();
    let start = s.camera().position;
    s.queue().push(Command::PointerDown { x: 400.0, y: 300.0 });
    s.queue().push(Command::PointerMove { x: 460.0, y: 300.0 });
    s.queue().push(Command::PointerUp);
    s.run_frame(0.0, &mut rec);
    let after_one = s.camera().position;
    assert_ne!(after_one, start);
    assert!((after_one.length() - 600.0).abs() < 1e-2);

    // Keeps gliding after release, by less each frame.
    let step1 = (after_one - start).length();
    s.run_frame(0.016, &mut rec);
    let step2 = (s.camera().position - after_one).length();
    assert!(step2 > 0.0 && step2 < step1);
}

#[test]
fn render_errors_do_not_stop_the_loop() {
    struct Failing;
    impl FrameSink for Failing {
        type Error = &'static str;
        fn present(&mut self, _frame: &FrameView<'_>) -> Result<(), Self::Error> {
            Err("surface lost")
        }
    }
    let mut s = sketch(&[(0.0, 0.0)]);
    assert!(s.run_frame(0.0, &mut Failing));
    assert!(s.run_frame(0.016, &mut Failing));
    assert_eq!(s.state(), LoopState::Running { frames: 2 });
}
