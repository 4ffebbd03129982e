/// Terminal front end for the wireframe viewer
use std::time::Instant;

use log::{error, info};

use spinview_core::{Orientation, Result};

pub mod canvas;
pub mod config;
pub mod scene;

pub use canvas::{Canvas, CanvasEvent, TermCanvas};
pub use config::ViewConfig;
pub use scene::{ModelHandle, Scene};

/// Input decoded for one frame: at most one rotation step per held key,
/// combined across axes, plus the discrete actions.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
struct FrameInput {
    quit: bool,
    revert: bool,
    disturb: bool,
    wheel: f64,
    pitch: f64,
    yaw: f64,
    roll: f64,
}

impl FrameInput {
    fn rotation(&self) -> Option<Orientation> {
        if self.pitch == 0.0 && self.yaw == 0.0 && self.roll == 0.0 {
            None
        } else {
            Some(Orientation::new(self.pitch, self.yaw, self.roll))
        }
    }
}

/// Main application: one scene, one canvas, one synchronous frame loop.
pub struct App<C: Canvas> {
    scene: Scene,
    canvas: C,
    config: ViewConfig,
    running: bool,
    frame_count: u32,
    fps_window: Instant,
    fps: f64,
}

impl App<TermCanvas> {
    /// Open the terminal canvas and wire it to the scene. A canvas that
    /// fails to open aborts startup before the loop begins.
    pub fn open(config: ViewConfig, scene: Scene) -> Result<Self> {
        let canvas = TermCanvas::open(config.resolution)?;
        Ok(Self::with_canvas(config, scene, canvas))
    }
}

impl<C: Canvas> App<C> {
    pub fn with_canvas(config: ViewConfig, scene: Scene, canvas: C) -> Self {
        Self {
            scene,
            canvas,
            config,
            running: true,
            frame_count: 0,
            fps_window: Instant::now(),
            fps: 0.0,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        info!("starting frame loop with {} models", self.scene.model_count());
        while self.running {
            self.step()?;
            self.canvas.tick(self.config.fps);
            self.update_fps();
        }
        info!("frame loop finished");
        Ok(())
    }

    /// One frame: input is fully applied before any model is projected.
    fn step(&mut self) -> Result<()> {
        let input = self.read_input()?;
        self.apply_input(&input);
        self.render()?;
        Ok(())
    }

    fn read_input(&mut self) -> Result<FrameInput> {
        let mut input = FrameInput::default();
        let speed = self.config.rotation_speed;

        for event in self.canvas.poll_input()? {
            match event {
                CanvasEvent::Quit => input.quit = true,
                CanvasEvent::Wheel(delta) => input.wheel += delta,
                CanvasEvent::Key(key) => match key {
                    'q' => input.quit = true,
                    'r' => input.revert = true,
                    'd' => input.disturb = true,
                    'u' => input.pitch = speed,
                    'j' => input.pitch = -speed,
                    'i' => input.yaw = speed,
                    'k' => input.yaw = -speed,
                    'o' => input.roll = speed,
                    'l' => input.roll = -speed,
                    _ => {}
                },
            }
        }
        Ok(input)
    }

    fn apply_input(&mut self, input: &FrameInput) {
        if input.quit {
            self.running = false;
            return;
        }
        if input.revert {
            self.scene.revert_all();
        }
        if input.disturb {
            if let Err(err) = self.scene.disturb_all() {
                error!("disturbance failed: {err}");
            }
        }
        if input.wheel != 0.0 {
            self.scene.zoom(input.wheel);
        }
        if let Some(delta) = input.rotation() {
            self.scene.rotate_all(delta);
        }
    }

    fn render(&mut self) -> Result<()> {
        self.canvas.clear();
        self.scene.draw(&mut self.canvas);
        if self.config.display_info {
            self.draw_info();
        }
        self.canvas.present()?;
        Ok(())
    }

    fn draw_info(&mut self) {
        let white = [255, 255, 255];
        let lines = [
            format!("FPS - {:.2}", self.fps),
            "X rotation - U/J".to_string(),
            "Y rotation - I/K".to_string(),
            "Z rotation - O/L".to_string(),
            "R reset | D disturb | Q quit".to_string(),
        ];
        for (row, line) in lines.iter().enumerate() {
            self.canvas.draw_text(line, (1, 1 + row as u16), white);
        }
    }

    fn update_fps(&mut self) {
        self.frame_count += 1;
        let elapsed = self.fps_window.elapsed();
        if elapsed.as_secs() >= 1 {
            self.fps = self.frame_count as f64 / elapsed.as_secs_f64();
            self.frame_count = 0;
            self.fps_window = Instant::now();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::test_canvas::RecordingCanvas;
    use spinview_core::{SceneModel, Shape};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn app_with_cube(events: Vec<CanvasEvent>) -> (App<RecordingCanvas>, ModelHandle) {
        let config = ViewConfig::default();
        let mut scene = Scene::new(&config);
        let model = Rc::new(RefCell::new(SceneModel::new(Shape::cube(2.0), [1, 2, 3])));
        scene.add_model(Rc::clone(&model)).unwrap();

        let mut canvas = RecordingCanvas::new(96, 48);
        canvas.pending = events;
        (App::with_canvas(config, scene, canvas), model)
    }

    #[test]
    fn test_held_keys_combine_into_one_delta() {
        let (mut app, model) = app_with_cube(vec![
            CanvasEvent::Key('u'),
            CanvasEvent::Key('u'),
            CanvasEvent::Key('k'),
        ]);
        app.step().unwrap();

        // Repeated key events still produce a single step per axis.
        let orientation = model.borrow().orientation();
        assert_eq!(orientation.pitch, 2.0);
        assert_eq!(orientation.yaw, 358.0);
        assert_eq!(orientation.roll, 0.0);
    }

    #[test]
    fn test_input_applied_before_projection() {
        let (mut app, _) = app_with_cube(vec![CanvasEvent::Key('o')]);
        app.step().unwrap();

        // The frame that consumed the key must draw the rotated cube: a roll
        // moves every corner's screen x off the axis-aligned positions.
        assert_eq!(app.canvas.presented, 1);
        assert!(!app.canvas.points.is_empty());
        let center_x = 48.0;
        let upscale = ViewConfig::default().initial_upscale();
        let aligned = app
            .canvas
            .points
            .iter()
            .any(|((x, _), _, _)| ((x - center_x).abs() - upscale).abs() < 1e-9);
        assert!(!aligned);
    }

    #[test]
    fn test_quit_stops_the_loop() {
        let (mut app, _) = app_with_cube(vec![CanvasEvent::Quit]);
        app.run().unwrap();
        assert!(!app.running);
    }

    #[test]
    fn test_revert_resets_rotation_and_shape() {
        let (mut app, model) = app_with_cube(vec![CanvasEvent::Key('i')]);
        app.step().unwrap();
        assert_ne!(model.borrow().orientation(), Orientation::zero());

        app.canvas.pending = vec![CanvasEvent::Key('r')];
        app.step().unwrap();
        assert_eq!(model.borrow().orientation(), Orientation::zero());
    }

    #[test]
    fn test_wheel_zooms_scene() {
        let (mut app, _) = app_with_cube(vec![CanvasEvent::Wheel(2.0), CanvasEvent::Wheel(1.0)]);
        let start = app.scene.upscale();
        app.step().unwrap();
        assert_eq!(app.scene.upscale(), start + 3.0);
    }

    #[test]
    fn test_info_overlay_toggle() {
        let (mut app, _) = app_with_cube(Vec::new());
        app.step().unwrap();
        assert!(app.canvas.texts.iter().any(|(t, _)| t.starts_with("FPS")));

        let config = ViewConfig {
            display_info: false,
            ..ViewConfig::default()
        };
        let scene = Scene::new(&config);
        let mut quiet = App::with_canvas(config, scene, RecordingCanvas::new(96, 48));
        quiet.step().unwrap();
        assert!(quiet.canvas.texts.is_empty());
    }
}
