/// Scene container: the active models plus the 2D view state
use std::cell::RefCell;
use std::rc::Rc;

use log::info;
use nalgebra::Point3;

use spinview_core::{disturb, Error, Orientation, Result, SceneModel};

use crate::canvas::Canvas;
use crate::config::ViewConfig;

/// Shared handle to a model owned by the scene. Handles compare by identity,
/// matching the membership rules below.
pub type ModelHandle = Rc<RefCell<SceneModel>>;

/// The set of models being rendered plus the view transform that maps
/// rotated vertices onto the canvas. Membership is by instance identity:
/// the same handle cannot be added twice, and only present handles can be
/// removed.
pub struct Scene {
    models: Vec<ModelHandle>,
    center: (f64, f64),
    upscale: f64,
    scroll_sensitivity: f64,
    vertex_size: u16,
    display_vertices: bool,
    display_edges: bool,
}

impl Scene {
    pub fn new(config: &ViewConfig) -> Self {
        Self {
            models: Vec::new(),
            center: config.center(),
            upscale: config.initial_upscale(),
            scroll_sensitivity: config.scroll_sensitivity,
            vertex_size: config.vertex_size,
            display_vertices: config.display_vertices,
            display_edges: config.display_edges,
        }
    }

    pub fn add_model(&mut self, model: ModelHandle) -> Result<()> {
        if self.models.iter().any(|m| Rc::ptr_eq(m, &model)) {
            return Err(Error::DuplicateModel);
        }
        self.models.push(model);
        Ok(())
    }

    pub fn remove_model(&mut self, model: &ModelHandle) -> Result<()> {
        let index = self
            .models
            .iter()
            .position(|m| Rc::ptr_eq(m, model))
            .ok_or(Error::MissingModel)?;
        self.models.remove(index);
        Ok(())
    }

    pub fn model_count(&self) -> usize {
        self.models.len()
    }

    pub fn upscale(&self) -> f64 {
        self.upscale
    }

    /// Advance every model's orientation by the same delta.
    pub fn rotate_all(&self, delta: Orientation) {
        for model in &self.models {
            model.borrow_mut().rotate(delta);
        }
    }

    /// Reset every model's orientation and modification offsets.
    pub fn revert_all(&self) {
        info!("reverting rotation and shape for {} models", self.models.len());
        for model in &self.models {
            let mut model = model.borrow_mut();
            model.revert_rotation();
            model.revert_shape();
        }
    }

    /// Apply the flat disturbance pattern to every model.
    pub fn disturb_all(&self) -> Result<()> {
        for model in &self.models {
            disturb::disturb_flat(&mut model.borrow_mut())?;
        }
        Ok(())
    }

    /// Adjust the upscale by a wheel delta scaled by the configured
    /// sensitivity, never letting it drop below one cell per unit.
    pub fn zoom(&mut self, wheel_delta: f64) {
        self.upscale = (self.upscale + wheel_delta * self.scroll_sensitivity).max(1.0);
    }

    /// Project every model and draw it. The y axis points into the screen
    /// and cannot be drawn, so a rotated vertex (x, y, z) lands at
    /// `center + (x, z) * upscale`.
    pub fn draw<C: Canvas>(&self, canvas: &mut C) {
        for model in &self.models {
            let model = model.borrow();
            let (vertices, edges) = model.project();
            let color = model.color();

            if self.display_vertices {
                for vertex in &vertices {
                    canvas.draw_point(self.to_screen(vertex), color, self.vertex_size);
                }
            }

            if self.display_edges {
                for &[a, b] in edges {
                    canvas.draw_line(
                        self.to_screen(&vertices[a]),
                        self.to_screen(&vertices[b]),
                        color,
                    );
                }
            }
        }
    }

    fn to_screen(&self, vertex: &Point3<f64>) -> (f64, f64) {
        (
            self.center.0 + vertex.x * self.upscale,
            self.center.1 + vertex.z * self.upscale,
        )
    }
}
