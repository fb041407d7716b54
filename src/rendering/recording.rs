use crate::models::Vec2;
use crate::rendering::{AffineTransform, Rgba, Surface, TextureHandle};

/// A draw call captured by [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    FillRect(Rgba),
    /// Fill of the closed path with a texture pattern.
    FillPattern {
        path: Vec<Vec2>,
        texture: TextureHandle,
        transform: AffineTransform,
    },
    Stroke {
        path: Vec<Vec2>,
        color: Rgba,
    },
}

/// Headless surface that records every draw call instead of rasterising.
///
/// Used for tests, benchmarks and the terminal demo.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    path: Vec<Vec2>,
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        RecordingSurface {
            width,
            height,
            path: Vec::new(),
            commands: Vec::new(),
        }
    }

    pub fn fill_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillPattern { .. }))
            .count()
    }

    pub fn stroke_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Stroke { .. }))
            .count()
    }

    pub fn reset(&mut self) {
        self.path.clear();
        self.commands.clear();
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.path.push(Vec2::new(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.path.push(Vec2::new(x, y));
    }

    fn close_path(&mut self) {}

    fn fill_with_pattern(&mut self, texture: &TextureHandle, transform: &AffineTransform) {
        self.commands.push(DrawCommand::FillPattern {
            path: self.path.clone(),
            texture: *texture,
            transform: *transform,
        });
    }

    fn stroke_path(&mut self, color: &Rgba) {
        self.commands.push(DrawCommand::Stroke {
            path: self.path.clone(),
            color: *color,
        });
    }

    fn clear(&mut self) {
        self.path.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_rect(&mut self, color: &Rgba) {
        self.commands.push(DrawCommand::FillRect(*color));
    }
}
