use rs_cube_stack::rendering::{AffineTransform, Rgba, Surface, TextureHandle};
use wasm_bindgen::JsValue;
use web_sys::{console, CanvasRenderingContext2d, HtmlImageElement};

/// `Surface` backed by a browser 2D canvas context.
///
/// Texture handles index into the images registered with `add_texture`.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    textures: Vec<HtmlImageElement>,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        CanvasSurface {
            ctx,
            textures: Vec::new(),
        }
    }

    /// Registers an already loaded image and returns its handle.
    pub fn add_texture(&mut self, image: HtmlImageElement) -> TextureHandle {
        let handle = TextureHandle::new(self.textures.len(), image.natural_width(), image.natural_height());
        self.textures.push(image);
        handle
    }

    fn report(&self, context: &str, err: JsValue) {
        console::warn_2(&JsValue::from_str(context), &err);
    }
}

impl Surface for CanvasSurface {
    fn width(&self) -> u32 {
        self.ctx.canvas().map(|c| c.width()).unwrap_or(0)
    }

    fn height(&self) -> u32 {
        self.ctx.canvas().map(|c| c.height()).unwrap_or(0)
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    // The path is already in device space, so the transform only moves the pattern.
    #[allow(deprecated)]
    fn fill_with_pattern(&mut self, texture: &TextureHandle, transform: &AffineTransform) {
        let Some(image) = self.textures.get(texture.id) else {
            console::warn_1(&JsValue::from_str(&format!("unknown texture {}", texture.id)));
            return;
        };

        let pattern = match self.ctx.create_pattern_with_html_image_element(image, "repeat") {
            Ok(Some(pattern)) => pattern,
            Ok(None) => return,
            Err(e) => return self.report("createPattern failed", e),
        };

        self.ctx.save();
        if let Err(e) = self.ctx.transform(transform.a, transform.b, transform.c, transform.d, transform.e, transform.f) {
            self.ctx.restore();
            return self.report("transform failed", e);
        }
        self.ctx.set_fill_style(&pattern);
        self.ctx.fill();
        self.ctx.restore();
    }

    #[allow(deprecated)]
    fn stroke_path(&mut self, color: &Rgba) {
        self.ctx.set_stroke_style(&JsValue::from_str(&color.to_css()));
        self.ctx.stroke();
    }

    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width() as f64, self.height() as f64);
    }

    #[allow(deprecated)]
    fn fill_rect(&mut self, color: &Rgba) {
        self.ctx.set_fill_style(&JsValue::from_str(&color.to_css()));
        self.ctx.fill_rect(0.0, 0.0, self.width() as f64, self.height() as f64);
    }
}
