/// ViewTransform maps the grid-sized pixel buffer (source rectangle) onto
/// the viewport (destination rectangle) and applies interactive pan/zoom.
///
/// The transform is a uniform scale plus a translation, always kept inside
/// the clamp invariant: content never scrolls fully out of the viewport,
/// and an axis where the content is smaller than the viewport is centered.
/// It belongs to the display side and survives engine restarts.
pub struct ViewTransform {
    source_w: f32,
    source_h: f32,
    view_w: f32,
    view_h: f32,
    scale: f32,
    tx: f32,
    ty: f32,
}

impl ViewTransform {
    /// Create a transform for a source of the given pixel size.
    /// Identity until the first `set_viewport` call.
    pub fn new(source_w: f32, source_h: f32) -> Self {
        Self {
            source_w,
            source_h,
            view_w: 0.0,
            view_h: 0.0,
            scale: 1.0,
            tx: 0.0,
            ty: 0.0,
        }
    }

    /// Uniform scale of the current transform
    pub const fn scale(&self) -> f32 {
        self.scale
    }

    /// Top-left position and size of the scaled content in viewport space
    pub fn content_rect(&self) -> (f32, f32, f32, f32) {
        (
            self.tx,
            self.ty,
            self.source_w * self.scale,
            self.source_h * self.scale,
        )
    }

    /// Update the destination rectangle and reset to the best-fit mapping
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.view_w = width;
        self.view_h = height;
        self.fit_center();
    }

    /// Replace the source rectangle (grid was recreated at a new size)
    pub fn set_source(&mut self, width: f32, height: f32) {
        self.source_w = width;
        self.source_h = height;
        self.fit_center();
    }

    /// Largest uniform scale that fits the source inside the viewport,
    /// centered on both axes
    pub fn fit_center(&mut self) {
        if self.view_w <= 0.0 || self.view_h <= 0.0 {
            return;
        }
        self.scale = (self.view_w / self.source_w).min(self.view_h / self.source_h);
        self.tx = (self.view_w - self.source_w * self.scale) / 2.0;
        self.ty = (self.view_h - self.source_h * self.scale) / 2.0;
    }

    /// Scale about the given viewport point.
    /// Zooming out below the viewport on both axes snaps back to the
    /// fit-center mapping instead of letting the content shrink away.
    pub fn zoom(&mut self, center_x: f32, center_y: f32, factor: f32) {
        if factor <= 0.0 {
            return;
        }
        let scale = self.scale * factor;
        if self.source_w * scale < self.view_w && self.source_h * scale < self.view_h {
            self.fit_center();
            return;
        }
        self.tx = center_x + (self.tx - center_x) * factor;
        self.ty = center_y + (self.ty - center_y) * factor;
        self.scale = scale;
        self.clamp();
    }

    /// Translate by (-dx, -dy), i.e. dragging right moves the content left
    pub fn pan(&mut self, delta_x: f32, delta_y: f32) {
        self.tx -= delta_x;
        self.ty -= delta_y;
        self.clamp();
    }

    /// Pull the translation back inside the viewport: content larger than
    /// the viewport is pinned to its edges, content smaller is centered.
    pub fn clamp(&mut self) {
        self.tx = Self::clamp_axis(self.tx, self.view_w, self.source_w * self.scale);
        self.ty = Self::clamp_axis(self.ty, self.view_h, self.source_h * self.scale);
    }

    fn clamp_axis(offset: f32, viewport: f32, content: f32) -> f32 {
        let mut offset = offset.min(0.0);
        if offset < viewport - content {
            offset = viewport - content;
        }
        if offset > 0.0 {
            // content smaller than viewport on this axis, center it
            offset /= 2.0;
        }
        offset
    }

    /// Inverse-transform a viewport point into grid pixel space
    pub fn to_grid(&self, screen_x: f32, screen_y: f32) -> (f32, f32) {
        (
            (screen_x - self.tx) / self.scale,
            (screen_y - self.ty) / self.scale,
        )
    }
}
