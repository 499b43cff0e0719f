use macroquad::prelude::*;

pub const TEXT_WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

/// Draws `text` with its box centred on `(cx, cy)`.
pub fn draw_text_centered(text: &str, cx: f32, cy: f32, font_size: u16, color: Color) {
    let dims = measure_text(text, None, font_size, 1.0);
    let x = cx - dims.width * 0.5;
    let y = cy - dims.height * 0.5 + dims.offset_y;
    draw_text(text, x, y, font_size as f32, color);
}

fn rgb(c: [u8; 3]) -> Color {
    Color::from_rgba(c[0], c[1], c[2], 255)
}

/// Clickable label that glows while hovered.
pub struct Button {
    rect: Rect,
    label: String,
    font_size: u16,
    base_color: [u8; 3],
    current_color: [u8; 3],
    /// Hover brightening stops once the channel sum reaches this.
    light_up: u32,
    hovered: bool,
}

impl Button {
    pub fn new(rect: Rect, label: &str, font_size: u16, base_color: [u8; 3], light_up: u32) -> Self {
        Self {
            rect,
            label: label.to_owned(),
            font_size,
            base_color,
            current_color: base_color,
            light_up,
            hovered: false,
        }
    }

    pub fn color(&self) -> [u8; 3] {
        self.current_color
    }

    pub fn update(&mut self, mouse: Vec2) {
        self.hovered = self.rect.contains(mouse);
        let sum = |c: [u8; 3]| c.iter().map(|&v| v as u32).sum::<u32>();
        if self.hovered {
            if sum(self.current_color) < self.light_up {
                for ch in &mut self.current_color {
                    *ch = ch.saturating_add(4);
                }
            }
        } else if sum(self.current_color) > sum(self.base_color) {
            for (ch, base) in self.current_color.iter_mut().zip(self.base_color) {
                *ch = ch.saturating_sub(10).max(base);
            }
        }
    }

    /// True on the frame the mouse goes down over the button.
    pub fn check_click(&self, mouse_pressed: bool) -> bool {
        mouse_pressed && self.hovered
    }

    pub fn draw(&self) {
        draw_rectangle(self.rect.x, self.rect.y, self.rect.w, self.rect.h, rgb(self.color()));
        let center = self.rect.center();
        draw_text_centered(&self.label, center.x, center.y, self.font_size, TEXT_WHITE);
    }
}

/// Horizontal track with a draggable round handle.
pub struct Slider {
    rect: Rect,
    line_color: Color,
    handle_color: Color,
    handle_radius: f32,
    min: f32,
    max: f32,
    value: f32,
    dragging: bool,
}

impl Slider {
    pub fn new(rect: Rect, line_color: Color, handle_color: Color, min: f32, max: f32, initial: f32) -> Self {
        Self {
            rect,
            line_color,
            handle_color,
            handle_radius: (rect.h / 2.0).floor() + 4.0,
            min,
            max,
            value: initial.clamp(min, max),
            dragging: false,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    fn handle_center(&self) -> Vec2 {
        let t = (self.value - self.min) / (self.max - self.min);
        vec2((self.rect.x + t * self.rect.w).trunc(), self.rect.center().y)
    }

    fn handle_hit(&self, mouse: Vec2) -> bool {
        mouse.distance_squared(self.handle_center()) <= self.handle_radius * self.handle_radius
    }

    /// `mouse_down` is the held state, not the press edge.
    pub fn update(&mut self, mouse_down: bool, mouse: Vec2) {
        if mouse_down && !self.dragging && self.handle_hit(mouse) {
            self.dragging = true;
        }
        if !mouse_down {
            self.dragging = false;
        }
        if self.dragging {
            let rel_x = (mouse.x - self.rect.x).clamp(0.0, self.rect.w);
            self.value = self.min + rel_x / self.rect.w * (self.max - self.min);
        }
    }

    pub fn draw(&self) {
        draw_rectangle(self.rect.x, self.rect.y, self.rect.w, self.rect.h, self.line_color);
        let handle = self.handle_center();
        draw_circle(handle.x, handle.y, self.handle_radius, self.handle_color);
    }
}
