use reticle_types::CrosshairConfig;

pub const VIEWPORT_SIZE: f64 = 200.0;
pub const CENTER: f64 = 100.0;
/// Config units to preview pixels
pub const SCALE: f64 = 4.0;
/// Floor for the scaled gap; keeps very negative gaps from folding the
/// arms through the center. Rendering only, the config is untouched.
pub const MIN_RENDER_GAP: f64 = -10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// 0.0-1.0 fraction, alpha / 255
    pub a: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Line,
    Dot,
    Outline,
}

/// One axis-aligned rectangle of the preview, in z-order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primitive {
    pub role: Role,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Rgba,
}

/// Map a config to the rectangles of its preview. Pure and
/// deterministic; the outline effect comes from stacking a larger black
/// rectangle under each shape rather than stroking.
pub fn render(config: &CrosshairConfig) -> Vec<Primitive> {
    let size = config.size * SCALE;
    let thickness = config.thickness * SCALE;
    let outline = config.outline_thickness * SCALE;
    let gap = (config.gap * SCALE).max(MIN_RENDER_GAP);
    let half_t = thickness / 2.0;

    let fill = Rgba {
        r: config.color_r,
        g: config.color_g,
        b: config.color_b,
        a: config.alpha as f64 / 255.0,
    };
    let outline_fill = Rgba {
        r: 0,
        g: 0,
        b: 0,
        a: fill.a,
    };

    let mut primitives = Vec::new();
    let mut push = |role: Role, x: f64, y: f64, width: f64, height: f64| {
        if config.draw_outline {
            primitives.push(Primitive {
                role: Role::Outline,
                x: x - outline,
                y: y - outline,
                width: width + outline * 2.0,
                height: height + outline * 2.0,
                fill: outline_fill,
            });
        }
        primitives.push(Primitive {
            role,
            x,
            y,
            width,
            height,
            fill,
        });
    };

    if !config.t_style {
        push(Role::Line, CENTER - half_t, CENTER - gap - size, thickness, size);
    }
    push(Role::Line, CENTER + gap, CENTER - half_t, size, thickness);
    push(Role::Line, CENTER - half_t, CENTER + gap, thickness, size);
    push(Role::Line, CENTER - gap - size, CENTER - half_t, size, thickness);

    if config.dot {
        push(Role::Dot, CENTER - half_t, CENTER - half_t, thickness, thickness);
    }

    primitives
}
