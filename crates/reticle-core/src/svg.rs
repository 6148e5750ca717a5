use std::fmt::Write;

use crate::geometry::{Primitive, VIEWPORT_SIZE};

/// Render a primitive list as a standalone SVG document. Primitives are
/// emitted in z-order, so outlines land under their shapes exactly as
/// the renderer stacked them.
pub fn document(primitives: &[Primitive]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#,
        size = VIEWPORT_SIZE
    );

    for p in primitives {
        let _ = writeln!(
            out,
            r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="rgba({}, {}, {}, {})" />"#,
            p.x, p.y, p.width, p.height, p.fill.r, p.fill.g, p.fill.b, p.fill.a
        );
    }

    out.push_str("</svg>\n");
    out
}
