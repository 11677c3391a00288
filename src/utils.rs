//! Utility functions and embedded vector assets

use std::path::PathBuf;

// Row avatar: an espresso cup seen from above, pre-cropped to a circle so
// the rasterized image needs no clipping in the list.
pub const AVATAR_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 96 96"><circle cx="48" cy="48" r="48" fill="#6f4e37"/><circle cx="48" cy="48" r="36" fill="#fffbfe"/><circle cx="44" cy="48" r="24" fill="#3b2420"/><ellipse cx="38" cy="42" rx="9" ry="6" fill="#c89f73"/><rect x="68" y="42" width="16" height="12" rx="6" fill="#fffbfe"/></svg>"##;

// Window/taskbar icon: a refresh arrow on the primary-color tile.
pub const ICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 96 96"><rect width="96" height="96" rx="20" fill="#6750a4"/><path d="M66 48a18 18 0 1 1-7.2-14.4" fill="none" stroke="#fff" stroke-width="8" stroke-linecap="round"/><path d="M54 24l14 8-12 8z" fill="#fff"/></svg>"##;

/// Rasterize an embedded SVG at the given width, preserving aspect ratio.
/// Returns straight-alpha RGBA pixels.
pub fn rasterize(svg: &str, width: u32) -> (Vec<u8>, u32, u32) {
    let tree = resvg::usvg::Tree::from_str(svg, &resvg::usvg::Options::default())
        .expect("embedded SVG is valid");
    let svg_size = tree.size();
    let scale = width as f32 / svg_size.width();
    let height = (svg_size.height() * scale).ceil() as u32;
    let mut pixmap =
        resvg::tiny_skia::Pixmap::new(width, height).expect("non-zero raster dimensions");
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    (premul_to_straight(&pixmap), width, height)
}

fn premul_to_straight(pixmap: &resvg::tiny_skia::Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let a = p.alpha();
            if a == 0 {
                [0, 0, 0, 0]
            } else {
                let r = (p.red() as u16 * 255 / a as u16) as u8;
                let g = (p.green() as u16 * 255 / a as u16) as u8;
                let b = (p.blue() as u16 * 255 / a as u16) as u8;
                [r, g, b, a]
            }
        })
        .collect()
}

/// App data directory (settings, logs).
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Swipe Refresh Demo")
}
