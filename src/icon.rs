// SPDX-License-Identifier: MPL-2.0
//! Window icon.
//!
//! The branding SVG is embedded and rasterized at startup, so packaging does
//! not need to ship a separate bitmap.

use iced::window::{icon, Icon};
use resvg::usvg;

const SVG_SOURCE: &str = include_str!("../assets/branding/emotion_lens.svg");

/// Side of the rasterized icon in pixels.
const ICON_SIZE: u32 = 128;

/// Rasterizes the branding SVG to an RGBA window icon.
///
/// Returns `None` if parsing or rendering fails; the window then uses the
/// platform default icon.
pub fn load_window_icon() -> Option<Icon> {
    let (rgba, size) = rasterize(ICON_SIZE)?;
    icon::from_rgba(rgba, size, size).ok()
}

/// Renders the branding SVG into a `size`×`size` RGBA buffer.
fn rasterize(size: u32) -> Option<(Vec<u8>, u32)> {
    let tree = usvg::Tree::from_data(SVG_SOURCE.as_bytes(), &usvg::Options::default()).ok()?;

    let original = tree.size();
    let transform = tiny_skia::Transform::from_scale(
        size as f32 / original.width(),
        size as f32 / original.height(),
    );

    let mut pixmap = tiny_skia::Pixmap::new(size, size)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());
    Some((pixmap.take(), size))
}
