//! Direct property tests for the two renderers

use beamup_assets::rendering::paint;
use beamup_assets::{render_icon, render_screenshot};

#[test]
fn icons_have_requested_dimensions() {
    for size in [16u32, 64, 192, 512] {
        let asset = render_icon(size, false);
        assert_eq!(asset.width(), size);
        assert_eq!(asset.height(), size);
    }
}

#[test]
fn screenshots_have_requested_dimensions() {
    let portrait = render_screenshot(540, 720, "Dashboard View");
    assert_eq!((portrait.width(), portrait.height()), (540, 720));

    let landscape = render_screenshot(1280, 720, "Configuration Panel");
    assert_eq!((landscape.width(), landscape.height()), (1280, 720));
}

#[test]
fn icon_64_background_and_accent_probes() {
    let asset = render_icon(64, false);
    let canvas = asset.canvas();

    assert_eq!(canvas.get_pixel(0, 0), &paint::BACKGROUND);

    // Accent bounding box for size 64: origin (44, 6), side 19. Its center
    // pixel sits well inside the filled circle.
    let side = (64.0f32 * 0.3) as u32;
    let cx = (64.0f32 * 0.7) as u32 + side / 2;
    let cy = (64.0f32 * 0.1) as u32 + side / 2;
    assert_eq!((cx, cy), (53, 15));
    assert_eq!(canvas.get_pixel(cx, cy), &paint::ACCENT);
}

#[test]
fn maskable_and_standard_icons_are_pixel_identical() {
    for size in [64u32, 192] {
        let standard = render_icon(size, false);
        let maskable = render_icon(size, true);
        assert_eq!(
            standard.canvas().as_raw(),
            maskable.canvas().as_raw(),
            "variants diverged at size {size}"
        );
    }
}

#[test]
fn sidebar_is_drawn_only_in_landscape() {
    // Probe a point under the header, left of the sidebar's right edge.
    let landscape = render_screenshot(1280, 720, "x");
    assert_eq!(landscape.canvas().get_pixel(10, 200), &paint::SIDEBAR);

    let portrait = render_screenshot(540, 720, "x");
    assert_eq!(portrait.canvas().get_pixel(10, 200), &paint::BACKGROUND);

    // A square canvas counts as portrait: no sidebar.
    let square = render_screenshot(600, 600, "x");
    assert_eq!(square.canvas().get_pixel(10, 200), &paint::BACKGROUND);
}

#[test]
fn content_offset_follows_sidebar() {
    // With a sidebar the blocks start at x = 280, otherwise at x = 40.
    let landscape = render_screenshot(1280, 720, "x");
    assert_eq!(landscape.canvas().get_pixel(285, 125), &paint::BLOCK);

    let portrait = render_screenshot(540, 720, "x");
    assert_eq!(portrait.canvas().get_pixel(45, 125), &paint::BLOCK);
    assert_eq!(portrait.canvas().get_pixel(285, 125), &paint::BACKGROUND);
}

#[test]
fn three_blocks_stacked_with_gaps() {
    let asset = render_screenshot(540, 720, "x");
    let canvas = asset.canvas();

    // Block tops at y = 120, 240, 360; outline corners carry the accent
    // stroke, gaps between blocks show the background.
    for top in [120u32, 240, 360] {
        assert_eq!(canvas.get_pixel(40, top), &paint::ACCENT_OUTLINE);
        assert_eq!(canvas.get_pixel(45, top + 5), &paint::BLOCK);
    }
    assert_eq!(canvas.get_pixel(45, 230), &paint::BACKGROUND);
    assert_eq!(canvas.get_pixel(45, 470), &paint::BACKGROUND);
}

#[test]
fn header_spans_full_width() {
    let asset = render_screenshot(1280, 720, "x");
    let canvas = asset.canvas();
    assert_eq!(canvas.get_pixel(0, 0), &paint::HEADER);
    assert_eq!(canvas.get_pixel(1279, 40), &paint::HEADER);
    assert_eq!(canvas.get_pixel(1279, 90), &paint::BACKGROUND);
}
