use image::{imageops, GrayImage, Luma, Rgba, RgbaImage};
use imageproc::map::{map_colors, map_colors2};

use crate::common::{ComposeError, ComposeResult};

fn mul(a: u8, b: u8) -> u8 {
    ((a as u16 * b as u16 + 127) / 255) as u8
}

fn lerp(fg: u8, bg: u8, t: u8) -> u8 {
    ((fg as u16 * t as u16 + bg as u16 * (255 - t as u16) + 127) / 255) as u8
}

/// Multiply composite of `src` over `backdrop`, channel by channel, alpha included. Where the
/// backdrop is transparent the result stays transparent.
pub fn multiply(src: &RgbaImage, backdrop: &RgbaImage) -> RgbaImage {
    map_colors2(src, backdrop, |Rgba(s), Rgba(b)| {
        let a = mul(s[3], b[3]);
        if a == 0 {
            return Rgba([0, 0, 0, 0]);
        }
        Rgba([mul(s[0], b[0]), mul(s[1], b[1]), mul(s[2], b[2]), a])
    })
}

/// Colors an alpha mask: opaque areas take `color`, transparent ones stay transparent.
pub fn tint(masked: &RgbaImage, color: Rgba<u8>) -> RgbaImage {
    let (w, h) = masked.dimensions();
    let field = RgbaImage::from_pixel(w, h, color);
    multiply(&field, masked)
}

/// Picks `input` where `mask` is white and `background` where it's black, mixing linearly in
/// between.
pub fn blend_with_mask(input: Rgba<u8>, background: Rgba<u8>, mask: &GrayImage) -> RgbaImage {
    map_colors(mask, |Luma([t])| {
        let mut px = [0; 4];
        for (i, c) in px.iter_mut().enumerate() {
            *c = lerp(input[i], background[i], t);
        }
        Rgba(px)
    })
}

/// Source-over composites `overlay` onto the center of `base`. Odd leftovers go to the right and
/// bottom.
///
/// Fails with [`ComposeError::EmptyOverlay`] for a zero-sized overlay, and with
/// [`ComposeError::OverlayTooLarge`] when the overlay is wider or taller than `base`, since it
/// would hide the whole code.
pub fn overlay_centered(base: &mut RgbaImage, overlay: &RgbaImage) -> ComposeResult<()> {
    let (ow, oh) = overlay.dimensions();
    let (bw, bh) = base.dimensions();
    if ow == 0 || oh == 0 {
        return Err(ComposeError::EmptyOverlay);
    }
    if ow > bw || oh > bh {
        return Err(ComposeError::OverlayTooLarge { overlay: (ow, oh), code: (bw, bh) });
    }

    let x = (bw - ow) / 2;
    let y = (bh - oh) / 2;
    imageops::overlay(base, overlay, x as i64, y as i64);
    Ok(())
}
