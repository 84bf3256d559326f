use image::{imageops, GrayImage, Luma, Rgba, RgbaImage};
use imageproc::{drawing::draw_filled_rect_mut, map::map_colors, rect::Rect};

use crate::{
    common::{ComposeError, ComposeResult},
    symbol::SymbolBitmap,
};

pub(crate) const DARK: Luma<u8> = Luma([0]);
pub(crate) const LIGHT: Luma<u8> = Luma([255]);

/// Largest canvas, in pixels, the composer will allocate. At 4 bytes per RGBA pixel this caps a
/// single buffer at 1 GiB.
pub const MAX_RENDERED_PIXELS: u64 = 1 << 28;

/// Side length in pixels of a rendered symbol, quiet zone included. Fails with
/// [`ComposeError::DimensionOverflow`] when the square canvas would exceed
/// [`MAX_RENDERED_PIXELS`].
pub fn rendered_width(symbol_w: usize, module_sz: u32, quiet_zone: u32) -> ComposeResult<u32> {
    let symbol_w = u32::try_from(symbol_w).map_err(|_| ComposeError::DimensionOverflow)?;
    quiet_zone
        .checked_mul(2)
        .and_then(|qz| qz.checked_add(symbol_w))
        .and_then(|w| w.checked_mul(module_sz))
        .filter(|&w| u64::from(w) * u64::from(w) <= MAX_RENDERED_PIXELS)
        .ok_or(ComposeError::DimensionOverflow)
}

/// Draws dark modules as black squares of `module_sz` pixels on a white canvas, offset by a
/// white border of `quiet_zone` modules. No anti-aliasing.
pub fn rasterize(bmp: &SymbolBitmap, module_sz: u32, quiet_zone: u32) -> ComposeResult<GrayImage> {
    if bmp.width() == 0 {
        return Err(ComposeError::EmptySymbol);
    }
    if !bmp.is_well_formed() {
        return Err(ComposeError::MalformedSymbol {
            modules: bmp.modules().len(),
            expected: bmp.width().saturating_mul(bmp.width()),
        });
    }
    if module_sz == 0 {
        return Err(ComposeError::InvalidModuleSize);
    }

    let total_sz = rendered_width(bmp.width(), module_sz, quiet_zone)?;
    let qz_sz = (quiet_zone * module_sz) as i32;

    let mut canvas = GrayImage::from_pixel(total_sz, total_sz, LIGHT);
    for y in 0..bmp.width() {
        for x in 0..bmp.width() {
            if !bmp.is_dark(x, y) {
                continue;
            }
            let px = qz_sz + x as i32 * module_sz as i32;
            let py = qz_sz + y as i32 * module_sz as i32;
            draw_filled_rect_mut(&mut canvas, Rect::at(px, py).of_size(module_sz, module_sz), DARK);
        }
    }

    Ok(canvas)
}

/// Swaps dark and light.
pub fn invert(mut img: GrayImage) -> GrayImage {
    imageops::invert(&mut img);
    img
}

/// White image whose alpha is the luma of `mask`: black becomes fully transparent, white fully
/// opaque.
pub fn mask_to_alpha(mask: &GrayImage) -> RgbaImage {
    map_colors(mask, |Luma([l])| Rgba([255, 255, 255, l]))
}
