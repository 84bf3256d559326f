mod blend;
mod options;
mod raster;

pub use blend::{blend_with_mask, multiply, overlay_centered, tint};
pub use options::{
    Appearance, AppearanceSource, RenderOptions, Theme, DEFAULT_MODULE_SIZE, DEFAULT_QUIET_ZONE,
};
pub use raster::{invert, mask_to_alpha, rasterize, rendered_width, MAX_RENDERED_PIXELS};

use image::RgbaImage;

use crate::{common::ComposeResult, symbol::SymbolBitmap};

/// Final raster handed back to the caller.
pub type RenderedImage = RgbaImage;

/// Renders a symbol bitmap into the final image.
///
/// Steps:
/// 1. Rasterizes the bitmap at the configured module size, with a white quiet zone.
/// 2. Inverts it so that modules are white, giving the mask for the coloring step.
/// 3. Colors it in exactly one of two ways:
///    * with a tint, the mask becomes alpha and is multiplied with a flat field of the tint,
///      leaving modules in the tint over a transparent background;
///    * otherwise the theme picks an opaque palette, dark modules on white for
///      [`Appearance::Light`] and white modules on black for [`Appearance::Dark`].
///      [`Theme::Auto`] asks `appearance` at this point and nowhere else.
/// 4. Source-over composites the overlay, if any, onto the center.
///
/// Any failure leaves no image behind.
pub fn compose<A>(
    bmp: &SymbolBitmap,
    opts: &RenderOptions,
    appearance: &A,
) -> ComposeResult<RenderedImage>
where
    A: AppearanceSource + ?Sized,
{
    let raster = rasterize(bmp, opts.get_module_size(), opts.get_quiet_zone())?;
    let mask = invert(raster);

    let mut img = match opts.get_tint() {
        Some(color) => {
            log::debug!(target: "qrdispenser::composer", "Tinting with {color:?}");
            tint(&mask_to_alpha(&mask), color)
        }
        None => {
            let resolved = opts.get_theme().resolve(appearance);
            log::debug!(
                target: "qrdispenser::composer",
                "Rendering {:?} theme as {resolved:?}",
                opts.get_theme()
            );
            let (module, background) = resolved.palette();
            blend_with_mask(module, background, &mask)
        }
    };

    if let Some(overlay) = opts.get_overlay() {
        overlay_centered(&mut img, overlay)?;
    }

    Ok(img)
}
