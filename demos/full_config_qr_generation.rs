use std::error::Error;

use image::{Rgba, RgbaImage};
use qrdispenser::{
    Appearance, Dispenser, ECLevel, QrcodeGenerator, RenderOptions, Theme, WiFiEncryption,
};

fn main() -> Result<(), Box<dyn Error>> {
    let mut generator = QrcodeGenerator::new();
    generator.ec_level(ECLevel::H); // Error correction level - if not provided, defaults to ECLevel::M

    let mut opts = RenderOptions::new();
    opts.theme(Theme::Auto) // Light, Dark or Auto - if not provided, defaults to Theme::Auto
        .module_size(8) // Pixels per module - if not provided, defaults to 10
        .quiet_zone(4) // Border in modules - if not provided, defaults to 4
        .overlay(RgbaImage::from_pixel(48, 48, Rgba([255, 165, 0, 255])));

    let mut dispenser = Dispenser::with_generator(generator);
    dispenser.options(opts).appearance(|| Appearance::Dark);

    let img = dispenser.generate_wifi("Home", "secret123", WiFiEncryption::Wpa)?;
    img.save("configured_qr.png")?;
    println!("Configured QR code saved to: configured_qr.png");

    // Tint overrides the theme for this call only
    let url = url::Url::parse("https://www.rust-lang.org")?;
    let img = dispenser.generate_url(&url, Some(Rgba([0, 0, 128, 255])))?;
    img.save("tinted_qr.png")?;
    println!("Tinted QR code saved to: tinted_qr.png");

    Ok(())
}
