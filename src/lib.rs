//! # qrdispenser
//!
//! A Rust library that dispenses ready-to-display QR code images for common kinds of content:
//! plain text, URLs, email addresses, phone numbers, WiFi credentials and geographic locations.
//!
//! ## Features
//!
//! - **Typed content**: each content type is encoded into the exact payload QR readers expect
//!   (`mailto:`, `tel:`, `WIFI:` and `geo:` URIs)
//! - **Input checks**: URLs, email addresses and phone numbers are format-checked before encoding
//! - **Themes**: opaque light (dark modules on white) or dark (white modules on black) rendering,
//!   or automatic selection from the caller's display appearance
//! - **Tinting**: a single flat color for the modules over a transparent background
//! - **Overlays**: a logo or any other image composited onto the center of the code
//! - **Pluggable symbols**: the QR module grid comes from any [`SymbolGenerator`]; the default
//!   one is backed by the `qrcode` crate
//!
//! ## Quick Start
//!
//! ### Simple QR Code Generation
//!
//! ```rust
//! use qrdispenser::Dispenser;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let img = Dispenser::new().generate_text("Hello, World!")?;
//! img.save("simple_qr.png")?;
//! # Ok(())
//! # }
//! ```
//!
//! ### Full Configuration
//!
//! ```rust
//! use image::{Rgba, RgbaImage};
//! use qrdispenser::{Dispenser, ECLevel, QrcodeGenerator, RenderOptions, Theme};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut generator = QrcodeGenerator::new();
//! generator.ec_level(ECLevel::H);               // Leaves room for the overlay - defaults to ECLevel::M
//!
//! let mut opts = RenderOptions::new();
//! opts.theme(Theme::Dark)                       // Light, Dark or Auto - defaults to Theme::Auto
//!     .module_size(8)                           // Pixels per module - defaults to 10
//!     .quiet_zone(4)                            // Border in modules - defaults to 4
//!     .overlay(RgbaImage::from_pixel(40, 40, Rgba([255, 0, 0, 255])));
//!
//! let mut dispenser = Dispenser::with_generator(generator);
//! dispenser.options(opts);
//!
//! let img = dispenser.generate_email("someone@example.com")?;
//! img.save("configured_qr.png")?;
//! # Ok(())
//! # }
//! ```
//!
//! ### Content Types
//!
//! | Method                                 | Payload                          |
//! |----------------------------------------|----------------------------------|
//! | [`Dispenser::generate_text`]           | the text, unchanged              |
//! | [`Dispenser::generate_url`]            | the absolute URL                 |
//! | [`Dispenser::generate_email`]          | `mailto:<address>`               |
//! | [`Dispenser::generate_phone_number`]   | `tel:<number>`                   |
//! | [`Dispenser::generate_wifi`]           | `WIFI:S:<ssid>;T:<enc>;P:<pw>;;` |
//! | [`Dispenser::generate_geo`]            | `geo:<lat>,<lon>,<alt>`          |
//!
//! WiFi fields are written without escaping, so an SSID or password containing `;`, `:` or `\`
//! may be read back differently by some scanners.
//!
//! ## Diagnostics
//!
//! Failures are always returned as [`DispenseError`]. When [`diagnostics_enabled`] is on (the
//! default) they are also reported through the [`log`] facade; install any logger to see them.

pub mod common;
pub mod composer;
pub mod dispenser;
pub mod encoder;
pub mod symbol;
pub mod validator;

pub use common::*;
pub use composer::{Appearance, AppearanceSource, RenderOptions, RenderedImage, Theme};
pub use dispenser::{Dispenser, QrRepresentation, Stage};
pub use encoder::{encode, Payload};
pub use symbol::{ECLevel, QrcodeGenerator, SymbolBitmap, SymbolGenerator};
pub use validator::{validate, DataType};
