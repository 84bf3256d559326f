use image::{Rgba, RgbaImage};

pub const DEFAULT_MODULE_SIZE: u32 = 10;
pub const DEFAULT_QUIET_ZONE: u32 = 4;

// Theme
//------------------------------------------------------------------------------

/// Display appearance the code is rendered for.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, Default)]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

impl Appearance {
    /// (module, background) colors.
    pub fn palette(self) -> (Rgba<u8>, Rgba<u8>) {
        const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
        const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
        match self {
            Self::Light => (BLACK, WHITE),
            Self::Dark => (WHITE, BLACK),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, Default)]
pub enum Theme {
    Light,
    Dark,
    /// Follow the caller's display appearance at render time.
    #[default]
    Auto,
}

impl Theme {
    /// Queries `source` only for [`Theme::Auto`].
    pub fn resolve<A: AppearanceSource + ?Sized>(self, source: &A) -> Appearance {
        match self {
            Self::Light => Appearance::Light,
            Self::Dark => Appearance::Dark,
            Self::Auto => source.appearance(),
        }
    }
}

/// Source of the caller's current display appearance, queried only for [`Theme::Auto`].
pub trait AppearanceSource {
    fn appearance(&self) -> Appearance;
}

impl AppearanceSource for Appearance {
    fn appearance(&self) -> Appearance {
        *self
    }
}

impl<F: Fn() -> Appearance> AppearanceSource for F {
    fn appearance(&self) -> Appearance {
        self()
    }
}

// Render options
//------------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    tint: Option<Rgba<u8>>,
    overlay: Option<RgbaImage>,
    theme: Theme,
    module_sz: u32,
    quiet_zone: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            tint: None,
            overlay: None,
            theme: Theme::Auto,
            module_sz: DEFAULT_MODULE_SIZE,
            quiet_zone: DEFAULT_QUIET_ZONE,
        }
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paints dark modules in `color` over a transparent background. Overrides the theme.
    pub fn tint(&mut self, color: Rgba<u8>) -> &mut Self {
        self.tint = Some(color);
        self
    }

    pub fn unset_tint(&mut self) -> &mut Self {
        self.tint = None;
        self
    }

    pub fn overlay(&mut self, image: RgbaImage) -> &mut Self {
        self.overlay = Some(image);
        self
    }

    pub fn unset_overlay(&mut self) -> &mut Self {
        self.overlay = None;
        self
    }

    pub fn theme(&mut self, theme: Theme) -> &mut Self {
        self.theme = theme;
        self
    }

    pub fn module_size(&mut self, px: u32) -> &mut Self {
        self.module_sz = px;
        self
    }

    pub fn quiet_zone(&mut self, modules: u32) -> &mut Self {
        self.quiet_zone = modules;
        self
    }

    pub fn get_tint(&self) -> Option<Rgba<u8>> {
        self.tint
    }

    pub fn get_overlay(&self) -> Option<&RgbaImage> {
        self.overlay.as_ref()
    }

    pub fn get_theme(&self) -> Theme {
        self.theme
    }

    pub fn get_module_size(&self) -> u32 {
        self.module_sz
    }

    pub fn get_quiet_zone(&self) -> u32 {
        self.quiet_zone
    }

    /// Whether rendering needs the caller's appearance at all.
    pub fn needs_appearance(&self) -> bool {
        self.tint.is_none() && self.theme == Theme::Auto
    }
}
