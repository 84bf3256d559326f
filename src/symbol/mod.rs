mod generator;

pub use generator::{ECLevel, QrcodeGenerator};

use crate::{common::SymbolResult, encoder::Payload};

// Symbol bitmap
//------------------------------------------------------------------------------

/// Square grid of QR modules, `true` for dark. Row-major, without a quiet zone.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct SymbolBitmap {
    width: usize,
    modules: Vec<bool>,
}

impl SymbolBitmap {
    /// The composer rejects bitmaps whose module count isn't `width * width`.
    pub fn new(width: usize, modules: Vec<bool>) -> Self {
        Self { width, modules }
    }

    pub fn from_fn(width: usize, f: impl Fn(usize, usize) -> bool) -> Self {
        let modules = (0..width * width).map(|i| f(i % width, i / width)).collect();
        Self { width, modules }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn modules(&self) -> &[bool] {
        &self.modules
    }

    /// Out-of-bounds coordinates, and modules missing from a malformed grid, read as light.
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.width && self.modules.get(y * self.width + x) == Some(&true)
    }

    pub fn count_dark_modules(&self) -> usize {
        self.modules.iter().filter(|&&m| m).count()
    }

    pub(crate) fn is_well_formed(&self) -> bool {
        self.width.checked_mul(self.width) == Some(self.modules.len())
    }

    /// Empty for a malformed grid.
    pub fn to_debug_str(&self) -> String {
        if !self.is_well_formed() {
            return String::new();
        }
        let mut res = String::with_capacity((self.width + 1) * self.width);
        for y in 0..self.width {
            for x in 0..self.width {
                res.push(if self.is_dark(x, y) { '█' } else { ' ' });
            }
            res.push('\n');
        }
        res
    }
}

// Symbol generator
//------------------------------------------------------------------------------

/// Turns a payload into a module grid. The grid is used as is; nothing downstream looks at
/// finder patterns or error correction blocks.
pub trait SymbolGenerator {
    fn generate_symbol(&self, payload: &Payload) -> SymbolResult<SymbolBitmap>;
}

impl<F> SymbolGenerator for F
where
    F: Fn(&Payload) -> SymbolResult<SymbolBitmap>,
{
    fn generate_symbol(&self, payload: &Payload) -> SymbolResult<SymbolBitmap> {
        self(payload)
    }
}
