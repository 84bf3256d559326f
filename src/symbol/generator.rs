use qrcode::{types::QrError, Color, EcLevel, QrCode};

use super::{SymbolBitmap, SymbolGenerator};
use crate::{
    common::{SymbolError, SymbolResult},
    encoder::Payload,
};

// Error correction level
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, Default)]
pub enum ECLevel {
    L = 0,
    #[default]
    M = 1,
    Q = 2,
    H = 3,
}

impl From<ECLevel> for EcLevel {
    fn from(ecl: ECLevel) -> Self {
        match ecl {
            ECLevel::L => EcLevel::L,
            ECLevel::M => EcLevel::M,
            ECLevel::Q => EcLevel::Q,
            ECLevel::H => EcLevel::H,
        }
    }
}

// Qrcode generator
//------------------------------------------------------------------------------

/// [`SymbolGenerator`] backed by the `qrcode` crate. Picks the smallest version that fits the
/// payload at the configured error correction level.
#[derive(Debug, Default, Clone)]
pub struct QrcodeGenerator {
    ec_level: ECLevel,
}

impl QrcodeGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use [`ECLevel::H`] when a large overlay covers the middle of the code.
    pub fn ec_level(&mut self, ec_level: ECLevel) -> &mut Self {
        self.ec_level = ec_level;
        self
    }

    pub fn get_ec_level(&self) -> ECLevel {
        self.ec_level
    }
}

impl SymbolGenerator for QrcodeGenerator {
    fn generate_symbol(&self, payload: &Payload) -> SymbolResult<SymbolBitmap> {
        let code = QrCode::with_error_correction_level(payload.as_bytes(), self.ec_level.into())
            .map_err(symbol_error)?;

        let width = code.width();
        let modules = code.to_colors().into_iter().map(|c| c == Color::Dark).collect();

        log::debug!(
            target: "qrdispenser::symbol",
            "Generated {}x{} symbol at ec level {:?} for {} byte payload",
            width,
            width,
            self.ec_level,
            payload.len()
        );

        Ok(SymbolBitmap::new(width, modules))
    }
}

fn symbol_error(e: QrError) -> SymbolError {
    match e {
        QrError::DataTooLong | QrError::InvalidVersion => SymbolError::PayloadTooLarge,
        _ => SymbolError::UnencodableCharacters,
    }
}
