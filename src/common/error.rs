use thiserror::Error;

// Encoder error
//------------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq, Eq, Copy, Clone)]
pub enum EncodeError {
    #[error("WiFi SSID cannot be empty")]
    EmptySsid,
    #[error("WiFi password cannot be empty")]
    EmptyPassword,
}

pub type EncodeResult<T> = Result<T, EncodeError>;

// Symbol error
//------------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq, Eq, Copy, Clone)]
pub enum SymbolError {
    #[error("Payload too large to fit in a QR symbol")]
    PayloadTooLarge,
    #[error("Payload contains characters the QR symbol cannot encode")]
    UnencodableCharacters,
}

pub type SymbolResult<T> = Result<T, SymbolError>;

// Composition error
//------------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq, Eq, Copy, Clone)]
pub enum ComposeError {
    #[error("Symbol bitmap is empty")]
    EmptySymbol,
    #[error("Symbol bitmap has {modules} modules, expected {expected}")]
    MalformedSymbol { modules: usize, expected: usize },
    #[error("Module size must be at least one pixel")]
    InvalidModuleSize,
    #[error("Rendered image exceeds the pixel budget")]
    DimensionOverflow,
    #[error("Overlay image is empty")]
    EmptyOverlay,
    #[error("Overlay image {overlay:?} is larger than the code {code:?}")]
    OverlayTooLarge { overlay: (u32, u32), code: (u32, u32) },
}

pub type ComposeResult<T> = Result<T, ComposeError>;

// Dispense error
//------------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq, Eq, Copy, Clone)]
pub enum DispenseError {
    // Input
    #[error("Invalid URL")]
    InvalidUrl,
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Invalid phone number")]
    InvalidPhoneNumber,
    #[error("WiFi SSID cannot be empty")]
    EmptySsid,
    #[error("WiFi password cannot be empty")]
    EmptyPassword,

    // Generation
    #[error(transparent)]
    Symbol(#[from] SymbolError),

    // Composition
    #[error(transparent)]
    Composition(#[from] ComposeError),
}

impl DispenseError {
    /// Errors the caller can fix by correcting the input.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidUrl
                | Self::InvalidEmail
                | Self::InvalidPhoneNumber
                | Self::EmptySsid
                | Self::EmptyPassword
        )
    }

    pub fn is_generation_error(&self) -> bool {
        matches!(self, Self::Symbol(_))
    }

    pub fn is_composition_error(&self) -> bool {
        matches!(self, Self::Composition(_))
    }
}

impl From<EncodeError> for DispenseError {
    fn from(e: EncodeError) -> Self {
        match e {
            EncodeError::EmptySsid => Self::EmptySsid,
            EncodeError::EmptyPassword => Self::EmptyPassword,
        }
    }
}

pub type DispenseResult<T> = Result<T, DispenseError>;
