use std::{fmt, str::FromStr};

use thiserror::Error;
use url::Url;

// WiFi encryption
//------------------------------------------------------------------------------

/// Encryption used by the WiFi network a QR code describes.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub enum WiFiEncryption {
    Wep,
    Wpa,
    None,
}

impl WiFiEncryption {
    pub const ALL: [WiFiEncryption; 3] = [Self::Wep, Self::Wpa, Self::None];

    /// Token written after `T:` in the WiFi payload.
    pub fn token(self) -> &'static str {
        match self {
            Self::Wep => "WEP",
            Self::Wpa => "WPA",
            Self::None => "nopass",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Wep => "wep",
            Self::Wpa => "wpa",
            Self::None => "none",
        }
    }
}

impl fmt::Display for WiFiEncryption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
#[error("Unknown WiFi encryption: {0}")]
pub struct UnknownEncryption(pub String);

impl FromStr for WiFiEncryption {
    type Err = UnknownEncryption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|e| e.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownEncryption(s.to_string()))
    }
}

// Location
//------------------------------------------------------------------------------

/// Anything that can report a position on Earth.
pub trait Location {
    fn latitude(&self) -> f64;
    fn longitude(&self) -> f64;
    /// Meters above sea level.
    fn altitude(&self) -> f64;
}

#[derive(Debug, PartialEq, Copy, Clone, Default)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64, altitude: f64) -> Self {
        Self { latitude, longitude, altitude }
    }
}

impl Location for Coordinates {
    fn latitude(&self) -> f64 {
        self.latitude
    }

    fn longitude(&self) -> f64 {
        self.longitude
    }

    fn altitude(&self) -> f64 {
        self.altitude
    }
}

// Content request
//------------------------------------------------------------------------------

/// What a QR code should carry. Adding a content type means adding a variant here and a match
/// arm in the encoder.
#[derive(Debug, PartialEq, Clone)]
pub enum ContentRequest {
    PlainText(String),
    WebUrl(Url),
    Email(String),
    PhoneNumber(String),
    WiFiNetwork { ssid: String, password: String, encryption: WiFiEncryption },
    GeoLocation { latitude: f64, longitude: f64, altitude: f64 },
}

impl ContentRequest {
    pub fn wifi(ssid: impl Into<String>, password: impl Into<String>, enc: WiFiEncryption) -> Self {
        Self::WiFiNetwork { ssid: ssid.into(), password: password.into(), encryption: enc }
    }

    pub fn geo(latitude: f64, longitude: f64, altitude: f64) -> Self {
        Self::GeoLocation { latitude, longitude, altitude }
    }

    pub fn from_location<L: Location + ?Sized>(location: &L) -> Self {
        Self::geo(location.latitude(), location.longitude(), location.altitude())
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::PlainText(_) => "text",
            Self::WebUrl(_) => "url",
            Self::Email(_) => "email",
            Self::PhoneNumber(_) => "phone number",
            Self::WiFiNetwork { .. } => "wifi",
            Self::GeoLocation { .. } => "geo",
        }
    }
}
