use std::{fmt, ops::Deref};

use crate::common::{ContentRequest, EncodeError, EncodeResult};

// Payload
//------------------------------------------------------------------------------

/// Exact text stored in a QR symbol.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct Payload(String);

impl Payload {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Deref for Payload {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<[u8]> for Payload {
    fn as_ref(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Encoder
//------------------------------------------------------------------------------

/// Maps a content request to the payload a QR reader expects for it.
///
/// Only the WiFi variant can fail. The remaining content is written as given, so format checks
/// belong to the caller (see [`crate::validator`]).
///
/// WiFi fields are not escaped: an SSID or password containing `;`, `:` or `\` yields a payload
/// that readers may split differently.
pub fn encode(req: &ContentRequest) -> EncodeResult<Payload> {
    let text = match req {
        ContentRequest::PlainText(text) => text.clone(),
        ContentRequest::WebUrl(url) => url.as_str().to_string(),
        ContentRequest::Email(addr) => format!("mailto:{addr}"),
        ContentRequest::PhoneNumber(num) => format!("tel:{num}"),
        ContentRequest::WiFiNetwork { ssid, password, encryption } => {
            if ssid.is_empty() {
                return Err(EncodeError::EmptySsid);
            }
            if password.is_empty() {
                return Err(EncodeError::EmptyPassword);
            }
            format!("WIFI:S:{ssid};T:{};P:{password};;", encryption.token())
        }
        ContentRequest::GeoLocation { latitude, longitude, altitude } => format!(
            "geo:{},{},{}",
            format_coordinate(*latitude),
            format_coordinate(*longitude),
            format_coordinate(*altitude)
        ),
    };
    Ok(Payload(text))
}

// Shortest round-trip decimal, never exponent notation. Whole numbers keep a trailing ".0".
fn format_coordinate(value: f64) -> String {
    let mut s = value.to_string();
    if value.is_finite() && !s.contains('.') {
        s.push_str(".0");
    }
    s
}

#[cfg(test)]
mod encoder_tests {
    use test_case::test_case;
    use url::Url;

    use super::{encode, format_coordinate};
    use crate::common::{ContentRequest, EncodeError, WiFiEncryption};

    #[test_case(ContentRequest::PlainText("Hello, world!".into()), "Hello, world!")]
    #[test_case(ContentRequest::PlainText("a;b:c\\d".into()), "a;b:c\\d")]
    #[test_case(ContentRequest::PlainText("".into()), "")]
    #[test_case(ContentRequest::Email("a@b.com".into()), "mailto:a@b.com")]
    #[test_case(ContentRequest::PhoneNumber("+39 333 1234567".into()), "tel:+39 333 1234567")]
    #[test_case(ContentRequest::wifi("Home", "secret123", WiFiEncryption::Wpa), "WIFI:S:Home;T:WPA;P:secret123;;")]
    #[test_case(ContentRequest::wifi("Cafe", "1234567890", WiFiEncryption::Wep), "WIFI:S:Cafe;T:WEP;P:1234567890;;")]
    #[test_case(ContentRequest::wifi("Open", "x", WiFiEncryption::None), "WIFI:S:Open;T:nopass;P:x;;")]
    #[test_case(ContentRequest::wifi("a;b", "p:q\\", WiFiEncryption::Wpa), "WIFI:S:a;b;T:WPA;P:p:q\\;;")]
    #[test_case(ContentRequest::geo(45.0, 9.0, 120.0), "geo:45.0,9.0,120.0")]
    #[test_case(ContentRequest::geo(45.4642, 9.19, -3.5), "geo:45.4642,9.19,-3.5")]
    fn test_encode(req: ContentRequest, expected: &str) {
        assert_eq!(encode(&req).unwrap().as_str(), expected);
    }

    #[test]
    fn test_encode_url_is_absolute() {
        let url = Url::parse("https://example.com").unwrap();
        let payload = encode(&ContentRequest::WebUrl(url)).unwrap();
        assert_eq!(&*payload, "https://example.com/");
    }

    #[test]
    fn test_encode_is_pure() {
        let req = ContentRequest::wifi("Home", "secret123", WiFiEncryption::Wpa);
        assert_eq!(encode(&req).unwrap().as_bytes(), encode(&req).unwrap().as_bytes());
    }

    #[test]
    fn test_empty_ssid() {
        let req = ContentRequest::wifi("", "p", WiFiEncryption::Wpa);
        assert_eq!(encode(&req), Err(EncodeError::EmptySsid));
    }

    #[test]
    fn test_empty_password() {
        let req = ContentRequest::wifi("s", "", WiFiEncryption::Wpa);
        assert_eq!(encode(&req), Err(EncodeError::EmptyPassword));
    }

    #[test]
    fn test_empty_ssid_reported_first() {
        let req = ContentRequest::wifi("", "", WiFiEncryption::None);
        assert_eq!(encode(&req), Err(EncodeError::EmptySsid));
    }

    #[test_case(0.0, "0.0")]
    #[test_case(-0.0, "-0.0")]
    #[test_case(120.0, "120.0")]
    #[test_case(0.1, "0.1")]
    #[test_case(-0.000001, "-0.000001")]
    #[test_case(1e21, "1000000000000000000000.0")]
    #[test_case(f64::NAN, "NaN")]
    #[test_case(f64::INFINITY, "inf")]
    fn test_format_coordinate(value: f64, expected: &str) {
        assert_eq!(format_coordinate(value), expected);
    }
}
