mod url_ext;

pub use url_ext::QrRepresentation;

use std::fmt;

use image::Rgba;
use url::Url;

use crate::{
    common::{
        diagnostics_enabled, ContentRequest, DispenseError, DispenseResult, Location,
        WiFiEncryption,
    },
    composer::{compose, Appearance, AppearanceSource, RenderOptions, RenderedImage},
    encoder::{encode, Payload},
    symbol::{QrcodeGenerator, SymbolGenerator},
    validator::{validate, DataType},
};

// Stage
//------------------------------------------------------------------------------

/// Steps a request passes through. A failure at any step ends the request.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Stage {
    Received,
    Validated,
    Encoded,
    SymbolGenerated,
    Composed,
    Done,
}

// Dispenser
//------------------------------------------------------------------------------

type BoxedAppearance = Box<dyn AppearanceSource + Send + Sync>;

/// Validates, encodes, generates and renders QR codes, one request at a time.
///
/// ```rust
/// use qrdispenser::{Dispenser, WiFiEncryption};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let dispenser = Dispenser::new();
/// let img = dispenser.generate_wifi("Home", "secret123", WiFiEncryption::Wpa)?;
/// assert_eq!(img.width(), img.height());
/// # Ok(())
/// # }
/// ```
pub struct Dispenser<G = QrcodeGenerator> {
    generator: G,
    options: RenderOptions,
    appearance: BoxedAppearance,
}

impl Dispenser<QrcodeGenerator> {
    pub fn new() -> Self {
        Self::with_generator(QrcodeGenerator::new())
    }
}

impl Default for Dispenser<QrcodeGenerator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G> fmt::Debug for Dispenser<G>
where
    G: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispenser")
            .field("generator", &self.generator)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl<G: SymbolGenerator> Dispenser<G> {
    pub fn with_generator(generator: G) -> Self {
        Self {
            generator,
            options: RenderOptions::default(),
            appearance: Box::new(Appearance::default()),
        }
    }

    /// Where [`crate::Theme::Auto`] reads the current display appearance from. Defaults to
    /// [`Appearance::Light`].
    pub fn appearance<A>(&mut self, source: A) -> &mut Self
    where
        A: AppearanceSource + Send + Sync + 'static,
    {
        self.appearance = Box::new(source);
        self
    }

    /// Options used by every `generate*` method except [`Self::generate_with`].
    pub fn options(&mut self, options: RenderOptions) -> &mut Self {
        self.options = options;
        self
    }

    pub fn get_options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Validates and encodes `req` without rendering it.
    pub fn payload(&self, req: &ContentRequest) -> DispenseResult<Payload> {
        trace(req, Stage::Received);
        let mut stage = Stage::Received;

        if let Some((kind, text)) = format_check(req) {
            if !validate(text, kind) {
                let err = match kind {
                    DataType::Url => DispenseError::InvalidUrl,
                    DataType::Email => DispenseError::InvalidEmail,
                    DataType::PhoneNumber => DispenseError::InvalidPhoneNumber,
                };
                return Err(report(req, stage, err, Some(text)));
            }
            stage = Stage::Validated;
            trace(req, stage);
        }

        let payload = encode(req).map_err(|e| report(req, stage, e.into(), None))?;
        trace(req, Stage::Encoded);
        Ok(payload)
    }

    pub fn generate(&self, req: &ContentRequest) -> DispenseResult<RenderedImage> {
        self.generate_with(req, &self.options)
    }

    pub fn generate_with(
        &self,
        req: &ContentRequest,
        opts: &RenderOptions,
    ) -> DispenseResult<RenderedImage> {
        let payload = self.payload(req)?;

        let bmp = self
            .generator
            .generate_symbol(&payload)
            .map_err(|e| report(req, Stage::Encoded, e.into(), None))?;
        trace(req, Stage::SymbolGenerated);

        let img = compose(&bmp, opts, self.appearance.as_ref())
            .map_err(|e| report(req, Stage::SymbolGenerated, e.into(), None))?;
        trace(req, Stage::Composed);

        trace(req, Stage::Done);
        Ok(img)
    }

    /// Encodes `text` as is.
    pub fn generate_text(&self, text: &str) -> DispenseResult<RenderedImage> {
        self.generate(&ContentRequest::PlainText(text.to_string()))
    }

    /// Encodes the absolute form of `url` once it passes the URL format check. A `tint`
    /// overrides the configured options for this call.
    pub fn generate_url(
        &self,
        url: &Url,
        tint: Option<Rgba<u8>>,
    ) -> DispenseResult<RenderedImage> {
        let req = ContentRequest::WebUrl(url.clone());
        match tint {
            Some(color) => {
                let mut opts = self.options.clone();
                opts.tint(color);
                self.generate_with(&req, &opts)
            }
            None => self.generate(&req),
        }
    }

    /// Encodes `mailto:<email>`.
    pub fn generate_email(&self, email: &str) -> DispenseResult<RenderedImage> {
        self.generate(&ContentRequest::Email(email.to_string()))
    }

    /// Encodes `tel:<number>`.
    pub fn generate_phone_number(&self, number: &str) -> DispenseResult<RenderedImage> {
        self.generate(&ContentRequest::PhoneNumber(number.to_string()))
    }

    pub fn generate_wifi(
        &self,
        ssid: &str,
        password: &str,
        encryption: WiFiEncryption,
    ) -> DispenseResult<RenderedImage> {
        self.generate(&ContentRequest::wifi(ssid, password, encryption))
    }

    pub fn generate_geo(
        &self,
        latitude: f64,
        longitude: f64,
        altitude: f64,
    ) -> DispenseResult<RenderedImage> {
        self.generate(&ContentRequest::geo(latitude, longitude, altitude))
    }

    pub fn generate_location<L>(&self, location: &L) -> DispenseResult<RenderedImage>
    where
        L: Location + ?Sized,
    {
        self.generate(&ContentRequest::from_location(location))
    }
}

fn format_check(req: &ContentRequest) -> Option<(DataType, &str)> {
    match req {
        ContentRequest::WebUrl(url) => Some((DataType::Url, url.as_str())),
        ContentRequest::Email(addr) => Some((DataType::Email, addr.as_str())),
        ContentRequest::PhoneNumber(num) => Some((DataType::PhoneNumber, num.as_str())),
        ContentRequest::PlainText(_)
        | ContentRequest::WiFiNetwork { .. }
        | ContentRequest::GeoLocation { .. } => None,
    }
}

fn trace(req: &ContentRequest, stage: Stage) {
    log::trace!(target: "qrdispenser::dispenser", "{} request: {stage:?}", req.kind());
}

// Logs the failure when diagnostics are on. The returned error never carries the input.
fn report(
    req: &ContentRequest,
    after: Stage,
    err: DispenseError,
    input: Option<&str>,
) -> DispenseError {
    if diagnostics_enabled() {
        match input {
            Some(text) => log::warn!(
                target: "qrdispenser::dispenser",
                "{} request failed after {after:?}: {text:?} rejected: {err}",
                req.kind()
            ),
            None => log::warn!(
                target: "qrdispenser::dispenser",
                "{} request failed after {after:?}: {err}",
                req.kind()
            ),
        }
    }
    err
}

#[cfg(test)]
mod dispenser_tests {
    use std::sync::{Arc, Mutex};

    use image::Rgba;
    use test_case::test_case;
    use url::Url;

    use super::Dispenser;
    use crate::{
        common::{
            ComposeError, ContentRequest, Coordinates, DispenseError, SymbolError, SymbolResult,
            WiFiEncryption,
        },
        composer::{Appearance, RenderOptions, Theme},
        encoder::Payload,
        symbol::SymbolBitmap,
    };

    // Records every payload and answers with a fixed 3x3 bitmap
    fn recording() -> (
        Arc<Mutex<Vec<String>>>,
        impl Fn(&Payload) -> SymbolResult<SymbolBitmap> + Send + Sync,
    ) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&seen);
        let stub = move |p: &Payload| -> SymbolResult<SymbolBitmap> {
            log.lock().unwrap().push(p.to_string());
            Ok(SymbolBitmap::from_fn(3, |x, y| x == y))
        };
        (seen, stub)
    }

    #[test_case(ContentRequest::PlainText("hi".into()), "hi")]
    #[test_case(ContentRequest::WebUrl(Url::parse("https://example.com/a").unwrap()), "https://example.com/a")]
    #[test_case(ContentRequest::Email("a@b.com".into()), "mailto:a@b.com")]
    #[test_case(ContentRequest::PhoneNumber("+1 (555) 123-4567".into()), "tel:+1 (555) 123-4567")]
    #[test_case(ContentRequest::wifi("Home", "secret123", WiFiEncryption::Wpa), "WIFI:S:Home;T:WPA;P:secret123;;")]
    #[test_case(ContentRequest::geo(45.0, 9.0, 120.0), "geo:45.0,9.0,120.0")]
    fn test_payload_forwarded(req: ContentRequest, exp: &str) {
        let (seen, stub) = recording();
        let dispenser = Dispenser::with_generator(stub);
        dispenser.generate(&req).unwrap();
        assert_eq!(*seen.lock().unwrap(), vec![exp.to_string()]);
    }

    #[test_case(ContentRequest::Email("not-an-email".into()), DispenseError::InvalidEmail)]
    #[test_case(ContentRequest::PhoneNumber("call me".into()), DispenseError::InvalidPhoneNumber)]
    #[test_case(ContentRequest::WebUrl(Url::parse("mailto:a@b.com").unwrap()), DispenseError::InvalidUrl)]
    #[test_case(ContentRequest::wifi("", "p", WiFiEncryption::Wpa), DispenseError::EmptySsid)]
    #[test_case(ContentRequest::wifi("s", "", WiFiEncryption::Wpa), DispenseError::EmptyPassword)]
    fn test_input_errors_stop_before_generation(req: ContentRequest, exp: DispenseError) {
        let (seen, stub) = recording();
        let dispenser = Dispenser::with_generator(stub);
        assert_eq!(dispenser.generate(&req), Err(exp));
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_symbol_error_passes_through() {
        let failing = |_: &Payload| -> SymbolResult<SymbolBitmap> {
            Err(SymbolError::UnencodableCharacters)
        };
        let dispenser = Dispenser::with_generator(failing);
        assert_eq!(
            dispenser.generate_text("x"),
            Err(DispenseError::Symbol(SymbolError::UnencodableCharacters))
        );
    }

    #[test]
    fn test_composition_error_passes_through() {
        let empty = |_: &Payload| -> SymbolResult<SymbolBitmap> { Ok(SymbolBitmap::new(0, vec![])) };
        let dispenser = Dispenser::with_generator(empty);
        assert_eq!(
            dispenser.generate_text("x"),
            Err(DispenseError::Composition(ComposeError::EmptySymbol))
        );
    }

    #[test]
    fn test_url_tint_applies_to_single_call() {
        let (_, stub) = recording();
        let mut dispenser = Dispenser::with_generator(stub);
        let mut opts = RenderOptions::new();
        opts.module_size(1).quiet_zone(0).theme(Theme::Light);
        dispenser.options(opts);

        let url = Url::parse("https://example.com").unwrap();
        let red = Rgba([255, 0, 0, 255]);

        let tinted = dispenser.generate_url(&url, Some(red)).unwrap();
        assert_eq!(*tinted.get_pixel(0, 0), red);
        assert_eq!(tinted.get_pixel(1, 0)[3], 0);

        let plain = dispenser.generate_url(&url, None).unwrap();
        assert_eq!(*plain.get_pixel(0, 0), Rgba([0, 0, 0, 255]));
        assert_eq!(*plain.get_pixel(1, 0), Rgba([255, 255, 255, 255]));
        assert_eq!(dispenser.get_options().get_tint(), None);
    }

    #[test]
    fn test_auto_theme_reads_appearance() {
        let (_, stub) = recording();
        let mut dispenser = Dispenser::with_generator(stub);
        let mut opts = RenderOptions::new();
        opts.module_size(1).quiet_zone(0);
        dispenser.options(opts).appearance(|| Appearance::Dark);

        let img = dispenser.generate_text("x").unwrap();
        assert_eq!(*img.get_pixel(0, 0), Rgba([255, 255, 255, 255]));
        assert_eq!(*img.get_pixel(1, 0), Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn test_location_matches_coordinates() {
        let (seen, stub) = recording();
        let dispenser = Dispenser::with_generator(stub);
        dispenser.generate_location(&Coordinates::new(45.0, 9.0, 120.0)).unwrap();
        dispenser.generate_geo(45.0, 9.0, 120.0).unwrap();
        let seen = seen.lock().unwrap();
        assert_eq!(seen[0], seen[1]);
    }

    #[test]
    fn test_payload_only() {
        let dispenser = Dispenser::new();
        let payload = dispenser.payload(&ContentRequest::Email("a@b.com".into())).unwrap();
        assert_eq!(payload.as_str(), "mailto:a@b.com");
        assert_eq!(
            dispenser.payload(&ContentRequest::Email("nope".into())),
            Err(DispenseError::InvalidEmail)
        );
    }

    #[test]
    fn test_dispenser_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Dispenser>();
    }
}
