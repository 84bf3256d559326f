use url::Url;

use super::Dispenser;
use crate::{common::DispenseResult, composer::RenderedImage};

/// QR code rendering straight from a [`Url`], using a default [`Dispenser`].
pub trait QrRepresentation {
    /// Fails with [`crate::DispenseError::InvalidUrl`] when the URL isn't a network URL.
    fn qr_representation(&self) -> DispenseResult<RenderedImage>;
}

impl QrRepresentation for Url {
    fn qr_representation(&self) -> DispenseResult<RenderedImage> {
        Dispenser::new().generate_url(self, None)
    }
}
