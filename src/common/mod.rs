pub mod content;
pub mod diagnostics;
pub mod error;

pub use content::*;
pub use diagnostics::*;
pub use error::*;
