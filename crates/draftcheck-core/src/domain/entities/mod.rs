pub mod auxiliary;
pub mod draft;
pub mod submission;

pub use auxiliary::*;
pub use draft::*;
pub use submission::*;
