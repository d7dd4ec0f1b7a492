mod args;
mod artifact;
mod descriptor;
mod error;
mod logging;
mod record;

pub use args::*;
pub use artifact::*;
pub use descriptor::*;
pub use error::*;
pub use logging::*;
pub use record::*;
