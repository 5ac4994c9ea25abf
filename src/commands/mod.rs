pub mod navigate;
pub mod open;
pub mod scan;
pub mod status;

pub use navigate::*;
pub use open::*;
pub use scan::*;
pub use status::*;
