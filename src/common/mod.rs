mod fs;
#[cfg(feature = "download")]
mod download;
mod io;

pub use fs::*;
#[cfg(feature = "download")]
pub use download::*;
pub use io::*;
