mod area;
mod config;
mod error;
mod events;
mod format;
mod mapper;
mod page;
mod point;
#[cfg(feature = "wrapper")]
mod wrapper;

pub use area::*;
pub use config::*;
pub use error::*;
pub use events::*;
pub use format::*;
pub use mapper::*;
pub use page::*;
pub use point::*;
#[cfg(feature = "wrapper")]
pub use wrapper::*;
