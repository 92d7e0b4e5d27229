//! I define the [`Loader`] trait, through which graphs fetch remote data,
//! and a few implementations of it.
mod _error;
pub use _error::*;
#[cfg(feature = "http_client")]
mod _http;
#[cfg(feature = "http_client")]
pub use _http::*;
mod _local;
pub use _local::*;
mod _no;
pub use _no::*;
mod _trait;
pub use _trait::*;
