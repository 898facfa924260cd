pub mod checksum;
pub mod error;
pub mod metadata;
pub mod normalize;
pub mod parity;
pub mod pattern;
pub mod upce;

pub use error::*;
pub use metadata::*;
pub use normalize::*;
pub use parity::*;
pub use pattern::*;
