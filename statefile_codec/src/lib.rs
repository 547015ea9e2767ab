//! Field-level codec for persisting structured program state to a byte
//! stream and reconstructing it later. See [`codec`] for the stream format.

mod codec;
mod error;

pub use codec::*;
pub use error::*;
