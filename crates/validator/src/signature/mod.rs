//! ECDSA signer recovery and signature sets.

mod recover;
mod set;

pub use recover::{is_sentinel, recover, SignatureError, NULL_ADDRESS};
pub use set::SignatureSet;
