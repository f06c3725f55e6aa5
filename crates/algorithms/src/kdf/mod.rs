//! Key Derivation Functions
//!
//! Only the ANSI X9.63 construction is provided. It stretches an ECDH shared
//! secret into key material by hashing `Z || counter || SharedInfo` with a
//! 32-bit big-endian counter starting at 1.
//!
//! ```
//! use nistecies_algorithms::kdf::X963Sha384;
//!
//! let z = [0x42u8; 32];
//! let stream = X963Sha384::derive(&z, None, 32).unwrap();
//! assert_eq!(stream.len(), 32);
//! ```

pub mod x963;

pub use x963::{X963Kdf, X963Sha384};
