//! Hash-based block ids
//!
//! See the documentation of [Id] for details.

use std::convert::TryInto;
use std::fmt;
use std::str::FromStr;

use base58check::{FromBase58Check, ToBase58Check};
use blake2::digest::{Update, VariableOutput};
use blake2::Blake2bVar;

/// Hash-based block id
///
/// The `Id` wraps a 32-byte blake2b hash and is the concrete block hash the conflict
/// [DAG][crate::graph::DAG] is driven with. It is displayed using the Base58check format.
#[derive(Hash, Eq, PartialEq, Ord, PartialOrd, Copy, Clone, Serialize, Deserialize, Default)]
pub struct Id([u8; 32]);

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.to_base58check(0))
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.to_base58check(0))
    }
}

impl FromStr for Id {
    type Err = crate::Error;

    /// Converts a base58check encoded string to the bytes of an `Id`
    fn from_str(id_str: &str) -> Result<Self, crate::Error> {
        let (vsn, bytes) =
            id_str.from_base58check().map_err(|_| crate::Error::TryFromStringError)?;
        if vsn != 0 {
            return Err(crate::Error::TryFromStringError);
        }
        let bytes: [u8; 32] =
            bytes.as_slice().try_into().map_err(|_| crate::Error::TryFromStringError)?;
        Ok(Id(bytes))
    }
}

impl Id {
    /// Creates an id by hashing the block contents
    pub fn new(bytes: &[u8]) -> Id {
        Id(hash(bytes))
    }

    /// All-zeroes `Id` (for testing)
    pub fn zero() -> Id {
        Id([0u8; 32])
    }

    /// Returns the wrapped byte array containing the hash
    pub fn bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Derives the id of a child block, the `nonce` distinguishes siblings.
    pub fn child(&self, nonce: u64) -> Id {
        let mut bytes: Vec<u8> = nonce.to_be_bytes().to_vec();
        bytes.extend_from_slice(&self.0);
        Id(hash(&bytes))
    }
}

fn hash(input: &[u8]) -> [u8; 32] {
    let mut buf = [0u8; 32];
    // A 32 byte output is always a valid size for blake2b.
    if let Ok(mut hasher) = Blake2bVar::new(32) {
        hasher.update(input);
        let _ = hasher.finalize_variable(&mut buf);
    }
    buf
}
