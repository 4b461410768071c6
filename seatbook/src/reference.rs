//! Booking reference codes.
//!
//! A reference is an 8-character code drawn from the uppercase ASCII
//! letters and digits. References are generated randomly and checked
//! against the codes already stored until an unused one is found.

use std::collections::HashSet;
use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Symbols a reference is drawn from.
pub const ALPHABET: &[u8; 36] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of every reference.
pub const REFERENCE_LEN: usize = 8;

/// A unique booking reference such as `"K3Z9QX0A"`.
///
/// # Examples
///
/// ```
/// use seatbook::Reference;
///
/// let reference = Reference::parse("AB12CD34").unwrap();
/// assert_eq!(reference.as_str(), "AB12CD34");
///
/// assert!(Reference::parse("ab12cd34").is_err());
/// assert!(Reference::parse("SHORT").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Reference(String);

impl Reference {
    /// Validates an existing reference string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the value is not exactly eight
    /// uppercase letters or digits.
    pub fn parse(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.len() != REFERENCE_LEN || !value.bytes().all(|b| ALPHABET.contains(&b)) {
            return Err(Error::Validation {
                field: "reference".into(),
                message: format!(
                    "'{value}' must be {REFERENCE_LEN} characters from A-Z and 0-9"
                ),
            });
        }
        Ok(Self(value))
    }

    /// Draws a random reference. Uniqueness is not checked.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let code = (0..REFERENCE_LEN)
            .map(|_| char::from(ALPHABET[rng.gen_range(0..ALPHABET.len())]))
            .collect();
        Self(code)
    }

    /// Returns the reference text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Reference {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(value)
    }
}

impl From<Reference> for String {
    fn from(reference: Reference) -> Self {
        reference.0
    }
}

/// Draws references until one is not in `existing`.
///
/// There is no attempt limit: with 36^8 possible codes and a cabin of a few
/// hundred seats, a repeat draw is vanishingly rare.
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
/// use seatbook::reference::generate_unique;
///
/// let mut rng = rand::thread_rng();
/// let existing = HashSet::new();
/// let reference = generate_unique(&mut rng, &existing);
/// assert_eq!(reference.as_str().len(), 8);
/// ```
pub fn generate_unique<R: Rng + ?Sized>(rng: &mut R, existing: &HashSet<String>) -> Reference {
    loop {
        let candidate = Reference::random(rng);
        if !existing.contains(candidate.as_str()) {
            return candidate;
        }
        log::debug!("reference {candidate} already in use, drawing again");
    }
}
