//! Random test strings.
//!
//! Produces search patterns and haystacks for exercising generated automata.
//! Unrelated to topology construction.
//!
//! **Note**: This module requires the optional `rand` dependency.

use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Alphabet strings are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serialization", serde(rename_all = "lowercase"))]
pub enum SymbolSet {
    /// Nucleotides `a`, `t`, `g`, `c`.
    Dna,
    /// ASCII digits, letters, punctuation and whitespace (100 symbols).
    #[default]
    Printable,
}

const DNA: &[char] = &['a', 't', 'g', 'c'];

impl SymbolSet {
    /// Symbols of the set.
    pub fn symbols(self) -> Vec<char> {
        match self {
            SymbolSet::Dna => DNA.to_vec(),
            SymbolSet::Printable => ('0'..='9')
                .chain('a'..='z')
                .chain('A'..='Z')
                .chain((0x21u8..=0x7E).map(char::from).filter(|c| c.is_ascii_punctuation()))
                .chain([' ', '\t', '\n', '\r', '\x0b', '\x0c'])
                .collect(),
        }
    }
}

impl fmt::Display for SymbolSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolSet::Dna => write!(f, "dna"),
            SymbolSet::Printable => write!(f, "printable"),
        }
    }
}

impl FromStr for SymbolSet {
    type Err = String;

    /// Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dna" => Ok(SymbolSet::Dna),
            "printable" => Ok(SymbolSet::Printable),
            other => Err(format!("unknown symbol set: {other}")),
        }
    }
}

/// Draws strings of uniformly random symbols.
///
/// # Example
///
/// ```rust
/// use levenshtein_anml::generate::{RandomStringGenerator, SymbolSet};
///
/// let mut gen = RandomStringGenerator::new(42);
/// let s = gen.generate(16, SymbolSet::Dna);
/// assert_eq!(s.len(), 16);
/// assert!(s.chars().all(|c| "atgc".contains(c)));
/// ```
pub struct RandomStringGenerator {
    rng: StdRng,
}

impl RandomStringGenerator {
    /// Create a generator with a fixed seed, for reproducible output.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a generator seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Generate `length` symbols from `symbol_set`.
    pub fn generate(&mut self, length: usize, symbol_set: SymbolSet) -> String {
        let alphabet = symbol_set.symbols();
        (0..length)
            .map(|_| alphabet[self.rng.gen_range(0..alphabet.len())])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_printable_matches_python_string_printable() {
        let symbols = SymbolSet::Printable.symbols();
        assert_eq!(symbols.len(), 100);
        assert!(symbols.contains(&'~'));
        assert!(symbols.contains(&'\x0b'));
        assert!(!symbols.contains(&'\x7f'));
    }

    #[test]
    fn test_dna_only_uses_nucleotides() {
        let mut gen = RandomStringGenerator::new(7);
        let s = gen.generate(200, SymbolSet::Dna);
        assert_eq!(s.chars().count(), 200);
        assert!(s.chars().all(|c| DNA.contains(&c)));
    }

    #[test]
    fn test_seed_is_reproducible() {
        let a = RandomStringGenerator::new(42).generate(64, SymbolSet::Printable);
        let b = RandomStringGenerator::new(42).generate(64, SymbolSet::Printable);
        let c = RandomStringGenerator::new(43).generate(64, SymbolSet::Printable);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_zero_length() {
        assert!(RandomStringGenerator::from_entropy()
            .generate(0, SymbolSet::Dna)
            .is_empty());
    }

    #[test]
    fn test_parse_symbol_set() {
        assert_eq!("DNA".parse::<SymbolSet>(), Ok(SymbolSet::Dna));
        assert_eq!("printable".parse::<SymbolSet>(), Ok(SymbolSet::Printable));
        assert!("hex".parse::<SymbolSet>().is_err());
    }
}
