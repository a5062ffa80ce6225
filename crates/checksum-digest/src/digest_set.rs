use std::collections::BTreeMap;
use std::fmt;

use crate::Algorithm;

/// Finished digest bytes. Displays as lowercase hex without separators.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Digest(Vec<u8>);

impl Digest {
    pub fn new(bytes: Vec<u8>) -> Self { Self(bytes) }

    pub fn as_bytes(&self) -> &[u8] { &self.0 }

    pub fn to_hex(&self) -> String { hex::encode(&self.0) }

    pub fn into_bytes(self) -> Vec<u8> { self.0 }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.to_hex()) }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] { &self.0 }
}

/// Digests of one run, keyed by algorithm.
///
/// Only requested algorithms are present. Iteration is always in canonical
/// algorithm order regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DigestSet {
    digests: BTreeMap<Algorithm, Digest>,
}

impl DigestSet {
    pub fn new() -> Self { Self::default() }

    pub fn insert(&mut self, algorithm: Algorithm, digest: Digest) -> Option<Digest> {
        self.digests.insert(algorithm, digest)
    }

    pub fn get(&self, algorithm: Algorithm) -> Option<&Digest> { self.digests.get(&algorithm) }

    pub fn contains(&self, algorithm: Algorithm) -> bool { self.digests.contains_key(&algorithm) }

    pub fn len(&self) -> usize { self.digests.len() }

    pub fn is_empty(&self) -> bool { self.digests.is_empty() }

    pub fn algorithms(&self) -> impl Iterator<Item = Algorithm> + '_ {
        self.digests.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Algorithm, &Digest)> + '_ {
        self.digests.iter().map(|(alg, digest)| (*alg, digest))
    }

    /// First algorithm, in canonical order, whose hex rendering equals
    /// `candidate` exactly. The comparison is case-sensitive and does not trim.
    pub fn find_match(&self, candidate: &str) -> Option<Algorithm> {
        self.iter()
            .find(|(_, digest)| digest.to_hex() == candidate)
            .map(|(alg, _)| alg)
    }
}

impl FromIterator<(Algorithm, Digest)> for DigestSet {
    fn from_iter<I: IntoIterator<Item = (Algorithm, Digest)>>(iter: I) -> Self {
        Self {
            digests: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a DigestSet {
    type Item = (Algorithm, &'a Digest);
    type IntoIter = Box<dyn Iterator<Item = (Algorithm, &'a Digest)> + 'a>;

    fn into_iter(self) -> Self::IntoIter { Box::new(self.iter()) }
}
