use crate::Allele;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Joins the two alleles of a genotype key.
pub const SEPARATOR: &str = "/";

/// An unordered pair of alleles at one locus.
///
/// The alleles keep the order they were written in, which is what
/// [`Genotype::key`] shows, but equality and hashing ignore it:
/// `E/e` and `e/E` are the same genotype.
#[derive(Debug, Clone)]
pub struct Genotype {
    first: Allele,
    second: Allele,
}

impl Genotype {
    pub fn new(first: &str, second: &str) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    /// Builds a genotype only when both alleles are present and non-empty.
    pub fn from_alleles(first: Option<&str>, second: Option<&str>) -> Option<Self> {
        match (first, second) {
            (Some(a), Some(b)) if !a.is_empty() && !b.is_empty() => Some(Self::new(a, b)),
            _ => None,
        }
    }

    /// Parses `a{separator}b`. Anything other than exactly two non-empty
    /// alleles yields `None`.
    pub fn parse(input: &str, separator: &str) -> Option<Self> {
        let mut parts = input.split(separator).map(str::trim);
        let genotype = Self::from_alleles(parts.next(), parts.next())?;
        match parts.next() {
            None => Some(genotype),
            Some(_) => None,
        }
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn second(&self) -> &str {
        &self.second
    }

    /// The genotype in its own allele order, e.g. `e/E`.
    pub fn key(&self) -> String {
        join(&self.first, &self.second)
    }

    pub fn reversed_key(&self) -> String {
        join(&self.second, &self.first)
    }

    /// The same genotype with alleles in canonical (case-sensitive
    /// lexicographic) order.
    pub fn canonical(&self) -> Self {
        let (a, b) = self.sorted();
        Self::new(a, b)
    }

    pub fn canonical_key(&self) -> String {
        let (a, b) = self.sorted();
        join(a, b)
    }

    pub fn carries(&self, allele: &str) -> bool {
        self.first == allele || self.second == allele
    }

    pub fn is_homozygous(&self) -> bool {
        self.first == self.second
    }

    fn sorted(&self) -> (&str, &str) {
        let (a, b) = (self.first.as_str(), self.second.as_str());
        match a.cmp(b) {
            Ordering::Greater => (b, a),
            _ => (a, b),
        }
    }
}

impl PartialEq for Genotype {
    fn eq(&self, other: &Self) -> bool {
        self.sorted() == other.sorted()
    }
}

impl Eq for Genotype {}

impl Hash for Genotype {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sorted().hash(state);
    }
}

impl fmt::Display for Genotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.first, SEPARATOR, self.second)
    }
}

/// Canonical join key for two alleles, independent of their order.
pub fn canonical_key(first: &str, second: &str) -> String {
    Genotype::new(first, second).canonical_key()
}

/// Two-step table lookup: the genotype as written, then reversed.
///
/// Rule tables are authored in either allele order (`N/DM` next to
/// `e/E`), so callers go through this instead of the canonical key.
pub fn lookup_either_order<'t, F>(genotype: &Genotype, find: F) -> Option<&'t str>
where
    F: Fn(&str) -> Option<&'t str>,
{
    find(&genotype.key()).or_else(|| find(&genotype.reversed_key()))
}

fn join(a: &str, b: &str) -> String {
    format!("{}{}{}", a, SEPARATOR, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_canonical_key_ignores_order() {
        assert_eq!(canonical_key("e", "E"), "E/e");
        assert_eq!(canonical_key("E", "e"), "E/e");
        assert_eq!(canonical_key("n", "O"), "O/n");
        assert_eq!(canonical_key("N", "DM"), "DM/N");
    }

    #[test]
    fn test_equality_is_multiset() {
        let mut set = HashSet::new();
        set.insert(Genotype::new("A", "a"));
        assert!(set.contains(&Genotype::new("a", "A")));
        assert_ne!(Genotype::new("A", "A"), Genotype::new("A", "a"));
    }

    #[test]
    fn test_key_keeps_written_order() {
        let genotype = Genotype::new("e", "E");
        assert_eq!(genotype.key(), "e/E");
        assert_eq!(genotype.reversed_key(), "E/e");
        assert_eq!(genotype.to_string(), "e/E");
        assert_eq!(genotype.canonical().key(), "E/e");
    }

    #[test]
    fn test_incomplete_alleles_are_rejected() {
        assert!(Genotype::from_alleles(Some("E"), None).is_none());
        assert!(Genotype::from_alleles(Some(""), Some("e")).is_none());
        assert!(Genotype::parse("E", "/").is_none());
        assert!(Genotype::parse("E/e/e", "/").is_none());
        assert_eq!(Genotype::parse("Cr/n", "/"), Some(Genotype::new("n", "Cr")));
    }

    #[test]
    fn test_lookup_tries_reversed_order() {
        let table = [("N/DM", "Carrier")];
        let find = |key: &str| table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v);
        assert_eq!(lookup_either_order(&Genotype::new("N", "DM"), find), Some("Carrier"));
        assert_eq!(lookup_either_order(&Genotype::new("DM", "N"), find), Some("Carrier"));
        assert_eq!(lookup_either_order(&Genotype::new("DM", "DM"), find), None);
    }

    #[test]
    fn test_zygosity_and_carriers() {
        let genotype = Genotype::new("M", "m");
        assert!(!genotype.is_homozygous());
        assert!(genotype.carries("M"));
        assert!(!genotype.carries("Mc"));
        assert!(Genotype::new("m", "m").is_homozygous());
    }
}
