//! Country-code registry with per-country subdivision name resolution.
//!
//! Built once from the embedded table and shared process-wide; every code
//! lookup is an exact match against the combined 2-/3-letter index. Lookup
//! misses and absent capabilities degrade to `None` / empty strings, never
//! errors.

pub mod subdivision;
mod table;

pub use subdivision::SubdivisionResolver;

use std::collections::HashMap;
use std::sync::OnceLock;
use tracing::warn;

pub const SUBDIVISION_SEPARATOR: char = '/';

/// One country from the embedded table.
pub struct CountryEntry {
    code2: &'static str,
    code3: &'static str,
    name: &'static str,
    subdivisions: Option<Box<dyn SubdivisionResolver>>,
}

impl CountryEntry {
    /// The 2-letter code (never blank, registry primary key).
    pub fn code2(&self) -> &'static str {
        self.code2
    }

    /// The 3-letter code, or `""` when the row has none.
    pub fn code3(&self) -> &'static str {
        self.code3
    }

    /// The canonical code, which is the 2-letter form.
    pub fn code(&self) -> &'static str {
        self.code2
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn supports_subdivisions(&self) -> bool {
        self.subdivisions.is_some()
    }

    /// Resolves a subdivision code to its display name, or `""` when this
    /// country has no resolver or the code is unknown/blank.
    pub fn subdivision_name(&self, state_code: &str) -> &'static str {
        if state_code.is_empty() {
            return "";
        }
        match &self.subdivisions {
            Some(resolver) => resolver.subdivision_name(state_code).unwrap_or(""),
            None => "",
        }
    }
}

/// Immutable country lookup table, indexed by both code forms.
pub struct CountryRegistry {
    entries: Vec<CountryEntry>,
    index: HashMap<&'static str, usize>,
}

impl CountryRegistry {
    pub fn new() -> Self {
        let mut entries = Vec::with_capacity(table::COUNTRY_TABLE.len());
        let mut index = HashMap::new();
        for row in table::COUNTRY_TABLE {
            let subdivisions = match row.subdivisions {
                Some(ctor) => match ctor() {
                    Ok(resolver) => Some(resolver),
                    Err(e) => {
                        // The entry stays usable, only the capability is lost.
                        warn!(country = row.name, error = %e, "subdivision lookup unavailable");
                        None
                    }
                },
                None => None,
            };
            let idx = entries.len();
            entries.push(CountryEntry {
                code2: row.code2,
                code3: row.code3,
                name: row.name,
                subdivisions,
            });
            index.insert(row.code2, idx);
            if !row.code3.is_empty() {
                index.insert(row.code3, idx);
            }
        }
        Self { entries, index }
    }

    /// The shared process-wide registry, built on first use and never
    /// mutated afterwards.
    pub fn global() -> &'static CountryRegistry {
        static REGISTRY: OnceLock<CountryRegistry> = OnceLock::new();
        REGISTRY.get_or_init(CountryRegistry::new)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &CountryEntry> {
        self.entries.iter()
    }

    /// Exact-match lookup by 2- or 3-letter code. Blank or unknown codes
    /// return `None`; no case normalization is applied.
    pub fn lookup(&self, code: &str) -> Option<&CountryEntry> {
        if code.is_empty() {
            return None;
        }
        self.index.get(code).map(|&i| &self.entries[i])
    }

    pub fn is_country_code(&self, code: &str) -> bool {
        self.lookup(code).is_some()
    }

    /// The country display name, or `""` when the code is unknown.
    pub fn country_name(&self, code: &str) -> &'static str {
        match self.lookup(code) {
            Some(entry) => entry.name(),
            None => "",
        }
    }

    /// The subdivision display name for a country/state code pair, or `""`
    /// on any miss (unknown country, blank codes, no capability).
    pub fn subdivision_name(&self, country_code: &str, state_code: &str) -> &'static str {
        if country_code.is_empty() || state_code.is_empty() {
            return "";
        }
        match self.lookup(country_code) {
            Some(entry) => entry.subdivision_name(state_code),
            None => "",
        }
    }

    /// Same as [`subdivision_name`](Self::subdivision_name), taking the
    /// combined `"COUNTRY/STATE"` form. Input without the separator
    /// returns `""`.
    pub fn subdivision_name_combined(&self, combined: &str) -> &'static str {
        match combined.split_once(SUBDIVISION_SEPARATOR) {
            Some((country_code, state_code)) => self.subdivision_name(country_code, state_code),
            None => "",
        }
    }

    /// The canonical 2-letter code for `code`, or `fallback` unchanged when
    /// `code` does not resolve.
    pub fn country_code<'a>(&self, code: &str, fallback: &'a str) -> &'a str {
        match self.lookup(code) {
            Some(entry) => entry.code(),
            None => fallback,
        }
    }
}

impl Default for CountryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// [`CountryRegistry::country_name`] over the shared registry.
pub fn country_name(code: &str) -> &'static str {
    CountryRegistry::global().country_name(code)
}

/// [`CountryRegistry::is_country_code`] over the shared registry.
pub fn is_country_code(code: &str) -> bool {
    CountryRegistry::global().is_country_code(code)
}

/// [`CountryRegistry::subdivision_name`] over the shared registry.
pub fn subdivision_name(country_code: &str, state_code: &str) -> &'static str {
    CountryRegistry::global().subdivision_name(country_code, state_code)
}

/// [`CountryRegistry::subdivision_name_combined`] over the shared registry.
pub fn subdivision_name_combined(combined: &str) -> &'static str {
    CountryRegistry::global().subdivision_name_combined(combined)
}

/// [`CountryRegistry::country_code`] over the shared registry.
pub fn country_code<'a>(code: &str, fallback: &'a str) -> &'a str {
    CountryRegistry::global().country_code(code, fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_both_code_forms() {
        let reg = CountryRegistry::global();
        let by2 = reg.lookup("US").unwrap();
        let by3 = reg.lookup("USA").unwrap();
        assert!(std::ptr::eq(by2, by3));
        assert_eq!(by2.name(), "United States");
        assert_eq!(by2.code3(), "USA");
    }

    #[test]
    fn test_lookup_misses() {
        let reg = CountryRegistry::global();
        assert!(reg.lookup("").is_none());
        assert!(reg.lookup("ZZ").is_none());
        // Codes are stored upper-case and matched exactly.
        assert!(reg.lookup("us").is_none());
    }

    #[test]
    fn test_country_name() {
        assert_eq!(country_name("DE"), "Germany");
        assert_eq!(country_name("DEU"), "Germany");
        assert_eq!(country_name("ZZ"), "");
        assert_eq!(country_name(""), "");
    }

    #[test]
    fn test_is_country_code() {
        assert!(is_country_code("GB"));
        assert!(is_country_code("GBR"));
        assert!(!is_country_code("ZZ"));
        assert!(!is_country_code(""));
    }

    #[test]
    fn test_country_code_fallback() {
        assert_eq!(country_code("US", "XX"), "US");
        // A 3-letter code canonicalizes to the 2-letter form.
        assert_eq!(country_code("USA", "XX"), "US");
        assert_eq!(country_code("unknown", "XX"), "XX");
        assert_eq!(country_code("", "XX"), "XX");
    }

    #[test]
    fn test_subdivision_name() {
        assert_eq!(subdivision_name("US", "CA"), "California");
        assert_eq!(subdivision_name("CA", "ON"), "Ontario");
        assert_eq!(subdivision_name("MX", "JAL"), "Jalisco");
        // Resolvers work through the 3-letter alias too.
        assert_eq!(subdivision_name("USA", "TX"), "Texas");
    }

    #[test]
    fn test_subdivision_name_misses() {
        // Country without the capability.
        assert_eq!(subdivision_name("DE", "BY"), "");
        // Unknown country / state, blank inputs.
        assert_eq!(subdivision_name("ZZ", "CA"), "");
        assert_eq!(subdivision_name("US", "ZZ"), "");
        assert_eq!(subdivision_name("", "CA"), "");
        assert_eq!(subdivision_name("US", ""), "");
    }

    #[test]
    fn test_subdivision_name_combined() {
        assert_eq!(subdivision_name_combined("US/CA"), subdivision_name("US", "CA"));
        assert_eq!(subdivision_name_combined("US/CA"), "California");
        assert_eq!(subdivision_name_combined("ZZ/CA"), "");
        assert_eq!(subdivision_name_combined("USCA"), "");
        assert_eq!(subdivision_name_combined(""), "");
        // Split happens at the first separator only.
        assert_eq!(subdivision_name_combined("US/CA/extra"), "");
    }

    #[test]
    fn test_registry_covers_every_row() {
        let reg = CountryRegistry::new();
        assert_eq!(reg.len(), 211);
        for entry in reg.entries() {
            assert!(reg.is_country_code(entry.code2()));
            if !entry.code3().is_empty() {
                assert!(reg.is_country_code(entry.code3()));
            }
        }
    }

    #[test]
    fn test_supported_subdivision_countries() {
        let reg = CountryRegistry::global();
        for code in ["US", "CA", "MX"] {
            assert!(reg.lookup(code).unwrap().supports_subdivisions(), "{code}");
        }
        assert!(!reg.lookup("FR").unwrap().supports_subdivisions());
    }
}
