//! Alternate-hostname table for IPv6-specific aliases.
//!
//! Some providers publish their IPv6 service under a separate hostname
//! (`news.eweka.nl` vs `news6.eweka.nl`) instead of adding AAAA records to
//! the primary name. Racing the alias alongside the primary lets IPv6 win
//! when it is the faster path, without depending on the provider's DNS
//! setup.

use std::borrow::Cow;
use std::collections::HashMap;

/// Hostnames whose IPv6 service lives under a separate alias.
///
/// Sourced from the usenet providers known to publish split v4/v6 hostnames.
const BUILTIN_ALIASES: &[(&str, &str)] = &[
    ("news.eweka.nl", "news6.eweka.nl"),
    ("news.xlned.com", "news6.xlned.com"),
    ("news.easynews.com", "news6.easynews.com"),
    ("news.tweaknews.nl", "news6.tweaknews.nl"),
    ("news.tweaknews.eu", "news6.tweaknews.eu"),
    ("news.astraweb.com", "news6.astraweb.com"),
    ("news.pureusenet.nl", "news6.pureusenet.nl"),
    ("news.sunnyusenet.com", "news6.sunnyusenet.com"),
    ("news.newshosting.com", "news6.newshosting.com"),
    ("news.usenetserver.com", "news6.usenetserver.com"),
    ("news.frugalusenet.com", "news-v6.frugalusenet.com"),
    ("eunews.frugalusenet.com", "eunews-v6.frugalusenet.com"),
];

/// Mapping from a primary hostname to its IPv6-specific alias.
///
/// Injected into the candidate resolver as configuration data. `Default`
/// carries the built-in provider table; use [`AliasTable::empty`] to start
/// from scratch. A hostname without an entry simply has no alias — that is
/// the common case, not an error.
#[derive(Debug, Clone)]
pub struct AliasTable {
    map: HashMap<Cow<'static, str>, Cow<'static, str>>,
}

impl AliasTable {
    /// Creates a table with no entries.
    pub fn empty() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Adds or replaces an alias for a primary hostname.
    pub fn insert(
        &mut self,
        primary: impl Into<Cow<'static, str>>,
        alias: impl Into<Cow<'static, str>>,
    ) {
        self.map.insert(primary.into(), alias.into());
    }

    /// Looks up the alias for a primary hostname, if one is configured.
    pub fn lookup(&self, primary: &str) -> Option<&str> {
        self.map.get(primary).map(|a| a.as_ref())
    }

    /// Returns the number of configured aliases.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Default for AliasTable {
    fn default() -> Self {
        let map = BUILTIN_ALIASES
            .iter()
            .map(|&(primary, alias)| (Cow::Borrowed(primary), Cow::Borrowed(alias)))
            .collect();
        Self { map }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_lookup() {
        let table = AliasTable::default();
        assert_eq!(table.lookup("news.eweka.nl"), Some("news6.eweka.nl"));
        assert_eq!(
            table.lookup("news.frugalusenet.com"),
            Some("news-v6.frugalusenet.com")
        );
        assert_eq!(table.lookup("example.com"), None);
        assert_eq!(table.len(), BUILTIN_ALIASES.len());
    }

    #[test]
    fn test_empty_and_insert() {
        let mut table = AliasTable::empty();
        assert!(table.is_empty());
        assert_eq!(table.lookup("news.eweka.nl"), None);

        table.insert("primary.example", "v6.primary.example");
        assert_eq!(table.lookup("primary.example"), Some("v6.primary.example"));
    }

    #[test]
    fn test_insert_replaces() {
        let mut table = AliasTable::default();
        table.insert("news.eweka.nl", "other6.eweka.nl");
        assert_eq!(table.lookup("news.eweka.nl"), Some("other6.eweka.nl"));
    }
}
