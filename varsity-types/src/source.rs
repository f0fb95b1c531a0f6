//! Source metadata types usable across crates.

/// Typed key for identifying upstream sources in chain configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceKey(pub &'static str);

impl SourceKey {
    /// Construct a new typed source key from a static name.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Returns the inner static string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl From<SourceKey> for &'static str {
    fn from(k: SourceKey) -> Self {
        k.0
    }
}

impl core::fmt::Display for SourceKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.0)
    }
}

/// Canonical keys for the bundled sources. Chain defaults reference these so
/// the fallback tables stay data, not branching code.
pub mod keys {
    use super::SourceKey;

    /// `cdn.espn.com` xhr standings endpoint.
    pub const ESPN_CDN: SourceKey = SourceKey::new("espn-cdn");
    /// `site.api.espn.com` JSON API (standings, scoreboards, summaries).
    pub const ESPN_SITE: SourceKey = SourceKey::new("espn-site");
    /// `espn.com` standings page scraper.
    pub const ESPN_WEB: SourceKey = SourceKey::new("espn-web");
    /// `statsapi.mlb.com` league-official standings.
    pub const MLB_STATSAPI: SourceKey = SourceKey::new("mlb-statsapi");
    /// `api-web.nhle.com` league-official standings.
    pub const NHL_WEB: SourceKey = SourceKey::new("nhl-web");
    /// `cbssports.com` standings page scraper.
    pub const CBS_WEB: SourceKey = SourceKey::new("cbs-web");
}
