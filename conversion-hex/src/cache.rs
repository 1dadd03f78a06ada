//! Per-session rate cache.

use std::collections::HashMap;

use conversion_types::CurrencyPair;

/// Maps a directional currency pair to the converted amount of the first
/// provider-backed conversion for that pair.
///
/// A hit multiplies the new amount by the stored *converted amount*, treating
/// it as a per-unit rate. That is only arithmetically right when the first
/// request was for exactly 1 unit; the behavior is kept as-is.
///
/// Entries live for the whole session and are never replaced by hits.
/// Nothing is derived for the inverse pair.
#[derive(Debug, Default)]
pub struct RateCache {
    entries: HashMap<CurrencyPair, f64>,
}

impl RateCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, pair: &CurrencyPair) -> Option<f64> {
        self.entries.get(pair).copied()
    }

    pub fn put(&mut self, pair: CurrencyPair, converted_amount: f64) {
        self.entries.insert(pair, converted_amount);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conversion_types::CurrencyCode;

    #[test]
    fn test_directional_lookup() {
        let mut cache = RateCache::new();
        let pair = CurrencyPair::new(CurrencyCode::EUR, CurrencyCode::BGN);
        cache.put(pair, 1.95);

        assert_eq!(cache.get(&pair), Some(1.95));
        assert_eq!(
            cache.get(&CurrencyPair::new(CurrencyCode::BGN, CurrencyCode::EUR)),
            None
        );
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_empty_cache_misses() {
        let cache = RateCache::new();
        assert!(cache.is_empty());
        assert_eq!(
            cache.get(&CurrencyPair::new(CurrencyCode::USD, CurrencyCode::JPY)),
            None
        );
    }
}
