use std::num::NonZeroUsize;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct SolverConfig {
    /// Number of rank bands used to move nodes from A to B. `None` picks
    /// one from the input size.
    pub bands: Option<NonZeroUsize>,
    /// Keep the executed moves, not only their count.
    pub record: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            bands: None,
            record: true,
        }
    }
}

impl SolverConfig {
    pub fn with_bands(mut self, bands: Option<NonZeroUsize>) -> Self {
        self.bands = bands;
        self
    }

    pub fn with_record(mut self, record: bool) -> Self {
        self.record = record;
        self
    }

    pub fn band_count(&self, len: usize) -> usize {
        if let Some(bands) = self.bands {
            return bands.get();
        }
        match len {
            0..=10 => 1,
            11..=100 => 3,
            101..=250 => 5,
            _ => 8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_grow_with_input() {
        let config = SolverConfig::default();
        assert_eq!(config.band_count(6), 1);
        assert_eq!(config.band_count(100), 3);
        assert_eq!(config.band_count(200), 5);
        assert_eq!(config.band_count(500), 8);
    }

    #[test]
    fn explicit_bands_win() {
        let config = SolverConfig::default().with_bands(NonZeroUsize::new(2));
        assert_eq!(config.band_count(500), 2);
    }
}
