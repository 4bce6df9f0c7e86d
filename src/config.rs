//! Detector configuration
//!
//! Defaults can be overridden from the environment:
//! - `QR_FINDER_CENTER`: `refined` or `coarse`
//! - `QR_FINDER_PARALLEL`: non-zero scans rows in parallel

use std::str::FromStr;

/// How a cross-section's center is estimated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CenterEstimate {
    /// X at the middle of the central dark run, Y at the middle of the
    /// vertical run that confirmed it
    #[default]
    Refined,
    /// X as `(start + trunc(s1 + s2 + s3/2)) / 2` in integer arithmetic, Y on
    /// the scanned row. Lands far from the true center except near x = 0.
    Coarse,
}

impl FromStr for CenterEstimate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "refined" => Ok(CenterEstimate::Refined),
            "coarse" => Ok(CenterEstimate::Coarse),
            other => Err(format!("unknown center estimate '{}'", other)),
        }
    }
}

/// Finder detector settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FinderConfig {
    /// Center estimation mode
    pub center_estimate: CenterEstimate,
    /// Scan rows on the rayon thread pool
    pub parallel: bool,
}

impl FinderConfig {
    /// Set the center estimation mode
    pub fn with_center_estimate(mut self, center_estimate: CenterEstimate) -> Self {
        self.center_estimate = center_estimate;
        self
    }

    /// Enable or disable parallel row scanning
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Defaults overridden by `QR_FINDER_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each `QR_FINDER_*` key
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("QR_FINDER_CENTER") {
            match value.parse::<CenterEstimate>() {
                Ok(center) => config.center_estimate = center,
                Err(err) => tracing::warn!("QR_FINDER_CENTER ignored: {}", err),
            }
        }

        if let Some(value) = lookup("QR_FINDER_PARALLEL") {
            match value.trim().parse::<u8>() {
                Ok(v) => config.parallel = v != 0,
                Err(_) => tracing::warn!("QR_FINDER_PARALLEL ignored: '{}' is not an integer", value),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_from<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_defaults() {
        let config = FinderConfig::default();
        assert_eq!(config.center_estimate, CenterEstimate::Refined);
        assert!(!config.parallel);
        assert_eq!(FinderConfig::from_lookup(|_| None), config);
    }

    #[test]
    fn test_lookup_overrides() {
        let config = FinderConfig::from_lookup(lookup_from(&[
            ("QR_FINDER_CENTER", " Coarse "),
            ("QR_FINDER_PARALLEL", "1"),
        ]));
        assert_eq!(config.center_estimate, CenterEstimate::Coarse);
        assert!(config.parallel);
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let config = FinderConfig::from_lookup(lookup_from(&[
            ("QR_FINDER_CENTER", "middle"),
            ("QR_FINDER_PARALLEL", "yes"),
        ]));
        assert_eq!(config, FinderConfig::default());
    }

    #[test]
    fn test_builders() {
        let config = FinderConfig::default()
            .with_center_estimate(CenterEstimate::Coarse)
            .with_parallel(true);
        assert_eq!(config.center_estimate, CenterEstimate::Coarse);
        assert!(config.parallel);
    }
}
