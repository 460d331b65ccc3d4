//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use flatmask::config::{Config, ConfigMerger};
/// use flatmask::ReduceDegree;
///
/// let low = Config { degree: Some(ReduceDegree::TOTAL), ..Default::default() };
/// let high = Config { degree: Some(ReduceDegree::new(4)), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.degree, Some(ReduceDegree::new(4)));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target where set).
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.degree.is_some() {
            target.degree = source.degree;
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }
    }
}
