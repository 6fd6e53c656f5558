use crate::Strictness;
use serde::Deserialize;

/// The configuration of a `Calculator`.
///
/// ```
/// use abakus::{CalculatorConfig, Strictness};
///
/// let config: CalculatorConfig = toml::from_str(r#"strictness = "strict""#).unwrap();
/// assert_eq!(config.strictness, Strictness::Strict);
///
/// let config: CalculatorConfig = toml::from_str("").unwrap();
/// assert_eq!(config, CalculatorConfig::default());
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// How operands are checked before dispatch.
    pub strictness: Strictness,
}
