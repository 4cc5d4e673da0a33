//! Contract service configuration.

use serde::Deserialize;

/// What a query does with stored bytes that do not decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecodePolicy {
    /// Fail the query with `ContractError::MalformedRecord`.
    #[default]
    Strict,
    /// Log a warning and return an empty record in place of the bad one.
    Lenient,
}

/// Configuration shared by the contract services.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContractConfig {
    pub decode_policy: DecodePolicy,
}

impl ContractConfig {
    /// Config that reproduces the zero-valued-record behavior.
    pub fn lenient() -> Self {
        Self {
            decode_policy: DecodePolicy::Lenient,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_strict() {
        assert_eq!(ContractConfig::default().decode_policy, DecodePolicy::Strict);
        assert_eq!(ContractConfig::lenient().decode_policy, DecodePolicy::Lenient);
    }

    #[test]
    fn test_deserialize() {
        let config: ContractConfig =
            serde_json::from_str(r#"{"decode_policy": "lenient"}"#).unwrap();
        assert_eq!(config, ContractConfig::lenient());

        let config: ContractConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ContractConfig::default());
    }
}
