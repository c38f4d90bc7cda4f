use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;
use crate::scoring::Strategy;

/// On-disk configuration.
///
/// Every field is optional. Command-line flags win over config values, which
/// win over built-in defaults.
///
/// Example YAML:
/// ```yaml
/// strategy: heavily-compensated
/// format: json
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Default aggregation strategy (overridden by --strategy)
    #[serde(default)]
    pub strategy: Option<Strategy>,

    /// Default output format (overridden by --format)
    #[serde(default)]
    pub format: Option<OutputFormat>,
}
