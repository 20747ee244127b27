use crate::Result;
use crate::report::Report;

/// Configuration for JSON output
#[derive(Debug, Clone, Default)]
pub struct JsonConfig {
    /// Pretty print JSON output
    pub pretty: bool,
}

/// JSON formatter for analysis reports
pub struct JsonFormatter {
    config: JsonConfig,
}

impl JsonFormatter {
    /// Create a new JSON formatter with the given configuration
    pub fn new(config: JsonConfig) -> Self {
        Self { config }
    }

    /// Render reports as a JSON array of flat objects keyed by column name
    pub fn format(&self, reports: &[Report]) -> Result<String> {
        let json = if self.config.pretty {
            serde_json::to_string_pretty(reports)?
        } else {
            serde_json::to_string(reports)?
        };

        Ok(json)
    }
}

/// Convert reports to a JSON array string
pub fn convert_to_json(reports: &[Report], pretty: bool) -> Result<String> {
    JsonFormatter::new(JsonConfig { pretty }).format(reports)
}
