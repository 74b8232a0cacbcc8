use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_delay_range"))]
pub struct ScraperConfig {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub name: String,

    /// Ordered list of URLs visited on every pass.
    #[serde(default)]
    #[validate(length(min = 1))]
    pub targets: Vec<String>,

    /// Port the Prometheus exposition endpoint binds to.
    #[serde(default = "default_metrics_port")]
    pub metrics_port: u16,

    /// Seconds to wait between full passes over the target list.
    #[serde(default = "default_pass_interval")]
    pub pass_interval_secs: u64,

    /// Lower bound of the injected post-parse delay.
    #[serde(default = "default_min_delay")]
    pub min_delay_ms: u64,

    /// Upper bound of the injected post-parse delay.
    #[serde(default = "default_max_delay")]
    pub max_delay_ms: u64,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_metrics_port() -> u16 {
    8000
}

fn default_pass_interval() -> u64 {
    60
}

fn default_min_delay() -> u64 {
    500
}

fn default_max_delay() -> u64 {
    2000
}

fn default_request_timeout() -> u64 {
    10
}

fn validate_delay_range(config: &ScraperConfig) -> std::result::Result<(), ValidationError> {
    if config.min_delay_ms > config.max_delay_ms {
        return Err(ValidationError::new("delay_range"));
    }
    Ok(())
}
