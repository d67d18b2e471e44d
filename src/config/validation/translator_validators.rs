//! Validators for the translator configuration sections

use super::endpoint::validate_endpoint;
use super::trait_def::Validate;
use crate::config::models::*;

impl Validate for TranslatorConfig {
    fn validate(&self) -> Result<(), String> {
        self.cache
            .validate()
            .map_err(|e| format!("cache: {}", e))?;
        self.retry
            .validate()
            .map_err(|e| format!("retry: {}", e))?;
        self.provider
            .validate()
            .map_err(|e| format!("provider: {}", e))?;
        self.validation
            .validate()
            .map_err(|e| format!("validation: {}", e))?;
        self.orchestrator
            .validate()
            .map_err(|e| format!("orchestrator: {}", e))?;
        Ok(())
    }
}

impl Validate for CacheSettings {
    fn validate(&self) -> Result<(), String> {
        if self.max_entries == 0 {
            return Err("max_entries must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Validate for RetrySettings {
    fn validate(&self) -> Result<(), String> {
        if self.max_attempts == 0 {
            return Err("max_attempts must be at least 1".to_string());
        }

        if self.backoff_multiplier < 1.0 {
            return Err("backoff_multiplier must be at least 1.0".to_string());
        }

        if self.max_delay_ms < self.base_delay_ms {
            return Err("max_delay_ms must not be lower than base_delay_ms".to_string());
        }

        Ok(())
    }
}

impl Validate for ProviderSettings {
    fn validate(&self) -> Result<(), String> {
        if self.request_timeout_ms == 0 {
            return Err("request_timeout_ms must be greater than 0".to_string());
        }

        if !(0.0..=1.0).contains(&self.offline_confidence_ceiling) {
            return Err("offline_confidence_ceiling must be between 0 and 1".to_string());
        }

        if self.simulated_max_latency_ms < self.simulated_min_latency_ms {
            return Err(
                "simulated_max_latency_ms must not be lower than simulated_min_latency_ms"
                    .to_string(),
            );
        }

        match (&self.mode, &self.endpoint) {
            (RemoteMode::Http, None) => {
                return Err("endpoint is required in http mode".to_string());
            }
            (_, Some(endpoint)) => {
                validate_endpoint(endpoint, "endpoint")?;
            }
            _ => {}
        }

        if let Some(base) = &self.video_base_url {
            validate_endpoint(base, "video_base_url")?;
        }

        Ok(())
    }
}

impl Validate for ValidationSettings {
    fn validate(&self) -> Result<(), String> {
        if self.max_text_length == 0 {
            return Err("max_text_length must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Validate for OrchestratorSettings {
    fn validate(&self) -> Result<(), String> {
        if self.error_log_capacity == 0 {
            return Err("error_log_capacity must be greater than 0".to_string());
        }

        if self.event_buffer == 0 {
            return Err("event_buffer must be greater than 0".to_string());
        }

        Ok(())
    }
}
