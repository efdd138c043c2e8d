//! Configuration loading and management

use crate::core::error::ConfigError;
use serde::{Deserialize, Serialize};

/// SMTP connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmtpConfig {
    /// SMTP relay host
    pub host: String,

    /// SMTP port
    #[serde(default = "default_smtp_port")]
    pub port: u16,

    /// Relay username
    pub username: String,

    /// Relay password
    pub password: String,
}

/// Sender identity settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SenderConfig {
    /// Display name (e.g. "Support")
    pub from_name: String,

    /// Sender address (e.g. "support@example.com")
    pub from_mail: String,
}

/// Complete mailer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailerConfig {
    pub smtp: SmtpConfig,

    pub sender: SenderConfig,

    /// Directory holding the `.html` mail templates
    #[serde(default = "default_template_dir")]
    pub template_dir: String,
}

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub mailing: MailerConfig,
}

fn default_smtp_port() -> u16 {
    587
}

fn default_template_dir() -> String {
    "templates/mail".to_string()
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|err| {
            if err.kind() == std::io::ErrorKind::NotFound {
                ConfigError::FileNotFound {
                    path: path.to_string(),
                }
            } else {
                ConfigError::Io {
                    message: err.to_string(),
                }
            }
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Create a default configuration for testing
    pub fn default_config() -> Self {
        Self {
            mailing: MailerConfig {
                smtp: SmtpConfig {
                    host: "smtp.example.com".to_string(),
                    port: default_smtp_port(),
                    username: "mailer".to_string(),
                    password: "secret".to_string(),
                },
                sender: SenderConfig {
                    from_name: "Support".to_string(),
                    from_mail: "support@example.com".to_string(),
                },
                template_dir: default_template_dir(),
            },
        }
    }
}
