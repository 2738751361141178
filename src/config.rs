//! User configuration — animation tunables and email-provider credentials.
//!
//! Tunables live in a simple key-value text file at
//! `$XDG_CONFIG_HOME/folio/config.toml` (default `~/.config/folio/config.toml`).
//! Provider credentials come from the environment and override anything in
//! the file:
//!
//! - `FOLIO_EMAILJS_SERVICE_ID`
//! - `FOLIO_EMAILJS_TEMPLATE_ID`
//! - `FOLIO_EMAILJS_PUBLIC_KEY`

use std::path::PathBuf;

/// Credentials for the EmailJS REST endpoint.  All three are required for a
/// send to be attempted; a missing set surfaces as a transport failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Email provider credentials, when fully configured.
    pub email: Option<EmailConfig>,
    /// Smooth-scroll easing per tick.  Good range: 0.2–0.5 at 30 fps.
    pub scroll_speed: f64,
    /// Cursor-follower damping per tick.
    pub cursor_damping: f64,
    /// Skip easing entirely — scroll and cursor snap to their targets.
    pub reduce_motion: bool,
    /// Rows scrolled per wheel notch / arrow key.
    pub scroll_step: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            email: None,
            scroll_speed: 0.35,
            cursor_damping: 0.3,
            reduce_motion: false,
            scroll_step: 3.0,
        }
    }
}

impl AppConfig {
    /// Load config from disk and environment, falling back to defaults.
    pub fn load() -> Self {
        let mut config = Self::default();
        let path = config_path();
        if path.exists() {
            if let Ok(contents) = std::fs::read_to_string(&path) {
                config.apply_file(&contents);
            }
        }
        config.apply_env();
        config
    }

    /// Merge settings from the config file contents.
    fn apply_file(&mut self, s: &str) {
        let mut service_id = None;
        let mut template_id = None;
        let mut public_key = None;

        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim().trim_matches('"');

            match key {
                "scroll_speed" => {
                    if let Ok(v) = value.parse::<f64>() {
                        // Keep this bounded so the animation always settles.
                        self.scroll_speed = v.clamp(0.05, 0.95);
                    }
                }
                "cursor_damping" => {
                    if let Ok(v) = value.parse::<f64>() {
                        self.cursor_damping = v.clamp(0.05, 0.95);
                    }
                }
                "reduce_motion" => self.reduce_motion = value == "true",
                "scroll_step" => {
                    if let Ok(v) = value.parse::<f64>() {
                        self.scroll_step = v.clamp(1.0, 20.0);
                    }
                }
                "emailjs_service_id" => service_id = Some(value.to_string()),
                "emailjs_template_id" => template_id = Some(value.to_string()),
                "emailjs_public_key" => public_key = Some(value.to_string()),
                _ => {}
            }
        }

        if let (Some(service_id), Some(template_id), Some(public_key)) =
            (service_id, template_id, public_key)
        {
            self.email = Some(EmailConfig {
                service_id,
                template_id,
                public_key,
            });
        }
    }

    /// Environment credentials win over the file.
    fn apply_env(&mut self) {
        let service_id = std::env::var("FOLIO_EMAILJS_SERVICE_ID").ok();
        let template_id = std::env::var("FOLIO_EMAILJS_TEMPLATE_ID").ok();
        let public_key = std::env::var("FOLIO_EMAILJS_PUBLIC_KEY").ok();

        if let (Some(service_id), Some(template_id), Some(public_key)) =
            (service_id, template_id, public_key)
        {
            self.email = Some(EmailConfig {
                service_id,
                template_id,
                public_key,
            });
        }
    }
}

/// Return the config file path (`$XDG_CONFIG_HOME/folio/config.toml`).
fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join("folio").join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_values_are_parsed_and_clamped() {
        let mut config = AppConfig::default();
        config.apply_file(
            "# folio configuration\n\
             scroll_speed = 0.5\n\
             cursor_damping = 2.0\n\
             reduce_motion = true\n\
             scroll_step = 5\n",
        );
        assert_eq!(config.scroll_speed, 0.5);
        assert_eq!(config.cursor_damping, 0.95); // clamped
        assert!(config.reduce_motion);
        assert_eq!(config.scroll_step, 5.0);
        assert!(config.email.is_none());
    }

    #[test]
    fn email_config_requires_all_three_keys() {
        let mut config = AppConfig::default();
        config.apply_file("emailjs_service_id = svc\nemailjs_template_id = tpl\n");
        assert!(config.email.is_none());

        config.apply_file(
            "emailjs_service_id = \"svc\"\n\
             emailjs_template_id = \"tpl\"\n\
             emailjs_public_key = \"key\"\n",
        );
        assert_eq!(
            config.email,
            Some(EmailConfig {
                service_id: "svc".into(),
                template_id: "tpl".into(),
                public_key: "key".into(),
            })
        );
    }

    #[test]
    fn unknown_keys_and_comments_are_ignored() {
        let mut config = AppConfig::default();
        config.apply_file("# comment\n[section]\nnot_a_key = 1\nbroken line\n");
        assert_eq!(config, AppConfig::default());
    }
}
