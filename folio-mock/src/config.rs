//! Server configuration from the environment

/// Mock folio server configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    pub log_level: String,
    /// JSON console output
    pub log_json: bool,
    /// Daily rotating file logs go here when set
    pub log_dir: Option<String>,
    /// Company tax profiles the server knows about
    pub company_setting_ids: Vec<i64>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            company_setting_ids: std::env::var("COMPANY_SETTING_IDS")
                .map(|raw| parse_ids(&raw))
                .unwrap_or_else(|_| vec![1]),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.http_port)
    }
}

/// Comma separated ids; anything unparsable is skipped
fn parse_ids(raw: &str) -> Vec<i64> {
    raw.split(',')
        .filter_map(|part| part.trim().parse().ok())
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_port: 8080,
            log_level: "info".into(),
            log_json: false,
            log_dir: None,
            company_setting_ids: vec![1],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn company_ids_are_comma_separated() {
        assert_eq!(parse_ids("1, 2,x,,30"), vec![1, 2, 30]);
        assert!(parse_ids("").is_empty());
    }
}
