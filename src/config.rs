use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Medirec";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable naming an external rule table (JSON keyed by test).
pub const RULES_FILE_ENV: &str = "MEDIREC_RULES_FILE";

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> &'static str {
    "medirec=info"
}

/// Runtime settings for the analysis pipeline.
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// External rule table; `None` means the built-in defaults apply.
    pub rules_file: Option<PathBuf>,
    /// Report file extensions accepted by the plain-text reader.
    pub allowed_file_types: Vec<String>,
    /// Diagnostic tests the deployment knows about; rules naming other
    /// tests still work but are flagged at load time.
    pub diagnostic_tests: Vec<String>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            rules_file: None,
            allowed_file_types: vec![".txt".into(), ".text".into()],
            diagnostic_tests: vec![
                "MRI".into(),
                "CT scan".into(),
                "X-ray".into(),
                "ECG".into(),
                "blood tests".into(),
                "ultrasound".into(),
                "EMG/NCS".into(),
                "physical therapy".into(),
                "bone density test".into(),
                "endoscopy".into(),
            ],
        }
    }
}

impl AppSettings {
    /// Build settings from the process environment.
    pub fn from_env() -> Self {
        let rules_file = std::env::var(RULES_FILE_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);
        Self {
            rules_file,
            ..Self::default()
        }
    }

    pub fn knows_test(&self, test: &str) -> bool {
        self.diagnostic_tests
            .iter()
            .any(|known| known.eq_ignore_ascii_case(test))
    }
}
