use crate::error::Result;
use serde::{Deserialize, Serialize};

/// How [`preprocess_with`](crate::preprocess_with) treats a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreprocessOptions {
    /// Keep the casing of unit tokens such as `MB` or `kB`
    pub case_sensitive: bool,
    /// Map full-width digits and punctuation to ASCII first
    pub recode: bool,
}

impl Default for PreprocessOptions {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            recode: true,
        }
    }
}

impl PreprocessOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub fn recode(mut self, recode: bool) -> Self {
        self.recode = recode;
        self
    }

    /// Parse options from JSON; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
