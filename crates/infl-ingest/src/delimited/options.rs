/// Tokens read as a missing measurement unless configured otherwise.
pub const DEFAULT_MISSING_TOKENS: &[&str] = &["", "nan", "NaN", "NA"];

/// Options for reading a measurement file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    /// Field delimiter byte.
    pub delimiter: u8,
    /// Cell tokens (after trimming) that load as missing.
    pub missing_tokens: Vec<String>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            missing_tokens: DEFAULT_MISSING_TOKENS
                .iter()
                .map(|token| (*token).to_string())
                .collect(),
        }
    }
}

impl LoadOptions {
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Replace the missing-value tokens. An empty list makes every empty
    /// cell a parse error.
    #[must_use]
    pub fn with_missing_tokens<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.missing_tokens = tokens.into_iter().map(Into::into).collect();
        self
    }

    pub(crate) fn is_missing(&self, token: &str) -> bool {
        self.missing_tokens.iter().any(|missing| missing == token)
    }
}
