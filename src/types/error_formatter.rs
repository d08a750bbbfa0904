//! Human-readable reports for accumulated validation errors.

use crate::types::error::ValidationError;

/// Trait for customizing how an error list is rendered.
pub trait ErrorFormatter {
    fn format_error(&self, error: &ValidationError) -> String {
        error.to_string()
    }

    fn separator(&self) -> &str {
        "\n"
    }

    fn format_errors<'a>(&self, errors: impl Iterator<Item = &'a ValidationError>) -> String {
        errors.map(|error| self.format_error(error)).collect::<Vec<_>>().join(self.separator())
    }
}

/// Configuration-based report formatter.
///
/// # Examples
///
/// ```
/// use schema_rail::types::error_formatter::{ErrorFormatter, ReportConfig};
/// use schema_rail::ValidationError;
///
/// let errors = [
///     ValidationError::required().with_prefix("name".into()),
///     ValidationError::too_small(18, 12).with_prefix("age".into()),
/// ];
///
/// let report = ReportConfig::compact().format_errors(errors.iter());
/// assert_eq!(report, "name: is required (required); age: must be at least 18 (got 12) (range_violation)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub separator: String,
    pub item_prefix: Option<String>,
    pub last_prefix: Option<String>,
    /// Label printed in place of an empty path.
    pub root_label: Option<String>,
    pub show_code: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            separator: "\n".into(),
            item_prefix: None,
            last_prefix: None,
            root_label: None,
            show_code: true,
        }
    }
}

impl ReportConfig {
    #[inline]
    pub fn pretty() -> Self {
        Self {
            item_prefix: Some("├─ ".into()),
            last_prefix: Some("└─ ".into()),
            root_label: Some("(root)".into()),
            ..Default::default()
        }
    }

    #[inline]
    pub fn compact() -> Self {
        Self { separator: "; ".into(), ..Default::default() }
    }

    #[inline]
    pub fn no_code() -> Self {
        Self { show_code: false, ..Default::default() }
    }

    fn render(&self, error: &ValidationError, prefix: Option<&str>) -> String {
        let mut line = String::new();
        if let Some(prefix) = prefix {
            line.push_str(prefix);
        }
        if !error.path().is_root() {
            line.push_str(&error.path().to_string());
            line.push_str(": ");
        } else if let Some(label) = &self.root_label {
            line.push_str(label);
            line.push_str(": ");
        }
        line.push_str(error.message());
        if self.show_code {
            line.push_str(" (");
            line.push_str(error.code().as_str());
            line.push(')');
        }
        line
    }
}

impl ErrorFormatter for ReportConfig {
    fn format_error(&self, error: &ValidationError) -> String {
        self.render(error, self.item_prefix.as_deref())
    }

    fn separator(&self) -> &str {
        &self.separator
    }

    fn format_errors<'a>(&self, errors: impl Iterator<Item = &'a ValidationError>) -> String {
        let items: Vec<_> = errors.collect();
        let count = items.len();
        let mut lines = Vec::with_capacity(count);
        for (i, error) in items.into_iter().enumerate() {
            let prefix = if i + 1 == count {
                self.last_prefix.as_deref().or(self.item_prefix.as_deref())
            } else {
                self.item_prefix.as_deref()
            };
            lines.push(self.render(error, prefix));
        }
        lines.join(&self.separator)
    }
}
