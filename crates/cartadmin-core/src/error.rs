//! Error types for cartadmin-core
//!
//! Hard failures use [`CoreError`]; soft problems found while loading a menu
//! are collected in a [`MenuReport`] so the sidebar can still render.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for cartadmin operations
#[derive(Error, Debug)]
pub enum CoreError {
    // ===================
    // IO Errors
    // ===================
    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    // ===================
    // Parse Errors
    // ===================
    #[error("Failed to parse JSON in {path}: {message}")]
    JsonParse {
        path: PathBuf,
        message: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse YAML in {path}: {message}")]
    YamlParse {
        path: PathBuf,
        message: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Unsupported menu format for {path} (expected .json, .yaml or .yml)")]
    UnsupportedFormat { path: PathBuf },

    // ===================
    // Model Errors
    // ===================
    #[error("Menu entry '{name}' at {path} is nested deeper than {max_depth} levels")]
    MenuTooDeep {
        name: String,
        path: String,
        max_depth: usize,
    },

    // ===================
    // Config Errors
    // ===================
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

/// Severity level for problems found in a menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Menu renders, but some entry behaves oddly
    Warning,
    /// Menu cannot be used
    Fatal,
}

impl ErrorSeverity {
    pub fn label(&self) -> &'static str {
        match self {
            ErrorSeverity::Warning => "warning",
            ErrorSeverity::Fatal => "fatal",
        }
    }
}

/// Individual problem entry in a menu report
#[derive(Debug, Clone)]
pub struct MenuIssue {
    /// Where the problem was found (a node path, a file, ...)
    pub source: String,
    pub message: String,
    pub severity: ErrorSeverity,
    /// Actionable suggestion for the menu author (optional)
    pub suggestion: Option<String>,
}

impl MenuIssue {
    pub fn warning(source: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            message: message.into(),
            severity: ErrorSeverity::Warning,
            suggestion: None,
        }
    }

    pub fn fatal(source: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            message: message.into(),
            severity: ErrorSeverity::Fatal,
            suggestion: None,
        }
    }

    /// Add an actionable suggestion to this issue
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Create a user-friendly issue from a CoreError with context-aware suggestions
    pub fn from_core_error(source: impl Into<String>, error: &CoreError) -> Self {
        let source = source.into();
        let (message, suggestion) = match error {
            CoreError::FileNotFound { path } => (
                format!("Menu file not found: {}", path.display()),
                Some(format!("Check if file exists: ls {}", path.display())),
            ),
            CoreError::FileRead { path, .. } => (
                format!("Cannot read menu file: {}", path.display()),
                Some(format!("Check permissions: chmod +r {}", path.display())),
            ),
            CoreError::JsonParse { path, message, .. } => (
                format!("Invalid JSON in {}: {}", path.display(), message),
                Some("Validate JSON syntax with: jq . <file>".to_string()),
            ),
            CoreError::YamlParse { path, message, .. } => (
                format!("Invalid YAML in {}: {}", path.display(), message),
                Some("Check indentation of nested 'children' lists".to_string()),
            ),
            CoreError::MenuTooDeep { max_depth, .. } => (
                error.to_string(),
                Some(format!(
                    "Flatten the menu to at most {} levels",
                    max_depth
                )),
            ),
            _ => (error.to_string(), None),
        };

        Self {
            source,
            message,
            severity: ErrorSeverity::Fatal,
            suggestion,
        }
    }
}

/// Report of problems encountered while loading and validating a menu
///
/// Enables graceful degradation: a malformed entry is rendered inert
/// instead of rejecting the whole sidebar.
#[derive(Debug, Default, Clone)]
pub struct MenuReport {
    pub issues: Vec<MenuIssue>,
    pub nodes_scanned: usize,
    pub max_depth_seen: usize,
}

impl MenuReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_issue(&mut self, issue: MenuIssue) {
        self.issues.push(issue);
    }

    pub fn add_warning(&mut self, source: impl Into<String>, message: impl Into<String>) {
        self.issues.push(MenuIssue::warning(source, message));
    }

    pub fn add_fatal(&mut self, source: impl Into<String>, message: impl Into<String>) {
        self.issues.push(MenuIssue::fatal(source, message));
    }

    /// Returns true if there are any fatal issues
    pub fn has_fatal_errors(&self) -> bool {
        self.issues
            .iter()
            .any(|e| e.severity == ErrorSeverity::Fatal)
    }

    /// Returns true if there are any issues (including warnings)
    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    /// Returns only warnings
    pub fn warnings(&self) -> impl Iterator<Item = &MenuIssue> {
        self.issues
            .iter()
            .filter(|e| e.severity == ErrorSeverity::Warning)
    }

    /// Returns count by severity: (warnings, fatal)
    pub fn issue_count(&self) -> (usize, usize) {
        let count = |severity| self.issues.iter().filter(|e| e.severity == severity).count();
        (count(ErrorSeverity::Warning), count(ErrorSeverity::Fatal))
    }

    /// Validation warnings only; fatal load failures are not counted
    pub fn warning_count(&self) -> usize {
        self.issue_count().0
    }

    /// Merge another report into this one
    pub fn merge(&mut self, other: MenuReport) {
        self.issues.extend(other.issues);
        self.nodes_scanned += other.nodes_scanned;
        self.max_depth_seen = self.max_depth_seen.max(other.max_depth_seen);
    }
}
