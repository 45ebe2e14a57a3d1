use std::fmt;

use pagewire_core::ConfigError;

/// Faults that stop a component from being wired to the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    /// `initialize` was called more than once.
    AlreadyInitialized,
    /// No global `window` (not running in a browser main thread).
    NoWindow,
    /// The window has no document.
    NoDocument,
    /// Host options were rejected.
    Config(ConfigError),
    /// The log filter directive could not be parsed.
    Logging(String),
    /// An element the page requires is absent.
    MissingElement { id: String },
    /// An element exists but is not the kind the component needs.
    WrongElementType { id: String, expected: &'static str },
    /// An accordion trigger has no `aria-controls` reference.
    MissingPanelReference { trigger: usize },
    /// An accordion trigger references a panel that does not exist.
    MissingPanel { trigger: usize, panel: String },
    /// The accordion trigger selector was rejected by the document.
    Selector { selector: String, detail: String },
    /// `addEventListener` threw.
    Listener { event: &'static str, detail: String },
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyInitialized => f.write_str("page behaviours are already initialized"),
            Self::NoWindow => f.write_str("no global window available"),
            Self::NoDocument => f.write_str("window has no document"),
            Self::Config(err) => write!(f, "{err}"),
            Self::Logging(msg) => write!(f, "invalid log level: {msg}"),
            Self::MissingElement { id } => write!(f, "missing element #{id}"),
            Self::WrongElementType { id, expected } => {
                write!(f, "element #{id} is not an {expected}")
            }
            Self::MissingPanelReference { trigger } => {
                write!(f, "accordion trigger {trigger} has no aria-controls")
            }
            Self::MissingPanel { trigger, panel } => {
                write!(f, "accordion trigger {trigger} controls missing panel #{panel}")
            }
            Self::Selector { selector, detail } => {
                write!(f, "invalid trigger selector `{selector}`: {detail}")
            }
            Self::Listener { event, detail } => {
                write!(f, "failed to register `{event}` listener: {detail}")
            }
        }
    }
}

impl std::error::Error for SetupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ConfigError> for SetupError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::error::Error;

    #[test]
    fn display_names_the_element() {
        let err = SetupError::MissingElement { id: "count".into() };
        assert_eq!(err.to_string(), "missing element #count");

        let err = SetupError::MissingPanel {
            trigger: 1,
            panel: "faq2".into(),
        };
        assert_eq!(
            err.to_string(),
            "accordion trigger 1 controls missing panel #faq2"
        );
    }

    #[test]
    fn config_error_is_source() {
        let err = SetupError::from(ConfigError::EmptyValue("logLevel"));
        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "page option `logLevel` must not be empty");
    }
}
