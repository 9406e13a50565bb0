//! Parsing of `Name:param,param` stage identifiers.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A stage named by identifier, with optional string parameters.
///
/// The grammar is `Identifier` or `Identifier:param1,param2,...`. Only the
/// first `:` separates the identifier from its parameters; parameters are not
/// trimmed, typed or unescaped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StageIdentifier {
    name: String,
    parameters: Vec<String>,
}

impl StageIdentifier {
    /// Creates an identifier with explicit parameters.
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, parameters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            parameters: parameters.into_iter().map(Into::into).collect(),
        }
    }

    /// Parses an identifier string.
    #[must_use]
    pub fn parse(spec: &str) -> Self {
        match spec.split_once(':') {
            Some((name, parameters)) => Self {
                name: name.to_string(),
                parameters: parameters.split(',').map(String::from).collect(),
            },
            None => Self {
                name: spec.to_string(),
                parameters: Vec::new(),
            },
        }
    }

    /// Returns the identifier handed to the resolver.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the parameters appended after `(payload, next)`.
    #[must_use]
    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }
}

impl FromStr for StageIdentifier {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for StageIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.parameters.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}:{}", self.name, self.parameters.join(","))
        }
    }
}
