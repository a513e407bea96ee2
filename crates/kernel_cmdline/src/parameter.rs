//! A single kernel command line parameter.

use std::fmt;
use std::str::FromStr;

use crate::tokenize;
use crate::{Error, Result};

/// A single kernel command line parameter.
///
/// Whether a parameter is a key-only switch or carries a value is fixed
/// when it is constructed. Turning one into the other means building a
/// new `Parameter`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Parameter {
    /// A key-only switch, such as `quiet`
    Flag {
        /// The switch name
        name: String,
    },
    /// A key-value pair, such as `console=ttyS0`. The value may be empty.
    Valued {
        /// The key
        name: String,
        /// The value, without any quoting
        value: String,
    },
}

impl Parameter {
    /// Create a new parameter; a `None` value makes a key-only switch.
    ///
    /// Returns an error if `name` is empty.
    pub fn new(name: impl Into<String>, value: Option<impl Into<String>>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::Validation("parameter name must not be empty".into()));
        }
        let r = match value {
            None => Self::Flag { name },
            Some(value) => Self::Valued {
                name,
                value: value.into(),
            },
        };
        Ok(r)
    }

    /// Parse a single, already unquoted, token.
    ///
    /// Only the first `=` separates the key from the value; any further
    /// `=` characters are part of the value.
    pub fn parse(token: &str) -> Result<Self> {
        if token.is_empty() {
            return Err(Error::parse(token, "empty parameter"));
        }
        let (name, value) = match token.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (token, None),
        };
        if name.is_empty() {
            return Err(Error::parse(token, "empty parameter name"));
        }
        Self::new(name, value)
    }

    /// Returns the key part of the parameter
    pub fn name(&self) -> &str {
        match self {
            Self::Flag { name } | Self::Valued { name, .. } => name,
        }
    }

    /// Returns the optional value part of the parameter
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Flag { .. } => None,
            Self::Valued { value, .. } => Some(value),
        }
    }

    /// Returns `true` if this is a key-only switch.
    pub fn is_flag(&self) -> bool {
        matches!(self, Self::Flag { .. })
    }

    /// Replace the value of a key-value parameter.
    ///
    /// Switches never gain a value this way; doing so is an
    /// [`Error::BoolArgument`].
    pub fn set_value(&mut self, new: impl Into<String>) -> Result<()> {
        match self {
            Self::Flag { name } => Err(Error::BoolArgument { name: name.clone() }),
            Self::Valued { value, .. } => {
                *value = new.into();
                Ok(())
            }
        }
    }

    /// Returns `true` if this parameter has the given name and value.
    pub(crate) fn matches(&self, name: &str, value: Option<&str>) -> bool {
        self.name() == name && self.value() == value
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&tokenize::quote(self.name()))?;
        if let Some(value) = self.value() {
            write!(f, "={}", tokenize::quote_continuation(value))?;
        }
        Ok(())
    }
}

impl FromStr for Parameter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // convenience method for tests
    fn param(s: &str) -> Parameter {
        Parameter::parse(s).unwrap()
    }

    #[test]
    fn test_parameter_simple() {
        let switch = param("foo");
        assert_eq!(switch.name(), "foo");
        assert_eq!(switch.value(), None);
        assert!(switch.is_flag());

        let kv = param("bar=baz");
        assert_eq!(kv.name(), "bar");
        assert_eq!(kv.value(), Some("baz"));
        assert!(!kv.is_flag());

        let empty = param("bar=");
        assert_eq!(empty.value(), Some(""));
    }

    #[test]
    fn test_parameter_value_with_equals() {
        let p = param("root=UUID=1234-abcd");
        assert_eq!(p.name(), "root");
        assert_eq!(p.value(), Some("UUID=1234-abcd"));

        let p = param("opts=a=1,b=2");
        assert_eq!(p.value(), Some("a=1,b=2"));
    }

    #[test]
    fn test_parameter_parse_errors() {
        for bad in ["", "=", "=value"] {
            let e = Parameter::parse(bad).unwrap_err();
            assert_eq!(e.kind(), crate::ErrorKind::Parse, "{bad:?}");
        }
        let e = Parameter::new("", None::<String>).unwrap_err();
        assert_eq!(e.kind(), crate::ErrorKind::Validation);
    }

    #[test]
    fn test_parameter_display() {
        assert_eq!(param("quiet").to_string(), "quiet");
        assert_eq!(param("console=ttyS0").to_string(), "console=ttyS0");
        assert_eq!(param("foo=").to_string(), "foo=");

        let p = Parameter::new("name", Some("hello world")).unwrap();
        assert_eq!(p.to_string(), r#"name="hello world""#);

        let p = Parameter::new("dyndbg", Some(r#"file "x.c" +p"#)).unwrap();
        assert_eq!(p.to_string(), r#"dyndbg="file \"x.c\" +p""#);

        // '$' and '`' are passed through as-is
        let p = Parameter::new("init", Some("/bin/sh -c $HOME")).unwrap();
        assert_eq!(p.to_string(), r#"init="/bin/sh -c $HOME""#);
        let p = Parameter::new("cmd", Some("`id` x")).unwrap();
        assert_eq!(p.to_string(), "cmd=\"`id` x\"");

        // as is a leading '#'
        assert_eq!(param("#x").to_string(), "#x");
    }

    #[test]
    fn test_parameter_display_roundtrip() {
        for p in [
            Parameter::new("quiet", None::<&str>).unwrap(),
            Parameter::new("name", Some("hello world")).unwrap(),
            Parameter::new("root", Some("LABEL=my root")).unwrap(),
            Parameter::new("weird name", Some("x")).unwrap(),
            Parameter::new("q", Some(r"it's a \ test")).unwrap(),
            Parameter::new("e", Some("")).unwrap(),
        ] {
            let rendered = p.to_string();
            let words = tokenize::split(&rendered).unwrap();
            assert_eq!(words.len(), 1, "{rendered}");
            let reparsed = param(&words[0]);
            assert_eq!(reparsed, p);
            // and rendering is stable
            assert_eq!(reparsed.to_string(), rendered);
        }
    }

    #[test]
    fn test_parameter_set_value() {
        let mut p = param("console=tty0");
        p.set_value("ttyS0").unwrap();
        assert_eq!(p, param("console=ttyS0"));

        let mut p = param("quiet");
        let e = p.set_value("1").unwrap_err();
        assert!(matches!(e, Error::BoolArgument { ref name } if name == "quiet"));
        // left untouched
        assert_eq!(p, param("quiet"));
    }

    #[test]
    fn test_parameter_equality() {
        // substrings are not equal
        assert_ne!(param("foo"), param("foobar"));

        // names are compared exactly
        assert_ne!(param("a-b"), param("a_b"));

        // mixed variants are never equal, not even with an empty value
        assert_ne!(param("same_key"), param("same_key="));
        assert_ne!(param("same_key"), param("same_key=but_with_a_value"));
    }

    #[test]
    fn test_parameter_from_str() {
        let p: Parameter = "rd.break".parse().unwrap();
        assert_eq!(p.name(), "rd.break");
        assert!("=oops".parse::<Parameter>().is_err());
    }
}
