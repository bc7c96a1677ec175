use crate::{error::MalformedSignature, parse};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Argument {
    typ: String,
    name: String,
}

impl Argument {
    pub fn new(typ: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            typ: typ.into(),
            name: name.into(),
        }
    }

    pub fn typ(&self) -> &str {
        &self.typ
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.typ, self.name)
    }
}

/// A parsed method signature.
///
/// Only the parser builds these, after every part has been validated, so
/// `return_type` and `name` are never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodSignature {
    access_modifier: Option<String>,
    return_type: String,
    name: String,
    arguments: Vec<Argument>,
}

impl MethodSignature {
    pub(crate) fn new(
        access_modifier: Option<String>,
        return_type: String,
        name: String,
        arguments: Vec<Argument>,
    ) -> Self {
        Self {
            access_modifier,
            return_type,
            name,
            arguments,
        }
    }

    pub fn access_modifier(&self) -> Option<&str> {
        self.access_modifier.as_deref()
    }

    pub fn return_type(&self) -> &str {
        &self.return_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }
}

impl fmt::Display for MethodSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(access_modifier) = &self.access_modifier {
            write!(f, "{access_modifier} ")?;
        }
        write!(f, "{} {}(", self.return_type, self.name)?;
        for (i, argument) in self.arguments.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{argument}")?;
        }
        f.write_str(")")
    }
}

impl FromStr for MethodSignature {
    type Err = MalformedSignature;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse::signature(s)
    }
}
