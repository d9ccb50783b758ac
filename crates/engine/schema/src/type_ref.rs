use std::{fmt, str::FromStr};

use wrapping::{ListWrapping, Wrapping};

use crate::RegistryError;

/// A named type with its list and non-null wrappers, `[Character!]!` for example.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TypeRef {
    pub name: String,
    pub wrapping: Wrapping,
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            wrapping: Wrapping::nullable(),
        }
    }

    #[must_use]
    pub fn non_null(mut self) -> Self {
        self.wrapping = self.wrapping.non_null();
        self
    }

    #[must_use]
    pub fn list(mut self) -> Self {
        self.wrapping = self.wrapping.wrapped_by_nullable_list();
        self
    }

    pub fn is_required(&self) -> bool {
        self.wrapping.is_required()
    }

    pub fn is_list(&self) -> bool {
        self.wrapping.is_list()
    }

    /// Type of the items if this is a list.
    pub fn list_item(&self) -> Option<TypeRef> {
        self.wrapping.without_list().map(|wrapping| TypeRef {
            name: self.name.clone(),
            wrapping,
        })
    }

    #[must_use]
    pub fn without_non_null(&self) -> TypeRef {
        TypeRef {
            name: self.name.clone(),
            wrapping: self.wrapping.without_non_null(),
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.wrapping.type_display(&self.name))
    }
}

impl fmt::Debug for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeRef").field(&self.to_string()).finish()
    }
}

impl FromStr for TypeRef {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s.trim()).ok_or_else(|| RegistryError::InvalidTypeNotation(s.to_string()))
    }
}

fn parse(s: &str) -> Option<TypeRef> {
    let (s, required) = match s.strip_suffix('!') {
        Some(rest) => (rest.trim_end(), true),
        None => (s, false),
    };

    if let Some(inner) = s.strip_prefix('[') {
        let inner = parse(inner.strip_suffix(']')?.trim())?;
        let list_wrapping = if required {
            ListWrapping::RequiredList
        } else {
            ListWrapping::NullableList
        };
        return Some(TypeRef {
            name: inner.name,
            wrapping: inner.wrapping.wrapped_by(list_wrapping),
        });
    }

    let mut chars = s.chars();
    let first = chars.next()?;
    if !(first.is_ascii_alphabetic() || first == '_') || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }

    Some(TypeRef {
        name: s.to_string(),
        wrapping: Wrapping::new(required),
    })
}
