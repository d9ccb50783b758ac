//! The operation model the engine executes.
//!
//! Operations arrive already parsed: this crate only describes the selection tree, the
//! fragments it references and the request variables.

mod selection;
mod variables;

use std::{collections::HashMap, fmt};

pub use async_graphql_value::{ConstValue, Name, Value};
pub use selection::*;
pub use variables::Variables;

/// The type of an operation; `query`, `mutation` or `subscription`.
#[derive(Debug, Hash, PartialEq, Eq, Copy, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationType {
    Query,
    Mutation,
    Subscription,
}

impl OperationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
            Self::Subscription => "subscription",
        }
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableDefinition {
    pub name: Name,
    pub default_value: Option<ConstValue>,
}

impl VariableDefinition {
    pub fn new(name: &str) -> Self {
        Self {
            name: Name::new(name),
            default_value: None,
        }
    }

    #[must_use]
    pub fn with_default_value(mut self, value: ConstValue) -> Self {
        self.default_value = Some(value);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    pub ty: OperationType,
    pub name: Option<String>,
    pub variable_definitions: Vec<VariableDefinition>,
    pub selection_set: SelectionSet,
    pub fragments: HashMap<Name, FragmentDefinition>,
}

impl Operation {
    pub fn new(ty: OperationType, selections: impl IntoIterator<Item = Selection>) -> Self {
        Self {
            ty,
            name: None,
            variable_definitions: Vec::new(),
            selection_set: selections.into_iter().collect(),
            fragments: HashMap::new(),
        }
    }

    pub fn query(selections: impl IntoIterator<Item = Selection>) -> Self {
        Self::new(OperationType::Query, selections)
    }

    pub fn mutation(selections: impl IntoIterator<Item = Selection>) -> Self {
        Self::new(OperationType::Mutation, selections)
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_variable(mut self, definition: VariableDefinition) -> Self {
        self.variable_definitions.push(definition);
        self
    }

    #[must_use]
    pub fn with_fragment(mut self, name: &str, definition: FragmentDefinition) -> Self {
        self.fragments.insert(Name::new(name), definition);
        self
    }

    pub fn fragment(&self, name: &str) -> Option<&FragmentDefinition> {
        self.fragments
            .iter()
            .find(|(fragment, _)| fragment.as_str() == name)
            .map(|(_, definition)| definition)
    }

    pub fn variable_definition(&self, name: &str) -> Option<&VariableDefinition> {
        self.variable_definitions
            .iter()
            .find(|definition| definition.name.as_str() == name)
    }
}
