use crate::{Name, Value};

/// An ordered set of selections requested on one object position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionSet(Vec<Selection>);

impl SelectionSet {
    pub fn iter(&self) -> std::slice::Iter<'_, Selection> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, selection: impl Into<Selection>) {
        self.0.push(selection.into());
    }
}

impl FromIterator<Selection> for SelectionSet {
    fn from_iter<T: IntoIterator<Item = Selection>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a SelectionSet {
    type Item = &'a Selection;
    type IntoIter = std::slice::Iter<'a, Selection>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    Field(Field),
    InlineFragment(InlineFragment),
    FragmentSpread(FragmentSpread),
}

impl Selection {
    pub fn directives(&self) -> &[Directive] {
        match self {
            Selection::Field(field) => &field.directives,
            Selection::InlineFragment(fragment) => &fragment.directives,
            Selection::FragmentSpread(spread) => &spread.directives,
        }
    }
}

impl From<Field> for Selection {
    fn from(field: Field) -> Self {
        Selection::Field(field)
    }
}

impl From<InlineFragment> for Selection {
    fn from(fragment: InlineFragment) -> Self {
        Selection::InlineFragment(fragment)
    }
}

impl From<FragmentSpread> for Selection {
    fn from(spread: FragmentSpread) -> Self {
        Selection::FragmentSpread(spread)
    }
}

/// A field selection: `alias: name(arguments) @directives { selection_set }`.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub alias: Option<Name>,
    pub name: Name,
    pub arguments: Vec<(Name, Value)>,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,
}

impl Field {
    pub fn new(name: &str) -> Self {
        Self {
            alias: None,
            name: Name::new(name),
            arguments: Vec::new(),
            directives: Vec::new(),
            selection_set: SelectionSet::default(),
        }
    }

    #[must_use]
    pub fn with_alias(mut self, alias: &str) -> Self {
        self.alias = Some(Name::new(alias));
        self
    }

    #[must_use]
    pub fn with_argument(mut self, name: &str, value: Value) -> Self {
        self.arguments.push((Name::new(name), value));
        self
    }

    #[must_use]
    pub fn with_directive(mut self, directive: Directive) -> Self {
        self.directives.push(directive);
        self
    }

    #[must_use]
    pub fn with_selection_set(mut self, selections: impl IntoIterator<Item = Selection>) -> Self {
        self.selection_set = selections.into_iter().collect();
        self
    }

    /// The key under which this field appears in the response: its alias if any, its name
    /// otherwise.
    pub fn response_key(&self) -> &Name {
        self.alias.as_ref().unwrap_or(&self.name)
    }

    pub fn argument(&self, name: &str) -> Option<&Value> {
        self.arguments
            .iter()
            .find(|(argument, _)| argument.as_str() == name)
            .map(|(_, value)| value)
    }
}

/// `... on Human { name }`, or `... { name }` without a type condition.
#[derive(Debug, Clone, PartialEq)]
pub struct InlineFragment {
    pub type_condition: Option<Name>,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,
}

impl InlineFragment {
    pub fn new(selections: impl IntoIterator<Item = Selection>) -> Self {
        Self {
            type_condition: None,
            directives: Vec::new(),
            selection_set: selections.into_iter().collect(),
        }
    }

    pub fn on(type_condition: &str, selections: impl IntoIterator<Item = Selection>) -> Self {
        Self {
            type_condition: Some(Name::new(type_condition)),
            ..Self::new(selections)
        }
    }

    #[must_use]
    pub fn with_directive(mut self, directive: Directive) -> Self {
        self.directives.push(directive);
        self
    }
}

/// `...FragmentName`
#[derive(Debug, Clone, PartialEq)]
pub struct FragmentSpread {
    pub fragment_name: Name,
    pub directives: Vec<Directive>,
}

impl FragmentSpread {
    pub fn new(fragment_name: &str) -> Self {
        Self {
            fragment_name: Name::new(fragment_name),
            directives: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_directive(mut self, directive: Directive) -> Self {
        self.directives.push(directive);
        self
    }
}

/// `fragment FragmentName on TypeCondition { ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct FragmentDefinition {
    pub type_condition: Name,
    pub selection_set: SelectionSet,
}

impl FragmentDefinition {
    pub fn new(type_condition: &str, selections: impl IntoIterator<Item = Selection>) -> Self {
        Self {
            type_condition: Name::new(type_condition),
            selection_set: selections.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Directive {
    pub name: Name,
    pub arguments: Vec<(Name, Value)>,
}

impl Directive {
    pub fn new(name: &str) -> Self {
        Self {
            name: Name::new(name),
            arguments: Vec::new(),
        }
    }

    /// `@skip(if: ...)`
    pub fn skip(condition: Value) -> Self {
        Self::new("skip").with_argument("if", condition)
    }

    /// `@include(if: ...)`
    pub fn include(condition: Value) -> Self {
        Self::new("include").with_argument("if", condition)
    }

    #[must_use]
    pub fn with_argument(mut self, name: &str, value: Value) -> Self {
        self.arguments.push((Name::new(name), value));
        self
    }

    pub fn argument(&self, name: &str) -> Option<&Value> {
        self.arguments
            .iter()
            .find(|(argument, _)| argument.as_str() == name)
            .map(|(_, value)| value)
    }
}
