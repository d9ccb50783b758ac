mod error;

use operation::{ConstValue, Directive, Operation, OperationType, Selection, SelectionSet, Value, Variables};
use schema::TypeRegistry;

use crate::ExecutionConfig;

pub use error::RequestError;

pub(super) type PrepareResult<T> = Result<T, RequestError>;

/// Rejects operations that cannot be executed at all: unsupported operation types, unknown root
/// fields, missing or cyclic fragments, invalid directives and excessive depth.
///
/// `variables` must already include the defaults of the variable definitions.
pub(crate) fn validate_operation<C>(
    registry: &TypeRegistry<C>,
    operation: &Operation,
    variables: &Variables,
    config: &ExecutionConfig,
) -> PrepareResult<()> {
    let root = match operation.ty {
        OperationType::Query => registry.query_type(),
        OperationType::Mutation => registry.mutation_type().ok_or(RequestError::NoMutationRoot)?,
        OperationType::Subscription => return Err(RequestError::SubscriptionsNotSupported),
    };

    let validator = Validator { operation, variables };
    validator.validate_selection_set(&operation.selection_set, &mut Vec::new())?;
    validator.validate_root_fields(registry, root, &operation.selection_set)?;

    if let Some(max_depth) = config.max_depth {
        let depth = validator.depth(&operation.selection_set);
        if depth > max_depth {
            return Err(RequestError::DepthLimitExceeded { depth, max_depth });
        }
    }

    Ok(())
}

/// Evaluates `@skip` and `@include`. Directives are validated beforehand, anything unexpected
/// keeps the selection.
pub(crate) fn is_included(directives: &[Directive], variables: &Variables) -> bool {
    directives.iter().all(|directive| {
        match (directive.name.as_str(), condition(directive, variables)) {
            ("skip", Some(skip)) => !skip,
            ("include", Some(include)) => include,
            _ => true,
        }
    })
}

fn condition(directive: &Directive, variables: &Variables) -> Option<bool> {
    let value = match directive.argument("if")? {
        Value::Variable(name) => variables.get_value(name)?,
        Value::Boolean(value) => return Some(*value),
        _ => return None,
    };
    match value {
        ConstValue::Boolean(value) => Some(*value),
        _ => None,
    }
}

struct Validator<'a> {
    operation: &'a Operation,
    variables: &'a Variables,
}

impl<'a> Validator<'a> {
    fn validate_selection_set(&self, selection_set: &'a SelectionSet, spreads: &mut Vec<&'a str>) -> PrepareResult<()> {
        for selection in selection_set {
            self.validate_directives(selection.directives())?;
            match selection {
                Selection::Field(field) => self.validate_selection_set(&field.selection_set, spreads)?,
                Selection::InlineFragment(fragment) => self.validate_selection_set(&fragment.selection_set, spreads)?,
                Selection::FragmentSpread(spread) => {
                    let name = spread.fragment_name.as_str();
                    if spreads.contains(&name) {
                        return Err(RequestError::FragmentCycle(name.to_string()));
                    }
                    let fragment = self
                        .operation
                        .fragment(name)
                        .ok_or_else(|| RequestError::UnknownFragment(name.to_string()))?;
                    spreads.push(name);
                    self.validate_selection_set(&fragment.selection_set, spreads)?;
                    spreads.pop();
                }
            }
        }
        Ok(())
    }

    fn validate_directives(&self, directives: &[Directive]) -> PrepareResult<()> {
        for directive in directives {
            let name = directive.name.as_str();
            if name != "skip" && name != "include" {
                return Err(RequestError::UnknownDirective(name.to_string()));
            }
            if condition(directive, self.variables).is_none() {
                return Err(RequestError::InvalidDirectiveArgument(name.to_string()));
            }
        }
        Ok(())
    }

    // Fragments whose type condition cannot apply to the root are never executed.
    fn validate_root_fields<C>(
        &self,
        registry: &TypeRegistry<C>,
        root: &str,
        selection_set: &SelectionSet,
    ) -> PrepareResult<()> {
        for selection in selection_set {
            match selection {
                Selection::Field(field) => {
                    let known = field.name == "__typename"
                        || registry
                            .object(root)
                            .is_some_and(|object| object.get_field(&field.name).is_some());
                    if !known {
                        return Err(RequestError::UnknownRootField {
                            root: root.to_string(),
                            field: field.name.to_string(),
                        });
                    }
                }
                Selection::InlineFragment(fragment) => {
                    let applies = fragment
                        .type_condition
                        .as_ref()
                        .is_none_or(|type_condition| registry.is_possible_type(type_condition, root));
                    if applies {
                        self.validate_root_fields(registry, root, &fragment.selection_set)?;
                    }
                }
                Selection::FragmentSpread(spread) => {
                    if let Some(fragment) = self
                        .operation
                        .fragment(&spread.fragment_name)
                        .filter(|fragment| registry.is_possible_type(&fragment.type_condition, root))
                    {
                        self.validate_root_fields(registry, root, &fragment.selection_set)?;
                    }
                }
            }
        }
        Ok(())
    }

    fn depth(&self, selection_set: &SelectionSet) -> usize {
        selection_set
            .iter()
            .map(|selection| match selection {
                Selection::Field(field) => 1 + self.depth(&field.selection_set),
                Selection::InlineFragment(fragment) => self.depth(&fragment.selection_set),
                Selection::FragmentSpread(spread) => self
                    .operation
                    .fragment(&spread.fragment_name)
                    .map(|fragment| self.depth(&fragment.selection_set))
                    .unwrap_or_default(),
            })
            .max()
            .unwrap_or_default()
    }
}
