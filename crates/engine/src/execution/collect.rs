use std::collections::HashSet;

use indexmap::IndexMap;
use operation::{Field, Name, Selection, SelectionSet};

use super::ExecutionContext;
use crate::prepare::is_included;

/// Fields to resolve on an object, grouped by response key in query order. Selections sharing a
/// response key are merged into the same group.
pub(super) type GroupedFields<'a> = IndexMap<&'a Name, Vec<&'a Field>>;

impl<'a, C> ExecutionContext<'a, C> {
    pub(super) fn collect_fields(
        &self,
        object_type: &str,
        selection_sets: impl IntoIterator<Item = &'a SelectionSet>,
    ) -> GroupedFields<'a> {
        let mut fields = GroupedFields::default();
        let mut visited_fragments = HashSet::new();
        for selection_set in selection_sets {
            self.collect_fields_into(object_type, selection_set, &mut fields, &mut visited_fragments);
        }
        fields
    }

    fn collect_fields_into(
        &self,
        object_type: &str,
        selection_set: &'a SelectionSet,
        fields: &mut GroupedFields<'a>,
        visited_fragments: &mut HashSet<&'a str>,
    ) {
        for selection in selection_set {
            if !is_included(selection.directives(), self.variables) {
                continue;
            }
            match selection {
                Selection::Field(field) => fields.entry(field.response_key()).or_default().push(field),
                Selection::InlineFragment(fragment) => {
                    let applies = fragment
                        .type_condition
                        .as_ref()
                        .is_none_or(|type_condition| self.does_fragment_type_apply(object_type, type_condition));
                    if applies {
                        self.collect_fields_into(object_type, &fragment.selection_set, fields, visited_fragments);
                    }
                }
                Selection::FragmentSpread(spread) => {
                    if !visited_fragments.insert(spread.fragment_name.as_str()) {
                        continue;
                    }
                    let Some(fragment) = self.operation.fragment(&spread.fragment_name) else {
                        continue;
                    };
                    if self.does_fragment_type_apply(object_type, &fragment.type_condition) {
                        self.collect_fields_into(object_type, &fragment.selection_set, fields, visited_fragments);
                    }
                }
            }
        }
    }

    /// A type condition applies when it names the object itself, an interface it implements or
    /// a union it belongs to.
    fn does_fragment_type_apply(&self, object_type: &str, type_condition: &str) -> bool {
        type_condition == object_type || self.registry.is_possible_type(type_condition, object_type)
    }
}
