use std::collections::HashMap;

use indexmap::IndexMap;
use strum::IntoEnumIterator;

use crate::{
    BuiltinScalar, FieldDefinition, ObjectType, RegistryError, ScalarType, SchemaViolation, TypeDefinition, TypeRef,
};

/// All the named types of a schema.
///
/// Types can be registered in any order and may reference each other freely, references are
/// only checked by [`TypeRegistry::finalize`] which also computes the possible types of every
/// interface and union.
pub struct TypeRegistry<C> {
    types: IndexMap<String, TypeDefinition<C>>,
    query_type: String,
    mutation_type: Option<String>,
    possible_types: HashMap<String, Vec<String>>,
    finalized: bool,
}

impl<C> Default for TypeRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> TypeRegistry<C> {
    /// A registry with the built-in scalars and `Query` as query root.
    pub fn new() -> Self {
        let types = BuiltinScalar::iter()
            .map(|scalar| {
                let name: &'static str = scalar.into();
                (name.to_string(), TypeDefinition::Scalar(ScalarType::new(name)))
            })
            .collect();
        Self {
            types,
            query_type: "Query".to_string(),
            mutation_type: None,
            possible_types: HashMap::new(),
            finalized: false,
        }
    }

    #[must_use]
    pub fn with_query_type(mut self, name: impl Into<String>) -> Self {
        self.query_type = name.into();
        self.finalized = false;
        self
    }

    #[must_use]
    pub fn with_mutation_type(mut self, name: impl Into<String>) -> Self {
        self.mutation_type = Some(name.into());
        self.finalized = false;
        self
    }

    pub fn register(&mut self, definition: impl Into<TypeDefinition<C>>) -> Result<(), RegistryError> {
        let definition = definition.into();
        if self.types.contains_key(definition.name()) {
            return Err(RegistryError::DuplicateType(definition.name().to_string()));
        }
        self.types.insert(definition.name().to_string(), definition);
        self.finalized = false;
        Ok(())
    }

    pub fn resolve(&self, name: &str) -> Result<&TypeDefinition<C>, RegistryError> {
        self.types
            .get(name)
            .ok_or_else(|| RegistryError::UnknownType(name.to_string()))
    }

    pub fn get(&self, name: &str) -> Option<&TypeDefinition<C>> {
        self.types.get(name)
    }

    pub fn object(&self, name: &str) -> Option<&ObjectType<C>> {
        match self.types.get(name) {
            Some(TypeDefinition::Object(object)) => Some(object),
            _ => None,
        }
    }

    pub fn types(&self) -> impl Iterator<Item = &TypeDefinition<C>> + '_ {
        self.types.values()
    }

    pub fn query_type(&self) -> &str {
        &self.query_type
    }

    pub fn mutation_type(&self) -> Option<&str> {
        self.mutation_type.as_deref()
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Objects implementing the interface, in registration order. Empty before finalization.
    pub fn implementers(&self, interface: &str) -> &[String] {
        match self.types.get(interface) {
            Some(TypeDefinition::Interface(_)) => self.possible_types_of(interface),
            _ => &[],
        }
    }

    /// Members of the union, in declaration order. Empty before finalization.
    pub fn members(&self, union: &str) -> &[String] {
        match self.types.get(union) {
            Some(TypeDefinition::Union(_)) => self.possible_types_of(union),
            _ => &[],
        }
    }

    /// Object types a value at a position of the given type may have at runtime.
    pub fn possible_types(&self, name: &str) -> &[String] {
        match self.types.get(name) {
            Some(TypeDefinition::Object(object)) => std::slice::from_ref(&object.name),
            Some(TypeDefinition::Interface(_) | TypeDefinition::Union(_)) => self.possible_types_of(name),
            _ => &[],
        }
    }

    /// Whether an object of type `object` can appear where `ty` is expected.
    pub fn is_possible_type(&self, ty: &str, object: &str) -> bool {
        ty == object || self.possible_types_of(ty).iter().any(|candidate| candidate == object)
    }

    fn possible_types_of(&self, name: &str) -> &[String] {
        self.possible_types.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    /// Checks the consistency of the registered types and computes the possible types of
    /// interfaces and unions. Every problem found is reported at once.
    ///
    /// Calling it again recomputes the same tables.
    pub fn finalize(&mut self) -> Result<(), RegistryError> {
        let mut violations = Vec::new();
        let possible_types = self.collect_possible_types(&mut violations);

        for definition in self.types.values() {
            for field in definition.duplicate_fields() {
                violations.push(SchemaViolation::DuplicateField {
                    parent: definition.name().to_string(),
                    field: field.clone(),
                });
            }
            for field in definition.fields() {
                self.check_field(definition.name(), field, &mut violations);
            }
            if let TypeDefinition::Object(object) = definition {
                self.check_interface_contracts(object, &possible_types, &mut violations);
            }
        }

        self.check_root_type("query", Some(&self.query_type), &mut violations);
        self.check_root_type("mutation", self.mutation_type.as_ref(), &mut violations);

        self.possible_types = possible_types;
        self.finalized = violations.is_empty();

        if violations.is_empty() {
            tracing::debug!(types = self.types.len(), "Type registry finalized");
            Ok(())
        } else {
            tracing::debug!(violations = violations.len(), "Type registry is inconsistent");
            Err(RegistryError::SchemaIntegrity(violations))
        }
    }

    fn collect_possible_types(&self, violations: &mut Vec<SchemaViolation>) -> HashMap<String, Vec<String>> {
        let mut possible_types: HashMap<String, Vec<String>> = HashMap::new();

        for definition in self.types.values() {
            match definition {
                TypeDefinition::Object(object) => {
                    for interface in &object.interfaces {
                        match self.types.get(interface) {
                            Some(TypeDefinition::Interface(_)) => possible_types
                                .entry(interface.clone())
                                .or_default()
                                .push(object.name.clone()),
                            Some(_) => violations.push(SchemaViolation::NotAnInterface {
                                object: object.name.clone(),
                                name: interface.clone(),
                            }),
                            None => violations.push(SchemaViolation::UnknownTypeReference {
                                location: object.name.clone(),
                                name: interface.clone(),
                            }),
                        }
                    }
                }
                TypeDefinition::Union(union) => {
                    if union.members.is_empty() {
                        violations.push(SchemaViolation::EmptyUnion(union.name.clone()));
                    }
                    let members = possible_types.entry(union.name.clone()).or_default();
                    for (index, member) in union.members.iter().enumerate() {
                        if union.members[..index].contains(member) {
                            violations.push(SchemaViolation::DuplicateUnionMember {
                                union: union.name.clone(),
                                member: member.clone(),
                            });
                            continue;
                        }
                        match self.types.get(member) {
                            Some(TypeDefinition::Object(_)) => members.push(member.clone()),
                            Some(_) => violations.push(SchemaViolation::UnionMemberNotAnObject {
                                union: union.name.clone(),
                                member: member.clone(),
                            }),
                            None => violations.push(SchemaViolation::UnknownTypeReference {
                                location: union.name.clone(),
                                name: member.clone(),
                            }),
                        }
                    }
                }
                TypeDefinition::Enum(r#enum) if r#enum.values.is_empty() => {
                    violations.push(SchemaViolation::EmptyEnum(r#enum.name.clone()));
                }
                _ => {}
            }
        }

        possible_types
    }

    fn check_field(&self, parent: &str, field: &FieldDefinition<C>, violations: &mut Vec<SchemaViolation>) {
        if !self.types.contains_key(&field.ty.name) {
            violations.push(SchemaViolation::UnknownTypeReference {
                location: format!("{parent}.{}", field.name),
                name: field.ty.name.clone(),
            });
        }

        for argument in &field.arguments {
            let location = format!("{parent}.{}({}:)", field.name, argument.name);
            match self.types.get(&argument.ty.name) {
                None => violations.push(SchemaViolation::UnknownTypeReference {
                    location,
                    name: argument.ty.name.clone(),
                }),
                Some(definition) if !definition.is_input_type() => violations.push(SchemaViolation::NotAnInputType {
                    location,
                    name: argument.ty.name.clone(),
                }),
                Some(_) => {
                    if let Some(default_value) = &argument.default_value {
                        if let Err(error) = self.coerce_input_value(&argument.ty, default_value.clone()) {
                            violations.push(SchemaViolation::InvalidDefaultValue { location, error });
                        }
                    }
                }
            }
        }
    }

    fn check_interface_contracts(
        &self,
        object: &ObjectType<C>,
        possible_types: &HashMap<String, Vec<String>>,
        violations: &mut Vec<SchemaViolation>,
    ) {
        for interface_name in &object.interfaces {
            let Some(TypeDefinition::Interface(interface)) = self.types.get(interface_name) else {
                continue;
            };
            for interface_field in interface.fields.values() {
                let Some(field) = object.get_field(&interface_field.name) else {
                    violations.push(SchemaViolation::MissingInterfaceField {
                        object: object.name.clone(),
                        interface: interface.name.clone(),
                        field: interface_field.name.clone(),
                    });
                    continue;
                };

                if !is_valid_implementation_type(possible_types, &field.ty, &interface_field.ty) {
                    violations.push(SchemaViolation::IncompatibleInterfaceField {
                        object: object.name.clone(),
                        interface: interface.name.clone(),
                        field: field.name.clone(),
                        expected: interface_field.ty.to_string(),
                        actual: field.ty.to_string(),
                    });
                }

                for argument in &interface_field.arguments {
                    if field.get_argument(&argument.name).is_none() {
                        violations.push(SchemaViolation::MissingInterfaceFieldArgument {
                            object: object.name.clone(),
                            interface: interface.name.clone(),
                            field: field.name.clone(),
                            argument: argument.name.clone(),
                        });
                    }
                }
            }
        }
    }

    fn check_root_type(&self, operation: &'static str, name: Option<&String>, violations: &mut Vec<SchemaViolation>) {
        let Some(name) = name else {
            return;
        };
        match self.types.get(name) {
            Some(TypeDefinition::Object(_)) => {}
            Some(definition) => violations.push(SchemaViolation::RootTypeNotAnObject {
                operation,
                name: name.clone(),
                kind: definition.kind(),
            }),
            None => violations.push(SchemaViolation::MissingRootType {
                operation,
                name: name.clone(),
            }),
        }
    }
}

/// An implementer may narrow the type of an interface field: make it non-null, or return an
/// object that is a possible type of the declared abstract type.
fn is_valid_implementation_type(
    possible_types: &HashMap<String, Vec<String>>,
    implementation: &TypeRef,
    interface: &TypeRef,
) -> bool {
    if interface.is_required() {
        return implementation.is_required()
            && is_valid_implementation_type(
                possible_types,
                &implementation.without_non_null(),
                &interface.without_non_null(),
            );
    }
    if implementation.is_required() {
        return is_valid_implementation_type(possible_types, &implementation.without_non_null(), interface);
    }
    match (implementation.list_item(), interface.list_item()) {
        (Some(implementation), Some(interface)) => {
            is_valid_implementation_type(possible_types, &implementation, &interface)
        }
        (None, None) => {
            implementation.name == interface.name
                || possible_types
                    .get(&interface.name)
                    .is_some_and(|types| types.contains(&implementation.name))
        }
        _ => false,
    }
}
