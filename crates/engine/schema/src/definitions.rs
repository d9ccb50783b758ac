use std::str::FromStr;

use indexmap::IndexMap;
use operation::ConstValue;

use crate::{BoundArguments, FieldResolver, ResolvedValue, ResolverError, TypeRef};

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum TypeKind {
    Scalar,
    Enum,
    Object,
    Interface,
    Union,
}

/// A named type registered in a [`crate::TypeRegistry`].
#[derive(Debug)]
pub enum TypeDefinition<C> {
    Scalar(ScalarType),
    Enum(EnumType),
    Object(ObjectType<C>),
    Interface(InterfaceType<C>),
    Union(UnionType),
}

impl<C> TypeDefinition<C> {
    pub fn name(&self) -> &str {
        match self {
            TypeDefinition::Scalar(scalar) => &scalar.name,
            TypeDefinition::Enum(r#enum) => &r#enum.name,
            TypeDefinition::Object(object) => &object.name,
            TypeDefinition::Interface(interface) => &interface.name,
            TypeDefinition::Union(union) => &union.name,
        }
    }

    pub fn kind(&self) -> TypeKind {
        match self {
            TypeDefinition::Scalar(_) => TypeKind::Scalar,
            TypeDefinition::Enum(_) => TypeKind::Enum,
            TypeDefinition::Object(_) => TypeKind::Object,
            TypeDefinition::Interface(_) => TypeKind::Interface,
            TypeDefinition::Union(_) => TypeKind::Union,
        }
    }

    pub fn is_input_type(&self) -> bool {
        matches!(self, TypeDefinition::Scalar(_) | TypeDefinition::Enum(_))
    }

    /// Fields of objects and interfaces, nothing for the other kinds.
    pub fn fields(&self) -> impl Iterator<Item = &FieldDefinition<C>> + '_ {
        let fields = match self {
            TypeDefinition::Object(object) => Some(object.fields.values()),
            TypeDefinition::Interface(interface) => Some(interface.fields.values()),
            _ => None,
        };
        fields.into_iter().flatten()
    }

    pub fn field(&self, name: &str) -> Option<&FieldDefinition<C>> {
        match self {
            TypeDefinition::Object(object) => object.get_field(name),
            TypeDefinition::Interface(interface) => interface.get_field(name),
            _ => None,
        }
    }

    pub(crate) fn duplicate_fields(&self) -> &[String] {
        match self {
            TypeDefinition::Object(object) => &object.duplicate_fields,
            TypeDefinition::Interface(interface) => &interface.duplicate_fields,
            _ => &[],
        }
    }
}

impl<C> From<ScalarType> for TypeDefinition<C> {
    fn from(scalar: ScalarType) -> Self {
        TypeDefinition::Scalar(scalar)
    }
}

impl<C> From<EnumType> for TypeDefinition<C> {
    fn from(r#enum: EnumType) -> Self {
        TypeDefinition::Enum(r#enum)
    }
}

impl<C> From<ObjectType<C>> for TypeDefinition<C> {
    fn from(object: ObjectType<C>) -> Self {
        TypeDefinition::Object(object)
    }
}

impl<C> From<InterfaceType<C>> for TypeDefinition<C> {
    fn from(interface: InterfaceType<C>) -> Self {
        TypeDefinition::Interface(interface)
    }
}

impl<C> From<UnionType> for TypeDefinition<C> {
    fn from(union: UnionType) -> Self {
        TypeDefinition::Union(union)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumString, strum::EnumIter, strum::IntoStaticStr)]
pub enum BuiltinScalar {
    Int,
    Float,
    String,
    Boolean,
    #[allow(clippy::upper_case_acronyms)]
    ID,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScalarType {
    pub name: String,
}

impl ScalarType {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn builtin(&self) -> Option<BuiltinScalar> {
        BuiltinScalar::from_str(&self.name).ok()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumType {
    pub name: String,
    pub values: Vec<String>,
}

impl EnumType {
    pub fn new(name: impl Into<String>, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn has_value(&self, value: &str) -> bool {
        self.values.iter().any(|candidate| candidate == value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnionType {
    pub name: String,
    pub members: Vec<String>,
}

impl UnionType {
    pub fn new(name: impl Into<String>, members: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            members: members.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug)]
pub struct ObjectType<C> {
    pub name: String,
    pub fields: IndexMap<String, FieldDefinition<C>>,
    pub interfaces: Vec<String>,
    // Names declared more than once, only the first declaration is kept.
    pub(crate) duplicate_fields: Vec<String>,
}

impl<C> ObjectType<C> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: IndexMap::new(),
            interfaces: Vec::new(),
            duplicate_fields: Vec::new(),
        }
    }

    #[must_use]
    pub fn implements(mut self, interface: impl Into<String>) -> Self {
        self.interfaces.push(interface.into());
        self
    }

    #[must_use]
    pub fn field(mut self, field: FieldDefinition<C>) -> Self {
        add_field(&mut self.fields, &mut self.duplicate_fields, field);
        self
    }

    pub fn get_field(&self, name: &str) -> Option<&FieldDefinition<C>> {
        self.fields.get(name)
    }
}

/// Fields declared on an interface only describe the contract of its implementers, their
/// resolvers are never called.
#[derive(Debug)]
pub struct InterfaceType<C> {
    pub name: String,
    pub fields: IndexMap<String, FieldDefinition<C>>,
    pub(crate) duplicate_fields: Vec<String>,
}

impl<C> InterfaceType<C> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: IndexMap::new(),
            duplicate_fields: Vec::new(),
        }
    }

    #[must_use]
    pub fn field(mut self, field: FieldDefinition<C>) -> Self {
        add_field(&mut self.fields, &mut self.duplicate_fields, field);
        self
    }

    pub fn get_field(&self, name: &str) -> Option<&FieldDefinition<C>> {
        self.fields.get(name)
    }
}

fn add_field<C>(
    fields: &mut IndexMap<String, FieldDefinition<C>>,
    duplicates: &mut Vec<String>,
    field: FieldDefinition<C>,
) {
    if fields.contains_key(&field.name) {
        duplicates.push(field.name);
    } else {
        fields.insert(field.name.clone(), field);
    }
}

#[derive(Debug)]
pub struct FieldDefinition<C> {
    pub name: String,
    pub ty: TypeRef,
    pub arguments: Vec<InputValueDefinition>,
    pub resolver: FieldResolver<C>,
}

impl<C> FieldDefinition<C> {
    /// A field reading the property of the same name on its parent.
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        let name = name.into();
        Self {
            resolver: FieldResolver::property(name.clone()),
            name,
            ty,
            arguments: Vec::new(),
        }
    }

    #[must_use]
    pub fn argument(mut self, argument: InputValueDefinition) -> Self {
        self.arguments.push(argument);
        self
    }

    #[must_use]
    pub fn resolver(mut self, resolver: FieldResolver<C>) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn get_argument(&self, name: &str) -> Option<&InputValueDefinition> {
        self.arguments.iter().find(|argument| argument.name == name)
    }
}

impl<C: Sync + 'static> FieldDefinition<C> {
    /// Resolves the field with a synchronous function.
    #[must_use]
    pub fn resolve_with<F>(self, f: F) -> Self
    where
        F: Fn(&ResolvedValue, &C, &BoundArguments) -> Result<ResolvedValue, ResolverError> + Send + Sync + 'static,
    {
        self.resolver(FieldResolver::function(f))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InputValueDefinition {
    pub name: String,
    pub ty: TypeRef,
    pub default_value: Option<ConstValue>,
}

impl InputValueDefinition {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            default_value: None,
        }
    }

    #[must_use]
    pub fn default_value(mut self, value: ConstValue) -> Self {
        self.default_value = Some(value);
        self
    }
}
