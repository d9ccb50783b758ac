//! Shorthands to write operations in tests.

use operation::{ConstValue, Field, FragmentSpread, InlineFragment, Name, Selection, Value};

pub fn leaf(name: &str) -> Selection {
    Field::new(name).into()
}

pub fn leaves<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<Selection> {
    names.into_iter().map(leaf).collect()
}

pub fn object(name: &str, selections: impl IntoIterator<Item = Selection>) -> Selection {
    Field::new(name).with_selection_set(selections).into()
}

pub fn on(type_condition: &str, selections: impl IntoIterator<Item = Selection>) -> Selection {
    InlineFragment::on(type_condition, selections).into()
}

pub fn spread(fragment_name: &str) -> Selection {
    FragmentSpread::new(fragment_name).into()
}

pub fn string(value: &str) -> Value {
    Value::String(value.to_string())
}

pub fn enum_value(value: &str) -> Value {
    Value::Enum(Name::new(value))
}

pub fn int(value: i32) -> Value {
    Value::Number(value.into())
}

pub fn variable(name: &str) -> Value {
    Value::Variable(Name::new(name))
}

pub fn const_string(value: &str) -> ConstValue {
    ConstValue::String(value.to_string())
}
