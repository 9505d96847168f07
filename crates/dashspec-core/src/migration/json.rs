//! Tree-surgery helpers shared by the migration steps.
//!
//! Every accessor reports the dotted path of the field it failed on, using
//! the same notation as schema errors (`items[2].item.text`).

use serde_json::{Map, Value};

use crate::error::TransformError;
use crate::schema::ViewType;

pub(crate) type Object = Map<String, Value>;

type Result<T> = std::result::Result<T, TransformError>;

pub(crate) fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", path, key)
    }
}

pub(crate) fn root_mut(spec: &mut Value) -> Result<&mut Object> {
    spec.as_object_mut()
        .ok_or_else(|| TransformError::unexpected_type("(document)", "an object"))
}

pub(crate) fn as_object_mut<'a>(value: &'a mut Value, path: &str) -> Result<&'a mut Object> {
    value
        .as_object_mut()
        .ok_or_else(|| TransformError::unexpected_type(path, "an object"))
}

pub(crate) fn field_mut<'a>(object: &'a mut Object, key: &str, path: &str) -> Result<&'a mut Value> {
    object
        .get_mut(key)
        .ok_or_else(|| TransformError::missing(join(path, key)))
}

pub(crate) fn object_field_mut<'a>(
    object: &'a mut Object,
    key: &str,
    path: &str,
) -> Result<&'a mut Object> {
    let field_path = join(path, key);
    field_mut(object, key, path)?
        .as_object_mut()
        .ok_or_else(|| TransformError::unexpected_type(field_path, "an object"))
}

pub(crate) fn array_field_mut<'a>(
    object: &'a mut Object,
    key: &str,
    path: &str,
) -> Result<&'a mut Vec<Value>> {
    let field_path = join(path, key);
    field_mut(object, key, path)?
        .as_array_mut()
        .ok_or_else(|| TransformError::unexpected_type(field_path, "an array"))
}

pub(crate) fn read_u64(object: &Object, key: &str, path: &str) -> Result<u64> {
    object
        .get(key)
        .ok_or_else(|| TransformError::missing(join(path, key)))?
        .as_u64()
        .ok_or_else(|| TransformError::unexpected_type(join(path, key), "an unsigned integer"))
}

/// Removes and returns a required field.
pub(crate) fn take(object: &mut Object, key: &str, path: &str) -> Result<Value> {
    object
        .remove(key)
        .ok_or_else(|| TransformError::missing(join(path, key)))
}

pub(crate) fn take_object(object: &mut Object, key: &str, path: &str) -> Result<Object> {
    match take(object, key, path)? {
        Value::Object(inner) => Ok(inner),
        _ => Err(TransformError::unexpected_type(join(path, key), "an object")),
    }
}

pub(crate) fn take_string(object: &mut Object, key: &str, path: &str) -> Result<String> {
    match take(object, key, path)? {
        Value::String(value) => Ok(value),
        _ => Err(TransformError::unexpected_type(join(path, key), "a string")),
    }
}

pub(crate) fn take_u64(object: &mut Object, key: &str, path: &str) -> Result<u64> {
    let value = read_u64(object, key, path)?;
    object.remove(key);
    Ok(value)
}

/// Inserts a field the source shape must not already have.
pub(crate) fn insert_new(object: &mut Object, key: &str, value: Value, path: &str) -> Result<()> {
    if object.contains_key(key) {
        return Err(TransformError::unexpected_field(join(path, key)));
    }
    object.insert(key.to_string(), value);
    Ok(())
}

pub(crate) fn rename(object: &mut Object, from: &str, to: &str, path: &str) -> Result<()> {
    let value = take(object, from, path)?;
    insert_new(object, to, value, path)
}

/// The `type` discriminator of an item payload.
pub(crate) fn item_type(item: &Object) -> Option<&str> {
    item.get("type").and_then(Value::as_str)
}

/// Calls `f` with every holder object and its path.
pub(crate) fn for_each_holder<F>(spec: &mut Value, mut f: F) -> Result<()>
where
    F: FnMut(&mut Object, &str) -> Result<()>,
{
    let holders = array_field_mut(root_mut(spec)?, "items", "")?;
    for (index, holder) in holders.iter_mut().enumerate() {
        let path = format!("items[{}]", index);
        f(as_object_mut(holder, &path)?, &path)?;
    }
    Ok(())
}

/// Calls `f` with every item payload whose `type` is `type_tag`.
pub(crate) fn for_each_item_of_type<F>(spec: &mut Value, type_tag: &str, mut f: F) -> Result<()>
where
    F: FnMut(&mut Object, &str) -> Result<()>,
{
    for_each_holder(spec, |holder, holder_path| {
        let item = object_field_mut(holder, "item", holder_path)?;
        if item_type(item) != Some(type_tag) {
            return Ok(());
        }
        f(item, &join(holder_path, "item"))
    })
}

/// Calls `f` with every indicator layer of every GIS item.
pub(crate) fn for_each_indicator_layer<F>(spec: &mut Value, mut f: F) -> Result<()>
where
    F: FnMut(&mut Object, &str) -> Result<()>,
{
    for_each_item_of_type(spec, "GIS_ITEM", |item, item_path| {
        let layers = object_field_mut(item, "indicatorLayers", item_path)?;
        let layers_path = join(item_path, "indicatorLayers");
        for (key, layer) in layers.iter_mut() {
            let layer_path = join(&layers_path, key);
            f(as_object_mut(layer, &layer_path)?, &layer_path)?;
        }
        Ok(())
    })
}

/// Calls `f` with the `view_type` branch of every settings entry that has one.
pub(crate) fn for_each_view_type_branch<F>(
    spec: &mut Value,
    view_type: ViewType,
    mut f: F,
) -> Result<()>
where
    F: FnMut(&mut Object, &str) -> Result<()>,
{
    let settings = object_field_mut(root_mut(spec)?, "settings", "")?;
    for (key, entry) in settings.iter_mut() {
        let entry_path = format!("settings.{}", key);
        let entry = as_object_mut(entry, &entry_path)?;
        let branches = object_field_mut(entry, "viewTypeSettings", &entry_path)?;
        let branches_path = join(&entry_path, "viewTypeSettings");
        if let Some(branch) = branches.get_mut(view_type.as_str()) {
            let branch_path = join(&branches_path, view_type.as_str());
            f(as_object_mut(branch, &branch_path)?, &branch_path)?;
        }
    }
    Ok(())
}
