//! Attribute-syntax extraction
//!
//! A component whose data is a sequence may carry `attr:NAME` entries that
//! attach arguments to the component instead of appearing as rendered
//! children, plus a `data` entry designating the literal payload that
//! replaces the child list. Neither key matches any rule, so both reach this
//! pass as untouched input values.

use serde_yaml::Value;

use crate::error::{CompileError, CompileResult};

use super::component::{Args, Component, ComponentData, CompiledNode};

/// Classification of one raw sibling entry, determined once
enum RawEntry<'a> {
    Attr(&'a str, &'a Value),
    Data(&'a Value),
    Other,
}

fn classify(value: &Value) -> RawEntry<'_> {
    let Some(mapping) = value.as_mapping() else {
        return RawEntry::Other;
    };
    let Some((key, entry_value)) = mapping.iter().next() else {
        return RawEntry::Other;
    };
    let Some(key) = key.as_str() else {
        return RawEntry::Other;
    };
    if let Some(name) = key.strip_prefix("attr:") {
        RawEntry::Attr(name, entry_value)
    } else if key == "data" {
        RawEntry::Data(entry_value)
    } else {
        RawEntry::Other
    }
}

/// Lift `attr:NAME` entries into the component's argument mapping
///
/// No-op unless the component's data is a sequence containing at least one
/// `attr:` entry. When one exists, the first entry keyed exactly `data`
/// supplies the new payload, verbatim; its absence is a compile error.
/// A duplicated attr name resolves to the later entry, and explicitly
/// declared args win over extracted ones.
pub(crate) fn normalize_attrs(component: Component) -> CompileResult<Component> {
    let Component {
        component: kind,
        args,
        data,
    } = component;

    let entries: Vec<RawEntry<'_>> = match &data {
        ComponentData::Children(children) => children
            .iter()
            .map(|child| match child {
                CompiledNode::PassThrough(value) => classify(value),
                CompiledNode::Component(_) => RawEntry::Other,
            })
            .collect(),
        ComponentData::Value(Value::Sequence(values)) => values.iter().map(classify).collect(),
        ComponentData::Value(_) => Vec::new(),
    };

    let mut extracted = Args::new();
    for entry in &entries {
        if let RawEntry::Attr(name, value) = entry {
            extracted.insert((*name).to_string(), (*value).clone());
        }
    }
    if extracted.is_empty() {
        return Ok(Component {
            component: kind,
            args,
            data,
        });
    }

    if let Some(existing) = args {
        extracted.extend(existing);
    }

    let payload = entries
        .iter()
        .find_map(|entry| match entry {
            RawEntry::Data(value) => Some((*value).clone()),
            _ => None,
        })
        .ok_or(CompileError::MissingDataEntry)?;

    Ok(Component {
        component: kind,
        args: Some(extracted),
        data: ComponentData::Value(payload),
    })
}
