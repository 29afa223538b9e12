//! YAML dashboard compiler
//!
//! Turns a declarative YAML document into a normalized tree of typed
//! component nodes. Each mapping node is dispatched through an ordered rule
//! table on its first key; matched nodes are post-processed by the
//! attribute-syntax pass and the URL loader inference pass. Keys that match
//! no rule pass through unchanged.
//!
//! Compilation is pure and reentrant: no I/O, no shared mutable state, and
//! nothing outlives a single compile call.

pub mod component;

mod attrs;
mod loader;
mod rules;

use regex::Captures;
use serde_yaml::Value;
use tracing::{debug, warn};

use crate::error::{CompileError, CompileResult};

use self::attrs::normalize_attrs;
use self::component::single_arg;
use self::loader::infer_loader;
use self::rules::{match_key, RuleKind};

pub use self::component::{
    error_component, Args, Component, ComponentData, ComponentKind, CompiledNode,
};

/// Compile a YAML dashboard document
///
/// Never fails: parse and construction errors are reported as the standard
/// error-display tree instead.
pub fn compile_str(input: &str) -> CompiledNode {
    into_report(parse_and_compile(input))
}

/// Compile an already-parsed document value
pub fn compile_value(value: &Value) -> CompiledNode {
    into_report(compile_document(value))
}

fn parse_and_compile(input: &str) -> CompileResult<CompiledNode> {
    let document: Value = serde_yaml::from_str(input)?;
    compile_document(&document)
}

fn compile_document(document: &Value) -> CompileResult<CompiledNode> {
    if document.is_null() {
        return Err(CompileError::EmptyInput);
    }
    compile_node(document)
}

/// Single boundary converting compile failures into the error-display tree
fn into_report(result: CompileResult<CompiledNode>) -> CompiledNode {
    result.unwrap_or_else(|err| {
        warn!("dashboard compilation failed: {}", err);
        CompiledNode::Component(error_component(&err.to_string()))
    })
}

/// Compile one input node
///
/// Dispatches on the first key of a mapping node. Values that are not
/// mappings, or whose key matches no rule, are emitted unchanged.
fn compile_node(value: &Value) -> CompileResult<CompiledNode> {
    let Some((key, child_value)) = first_entry(value) else {
        return Ok(CompiledNode::PassThrough(value.clone()));
    };
    let Some((kind, caps)) = match_key(key) else {
        return Ok(CompiledNode::PassThrough(value.clone()));
    };
    debug!("key '{}' matched {:?}", key, kind);

    let built = build_component(kind, &caps, key, child_value)?;
    let built = normalize_attrs(built)?;
    Ok(CompiledNode::Component(infer_loader(built)))
}

fn first_entry(value: &Value) -> Option<(&str, &Value)> {
    let mapping = value.as_mapping()?;
    let (key, child) = mapping.iter().next()?;
    Some((key.as_str()?, child))
}

fn build_component(
    kind: RuleKind,
    caps: &Captures<'_>,
    key: &str,
    value: &Value,
) -> CompileResult<Component> {
    let component = match kind {
        RuleKind::Dashboard => Component {
            component: ComponentKind::Root,
            args: Some(single_arg("title", Value::String(caps[1].to_string()))),
            data: compile_children(key, value)?,
        },
        RuleKind::Text => Component {
            component: ComponentKind::Text,
            args: Some(single_arg("tagName", Value::String(caps[1].to_string()))),
            data: ComponentData::Value(value.clone()),
        },
        RuleKind::Rows => Component {
            component: ComponentKind::Rows,
            args: None,
            data: compile_children(key, value)?,
        },
        RuleKind::SizedColumns => {
            let count: u64 =
                caps[1]
                    .parse()
                    .map_err(|source| CompileError::InvalidColumnCount {
                        value: caps[1].to_string(),
                        source,
                    })?;
            Component {
                component: ComponentKind::Columns,
                args: Some(single_arg("columns", Value::Number(count.into()))),
                data: compile_children(key, value)?,
            }
        }
        RuleKind::Columns => Component {
            component: ComponentKind::Columns,
            args: None,
            data: compile_children(key, value)?,
        },
        RuleKind::Dropdown => {
            let mut args = single_arg("variable", Value::String(caps[1].to_string()));
            args.insert("default".to_string(), Value::String(caps[2].to_string()));
            Component {
                component: ComponentKind::Dropdown,
                args: Some(args),
                data: ComponentData::Value(value.clone()),
            }
        }
        RuleKind::Chart => chart_component(caps[2].to_string(), caps.get(1).is_some(), value),
        RuleKind::PlaceholderChart => {
            chart_component(format!("${{{}}}", &caps[2]), caps.get(1).is_some(), value)
        }
    };
    Ok(component)
}

fn chart_component(chart_type: String, stacked: bool, value: &Value) -> Component {
    let mut args = single_arg("type", Value::String(chart_type));
    args.insert("stacked".to_string(), Value::Bool(stacked));
    Component {
        component: ComponentKind::Chart,
        args: Some(args),
        data: ComponentData::Value(value.clone()),
    }
}

fn compile_children(key: &str, value: &Value) -> CompileResult<ComponentData> {
    let children = value
        .as_sequence()
        .ok_or_else(|| CompileError::ExpectedSequence {
            key: key.to_string(),
        })?;
    let compiled = children
        .iter()
        .map(compile_node)
        .collect::<CompileResult<Vec<_>>>()?;
    Ok(ComponentData::Children(compiled))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(src: &str) -> Value {
        serde_yaml::from_str(src).unwrap()
    }

    #[test]
    fn test_scalar_value_passes_through() {
        let node = compile_value(&yaml("plain string"));
        assert_eq!(node, CompiledNode::PassThrough(yaml("plain string")));
    }

    #[test]
    fn test_unmatched_mapping_passes_through() {
        let node = compile_value(&yaml("foobar: 42"));
        assert!(node.is_pass_through());
    }

    #[test]
    fn test_multi_key_mapping_dispatches_on_first_key() {
        let node = compile_value(&yaml("rows: []\nignored: true"));
        let component = node.as_component().unwrap();
        assert_eq!(component.component, ComponentKind::Rows);
    }

    #[test]
    fn test_sequence_rule_rejects_scalar_value() {
        let node = compile_value(&yaml("rows: not-a-sequence"));
        let component = node.as_component().unwrap();
        // Whole-document failure: the output is the error-display tree.
        let title = component.args.as_ref().unwrap()["title"].as_str().unwrap();
        assert_eq!(title, "'rows' expects a sequence of child nodes");
    }

    #[test]
    fn test_deep_failure_fails_the_whole_document() {
        let node = compile_str("dashboard \"D\":\n  - rows: 7\n");
        let component = node.as_component().unwrap();
        assert_eq!(
            component.args.as_ref().unwrap()["title"].as_str().unwrap(),
            "'rows' expects a sequence of child nodes"
        );
    }

    #[test]
    fn test_null_document_is_empty_input() {
        let node = compile_value(&Value::Null);
        let component = node.as_component().unwrap();
        assert_eq!(
            component.args.as_ref().unwrap()["title"].as_str().unwrap(),
            "A non-empty input file is required"
        );
    }
}
