//! Output model for compiled dashboards
//!
//! A compiled document is a tree of [`Component`] nodes with a closed set of
//! tags. Input values that match no rule survive in the tree as
//! [`CompiledNode::PassThrough`], holding the original value unchanged and
//! untagged, so consumers can always tell the two apart.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_yaml::Value;

/// The closed set of component tags the renderer understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Root,
    Text,
    Rows,
    Columns,
    Dropdown,
    Chart,
}

/// Argument mapping attached to a component
///
/// Keyed by argument name; insertion order is irrelevant to consumers, so a
/// sorted map keeps serialized output deterministic.
pub type Args = BTreeMap<String, Value>;

/// One compiled dashboard node
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Component {
    pub component: ComponentKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub args: Option<Args>,
    pub data: ComponentData,
}

/// Payload of a component: compiled children or a raw leaf value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ComponentData {
    Children(Vec<CompiledNode>),
    Value(Value),
}

/// Result of compiling one input node
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CompiledNode {
    /// The node's key matched a rule and was built into a component
    Component(Component),
    /// The node matched no rule and is emitted unchanged
    PassThrough(Value),
}

impl CompiledNode {
    /// The compiled component, if this node matched a rule
    pub fn as_component(&self) -> Option<&Component> {
        match self {
            CompiledNode::Component(component) => Some(component),
            CompiledNode::PassThrough(_) => None,
        }
    }

    /// Whether this node is an unmatched input value emitted unchanged
    pub fn is_pass_through(&self) -> bool {
        matches!(self, CompiledNode::PassThrough(_))
    }
}

/// Standard error-display tree returned whenever compilation fails
///
/// Shaped like an ordinary dashboard: a root titled with the message and a
/// single paragraph repeating it.
pub fn error_component(message: &str) -> Component {
    let paragraph = Component {
        component: ComponentKind::Text,
        args: Some(single_arg("tagName", Value::String("p".to_string()))),
        data: ComponentData::Value(Value::String(message.to_string())),
    };
    Component {
        component: ComponentKind::Root,
        args: Some(single_arg("title", Value::String(message.to_string()))),
        data: ComponentData::Children(vec![CompiledNode::Component(paragraph)]),
    }
}

pub(crate) fn single_arg(key: &str, value: Value) -> Args {
    let mut args = Args::new();
    args.insert(key.to_string(), value);
    args
}
