//! Loader inference for URL-backed data
//!
//! A component whose data is a literal HTTP(S) URL string gets a `loader`
//! argument derived from the file extension of the URL's final path segment.

use serde_yaml::Value;
use tracing::debug;
use url::Url;

use super::component::{Args, Component, ComponentData};

/// Merge `{loader: <extension>}` into the args of URL-backed components
///
/// Explicit args win collisions, letting authors override the inference.
/// Applying this pass twice yields the same component as applying it once.
pub(crate) fn infer_loader(component: Component) -> Component {
    let extension = match &component.data {
        ComponentData::Value(Value::String(data)) => url_extension(data),
        _ => None,
    };
    let Some(extension) = extension else {
        return component;
    };
    debug!("inferred loader '{}' for url-backed component", extension);

    let mut args = Args::new();
    args.insert("loader".to_string(), Value::String(extension));
    if let Some(existing) = component.args {
        args.extend(existing);
    }

    Component {
        component: component.component,
        args: Some(args),
        data: component.data,
    }
}

/// Extension of the final path segment of a whole-string http(s) URL
///
/// Query and fragment are not part of the segment; a segment without a dot
/// (or with nothing after it) infers no loader.
fn url_extension(data: &str) -> Option<String> {
    let url = Url::parse(data).ok()?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return None;
    }
    let mut segments = url.path_segments()?;
    let segment = segments.next_back()?;
    let (_, extension) = segment.rsplit_once('.')?;
    if extension.is_empty() {
        return None;
    }
    Some(extension.to_string())
}
