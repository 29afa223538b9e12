//! Dashboard DSL compiler
//!
//! Compiles declarative YAML dashboard documents into a normalized tree of
//! typed component nodes for a renderer to consume. The compiler itself does
//! no I/O and never fails: malformed or empty input compiles to a standard
//! error-display tree the renderer shows like any other dashboard.
//!
//! ## Quick start
//!
//! ```rust
//! use dashc::ComponentKind;
//!
//! let tree = dashc::compile_str(r#"
//! dashboard "Sales":
//!   - rows:
//!       - p text: Hello
//! "#);
//!
//! let root = tree.as_component().expect("dashboards compile to components");
//! assert_eq!(root.component, ComponentKind::Root);
//! ```

// Core error handling
pub mod error;

// Rule table, tree building, and post-processing passes
pub mod compiler;

// Public re-exports
pub use compiler::{
    compile_str, compile_value, error_component, Args, Component, ComponentData, ComponentKind,
    CompiledNode,
};
pub use error::{CompileError, CompileResult};
