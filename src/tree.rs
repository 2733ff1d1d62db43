//! The module tree behind the generated config.
//!
//! A `Node` is one fastfetch display entry. Nodes form a forest of
//! category trees that is flattened into the `modules` array of the
//! config document, pruned against probe results, and finally decorated
//! with connector glyphs and category colors.

use serde_json::{Map, Value};

use crate::theme::{glyphs, palette};

/// One display entry in the module tree.
///
/// Children are owned by their parent and keep insertion order through
/// flattening, pruning, and decoration.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// fastfetch module type (`"os"`, `"cpu"`, `"command"`, `"custom"`, ...)
    pub kind: String,

    /// Key text shown next to the module output; rewritten by [`Node::prettify`]
    pub label: String,

    /// Output template override; `None` means the module default
    format: Option<String>,

    /// Literal input for command-style modules
    text: Option<String>,

    /// Module-specific keys merged into the serialized record
    extra: Map<String, Value>,

    /// Category color; marks this node as a category root
    color: Option<String>,

    /// Ordered subtree
    pub children: Vec<Node>,
}

impl Node {
    /// Create a node with a module kind and key label.
    pub fn new(kind: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            label: label.into(),
            format: None,
            text: None,
            extra: Map::new(),
            color: None,
            children: Vec::new(),
        }
    }

    /// Set the output format template.
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Set the literal text input (command-style modules).
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Mark this node as a category root with the given color escape.
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Merge module-specific keys into the serialized record.
    ///
    /// Entries land after the built-in fields, so an `extra` key may
    /// override anything including `type` and `key`.
    pub fn extra(mut self, entries: Value) -> Self {
        if let Value::Object(map) = entries {
            self.extra.extend(map);
        }
        self
    }

    /// Append children in order and return the parent for chaining.
    pub fn with_children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    /// Serialize this node to a fastfetch module record.
    ///
    /// Merge order is fixed: `type`, `key`, `format` if set, `text` if
    /// set, then every `extra` entry. Later insertions win key
    /// conflicts.
    pub fn record(&self) -> Value {
        let mut record = Map::new();
        record.insert("type".into(), Value::String(self.kind.clone()));
        record.insert("key".into(), Value::String(self.label.clone()));
        if let Some(format) = &self.format {
            record.insert("format".into(), Value::String(format.clone()));
        }
        if let Some(text) = &self.text {
            record.insert("text".into(), Value::String(text.clone()));
        }
        for (key, value) in &self.extra {
            record.insert(key.clone(), value.clone());
        }
        Value::Object(record)
    }

    /// Collect this branch into `records`: own record first, then each
    /// child's full subtree in child order.
    pub fn collect_branch(&self, records: &mut Vec<Value>) {
        records.push(self.record());
        for child in &self.children {
            child.collect_branch(records);
        }
    }

    /// Remove the first node matching `kind`, together with its subtree.
    ///
    /// Immediate children are scanned in order before recursing, so a
    /// shallow match shadows a deeper one. At most one node is removed
    /// per call; the receiver itself is never removed. Returns whether
    /// a removal happened.
    pub fn remove_module(&mut self, kind: &str) -> bool {
        if let Some(position) = self.children.iter().position(|child| child.kind == kind) {
            self.children.remove(position);
            return true;
        }
        self.children
            .iter_mut()
            .any(|child| child.remove_module(kind))
    }

    /// Rewrite labels with connector glyphs and category colors.
    ///
    /// Call once per run, after pruning, as `prettify("", "")` on each
    /// root. The pass is not idempotent: a second call prefixes labels
    /// again.
    pub fn prettify(&mut self, inherited_color: &str, prefix: &str) {
        let color = match &self.color {
            Some(own) => {
                let own = own.clone();
                self.label = format!("{}{}", palette::BOLD, self.label);
                own
            }
            None => inherited_color.to_string(),
        };

        let child_prefix = if prefix.is_empty() {
            String::new()
        } else {
            self.label = format!("{}{} {}", prefix, glyphs::HBAR, self.label);
            // The incoming prefix always ends with the connector chosen
            // by the parent. A terminal connector needs no descending
            // line below it; a branch connector does.
            let mut derived = prefix.to_string();
            derived.pop();
            if prefix.ends_with(glyphs::END) {
                derived.push_str("   ");
            } else {
                derived.push_str(glyphs::VBAR);
                derived.push_str("  ");
            }
            derived
        };

        let last = self.children.len().saturating_sub(1);
        for (index, child) in self.children.iter_mut().enumerate() {
            let connector = if index == last {
                glyphs::END
            } else {
                glyphs::BRANCH
            };
            child.prettify(&color, &format!("{child_prefix}{color}{connector}"));
        }
    }
}

/// Flatten a forest into one ordered record list (depth-first,
/// pre-order), exactly the ordering fastfetch renders top to bottom.
pub fn flatten(forest: &[Node]) -> Vec<Value> {
    let mut records = Vec::new();
    for root in forest {
        root.collect_branch(&mut records);
    }
    records
}
