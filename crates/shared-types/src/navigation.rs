use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::error::AppError;

/// Answers "is this permission code granted?".
///
/// Implemented by [`crate::Session`], `Option<Session>` and
/// [`crate::SessionAccessor`]. Implementations must answer `false` when in
/// doubt.
pub trait PermissionCheck {
    fn has_permission(&self, code: &str) -> bool;
}

impl<T: PermissionCheck + ?Sized> PermissionCheck for &T {
    fn has_permission(&self, code: &str) -> bool {
        (**self).has_permission(code)
    }
}

/// One entry in a role's menu.
///
/// `children: Some(_)` marks a group; `None` marks a leaf. Leaves always
/// carry a `path`. A group may carry one too, in which case its label is a link.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NavNode {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_permission: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<NavNode>>,
}

impl NavNode {
    /// A navigable leaf, visible to every session of the role.
    pub fn leaf(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: Some(path.into()),
            required_permission: None,
            children: None,
        }
    }

    pub fn group(label: impl Into<String>, children: Vec<NavNode>) -> Self {
        Self {
            label: label.into(),
            path: None,
            required_permission: None,
            children: Some(children),
        }
    }

    /// Gate this node behind a permission code.
    pub fn requires(mut self, code: impl Into<String>) -> Self {
        self.required_permission = Some(code.into());
        self
    }

    /// Make a group directly navigable.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn is_group(&self) -> bool {
        self.children.is_some()
    }

    fn gate_open(&self, check: &impl PermissionCheck) -> bool {
        match &self.required_permission {
            None => true,
            Some(code) => check.has_permission(code),
        }
    }
}

/// Return the part of `nodes` visible under `check`.
///
/// Leaves survive when their gate is open. Groups survive when their own
/// gate is open and at least one child survives; empty groups never do.
/// Sibling order is kept and the input is left untouched.
pub fn filter_tree(nodes: &[NavNode], check: &impl PermissionCheck) -> Vec<NavNode> {
    let mut visible = Vec::with_capacity(nodes.len());
    for node in nodes {
        match &node.children {
            Some(children) => {
                if !node.gate_open(check) {
                    continue;
                }
                let kept = filter_tree(children, check);
                if kept.is_empty() {
                    continue;
                }
                visible.push(NavNode {
                    label: node.label.clone(),
                    path: node.path.clone(),
                    required_permission: node.required_permission.clone(),
                    children: Some(kept),
                });
            }
            None => {
                if node.gate_open(check) {
                    visible.push(node.clone());
                }
            }
        }
    }
    visible
}

/// Copy of `nodes` with every permission gate removed.
pub fn strip_permissions(nodes: &[NavNode]) -> Vec<NavNode> {
    nodes
        .iter()
        .map(|node| NavNode {
            label: node.label.clone(),
            path: node.path.clone(),
            required_permission: None,
            children: node.children.as_deref().map(strip_permissions),
        })
        .collect()
}

/// Every permission code referenced anywhere in the tree, in pre-order.
pub fn permission_codes(nodes: &[NavNode]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut codes = Vec::new();
    collect_codes(nodes, &mut seen, &mut codes);
    codes
}

fn collect_codes(nodes: &[NavNode], seen: &mut HashSet<String>, codes: &mut Vec<String>) {
    for node in nodes {
        if let Some(code) = &node.required_permission {
            if seen.insert(code.clone()) {
                codes.push(code.clone());
            }
        }
        if let Some(children) = &node.children {
            collect_codes(children, seen, codes);
        }
    }
}

/// Check the structural invariants of a static menu.
///
/// Leaves need a path, sibling labels must be unique and groups must not
/// be empty. Errors are keyed by the slash-joined label path.
pub fn validate_tree(nodes: &[NavNode]) -> Result<(), AppError> {
    let mut problems = HashMap::new();
    validate_level(nodes, "", &mut problems);
    if problems.is_empty() {
        Ok(())
    } else {
        Err(AppError::validation("Invalid navigation tree", problems))
    }
}

fn validate_level(nodes: &[NavNode], prefix: &str, problems: &mut HashMap<String, String>) {
    let mut labels = HashSet::new();
    for node in nodes {
        let key = if prefix.is_empty() {
            node.label.clone()
        } else {
            format!("{prefix}/{}", node.label)
        };
        if node.label.trim().is_empty() {
            problems.insert(key.clone(), "empty label".to_string());
        }
        if !labels.insert(node.label.as_str()) {
            problems.insert(key.clone(), "duplicate sibling label".to_string());
        }
        match &node.children {
            Some(children) if children.is_empty() => {
                problems.insert(key, "group without children".to_string());
            }
            Some(children) => validate_level(children, &key, problems),
            None if node.path.is_none() => {
                problems.insert(key, "leaf without path".to_string());
            }
            None => {}
        }
    }
}
