use super::MarkupNode;
use crate::text::normalize;

/// Namespace-scoped element lookup.
///
/// Paths are `/`-separated local names resolved against direct children,
/// like ElementTree's `find` with a single prefix mapping. An empty namespace
/// matches unqualified elements.
#[derive(Debug, Clone, Copy)]
pub struct Scope<'s> {
    namespace: &'s str,
}

impl<'s> Scope<'s> {
    pub fn new(namespace: &'s str) -> Self {
        Scope { namespace }
    }

    pub fn namespace(&self) -> &'s str {
        self.namespace
    }

    /// Whether `node` is `local` in this scope's namespace.
    pub fn is(&self, node: &MarkupNode, local: &str) -> bool {
        node.local_name() == local && node.namespace().unwrap_or("") == self.namespace
    }

    /// First element matching `path` below `node`.
    pub fn find<'a>(&self, node: Option<&'a MarkupNode>, path: &str) -> Option<&'a MarkupNode> {
        self.find_all(node, path).into_iter().next()
    }

    /// Every element matching `path` below `node`, in document order.
    pub fn find_all<'a>(&self, node: Option<&'a MarkupNode>, path: &str) -> Vec<&'a MarkupNode> {
        let Some(node) = node else {
            return Vec::new();
        };

        let mut current = vec![node];
        for step in path.split('/').filter(|step| !step.is_empty()) {
            current = current
                .into_iter()
                .flat_map(|parent| parent.children())
                .filter(|child| self.is(child, step))
                .collect();
            if current.is_empty() {
                break;
            }
        }
        current
    }

    /// Every descendant named `local`, at any depth, in document order.
    pub fn descendants<'a>(&self, node: Option<&'a MarkupNode>, local: &str) -> Vec<&'a MarkupNode> {
        let mut found = Vec::new();
        if let Some(node) = node {
            self.collect_descendants(node, local, &mut found);
        }
        found
    }

    fn collect_descendants<'a>(
        &self,
        node: &'a MarkupNode,
        local: &str,
        found: &mut Vec<&'a MarkupNode>,
    ) {
        for child in node.children() {
            if self.is(child, local) {
                found.push(child);
            }
            self.collect_descendants(child, local, found);
        }
    }
}

/// All text below `node`, whitespace collapsed. Empty for `None`.
pub fn simple_text(node: Option<&MarkupNode>) -> String {
    node.map(|n| normalize(&n.inner_text())).unwrap_or_default()
}
