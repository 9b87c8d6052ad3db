//! Internal node implementation for the alphanumeric trie.
//!
//! Each node owns a fixed-width array of child slots, one per alphabet symbol,
//! so branching is a single index operation. Children are exclusively owned
//! through `Box`; the tree has no sharing and no cycles.

/// A single node of the trie.
///
/// The node is terminal (the end of a stored key) exactly when `value` is
/// `Some`. Keeping the flag and the payload in one `Option` means a value can
/// never be read from a node that no key ends at.
#[derive(Debug)]
pub struct TrieNode<T> {
    /// Child slots indexed by symbol
    children: Box<[Option<Box<TrieNode<T>>>]>,

    /// The value of the key ending here, if any
    value: Option<T>,
}

impl<T> TrieNode<T> {
    /// Creates an empty, non-terminal node with `width` child slots
    pub fn new(width: usize) -> Self {
        TrieNode {
            children: std::iter::repeat_with(|| None).take(width).collect(),
            value: None,
        }
    }

    /// Number of child slots in this node
    pub fn width(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` if some key ends at this node
    pub fn is_terminal(&self) -> bool {
        self.value.is_some()
    }

    /// The value stored at this node, if it is terminal
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Marks this node terminal with `value`, returning the value it replaced.
    pub fn set_value(&mut self, value: T) -> Option<T> {
        self.value.replace(value)
    }

    /// The child in `slot`, if one has been created.
    ///
    /// Slots outside the node's width are treated as empty.
    pub fn child(&self, slot: usize) -> Option<&TrieNode<T>> {
        self.children.get(slot).and_then(|c| c.as_deref())
    }

    /// Returns the child in `slot`, creating an empty one if needed.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is outside the node's width. The trie validates its
    /// width against the alphabet at construction, so this cannot happen
    /// through the public API.
    pub fn child_or_insert(&mut self, slot: usize) -> &mut TrieNode<T> {
        let width = self.width();
        self.children[slot].get_or_insert_with(|| Box::new(TrieNode::new(width)))
    }

    /// Counts the nodes in this subtree, this node included
    pub fn subtree_nodes(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter().flatten().map(|child| &**child));
        }

        count
    }

    /// Counts the terminal nodes in this subtree
    #[cfg(test)]
    pub fn subtree_size(&self) -> usize {
        let mut count = if self.is_terminal() { 1 } else { 0 };

        for child in self.children.iter().flatten() {
            count += child.subtree_size();
        }

        count
    }
}

// Dropping a long chain of boxes recursively would use one stack frame per
// character, so children are detached and dropped from a heap stack instead.
impl<T> Drop for TrieNode<T> {
    fn drop(&mut self) {
        let mut stack: Vec<Box<TrieNode<T>>> = self.children.iter_mut().filter_map(Option::take).collect();

        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.iter_mut().filter_map(Option::take));
        }
    }
}
