//! Provides a self-pruning Trie implementation for storing keys composed
//! of sequences of atoms. The trie is a set: a key is either present or
//! absent, and removing a key also unlinks every node which no longer
//! contributes to a remaining key.
//!
//! Atoms must support the TrieAtom trait.
//!
//! The interface relies on iterators to insert, remove, check for existence
//! of keys. Because the trie is based on the concept of atoms, then it
//! is up to the user to decide what kind of atoms to use to make most sense
//! of the keys we are storing.
//!
//! This flexibility can be really useful when string processing. Here are
//! three examples which show that we can work with keys of:
//!  - chars
//!  - grapheme clusters
//!  - &str ('words')
//!
//! depending on what type of atom granularity we wish to use when
//! interacting with our strings.
//!
//! Example 1
//! ```
//! use prefixset::trie::Trie;
//!
//! let mut trie = Trie::new();
//! let input = "abcdef".chars();
//! trie.insert(input.clone());
//!
//! // Anything which implements IntoIterator<Item=char> can now be used
//! // to interact with our Trie
//! assert!(trie.contains(input.clone())); // Clone the original iterator
//! assert!(trie.contains("abcdef".chars())); // Create a new iterator
//! assert!(trie.contains(['a', 'b', 'c', 'd', 'e', 'f'])); // Build an array, etc...
//! assert!(trie.remove(input.clone()));
//! assert!(!trie.contains(input));
//! ```
//!
//! Example 2
//! ```
//! use prefixset::trie::Trie;
//! use unicode_segmentation::UnicodeSegmentation;
//!
//! let mut trie: Trie<&str> = Trie::new();
//! let s = "a̐éö̲\r\n";
//! let input = s.graphemes(true);
//! trie.insert(input.clone());
//! // Anything which implements IntoIterator<Item=&str> can now be used
//! // to interact with our Trie
//! assert!(trie.contains(input.clone()));
//! assert!(trie.remove(input.clone()));
//! assert!(!trie.contains(input));
//! ```
//!
//! Example 3
//! ```
//! use prefixset::trie::Trie;
//!
//! let mut trie = Trie::new();
//! let input = "the quick brown fox".split_whitespace();
//! trie.insert(input.clone());
//!
//! // Anything which implements IntoIterator<Item=&str> can now be used
//! // to interact with our Trie
//! assert!(trie.contains(input.clone()));
//! assert!(trie.contains_prefix("the quick brown".split_whitespace()));
//! assert!(trie.remove(input.clone()));
//! assert!(!trie.contains(input));
//! ```
//!
//! Removal prunes. Once a key is removed, any nodes which served no other
//! key are unlinked, so prefix queries stop matching dead branches:
//!
//! Example 4
//! ```
//! use prefixset::trie::TrieString;
//!
//! let mut trie = TrieString::new();
//! trie.insert("abc".chars());
//! assert!(trie.contains_prefix("a".chars()));
//! trie.remove("abc".chars());
//! assert!(!trie.contains_prefix("a".chars()));
//! ```
//!
//! Typical usages for this data structure:
//!  - Membership testing over large key populations with significant
//!    amounts of sub-key duplication
//!  - Prefix matching keys
//!  - Scanning token streams against a dictionary
//!  - ...

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// Atoms which we wish to store in a Trie must implement
/// TrieAtom.
pub trait TrieAtom: Copy + Default + PartialEq {}

// Blanket implementation which satisfies the compiler
impl<A> TrieAtom for A
where
    A: Copy + Default + PartialEq,
{
    // Nothing to implement, since A already supports the other traits.
    // It has the functions it needs already
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub(crate) struct Node<A> {
    pub(crate) children: Vec<Node<A>>,
    pub(crate) atom: A,
    pub(crate) terminated: bool,
}

/// Stores a set of atom sequences as individual nodes.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct Trie<A> {
    pub(crate) head: Node<A>,
    count: usize,
}

/// Since the most common use of a trie is to store the chars of a String,
/// a convenience type is provided for that.
pub type TrieString = Trie<char>;

impl<A: TrieAtom> Node<A> {
    fn new(atom: A) -> Self {
        Self {
            atom,
            ..Default::default()
        }
    }

    fn prunable(&self) -> bool {
        !self.terminated && self.children.is_empty()
    }
}

impl<A: TrieAtom> Trie<A> {
    /// Create a new Trie.
    pub fn new() -> Self {
        Self {
            head: Node::default(),
            ..Default::default()
        }
    }

    /// Clear the Trie.
    pub fn clear(&mut self) {
        self.head = Node::default();
        self.count = 0;
    }

    /// Does the Trie contain the supplied key?
    ///
    /// This is an exact match: a key which is merely a prefix of some
    /// longer inserted key is not contained. An empty key is contained
    /// only if the empty key was inserted.
    pub fn contains<K: IntoIterator<Item = A>>(&self, key: K) -> bool {
        self.find(key).map_or(false, |n| n.terminated)
    }

    /// Does the Trie contain the supplied prefix?
    ///
    /// Existence of the path is sufficient, so every inserted key also
    /// matches as a prefix. An empty prefix always matches.
    pub fn contains_prefix<P: IntoIterator<Item = A>>(&self, prefix: P) -> bool {
        self.find(prefix).is_some()
    }

    /// How many keys does the Trie contain?
    #[inline(always)]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Insert the key into the Trie. Returns true if the key was not
    /// already present.
    ///
    /// Inserting allocates at most one node per atom of the key and is
    /// idempotent. The empty key is legal and marks the head of the
    /// Trie itself.
    pub fn insert<K: IntoIterator<Item = A>>(&mut self, key: K) -> bool {
        let mut node = &mut self.head;
        for atom in key {
            let node_index = match node.children.iter().position(|x| x.atom == atom) {
                Some(i) => i,
                None => {
                    node.children.push(Node::new(atom));
                    node.children.len() - 1
                }
            };
            // Safe to index here since we know we have this node in our children
            node = &mut node.children[node_index];
        }
        if node.terminated {
            false
        } else {
            node.terminated = true;
            self.count += 1;
            true
        }
    }

    /// Is the Trie empty?
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Remove the key from the Trie. Returns true if the key was present.
    ///
    /// Removing a key which is absent is a no-op. Removal unlinks every
    /// node which is left both unterminated and childless, so branches
    /// which served only the removed key are reclaimed. Keys which share
    /// a prefix with the removed key are untouched.
    pub fn remove<K: IntoIterator<Item = A>>(&mut self, key: K) -> bool {
        // The head is never unlinked, so its prune signal is dropped here.
        let (removed, _) = Self::remove_descend(&mut self.head, key.into_iter());
        if removed {
            self.count -= 1;
        }
        removed
    }

    // Recursive removal step. Returns (removed, prunable): whether the key
    // was present, and whether this node should now be unlinked by its
    // parent. A node is only ever unlinked by its parent, never by itself.
    fn remove_descend<I: Iterator<Item = A>>(node: &mut Node<A>, mut atoms: I) -> (bool, bool) {
        let atom = match atoms.next() {
            Some(atom) => atom,
            None => {
                if !node.terminated {
                    return (false, false);
                }
                // Clear the flag before judging prunability, otherwise a
                // childless leaf stays both linked and searchable.
                node.terminated = false;
                return (true, node.prunable());
            }
        };
        let node_index = match node.children.iter().position(|x| x.atom == atom) {
            Some(i) => i,
            None => return (false, false),
        };
        let (removed, prune_child) = Self::remove_descend(&mut node.children[node_index], atoms);
        if prune_child {
            node.children.swap_remove(node_index);
            return (removed, node.prunable());
        }
        (removed, false)
    }

    fn find<K: IntoIterator<Item = A>>(&self, key: K) -> Option<&Node<A>> {
        let mut node = &self.head;
        for atom in key {
            node = node.children.iter().find(|x| x.atom == atom)?;
        }
        Some(node)
    }
}
