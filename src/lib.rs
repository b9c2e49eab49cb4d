//! Provides a self-pruning Trie implementation for storing set membership
//! of keys composed of sequences of atoms.
//!
//! Atoms must support the [`crate::trie::TrieAtom`] trait.
//!
//! The interface relies on iterators to insert, remove, check for existence
//! of keys. Because the trie is based on the concept of atoms, then it
//! is up to the user to decide what kind of atoms to use to make most sense
//! of the keys we are storing. This flexibility can be really useful when
//! string processing: (atoms can be `char` or `&str` or ...?) or when
//! working with numeric tries.
//!
//! Since the most common use of a trie is to store the chars of a String,
//! a convenience type, [`crate::trie::TrieString`] is provided.
//!
//! If that type doesn't suffice, then you must use the
//! [`crate::trie::Trie`] type directly.
//!
//! Removal maintains a structural guarantee: every node in the trie is
//! either the end of an inserted key or lies on the path to one. Nodes
//! which stop satisfying that are unlinked as part of removal, so the trie
//! never accumulates dead branches.
//!
//! Examples:
//! * trie : [`crate::trie`]
//!
//! Typical usages for this data structure:
//!  - Membership testing over large key populations with significant
//!    amounts of sub-key duplication
//!  - Prefix matching keys
//!  - Scanning token streams against a dictionary
//!  - ...

#[cfg(feature = "serde")]
extern crate serde_crate;

pub mod trie;
