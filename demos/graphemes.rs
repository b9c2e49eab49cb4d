use prefixset::trie::Trie;
use unicode_segmentation::UnicodeSegmentation;

fn main() {
    // Create our trie
    let mut trie = Trie::new();

    // Insert some graphemes
    let s = "a̐éö̲\r\n";
    let input = s.graphemes(true);
    trie.insert(input.clone());
    assert!(trie.contains(input.clone()));
    assert!(trie.contains_prefix(s.graphemes(true).take(2)));
    assert!(trie.remove(input.clone()));
    assert!(!trie.contains(input));
    assert!(trie.is_empty());
}
