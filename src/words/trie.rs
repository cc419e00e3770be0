//! Prefix trie of words played in the current game.
//!
//! Nodes live in a flat arena and refer to children by index, one slot per
//! letter `A-Z`. A node that terminates a played word stores the play index
//! assigned when the word was added.

const ALPHABET_SIZE: usize = 26;
const ROOT: usize = 0;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Node {
    children: [Option<u32>; ALPHABET_SIZE],
    /// Play index of the word ending here, if any.
    index: Option<u32>,
}

/// Append-only set of played words with exact and prefix lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordTrie {
    nodes: Vec<Node>,
    next_index: u32,
}

impl Default for WordTrie {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps an uppercase ASCII letter to its child slot.
fn slot(b: u8) -> Option<usize> {
    b.is_ascii_uppercase().then(|| (b - b'A') as usize)
}

fn is_valid_word(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_uppercase())
}

impl WordTrie {
    pub fn new() -> Self {
        WordTrie {
            nodes: vec![Node::default()],
            next_index: 0,
        }
    }

    /// Adds a word and returns its play index.
    ///
    /// Returns None, leaving the trie untouched, unless the word is a
    /// non-empty run of `A-Z`. Re-adding a word succeeds and gives it a new
    /// index.
    pub fn add(&mut self, word: &str) -> Option<u32> {
        if !is_valid_word(word) {
            return None;
        }

        let mut current = ROOT;
        for b in word.bytes() {
            let s = slot(b)?;
            current = match self.nodes[current].children[s] {
                Some(child) => child as usize,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(Node::default());
                    self.nodes[current].children[s] = Some(child as u32);
                    child
                }
            };
        }

        let index = self.next_index;
        self.next_index += 1;
        self.nodes[current].index = Some(index);
        Some(index)
    }

    /// Walks the path spelled by `word`, returning the final node.
    fn walk(&self, word: &str) -> Option<&Node> {
        if word.is_empty() {
            return None;
        }
        let mut current = ROOT;
        for b in word.bytes() {
            current = self.nodes[current].children[slot(b)?]? as usize;
        }
        Some(&self.nodes[current])
    }

    /// True if `word` was added as a whole word.
    pub fn contains(&self, word: &str) -> bool {
        self.walk(word).is_some_and(|n| n.index.is_some())
    }

    /// True if `word` is a path in the trie: a played word or a prefix of one.
    pub fn contains_prefix(&self, word: &str) -> bool {
        self.walk(word).is_some()
    }

    /// Play index of `word`, if it was added.
    pub fn index_of(&self, word: &str) -> Option<u32> {
        self.walk(word).and_then(|n| n.index)
    }

    /// Number of distinct words stored.
    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|n| n.index.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All stored words ordered by play index.
    pub fn words(&self) -> Vec<String> {
        let mut found: Vec<(u32, String)> = Vec::new();
        let mut stack: Vec<(usize, String)> = vec![(ROOT, String::new())];
        while let Some((node, prefix)) = stack.pop() {
            if let Some(index) = self.nodes[node].index {
                found.push((index, prefix.clone()));
            }
            for (s, child) in self.nodes[node].children.iter().enumerate() {
                if let Some(child) = child {
                    let mut word = prefix.clone();
                    word.push((b'A' + s as u8) as char);
                    stack.push((*child as usize, word));
                }
            }
        }
        found.sort_unstable_by_key(|(index, _)| *index);
        found.into_iter().map(|(_, word)| word).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trie_contains_nothing() {
        let trie = WordTrie::new();
        assert!(!trie.contains(""));
        assert!(!trie.contains("WORD"));
        assert!(!trie.contains("word"));
        assert!(!trie.contains("1@$%^&*"));
        assert!(!trie.contains_prefix(""));
        assert!(trie.is_empty());
    }

    #[test]
    fn malformed_words_are_rejected_without_mutation() {
        let mut trie = WordTrie::new();
        for bad in ["", "1@$%^&* /~", "lower", "UPPERlower", "HAS SPACE", "ÉCOLE"] {
            assert_eq!(trie.add(bad), None, "{bad:?} should be rejected");
            assert!(!trie.contains(bad));
        }
        assert_eq!(trie, WordTrie::new());
    }

    #[test]
    fn long_word_is_stored() {
        let mut trie = WordTrie::new();
        let long = "LONG".repeat(15);
        assert_eq!(trie.add(&long), Some(0));
        assert!(trie.contains(&long));
        assert!(!trie.contains("LONG"));
        assert!(trie.contains_prefix("LONG"));
    }

    #[test]
    fn indices_increase_in_insertion_order() {
        let mut trie = WordTrie::new();
        assert_eq!(trie.add("CAT"), Some(0));
        assert_eq!(trie.add("DOG"), Some(1));
        assert_eq!(trie.add("CATS"), Some(2));
        assert_eq!(trie.index_of("CAT"), Some(0));
        assert_eq!(trie.index_of("CATS"), Some(2));
        assert_eq!(trie.index_of("CA"), None);
    }

    #[test]
    fn readding_bumps_index_without_new_nodes() {
        let mut trie = WordTrie::new();
        trie.add("HELLO");
        let nodes = trie.nodes.len();
        assert_eq!(trie.add("HELLO"), Some(1));
        assert_eq!(trie.nodes.len(), nodes);
        assert!(trie.contains("HELLO"));
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn exact_and_prefix_lookups_differ() {
        let mut trie = WordTrie::new();
        trie.add("BROWN");
        assert!(trie.contains("BROWN"));
        assert!(!trie.contains("BROW"));
        for prefix in ["B", "BR", "BRO", "BROW", "BROWN"] {
            assert!(trie.contains_prefix(prefix));
        }
        assert!(!trie.contains_prefix("BROWNS"));
        assert!(!trie.contains_prefix("CROWN"));
        assert!(!trie.contains_prefix("brow"));
    }

    #[test]
    fn words_are_listed_in_play_order() {
        let mut trie = WordTrie::new();
        for w in ["THE", "QUICK", "BROWN", "FOX", "THEY"] {
            trie.add(w);
        }
        assert_eq!(trie.words(), vec!["THE", "QUICK", "BROWN", "FOX", "THEY"]);

        trie.add("THE");
        assert_eq!(trie.words(), vec!["QUICK", "BROWN", "FOX", "THEY", "THE"]);
    }
}
