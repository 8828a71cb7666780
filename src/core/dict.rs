use std::collections::HashMap;

/// A single `@SQ` record loaded from a sequence dictionary file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictEntry {
    /// Contig name from the `SN:` field
    pub name: String,

    /// Full original line text, including its terminator. Emitted verbatim
    /// when this contig is substituted into the header.
    pub line: String,
}

/// An in-memory sequence dictionary: `@SQ` entries in file order, indexed by
/// contig name.
///
/// Built once by [`crate::parsing::dict`] and read-only afterwards. When the
/// same contig name appears more than once, the first-loaded entry wins on
/// lookup; later duplicates stay in [`entries`](Self::entries) but are
/// shadowed in the index.
#[derive(Debug, Clone, Default)]
pub struct SqDict {
    entries: Vec<DictEntry>,
    by_name: HashMap<String, usize>,
}

impl SqDict {
    #[must_use]
    pub fn new(entries: Vec<DictEntry>) -> Self {
        let mut by_name = HashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            // entry() keeps the first occurrence for duplicate names
            by_name.entry(entry.name.clone()).or_insert(i);
        }
        Self { entries, by_name }
    }

    /// Look up the dictionary line for a contig name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.by_name
            .get(name)
            .map(|&i| self.entries[i].line.as_str())
    }

    /// Entries in the order they appeared in the dictionary source.
    #[must_use]
    pub fn entries(&self) -> &[DictEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
