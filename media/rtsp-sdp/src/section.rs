use crate::ROOT_FORMAT;
use bytesstr::BytesStr;

/// A single section of a [`SessionDescription`](crate::SessionDescription).
///
/// Either the session level section or the block started by a `m=` line, also referred to as track.
#[derive(Debug, Clone)]
pub struct Section {
    /// Everything following `m=` in the line that opened the section, [`ROOT_FORMAT`] for the session level
    pub format: BytesStr,

    /// The section's attributes in order of appearance
    pub attributes: Attributes,
}

impl Section {
    pub(crate) fn new(format: BytesStr) -> Self {
        Self {
            format,
            attributes: Attributes::default(),
        }
    }

    pub(crate) fn root() -> Self {
        Self::new(BytesStr::from_static(ROOT_FORMAT))
    }
}

/// Ordered list of key-value pairs which may contain the same key multiple times
///
/// Lookups only ever see the first entry with the given key.
#[derive(Debug, Clone, Default)]
pub struct Attributes {
    entries: Vec<(BytesStr, BytesStr)>,
}

impl Attributes {
    pub(crate) fn push(&mut self, key: BytesStr, value: BytesStr) {
        self.entries.push((key, value));
    }

    /// Value of the first entry with the given key
    pub fn get(&self, key: &str) -> Option<&BytesStr> {
        self.entries
            .iter()
            .find(|(k, _)| **k == *key)
            .map(|(_, value)| value)
    }

    /// Values of all entries with the given key
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a BytesStr> + 'a {
        self.entries
            .iter()
            .filter(move |(k, _)| **k == *key)
            .map(|(_, value)| value)
    }

    /// All entries in order of appearance
    pub fn iter(&self) -> impl Iterator<Item = (&BytesStr, &BytesStr)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }

    /// Number of entries, duplicates included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns if there are no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
