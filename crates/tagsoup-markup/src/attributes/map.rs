use indexmap::IndexMap;
use serde::ser::{Serialize, Serializer};

/// One attribute as written in the source.
///
/// The value is raw: quotes removed, character references left alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Name with its original spelling.
    pub name: String,
    /// Raw value, empty for a bare attribute such as `disabled`.
    pub value: String,
}

impl Attribute {
    /// Create a new attribute with the given name and value.
    #[must_use]
    pub const fn new(name: String, value: String) -> Self {
        Self { name, value }
    }
}

/// Ordered attribute map with ASCII case-insensitive names.
///
/// Insertion order is kept. Inserting a name that is already present (in any
/// case) is a no-op, so the first occurrence in the source wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeMap {
    // Keyed by the lower-cased name.
    entries: IndexMap<String, Attribute>,
}

impl AttributeMap {
    /// An empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert unless the name is already present. Returns whether it was
    /// inserted.
    pub fn insert(&mut self, name: String, value: String) -> bool {
        let key = name.to_ascii_lowercase();
        if self.entries.contains_key(&key) {
            return false;
        }
        let _ = self.entries.insert(key, Attribute::new(name, value));
        true
    }

    /// Value for `name`, compared ASCII case-insensitively.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attribute(name).map(|attr| attr.value.as_str())
    }

    /// The full attribute (original name spelling included) for `name`.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.entries.get(&name.to_ascii_lowercase())
    }

    /// Whether `name` is present, compared ASCII case-insensitively.
    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.entries.contains_key(&name.to_ascii_lowercase())
    }

    /// Number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if there are no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(name, value)` pairs in source order, names as originally written.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.values(),
        }
    }

    /// Names in source order, as originally written.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(|attr| attr.name.as_str())
    }
}

/// Iterator over `(name, value)` pairs of an [`AttributeMap`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: indexmap::map::Values<'a, String, Attribute>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|attr| (attr.name.as_str(), attr.value.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a AttributeMap {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for AttributeMap {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (name, value) in iter {
            let _ = map.insert(name.into(), value.into());
        }
        map
    }
}

impl Serialize for AttributeMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}
