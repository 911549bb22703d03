//! Class-hierarchy oracles used by object identity tests.
//!
//! The type model never inspects classes itself. Whenever an object type
//! must decide whether its class "is a" given class or interface, it asks a
//! [`ClassHierarchy`] supplied by the host.

use indexmap::{IndexMap, IndexSet};

/// Answers "does `class` extend or implement `parent`".
///
/// Implementations need not handle `class == parent`; callers test name
/// equality first.
pub trait ClassHierarchy {
    fn is_subclass_of(&self, class: &str, parent: &str) -> bool;
}

impl<F> ClassHierarchy for F
where
    F: Fn(&str, &str) -> bool,
{
    fn is_subclass_of(&self, class: &str, parent: &str) -> bool {
        self(class, parent)
    }
}

/// Hierarchy that knows no relationships: only exact names match.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoHierarchy;

impl ClassHierarchy for NoHierarchy {
    fn is_subclass_of(&self, _class: &str, _parent: &str) -> bool {
        false
    }
}

/// Fixed class → direct parents table with transitive lookup.
///
/// ```
/// use typekit::{ClassHierarchy, StaticHierarchy};
///
/// let hierarchy = StaticHierarchy::new()
///     .with_parent("ArrayIterator", "Iterator")
///     .with_parent("Iterator", "Traversable");
///
/// assert!(hierarchy.is_subclass_of("ArrayIterator", "Traversable"));
/// assert!(!hierarchy.is_subclass_of("Traversable", "Iterator"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct StaticHierarchy {
    parents: IndexMap<String, IndexSet<String>>,
}

impl StaticHierarchy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare that `class` directly extends or implements `parent`.
    pub fn with_parent(mut self, class: impl Into<String>, parent: impl Into<String>) -> Self {
        self.add_parent(class, parent);
        self
    }

    /// Declare several direct parents of `class` at once.
    pub fn extend<I, S>(mut self, class: impl Into<String>, parents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entry = self.parents.entry(class.into()).or_default();
        entry.extend(parents.into_iter().map(Into::into));
        self
    }

    pub fn add_parent(&mut self, class: impl Into<String>, parent: impl Into<String>) {
        self.parents
            .entry(class.into())
            .or_default()
            .insert(parent.into());
    }

    /// Direct parents of `class`, in declaration order.
    pub fn parents(&self, class: &str) -> impl Iterator<Item = &str> {
        self.parents
            .get(class)
            .into_iter()
            .flat_map(|parents| parents.iter().map(String::as_str))
    }

    /// Number of classes with at least one declared parent.
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }
}

impl ClassHierarchy for StaticHierarchy {
    fn is_subclass_of(&self, class: &str, parent: &str) -> bool {
        // Declared graphs may contain cycles; track what was already expanded.
        let mut visited: IndexSet<&str> = IndexSet::new();
        let mut stack: Vec<&str> = vec![class];

        while let Some(current) = stack.pop() {
            if !visited.insert(current) {
                continue;
            }
            for direct in self.parents(current) {
                if direct == parent {
                    return true;
                }
                stack.push(direct);
            }
        }

        false
    }
}
