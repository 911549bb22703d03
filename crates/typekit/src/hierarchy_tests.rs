use crate::{ClassHierarchy, NoHierarchy, StaticHierarchy};

fn iterators() -> StaticHierarchy {
    StaticHierarchy::new()
        .with_parent("ArrayIterator", "SeekableIterator")
        .with_parent("ArrayIterator", "Countable")
        .with_parent("SeekableIterator", "Iterator")
        .with_parent("Iterator", "Traversable")
}

#[test]
fn direct_parent() {
    let hierarchy = iterators();
    assert!(hierarchy.is_subclass_of("ArrayIterator", "Countable"));
    assert!(hierarchy.is_subclass_of("Iterator", "Traversable"));
}

#[test]
fn transitive_parent() {
    let hierarchy = iterators();
    assert!(hierarchy.is_subclass_of("ArrayIterator", "Traversable"));
    assert!(hierarchy.is_subclass_of("SeekableIterator", "Traversable"));
}

#[test]
fn not_a_parent() {
    let hierarchy = iterators();
    assert!(!hierarchy.is_subclass_of("Traversable", "Iterator"));
    assert!(!hierarchy.is_subclass_of("Iterator", "Countable"));
    assert!(!hierarchy.is_subclass_of("Unknown", "Traversable"));
}

#[test]
fn cycles_terminate() {
    let hierarchy = StaticHierarchy::new()
        .with_parent("A", "B")
        .with_parent("B", "C")
        .with_parent("C", "A");

    assert!(hierarchy.is_subclass_of("A", "C"));
    assert!(hierarchy.is_subclass_of("A", "A"));
    assert!(!hierarchy.is_subclass_of("A", "D"));
}

#[test]
fn parents_in_declaration_order() {
    let hierarchy = iterators();

    let parents: Vec<_> = hierarchy.parents("ArrayIterator").collect();
    assert_eq!(parents, ["SeekableIterator", "Countable"]);
    assert_eq!(hierarchy.parents("Traversable").count(), 0);
    assert_eq!(hierarchy.len(), 3);
}

#[test]
fn extend_merges_parents() {
    let mut hierarchy = StaticHierarchy::new()
        .extend("ArrayObject", ["IteratorAggregate", "Countable"])
        .extend("ArrayObject", ["ArrayAccess", "Countable"]);
    hierarchy.add_parent("IteratorAggregate", "Traversable");

    let parents: Vec<_> = hierarchy.parents("ArrayObject").collect();
    assert_eq!(parents, ["IteratorAggregate", "Countable", "ArrayAccess"]);
    assert!(hierarchy.is_subclass_of("ArrayObject", "Traversable"));
}

#[test]
fn empty_hierarchy() {
    let hierarchy = StaticHierarchy::new();

    assert!(hierarchy.is_empty());
    assert!(!hierarchy.is_subclass_of("A", "A"));
    assert!(!NoHierarchy.is_subclass_of("A", "B"));
}

#[test]
fn closure_hierarchy() {
    let hierarchy = |class: &str, parent: &str| class.starts_with(parent);

    assert!(hierarchy.is_subclass_of("FooBar", "Foo"));
    assert!(!hierarchy.is_subclass_of("Bar", "Foo"));
}
