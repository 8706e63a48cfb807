use super::*;

enum Nested {
    Leaf(i64),
    Negate(Box<Nested>),
}

fn build(depth: usize) -> Nested {
    let mut node = Nested::Leaf(7);
    for _ in 0..depth {
        node = Nested::Negate(Box::new(node));
    }
    node
}

fn walk(node: &Nested) -> i64 {
    ensure_sufficient_stack(|| match node {
        Nested::Leaf(n) => *n,
        Nested::Negate(inner) => -walk(inner),
    })
}

fn unwind(mut node: Nested) {
    // Iterative drop so the test itself does not recurse in `Drop`.
    while let Nested::Negate(inner) = node {
        node = *inner;
    }
}

#[test]
fn shallow_walk_is_a_plain_call() {
    let tree = build(3);
    assert_eq!(walk(&tree), -7);
    unwind(tree);
}

#[test]
fn deep_walk_grows_the_stack() {
    // Well past what a default 8MB thread stack survives unguarded.
    let tree = build(200_001);
    assert_eq!(walk(&tree), -7);
    unwind(tree);
}

#[test]
fn passes_results_through() {
    let result: Result<i64, &str> = ensure_sufficient_stack(|| Err("boom"));
    assert_eq!(result, Err("boom"));
}

