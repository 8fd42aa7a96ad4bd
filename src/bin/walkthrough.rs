//! Replays a scripted scenario against each collection and prints the results.
//!
//! ```text
//! walkthrough [avl|bst|deque|queue|stack|heap|all]
//! ```
//!
//! Set `RUST_LOG=trace` to see the rotations performed by the AVL tree.

use std::env;

use adt::{avl, bst, deque::Deque, heap::MaxHeap, queue::Queue, stack::Stack};
use anyhow::{bail, Result};
use log::info;

const SCENARIOS: [(&str, fn() -> Result<()>); 6] = [
    ("avl", avl_walkthrough),
    ("bst", bst_walkthrough),
    ("deque", deque_walkthrough),
    ("queue", queue_walkthrough),
    ("stack", stack_walkthrough),
    ("heap", heap_walkthrough),
];

fn main() -> Result<()> {
    env_logger::init();

    let which = env::args().nth(1).unwrap_or_else(|| "all".to_string());
    let selected: Vec<_> = SCENARIOS
        .iter()
        .filter(|(name, _)| which == "all" || which == *name)
        .collect();
    if selected.is_empty() {
        bail!("unknown collection {which:?}, expected avl, bst, deque, queue, stack, heap or all");
    }

    for (name, scenario) in selected {
        info!("running the {name} walkthrough");
        scenario()?;
    }
    Ok(())
}

fn found(hit: bool) -> &'static str {
    if hit {
        "Found"
    } else {
        "Not found"
    }
}

fn outcome(removed: bool) -> &'static str {
    if removed {
        "Success"
    } else {
        "Failed (expected)"
    }
}

fn avl_walkthrough() -> Result<()> {
    println!("=== AVL Test ===");

    let mut tree = avl::Tree::new();
    println!("\n1. Inserting elements: 5, 3, 7, 2, 4, 6, 8");
    tree.extend([5, 3, 7, 2, 4, 6, 8]);
    print!("{tree}");

    println!("\n2. Searching for elements:");
    println!("Search 4: {}", found(tree.contains(&4)));
    println!("Search 10: {}", found(tree.contains(&10)));

    println!("\n3. Removing leaf node (2):");
    tree.remove(&2);
    print!("{tree}");

    println!("\n4. Removing node with one child (7):");
    tree.remove(&7);
    print!("{tree}");

    println!("\n5. Removing node with two children (root 5):");
    tree.remove(&5);
    print!("{tree}");

    println!("\n6. Removing non-existent element (100):");
    println!("Result: {}", outcome(tree.remove(&100)));
    print!("{tree}");

    println!("\n7. Searching after deletions:");
    println!("Search 6: {}", found(tree.contains(&6)));
    println!("Search 5: {}", found(tree.contains(&5)));

    println!("\n8. Adding new elements after deletions: 1, 9");
    tree.insert(1);
    tree.insert(9);
    print!("{tree}");

    println!("\n9. Removing all elements one by one:");
    for x in [6, 3, 4, 8, 1, 9] {
        println!("Removing {x}:");
        tree.remove(&x);
        print!("{tree}");
    }

    println!("\n10. Removing from empty tree:");
    println!("Result: {}", outcome(tree.remove(&5)));

    println!("\n11. Creating new AVL tree and testing complex operations:");
    let mut tree: avl::Tree<_> = [10, 5, 15, 3, 7, 12, 17, 1, 4, 6, 8, 11, 13, 16, 18]
        .into_iter()
        .collect();
    println!("Initial tree:");
    print!("{tree}");
    println!("After removing 5 (node with two children):");
    tree.remove(&5);
    print!("{tree}");
    println!("After removing 15 (node with two children):");
    tree.remove(&15);
    print!("{tree}");

    println!("\n12. Inserting sorted sequence into new tree (1..15):");
    let tree: avl::Tree<_> = (1..=15).collect();
    print!("{tree}");
    println!("Height is {} for {} values.", tree.height(), tree.len());

    println!("\n=== All AVL tests completed ===");
    Ok(())
}

fn bst_walkthrough() -> Result<()> {
    println!("=== BST Test ===");

    let mut tree = bst::Tree::new();
    println!("\n1. Inserting elements: 5, 3, 7, 2, 4, 6, 8");
    tree.extend([5, 3, 7, 2, 4, 6, 8]);
    print!("{tree}");

    println!("\n2. Searching for elements:");
    println!("Search 4: {}", found(tree.contains(&4)));
    println!("Search 10: {}", found(tree.contains(&10)));

    for (label, x) in [
        ("3. Removing leaf node", 2),
        ("4. Removing node with one child", 7),
        ("5. Removing node with two children (root)", 5),
    ] {
        println!("\n{label} ({x}):");
        tree.remove(&x);
        print!("{tree}");
    }

    println!("\n6. Removing non-existent element (100):");
    println!("Result: {}", outcome(tree.remove(&100)));

    println!("\n7. Adding a duplicate (4):");
    tree.insert(4);
    print!("{tree}");
    println!("Size: {}", tree.len());

    println!("\n8. Inserting sorted sequence into new tree (1..8):");
    let tree: bst::Tree<_> = (1..=8).collect();
    print!("{tree}");
    println!("Height is {} for {} values.", tree.height(), tree.len());

    println!("\n=== All tests completed ===");
    Ok(())
}

fn deque_walkthrough() -> Result<()> {
    println!("=== Deque Tests ===");

    let mut deque = Deque::new();
    deque.push_front(1);
    deque.push_back(2);
    deque.push_front(0);
    println!("After pushes: {deque}");
    println!("pop_front(): {}", deque.pop_front()?);
    println!("pop_back(): {}", deque.pop_back()?);
    println!("pop_front(): {}", deque.pop_front()?);

    let mut words = Deque::new();
    words.push_back("hello");
    words.push_front("world");
    words.push_back("test");
    println!("String deque: {words}");

    let mut deque: Deque<_> = (0..5).collect();
    println!("After adding 0-4: {deque}");
    for _ in 0..3 {
        deque.pop_front()?;
    }
    println!("After removing 3 from front: {deque}");

    deque.clear();
    if let Err(err) = deque.pop_back() {
        println!("Caught error: {err}");
    }

    println!("\n=== All tests passed! ===");
    Ok(())
}

fn queue_walkthrough() -> Result<()> {
    println!("=== Queue Tests ===");

    let mut queue: Queue<i32> = Queue::new();
    println!("\nTest 1: empty queue");
    println!("{queue}");

    println!("\nTest 2: enqueue 1, 2, 3, 4, 5");
    queue.extend(1..=5);
    println!("{queue}");
    println!("is_empty(): {}", queue.is_empty());
    println!("len(): {}", queue.len());

    println!("\nTest 3: dequeue 3 elements");
    for _ in 0..3 {
        println!("dequeue(): {}", queue.dequeue()?);
    }
    println!("{queue}");

    println!("\nTest 4: enqueue 6, 7");
    queue.enqueue(6);
    queue.enqueue(7);
    println!("{queue}");

    println!("\nTest 5: dequeue until empty");
    while !queue.is_empty() {
        println!("dequeue(): {}", queue.dequeue()?);
        println!("{queue}");
    }

    println!("\nTest 6: dequeue from empty");
    if let Err(err) = queue.dequeue() {
        println!("Caught error: {err}");
    }

    println!("\n=== Queue Tests Completed ===");
    Ok(())
}

fn stack_walkthrough() -> Result<()> {
    println!("=== Stack Tests ===");

    let mut stack: Stack<_> = (1..=5).collect();
    println!("{stack}");
    println!("pop(): {}", stack.pop()?);
    println!("pop(): {}", stack.pop()?);
    println!("peek(): {}", stack.peek()?);
    println!("{stack}");

    while !stack.is_empty() {
        println!("pop(): {}", stack.pop()?);
    }
    if let Err(err) = stack.pop() {
        println!("Caught error: {err}");
    }

    println!("\n=== Stack Tests Completed ===");
    Ok(())
}

fn heap_walkthrough() -> Result<()> {
    println!("=== Heap Tests ===");

    let mut heap = MaxHeap::default();
    for x in [5, 3, 7, 2, 4, 6, 8] {
        heap.insert(x);
    }
    print!("{heap}");

    print!("Popping in order:");
    while !heap.is_empty() {
        print!(" {}", heap.pop_root()?);
    }
    println!();

    println!("\n=== Heap Tests Completed ===");
    Ok(())
}
