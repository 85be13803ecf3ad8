use crate::binary_tree::BinaryTree;
use proptest::prelude::*;
use std::io;
use std::sync::{Arc, Mutex};

/// The five node example tree:
///
/// ```text
///         1
///        / \
///       2   3
///      / \
///     4   5
/// ```
pub fn canonical_tree() -> BinaryTree<i32> {
    BinaryTree::node(
        1,
        BinaryTree::node(2, BinaryTree::leaf(4), BinaryTree::leaf(5)),
        BinaryTree::leaf(3),
    )
}

/// Arbitrary trees with small (possibly negative) values so that path sums collide often.
pub fn arb_tree() -> impl Strategy<Value = BinaryTree<i32>> {
    let leaf = prop_oneof![
        1 => Just(BinaryTree::Empty),
        3 => (-8i32..8).prop_map(BinaryTree::leaf),
    ];
    leaf.prop_recursive(8, 96, 2, |inner| {
        (-8i32..8, inner.clone(), inner).prop_map(|(value, left, right)| BinaryTree::node(value, left, right))
    })
}

/// Arbitrary trees wrapped around a present root.
pub fn arb_nonempty_tree() -> impl Strategy<Value = BinaryTree<i32>> {
    (-8i32..8, arb_tree(), arb_tree()).prop_map(|(value, left, right)| BinaryTree::node(value, left, right))
}

#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `f` under a debug-level subscriber and returns everything it logged.
pub fn capture_logs(f: impl FnOnce()) -> String {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    let bytes = buffer.0.lock().unwrap().clone();
    String::from_utf8_lossy(&bytes).into_owned()
}
