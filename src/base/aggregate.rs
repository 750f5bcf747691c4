use std::borrow::Borrow;
use std::cmp::Ordering;

/// Ordered map that sums the values of repeated keys.
///
/// Backed by an AVL tree: every node owns its two subtrees and caches its
/// height, and inserts rebalance the search path bottom-up so lookups and
/// inserts stay logarithmic in the number of distinct keys. Iteration yields
/// keys in ascending order.
#[derive(Debug)]
pub struct Aggregate<K, V> {
    root: Option<Box<Node<K, V>>>,
    len: usize,
}

#[derive(Debug)]
struct Node<K, V> {
    key: K,
    value: V,
    height: u32,
    left: Option<Box<Node<K, V>>>,
    right: Option<Box<Node<K, V>>>,
}

impl<K, V> Node<K, V> {
    fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            height: 1,
            left: None,
            right: None,
        }
    }

    fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    fn balance(&self) -> i64 {
        height(&self.left) as i64 - height(&self.right) as i64
    }
}

fn height<K, V>(node: &Option<Box<Node<K, V>>>) -> u32 {
    node.as_ref().map_or(0, |n| n.height)
}

impl<K, V> Default for Aggregate<K, V> {
    fn default() -> Self {
        Self { root: None, len: 0 }
    }
}

impl<K, V> Aggregate<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of distinct keys.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of nodes on the longest root-to-leaf path, or 0 if
    /// empty.
    pub fn height(&self) -> usize {
        height(&self.root) as usize
    }

    /// Adds `value` to the total stored under `key`, creating the entry if it
    /// doesn't exist yet. Returns `true` if a new entry was created.
    ///
    /// An owned key is only built for new entries, so merging into an existing
    /// entry does not allocate.
    pub fn insert_or_merge<Q>(&mut self, key: &Q, value: V) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ToOwned<Owned = K> + ?Sized,
        V: std::ops::AddAssign,
    {
        let (root, inserted) = insert_or_merge(self.root.take(), key, value);
        self.root = Some(root);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Iterates over entries in ascending key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        let mut it = Iter {
            stack: Vec::with_capacity(self.height()),
            remaining: self.len,
        };
        it.push_left_spine(self.root.as_deref());
        it
    }

    /// Releases every node, children before parents, and returns how many
    /// were released.
    pub fn dispose(mut self) -> usize {
        fn release<K, V>(node: Box<Node<K, V>>) -> usize {
            let Node { left, right, .. } = *node;
            let mut count = 1;
            if let Some(l) = left {
                count += release(l);
            }
            if let Some(r) = right {
                count += release(r);
            }
            count
        }

        let count = self.root.take().map_or(0, release);
        self.len = 0;
        count
    }
}

fn insert_or_merge<K, V, Q>(
    slot: Option<Box<Node<K, V>>>,
    key: &Q,
    value: V,
) -> (Box<Node<K, V>>, bool)
where
    K: Borrow<Q>,
    Q: Ord + ToOwned<Owned = K> + ?Sized,
    V: std::ops::AddAssign,
{
    let mut node = match slot {
        Some(n) => n,
        None => return (Box::new(Node::new(key.to_owned(), value)), true),
    };
    let inserted = match key.cmp(node.key.borrow()) {
        Ordering::Less => {
            let (child, inserted) = insert_or_merge(node.left.take(), key, value);
            node.left = Some(child);
            inserted
        }
        Ordering::Greater => {
            let (child, inserted) = insert_or_merge(node.right.take(), key, value);
            node.right = Some(child);
            inserted
        }
        Ordering::Equal => {
            node.value += value;
            false
        }
    };
    if !inserted {
        return (node, false);
    }
    node.update_height();
    (rebalance(node, key), true)
}

/// Restores the AVL property at `node` after `key` was inserted somewhere
/// below it.
fn rebalance<K, V, Q>(mut node: Box<Node<K, V>>, key: &Q) -> Box<Node<K, V>>
where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let balance = node.balance();
    if balance > 1 {
        if let Some(left) = node.left.take() {
            // Left-right: straighten into left-left first.
            node.left = Some(match key.cmp(left.key.borrow()) {
                Ordering::Greater => rotate_left(left),
                _ => left,
            });
            return rotate_right(node);
        }
    } else if balance < -1 {
        if let Some(right) = node.right.take() {
            // Right-left: straighten into right-right first.
            node.right = Some(match key.cmp(right.key.borrow()) {
                Ordering::Less => rotate_right(right),
                _ => right,
            });
            return rotate_left(node);
        }
    }
    node
}

///```text
///       y            x
///      / \          / \
///     x   c  -->   a   y
///    / \              / \
///   a   b            b   c
///```
fn rotate_right<K, V>(mut y: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let mut x = match y.left.take() {
        Some(x) => x,
        None => return y,
    };
    y.left = x.right.take();
    y.update_height();
    x.right = Some(y);
    x.update_height();
    x
}

///```text
///     x                y
///    / \              / \
///   a   y    -->     x   c
///      / \          / \
///     b   c        a   b
///```
fn rotate_left<K, V>(mut x: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let mut y = match x.right.take() {
        Some(y) => y,
        None => return x,
    };
    x.right = y.left.take();
    x.update_height();
    y.left = Some(x);
    y.update_height();
    y
}

/// In-order iterator over an [`Aggregate`].
pub struct Iter<'a, K, V> {
    stack: Vec<&'a Node<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    fn push_left_spine(&mut self, mut node: Option<&'a Node<K, V>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.stack.pop()?;
        self.push_left_spine(n.right.as_deref());
        self.remaining -= 1;
        Some((&n.key, &n.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<'a, K, V> IntoIterator for &'a Aggregate<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Aggregate<K, V>
where
    K: Ord + Clone,
    V: std::ops::AddAssign,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut agg = Aggregate::<K, V>::default();
        for (k, v) in iter {
            agg.insert_or_merge(&k, v);
        }
        agg
    }
}
