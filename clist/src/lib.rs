#![deny(warnings)]
#![cfg_attr(test, deny(warnings))]

//! A singly linked list of `i32` values that grows at the front and is
//! walked with a caller-supplied visitor.

use std::alloc::{self, Layout};
use std::fmt;
use std::io::{self, Write};

use anyhow::Context;
use tracing::{debug, trace};

mod error;

pub use error::{ListError, PrependError};

/// Text printed before the list values.
pub const BANNER: &str = "Created linked list";

/// Values the `clist` program builds its list from.
pub const DEMO_VALUES: [i32; 5] = [1, 2, 3, 4, 5];

/// Bytes requested from the allocator for every prepended value.
pub const NODE_BYTES: usize = std::mem::size_of::<Node>();

type Link = Option<Box<Node>>;

struct Node {
    value: i32,
    next: Link,
}

/// Handle to the head of a list, or the empty list.
///
/// Nodes are never changed once linked in. Growing the list consumes the
/// handle and hands back a new one whose head is the fresh node.
pub struct List {
    size: usize,
    head: Link,
}

impl List {
    pub fn new() -> List {
        List {
            size: 0,
            head: None,
        }
    }

    /// The list with no nodes.
    pub fn empty() -> List {
        List::new()
    }

    /// Puts `value` in front of the current head and returns the new handle.
    ///
    /// Takes one allocation. If the allocator comes back empty the error
    /// carries [`ListError::AllocationFailure`] and hands the list back as
    /// it was.
    pub fn prepend(mut self, value: i32) -> Result<List, PrependError> {
        let slot = match alloc_node() {
            Ok(slot) => slot,
            Err(error) => return Err(PrependError::new(self, error)),
        };
        let node = Node {
            value,
            next: self.head.take(),
        };
        let size = self.size + 1;
        self.size = 0;
        trace!(value, size, "prepend");

        Ok(List {
            size,
            head: Some(slot.fill(node)),
        })
    }

    /// Calls `visit` with every value from head to tail.
    pub fn traverse<F>(&self, mut visit: F)
    where
        F: FnMut(i32),
    {
        let mut current = self.head.as_deref();
        while let Some(node) = current {
            trace!(value = node.value, "visit");
            visit(node.value);
            current = node.next.as_deref();
        }
    }

    /// Like [`traverse`](List::traverse), but rejects a missing visitor
    /// before touching any node.
    pub fn try_traverse<F>(&self, visit: Option<F>) -> Result<(), ListError>
    where
        F: FnMut(i32),
    {
        let visit = visit.ok_or(ListError::PreconditionViolation {
            operation: "try_traverse",
        })?;
        debug!(len = self.size, "traversing list");
        self.traverse(visit);
        Ok(())
    }

    pub fn head(&self) -> Option<i32> {
        self.head.as_ref().map(|node| node.value)
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.size,
        }
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }
}

impl Default for List {
    fn default() -> Self {
        Self::new()
    }
}

// Unlink one node at a time so long chains don't recurse through `Box` drops.
impl Drop for List {
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl fmt::Debug for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Head-to-tail iterator over the values of a [`List`].
pub struct Iter<'a> {
    next: Option<&'a Node>,
    remaining: usize,
}

impl Iterator for Iter<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            self.remaining -= 1;
            node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a List {
    type Item = i32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

// Nodes come straight from the global allocator so that a null result can be
// reported as `AllocationFailure`; `Box::new` would abort instead.

/// Uninitialised memory for one node, freed again if never filled.
struct NodeSlot(*mut Node);

impl NodeSlot {
    fn fill(self, node: Node) -> Box<Node> {
        let ptr = self.0;
        std::mem::forget(self);
        // SAFETY: `ptr` is non-null and came from the global allocator with
        // `Layout::new::<Node>()`, which is the layout `Box<Node>` frees with.
        unsafe {
            ptr.write(node);
            Box::from_raw(ptr)
        }
    }
}

impl Drop for NodeSlot {
    fn drop(&mut self) {
        // SAFETY: allocated in `alloc_node` with this layout and never filled.
        unsafe { alloc::dealloc(self.0.cast(), Layout::new::<Node>()) }
    }
}

fn alloc_node() -> Result<NodeSlot, ListError> {
    let layout = Layout::new::<Node>();
    // SAFETY: `Node` is not zero-sized.
    let ptr = unsafe { alloc::alloc(layout) }.cast::<Node>();
    if ptr.is_null() {
        return Err(ListError::AllocationFailure {
            bytes: layout.size(),
        });
    }
    Ok(NodeSlot(ptr))
}

/// Builds a list by prepending `values` from the last index to the first, so
/// the list reads in the same order as the slice.
pub fn build_prepending(values: &[i32]) -> Result<List, ListError> {
    debug!(count = values.len(), "building list");
    values
        .iter()
        .rev()
        .try_fold(List::new(), |list, &value| {
            list.prepend(value).map_err(ListError::from)
        })
}

/// Writes `value` preceded by a single space.
pub fn print_int<W>(out: &mut W, value: i32) -> io::Result<()>
where
    W: Write + ?Sized,
{
    write!(out, " {value}")
}

/// Builds the list of [`DEMO_VALUES`] and writes the banner followed by each
/// value, with no line breaks.
pub fn write_demo<W>(out: &mut W) -> anyhow::Result<()>
where
    W: Write + ?Sized,
{
    let list = build_prepending(&DEMO_VALUES).context("failed to build the list")?;
    out.write_all(BANNER.as_bytes())
        .context("failed to write the banner")?;

    // The visitor can't stop the walk. After the first failed write the rest
    // are skipped and that error is returned once the walk is done.
    let mut written: io::Result<()> = Ok(());
    list.try_traverse(Some(|value: i32| {
        if written.is_ok() {
            written = print_int(&mut *out, value);
        }
    }))
    .context("failed to walk the list")?;
    written.context("failed to write a list value")?;

    Ok(())
}
