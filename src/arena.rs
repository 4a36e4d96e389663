use bumpalo::{Bump, collections::Vec as BumpVec};

/// Bump region that owns every AST node of a parse.
///
/// Nodes and the lists that hold them are carved out of a single growable
/// region and are never freed one by one. [`Arena::free_all`] releases all of
/// them at once; since it takes `&mut self`, no node borrowed from the arena
/// can outlive the call.
///
/// # Example
/// ```
/// use sprig::arena::Arena;
///
/// let arena = Arena::new();
/// let name = arena.alloc_str("main");
/// let mut list = arena.new_vec();
/// list.push(1_i64);
/// list.push(2);
///
/// assert_eq!(name, "main");
/// assert_eq!(list.into_bump_slice(), &[1, 2]);
/// ```
#[derive(Default)]
pub struct Arena {
    bump: Bump,
}

impl Arena {
    #[must_use]
    pub fn new() -> Self {
        Self { bump: Bump::new() }
    }

    /// Moves `value` into the region and returns a reference to it.
    ///
    /// Values placed here are never dropped; AST nodes only hold borrowed
    /// data, so nothing leaks.
    pub fn alloc<T>(&self, value: T) -> &mut T {
        self.bump.alloc(value)
    }

    /// Copies `text` into the region.
    pub fn alloc_str(&self, text: &str) -> &str {
        self.bump.alloc_str(text)
    }

    /// Creates an empty list backed by the region. Pushing doubles the
    /// capacity when it runs out; freeze it with `into_bump_slice`.
    #[must_use]
    pub fn new_vec<T>(&self) -> BumpVec<'_, T> {
        BumpVec::new_in(&self.bump)
    }

    /// Bytes currently reserved by the region, including unused capacity.
    #[must_use]
    pub fn allocated_bytes(&self) -> usize {
        self.bump.allocated_bytes()
    }

    /// Releases every allocation the arena ever handed out.
    pub fn free_all(&mut self) {
        self.bump.reset();
    }
}
