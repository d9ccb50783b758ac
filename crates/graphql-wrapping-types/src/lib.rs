//! Compact representation of the list and non-null wrappers around a named GraphQL type.
//!
//! `[Droid!]` is stored as "inner is required" plus a single nullable list wrapping. List
//! wrappings are ordered from the innermost to the outermost one.

/// Maximum number of nested lists a single type can have.
pub const MAX_LIST_WRAPPINGS: usize = 15;

const INNER_IS_REQUIRED_FLAG: u32 = 0b1;
const LIST_COUNT_SHIFT: u32 = 1;
const LIST_COUNT_MASK: u32 = 0b1111 << LIST_COUNT_SHIFT;
// One bit per list wrapping, starting with the innermost list.
const LIST_REQUIRED_SHIFT: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListWrapping {
    RequiredList,
    NullableList,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub struct Wrapping(u32);

impl Wrapping {
    pub const fn new(inner_is_required: bool) -> Self {
        if inner_is_required {
            Self(INNER_IS_REQUIRED_FLAG)
        } else {
            Self(0)
        }
    }

    pub const fn nullable() -> Self {
        Self::new(false)
    }

    pub const fn required() -> Self {
        Self::new(true)
    }

    pub fn inner_is_required(self) -> bool {
        self.0 & INNER_IS_REQUIRED_FLAG != 0
    }

    pub fn is_list(self) -> bool {
        self.list_count() > 0
    }

    /// Whether the outermost wrapper is non-null.
    pub fn is_required(self) -> bool {
        match self.outermost_list_wrapping() {
            Some(list_wrapping) => list_wrapping == ListWrapping::RequiredList,
            None => self.inner_is_required(),
        }
    }

    pub fn is_nullable(self) -> bool {
        !self.is_required()
    }

    /// List wrappings from the innermost to the outermost one.
    pub fn list_wrappings(self) -> impl DoubleEndedIterator<Item = ListWrapping> + ExactSizeIterator {
        let flags = self.0 >> LIST_REQUIRED_SHIFT;
        (0..self.list_count()).map(move |index| {
            if flags & (1 << index) != 0 {
                ListWrapping::RequiredList
            } else {
                ListWrapping::NullableList
            }
        })
    }

    pub fn outermost_list_wrapping(self) -> Option<ListWrapping> {
        self.list_wrappings().next_back()
    }

    /// Wraps the current type in one more list. Wrappings beyond [`MAX_LIST_WRAPPINGS`] are
    /// ignored.
    #[must_use]
    pub fn wrapped_by(self, list_wrapping: ListWrapping) -> Self {
        let count = self.list_count();
        if count >= MAX_LIST_WRAPPINGS {
            return self;
        }
        let mut bits = (self.0 & !LIST_COUNT_MASK) | (((count as u32) + 1) << LIST_COUNT_SHIFT);
        if list_wrapping == ListWrapping::RequiredList {
            bits |= 1 << (LIST_REQUIRED_SHIFT + count as u32);
        }
        Self(bits)
    }

    #[must_use]
    pub fn wrapped_by_required_list(self) -> Self {
        self.wrapped_by(ListWrapping::RequiredList)
    }

    #[must_use]
    pub fn wrapped_by_nullable_list(self) -> Self {
        self.wrapped_by(ListWrapping::NullableList)
    }

    /// Wrapping of the list items, `None` if this isn't a list.
    pub fn without_list(self) -> Option<Self> {
        let count = self.list_count();
        if count == 0 {
            return None;
        }
        let outermost_bit = 1 << (LIST_REQUIRED_SHIFT + count as u32 - 1);
        let bits = (self.0 & !LIST_COUNT_MASK & !outermost_bit) | (((count as u32) - 1) << LIST_COUNT_SHIFT);
        Some(Self(bits))
    }

    /// Drops the non-null marker of the outermost wrapper: `[T!]!` becomes `[T!]`.
    #[must_use]
    pub fn without_non_null(self) -> Self {
        match self.list_count() {
            0 => Self(self.0 & !INNER_IS_REQUIRED_FLAG),
            count => Self(self.0 & !(1 << (LIST_REQUIRED_SHIFT + count as u32 - 1))),
        }
    }

    /// Makes the outermost wrapper non-null: `[T]` becomes `[T]!`.
    #[must_use]
    pub fn non_null(self) -> Self {
        match self.list_count() {
            0 => Self(self.0 | INNER_IS_REQUIRED_FLAG),
            count => Self(self.0 | (1 << (LIST_REQUIRED_SHIFT + count as u32 - 1))),
        }
    }

    /// Renders the wrapping around the given type name, `[Droid!]!` for example.
    pub fn type_display(self, name: &str) -> String {
        let mut out = String::with_capacity(name.len() + 2 * self.list_count() + 1);
        for _ in 0..self.list_count() {
            out.push('[');
        }
        out.push_str(name);
        if self.inner_is_required() {
            out.push('!');
        }
        for list_wrapping in self.list_wrappings() {
            out.push(']');
            if list_wrapping == ListWrapping::RequiredList {
                out.push('!');
            }
        }
        out
    }

    fn list_count(self) -> usize {
        ((self.0 & LIST_COUNT_MASK) >> LIST_COUNT_SHIFT) as usize
    }
}

impl std::fmt::Debug for Wrapping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Wrapping").field(&self.type_display("T")).finish()
    }
}
