use operation::Name;

/// Path of an error within the response, serialized as `["search", 0, "name"]`.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct ErrorPath(Vec<ErrorPathSegment>);

impl std::ops::Deref for ErrorPath {
    type Target = Vec<ErrorPathSegment>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::ops::DerefMut for ErrorPath {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl serde::Serialize for ErrorPath {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter())
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ErrorPathSegment {
    Field(Name),
    Index(usize),
}

impl serde::Serialize for ErrorPathSegment {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ErrorPathSegment::Field(name) => serializer.serialize_str(name.as_str()),
            ErrorPathSegment::Index(index) => serializer.serialize_u64(*index as u64),
        }
    }
}

/// Position of a value being resolved. Cloning is cheap, so every field and list item can carry
/// its own path while sharing the prefix with its siblings.
///
/// Next to the segments the path keeps the rank of each of them among its siblings, which orders
/// paths like the response they point into.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct ResponsePath {
    segments: im::Vector<ErrorPathSegment>,
    ranks: im::Vector<usize>,
}

impl ResponsePath {
    /// Path of the field with the given response key, `rank` being its position within the
    /// selection set.
    #[must_use]
    pub fn field(&self, rank: usize, key: &Name) -> Self {
        self.child(rank, ErrorPathSegment::Field(key.clone()))
    }

    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        self.child(index, ErrorPathSegment::Index(index))
    }

    fn child(&self, rank: usize, segment: ErrorPathSegment) -> Self {
        let mut path = self.clone();
        path.segments.push_back(segment);
        path.ranks.push_back(rank);
        path
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Orders paths by their position in the response. A path comes before its descendants.
    pub fn cmp_position(&self, other: &Self) -> std::cmp::Ordering {
        self.ranks.cmp(&other.ranks)
    }
}

impl std::fmt::Display for ResponsePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            match segment {
                ErrorPathSegment::Field(name) => f.write_str(name.as_str())?,
                ErrorPathSegment::Index(index) => write!(f, "{index}")?,
            }
        }
        Ok(())
    }
}

pub trait InsertIntoErrorPath {
    fn insert_into(self, path: &mut ErrorPath);
}

impl InsertIntoErrorPath for &str {
    fn insert_into(self, path: &mut ErrorPath) {
        path.0.push(ErrorPathSegment::Field(Name::new(self)));
    }
}

impl InsertIntoErrorPath for &ResponsePath {
    fn insert_into(self, path: &mut ErrorPath) {
        path.0.extend(self.segments.iter().cloned());
    }
}

impl<T1: InsertIntoErrorPath, T2: InsertIntoErrorPath> InsertIntoErrorPath for (T1, T2) {
    fn insert_into(self, path: &mut ErrorPath) {
        self.0.insert_into(path);
        self.1.insert_into(path);
    }
}

impl<T: InsertIntoErrorPath> From<T> for ErrorPath {
    fn from(t: T) -> Self {
        let mut path = ErrorPath(Vec::new());
        t.insert_into(&mut path);
        path
    }
}
