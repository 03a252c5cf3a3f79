//! Qualified-name identities for source-level types.
//!
//! Kotlin addresses types by dot-separated qualified names. Two value types model
//! this: [`FqName`], a plain qualified name (`kotlin.collections.List`), and
//! [`ClassId`], which additionally separates the package prefix from the relative
//! class name so nested classes can be rendered in both the source form
//! (`kotlin.collections.Map.Entry`) and the runtime internal form
//! (`kotlin/collections/Map$Entry`).

use std::fmt;

/// A dot-separated fully qualified name, e.g. `kotlin.collections.List`.
///
/// Immutable value type. The empty string is the root name (no package).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FqName(String);

impl FqName {
    /// Create a qualified name from its dotted rendering.
    #[must_use]
    pub fn new(name: &str) -> Self {
        FqName(name.to_string())
    }

    /// The root name, i.e. the empty package.
    #[must_use]
    pub fn root() -> Self {
        FqName(String::new())
    }

    /// Whether this is the root name.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// The dotted rendering of this name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The last segment, e.g. `List` for `kotlin.collections.List`.
    #[must_use]
    pub fn short_name(&self) -> &str {
        match self.0.rfind('.') {
            Some(dot) => &self.0[dot + 1..],
            None => &self.0,
        }
    }

    /// The name with the last segment removed; the root name if there is only one
    /// segment.
    #[must_use]
    pub fn parent(&self) -> FqName {
        match self.0.rfind('.') {
            Some(dot) => FqName(self.0[..dot].to_string()),
            None => FqName::root(),
        }
    }

    /// This name extended by one segment.
    #[must_use]
    pub fn child(&self, segment: &str) -> FqName {
        if self.is_root() {
            FqName(segment.to_string())
        } else {
            FqName(format!("{}.{}", self.0, segment))
        }
    }

    /// The segments of this name in order. The root name has no segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.').filter(|s| !s.is_empty())
    }
}

impl fmt::Display for FqName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identity of a class: its package plus the relative class name.
///
/// The relative name joins nested classes with dots in source form (`Map.Entry`);
/// [`ClassId::internal_name`] renders the runtime form, where package segments are
/// joined by `/` and nesting by `$` (`java/util/Map$Entry`).
///
/// Used as the decode result of the bridge and as the value side of the reverse
/// registry table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassId {
    package: FqName,
    relative: String,
}

impl ClassId {
    /// Create a class id from a package name and a relative class name.
    #[must_use]
    pub fn new(package: FqName, relative: &str) -> Self {
        ClassId {
            package,
            relative: relative.to_string(),
        }
    }

    /// Create a top-level class id from a full qualified name; the last segment
    /// becomes the class name, the rest the package.
    #[must_use]
    pub fn top_level(fq_name: FqName) -> Self {
        let relative = fq_name.short_name().to_string();
        ClassId {
            package: fq_name.parent(),
            relative,
        }
    }

    /// Parse a runtime internal name, e.g. `java/util/Map$Entry`.
    #[must_use]
    pub fn from_internal_name(internal: &str) -> Self {
        let (package, class) = match internal.rfind('/') {
            Some(slash) => (
                internal[..slash].replace('/', "."),
                &internal[slash + 1..],
            ),
            None => (String::new(), internal),
        };
        ClassId {
            package: FqName::new(&package),
            relative: class.replace('$', "."),
        }
    }

    /// The package this class lives in.
    #[must_use]
    pub fn package(&self) -> &FqName {
        &self.package
    }

    /// The class name relative to the package, dot-joined for nested classes.
    #[must_use]
    pub fn relative_name(&self) -> &str {
        &self.relative
    }

    /// The innermost class name.
    #[must_use]
    pub fn short_name(&self) -> &str {
        match self.relative.rfind('.') {
            Some(dot) => &self.relative[dot + 1..],
            None => &self.relative,
        }
    }

    /// The full dotted qualified name, `package.Outer.Inner`.
    #[must_use]
    pub fn fq_name(&self) -> FqName {
        self.package.child(&self.relative)
    }

    /// The runtime internal name: package segments joined by `/`, nested classes
    /// by `$`, e.g. `kotlin/jvm/internal/IntCompanionObject`.
    #[must_use]
    pub fn internal_name(&self) -> String {
        let class = self.relative.replace('.', "$");
        if self.package.is_root() {
            class
        } else {
            format!("{}/{}", self.package.as_str().replace('.', "/"), class)
        }
    }

    /// The id of a class nested inside this one.
    #[must_use]
    pub fn nested(&self, name: &str) -> ClassId {
        ClassId {
            package: self.package.clone(),
            relative: format!("{}.{}", self.relative, name),
        }
    }

    /// The id of the enclosing class, `None` for top-level classes.
    #[must_use]
    pub fn outer(&self) -> Option<ClassId> {
        self.relative.rfind('.').map(|dot| ClassId {
            package: self.package.clone(),
            relative: self.relative[..dot].to_string(),
        })
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fq_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fq_name_segments() {
        let fq = FqName::new("kotlin.collections.List");
        assert_eq!(fq.short_name(), "List");
        assert_eq!(fq.parent(), FqName::new("kotlin.collections"));
        assert_eq!(fq.segments().collect::<Vec<_>>(), ["kotlin", "collections", "List"]);
        assert_eq!(fq.parent().child("Set"), FqName::new("kotlin.collections.Set"));
    }

    #[test]
    fn test_fq_name_root() {
        let root = FqName::root();
        assert!(root.is_root());
        assert_eq!(root.segments().count(), 0);
        assert_eq!(root.child("Top"), FqName::new("Top"));
        assert_eq!(FqName::new("Top").parent(), root);
    }

    #[test]
    fn test_class_id_top_level() {
        let id = ClassId::top_level(FqName::new("java.lang.Integer"));
        assert_eq!(id.package(), &FqName::new("java.lang"));
        assert_eq!(id.relative_name(), "Integer");
        assert_eq!(id.fq_name(), FqName::new("java.lang.Integer"));
        assert_eq!(id.internal_name(), "java/lang/Integer");
        assert!(id.outer().is_none());
    }

    #[test]
    fn test_class_id_nested() {
        let map = ClassId::new(FqName::new("java.util"), "Map");
        let entry = map.nested("Entry");
        assert_eq!(entry.relative_name(), "Map.Entry");
        assert_eq!(entry.short_name(), "Entry");
        assert_eq!(entry.internal_name(), "java/util/Map$Entry");
        assert_eq!(entry.fq_name(), FqName::new("java.util.Map.Entry"));
        assert_eq!(entry.outer(), Some(map));
    }

    #[test]
    fn test_class_id_from_internal_name() {
        let entry = ClassId::from_internal_name("java/util/Map$Entry");
        assert_eq!(entry.package(), &FqName::new("java.util"));
        assert_eq!(entry.relative_name(), "Map.Entry");

        let unpackaged = ClassId::from_internal_name("Top");
        assert!(unpackaged.package().is_root());
        assert_eq!(unpackaged.internal_name(), "Top");
    }
}
