use std::collections::BTreeMap;

use dashmap::DashMap;

use crate::metadata::{
    descriptor::JvmDescriptor,
    names::{ClassId, FqName},
};

/// Which direction a built-in class mapping should be recorded in.
///
/// Accepted by the registration entry points but not yet differentiated: both
/// directions are always recorded regardless of the tag, and downstream consumers
/// rely on that outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Runtime class to Kotlin identity only.
    ToSource,
    /// Kotlin identity to runtime descriptor only.
    FromSource,
    /// Both directions.
    Both,
}

/// The bidirectional lookup table between qualified Kotlin names and JVM
/// descriptors.
///
/// Populated exactly once by [`RegistryBuilder`](crate::metadata::typesystem::RegistryBuilder)
/// and read-only afterwards; the backing maps take no write locks on lookup, so
/// the registry is safely shared across arbitrarily many concurrent readers.
///
/// Over the registered built-ins the table is a bijection, with one deliberate
/// exception: per primitive kind, both the bare primitive descriptor and the
/// boxed wrapper descriptor decode to the same Kotlin identity.
#[derive(Debug, Default)]
pub struct DescriptorRegistry {
    forward: DashMap<FqName, JvmDescriptor>,
    reverse: DashMap<JvmDescriptor, ClassId>,
}

impl DescriptorRegistry {
    /// Create an empty registry.
    pub(crate) fn new() -> Self {
        DescriptorRegistry::default()
    }

    /// Insert or overwrite the forward entry for `class_id` and the corresponding
    /// reverse entry. The only write path that touches both tables.
    pub(crate) fn record_forward(&self, class_id: &ClassId, descriptor: &JvmDescriptor) {
        self.forward.insert(class_id.fq_name(), descriptor.clone());
        self.record_reverse(descriptor, class_id);
    }

    /// Insert or overwrite only the reverse entry. Used when two distinct
    /// descriptors must decode to one identity (primitive and wrapper).
    pub(crate) fn record_reverse(&self, descriptor: &JvmDescriptor, class_id: &ClassId) {
        self.reverse.insert(descriptor.clone(), class_id.clone());
    }

    /// The descriptor registered for a qualified Kotlin name.
    #[must_use]
    pub fn descriptor_of(&self, fq_name: &FqName) -> Option<JvmDescriptor> {
        self.forward.get(fq_name).map(|entry| entry.value().clone())
    }

    /// The Kotlin identity registered for a descriptor.
    #[must_use]
    pub fn class_id_of(&self, descriptor: &JvmDescriptor) -> Option<ClassId> {
        self.reverse
            .get(descriptor)
            .map(|entry| entry.value().clone())
    }

    /// Number of forward entries.
    #[must_use]
    pub fn forward_len(&self) -> usize {
        self.forward.len()
    }

    /// Number of reverse entries.
    #[must_use]
    pub fn reverse_len(&self) -> usize {
        self.reverse.len()
    }

    /// An ordered snapshot of the forward table.
    #[must_use]
    pub fn forward_snapshot(&self) -> BTreeMap<FqName, JvmDescriptor> {
        self.forward
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }

    /// An ordered snapshot of the reverse table.
    #[must_use]
    pub fn reverse_snapshot(&self) -> BTreeMap<JvmDescriptor, ClassId> {
        self.reverse
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(fq: &str) -> ClassId {
        ClassId::top_level(FqName::new(fq))
    }

    #[test]
    fn test_record_forward_populates_both_tables() {
        let registry = DescriptorRegistry::new();
        let any = id("kotlin.Any");
        let desc = JvmDescriptor::object(&id("java.lang.Object"));

        registry.record_forward(&any, &desc);

        assert_eq!(registry.descriptor_of(&FqName::new("kotlin.Any")), Some(desc.clone()));
        assert_eq!(registry.class_id_of(&desc), Some(any));
        assert_eq!(registry.forward_len(), 1);
        assert_eq!(registry.reverse_len(), 1);
    }

    #[test]
    fn test_record_reverse_leaves_forward_untouched() {
        let registry = DescriptorRegistry::new();
        let int = id("kotlin.Int");
        let wrapper = JvmDescriptor::object(&id("java.lang.Integer"));

        registry.record_reverse(&wrapper, &int);

        assert_eq!(registry.class_id_of(&wrapper), Some(int));
        assert!(registry.descriptor_of(&FqName::new("kotlin.Int")).is_none());
        assert_eq!(registry.forward_len(), 0);
    }

    #[test]
    fn test_later_writes_overwrite() {
        let registry = DescriptorRegistry::new();
        let desc = JvmDescriptor::object(&id("java.util.List"));

        registry.record_forward(&id("kotlin.collections.MutableList"), &desc);
        registry.record_forward(&id("kotlin.collections.List"), &desc);

        // both forward entries survive, the reverse entry belongs to the last writer
        assert_eq!(registry.forward_len(), 2);
        assert_eq!(registry.class_id_of(&desc), Some(id("kotlin.collections.List")));
    }
}
