//! Default collaborators: the standard built-in class table and the intrinsic
//! companion-name resolver.
//!
//! [`KotlinBuiltins`] supplies the `java.lang`/`java.util` to
//! `kotlin`/`kotlin.collections` mappings, with the collection interfaces as
//! readonly/mutable pairs. [`KotlinIntrinsics`] names the synthetic
//! `kotlin.jvm.internal.*CompanionObject` classes backing the companions of the
//! primitive classes, `kotlin.String` and `kotlin.Enum`.

use crate::metadata::{
    names::{ClassId, FqName},
    typesystem::{
        BuiltinClassProvider, BuiltinMapping, ClassDescriptor, Direction, IntrinsicResolver,
        JvmPrimitiveKind, RuntimeClass,
    },
};

use strum::IntoEnumIterator;

fn java(package: &str, name: &str) -> RuntimeClass {
    RuntimeClass::object(ClassId::new(FqName::new(package), name))
}

fn kotlin(name: &str) -> ClassDescriptor {
    ClassDescriptor::new(ClassId::new(FqName::new("kotlin"), name))
}

fn collections(name: &str) -> ClassDescriptor {
    ClassDescriptor::new(ClassId::new(FqName::new("kotlin.collections"), name))
}

fn single(runtime: RuntimeClass, kotlin: ClassDescriptor) -> BuiltinMapping {
    BuiltinMapping {
        runtime,
        kotlin,
        kotlin_mutable: None,
        direction: Direction::Both,
    }
}

fn pair(
    runtime: RuntimeClass,
    readonly: ClassDescriptor,
    mutable: ClassDescriptor,
) -> BuiltinMapping {
    BuiltinMapping {
        runtime,
        kotlin: readonly,
        kotlin_mutable: Some(mutable),
        direction: Direction::Both,
    }
}

/// The standard built-in class table.
///
/// Covers the `java.lang` core types and the `java.util` collection interfaces;
/// the primitive and primitive-array classes are registered separately by the
/// builder and do not appear here.
pub struct KotlinBuiltins;

impl BuiltinClassProvider for KotlinBuiltins {
    fn mappings(&self) -> Vec<BuiltinMapping> {
        let map_entry_runtime = RuntimeClass::object(
            ClassId::new(FqName::new("java.util"), "Map").nested("Entry"),
        );
        let map_entry = ClassDescriptor::new(
            ClassId::new(FqName::new("kotlin.collections"), "Map").nested("Entry"),
        );
        let mutable_map_entry = ClassDescriptor::new(
            ClassId::new(FqName::new("kotlin.collections"), "MutableMap").nested("MutableEntry"),
        );

        vec![
            single(java("java.lang", "Object"), kotlin("Any")),
            single(
                java("java.lang", "String"),
                ClassDescriptor::with_companion(ClassId::new(FqName::new("kotlin"), "String")),
            ),
            single(java("java.lang", "CharSequence"), kotlin("CharSequence")),
            single(java("java.lang", "Throwable"), kotlin("Throwable")),
            single(java("java.lang", "Cloneable"), kotlin("Cloneable")),
            single(java("java.lang", "Number"), kotlin("Number")),
            single(java("java.lang", "Comparable"), kotlin("Comparable")),
            single(
                java("java.lang", "Enum"),
                ClassDescriptor::with_companion(ClassId::new(FqName::new("kotlin"), "Enum")),
            ),
            single(java("java.lang.annotation", "Annotation"), kotlin("Annotation")),
            pair(
                java("java.lang", "Iterable"),
                collections("Iterable"),
                collections("MutableIterable"),
            ),
            pair(
                java("java.util", "Iterator"),
                collections("Iterator"),
                collections("MutableIterator"),
            ),
            pair(
                java("java.util", "Collection"),
                collections("Collection"),
                collections("MutableCollection"),
            ),
            pair(
                java("java.util", "List"),
                collections("List"),
                collections("MutableList"),
            ),
            pair(
                java("java.util", "Set"),
                collections("Set"),
                collections("MutableSet"),
            ),
            pair(
                java("java.util", "ListIterator"),
                collections("ListIterator"),
                collections("MutableListIterator"),
            ),
            pair(
                java("java.util", "Map"),
                collections("Map"),
                collections("MutableMap"),
            ),
            pair(map_entry_runtime, map_entry, mutable_map_entry),
        ]
    }
}

/// Resolver for the synthetic runtime names of intrinsic companion objects.
///
/// The companions of the eight primitive classes, `kotlin.String` and
/// `kotlin.Enum` are not materialized as nested classes at runtime; each is
/// backed by a `kotlin.jvm.internal.<Name>CompanionObject` singleton instead.
pub struct KotlinIntrinsics;

impl IntrinsicResolver for KotlinIntrinsics {
    fn companion_runtime_name(&self, companion: &ClassDescriptor) -> Option<FqName> {
        let owner = companion.class_id().outer()?;
        let owner_fq = owner.fq_name();

        let known = JvmPrimitiveKind::iter()
            .any(|kind| kind.kotlin_class_id() == owner)
            || owner_fq == FqName::new("kotlin.String")
            || owner_fq == FqName::new("kotlin.Enum");
        if !known {
            return None;
        }

        Some(FqName::new(&format!(
            "kotlin.jvm.internal.{}CompanionObject",
            owner.short_name()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intrinsics_cover_primitive_and_string_companions() {
        let double =
            ClassDescriptor::with_companion(ClassId::new(FqName::new("kotlin"), "Double"));
        assert_eq!(
            KotlinIntrinsics.companion_runtime_name(double.companion().unwrap()),
            Some(FqName::new("kotlin.jvm.internal.DoubleCompanionObject"))
        );

        let string =
            ClassDescriptor::with_companion(ClassId::new(FqName::new("kotlin"), "String"));
        assert_eq!(
            KotlinIntrinsics.companion_runtime_name(string.companion().unwrap()),
            Some(FqName::new("kotlin.jvm.internal.StringCompanionObject"))
        );
    }

    #[test]
    fn test_intrinsics_reject_unknown_owners() {
        let custom =
            ClassDescriptor::with_companion(ClassId::new(FqName::new("com.example"), "Widget"));
        assert_eq!(
            KotlinIntrinsics.companion_runtime_name(custom.companion().unwrap()),
            None
        );
    }

    #[test]
    fn test_builtin_table_shape() {
        let mappings = KotlinBuiltins.mappings();
        assert_eq!(mappings.len(), 17);

        // collection interfaces come as readonly/mutable pairs
        let pairs = mappings.iter().filter(|m| m.kotlin_mutable.is_some()).count();
        assert_eq!(pairs, 8);

        // only String and Enum own companions here
        let companions: Vec<_> = mappings
            .iter()
            .filter(|m| m.kotlin.companion().is_some())
            .map(|m| m.kotlin.class_id().fq_name())
            .collect();
        assert_eq!(
            companions,
            [FqName::new("kotlin.String"), FqName::new("kotlin.Enum")]
        );
    }
}
