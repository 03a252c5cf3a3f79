use strum::{EnumCount, EnumIter};

use crate::metadata::{
    descriptor::JvmDescriptor,
    names::{ClassId, FqName},
};

/// The closed set of JVM primitive types.
///
/// Each kind carries the four facts the bridge needs: its one-letter descriptor
/// code, the boxed wrapper class in `java.lang`, the Kotlin class it represents
/// (`kotlin.Int`, ...) and the dedicated Kotlin primitive-array class
/// (`kotlin.IntArray`, ...). The void code `V` belongs to the descriptor grammar
/// but not to this enum: it has no wrapper and no array form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCount, EnumIter)]
pub enum JvmPrimitiveKind {
    /// `boolean` / `kotlin.Boolean`, code `Z`
    Boolean,
    /// `char` / `kotlin.Char`, code `C`
    Char,
    /// `byte` / `kotlin.Byte`, code `B`
    Byte,
    /// `short` / `kotlin.Short`, code `S`
    Short,
    /// `int` / `kotlin.Int`, code `I`
    Int,
    /// `float` / `kotlin.Float`, code `F`
    Float,
    /// `long` / `kotlin.Long`, code `J`
    Long,
    /// `double` / `kotlin.Double`, code `D`
    Double,
}

impl JvmPrimitiveKind {
    /// The one-letter descriptor code.
    #[must_use]
    pub fn code(&self) -> char {
        match self {
            JvmPrimitiveKind::Boolean => 'Z',
            JvmPrimitiveKind::Char => 'C',
            JvmPrimitiveKind::Byte => 'B',
            JvmPrimitiveKind::Short => 'S',
            JvmPrimitiveKind::Int => 'I',
            JvmPrimitiveKind::Float => 'F',
            JvmPrimitiveKind::Long => 'J',
            JvmPrimitiveKind::Double => 'D',
        }
    }

    /// The bare primitive descriptor, e.g. `I`.
    #[must_use]
    pub fn descriptor(&self) -> JvmDescriptor {
        JvmDescriptor::primitive(self.code())
    }

    /// The descriptor of the dedicated primitive-array type, e.g. `[I`.
    #[must_use]
    pub fn array_descriptor(&self) -> JvmDescriptor {
        JvmDescriptor::array(&self.descriptor())
    }

    /// The simple name shared by the Kotlin class and the wrapper suffix,
    /// e.g. `Int` for `kotlin.Int` / `IntArray`.
    #[must_use]
    pub fn kotlin_name(&self) -> &'static str {
        match self {
            JvmPrimitiveKind::Boolean => "Boolean",
            JvmPrimitiveKind::Char => "Char",
            JvmPrimitiveKind::Byte => "Byte",
            JvmPrimitiveKind::Short => "Short",
            JvmPrimitiveKind::Int => "Int",
            JvmPrimitiveKind::Float => "Float",
            JvmPrimitiveKind::Long => "Long",
            JvmPrimitiveKind::Double => "Double",
        }
    }

    /// The Java keyword for this primitive, e.g. `int`.
    #[must_use]
    pub fn java_name(&self) -> &'static str {
        match self {
            JvmPrimitiveKind::Boolean => "boolean",
            JvmPrimitiveKind::Char => "char",
            JvmPrimitiveKind::Byte => "byte",
            JvmPrimitiveKind::Short => "short",
            JvmPrimitiveKind::Int => "int",
            JvmPrimitiveKind::Float => "float",
            JvmPrimitiveKind::Long => "long",
            JvmPrimitiveKind::Double => "double",
        }
    }

    /// The boxed wrapper class in `java.lang`, e.g. `java.lang.Integer`.
    #[must_use]
    pub fn wrapper_class_id(&self) -> ClassId {
        let simple = match self {
            JvmPrimitiveKind::Boolean => "Boolean",
            JvmPrimitiveKind::Char => "Character",
            JvmPrimitiveKind::Byte => "Byte",
            JvmPrimitiveKind::Short => "Short",
            JvmPrimitiveKind::Int => "Integer",
            JvmPrimitiveKind::Float => "Float",
            JvmPrimitiveKind::Long => "Long",
            JvmPrimitiveKind::Double => "Double",
        };
        ClassId::new(FqName::new("java.lang"), simple)
    }

    /// The object-type descriptor of the wrapper, e.g. `Ljava/lang/Integer;`.
    #[must_use]
    pub fn wrapper_descriptor(&self) -> JvmDescriptor {
        JvmDescriptor::object(&self.wrapper_class_id())
    }

    /// The Kotlin class this primitive represents, e.g. `kotlin.Int`.
    #[must_use]
    pub fn kotlin_class_id(&self) -> ClassId {
        ClassId::new(FqName::new("kotlin"), self.kotlin_name())
    }

    /// The dedicated Kotlin primitive-array class, e.g. `kotlin.IntArray`.
    #[must_use]
    pub fn kotlin_array_class_id(&self) -> ClassId {
        ClassId::new(FqName::new("kotlin"), &format!("{}Array", self.kotlin_name()))
    }

    /// Look up the kind whose Kotlin class has the given qualified name.
    #[must_use]
    pub fn from_kotlin_fq_name(fq_name: &FqName) -> Option<Self> {
        if fq_name.parent().as_str() != "kotlin" {
            return None;
        }
        match fq_name.short_name() {
            "Boolean" => Some(JvmPrimitiveKind::Boolean),
            "Char" => Some(JvmPrimitiveKind::Char),
            "Byte" => Some(JvmPrimitiveKind::Byte),
            "Short" => Some(JvmPrimitiveKind::Short),
            "Int" => Some(JvmPrimitiveKind::Int),
            "Float" => Some(JvmPrimitiveKind::Float),
            "Long" => Some(JvmPrimitiveKind::Long),
            "Double" => Some(JvmPrimitiveKind::Double),
            _ => None,
        }
    }

    /// Look up the kind by descriptor code.
    #[must_use]
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'Z' => Some(JvmPrimitiveKind::Boolean),
            'C' => Some(JvmPrimitiveKind::Char),
            'B' => Some(JvmPrimitiveKind::Byte),
            'S' => Some(JvmPrimitiveKind::Short),
            'I' => Some(JvmPrimitiveKind::Int),
            'F' => Some(JvmPrimitiveKind::Float),
            'J' => Some(JvmPrimitiveKind::Long),
            'D' => Some(JvmPrimitiveKind::Double),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::{EnumCount as _, IntoEnumIterator};

    #[test]
    fn test_codes_are_distinct() {
        let codes: HashSet<char> = JvmPrimitiveKind::iter().map(|k| k.code()).collect();
        assert_eq!(codes.len(), JvmPrimitiveKind::COUNT);
        assert!(!codes.contains(&crate::metadata::descriptor::VOID_DESC));
    }

    #[test]
    fn test_kind_facts() {
        let int = JvmPrimitiveKind::Int;
        assert_eq!(int.descriptor().as_str(), "I");
        assert_eq!(int.array_descriptor().as_str(), "[I");
        assert_eq!(int.wrapper_descriptor().as_str(), "Ljava/lang/Integer;");
        assert_eq!(int.kotlin_class_id().fq_name().as_str(), "kotlin.Int");
        assert_eq!(
            int.kotlin_array_class_id().fq_name().as_str(),
            "kotlin.IntArray"
        );

        let long = JvmPrimitiveKind::Long;
        assert_eq!(long.code(), 'J');
        assert_eq!(long.wrapper_descriptor().as_str(), "Ljava/lang/Long;");
    }

    #[test]
    fn test_round_trips() {
        for kind in JvmPrimitiveKind::iter() {
            assert_eq!(JvmPrimitiveKind::from_code(kind.code()), Some(kind));
            assert_eq!(
                JvmPrimitiveKind::from_kotlin_fq_name(&kind.kotlin_class_id().fq_name()),
                Some(kind)
            );
        }
        assert_eq!(JvmPrimitiveKind::from_code('V'), None);
        assert_eq!(
            JvmPrimitiveKind::from_kotlin_fq_name(&FqName::new("kotlin.String")),
            None
        );
        // array classes are not primitives themselves
        assert_eq!(
            JvmPrimitiveKind::from_kotlin_fq_name(&FqName::new("kotlin.IntArray")),
            None
        );
    }
}
