use crate::{
    metadata::{
        descriptor::JvmDescriptor,
        names::{ClassId, FqName},
        typesystem::{
            BuiltinClassProvider, DescriptorRegistry, IntrinsicResolver, JvmPrimitiveKind,
            KotlinBuiltins, KotlinIntrinsics, KotlinType, RegistryBuilder, RuntimeClass,
            TypeClassifier,
        },
    },
    Result,
};

/// The bidirectional encoder/decoder between Kotlin type expressions and JVM
/// descriptors.
///
/// Owns the [`DescriptorRegistry`] built during construction; both [`encode`]
/// and [`decode`] are total, pure lookups with recursion bounded by the depth of
/// the type expression. After construction the bridge is read-only and can be
/// shared freely across threads.
///
/// [`encode`]: TypeBridge::encode
/// [`decode`]: TypeBridge::decode
///
/// # Examples
///
/// ```rust
/// use kotdesc::prelude::*;
/// use std::sync::Arc;
///
/// let bridge = TypeBridge::new()?;
///
/// let int = Arc::new(ClassDescriptor::new(ClassId::new(FqName::new("kotlin"), "Int")));
/// let array = Arc::new(ClassDescriptor::new(ClassId::new(FqName::new("kotlin"), "Array")));
///
/// // Array<Int> boxes its elements; IntArray maps to the dedicated form
/// let boxed = KotlinType::of_class(array)
///     .with_arguments(vec![KotlinType::of_class(int)]);
/// assert_eq!(bridge.encode(&boxed).as_str(), "[Ljava/lang/Integer;");
/// # Ok::<(), kotdesc::Error>(())
/// ```
pub struct TypeBridge {
    registry: DescriptorRegistry,
    array_class_id: ClassId,
}

impl TypeBridge {
    /// Build a bridge from the default collaborators, [`KotlinBuiltins`] and
    /// [`KotlinIntrinsics`].
    ///
    /// # Errors
    /// Returns [`Error::IntrinsicUnmapped`](crate::Error::IntrinsicUnmapped) when
    /// the built-in tables and the intrinsic resolver are out of sync.
    pub fn new() -> Result<Self> {
        TypeBridge::with_collaborators(&KotlinBuiltins, &KotlinIntrinsics)
    }

    /// Build a bridge from explicit collaborators.
    ///
    /// # Errors
    /// Returns [`Error::IntrinsicUnmapped`](crate::Error::IntrinsicUnmapped) when
    /// a registered class owns a companion the resolver cannot name.
    pub fn with_collaborators(
        provider: &dyn BuiltinClassProvider,
        intrinsics: &dyn IntrinsicResolver,
    ) -> Result<Self> {
        let registry = RegistryBuilder::new(intrinsics).build(provider)?;
        Ok(TypeBridge {
            registry,
            array_class_id: ClassId::new(FqName::new("kotlin"), "Array"),
        })
    }

    /// The registry backing this bridge.
    #[must_use]
    pub fn registry(&self) -> &DescriptorRegistry {
        &self.registry
    }

    /// Encode a fully resolved type expression as its binary descriptor.
    ///
    /// Total function; the rules short-circuit in order:
    /// 1. a type parameter erases to its *first* upper bound (not the
    ///    intersection of all bounds)
    /// 2. `kotlin.Array<T>` recurses on the element forced nullable and prepends
    ///    `[` - boxing primitive elements, unlike the dedicated `IntArray`-style
    ///    classes which rule 3 maps directly
    /// 3. primitive classes map to the bare code, or to the wrapper's object
    ///    descriptor when the use site is nullable
    /// 4. the registry's forward table
    /// 5. fallback: the object descriptor of the classifier's own identity
    ///
    /// Rules 1-3 must precede the registry lookup and the registry must precede
    /// the fallback, otherwise built-in remaps would be bypassed.
    #[must_use]
    pub fn encode(&self, ty: &KotlinType) -> JvmDescriptor {
        let class = match ty.classifier() {
            TypeClassifier::Parameter(parameter) => {
                return self.encode(parameter.first_upper_bound());
            }
            TypeClassifier::Class(class) => class,
        };

        if class.class_id() == &self.array_class_id {
            if let Some(element) = ty.arguments().first() {
                return JvmDescriptor::array(&self.encode(&element.make_nullable()));
            }
        }

        let fq_name = class.class_id().fq_name();
        if let Some(kind) = JvmPrimitiveKind::from_kotlin_fq_name(&fq_name) {
            return if ty.is_nullable() {
                kind.wrapper_descriptor()
            } else {
                kind.descriptor()
            };
        }

        if let Some(descriptor) = self.registry.descriptor_of(&fq_name) {
            return descriptor;
        }

        JvmDescriptor::object(class.class_id())
    }

    /// Decode a runtime class to the Kotlin identity that represents it.
    ///
    /// Total function: arrays of non-primitive components all erase to the single
    /// `kotlin.Array` identity; everything else goes through the registry's
    /// reverse table, falling back to the identity derived from the class itself.
    #[must_use]
    pub fn decode(&self, class: &RuntimeClass) -> ClassId {
        if let Some(component) = class.component_type() {
            if !component.is_primitive() {
                return self.array_class_id.clone();
            }
        }

        self.registry
            .class_id_of(&class.descriptor())
            .unwrap_or_else(|| class.class_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::typesystem::{ClassDescriptor, TypeParameter};
    use std::sync::Arc;

    fn bridge() -> TypeBridge {
        TypeBridge::new().unwrap()
    }

    fn class(fq: &str) -> Arc<ClassDescriptor> {
        Arc::new(ClassDescriptor::new(ClassId::top_level(FqName::new(fq))))
    }

    fn ty(fq: &str) -> KotlinType {
        KotlinType::of_class(class(fq))
    }

    #[test]
    fn test_nullability_switches_primitive_form() {
        let bridge = bridge();
        assert_eq!(bridge.encode(&ty("kotlin.Int")).as_str(), "I");
        assert_eq!(
            bridge.encode(&ty("kotlin.Int").into_nullable()).as_str(),
            "Ljava/lang/Integer;"
        );
        assert_eq!(bridge.encode(&ty("kotlin.Boolean")).as_str(), "Z");
        assert_eq!(
            bridge.encode(&ty("kotlin.Double").into_nullable()).as_str(),
            "Ljava/lang/Double;"
        );
    }

    #[test]
    fn test_generic_array_boxes_primitive_elements() {
        let bridge = bridge();

        // dedicated primitive array class maps directly
        assert_eq!(bridge.encode(&ty("kotlin.IntArray")).as_str(), "[I");

        // Array<Int> forces the element nullable, selecting the wrapper
        let array_of_int = ty("kotlin.Array").with_arguments(vec![ty("kotlin.Int")]);
        assert_eq!(
            bridge.encode(&array_of_int).as_str(),
            "[Ljava/lang/Integer;"
        );

        // nesting recurses
        let array_of_arrays =
            ty("kotlin.Array").with_arguments(vec![ty("kotlin.Array")
                .with_arguments(vec![ty("kotlin.String")])]);
        assert_eq!(
            bridge.encode(&array_of_arrays).as_str(),
            "[[Ljava/lang/String;"
        );
    }

    #[test]
    fn test_registry_remaps_builtins() {
        let bridge = bridge();
        assert_eq!(
            bridge.encode(&ty("kotlin.Any")).as_str(),
            "Ljava/lang/Object;"
        );
        assert_eq!(
            bridge.encode(&ty("kotlin.collections.List")).as_str(),
            "Ljava/util/List;"
        );
        assert_eq!(
            bridge.encode(&ty("kotlin.collections.MutableList")).as_str(),
            "Ljava/util/List;"
        );
        // nullability does not change object descriptors
        assert_eq!(
            bridge.encode(&ty("kotlin.String").into_nullable()).as_str(),
            "Ljava/lang/String;"
        );
    }

    #[test]
    fn test_unregistered_class_falls_back_to_own_identity() {
        let bridge = bridge();
        assert_eq!(
            bridge.encode(&ty("com.example.Widget")).as_str(),
            "Lcom/example/Widget;"
        );
    }

    #[test]
    fn test_type_parameter_erases_to_first_bound() {
        let bridge = bridge();

        let bounded = TypeParameter::new(
            "T",
            vec![ty("kotlin.Number"), ty("kotlin.Comparable")],
        );
        assert_eq!(
            bridge.encode(&KotlinType::of_parameter(bounded)),
            bridge.encode(&ty("kotlin.Number"))
        );

        // unbounded parameters erase to the implicit Any? bound
        let unbounded = TypeParameter::new("T", Vec::new());
        assert_eq!(
            bridge.encode(&KotlinType::of_parameter(unbounded)).as_str(),
            "Ljava/lang/Object;"
        );
    }

    #[test]
    fn test_parameter_bounded_by_parameter_recurses() {
        let bridge = bridge();
        let outer = TypeParameter::new("T", vec![ty("kotlin.Number")]);
        let inner = TypeParameter::new("U", vec![KotlinType::of_parameter(outer)]);
        assert_eq!(
            bridge.encode(&KotlinType::of_parameter(inner)).as_str(),
            "Ljava/lang/Number;"
        );
    }

    #[test]
    fn test_decode_collapses_wrapper_and_primitive() {
        let bridge = bridge();
        let kotlin_int = ClassId::new(FqName::new("kotlin"), "Int");

        let primitive = RuntimeClass::primitive(JvmPrimitiveKind::Int);
        let wrapper =
            RuntimeClass::object(ClassId::top_level(FqName::new("java.lang.Integer")));

        assert_eq!(bridge.decode(&primitive), kotlin_int);
        assert_eq!(bridge.decode(&wrapper), kotlin_int);
    }

    #[test]
    fn test_decode_erases_object_array_elements() {
        let bridge = bridge();
        let array_of_string = RuntimeClass::array(RuntimeClass::object(ClassId::top_level(
            FqName::new("java.lang.String"),
        )));
        let array_of_list = RuntimeClass::array(RuntimeClass::object(ClassId::top_level(
            FqName::new("java.util.List"),
        )));

        let kotlin_array = ClassId::new(FqName::new("kotlin"), "Array");
        assert_eq!(bridge.decode(&array_of_string), kotlin_array);
        assert_eq!(bridge.decode(&array_of_list), kotlin_array);
    }

    #[test]
    fn test_decode_primitive_arrays_keep_their_identity() {
        let bridge = bridge();
        let int_array = RuntimeClass::array(RuntimeClass::primitive(JvmPrimitiveKind::Int));
        assert_eq!(
            bridge.decode(&int_array),
            ClassId::new(FqName::new("kotlin"), "IntArray")
        );
    }

    #[test]
    fn test_decode_falls_back_to_class_identity() {
        let bridge = bridge();
        let widget = ClassId::top_level(FqName::new("com.example.Widget"));
        assert_eq!(bridge.decode(&RuntimeClass::object(widget.clone())), widget);
    }
}
