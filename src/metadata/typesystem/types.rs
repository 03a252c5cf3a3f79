use std::sync::Arc;

use crate::metadata::{
    descriptor::JvmDescriptor,
    names::{ClassId, FqName},
    typesystem::JvmPrimitiveKind,
};

/// Source-level metadata of a Kotlin class: its identity, an optional companion
/// object and its declared type parameters.
///
/// Immutable value. The companion object is itself a [`ClassDescriptor`] whose id
/// is nested inside the owner (`kotlin.Int.Companion`); classes registered with a
/// companion require a synthetic runtime mapping for it, see
/// [`IntrinsicResolver`](crate::metadata::typesystem::IntrinsicResolver).
#[derive(Debug, Clone)]
pub struct ClassDescriptor {
    class_id: ClassId,
    companion: Option<Box<ClassDescriptor>>,
    type_parameters: Vec<TypeParameter>,
}

impl ClassDescriptor {
    /// A class without companion or type parameters.
    #[must_use]
    pub fn new(class_id: ClassId) -> Self {
        ClassDescriptor {
            class_id,
            companion: None,
            type_parameters: Vec::new(),
        }
    }

    /// A class owning the standard `Companion` object.
    #[must_use]
    pub fn with_companion(class_id: ClassId) -> Self {
        let companion = ClassDescriptor::new(class_id.nested("Companion"));
        ClassDescriptor {
            class_id,
            companion: Some(Box::new(companion)),
            type_parameters: Vec::new(),
        }
    }

    /// Attach declared type parameters.
    #[must_use]
    pub fn with_type_parameters(mut self, parameters: Vec<TypeParameter>) -> Self {
        self.type_parameters = parameters;
        self
    }

    /// The identity of this class.
    #[must_use]
    pub fn class_id(&self) -> &ClassId {
        &self.class_id
    }

    /// The companion object, if this class owns one.
    #[must_use]
    pub fn companion(&self) -> Option<&ClassDescriptor> {
        self.companion.as_deref()
    }

    /// The declared type parameters.
    #[must_use]
    pub fn type_parameters(&self) -> &[TypeParameter] {
        &self.type_parameters
    }
}

/// A declared type parameter with its ordered upper bounds.
///
/// Parameters declared without explicit bounds get the implicit `kotlin.Any?`
/// bound, so the bound list is never empty.
#[derive(Debug, Clone)]
pub struct TypeParameter {
    name: String,
    upper_bounds: Vec<KotlinType>,
}

impl TypeParameter {
    /// Create a type parameter; an empty bound list is normalized to the implicit
    /// `kotlin.Any?` bound.
    #[must_use]
    pub fn new(name: &str, mut upper_bounds: Vec<KotlinType>) -> Self {
        if upper_bounds.is_empty() {
            upper_bounds.push(KotlinType::default_upper_bound());
        }
        TypeParameter {
            name: name.to_string(),
            upper_bounds,
        }
    }

    /// The declared name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All upper bounds in declaration order.
    #[must_use]
    pub fn upper_bounds(&self) -> &[KotlinType] {
        &self.upper_bounds
    }

    /// The first declared upper bound. Descriptor mapping erases a parameter to
    /// this bound alone, even when more bounds are declared.
    #[must_use]
    pub fn first_upper_bound(&self) -> &KotlinType {
        &self.upper_bounds[0]
    }
}

/// What a type expression refers to: a class or a declared type parameter.
#[derive(Debug, Clone)]
pub enum TypeClassifier {
    /// A class reference.
    Class(Arc<ClassDescriptor>),
    /// A type parameter reference.
    Parameter(TypeParameter),
}

/// A fully resolved source-level type expression: a classifier, the use-site
/// nullability and the generic arguments.
///
/// Immutable value; "resolved" means no inference is pending, which keeps the
/// descriptor mapping a pure recursion over this structure.
#[derive(Debug, Clone)]
pub struct KotlinType {
    classifier: TypeClassifier,
    nullable: bool,
    arguments: Vec<KotlinType>,
}

impl KotlinType {
    /// A non-nullable class type without arguments.
    #[must_use]
    pub fn of_class(class: Arc<ClassDescriptor>) -> Self {
        KotlinType {
            classifier: TypeClassifier::Class(class),
            nullable: false,
            arguments: Vec::new(),
        }
    }

    /// A non-nullable type parameter reference.
    #[must_use]
    pub fn of_parameter(parameter: TypeParameter) -> Self {
        KotlinType {
            classifier: TypeClassifier::Parameter(parameter),
            nullable: false,
            arguments: Vec::new(),
        }
    }

    /// Attach generic arguments.
    #[must_use]
    pub fn with_arguments(mut self, arguments: Vec<KotlinType>) -> Self {
        self.arguments = arguments;
        self
    }

    /// This type with the nullable marker set.
    #[must_use]
    pub fn into_nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// A nullable copy of this type. Used when mapping `Array<T>` elements, where
    /// primitive element types must resolve to their boxed wrappers.
    #[must_use]
    pub fn make_nullable(&self) -> Self {
        self.clone().into_nullable()
    }

    /// The classifier of this type.
    #[must_use]
    pub fn classifier(&self) -> &TypeClassifier {
        &self.classifier
    }

    /// Whether the use site is nullable.
    #[must_use]
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// The generic arguments.
    #[must_use]
    pub fn arguments(&self) -> &[KotlinType] {
        &self.arguments
    }

    /// The implicit `kotlin.Any?` bound of unbounded type parameters.
    pub(crate) fn default_upper_bound() -> Self {
        let any = ClassDescriptor::new(ClassId::new(FqName::new("kotlin"), "Any"));
        KotlinType::of_class(Arc::new(any)).into_nullable()
    }
}

/// Value model of a loaded JVM class, the input to
/// [`TypeBridge::decode`](crate::metadata::typesystem::TypeBridge::decode).
///
/// Stands in for the runtime's `java.lang.Class` with exactly the structure the
/// bridge inspects: primitives, arrays of a component class, and named object
/// classes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RuntimeClass {
    /// A primitive class such as `int.class`.
    Primitive(JvmPrimitiveKind),
    /// An array class with its component class.
    Array(Box<RuntimeClass>),
    /// A named object class.
    Object(ClassId),
}

impl RuntimeClass {
    /// A primitive class.
    #[must_use]
    pub fn primitive(kind: JvmPrimitiveKind) -> Self {
        RuntimeClass::Primitive(kind)
    }

    /// An array class of the given component.
    #[must_use]
    pub fn array(component: RuntimeClass) -> Self {
        RuntimeClass::Array(Box::new(component))
    }

    /// A named object class.
    #[must_use]
    pub fn object(class_id: ClassId) -> Self {
        RuntimeClass::Object(class_id)
    }

    /// Whether this is a primitive class.
    #[must_use]
    pub fn is_primitive(&self) -> bool {
        matches!(self, RuntimeClass::Primitive(_))
    }

    /// Whether this is an array class.
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, RuntimeClass::Array(_))
    }

    /// The component class of an array class.
    #[must_use]
    pub fn component_type(&self) -> Option<&RuntimeClass> {
        match self {
            RuntimeClass::Array(component) => Some(component),
            _ => None,
        }
    }

    /// The binary descriptor of this class.
    #[must_use]
    pub fn descriptor(&self) -> JvmDescriptor {
        match self {
            RuntimeClass::Primitive(kind) => kind.descriptor(),
            RuntimeClass::Array(component) => JvmDescriptor::array(&component.descriptor()),
            RuntimeClass::Object(class_id) => JvmDescriptor::object(class_id),
        }
    }

    /// The identity derived from the class itself, used as the decode fallback
    /// when no registry entry exists.
    ///
    /// Follows the runtime's own naming: object classes keep their id, primitives
    /// use the bare keyword name, array classes use their descriptor string.
    #[must_use]
    pub fn class_id(&self) -> ClassId {
        match self {
            RuntimeClass::Object(class_id) => class_id.clone(),
            RuntimeClass::Primitive(kind) => ClassId::new(FqName::root(), kind.java_name()),
            RuntimeClass::Array(_) => {
                ClassId::new(FqName::root(), self.descriptor().as_str())
            }
        }
    }
}
