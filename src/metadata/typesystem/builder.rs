use strum::IntoEnumIterator;

use crate::{
    metadata::{
        descriptor::JvmDescriptor,
        names::{ClassId, FqName},
        typesystem::{
            ClassDescriptor, DescriptorRegistry, Direction, JvmPrimitiveKind, RuntimeClass,
        },
    },
    Error, Result,
};

/// One built-in class mapping supplied by a [`BuiltinClassProvider`].
///
/// When `kotlin_mutable` is present, the mapping is a readonly/mutable pair (the
/// collection interfaces); it folds into two [`Direction::Both`] single
/// registrations with the readonly class registered last, so the readonly identity
/// owns the reverse entry.
#[derive(Debug, Clone)]
pub struct BuiltinMapping {
    /// The runtime class on the JVM side.
    pub runtime: RuntimeClass,
    /// The Kotlin class it maps to.
    pub kotlin: ClassDescriptor,
    /// The mutable counterpart for readonly/mutable collection pairs.
    pub kotlin_mutable: Option<ClassDescriptor>,
    /// Requested registration direction.
    pub direction: Direction,
}

/// Enumerates the built-in class mappings during initialization.
///
/// Invoked exactly once per build. Registration order does not affect the final
/// bijection for distinct entries; later writes to the same descriptor overwrite
/// earlier ones, which only the wrapper/primitive collapse and the
/// readonly/mutable pairs rely on.
pub trait BuiltinClassProvider {
    /// The mappings to register, in registration order.
    fn mappings(&self) -> Vec<BuiltinMapping>;
}

/// Resolves the synthetic runtime name of an intrinsic companion object.
///
/// Invoked once per registered class that owns a companion. Returning `None` for
/// such a class is an internal consistency failure, not a normal runtime
/// condition: the static built-in tables and the resolver are out of sync.
pub trait IntrinsicResolver {
    /// The qualified runtime name for `companion`, or `None` when the resolver
    /// does not know the class.
    fn companion_runtime_name(&self, companion: &ClassDescriptor) -> Option<FqName>;
}

/// One-shot builder of the [`DescriptorRegistry`].
///
/// Must run to completion before any encode/decode call; it is not reentrant and
/// has to be externally serialized (typically by building the
/// [`TypeBridge`](crate::metadata::typesystem::TypeBridge) during startup). The
/// build is deterministic, so a failed build fails identically on retry and no
/// retry is attempted.
pub struct RegistryBuilder<'a> {
    registry: DescriptorRegistry,
    intrinsics: &'a dyn IntrinsicResolver,
}

impl<'a> RegistryBuilder<'a> {
    /// Create a builder resolving companion names through `intrinsics`.
    #[must_use]
    pub fn new(intrinsics: &'a dyn IntrinsicResolver) -> Self {
        RegistryBuilder {
            registry: DescriptorRegistry::new(),
            intrinsics,
        }
    }

    /// Populate the registry: the provider's built-in classes first, then the
    /// primitive kinds, matching the table's historical initialization order.
    ///
    /// # Errors
    /// Returns [`Error::IntrinsicUnmapped`] when a class owns a companion the
    /// resolver cannot name. Initialization aborts; no partial registry escapes.
    pub fn build(self, provider: &dyn BuiltinClassProvider) -> Result<DescriptorRegistry> {
        for mapping in provider.mappings() {
            match &mapping.kotlin_mutable {
                Some(mutable) => {
                    self.register_pair(&mapping.runtime, &mapping.kotlin, mutable)?;
                }
                None => {
                    self.register_class(&mapping.runtime, &mapping.kotlin, mapping.direction)?;
                }
            }
        }
        self.register_primitives()?;
        Ok(self.registry)
    }

    /// Register a single built-in class under a direction tag.
    // TODO: honour the direction tag; both directions are recorded today and
    // downstream consumers depend on the Both-equivalent outcome
    fn register_class(
        &self,
        runtime: &RuntimeClass,
        kotlin: &ClassDescriptor,
        _direction: Direction,
    ) -> Result<()> {
        self.record_class(kotlin, &runtime.descriptor())
    }

    /// Register a readonly/mutable pair. The mutable class goes first so the
    /// readonly identity ends up owning the reverse entry.
    fn register_pair(
        &self,
        runtime: &RuntimeClass,
        readonly: &ClassDescriptor,
        mutable: &ClassDescriptor,
    ) -> Result<()> {
        self.register_class(runtime, mutable, Direction::Both)?;
        self.register_class(runtime, readonly, Direction::Both)
    }

    /// Record a class in both tables and recurse into its companion object.
    ///
    /// The recursion is bounded by construction: companions come from the finite,
    /// statically known built-in set and do not own companions of their own.
    fn record_class(&self, class: &ClassDescriptor, descriptor: &JvmDescriptor) -> Result<()> {
        self.registry.record_forward(class.class_id(), descriptor);

        if let Some(companion) = class.companion() {
            let runtime_name = self
                .intrinsics
                .companion_runtime_name(companion)
                .ok_or_else(|| Error::IntrinsicUnmapped(class.class_id().fq_name()))?;
            let companion_desc = JvmDescriptor::object(&ClassId::top_level(runtime_name));
            self.record_class(companion, &companion_desc)?;
        }
        Ok(())
    }

    /// Register every primitive kind: the Kotlin class against the bare code, the
    /// dedicated array class against the array descriptor, and the wrapper
    /// descriptor reverse-only, collapsing wrapper and primitive on decode.
    fn register_primitives(&self) -> Result<()> {
        for kind in JvmPrimitiveKind::iter() {
            let kotlin_class = ClassDescriptor::with_companion(kind.kotlin_class_id());
            self.record_class(&kotlin_class, &kind.descriptor())?;

            let array_class = ClassDescriptor::new(kind.kotlin_array_class_id());
            self.record_class(&array_class, &kind.array_descriptor())?;

            self.registry
                .record_reverse(&kind.wrapper_descriptor(), kotlin_class.class_id());
        }
        Ok(())
    }
}
