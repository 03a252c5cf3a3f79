//! Kotlin / JVM type system bridge.
//!
//! This module maps between Kotlin's source-level view of a type and the JVM's
//! binary descriptor view. It is deliberately split the same way the data flows:
//!
//! # Key Components
//!
//! - [`JvmPrimitiveKind`]: the closed set of JVM primitive types with their
//!   descriptor codes, boxed wrappers and Kotlin counterparts
//! - [`KotlinType`] / [`ClassDescriptor`] / [`TypeParameter`]: fully resolved
//!   source-level type expressions and class metadata
//! - [`RuntimeClass`]: value model of a loaded JVM class, the decode input
//! - [`DescriptorRegistry`]: the bidirectional lookup table between qualified
//!   Kotlin names and descriptors
//! - [`RegistryBuilder`]: one-shot construction of the registry from a
//!   [`BuiltinClassProvider`] and an [`IntrinsicResolver`]
//! - [`TypeBridge`]: the encoder/decoder consulting the registry
//!
//! # Mapping rules
//!
//! The rules are order-sensitive: type parameters erase to their first upper
//! bound, `Array<T>` boxes primitive element types while the dedicated
//! `IntArray`-style classes map directly, nullability selects between bare
//! primitive codes and wrapper descriptors, and only then is the registry
//! consulted, with a structural fallback behind it. See [`TypeBridge`].
//!
//! # Thread Safety
//!
//! The registry is populated exactly once by [`RegistryBuilder`]; afterwards it is
//! read-only and shared across arbitrarily many concurrent readers without locks.
//!
//! # Examples
//!
//! ```rust
//! use kotdesc::metadata::typesystem::{RuntimeClass, TypeBridge};
//! use kotdesc::metadata::names::{ClassId, FqName};
//!
//! let bridge = TypeBridge::new()?;
//!
//! // java.util.List decodes to the readonly kotlin.collections.List identity
//! let list = RuntimeClass::object(ClassId::top_level(FqName::new("java.util.List")));
//! assert_eq!(bridge.decode(&list).fq_name(), FqName::new("kotlin.collections.List"));
//! # Ok::<(), kotdesc::Error>(())
//! ```

mod builder;
mod builtins;
mod primitives;
mod registry;
mod resolver;
mod types;

pub use builder::{BuiltinClassProvider, BuiltinMapping, IntrinsicResolver, RegistryBuilder};
pub use builtins::{KotlinBuiltins, KotlinIntrinsics};
pub use primitives::JvmPrimitiveKind;
pub use registry::{DescriptorRegistry, Direction};
pub use resolver::TypeBridge;
pub use types::{ClassDescriptor, KotlinType, RuntimeClass, TypeClassifier, TypeParameter};
