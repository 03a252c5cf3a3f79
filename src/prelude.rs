//! # kotdesc Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and
//! traits from the kotdesc library. Import this module to get quick access to the
//! essential types for mapping between Kotlin types and JVM descriptors.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all kotdesc operations
pub use crate::Error;

/// The result type used throughout kotdesc
pub use crate::Result;

// ================================================================================================
// Main Entry Point
// ================================================================================================

/// The encoder/decoder between Kotlin type expressions and JVM descriptors
pub use crate::metadata::typesystem::TypeBridge;

// ================================================================================================
// Identities and Descriptors
// ================================================================================================

/// Dot-separated qualified name
pub use crate::metadata::names::FqName;

/// Class identity: package plus relative class name
pub use crate::metadata::names::ClassId;

/// JVM binary descriptor string
pub use crate::metadata::descriptor::JvmDescriptor;

// ================================================================================================
// Type System
// ================================================================================================

/// The closed set of JVM primitive kinds
pub use crate::metadata::typesystem::JvmPrimitiveKind;

/// Source-level class metadata
pub use crate::metadata::typesystem::ClassDescriptor;

/// Fully resolved source-level type expression
pub use crate::metadata::typesystem::{KotlinType, TypeClassifier, TypeParameter};

/// Value model of a loaded JVM class
pub use crate::metadata::typesystem::RuntimeClass;

// ================================================================================================
// Registry Construction
// ================================================================================================

/// The bidirectional name/descriptor table and registration direction tag
pub use crate::metadata::typesystem::{DescriptorRegistry, Direction};

/// One-shot registry construction and its collaborator traits
pub use crate::metadata::typesystem::{
    BuiltinClassProvider, BuiltinMapping, IntrinsicResolver, KotlinBuiltins, KotlinIntrinsics,
    RegistryBuilder,
};
