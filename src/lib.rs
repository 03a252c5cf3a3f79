#![doc(html_no_source)]
#![deny(missing_docs)]

//! # kotdesc
//!
//! A bidirectional bridge between the Kotlin source-level type system and the JVM's
//! reflective type representation. Kotlin identifies types by qualified names, generic
//! parameters, nullability and companion objects; the JVM identifies them by binary
//! descriptor strings (`I`, `[I`, `Ljava/lang/Integer;`). `kotdesc` translates a fully
//! resolved Kotlin type expression into the descriptor the runtime expects, and a
//! runtime class back into the Kotlin identity that represents it.
//!
//! ## Features
//!
//! - **Total mapping** - every type expression encodes and every runtime class decodes;
//!   registry misses fall through to structurally derived descriptors and identities
//! - **Built-in remapping** - the standard `java.lang`/`java.util` to `kotlin`/
//!   `kotlin.collections` table, including readonly/mutable collection pairs
//! - **Primitive handling** - nullability selects between bare primitive codes and
//!   boxed wrapper descriptors; wrapper and primitive collapse to one identity on decode
//! - **Companion objects** - intrinsic companion objects receive their own synthetic
//!   runtime mappings
//! - **Lock-free reads** - the mapping table is built once and read concurrently
//!   without locks afterwards
//!
//! ## Quick Start
//!
//! ```rust
//! use kotdesc::prelude::*;
//! use std::sync::Arc;
//!
//! let bridge = TypeBridge::new()?;
//!
//! // kotlin.Int maps to the bare primitive code...
//! let int = Arc::new(ClassDescriptor::new(ClassId::new(FqName::new("kotlin"), "Int")));
//! assert_eq!(bridge.encode(&KotlinType::of_class(int.clone())).as_str(), "I");
//!
//! // ...unless the use site is nullable, which selects the boxed wrapper
//! let nullable_int = KotlinType::of_class(int).into_nullable();
//! assert_eq!(bridge.encode(&nullable_int).as_str(), "Ljava/lang/Integer;");
//! # Ok::<(), kotdesc::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`prelude`] - convenient re-exports of the common surface
//! - [`metadata::names`] - qualified-name identity primitives ([`FqName`](metadata::names::FqName),
//!   [`ClassId`](metadata::names::ClassId))
//! - [`metadata::descriptor`] - the JVM binary descriptor grammar
//! - [`metadata::typesystem`] - the registry, its builder and the [`TypeBridge`]
//!   encoder/decoder
//! - [`Error`] and [`Result`] - error handling
//!
//! The [`TypeBridge`] is the main entry point: it owns the descriptor registry built
//! during construction and exposes the pure `encode`/`decode` lookups.

pub mod metadata;
pub mod prelude;

mod error;

pub use error::Error;
pub use metadata::typesystem::TypeBridge;

/// Convenience `Result` type used throughout this library.
pub type Result<T> = std::result::Result<T, Error>;
