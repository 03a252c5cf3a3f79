//! Metadata primitives for the Kotlin / JVM type bridge.
//!
//! This module groups the value types both sides of the bridge are expressed in and
//! the type system that maps between them:
//!
//! - [`names`] - qualified-name identities ([`names::FqName`], [`names::ClassId`])
//! - [`descriptor`] - the JVM binary descriptor grammar ([`descriptor::JvmDescriptor`])
//! - [`typesystem`] - primitive kinds, type expressions, the descriptor registry and
//!   the [`typesystem::TypeBridge`] encoder/decoder

pub mod descriptor;
pub mod names;
pub mod typesystem;
