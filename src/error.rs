use thiserror::Error;

use crate::metadata::names::FqName;

/// The generic Error type, which provides coverage for all errors this library can
/// potentially return.
///
/// The mapping surface itself is total: encoding a type expression and decoding a
/// runtime class always produce a value, falling back to structurally derived
/// descriptors and identities when no registry entry exists. Errors can therefore
/// only arise while the mapping table is being built.
#[derive(Error, Debug)]
pub enum Error {
    /// No intrinsic runtime name exists for a companion object that the built-in
    /// tables claim to have one.
    ///
    /// This is an internal consistency failure: the static built-in class tables and
    /// the intrinsic resolver are out of sync. Initialization aborts instead of
    /// substituting a default mapping, since a partial table would silently
    /// misresolve unrelated types later. The associated [`FqName`] identifies the
    /// class whose companion could not be mapped.
    #[error("Failed to map intrinsic companion object of {0}")]
    IntrinsicUnmapped(FqName),
}
