//! JVM binary type descriptors.
//!
//! The runtime encodes types as ASCII descriptor strings with the grammar
//! (JVMS §4.3.2):
//!
//! ```text
//! Descriptor := PrimitiveCode            one of Z C B S I F J D
//!             | 'V'                      the no-value (void) return type
//!             | '[' Descriptor           array of the component descriptor
//!             | 'L' InternalName ';'     object type, slash-separated name
//! ```
//!
//! [`JvmDescriptor`] wraps one such string as an immutable value, opaque beyond its
//! encoding rules. The primitive codes themselves live on
//! [`JvmPrimitiveKind`](crate::metadata::typesystem::JvmPrimitiveKind).

use std::fmt;

use crate::metadata::names::ClassId;

/// The descriptor code for the no-value (void) return type.
pub const VOID_DESC: char = 'V';

/// An immutable JVM binary descriptor string, e.g. `I`, `[I` or
/// `Ljava/lang/Integer;`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JvmDescriptor(String);

impl JvmDescriptor {
    /// The descriptor of a bare primitive code.
    #[must_use]
    pub fn primitive(code: char) -> Self {
        JvmDescriptor(code.to_string())
    }

    /// The descriptor of the void return type.
    #[must_use]
    pub fn void() -> Self {
        JvmDescriptor(VOID_DESC.to_string())
    }

    /// The object-type descriptor of a class, `L<internal-name>;`.
    #[must_use]
    pub fn object(class: &ClassId) -> Self {
        JvmDescriptor(format!("L{};", class.internal_name()))
    }

    /// The array descriptor with the given component.
    #[must_use]
    pub fn array(component: &JvmDescriptor) -> Self {
        JvmDescriptor(format!("[{}", component.0))
    }

    /// The raw descriptor string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is an array descriptor.
    #[must_use]
    pub fn is_array(&self) -> bool {
        self.0.starts_with('[')
    }

    /// Whether this is an object-type descriptor.
    #[must_use]
    pub fn is_object(&self) -> bool {
        self.0.starts_with('L')
    }
}

impl fmt::Display for JvmDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
