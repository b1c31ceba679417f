//! Vendors and the read-only vendor registry.

use serde::{Deserialize, Serialize};

/// Vendor identifier (caller-assigned, opaque string).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VendorId(String);

macro_rules! impl_string_newtype {
    ($t:ty) => {
        impl $t {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// An empty identifier never resolves and fails required-field checks.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

impl_string_newtype!(VendorId);

pub(crate) use impl_string_newtype;

/// Registered vendor (reference data; the engine never mutates vendors).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vendor {
    pub id: VendorId,
    pub name: String,
}

impl Vendor {
    pub fn new(id: impl Into<VendorId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Read-only lookup over the fixed vendor set.
///
/// The backing set is established once at construction; there is no way to
/// add or remove vendors afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorRegistry {
    vendors: Vec<Vendor>,
}

impl VendorRegistry {
    pub fn new(vendors: Vec<Vendor>) -> Self {
        Self { vendors }
    }

    pub fn find(&self, id: &VendorId) -> Option<&Vendor> {
        self.vendors.iter().find(|v| &v.id == id)
    }

    pub fn contains(&self, id: &VendorId) -> bool {
        self.find(id).is_some()
    }

    /// Snapshot copy of the registry. Callers own the result outright.
    pub fn vendors(&self) -> Vec<Vendor> {
        self.vendors.clone()
    }
}
