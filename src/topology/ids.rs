//! `VertexId` / `EdgeId`: strong, zero-cost handles for mesh entities
//!
//! Both wrap a `u32` stable index into the vertex or edge arrays of a mesh
//! graph. Keeping them distinct types stops an edge index from being used
//! where a vertex index is expected (and vice versa).

use std::fmt;

/// Stable index of a mesh vertex.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[repr(transparent)]
pub struct VertexId(u32);

/// Stable index of a mesh edge.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[repr(transparent)]
pub struct EdgeId(u32);

macro_rules! index_newtype {
    ($ty:ident) => {
        impl $ty {
            /// Wraps a raw index.
            #[inline]
            pub const fn new(raw: u32) -> Self {
                $ty(raw)
            }

            /// Returns the raw `u32` value.
            #[inline]
            pub const fn get(self) -> u32 {
                self.0
            }

            /// Returns the value as a `usize`, for slice indexing.
            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl From<u32> for $ty {
            #[inline]
            fn from(raw: u32) -> Self {
                $ty(raw)
            }
        }

        impl fmt::Debug for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($ty)).field(&self.0).finish()
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

index_newtype!(VertexId);
index_newtype!(EdgeId);


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_and_display() {
        let e = EdgeId::new(7);
        assert_eq!(format!("{:?}", e), "EdgeId(7)");
        assert_eq!(format!("{}", e), "7");
        assert_eq!(format!("{:?}", VertexId::new(3)), "VertexId(3)");
    }

    #[test]
    fn ordering_follows_raw_index() {
        assert!(EdgeId::new(1) < EdgeId::new(2));
        assert_eq!(VertexId::new(4).index(), 4usize);
    }

    #[test]
    fn json_roundtrip() {
        let v = VertexId::new(123);
        let s = serde_json::to_string(&v).unwrap();
        assert_eq!(s, "123");
        let back: VertexId = serde_json::from_str(&s).unwrap();
        assert_eq!(back, v);
    }
}
