//! Byte order policy of a decoder instance.

use crate::swap::Swap;

/// The byte order of multi-byte values in the source buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endian {
    /// Most-significant byte first. Also known as network order.
    Big,
    /// Least-significant byte first.
    Little,
}

impl Endian {
    /// The byte order of the target architecture.
    pub const fn native() -> Self {
        if cfg!(target_endian = "big") {
            Endian::Big
        } else {
            Endian::Little
        }
    }

    /// Network byte order, the order of wire-format protocol headers.
    pub const fn network() -> Self {
        Endian::Big
    }

    /// True when values read under this policy must be swapped to become native.
    #[inline]
    pub const fn needs_swap(self) -> bool {
        !matches!(
            (self, Self::native()),
            (Endian::Big, Endian::Big) | (Endian::Little, Endian::Little)
        )
    }

    /// Convert between this byte order and the native one.
    ///
    /// The conversion is its own inverse, so the same call serves reads and writes.
    #[inline]
    pub fn apply<T: Swap>(self, value: T) -> T {
        if self.needs_swap() { value.swap() } else { value }
    }
}

impl Default for Endian {
    fn default() -> Self {
        Self::network()
    }
}

impl std::str::FromStr for Endian {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "big" | "be" | "network" => Ok(Endian::Big),
            "little" | "le" => Ok(Endian::Little),
            "native" => Ok(Endian::native()),
            other => Err(format!("unknown byte order: {}", other)),
        }
    }
}
