//! Executors and residency tags
//!
//! Every matrix carries the executor that owns its memory. Kernels are
//! selected from the sparse operand's executor; all operands of one call
//! must share a memory space.

use core::fmt;

use crate::config::ParallelConfig;

/// Execution backend owning a matrix's memory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Executor {
    /// Sequential reference backend (host)
    #[default]
    Reference,
    /// Multi-threaded host backend
    Parallel(ParallelConfig),
    /// Accelerator with device index; no kernels are built for it here
    Accelerator {
        /// Device index
        id: usize,
    },
}

/// Memory space an executor's data lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MemorySpace {
    /// Host memory, shared by all host executors
    Host,
    /// Device memory of the given accelerator
    Accelerator(usize),
}

impl Executor {
    /// Parallel executor with default configuration
    pub fn parallel() -> Self {
        Self::Parallel(ParallelConfig::default())
    }

    /// The host executor authoritative for this executor's data
    ///
    /// Host executors are their own master; accelerators report the
    /// reference executor.
    pub const fn master(self) -> Self {
        match self {
            Self::Reference | Self::Parallel(_) => self,
            Self::Accelerator { .. } => Self::Reference,
        }
    }

    /// Returns true if this executor is its own master
    pub fn is_master(self) -> bool {
        self.master() == self
    }

    /// Returns true for executors whose memory is host memory
    pub const fn is_host(self) -> bool {
        matches!(self.memory_space(), MemorySpace::Host)
    }

    /// Memory space of this executor
    pub const fn memory_space(self) -> MemorySpace {
        match self {
            Self::Reference | Self::Parallel(_) => MemorySpace::Host,
            Self::Accelerator { id } => MemorySpace::Accelerator(id),
        }
    }

    /// Returns the name of this executor type
    pub const fn name(self) -> &'static str {
        match self {
            Self::Reference => "reference",
            Self::Parallel(_) => "parallel",
            Self::Accelerator { .. } => "accelerator",
        }
    }
}

impl fmt::Display for Executor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accelerator { id } => write!(f, "accelerator:{id}"),
            other => write!(f, "{}", other.name()),
        }
    }
}

impl fmt::Display for MemorySpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Host => write!(f, "host"),
            Self::Accelerator(id) => write!(f, "accelerator:{id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_master() {
        assert_eq!(Executor::Reference.master(), Executor::Reference);
        assert_eq!(Executor::parallel().master(), Executor::parallel());
        assert_eq!(
            Executor::Accelerator { id: 1 }.master(),
            Executor::Reference
        );

        assert!(Executor::Reference.is_master());
        assert!(Executor::parallel().is_master());
        assert!(!Executor::Accelerator { id: 0 }.is_master());
    }

    #[test]
    fn test_memory_space() {
        assert_eq!(Executor::Reference.memory_space(), MemorySpace::Host);
        assert_eq!(Executor::parallel().memory_space(), MemorySpace::Host);
        assert_eq!(
            Executor::Accelerator { id: 2 }.memory_space(),
            MemorySpace::Accelerator(2)
        );
        assert!(Executor::parallel().is_host());
        assert!(!Executor::Accelerator { id: 2 }.is_host());
    }

    #[test]
    fn test_display() {
        assert_eq!(Executor::Reference.to_string(), "reference");
        assert_eq!(Executor::parallel().to_string(), "parallel");
        assert_eq!(Executor::Accelerator { id: 3 }.to_string(), "accelerator:3");
        assert_eq!(MemorySpace::Accelerator(3).to_string(), "accelerator:3");
    }
}
