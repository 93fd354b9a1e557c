//! The process-partitioned reference stream.

use crate::common::{Error, PageId, Result};

/// An immutable sequence of page references, split evenly across processes.
///
/// # Layout
/// ```text
/// ┌──────────────┬──────────────┬─────┬──────────────┐
/// │  process 0   │  process 1   │ ... │  process n-1 │
/// └──────────────┴──────────────┴─────┴──────────────┘
///  per_process    per_process          per_process
/// ```
/// The full stream is the concatenation of the substreams in process order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceStream {
    pages: Vec<PageId>,
    num_processes: usize,
    per_process: usize,
}

impl ReferenceStream {
    /// Wrap a concatenated stream of `num_processes` equal substreams.
    ///
    /// # Errors
    /// Returns `Error::InvalidConfig` if `num_processes` is 0 or does not
    /// divide the stream length.
    pub fn new(pages: Vec<PageId>, num_processes: usize) -> Result<Self> {
        if num_processes == 0 {
            return Err(Error::InvalidConfig(
                "a reference stream needs at least one process".to_string(),
            ));
        }
        if pages.len() % num_processes != 0 {
            return Err(Error::InvalidConfig(format!(
                "{} references cannot be split evenly across {} processes",
                pages.len(),
                num_processes
            )));
        }

        let per_process = pages.len() / num_processes;
        Ok(Self {
            pages,
            num_processes,
            per_process,
        })
    }

    /// Build a stream from explicit per-process substreams.
    ///
    /// # Errors
    /// Returns `Error::InvalidConfig` if there are no substreams or their
    /// lengths differ.
    pub fn from_processes<I, P>(processes: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: IntoIterator<Item = u32>,
    {
        let processes: Vec<Vec<PageId>> = processes
            .into_iter()
            .map(|p| p.into_iter().map(PageId::new).collect())
            .collect();

        if let Some(first) = processes.first() {
            if processes.iter().any(|p| p.len() != first.len()) {
                return Err(Error::InvalidConfig(
                    "process substreams must have equal length".to_string(),
                ));
            }
        }

        let num_processes = processes.len();
        Self::new(processes.into_iter().flatten().collect(), num_processes)
    }

    /// The full concatenated stream.
    #[inline]
    pub fn pages(&self) -> &[PageId] {
        &self.pages
    }

    /// The substream of process `index` (0-based).
    pub fn process(&self, index: usize) -> Option<&[PageId]> {
        if index >= self.num_processes {
            return None;
        }
        let start = index * self.per_process;
        self.pages.get(start..start + self.per_process)
    }

    /// All substreams in process order.
    pub fn processes(&self) -> impl Iterator<Item = &[PageId]> + '_ {
        (0..self.num_processes).filter_map(move |i| self.process(i))
    }

    /// Number of processes.
    #[inline]
    pub fn num_processes(&self) -> usize {
        self.num_processes
    }

    /// Length of each substream.
    #[inline]
    pub fn references_per_process(&self) -> usize {
        self.per_process
    }

    /// Total number of references.
    #[inline]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Whether the stream has no references.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Number of distinct pages referenced.
    pub fn distinct_pages(&self) -> usize {
        let mut seen: Vec<PageId> = self.pages.clone();
        seen.sort_unstable();
        seen.dedup();
        seen.len()
    }

    /// CRC32 of the stream, for telling seeded runs apart in logs.
    pub fn fingerprint(&self) -> u32 {
        let mut hasher = crc32fast::Hasher::new();
        for page in &self.pages {
            hasher.update(&page.0.to_le_bytes());
        }
        hasher.finalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition() {
        let stream = ReferenceStream::from_processes([vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(stream.len(), 6);
        assert_eq!(stream.references_per_process(), 3);

        let p1: Vec<u32> = stream.process(1).unwrap().iter().map(|p| p.0).collect();
        assert_eq!(p1, vec![4, 5, 6]);
        assert!(stream.process(2).is_none());
        assert_eq!(stream.processes().count(), 2);
    }

    #[test]
    fn test_uneven_split_rejected() {
        let pages = vec![PageId::new(0); 7];
        assert!(matches!(
            ReferenceStream::new(pages, 2),
            Err(Error::InvalidConfig(_))
        ));
        assert!(ReferenceStream::from_processes([vec![1, 2], vec![3]]).is_err());
        assert!(ReferenceStream::new(Vec::new(), 0).is_err());
    }

    #[test]
    fn test_empty_processes() {
        let stream = ReferenceStream::new(Vec::new(), 3).unwrap();
        assert!(stream.is_empty());
        assert_eq!(stream.processes().filter(|p| p.is_empty()).count(), 3);
    }

    #[test]
    fn test_distinct_pages() {
        let stream = ReferenceStream::from_processes([vec![1, 2, 1, 7]]).unwrap();
        assert_eq!(stream.distinct_pages(), 3);
    }

    #[test]
    fn test_fingerprint_depends_on_order() {
        let a = ReferenceStream::from_processes([vec![1, 2, 3]]).unwrap();
        let b = ReferenceStream::from_processes([vec![3, 2, 1]]).unwrap();
        assert_eq!(a.fingerprint(), a.clone().fingerprint());
        assert_ne!(a.fingerprint(), b.fingerprint());
    }
}
