//! Deterministic selection and quicksort with median of medians pivots.
//!
//! Both algorithms work in place on anything that implements [`Elements`], and see elements only
//! through a caller supplied `leq` ("less than or equal") predicate that must implement a total
//! order. Typed slices use the plain functions, untyped fixed-stride byte blocks use the `_raw`
//! variants.
//!
//! Neither algorithm allocates. If `leq` is not a total order the resulting order is unspecified,
//! but all original elements remain in the buffer and the stack depth stays logarithmic.

mod accessor;
mod config;
mod error;
mod partition;
mod pivot;
mod quicksort;
mod select;

pub use accessor::{Elements, RawBlocks};
pub use config::{
    PartitionPolicy, SelectConfig, DEFAULT_GROUP_SIZE, DEFAULT_TIE_PERCENT, ENV_GROUP_SIZE,
    ENV_POLICY, ENV_SMALL_THRESHOLD,
};
pub use error::{Result, SelectError};

/// Selection and sorting with a fixed, validated [`SelectConfig`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MedianSelect {
    config: SelectConfig,
}

impl Default for MedianSelect {
    /// Uses [`SelectConfig::global`], which honors the `MOMSELECT_*` environment variables.
    fn default() -> Self {
        Self {
            config: SelectConfig::global(),
        }
    }
}

impl MedianSelect {
    pub fn new(config: SelectConfig) -> Result<Self> {
        Ok(Self {
            config: config.validate()?,
        })
    }

    pub fn config(&self) -> &SelectConfig {
        &self.config
    }

    /// Moves the element of rank `index` to `index` and returns `index`.
    ///
    /// Afterwards every element before `index` is `leq` the selected one, and the selected one is
    /// `leq` every element after it. The rest of the order is unspecified.
    pub fn select_nth_elements<B, F>(&self, v: &mut B, index: usize, mut leq: F) -> Result<usize>
    where
        B: Elements + ?Sized,
        F: FnMut(&B::Elem, &B::Elem) -> bool,
    {
        let len = v.len();
        if len == 0 {
            return Err(SelectError::EmptyInput);
        }
        if index >= len {
            return Err(SelectError::RankOutOfBounds { rank: index, len });
        }

        log::debug!(
            "select rank {index} of {len} elements, group size {}, policy {}",
            self.config.group_size,
            self.config.policy
        );

        Ok(select::select_aux(
            v,
            index,
            0,
            len - 1,
            &mut leq,
            &self.config,
        ))
    }

    /// Sorts `v` according to `leq`. Not stable, *O*(*n* \* log(*n*)) worst-case.
    pub fn sort_elements<B, F>(&self, v: &mut B, mut leq: F)
    where
        B: Elements + ?Sized,
        F: FnMut(&B::Elem, &B::Elem) -> bool,
    {
        let len = v.len();

        log::debug!(
            "sort {len} elements, group size {}, policy {}",
            self.config.group_size,
            self.config.policy
        );

        if len < 2 {
            return;
        }

        quicksort::quick_sort_select_aux(v, 0, len - 1, &mut leq, &self.config);
    }

    pub fn select_nth_by<T, F>(&self, v: &mut [T], index: usize, leq: F) -> Result<usize>
    where
        F: FnMut(&T, &T) -> bool,
    {
        self.select_nth_elements(v, index, leq)
    }

    pub fn select_median_by<T, F>(&self, v: &mut [T], leq: F) -> Result<usize>
    where
        F: FnMut(&T, &T) -> bool,
    {
        let mid = v.len() / 2;
        self.select_nth_elements(v, mid, leq)
    }

    pub fn sort_by<T, F>(&self, v: &mut [T], leq: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        self.sort_elements(v, leq);
    }

    /// Selection over `len` untyped elements of `elem_size` bytes at the start of `bytes`.
    pub fn select_nth_raw<F>(
        &self,
        bytes: &mut [u8],
        len: usize,
        elem_size: usize,
        index: usize,
        leq: F,
    ) -> Result<usize>
    where
        F: FnMut(&[u8], &[u8]) -> bool,
    {
        let mut blocks = RawBlocks::new(bytes, len, elem_size)?;
        self.select_nth_elements(&mut blocks, index, leq)
    }

    /// Sorts `len` untyped elements of `elem_size` bytes at the start of `bytes`.
    pub fn sort_raw<F>(&self, bytes: &mut [u8], len: usize, elem_size: usize, leq: F) -> Result<()>
    where
        F: FnMut(&[u8], &[u8]) -> bool,
    {
        let mut blocks = RawBlocks::new(bytes, len, elem_size)?;
        self.sort_elements(&mut blocks, leq);
        Ok(())
    }
}

/// Moves the median, the element of rank `v.len() / 2`, to that index and returns it.
///
/// # Examples
///
/// ```
/// let mut v = [5, 3, 8, 1, 9, 2];
/// let mid = momselect::select_median(&mut v).unwrap();
/// assert_eq!((mid, v[mid]), (3, 5));
/// ```
pub fn select_median<T: Ord>(v: &mut [T]) -> Result<usize> {
    select_median_by(v, |a, b| a.le(b))
}

/// Like [`select_median`] with `leq` as the order.
pub fn select_median_by<T, F>(v: &mut [T], leq: F) -> Result<usize>
where
    F: FnMut(&T, &T) -> bool,
{
    MedianSelect::default().select_median_by(v, leq)
}

/// Moves the element of rank `index` to `index` and returns `index`, in linear time.
pub fn select_nth<T: Ord>(v: &mut [T], index: usize) -> Result<usize> {
    select_nth_by(v, index, |a, b| a.le(b))
}

/// Like [`select_nth`] with `leq` as the order.
pub fn select_nth_by<T, F>(v: &mut [T], index: usize, leq: F) -> Result<usize>
where
    F: FnMut(&T, &T) -> bool,
{
    MedianSelect::default().select_nth_by(v, index, leq)
}

/// Sorts the slice with quicksort, using the median of medians as pivot.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place (i.e., does not allocate),
/// and *O*(*n* \* log(*n*)) worst-case.
///
/// # Examples
///
/// ```
/// let mut v = [5, 3, 8, 1, 9, 2];
/// momselect::quick_sort_select(&mut v);
/// assert_eq!(v, [1, 2, 3, 5, 8, 9]);
/// ```
pub fn quick_sort_select<T: Ord>(v: &mut [T]) {
    quick_sort_select_by(v, |a, b| a.le(b));
}

/// Like [`quick_sort_select`] with `leq` as the order.
///
/// `leq` must implement a total order. Reverse sorting is `|a, b| b <= a`.
pub fn quick_sort_select_by<T, F>(v: &mut [T], leq: F)
where
    F: FnMut(&T, &T) -> bool,
{
    MedianSelect::default().sort_by(v, leq);
}

/// Moves the median of `len` untyped elements of `elem_size` bytes each to its sorted position
/// and returns that position.
pub fn select_median_raw<F>(bytes: &mut [u8], len: usize, elem_size: usize, leq: F) -> Result<usize>
where
    F: FnMut(&[u8], &[u8]) -> bool,
{
    MedianSelect::default().select_nth_raw(bytes, len, elem_size, len / 2, leq)
}

/// Sorts `len` untyped elements of `elem_size` bytes each in place.
pub fn quick_sort_select_raw<F>(
    bytes: &mut [u8],
    len: usize,
    elem_size: usize,
    leq: F,
) -> Result<()>
where
    F: FnMut(&[u8], &[u8]) -> bool,
{
    MedianSelect::default().sort_raw(bytes, len, elem_size, leq)
}
