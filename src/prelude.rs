//! Crate prelude.

// The actual prelude.
pub use crate::{
    set::Set,
    slice::{
        contains_slice, filter_slice, first, foreach_slice, grouped_by_slice, last, map_slice,
        map_slice_to_set, slice_complement, slice_difference, slice_intersection, slice_to_set,
        slice_union, EmptySliceError,
    },
};

// Convenient imports within the crate.
pub(crate) use derive_more::{From, IntoIterator};
pub(crate) use std::{
    collections::{HashMap, HashSet},
    fmt::{Debug, Display, Formatter, Result as FmtResult, Write},
    hash::Hash,
};
