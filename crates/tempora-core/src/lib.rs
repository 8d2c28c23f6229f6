// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Tempora Core
//!
//! Domain-agnostic interval algebra for the Tempora time library. This crate
//! holds the building blocks that the time-domain crate (`tempora-time`)
//! instantiates over calendar dates and time points, but nothing in here
//! knows about time: every type is generic over an arbitrary totally-ordered
//! value domain.
//!
//! ## Modules
//!
//! - `interval`: A generic `Interval<T>` over any `T: Ord`, with each end
//!   independently open or closed and optionally unbounded. Supports
//!   containment, intersection tests and construction, and a deterministic
//!   total ordering by lower then upper bound.
//! - `map`: An `IntervalMap<T, V>` keyed by pairwise non-intersecting
//!   intervals, with point lookup by linear scan and insertion guarded by an
//!   intersection check (`OverlapError` on violation).
//!
//! ## Purpose
//!
//! Interval logic is notoriously easy to get wrong at the boundaries. These
//! primitives centralize the open/closed endpoint semantics in one place so
//! that higher layers (duration windows, calendar periods) inherit correct
//! behavior instead of re-deriving it.
//!
//! Refer to each module for detailed APIs and examples.

pub mod interval;
pub mod map;
