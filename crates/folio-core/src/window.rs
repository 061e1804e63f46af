//! Windowed page-number sequences for pagination controls.
//!
//! # Design
//! - A request with `last_page <= max_length` renders every page.
//! - Larger collections keep three confirmed slots (first page, last page, one
//!   ellipsis) and split the remaining budget into a side length of
//!   `(max_length - 3) / 2`, which may be fractional.
//! - The side length is carried as its floor and ceiling so every threshold and
//!   loop bound is exact integer arithmetic: thresholds compare against the
//!   ceiling, lower bounds round up and upper bounds round down.
//! - Permissive computation never validates and never panics. Callers that want
//!   guarantees pick [`WindowPolicy::Strict`] or [`WindowPolicy::Clamp`].

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{ParsePolicyError, WindowError, WindowResult};
use crate::marker::PageMarker;

/// Slots reserved for the first page, the last page and one ellipsis.
const CONFIRMED_SLOTS: i64 = 3;

/// Smallest slot budget the windowing arithmetic supports.
pub const MIN_MAX_LENGTH: usize = 5;

/// Slot budget used when none is configured.
pub const DEFAULT_MAX_LENGTH: usize = 7;

/// How a window request is checked before computation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowPolicy {
    /// Compute whatever the arithmetic yields, even for out-of-range input.
    #[default]
    Permissive,
    /// Reject out-of-range input with a [`WindowError`].
    Strict,
    /// Pull out-of-range input back into range, then compute.
    Clamp,
}

impl WindowPolicy {
    /// Stable lowercase name used in configuration and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Permissive => "permissive",
            Self::Strict => "strict",
            Self::Clamp => "clamp",
        }
    }
}

impl Display for WindowPolicy {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for WindowPolicy {
    type Err = ParsePolicyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "permissive" => Ok(Self::Permissive),
            "strict" => Ok(Self::Strict),
            "clamp" => Ok(Self::Clamp),
            _ => Err(ParsePolicyError {
                value: value.to_string(),
            }),
        }
    }
}

/// Which layout a request resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WindowShape {
    /// Every page fits; no ellipsis.
    Full,
    /// Current page sits close to either edge; one central ellipsis.
    NearEdge,
    /// Current page is far from both edges; a centred run between two ellipses.
    TwoEllipses,
    /// Current page leans towards the first page; one ellipsis after it.
    NearStart,
    /// Current page leans towards the last page; one ellipsis before it.
    NearEnd,
}

/// Inputs to a window computation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowRequest {
    /// Page being displayed, 1-based.
    pub current_page: usize,
    /// Total page count, which is also the last page number.
    pub last_page: usize,
    /// Maximum number of markers, ellipses included.
    pub max_length: usize,
}

/// Compute a window without validation.
///
/// Shorthand for [`WindowRequest::compute`].
#[must_use]
pub fn compute_window(current_page: usize, last_page: usize, max_length: usize) -> Vec<PageMarker> {
    WindowRequest::new(current_page, last_page, max_length).compute()
}

impl WindowRequest {
    /// Build a request from its three scalars.
    #[must_use]
    pub const fn new(current_page: usize, last_page: usize, max_length: usize) -> Self {
        Self {
            current_page,
            last_page,
            max_length,
        }
    }

    /// Check the request against the window invariants.
    ///
    /// A `last_page` of zero accepts a current page of 1 so empty collections
    /// still render (as an empty window).
    ///
    /// # Errors
    ///
    /// Returns [`WindowError::MaxLengthTooSmall`] when `max_length` is below
    /// [`MIN_MAX_LENGTH`], and [`WindowError::CurrentPageOutOfRange`] when the
    /// current page is zero or past the last page.
    pub fn validate(&self) -> WindowResult<()> {
        if self.max_length < MIN_MAX_LENGTH {
            return Err(WindowError::MaxLengthTooSmall {
                max_length: self.max_length,
                minimum: MIN_MAX_LENGTH,
            });
        }
        if self.current_page == 0 || self.current_page > self.last_page.max(1) {
            return Err(WindowError::CurrentPageOutOfRange {
                current_page: self.current_page,
                last_page: self.last_page,
            });
        }
        Ok(())
    }

    /// Copy of the request with `max_length` raised to the minimum and the
    /// current page clamped into `1..=max(last_page, 1)`.
    #[must_use]
    pub fn clamped(&self) -> Self {
        Self {
            current_page: self.current_page.clamp(1, self.last_page.max(1)),
            last_page: self.last_page,
            max_length: self.max_length.max(MIN_MAX_LENGTH),
        }
    }

    /// Compute the window under the supplied policy.
    ///
    /// # Errors
    ///
    /// Only [`WindowPolicy::Strict`] fails, with the error from [`Self::validate`].
    pub fn compute_with(&self, policy: WindowPolicy) -> WindowResult<Vec<PageMarker>> {
        match policy {
            WindowPolicy::Permissive => Ok(self.compute()),
            WindowPolicy::Strict => self.try_compute(),
            WindowPolicy::Clamp => Ok(self.clamped().compute()),
        }
    }

    /// Validate, then compute.
    ///
    /// # Errors
    ///
    /// Returns the error from [`Self::validate`].
    pub fn try_compute(&self) -> WindowResult<Vec<PageMarker>> {
        if let Err(err) = self.validate() {
            warn!(
                current_page = self.current_page,
                last_page = self.last_page,
                max_length = self.max_length,
                error = %err,
                "rejected pagination window request"
            );
            return Err(err);
        }
        Ok(self.compute())
    }

    /// Layout this request resolves to.
    #[must_use]
    pub fn shape(&self) -> WindowShape {
        Bounds::from_request(self).shape()
    }

    /// Compute the window without validation.
    ///
    /// Out-of-range input yields a degenerate sequence (for example two
    /// adjacent ellipses when `max_length < 5`) rather than an error.
    #[must_use]
    pub fn compute(&self) -> Vec<PageMarker> {
        let bounds = Bounds::from_request(self);
        let shape = bounds.shape();
        let markers = bounds.render(shape);
        debug!(
            current_page = self.current_page,
            last_page = self.last_page,
            max_length = self.max_length,
            shape = ?shape,
            len = markers.len(),
            "computed pagination window"
        );
        markers
    }
}

/// `(max_length - 3) / 2` split into its floor and ceiling.
#[derive(Clone, Copy, Debug)]
struct SideLength {
    floor: i64,
    ceil: i64,
}

impl SideLength {
    const fn new(span: i64) -> Self {
        let floor = span.div_euclid(2);
        Self {
            floor,
            ceil: span - floor,
        }
    }
}

/// Request scalars widened to signed arithmetic.
#[derive(Clone, Copy, Debug)]
struct Bounds {
    current: i64,
    last: i64,
    max_length: i64,
    span: i64,
    side: SideLength,
}

impl Bounds {
    fn from_request(request: &WindowRequest) -> Self {
        let max_length = widen(request.max_length);
        let span = max_length.saturating_sub(CONFIRMED_SLOTS);
        Self {
            current: widen(request.current_page),
            last: widen(request.last_page),
            max_length,
            span,
            side: SideLength::new(span),
        }
    }

    /// Pages strictly before the current one.
    const fn before(&self) -> i64 {
        self.current.saturating_sub(1)
    }

    /// Pages strictly after the current one.
    const fn after(&self) -> i64 {
        self.last.saturating_sub(self.current)
    }

    fn shape(&self) -> WindowShape {
        if self.last <= self.max_length {
            WindowShape::Full
        } else if self.before() < self.side.ceil || self.after() < self.side.ceil {
            // integer `x < s` for half-integral `s` is `x < ceil(s)`
            WindowShape::NearEdge
        } else if self.before() >= self.span && self.after() >= self.span {
            WindowShape::TwoEllipses
        } else if self.before() < self.after() {
            WindowShape::NearStart
        } else {
            WindowShape::NearEnd
        }
    }

    fn render(&self, shape: WindowShape) -> Vec<PageMarker> {
        let mut out = Vec::new();
        match shape {
            WindowShape::Full => push_pages(&mut out, 1, self.last),
            WindowShape::NearEdge => {
                push_pages(&mut out, 1, self.side.floor.saturating_add(1));
                out.push(PageMarker::Ellipsis);
                push_pages(&mut out, self.last.saturating_sub(self.side.floor), self.last);
            }
            WindowShape::TwoEllipses => {
                out.push(PageMarker::Page(1));
                out.push(PageMarker::Ellipsis);
                push_pages(
                    &mut out,
                    self.current
                        .saturating_add(1)
                        .saturating_sub(self.side.floor),
                    self.current
                        .saturating_sub(1)
                        .saturating_add(self.side.floor),
                );
                out.push(PageMarker::Ellipsis);
                push_pages(&mut out, self.last, self.last);
            }
            WindowShape::NearStart => {
                let head_end = self.current.saturating_add(1);
                push_pages(&mut out, 1, head_end);
                let remaining = self.max_length.saturating_sub(head_end).saturating_sub(1);
                out.push(PageMarker::Ellipsis);
                push_pages(
                    &mut out,
                    self.last.saturating_sub(remaining.saturating_sub(1)),
                    self.last,
                );
            }
            WindowShape::NearEnd => {
                let tail_start = self.current.saturating_sub(1);
                let tail_len = self.last.saturating_sub(tail_start).saturating_add(1);
                let remaining = self.max_length.saturating_sub(tail_len).saturating_sub(1);
                push_pages(&mut out, 1, remaining);
                out.push(PageMarker::Ellipsis);
                push_pages(&mut out, tail_start, self.last);
            }
        }
        out
    }
}

fn widen(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Append every page in `start..=end`; an inverted range appends nothing.
fn push_pages(out: &mut Vec<PageMarker>, start: i64, end: i64) {
    // Unsigned inputs never produce indices below 1; the filter keeps the
    // narrowing conversion total.
    out.extend(
        (start.max(1)..=end)
            .filter_map(|page| usize::try_from(page).ok())
            .map(PageMarker::Page),
    );
}
