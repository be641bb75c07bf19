//! Cursor-based listing support for collection endpoints.
//!
//! A listing request carries at most one of `before`/`after` (the pivot
//! cursor) plus an optional `limit`. Validation turns those raw query values
//! into a `(pivot id, limit, direction)` triple; the sort helpers below render
//! the keyset predicate and `ORDER BY` clause a repository needs to page
//! relative to the pivot without skipping or repeating rows.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ListingError {
    #[error("only one of `before` and `after` may be specified")]
    ConflictingCursors,
    #[error("listing value is not a valid integer")]
    NotAnInteger(#[from] std::num::ParseIntError),
}

/// Which side of the pivot a page extends toward, in canonical presentation
/// order. `Around` is reserved for future use; `validate` never produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Before,
    Around,
    After,
}

impl Direction {
    /// A `Before` page is fetched in flipped order and must be reversed
    /// before presentation so both directions read the same way.
    pub fn is_reversed(self) -> bool {
        matches!(self, Direction::Before)
    }
}

/// Per-resource listing limits. Created once per collection endpoint as a
/// constant; construction panics (at compile time for const usage) if the
/// default does not lie within `[min, max]`.
#[derive(Debug, Clone, Copy)]
pub struct Listing {
    min_limit: i64,
    max_limit: i64,
    default_limit: i64,
}

impl Listing {
    pub const fn new(min_limit: i64, max_limit: i64, default_limit: i64) -> Self {
        assert!(min_limit > 0 && min_limit <= max_limit);
        assert!(
            min_limit <= default_limit && default_limit <= max_limit,
            "default limit must lie within the min and max limits"
        );

        Self {
            min_limit,
            max_limit,
            default_limit,
        }
    }

    /// Parses and clamps a raw limit value. Absent means the default; values
    /// outside `[min, max]` are clamped, never rejected.
    pub fn validate_limit(&self, limit: Option<&str>) -> Result<i64, ListingError> {
        let Some(raw) = limit else {
            return Ok(self.default_limit);
        };

        let value: i64 = raw.trim().parse()?;
        Ok(value.clamp(self.min_limit, self.max_limit))
    }

    /// Parses a raw cursor id. Negative values are not a parse failure but a
    /// "no such entity" sentinel; callers surface them as a missing pivot.
    pub fn validate_id(id: &str) -> Result<Option<i64>, ListingError> {
        let value: i64 = id.trim().parse()?;
        Ok((value >= 0).then_some(value))
    }

    /// Validates a listing query. Returns the pivot id (if any), the
    /// effective limit and the paging direction. With no cursor the listing
    /// starts from the head of the collection, direction `After`.
    pub fn validate(
        &self,
        before: Option<&str>,
        after: Option<&str>,
        limit: Option<&str>,
    ) -> Result<(Option<i64>, i64, Direction), ListingError> {
        let limit = self.validate_limit(limit)?;

        // Empty strings do not count as a supplied cursor here, but still
        // fail integer parsing below when selected.
        let has_before = before.is_some_and(|value| !value.is_empty());
        let has_after = after.is_some_and(|value| !value.is_empty());
        if has_before && has_after {
            return Err(ListingError::ConflictingCursors);
        }

        if let Some(before) = before {
            return Ok((Self::validate_id(before)?, limit, Direction::Before));
        }
        if let Some(after) = after {
            return Ok((Self::validate_id(after)?, limit, Direction::After));
        }

        Ok((None, limit, Direction::After))
    }
}

/// One column of a resource's sort specification, with its direction in the
/// canonical (forward) presentation order. The last column must be a unique
/// id so the tuple comparison is a strict total order.
#[derive(Debug, Clone, Copy)]
pub struct SortColumn {
    pub name: &'static str,
    pub ascending: bool,
}

impl SortColumn {
    pub const fn asc(name: &'static str) -> Self {
        Self {
            name,
            ascending: true,
        }
    }

    pub const fn desc(name: &'static str) -> Self {
        Self {
            name,
            ascending: false,
        }
    }

    fn operator(&self, direction: Direction) -> &'static str {
        let forward = match direction {
            Direction::Before => !self.ascending,
            _ => self.ascending,
        };
        if forward {
            ">"
        } else {
            "<"
        }
    }
}

/// Renders the keyset predicate comparing the sort-column tuple against the
/// pivot's values, as a strict lexicographic comparison: ties on leading
/// columns fall through to the next one. Bind parameters are numbered
/// `$first_param`, `$first_param + 1`, ..., one per column, in order.
///
/// For `[desc(created_at), desc(id)]` and `After` with `first_param = 2` this
/// yields `(created_at < $2 OR (created_at = $2 AND id < $3))`.
pub fn keyset_predicate(columns: &[SortColumn], direction: Direction, first_param: usize) -> String {
    let mut clauses = Vec::with_capacity(columns.len());

    for (index, column) in columns.iter().enumerate() {
        let mut parts = Vec::with_capacity(index + 1);
        for (tied, prior) in columns[..index].iter().enumerate() {
            parts.push(format!("{} = ${}", prior.name, first_param + tied));
        }
        parts.push(format!(
            "{} {} ${}",
            column.name,
            column.operator(direction),
            first_param + index
        ));

        if parts.len() > 1 {
            clauses.push(format!("({})", parts.join(" AND ")));
        } else {
            clauses.push(parts.remove(0));
        }
    }

    format!("({})", clauses.join(" OR "))
}

/// Renders the `ORDER BY` column list for a page in the given direction.
/// `Before` flips every per-column direction; the fetched page is then
/// reversed in memory (`Direction::is_reversed`) back to canonical order.
pub fn order_clause(columns: &[SortColumn], direction: Direction) -> String {
    columns
        .iter()
        .map(|column| {
            let ascending = match direction {
                Direction::Before => !column.ascending,
                _ => column.ascending,
            };
            format!(
                "{} {}",
                column.name,
                if ascending { "ASC" } else { "DESC" }
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}
