//! Sector title and row name uniqueness.
//!
//! Titles are unique across all sectors, row names within one sector. A
//! colliding proposal gets a ` (2)`, ` (3)`, ... suffix; once the numeric
//! range is exhausted a short random suffix is used instead.

use std::collections::HashSet;

use seatkit_core::constants::{DEFAULT_ROW_NAME, DEFAULT_SECTOR_TITLE, NAME_SUFFIX_LIMIT};
use uuid::Uuid;

use crate::canvas::Canvas;
use crate::model::EntityId;

const ROW_LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

fn random_suffix() -> String {
    Uuid::new_v4().simple().to_string()[..2].to_string()
}

fn resolve(taken: &HashSet<&str>, base: &str) -> String {
    if !taken.contains(base) {
        return base.to_string();
    }
    for i in 2..NAME_SUFFIX_LIMIT {
        let candidate = format!("{} ({})", base, i);
        if !taken.contains(candidate.as_str()) {
            return candidate;
        }
    }
    format!("{} ({})", base, random_suffix())
}

/// Returns `proposed` (trimmed, defaulting to "Sector") or the first free
/// numbered variant of it.
pub fn ensure_unique_title(canvas: &Canvas, proposed: &str, exclude: Option<EntityId>) -> String {
    let base = match proposed.trim() {
        "" => DEFAULT_SECTOR_TITLE,
        name => name,
    };
    let taken: HashSet<&str> = canvas
        .sectors()
        .filter(|(id, _)| Some(*id) != exclude)
        .map(|(_, s)| s.title.as_str())
        .filter(|t| !t.is_empty())
        .collect();
    resolve(&taken, base)
}

/// Same as [`ensure_unique_title`], scoped to the rows of one sector.
pub fn ensure_unique_row_name(
    canvas: &Canvas,
    sector: EntityId,
    proposed: &str,
    exclude: Option<EntityId>,
) -> String {
    let base = match proposed.trim() {
        "" => DEFAULT_ROW_NAME,
        name => name,
    };
    let rows = canvas.rows_in(sector);
    let taken: HashSet<&str> = rows
        .iter()
        .filter(|(id, _)| Some(*id) != exclude)
        .map(|(_, r)| r.name.as_str())
        .filter(|n| !n.is_empty())
        .collect();
    resolve(&taken, base)
}

/// First of "Row A" ... "Row Z" not used in the sector.
pub fn next_row_letter(canvas: &Canvas, sector: EntityId) -> String {
    let rows = canvas.rows_in(sector);
    let used: HashSet<&str> = rows.iter().map(|(_, r)| r.name.as_str()).collect();
    ROW_LETTERS
        .chars()
        .map(|c| format!("{} {}", DEFAULT_ROW_NAME, c))
        .find(|name| !used.contains(name.as_str()))
        .unwrap_or_else(|| ensure_unique_row_name(canvas, sector, DEFAULT_ROW_NAME, None))
}
