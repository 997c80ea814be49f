//! Substring filters over user supplied text.
//!
//! `%` and `_` in a filter value match literally. Raw SQL filters pair
//! [`contains_pattern`] with `LIKE ? ESCAPE '\'`.

use sea_orm::sea_query::LikeExpr;

const ESCAPE: char = '\\';

/// Builds a `%text%` pattern with `\`, `%` and `_` escaped by a backslash.
pub fn contains_pattern(text: &str) -> String {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push(ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Substring match for `ColumnTrait::like`.
pub fn contains(text: &str) -> LikeExpr {
    LikeExpr::new(contains_pattern(text)).escape(ESCAPE)
}
