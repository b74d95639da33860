//! Query-building helpers shared by the repositories.

use sea_orm::{
    sea_query::{Expr, ExprTrait, Func, SimpleExpr},
    ColumnTrait, IntoSimpleExpr,
};

/// Case-insensitive substring match on a text column.
///
/// Lowers both sides (`LOWER(col) LIKE '%term%'`) so the comparison is
/// case-insensitive on every SQLx backend, independent of collation.
pub fn contains_ci<C>(col: C, term: &str) -> SimpleExpr
where
    C: ColumnTrait,
{
    Expr::expr(Func::lower(col.into_simple_expr())).like(format!("%{}%", term.to_lowercase()))
}

/// Case-insensitive exact match on a text column.
///
/// Used for natural-key conflict checks and label resolution where the
/// stored casing should not matter (`LOWER(col) = term`).
pub fn eq_ci<C>(col: C, term: &str) -> SimpleExpr
where
    C: ColumnTrait,
{
    Expr::expr(Func::lower(col.into_simple_expr())).eq(term.to_lowercase())
}
