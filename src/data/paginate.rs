//! Generic pagination over any filtered SeaORM query.

use sea_orm::{ConnectionTrait, DbErr, PaginatorTrait, SelectorTrait};

use crate::model::page::{Page, PageMeta, PageParams};

/// Runs `query` paginated by `params` and returns one page plus metadata.
///
/// The count and the fetch both run against the same already-filtered
/// query, so `total` always reflects the filter. Out-of-range pages come
/// back empty with `total` and `total_pages` still correct.
pub async fn paginate<'db, C, Q>(
    db: &'db C,
    query: Q,
    params: &PageParams,
) -> Result<Page<<Q::Selector as SelectorTrait>::Item>, DbErr>
where
    C: ConnectionTrait,
    Q: PaginatorTrait<'db, C>,
{
    let page = params.page();
    let page_size = params.page_size();

    let paginator = query.paginate(db, page_size);
    let total = paginator.num_items().await?;
    // SeaORM pages are 0-indexed; the API is 1-indexed.
    let records = paginator.fetch_page(page - 1).await?;

    Ok(Page {
        records,
        meta: PageMeta::new(page, page_size, total),
    })
}
