//! Pagination over a sorted sequence.

use serde::{Deserialize, Serialize};

/// Fixed number of items per catalog page.
pub const PAGE_SIZE: usize = 16;

/// Pagination metadata for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// Current page (1-indexed, clamped).
    pub page: usize,
    /// Total number of pages; an empty result is exactly 1 page of 0 items.
    pub total_pages: usize,
    /// Total matching items across all pages.
    pub total_count: usize,
    /// 1-based index of the first item on this page; 0 when empty.
    pub range_start: usize,
    /// 1-based index of the last item on this page; 0 when empty.
    pub range_end: usize,
}

impl PageInfo {
    pub fn is_first(&self) -> bool {
        self.page == 1
    }

    pub fn is_last(&self) -> bool {
        self.page >= self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Slice one page out of a sorted sequence.
///
/// The requested page is clamped into `[1, total_pages]`; callers that
/// mutate filter/sort parameters reset to page 1 themselves (the
/// parameter setters enforce that), so the clamp only covers stale page
/// numbers after the result set shrinks.
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> (Vec<T>, PageInfo) {
    let total_count = items.len();
    let total_pages = if total_count == 0 {
        1
    } else {
        total_count.div_ceil(per_page)
    };
    let page = page.clamp(1, total_pages);

    let start = (page - 1) * per_page;
    let end = (start + per_page).min(total_count);
    let slice = if start < total_count {
        items[start..end].to_vec()
    } else {
        Vec::new()
    };

    let info = PageInfo {
        page,
        total_pages,
        total_count,
        range_start: if total_count == 0 { 0 } else { start + 1 },
        range_end: if total_count == 0 { 0 } else { end },
    };

    (slice, info)
}

/// A token in the visible page-number strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageToken {
    /// A clickable page number.
    Page(usize),
    /// An ellipsis gap.
    Ellipsis,
}

/// Lay out the visible page-number strip for `(current, total_pages)`.
///
/// At most 5 numeric tokens are shown. With 5 pages or fewer, all are
/// listed; otherwise the strip windows around the current page with
/// ellipsis gaps: near the start `[1 2 3 4 .. last]`, near the end
/// `[1 .. last-3 last-2 last-1 last]`, and in the middle
/// `[1 .. cur-1 cur cur+1 .. last]`.
pub fn page_strip(current: usize, total_pages: usize) -> Vec<PageToken> {
    use PageToken::{Ellipsis, Page};

    let mut tokens = Vec::new();

    if total_pages <= 5 {
        tokens.extend((1..=total_pages).map(Page));
    } else if current <= 3 {
        tokens.extend((1..=4).map(Page));
        tokens.push(Ellipsis);
        tokens.push(Page(total_pages));
    } else if current >= total_pages - 2 {
        tokens.push(Page(1));
        tokens.push(Ellipsis);
        tokens.extend((total_pages - 3..=total_pages).map(Page));
    } else {
        tokens.push(Page(1));
        tokens.push(Ellipsis);
        tokens.extend((current - 1..=current + 1).map(Page));
        tokens.push(Ellipsis);
        tokens.push(Page(total_pages));
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageToken::{Ellipsis, Page};

    #[test]
    fn test_basic_slicing() {
        let items: Vec<u32> = (1..=45).collect();
        let (slice, info) = paginate(&items, 2, 10);
        assert_eq!(slice, (11..=20).collect::<Vec<u32>>());
        assert_eq!(info.page, 2);
        assert_eq!(info.total_pages, 5);
        assert_eq!(info.total_count, 45);
        assert_eq!(info.range_start, 11);
        assert_eq!(info.range_end, 20);
        assert!(info.has_prev());
        assert!(info.has_next());
    }

    #[test]
    fn test_twenty_items_page_size_sixteen() {
        // 20 matches at page size 16: page 1 shows 1-16, page 2 shows 17-20.
        let items: Vec<u32> = (1..=20).collect();

        let (slice, info) = paginate(&items, 1, 16);
        assert_eq!(slice.len(), 16);
        assert_eq!(info.total_pages, 2);
        assert_eq!((info.range_start, info.range_end), (1, 16));

        let (slice, info) = paginate(&items, 2, 16);
        assert_eq!(slice, (17..=20).collect::<Vec<u32>>());
        assert_eq!((info.range_start, info.range_end), (17, 20));
        assert!(info.is_last());
    }

    #[test]
    fn test_empty_result_is_one_page_of_zero_items() {
        let items: Vec<u32> = Vec::new();
        let (slice, info) = paginate(&items, 1, 16);
        assert!(slice.is_empty());
        assert_eq!(info.total_pages, 1);
        assert_eq!(info.total_count, 0);
        assert_eq!((info.range_start, info.range_end), (0, 0));
        assert!(info.is_first() && info.is_last());
    }

    #[test]
    fn test_stale_page_is_clamped() {
        let items: Vec<u32> = (1..=5).collect();
        let (slice, info) = paginate(&items, 9, 16);
        assert_eq!(info.page, 1);
        assert_eq!(slice.len(), 5);
    }

    #[test]
    fn test_page_slices_partition_the_sequence() {
        // Sum of per-page slice lengths equals the total count for a few
        // shapes, including exact multiples of the page size.
        for total in [0usize, 1, 15, 16, 17, 32, 45] {
            let items: Vec<usize> = (0..total).collect();
            let (_, first) = paginate(&items, 1, 16);
            let mut seen = 0;
            for page in 1..=first.total_pages {
                let (slice, _) = paginate(&items, page, 16);
                seen += slice.len();
            }
            assert_eq!(seen, total, "total {total}");
            assert_eq!(first.total_pages, if total == 0 { 1 } else { total.div_ceil(16) });
        }
    }

    #[test]
    fn test_strip_lists_all_when_five_or_fewer() {
        assert_eq!(page_strip(1, 1), vec![Page(1)]);
        assert_eq!(
            page_strip(3, 5),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
        );
    }

    #[test]
    fn test_strip_near_start() {
        assert_eq!(
            page_strip(2, 9),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(9)]
        );
        assert_eq!(
            page_strip(3, 9),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(9)]
        );
    }

    #[test]
    fn test_strip_near_end() {
        assert_eq!(
            page_strip(8, 9),
            vec![Page(1), Ellipsis, Page(6), Page(7), Page(8), Page(9)]
        );
        assert_eq!(
            page_strip(7, 9),
            vec![Page(1), Ellipsis, Page(6), Page(7), Page(8), Page(9)]
        );
    }

    #[test]
    fn test_strip_middle_window() {
        assert_eq!(
            page_strip(5, 9),
            vec![
                Page(1),
                Ellipsis,
                Page(4),
                Page(5),
                Page(6),
                Ellipsis,
                Page(9)
            ]
        );
    }
}
