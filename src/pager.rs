/// Listings shown per page of the results view.
pub const PAGE_SIZE: usize = 5;

/// Number of pages needed for `len` items. Callers must not paginate an
/// empty set; zero means there is nothing to render.
pub fn page_count(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size)
}

/// Clamps a page index into `0..pages`. Navigation callbacks store the
/// unclamped index; this runs in the render step.
pub fn clamp_page(page: usize, pages: usize) -> usize {
    if pages == 0 {
        return 0;
    }
    page.min(pages - 1)
}

pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = (page * page_size).min(items.len());
    let end = ((page + 1) * page_size).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_covers_all_items() {
        for len in 1..=40usize {
            for page_size in 1..=7usize {
                let pages = page_count(len, page_size);
                assert!(pages * page_size >= len);
                assert!((pages - 1) * page_size < len);
            }
        }
    }

    #[test]
    fn page_count_of_empty_is_zero() {
        assert_eq!(page_count(0, PAGE_SIZE), 0);
    }

    #[test]
    fn clamp_is_noop_in_bounds() {
        assert_eq!(clamp_page(0, 3), 0);
        assert_eq!(clamp_page(2, 3), 2);
    }

    #[test]
    fn clamp_pulls_overflow_to_last_page() {
        assert_eq!(clamp_page(7, 3), 2);
        assert_eq!(clamp_page(usize::MAX, 1), 0);
    }

    #[test]
    fn slice_covers_expected_window() {
        let items: Vec<usize> = (0..12).collect();
        assert_eq!(page_slice(&items, 0, 5), &[0, 1, 2, 3, 4]);
        assert_eq!(page_slice(&items, 1, 5), &[5, 6, 7, 8, 9]);
        assert_eq!(page_slice(&items, 2, 5), &[10, 11]);
        assert_eq!(page_slice(&items, 3, 5), &[] as &[usize]);
    }
}
