use folio_core::{PageCursor, PageMarker, WindowPolicy, WindowRequest, compute_window};

fn valid_requests() -> impl Iterator<Item = WindowRequest> {
    (5..=11).flat_map(|max_length| {
        (0..=40).flat_map(move |last_page| {
            (1..=last_page.max(1))
                .map(move |current_page| WindowRequest::new(current_page, last_page, max_length))
        })
    })
}

fn pages(markers: &[PageMarker]) -> Vec<usize> {
    markers.iter().filter_map(|marker| marker.page()).collect()
}

#[test]
fn small_collections_render_every_page() {
    for request in valid_requests().filter(|req| req.last_page <= req.max_length) {
        let expected: Vec<PageMarker> = (1..=request.last_page).map(PageMarker::Page).collect();
        assert_eq!(request.compute(), expected, "{request:?}");
    }
}

#[test]
fn windows_fit_the_budget() {
    for request in valid_requests() {
        let markers = request.compute();
        assert!(markers.len() <= request.max_length, "{request:?}: {markers:?}");
    }
}

#[test]
fn ellipses_never_touch() {
    for request in valid_requests() {
        let markers = request.compute();
        assert!(
            markers
                .windows(2)
                .all(|pair| !(pair[0].is_ellipsis() && pair[1].is_ellipsis())),
            "{request:?}: {markers:?}"
        );
    }
}

#[test]
fn pages_strictly_increase_and_ellipses_hide_pages() {
    for request in valid_requests() {
        let markers = request.compute();
        assert!(
            pages(&markers).windows(2).all(|pair| pair[0] < pair[1]),
            "{request:?}: {markers:?}"
        );
        for (index, marker) in markers.iter().enumerate() {
            if marker.is_ellipsis() {
                let before = markers[..index].iter().rev().find_map(|m| m.page());
                let after = markers[index + 1..].iter().find_map(|m| m.page());
                match (before, after) {
                    (Some(low), Some(high)) => {
                        assert!(high - low >= 2, "{request:?}: {markers:?}");
                    }
                    _ => panic!("ellipsis at an edge for {request:?}: {markers:?}"),
                }
            }
        }
    }
}

#[test]
fn large_collections_keep_both_edges() {
    for request in valid_requests().filter(|req| req.last_page > req.max_length) {
        let markers = request.compute();
        assert_eq!(markers.first(), Some(&PageMarker::Page(1)), "{request:?}");
        assert_eq!(
            markers.last(),
            Some(&PageMarker::Page(request.last_page)),
            "{request:?}"
        );
    }
}

#[test]
fn current_page_is_always_visible() {
    for request in valid_requests().filter(|req| req.last_page > 0) {
        let markers = request.compute();
        assert!(
            markers.contains(&PageMarker::Page(request.current_page)),
            "{request:?}: {markers:?}"
        );
    }
}

#[test]
fn computation_is_repeatable() {
    for request in valid_requests() {
        assert_eq!(request.compute(), request.compute());
    }
}

#[test]
fn strict_policy_accepts_every_valid_request() {
    for request in valid_requests() {
        assert_eq!(
            request.compute_with(WindowPolicy::Strict),
            Ok(request.compute()),
            "{request:?}"
        );
    }
}

#[test]
fn clamped_requests_satisfy_strict_validation() {
    for max_length in 0..=9 {
        for last_page in 0..=12 {
            for current_page in 0..=15 {
                let request = WindowRequest::new(current_page, last_page, max_length).clamped();
                assert_eq!(request.validate(), Ok(()), "{request:?}");
            }
        }
    }
}

#[test]
fn cursor_windows_match_free_function() {
    let cursor = PageCursor::from_items(6, 480, 25);
    assert_eq!(cursor.last(), 20);
    assert_eq!(
        cursor.window(7, WindowPolicy::Clamp),
        Ok(compute_window(6, 20, 7))
    );
}
