//! DaisyUI `join` pagination molecule.

use folio_core::{DEFAULT_MAX_LENGTH, PageCursor, WindowPolicy};
use yew::prelude::*;

use crate::logic::{PaginationItem, build_items};

/// Properties for [`Pagination`].
#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    /// Current page, 1-based; clamped into the collection.
    #[prop_or(1usize)]
    pub current: usize,
    /// Total page count.
    #[prop_or(1usize)]
    pub total: usize,
    /// Maximum page markers shown, ellipses included.
    #[prop_or(DEFAULT_MAX_LENGTH)]
    pub max_length: usize,
    /// Extra classes for the container.
    #[prop_or_default]
    pub class: Classes,
    /// Receives the page chosen by the user.
    #[prop_or_default]
    pub on_change: Callback<usize>,
}

/// Page-number control with previous/next affordances.
#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let cursor = PageCursor::new(props.current, props.total);
    // clamping never fails, so an error can only mean an empty window
    let items = build_items(&cursor, props.max_length, WindowPolicy::Clamp).unwrap_or_default();

    html! {
        <nav class={classes!("join", "pagination", props.class.clone())} aria-label="pagination">
            { for items.iter().enumerate().map(|(index, item)| render_item(index, item, &props.on_change)) }
        </nav>
    }
}

fn render_item(index: usize, item: &PaginationItem, on_change: &Callback<usize>) -> Html {
    let classes = classes!(
        "btn",
        "join-item",
        item.is_active().then_some("btn-active"),
        matches!(item, PaginationItem::Ellipsis).then_some("btn-disabled"),
    );
    let onclick = item.target().map(|target| {
        let on_change = on_change.clone();
        Callback::from(move |_: MouseEvent| on_change.emit(target))
    });

    html! {
        <button
            key={item.key(index)}
            class={classes}
            disabled={item.is_disabled()}
            aria-current={item.is_active().then_some("page")}
            onclick={onclick}
        >
            { item.label() }
        </button>
    }
}
