//! Demo application mounting the pagination molecule over a fixed collection.

use folio_core::page_count;
use yew::prelude::*;

use crate::components::Pagination;
use crate::logic::page_caption;

const DEMO_ITEMS: usize = 487;
const DEMO_PAGE_SIZE: usize = 25;

#[function_component(App)]
fn app() -> Html {
    let current = use_state(|| 1usize);
    let total = page_count(DEMO_ITEMS, DEMO_PAGE_SIZE);
    let on_change = {
        let current = current.clone();
        Callback::from(move |page: usize| current.set(page))
    };
    let caption = page_caption(&folio_core::PageCursor::new(*current, total));

    html! {
        <main class="p-6 flex flex-col items-center gap-4">
            <p class="text-sm opacity-70">{ caption }</p>
            <Pagination current={*current} {total} on_change={on_change} />
        </main>
    }
}

/// Mount the demo application into the document body.
pub fn run_app() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
