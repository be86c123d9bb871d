//! 検索欄とカテゴリタブ

use leptos::prelude::*;

#[component]
pub fn FilterBar<FS, FC>(
    search_term: Signal<String>,
    selected_category: Signal<String>,
    categories: Vec<String>,
    on_search: FS,
    on_select: FC,
) -> impl IntoView
where
    FS: Fn(String) + 'static + Clone + Send,
    FC: Fn(String) + 'static + Clone + Send,
{
    view! {
        <div class="gallery-controls">
            <div class="search-box">
                <input
                    type="text"
                    placeholder="Search projects..."
                    prop:value=move || search_term.get()
                    on:input=move |ev| on_search(event_target_value(&ev))
                />
            </div>

            <div class="filter-tabs">
                {categories
                    .into_iter()
                    .map(|category| {
                        let on_select = on_select.clone();
                        let is_active = {
                            let category = category.clone();
                            move || selected_category.get() == category
                        };
                        view! {
                            <button
                                class="filter-tab"
                                class:active=is_active
                                on:click={
                                    let category = category.clone();
                                    move |_| on_select(category.clone())
                                }
                            >
                                {category.clone()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
