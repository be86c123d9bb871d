//! プロジェクトギャラリー
//!
//! カタログは表示時に一度だけ受け取り、以降はフィルタ状態だけが変わる。

use leptos::prelude::*;
use crate::components::{filter_bar::FilterBar, project_card::ProjectCard};
use portfolio_common::{Catalog, Gallery, EMPTY_HINT, EMPTY_TITLE};

#[component]
pub fn ProjectGallery(catalog: Catalog) -> impl IntoView {
    let gallery = RwSignal::new(Gallery::new(catalog));
    let categories = gallery.with_untracked(|g| g.categories().to_vec());

    let search_term = Signal::derive(move || gallery.with(|g| g.state().search_term.clone()));
    let selected_category =
        Signal::derive(move || gallery.with(|g| g.state().selected_category.clone()));

    let on_search = move |term: String| {
        gallery.update(|g| {
            g.set_search(term);
        });
    };
    let on_select = move |category: String| {
        gallery.update(|g| {
            g.select_category(category);
        });
    };

    let visible = move || gallery.with(|g| g.visible().into_iter().cloned().collect::<Vec<_>>());
    let summary = move || gallery.with(|g| g.summary());

    view! {
        <section id="gallery" class="gallery">
            <div class="gallery-container">
                <div class="section-header">
                    <span class="section-badge">"Complete Portfolio"</span>
                    <h2 class="section-title">
                        <span class="gradient-text">"100+ Projects"</span>
                        <br />
                        "and counting"
                    </h2>
                </div>

                <FilterBar
                    search_term=search_term
                    selected_category=selected_category
                    categories=categories
                    on_search=on_search
                    on_select=on_select
                />

                <div class="results-info">
                    <span class="results-count">{move || summary().to_string()}</span>
                </div>

                <Show
                    when=move || !summary().is_empty()
                    fallback=|| view! {
                        <div class="no-results">
                            <h3>{EMPTY_TITLE}</h3>
                            <p>{EMPTY_HINT}</p>
                        </div>
                    }
                >
                    <div class="projects-grid">
                        <For
                            each=visible
                            key=|project| project.id
                            children=|project| view! { <ProjectCard project=project /> }
                        />
                    </div>
                </Show>
            </div>
        </section>
    }
}
