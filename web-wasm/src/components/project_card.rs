//! プロジェクトカード

use leptos::prelude::*;
use portfolio_common::{placeholder_data_uri, ProjectRecord};

#[component]
pub fn ProjectCard(project: ProjectRecord) -> impl IntoView {
    let (src, set_src) = signal(project.image.clone());
    // 画像が見つからなければ色付きの代替SVGに差し替える
    let fallback = placeholder_data_uri(&project);

    view! {
        <div class="project-item">
            <div class="project-image">
                <img
                    src=move || src.get()
                    alt=project.title.clone()
                    width="300"
                    height="200"
                    on:error=move |_| {
                        if src.get_untracked() != fallback {
                            set_src.set(fallback.clone());
                        }
                    }
                />
                <div class="project-overlay">
                    <div class="project-info">
                        <h3 class="project-title">{project.title.clone()}</h3>
                        <p class="project-category">{project.category.clone()}</p>
                        <span class="project-year">{project.year}</span>
                    </div>
                </div>
            </div>
        </div>
    }
}
