//! ナビゲーションバー

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <nav class="nav">
                <a href="#gallery" class="nav-logo">"Portfolio"</a>
                <ul class="nav-links">
                    <li><a href="#gallery">"Projects"</a></li>
                </ul>
            </nav>
        </header>
    }
}
