use crate::layout::{Footer, Navbar};
use crate::routes::AppRoutes;
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="app-shell">
                <Navbar />
                <main class="content-wrapper">
                    <div class="container">
                        <AppRoutes />
                    </div>
                </main>
                <Footer />
            </div>
        </Router>
    }
}
