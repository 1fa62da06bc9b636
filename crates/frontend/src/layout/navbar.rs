use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="navbar__brand">
                <A href="/">
                    {icon("shopping-bag")}
                    <span>"E-Admin"</span>
                </A>
            </div>
            <ul class="navbar__links">
                <li class="navbar__item">
                    <A href="/">
                        {icon("home")}
                        <span>"Dashboard"</span>
                    </A>
                </li>
                <li class="navbar__item">
                    <A href="/products">
                        {icon("package")}
                        <span>"Products"</span>
                    </A>
                </li>
                <li class="navbar__item">
                    <A href="/add-product">
                        {icon("plus-circle")}
                        <span>"Add Product"</span>
                    </A>
                </li>
                <li class="navbar__item">
                    <A href="/product-list">
                        {icon("list")}
                        <span>"Product List"</span>
                    </A>
                </li>
                <li class="navbar__item">
                    <A href="/analytics">
                        {icon("bar-chart")}
                        <span>"Analytics"</span>
                    </A>
                </li>
            </ul>
        </nav>
    }
}
