use crate::auth::use_auth;
use crate::basket::use_basket;
use crate::web::router::Link;
use leptos::prelude::*;
use moduway::route::AppRoute;

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = use_auth();
    let basket = use_basket();

    view! {
        <div class="navbar bg-base-100 shadow">
            <div class="flex-1 gap-2">
                <Link to=AppRoute::Home attr:class="btn btn-ghost text-xl">"모두의 강좌"</Link>
                <Link to=AppRoute::Courses attr:class="btn btn-ghost">"강좌 목록"</Link>
            </div>
            <div class="flex-none gap-2">
                <Link to=AppRoute::Courses attr:class="btn btn-outline btn-sm gap-2">
                    "분석함"
                    <span class="badge badge-primary">{move || basket.count()}</span>
                </Link>
                <Show when=move || auth.is_authenticated()>
                    <button class="btn btn-ghost btn-sm" on:click=move |_| auth.logout()>
                        "로그아웃"
                    </button>
                </Show>
            </div>
        </div>
    }
}
