use crate::basket::use_basket;
use crate::web::router::Link;
use leptos::prelude::*;
use moduway::basket::BASKET_CAPACITY;
use moduway::route::AppRoute;

#[component]
pub fn HomePage() -> impl IntoView {
    let basket = use_basket();

    view! {
        <div class="hero min-h-[60vh]">
            <div class="hero-content text-center">
                <div class="max-w-xl space-y-6">
                    <h1 class="text-4xl font-bold">"어떤 강좌가 나에게 맞을까?"</h1>
                    <p class="text-base-content/70">
                        {format!("최대 {}개 강좌를 담아 AI 분석으로 비교해 보세요.", BASKET_CAPACITY)}
                    </p>
                    <Show
                        when=move || { basket.count() > 0 }
                        fallback=|| view! { <p class="text-sm opacity-60">"분석함이 비어 있습니다."</p> }
                    >
                        <ul class="menu bg-base-100 rounded-box">
                            <For
                                each=move || basket.items()
                                key=|course| course.id
                                children=|course| view! { <li><span>{course.display_title()}</span></li> }
                            />
                        </ul>
                    </Show>
                    <Link to=AppRoute::Courses attr:class="btn btn-primary">"강좌 둘러보기"</Link>
                </div>
            </div>
        </div>
    }
}
