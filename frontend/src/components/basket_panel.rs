use crate::basket::use_basket;
use crate::components::analysis_form::AnalysisForm;
use leptos::prelude::*;
use moduway::basket::{BASKET_CAPACITY, BasketState};
use moduway::error::BasketError;

/// 分析篮面板：已选课程、移除/清空按钮和分析表单
#[component]
pub fn BasketPanel(#[prop(into)] notify: Callback<(String, bool)>) -> impl IntoView {
    let basket = use_basket();

    // 存储写入失败时通知用户
    let report = move |result: Result<(), BasketError>| {
        if let Err(e) = result {
            notify.run((e.to_string(), true));
        }
    };

    view! {
        <div class="card bg-base-100 shadow-xl h-fit">
            <div class="card-body space-y-2">
                <h2 class="card-title justify-between">
                    "분석함"
                    <span class=move || match basket.state() {
                        BasketState::Full => "badge badge-warning",
                        _ => "badge badge-ghost",
                    }>
                        {move || format!("{}/{}", basket.count(), BASKET_CAPACITY)}
                    </span>
                </h2>

                <Show
                    when=move || basket.state() != BasketState::Empty
                    fallback=|| view! { <p class="text-sm opacity-60">"비교할 강좌를 담아 주세요."</p> }
                >
                    <ul class="space-y-2">
                        <For
                            each=move || basket.items()
                            key=|course| course.id
                            children=move |course| {
                                let id = course.id;
                                view! {
                                    <li class="flex items-center justify-between gap-2">
                                        <span class="truncate">{course.display_title()}</span>
                                        <button
                                            class="btn btn-ghost btn-xs"
                                            on:click=move |_| report(basket.remove_item(id))
                                        >
                                            "✕"
                                        </button>
                                    </li>
                                }
                            }
                        />
                    </ul>
                    <button class="btn btn-outline btn-sm" on:click=move |_| report(basket.clear())>
                        "모두 비우기"
                    </button>
                </Show>

                <div class="divider"></div>
                <AnalysisForm notify=notify />
            </div>
        </div>
    }
}
