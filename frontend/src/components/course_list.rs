use crate::api::use_api;
use crate::basket::use_basket;
use crate::components::basket_panel::BasketPanel;
use crate::components::course_insight::CourseInsight;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use moduway::model::{Course, CourseId};

const NOTICE_MILLIS: u32 = 3_000;

#[component]
pub fn CourseListPage() -> impl IntoView {
    let api = use_api();
    let basket = use_basket();

    let (courses, set_courses) = signal(Vec::<Course>::new());
    let (loading, set_loading) = signal(true);
    let (notice, set_notice) = signal(Option::<(String, bool)>::None); // 消息内容, 是否出错
    let (selected, set_selected) = signal(Option::<CourseId>::None);

    // 同一时间只保留一个计时器，替换时旧计时器随 drop 取消
    let notice_timer = StoredValue::new_local(Option::<Timeout>::None);

    // 3秒后清除通知
    let notify = Callback::new(move |(message, is_error): (String, bool)| {
        set_notice.set(Some((message, is_error)));
        let timer = Timeout::new(NOTICE_MILLIS, move || set_notice.set(None));
        notice_timer.set_value(Some(timer));
    });

    // 初始加载
    spawn_local(async move {
        match api.list_courses().await {
            Ok(list) => set_courses.set(list),
            Err(e) => notify.run((format!("강좌 목록을 불러오지 못했습니다: {}", e), true)),
        }
        set_loading.set(false);
    });

    let toggle = move |course: Course| {
        let id = course.id;
        let result = if basket.is_added(id) {
            basket.remove_item(id)
        } else {
            basket.add_item(course)
        };
        if let Err(e) = result {
            notify.run((e.to_string(), true));
        }
    };

    view! {
        <div class="space-y-8">
            // 通知提示框
            <Show when=move || notice.get().is_some()>
                <div class="toast toast-top toast-end z-50">
                    <div class=move || {
                        match notice.get() {
                            Some((_, true)) => "alert alert-warning shadow-lg",
                            _ => "alert alert-success shadow-lg",
                        }
                    }>
                        <span>{move || notice.get().map(|(msg, _)| msg).unwrap_or_default()}</span>
                    </div>
                </div>
            </Show>

            <div class="grid gap-8 lg:grid-cols-3">
                <div class="lg:col-span-2 space-y-4">
                    <h1 class="text-2xl font-bold">"강좌 목록"</h1>

                    <Show when=move || loading.get()>
                        <div class="flex justify-center py-8">
                            <span class="loading loading-spinner loading-lg text-primary"></span>
                        </div>
                    </Show>
                    <Show when=move || !loading.get() && courses.with(|c| c.is_empty())>
                        <p class="text-center py-8 text-base-content/50">"표시할 강좌가 없습니다."</p>
                    </Show>

                    <div class="grid gap-4 md:grid-cols-2">
                        <For
                            each=move || courses.get()
                            key=|course| course.id
                            children=move |course| {
                                let id = course.id;
                                let title = course.display_title();
                                let instructor = course.detail_str("instructor").map(str::to_string);
                                view! {
                                    <div class="card bg-base-100 shadow">
                                        <div class="card-body">
                                            <h2 class="card-title">{title}</h2>
                                            {instructor.map(|name| view! { <p class="text-sm opacity-70">{name}</p> })}
                                            <div class="card-actions justify-end">
                                                <button
                                                    class="btn btn-ghost btn-sm"
                                                    on:click=move |_| set_selected.set(Some(id))
                                                >
                                                    "AI 인사이트"
                                                </button>
                                                <button
                                                    class=move || if basket.is_added(id) { "btn btn-sm btn-secondary" } else { "btn btn-sm btn-primary" }
                                                    on:click=move |_| toggle(course.clone())
                                                >
                                                    {move || if basket.is_added(id) { "분석함에서 빼기" } else { "분석함에 담기" }}
                                                </button>
                                            </div>
                                        </div>
                                    </div>
                                }
                            }
                        />
                    </div>

                    {move || selected.get().map(|course_id| view! {
                        <CourseInsight course_id=course_id on_close=move |_| set_selected.set(None) />
                    })}
                </div>

                <BasketPanel notify=notify />
            </div>
        </div>
    }
}
