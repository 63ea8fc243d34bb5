use crate::api::use_api;
use leptos::prelude::*;
use leptos::task::spawn_local;
use moduway::model::CourseId;
use serde_json::Value;

type Insight = Option<Result<Value, String>>;

/// 单个洞察区块：加载中 / 错误 / JSON 结果
fn insight_section(title: &'static str, data: ReadSignal<Insight>) -> impl IntoView {
    view! {
        <div class="space-y-1">
            <h3 class="font-semibold">{title}</h3>
            {move || match data.get() {
                None => view! { <span class="loading loading-dots loading-sm"></span> }.into_any(),
                Some(Err(e)) => view! { <p class="text-error text-sm">{e}</p> }.into_any(),
                Some(Ok(value)) => {
                    let pretty = serde_json::to_string_pretty(&value).unwrap_or_default();
                    view! { <pre class="text-xs whitespace-pre-wrap bg-base-200 rounded p-2">{pretty}</pre> }
                        .into_any()
                }
            }}
        </div>
    }
}

/// 课程 AI 洞察：AI 评价、评论摘要、情感分析
#[component]
pub fn CourseInsight(course_id: CourseId, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let api = use_api();

    let (ai_review, set_ai_review) = signal(Insight::None);
    let (summary, set_summary) = signal(Insight::None);
    let (sentiment, set_sentiment) = signal(Insight::None);

    spawn_local(async move {
        let review = api.get_course_ai_review(course_id).await;
        set_ai_review.set(Some(review.map_err(|e| e.to_string())));

        let review_summary = api.get_course_review_summary(course_id).await;
        set_summary.set(Some(review_summary.map_err(|e| e.to_string())));

        let analysis = api.get_course_sentiment(course_id).await;
        set_sentiment.set(Some(analysis.map_err(|e| e.to_string())));
    });

    view! {
        <div class="card bg-base-100 shadow">
            <div class="card-body space-y-3">
                <div class="flex justify-between items-center">
                    <h2 class="card-title">{format!("강좌 #{} AI 인사이트", course_id)}</h2>
                    <button class="btn btn-sm btn-circle btn-ghost" on:click=move |_| on_close.run(())>
                        "✕"
                    </button>
                </div>
                {insight_section("AI 평가", ai_review)}
                {insight_section("리뷰 요약", summary)}
                {insight_section("감정 분석", sentiment)}
            </div>
        </div>
    }
}
