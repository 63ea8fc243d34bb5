//! AI 比较分析表单
//!
//! 表单值不做本地校验，范围由服务端检查，错误信息原样显示。

use crate::api::use_api;
use crate::basket::use_basket;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use moduway::model::CourseId;
use moduway::protocol::{AnalyzeComparisonRequest, UserPreferences};
use serde_json::Value;

const DEFAULT_WEEKLY_HOURS: u32 = 10;
const DEFAULT_PREFERENCE: u8 = 3;
const MAX_PREFERENCE: u8 = 5;

/// 表单状态结构体
///
/// 使用 `RwSignal` 因为它实现了 `Copy` trait，可以直接在闭包间传递。
#[derive(Clone, Copy)]
struct FormState {
    weekly_hours: RwSignal<u32>,
    theory: RwSignal<u8>,
    practical: RwSignal<u8>,
    difficulty: RwSignal<u8>,
    duration: RwSignal<u8>,
    user_goal: RwSignal<String>,
}

impl FormState {
    fn new() -> Self {
        Self {
            weekly_hours: RwSignal::new(DEFAULT_WEEKLY_HOURS),
            theory: RwSignal::new(DEFAULT_PREFERENCE),
            practical: RwSignal::new(DEFAULT_PREFERENCE),
            difficulty: RwSignal::new(DEFAULT_PREFERENCE),
            duration: RwSignal::new(DEFAULT_PREFERENCE),
            user_goal: RwSignal::new(String::new()),
        }
    }

    fn reset(&self) {
        self.weekly_hours.set(DEFAULT_WEEKLY_HOURS);
        self.theory.set(DEFAULT_PREFERENCE);
        self.practical.set(DEFAULT_PREFERENCE);
        self.difficulty.set(DEFAULT_PREFERENCE);
        self.duration.set(DEFAULT_PREFERENCE);
        self.user_goal.set(String::new());
    }

    /// 将表单状态转换为 API 请求对象
    fn to_request(&self, course_ids: Vec<CourseId>) -> AnalyzeComparisonRequest {
        AnalyzeComparisonRequest {
            course_ids,
            weekly_hours: self.weekly_hours.get_untracked(),
            user_preferences: UserPreferences {
                theory: self.theory.get_untracked(),
                practical: self.practical.get_untracked(),
                difficulty: self.difficulty.get_untracked(),
                duration: self.duration.get_untracked(),
            },
            user_goal: self.user_goal.get_untracked(),
        }
    }
}

/// 偏好滑块 (0-5)
#[component]
fn PreferenceSlider(label: &'static str, value: RwSignal<u8>) -> impl IntoView {
    view! {
        <div class="form-control">
            <label class="label">
                <span class="label-text">{label}</span>
                <span class="label-text-alt">{move || value.get()}</span>
            </label>
            <input
                type="range"
                min="0"
                max=MAX_PREFERENCE.to_string()
                class="range range-sm range-primary"
                prop:value=move || value.get().to_string()
                on:input=move |ev| {
                    if let Ok(v) = event_target_value(&ev).parse::<u8>() {
                        value.set(v);
                    }
                }
            />
        </div>
    }
}

#[component]
pub fn AnalysisForm(#[prop(into)] notify: Callback<(String, bool)>) -> impl IntoView {
    let api = use_api();
    let basket = use_basket();
    let form = FormState::new();

    let (submitting, set_submitting) = signal(false);
    let (result, set_result) = signal(Option::<Value>::None);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let request = form.to_request(basket.course_ids());
        let api = api.clone();
        set_submitting.set(true);

        spawn_local(async move {
            match api.analyze_comparison(&request).await {
                Ok(analysis) => {
                    set_result.set(Some(analysis));
                    notify.run(("분석이 완료되었습니다.".to_string(), false));
                }
                Err(e) => notify.run((format!("분석 요청에 실패했습니다: {}", e), true)),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form class="space-y-4" on:submit=on_submit>
            <div class="form-control">
                <label for="weekly_hours" class="label">
                    <span class="label-text">"주당 학습 가능 시간"</span>
                </label>
                <input id="weekly_hours"
                    type="number"
                    class="input input-bordered w-full"
                    prop:value=move || form.weekly_hours.get().to_string()
                    on:input=move |ev| {
                        if let Ok(v) = event_target_value(&ev).parse::<u32>() {
                            form.weekly_hours.set(v);
                        }
                    }
                />
            </div>

            <PreferenceSlider label="이론" value=form.theory />
            <PreferenceSlider label="실습" value=form.practical />
            <PreferenceSlider label="난이도" value=form.difficulty />
            <PreferenceSlider label="학습 기간" value=form.duration />

            <div class="form-control">
                <label for="user_goal" class="label">
                    <span class="label-text">"학습 목표"</span>
                </label>
                <textarea id="user_goal"
                    class="textarea textarea-bordered w-full"
                    placeholder="이 강좌들로 무엇을 이루고 싶은지 적어 주세요."
                    prop:value=move || form.user_goal.get()
                    on:input=move |ev| form.user_goal.set(event_target_value(&ev))
                ></textarea>
            </div>

            <div class="flex gap-2 justify-end">
                <button type="button" class="btn btn-ghost" on:click=move |_| {
                    form.reset();
                    set_result.set(None);
                }>
                    "초기화"
                </button>
                <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                    <Show when=move || submitting.get()>
                        <span class="loading loading-spinner loading-sm"></span>
                    </Show>
                    "AI 분석"
                </button>
            </div>
        </form>

        {move || result.get().map(|analysis| {
            let pretty = serde_json::to_string_pretty(&analysis).unwrap_or_default();
            view! {
                <div class="mockup-code mt-4 text-xs">
                    <pre class="px-4 whitespace-pre-wrap"><code>{pretty}</code></pre>
                </div>
            }
        })}
    }
}
