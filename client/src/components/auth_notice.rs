//! Banner rendering the shared notice.

use leptos::prelude::*;

use crate::state::notice::NoticeState;

/// Current notice, one paragraph per line; renders nothing when cleared.
#[component]
pub fn AuthNotice() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    move || {
        notices.with(|state| {
            state.current().map(|notice| {
                let class = format!("auth-notice {}", notice.severity.css_modifier());
                let lines = notice.lines().into_iter().map(str::to_owned).collect::<Vec<_>>();
                view! {
                    <div class=class role="alert">
                        {lines
                            .into_iter()
                            .map(|line| view! { <p class="auth-notice__line">{line}</p> })
                            .collect_view()}
                    </div>
                }
            })
        })
    }
}
