use leptos::prelude::*;

/// Problems the site hit while starting up, shown to visitors instead of
/// failing the page.
#[derive(Clone)]
pub struct ErrorLogContext {
    pub errors: RwSignal<Vec<String>>,
}

impl ErrorLogContext {
    pub fn push(&self, error: impl ToString) {
        self.errors.update(|errors| errors.push(error.to_string()));
    }
}

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let error_log = expect_context::<ErrorLogContext>();

    move || {
        let errors = error_log.errors.get();
        (!errors.is_empty()).then(|| {
            view! {
                <div class="p-2 mx-auto mt-2 max-w-5xl bg-red-50 rounded border border-red-200">
                    <p class="text-sm text-red-800">"Some content could not be loaded."</p>
                    <ul class="space-y-1 text-xs text-red-700">
                        {errors
                            .into_iter()
                            .map(|err| {
                                view! { <li class="font-mono whitespace-pre-wrap">"• " {err}</li> }
                            })
                            .collect_view()}
                    </ul>
                </div>
            }
        })
    }
}
