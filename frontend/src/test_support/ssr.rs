use leptos::*;

/// Runs `f` inside a fresh reactive runtime and disposes the runtime after.
pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

/// Renders a component tree to HTML inside a throwaway reactive runtime.
pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    with_runtime(|| view().into_view().render_to_string().to_string())
}
