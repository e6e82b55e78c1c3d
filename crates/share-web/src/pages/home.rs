use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::components::ShareButton;
use crate::config::{ShareTarget, SiteConfig};
use crate::share::ShareError;

/// Server function to read share.toml
/// Runs on the server so the page works before (and without) hydration
#[server(FetchSiteConfig)]
pub async fn fetch_site_config() -> Result<SiteConfig, ServerFnError> {
    use crate::config::data_dir;

    Ok(SiteConfig::load_or_default(&data_dir()))
}

#[component]
pub fn HomePage() -> impl IntoView {
    let config = Resource::new(|| (), |_| fetch_site_config());

    view! {
        <Title text="share-web" />
        <Meta name="description" content="Share buttons that appear only where the platform offers a native share sheet." />
        <main class="max-w-[80ch] mx-auto px-4 py-8 md:py-12">
            <Suspense fallback=|| view! { <p class="text-[var(--ink-light)]">"Loading\u{2026}"</p> }>
                {move || {
                    config.get().map(|result| match result {
                        Ok(site) => view! { <SiteContent site=site /> }.into_any(),
                        Err(_) => view! {
                            <p class="text-[var(--ink-light)]">"Share targets unavailable."</p>
                        }.into_any(),
                    })
                }}
            </Suspense>
        </main>
    }
}

#[component]
fn SiteContent(site: SiteConfig) -> impl IntoView {
    let SiteConfig { name, tagline, targets } = site;
    let empty = targets.is_empty();

    view! {
        <header class="mb-8 text-center">
            <h1 class="text-xl font-bold">{name}</h1>
            <div class="text-[var(--ink-light)] mt-2">{tagline}</div>
        </header>
        {empty.then(|| view! {
            <p class="text-[var(--ink-light)]">"Nothing configured in share.toml yet."</p>
        })}
        {targets.into_iter().map(|target| view! { <TargetSection target=target /> }).collect_view()}
    }
}

/// One configured target: anchored heading, payload preview and share button
#[component]
fn TargetSection(target: ShareTarget) -> impl IntoView {
    let ShareTarget { id, heading, title, text, url } = target;
    let anchor_href = format!("#{}", id);
    let aria_label = format!("Share \u{201C}{}\u{201D}", title);
    let (shown_title, shown_text, href, link_text) = (title.clone(), text.clone(), url.clone(), url.clone());

    // Cancelling the sheet is routine, anything else is worth a console line
    let on_error = Callback::new(|err: ShareError| {
        if !err.is_cancelled() {
            leptos::logging::warn!("[home] share failed: {}", err);
        }
    });

    view! {
        <section id=id class="mb-8">
            <h2 class="font-bold uppercase mb-3">
                {format!("\u{2500}\u{2524} {} \u{251C}\u{2500}", heading)}
                <a href=anchor_href class="section-anchor ml-1" aria-label="Link to this target">" \u{00A7}"</a>
            </h2>
            <div class="pl-4 border-l border-dashed border-[var(--rule)]">
                <div>
                    <strong>{shown_title}</strong>
                </div>
                <div class="text-[var(--ink-light)]">{shown_text}</div>
                <div class="mb-3 break-all">
                    <a href=href target="_blank" rel="noopener noreferrer">
                        {link_text} " \u{2197}"
                    </a>
                </div>
                <ShareButton
                    title=title
                    text=text
                    url=url
                    on_error=on_error
                    attr:class="share-trigger"
                    attr:aria-label=aria_label
                />
            </div>
        </section>
    }
}
