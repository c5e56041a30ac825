use yew::prelude::*;
use yew_router::components::Link;
use wasm_bindgen_futures::spawn_local;
use log::info;

use crate::content::{use_content_client, ContentKind, Entry, LatestRequest, Listing, Source};
use crate::pages::not_found::NotFound;
use crate::Route;

#[derive(Clone, PartialEq)]
enum Load<T> {
    Loading,
    Ready(T),
}

fn entry_route(kind: ContentKind, slug: &str) -> Route {
    match kind {
        ContentKind::Blog => Route::BlogPost { slug: slug.to_string() },
        ContentKind::CaseStudy => Route::CaseStudy { slug: slug.to_string() },
    }
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

fn source_note(source: Source) -> Html {
    match source {
        Source::Cms => html! {},
        Source::Fallback => html! {
            <p class="content-offline-note">
                {"Showing saved articles while our content service is unavailable."}
            </p>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct ContentListProps {
    pub kind: ContentKind,
    pub title: AttrValue,
    pub subtitle: AttrValue,
}

/// Newest-first listing of CMS entries, falling back to bundled content.
#[function_component(ContentList)]
pub fn content_list(props: &ContentListProps) -> Html {
    let client = use_content_client();
    let listing = use_state(|| Load::<Listing>::Loading);

    {
        let listing = listing.clone();
        use_effect_with_deps(
            move |kind: &ContentKind| {
                scroll_to_top();
                let kind = *kind;
                spawn_local(async move {
                    let result = client.list(kind).await;
                    info!("Loaded {} {:?} entries", result.entries.len(), kind);
                    listing.set(Load::Ready(result));
                });
                || ()
            },
            props.kind,
        );
    }

    let body = match &*listing {
        Load::Loading => html! { <p class="content-loading">{"Loading..."}</p> },
        Load::Ready(listing) => html! {
            <>
                { source_note(listing.source) }
                { for listing.entries.iter().map(|entry| html! {
                    <article class="content-preview" key={entry.slug.clone()}>
                        <Link<Route> to={entry_route(props.kind, &entry.slug)}>
                            {
                                if let Some(image) = &entry.cover_image {
                                    html! { <img src={image.clone()} alt={entry.title.clone()} loading="lazy" class="content-preview-image" /> }
                                } else {
                                    html! {}
                                }
                            }
                            <h2>{entry.title.clone()}</h2>
                            <p>{entry.excerpt.clone()}</p>
                            <span class="content-date">{entry.published_at.format("%B %-d, %Y").to_string()}</span>
                        </Link<Route>>
                    </article>
                }) }
            </>
        },
    };

    html! {
        <div class="content-list-page">
            <section class="content-hero">
                <h1>{props.title.clone()}</h1>
                <p>{props.subtitle.clone()}</p>
            </section>
            <section class="content-list">
                { body }
            </section>
            <style>
                {CONTENT_CSS}
            </style>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ContentDetailProps {
    pub kind: ContentKind,
    pub slug: String,
}

#[function_component(ContentDetail)]
pub fn content_detail(props: &ContentDetailProps) -> Html {
    let client = use_content_client();
    let entry = use_state(|| Load::<Option<(Entry, Source)>>::Loading);
    let latest = use_memo(|_| LatestRequest::default(), ());

    {
        let entry = entry.clone();
        use_effect_with_deps(
            move |(kind, slug): &(ContentKind, String)| {
                scroll_to_top();
                entry.set(Load::Loading);
                let (kind, slug) = (*kind, slug.clone());
                // A slower answer for a previous slug must not replace this one
                let ticket = latest.begin();
                spawn_local(async move {
                    let result = client.entry(kind, &slug).await;
                    if ticket.is_current() {
                        entry.set(Load::Ready(result));
                    } else {
                        info!("Dropping stale {:?} entry for {}", kind, slug);
                    }
                });
                || ()
            },
            (props.kind, props.slug.clone()),
        );
    }

    let (back_route, back_label) = match props.kind {
        ContentKind::Blog => (Route::Blog, "All articles"),
        ContentKind::CaseStudy => (Route::CaseStudies, "All case studies"),
    };

    match &*entry {
        Load::Loading => html! {
            <div class="content-detail-page">
                <p class="content-loading">{"Loading..."}</p>
                <style>{CONTENT_CSS}</style>
            </div>
        },
        Load::Ready(None) => html! { <NotFound /> },
        Load::Ready(Some((entry, source))) => html! {
            <div class="content-detail-page">
                <article class="content-detail">
                    <Link<Route> to={back_route} classes="content-back">
                        <i class="fa-solid fa-arrow-left"></i>
                        {format!(" {}", back_label)}
                    </Link<Route>>
                    { source_note(*source) }
                    <h1>{entry.title.clone()}</h1>
                    <span class="content-date">{entry.published_at.format("%B %-d, %Y").to_string()}</span>
                    {
                        if let Some(image) = &entry.cover_image {
                            html! { <img src={image.clone()} alt={entry.title.clone()} class="content-detail-image" /> }
                        } else {
                            html! {}
                        }
                    }
                    { for entry.body.split("\n\n").filter(|p| !p.trim().is_empty()).map(|paragraph| html! {
                        <p>{paragraph.trim()}</p>
                    }) }
                </article>
                <style>{CONTENT_CSS}</style>
            </div>
        },
    }
}

#[function_component(BlogList)]
pub fn blog_list() -> Html {
    html! {
        <ContentList
            kind={ContentKind::Blog}
            title="Insights"
            subtitle="Screening compliance guides and product updates from our team"
        />
    }
}

#[derive(Properties, PartialEq)]
pub struct BlogPostProps {
    pub slug: String,
}

#[function_component(BlogPost)]
pub fn blog_post(props: &BlogPostProps) -> Html {
    html! { <ContentDetail kind={ContentKind::Blog} slug={props.slug.clone()} /> }
}

const CONTENT_CSS: &str = r#"
.content-list-page,
.content-detail-page {
    max-width: 960px;
    margin: 0 auto;
    padding: 3rem 1.5rem 5rem;
    color: var(--text);
}
.content-hero {
    text-align: center;
    margin-bottom: 2.5rem;
}
.content-hero h1 {
    font-size: 2.5rem;
    margin-bottom: 0.5rem;
}
.content-hero p,
.content-date,
.content-loading {
    color: var(--text-muted);
}
.content-list {
    display: grid;
    gap: 1.5rem;
}
.content-preview a {
    display: block;
    padding: 1.5rem;
    border: 1px solid var(--border);
    border-radius: 12px;
    background: var(--bg-elevated);
    color: inherit;
    text-decoration: none;
    transition: border-color 0.2s ease;
}
.content-preview a:hover {
    border-color: var(--accent);
}
.content-preview-image,
.content-detail-image {
    width: 100%;
    border-radius: 8px;
    margin-bottom: 1rem;
}
.content-offline-note {
    font-size: 0.85rem;
    color: var(--text-muted);
    border-left: 3px solid var(--accent);
    padding-left: 0.75rem;
}
.content-back {
    color: var(--accent);
    text-decoration: none;
}
.content-detail h1 {
    font-size: 2.2rem;
    margin: 1rem 0 0.5rem;
}
.content-detail p {
    line-height: 1.7;
}
"#;
