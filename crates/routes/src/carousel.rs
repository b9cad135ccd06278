use crate::routes::routes_path;
use axum::extract::{Query, State};
use axum_extra::routing::TypedPath;
use domain::CarouselView;
use maud::{Markup, html};
use serde::Deserialize;
use state::Showcase;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub(crate) struct CarouselQuery {
    #[serde(default)]
    offset: i64,
}

#[tracing::instrument(name = "Rotating carousel", skip_all, fields(offset = query.offset))]
pub(crate) async fn carousel(
    _: routes_path::Carousel,
    State(showcase): State<Arc<Showcase>>,
    Query(query): Query<CarouselQuery>,
) -> Markup {
    let view = showcase.carousel.view(query.offset);
    tracing::debug!(index = view.index, "Carousel moved");
    carousel_fragment(&showcase, &view)
}

/// Only the featured card is visible on narrow screens.
fn card_class(position: usize) -> &'static str {
    if position == 0 {
        "carousel-card block bg-white rounded-xl shadow overflow-hidden hover:shadow-lg transition"
    } else {
        "carousel-card hidden md:block bg-white rounded-xl shadow overflow-hidden hover:shadow-lg transition"
    }
}

fn step_url(offset: i64) -> String {
    format!("{}?offset={offset}", routes_path::Carousel::PATH)
}

pub(crate) fn carousel_fragment(showcase: &Showcase, view: &CarouselView) -> Markup {
    html! {
        div #carousel class="relative" data-index=(view.index) {
            div class="grid grid-cols-1 md:grid-cols-3 gap-6" {
                @for (position, number) in view.items.iter().enumerate() {
                    @if let Some(item) = showcase.item(*number) {
                        a href=(item.href) class=(card_class(position)) data-item=(number) {
                            img src=(item.image) alt=(item.title) class="w-full";
                            div class="p-4" {
                                h3 class="font-semibold text-lg" { (item.title) }
                                p class="text-gray-600 text-sm" { (item.description) }
                            }
                        }
                    }
                }
            }
            div class="flex justify-center gap-4 mt-6" {
                button type="button" aria-label="Previous"
                    class="rounded-full bg-white shadow w-10 h-10"
                    hx-get=(step_url(-1)) hx-target="#carousel" hx-swap="outerHTML" { "‹" }
                button type="button" aria-label="Next"
                    class="rounded-full bg-white shadow w-10 h-10"
                    hx-get=(step_url(1)) hx-target="#carousel" hx-swap="outerHTML" { "›" }
            }
        }
    }
}
