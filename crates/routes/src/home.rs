use crate::components::{hero, loading, page, section};
use crate::routes::routes_path::{Carousel, Contact, Index, Newsletter, PrayerTimes};
use axum::extract::State;
use axum_extra::routing::TypedPath;
use maud::{Markup, html};
use settings::SiteConfiguration;
use std::sync::Arc;

#[tracing::instrument(name = "Rendering home page", skip_all)]
pub(crate) async fn home(_: Index, State(site): State<Arc<SiteConfiguration>>) -> Markup {
    let content = html! {
        (hero(&site))
        (section("prayer-times", "Prayer Times", prayer_times_card()))
        (section("programs", "Programs & Events", carousel_slot()))
        (section("newsletter", "Stay Connected", newsletter_form()))
        (section("contact", "Contact Us", contact_form()))
    };

    page(&site, content)
}

fn prayer_times_card() -> Markup {
    html! {
        div class="max-w-2xl mx-auto bg-white rounded-xl shadow p-6"
            hx-get=(PrayerTimes::PATH) hx-trigger="load" {
            (loading("Loading prayer times..."))
        }
    }
}

fn carousel_slot() -> Markup {
    html! {
        div #carousel hx-get=(Carousel::PATH) hx-trigger="load" hx-swap="outerHTML" {
            (loading("Loading..."))
        }
    }
}

fn newsletter_form() -> Markup {
    html! {
        div class="max-w-xl mx-auto bg-emerald-600 rounded-xl p-8 text-center" {
            p class="text-emerald-50 mb-4" { "Get updates about our programs and events." }
            form class="flex flex-col sm:flex-row gap-3"
                hx-post=(Newsletter::PATH) hx-target="#newsletter-result" hx-swap="innerHTML" {
                input type="email" name="email" required placeholder="Your email address"
                    class="flex-1 rounded-lg px-4 py-2 text-gray-900";
                button type="submit" class="bg-white text-emerald-700 font-semibold rounded-lg px-6 py-2" {
                    "Subscribe"
                }
            }
            div #newsletter-result class="mt-4" {}
        }
    }
}

fn contact_form() -> Markup {
    let input_class = "w-full rounded-lg border border-gray-300 px-4 py-2";

    html! {
        form class="max-w-xl mx-auto bg-white rounded-xl shadow p-8 space-y-4"
            hx-post=(Contact::PATH) hx-target="#contact-result" hx-swap="innerHTML" {
            input type="text" name="name" required placeholder="Name" class=(input_class);
            input type="email" name="email" required placeholder="Email" class=(input_class);
            input type="text" name="subject" required placeholder="Subject" class=(input_class);
            textarea name="message" required rows="5" placeholder="Message" class=(input_class) {}
            button type="submit" class="w-full bg-emerald-700 text-white font-semibold rounded-lg py-2" {
                "Send Message"
            }
            div #contact-result {}
        }
    }
}
