//! Shared page chrome. Fragments live next to the handler that serves them.

use chrono::{Datelike, Local};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use settings::SiteConfiguration;

const HTMX_SRC: &str = "https://unpkg.com/htmx.org@2.0.4";
const TAILWIND_SRC: &str = "https://cdn.tailwindcss.com";

// htmx leaves 4xx/5xx responses unswapped by default; our error fragments are meant to be shown.
const HTMX_CONFIG: &str = r#"htmx.config.responseHandling = [
  { code: "204", swap: false },
  { code: "[23]..", swap: true },
  { code: "[45]..", swap: true, error: true }
];"#;

pub(crate) fn page(site: &SiteConfiguration, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (site.name) }
                script src=(TAILWIND_SRC) {}
                script src=(HTMX_SRC) {}
                script { (PreEscaped(HTMX_CONFIG)) }
                link rel="stylesheet" href="/static/css/site.css";
            }
            body class="bg-gray-50 text-gray-900" {
                (navigation(site))
                main { (content) }
                (footer(site))
            }
        }
    }
}

fn navigation(site: &SiteConfiguration) -> Markup {
    let links = [
        ("#prayer-times", "Prayer Times"),
        ("#programs", "Programs"),
        ("#newsletter", "Newsletter"),
        ("#contact", "Contact"),
    ];

    html! {
        nav class="bg-white shadow sticky top-0 z-10" {
            div class="max-w-6xl mx-auto px-4 py-3 flex items-center justify-between" {
                a href="/" class="text-xl font-bold text-emerald-700" { (site.name) }
                ul class="hidden md:flex gap-6 text-gray-700" {
                    @for (href, label) in links {
                        li { a href=(href) class="hover:text-emerald-700" { (label) } }
                    }
                }
            }
        }
    }
}

pub(crate) fn hero(site: &SiteConfiguration) -> Markup {
    html! {
        section class="bg-emerald-700 text-white" {
            div class="max-w-6xl mx-auto px-4 py-20 text-center" {
                h1 class="text-4xl md:text-5xl font-bold mb-4" { (site.name) }
                p class="text-lg text-emerald-100" { (site.tagline) }
            }
        }
    }
}

/// A titled page section with an anchor for the navigation bar.
pub(crate) fn section(id: &str, title: &str, body: Markup) -> Markup {
    html! {
        section id=(id) class="max-w-6xl mx-auto px-4 py-16" {
            h2 class="text-3xl font-bold text-center mb-8" { (title) }
            (body)
        }
    }
}

pub(crate) fn loading(label: &str) -> Markup {
    html! {
        div class="text-center py-8 text-gray-500" { (label) }
    }
}

fn footer(site: &SiteConfiguration) -> Markup {
    html! {
        footer class="bg-gray-900 text-gray-300" {
            div class="max-w-6xl mx-auto px-4 py-10 grid md:grid-cols-2 gap-6" {
                div {
                    p class="font-semibold text-white" { (site.name) }
                    p { (site.address) }
                }
                div class="md:text-right" {
                    a href={ "mailto:" (site.contact_email) } class="hover:text-white" { (site.contact_email) }
                    p class="text-sm text-gray-500" { "© " (Local::now().year()) " " (site.name) }
                }
            }
        }
    }
}
