use crate::routes::routes_path::PrayerTimes;
use axum::extract::State;
use chrono::{Local, NaiveDate};
use domain::{PrayerDay, PrayerTime};
use maud::{Markup, html};
use prayer_client::PrayerClient;

/// Always answers `200`: when the provider fails the page shows a notice
/// instead of the table.
#[tracing::instrument(name = "Rendering prayer times", skip_all)]
pub(crate) async fn prayer_times(_: PrayerTimes, State(client): State<PrayerClient>) -> Markup {
    match client.fetch_today().await {
        Ok(day) => prayer_table(&day, Local::now().date_naive()),
        Err(e) => {
            tracing::warn!(error = ?e, "Showing the prayer times fallback");
            prayer_times_unavailable()
        }
    }
}

pub(crate) fn prayer_table(day: &PrayerDay, updated: NaiveDate) -> Markup {
    html! {
        div class="text-sm text-gray-600 mb-4 text-center" {
            "Updated: " (updated.format("%b %d, %Y"))
        }
        div class="space-y-2" {
            div class="grid grid-cols-3 gap-4 pb-2 border-b-2 border-gray-200 font-semibold text-gray-700" {
                div { "Prayer" }
                div class="text-center" { "Adhan" }
                div class="text-center" { "Iqama" }
            }
            @for row in day.rows() {
                div class="grid grid-cols-3 gap-4 py-3 border-b border-gray-100 hover:bg-gray-50 transition"
                    data-prayer=(row.name) {
                    div class="font-semibold text-gray-800" { (row.name) }
                    div class="text-center text-gray-600" { (row.adhan.display()) }
                    div class="text-center text-gray-600" {
                        (row.iqama.as_ref().map_or_else(|| "-".to_owned(), PrayerTime::display))
                    }
                }
            }
        }
    }
}

pub(crate) fn prayer_times_unavailable() -> Markup {
    html! {
        div class="text-center py-8 text-red-600" {
            p { "Unable to load prayer times at this moment." }
            p class="text-sm mt-2" { "Please try again later." }
        }
    }
}
