use crate::domain::{Category, Listing};
use maud::{html, Markup};

pub fn listing_info(listing: &Listing, category: Option<&Category>) -> Markup {
    html! {
        section class="listing-info col-span-4 flex flex-col gap-8" {
            div class="flex flex-col gap-2" {
                div class="text-xl font-semibold flex items-center gap-2" {
                    "Hosted by " (listing.owner.display_name())
                    @if let Some(src) = listing.owner.image.as_deref() {
                        img class="avatar rounded-full" src=(src) alt="Host" height="30" width="30";
                    }
                }
                div class="flex items-center gap-4 font-light text-neutral-500" {
                    span { (listing.guest_count) " guests" }
                    span { (listing.room_count) " rooms" }
                    span { (listing.bathroom_count) " bathrooms" }
                }
            }

            hr;

            @if let Some(c) = category {
                div class="listing-category flex items-center gap-4" data-icon=(c.icon) {
                    div class="flex flex-col" {
                        span class="text-lg font-semibold" { (c.label) }
                        span class="text-neutral-500 font-light" { (c.description) }
                    }
                }
                hr;
            }

            p class="text-lg font-light text-neutral-500" { (listing.description) }

            hr;

            p class="location" { "Location: " (listing.location_value) }
        }
    }
}
