use crate::domain::Listing;
use maud::{html, Markup};

pub fn listing_head(listing: &Listing) -> Markup {
    html! {
        section class="listing-head" {
            h1 class="text-2xl font-bold" { (listing.title) }
            p class="font-light text-neutral-500 mt-2" { (listing.location_value) }

            div class="w-full h-[60vh] overflow-hidden rounded-xl relative mt-4" {
                @if listing.image_src.is_empty() {
                    div class="image-placeholder" {}
                } @else {
                    img class="object-cover w-full" src=(listing.image_src) alt=(listing.title);
                }
            }
        }
    }
}
