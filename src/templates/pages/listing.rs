use crate::templates::components::{
    listing_head, listing_info, listing_reservation, ReservationPanel,
};
use crate::templates::desktop_layout;
use crate::view::ListingDetailView;
use maud::{html, Markup};

/// Full page for direct navigation.
pub fn listing_page(view: &ListingDetailView) -> Markup {
    desktop_layout(
        &view.listing().title,
        view.current_user().is_some(),
        listing_content(view),
    )
}

/// The page body alone. Used as the swap target when the view is refreshed.
pub fn listing_content(view: &ListingDetailView) -> Markup {
    let listing = view.listing();

    html! {
        div class="listing-detail flex flex-col gap-6" id="listing-detail" data-listing-id=(listing.id) {
            (listing_head(listing))

            div class="grid grid-cols-1 md:grid-cols-7 md:gap-10 mt-6" {
                (listing_info(listing, view.category()))

                div class="order-first mb-10 md:order-last md:col-span-3" {
                    (listing_reservation(&ReservationPanel {
                        price: listing.price,
                        total_price: view.total_price(),
                        date_range: view.date_range(),
                        disabled_dates: view.disabled_dates(),
                        disabled: view.is_loading(),
                    }))
                }
            }
        }
    }
}
