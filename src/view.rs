// src/view.rs

use crate::booking::{Notifier, ReservationApi, ReservationRequest, SignInPrompt, ViewInvalidator};
use crate::domain::{
    disabled_dates, find_category, total_price, Category, CurrentUser, DateRange, Listing,
    Reservation,
};
use crate::errors::BookingError;
use chrono::NaiveDate;
use tracing::{debug, info, warn};

pub const RESERVED_MESSAGE: &str = "Listing reserved!";
pub const FAILED_MESSAGE: &str = "Something went wrong!";

/// Everything the view calls out to.
pub struct ViewDeps {
    pub api: Box<dyn ReservationApi>,
    pub sign_in: Box<dyn SignInPrompt>,
    pub notifier: Box<dyn Notifier>,
    pub invalidator: Box<dyn ViewInvalidator>,
}

/// A state field that changed, handed to the observer after the change.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewChange {
    DateRange(DateRange),
    TotalPrice(i64),
    Loading(bool),
    DisabledDates(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// No signed-in user; the sign-in prompt was opened instead.
    SignInRequired,
    /// A submission is already in flight.
    Busy,
    Reserved,
    Failed,
    /// The view was torn down; nothing happened.
    TornDown,
}

/// Why `begin_submit` did not start a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blocked {
    SignInRequired,
    Busy,
    TornDown,
}

/// View-model for one listing page.
///
/// Owns the selection, the derived price/availability/category and the
/// busy flag. State is per instance.
pub struct ListingDetailView<'c> {
    listing: Listing,
    current_user: Option<CurrentUser>,
    catalog: &'c [Category],
    deps: ViewDeps,

    reservations: Vec<Reservation>,
    disabled: Vec<NaiveDate>,
    category: Option<&'c Category>,

    initial_range: DateRange,
    date_range: DateRange,
    total_price: i64,
    is_loading: bool,
    torn_down: bool,

    observer: Option<Box<dyn FnMut(&ViewChange)>>,
}

impl<'c> ListingDetailView<'c> {
    /// `today` fixes the initial selection the view resets to after a booking.
    pub fn new(
        listing: Listing,
        reservations: Vec<Reservation>,
        current_user: Option<CurrentUser>,
        catalog: &'c [Category],
        today: NaiveDate,
        deps: ViewDeps,
    ) -> Self {
        let initial_range = DateRange::initial_on(today);
        let disabled = disabled_dates(&reservations);
        let category = find_category(&listing.category, catalog);
        let total = total_price(&initial_range, listing.price);

        Self {
            listing,
            current_user,
            catalog,
            deps,
            reservations,
            disabled,
            category,
            date_range: initial_range.clone(),
            initial_range,
            total_price: total,
            is_loading: false,
            torn_down: false,
            observer: None,
        }
    }

    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    pub fn current_user(&self) -> Option<&CurrentUser> {
        self.current_user.as_ref()
    }

    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    pub fn disabled_dates(&self) -> &[NaiveDate] {
        &self.disabled
    }

    pub fn category(&self) -> Option<&'c Category> {
        self.category
    }

    pub fn date_range(&self) -> &DateRange {
        &self.date_range
    }

    pub fn initial_range(&self) -> &DateRange {
        &self.initial_range
    }

    pub fn total_price(&self) -> i64 {
        self.total_price
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Register the single observer. Replaces any previous one.
    pub fn on_change(&mut self, f: impl FnMut(&ViewChange) + 'static) {
        self.observer = Some(Box::new(f));
    }

    /// User picked a new range in the calendar.
    pub fn set_date_range(&mut self, range: DateRange) {
        if range == self.date_range {
            return;
        }
        self.date_range = range;
        self.emit(ViewChange::DateRange(self.date_range.clone()));
        self.recompute_price();
    }

    /// Server data was re-fetched.
    pub fn set_reservations(&mut self, reservations: Vec<Reservation>) {
        self.reservations = reservations;
        self.disabled = disabled_dates(&self.reservations);
        debug!(
            listing_id = %self.listing.id,
            disabled = self.disabled.len(),
            "availability recomputed"
        );
        self.emit(ViewChange::DisabledDates(self.disabled.len()));
    }

    /// Listing was re-fetched; price and category may have changed.
    pub fn set_listing(&mut self, listing: Listing) {
        let price_changed = listing.price != self.listing.price;
        let category_changed = listing.category != self.listing.category;
        self.listing = listing;

        if category_changed {
            self.category = find_category(&self.listing.category, self.catalog);
        }
        if price_changed {
            self.recompute_price();
        }
    }

    pub fn set_current_user(&mut self, user: Option<CurrentUser>) {
        self.current_user = user;
    }

    /// Run the whole submission through the injected api.
    pub fn submit(&mut self) -> SubmitOutcome {
        let request = match self.begin_submit() {
            Ok(req) => req,
            Err(Blocked::SignInRequired) => return SubmitOutcome::SignInRequired,
            Err(Blocked::Busy) => return SubmitOutcome::Busy,
            Err(Blocked::TornDown) => return SubmitOutcome::TornDown,
        };

        let result = self.deps.api.create_reservation(&request);
        let ok = result.is_ok();
        self.finish_submit(result);

        if ok {
            SubmitOutcome::Reserved
        } else {
            SubmitOutcome::Failed
        }
    }

    /// Guard, set the busy flag and build the request. The caller sends it
    /// and reports back through `finish_submit`.
    pub fn begin_submit(&mut self) -> Result<ReservationRequest, Blocked> {
        if self.torn_down {
            return Err(Blocked::TornDown);
        }
        if self.current_user.is_none() {
            info!(listing_id = %self.listing.id, "reserve without sign-in, prompting");
            self.deps.sign_in.open();
            return Err(Blocked::SignInRequired);
        }
        if self.is_loading {
            debug!(listing_id = %self.listing.id, "reservation already in flight");
            return Err(Blocked::Busy);
        }

        self.set_loading(true);

        let request = ReservationRequest::new(&self.listing.id, &self.date_range, self.total_price);
        info!(
            listing_id = %request.listing_id,
            total_price = request.total_price,
            start = %self.date_range.start_date,
            end = %self.date_range.end_date,
            "submitting reservation"
        );
        Ok(request)
    }

    /// Apply the outcome of a request started with `begin_submit`.
    /// Ignored once the view is torn down, or when nothing is in flight.
    pub fn finish_submit(&mut self, result: Result<(), BookingError>) {
        if self.torn_down {
            warn!(
                listing_id = %self.listing.id,
                ok = result.is_ok(),
                "reservation finished after teardown, ignoring"
            );
            return;
        }
        if !self.is_loading {
            warn!(
                listing_id = %self.listing.id,
                ok = result.is_ok(),
                "reservation finished with nothing in flight, ignoring"
            );
            return;
        }

        match result {
            Ok(()) => {
                info!(listing_id = %self.listing.id, "reservation created");
                self.deps.notifier.success(RESERVED_MESSAGE);
                self.set_date_range(self.initial_range.clone());
                self.deps.invalidator.refresh();
            }
            Err(e) => {
                warn!(listing_id = %self.listing.id, error = %e, "reservation failed");
                self.deps.notifier.error(FAILED_MESSAGE);
            }
        }

        self.set_loading(false);
    }

    /// The host dropped this view. Late completions become no-ops.
    pub fn tear_down(&mut self) {
        self.torn_down = true;
        self.observer = None;
    }

    fn recompute_price(&mut self) {
        let total = total_price(&self.date_range, self.listing.price);
        if total != self.total_price {
            self.total_price = total;
            self.emit(ViewChange::TotalPrice(total));
        }
    }

    fn set_loading(&mut self, loading: bool) {
        if loading != self.is_loading {
            self.is_loading = loading;
            self.emit(ViewChange::Loading(loading));
        }
    }

    fn emit(&mut self, change: ViewChange) {
        if let Some(observer) = self.observer.as_mut() {
            observer(&change);
        }
    }
}
