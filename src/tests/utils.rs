use crate::booking::{Notifier, ReservationApi, ReservationRequest, SignInPrompt, ViewInvalidator};
use crate::domain::{CurrentUser, Listing, ListingOwner, Reservation, CATEGORIES};
use crate::errors::BookingError;
use crate::view::{ListingDetailView, ViewDeps};
use chrono::NaiveDate;
use std::cell::RefCell;
use std::rc::Rc;

pub fn day(m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, m, d).unwrap()
}

pub fn sample_listing() -> Listing {
    Listing {
        id: "lst_42".to_string(),
        title: "Lakeside cabin".to_string(),
        description: "Quiet cabin with a dock.".to_string(),
        image_src: "https://img.example.com/cabin.jpg".to_string(),
        price: 100,
        category: "Lake".to_string(),
        location_value: "CA".to_string(),
        room_count: 2,
        guest_count: 4,
        bathroom_count: 1,
        owner: ListingOwner {
            id: "usr_host".to_string(),
            name: Some("Morgan".to_string()),
            image: None,
        },
    }
}

pub fn signed_in() -> Option<CurrentUser> {
    Some(CurrentUser {
        id: "usr_guest".to_string(),
        name: Some("Sam".to_string()),
        email: Some("sam@example.com".to_string()),
    })
}

/// Everything the fakes saw, shared with the test through an `Rc`.
#[derive(Default)]
pub struct Calls {
    pub sign_in: usize,
    pub success: Vec<String>,
    pub error: Vec<String>,
    pub refresh: usize,
    pub requests: Vec<ReservationRequest>,
}

pub type Recorder = Rc<RefCell<Calls>>;

struct FakeApi {
    calls: Recorder,
    fail: bool,
}

impl ReservationApi for FakeApi {
    fn create_reservation(&self, request: &ReservationRequest) -> Result<(), BookingError> {
        self.calls.borrow_mut().requests.push(request.clone());
        if self.fail {
            Err(BookingError::Rejected {
                status: 409,
                body: "dates taken".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

struct FakeSignIn(Recorder);

impl SignInPrompt for FakeSignIn {
    fn open(&self) {
        self.0.borrow_mut().sign_in += 1;
    }
}

struct FakeNotifier(Recorder);

impl Notifier for FakeNotifier {
    fn success(&self, message: &str) {
        self.0.borrow_mut().success.push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.0.borrow_mut().error.push(message.to_string());
    }
}

struct FakeInvalidator(Recorder);

impl ViewInvalidator for FakeInvalidator {
    fn refresh(&self) {
        self.0.borrow_mut().refresh += 1;
    }
}

pub fn fake_deps(fail: bool) -> (ViewDeps, Recorder) {
    let calls: Recorder = Rc::default();
    let deps = ViewDeps {
        api: Box::new(FakeApi {
            calls: calls.clone(),
            fail,
        }),
        sign_in: Box::new(FakeSignIn(calls.clone())),
        notifier: Box::new(FakeNotifier(calls.clone())),
        invalidator: Box::new(FakeInvalidator(calls.clone())),
    };
    (deps, calls)
}

/// A view opened on Jan 1st 2024 with the default catalog.
pub fn make_view(
    user: Option<CurrentUser>,
    reservations: Vec<Reservation>,
    fail: bool,
) -> (ListingDetailView<'static>, Recorder) {
    let (deps, calls) = fake_deps(fail);
    let view = ListingDetailView::new(
        sample_listing(),
        reservations,
        user,
        CATEGORIES,
        day(1, 1),
        deps,
    );
    (view, calls)
}
