mod async_runtime;
pub mod clock;
pub mod debounce;
pub mod domain;
pub mod kernel;
pub mod landing;
pub mod listing;
pub mod locale;
pub mod persistence;
pub mod ports;
pub mod signup;
pub mod source;

pub use clock::{Clock, ManualClock, SystemClock};
pub use debounce::SearchCoalescer;
pub use domain::AppSettings;
pub use kernel::{ListingKernel, ListingOptions};
pub use landing::{landing_blocks, LandingBlocks};
pub use listing::*;
pub use locale::{LanguageHints, LocaleSignal};
pub use ports::*;
pub use signup::{RegistrationError, SignupForm};
pub use source::{initial_page, HttpListingSource};
