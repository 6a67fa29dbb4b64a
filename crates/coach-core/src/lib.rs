//! # coach-core
//!
//! Domain logic behind the Pro Coach Virtual marketing site.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                       NavState                            │
//! │  ┌─────────────┐   select_page()   ┌──────────────────┐   │
//! │  │   PageId    │──────────────────▶│  View            │   │
//! │  │ (6 tokens)  │   default → Home  │ Home/Pricing/    │   │
//! │  └─────────────┘                   │ Login            │   │
//! │        ▲                           └──────────────────┘   │
//! │        │ apply(NavAction)                                 │
//! └────────┼─────────────────────────────────────────────────┘
//!          │
//!    click handlers (navigation bar, CTAs)
//! ```
//!
//! Everything here is plain data and pure functions so the state machine can
//! be tested without a browser. The `coach-web` crate wraps [`NavState`] in a
//! signal and renders the selected [`View`].

pub mod error;
pub mod login;
pub mod nav;
pub mod page;
pub mod plan;

pub use error::{CoreError, Result};
pub use login::LoginTab;
pub use nav::{NavAction, NavCta, NavState, UserProfile};
pub use page::{PageId, View, select_view, select_view_for_token};
pub use plan::{BillingInterval, Plan, PlanPricing, format_brl};
