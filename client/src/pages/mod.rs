//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (its own selection) and
//! delegates rendering details to `components`.

pub mod experiences;
pub mod home;
pub mod itinerary;
pub mod map;
pub mod marketplace;
