//! flathunt core - domain and wire types for the apartments client.
//!
//! Pure data structures and validation. No I/O lives here; the TUI crate
//! builds on these types for everything it sends to or receives from the
//! apartments API.

pub mod apartment;
pub mod draft;
pub mod filter;

pub use apartment::{Apartment, ApartmentId};
pub use draft::{ApartmentDraft, CreateApartmentRequest, DraftError, DraftField};
pub use filter::{ApartmentFilter, ApartmentQuery};
