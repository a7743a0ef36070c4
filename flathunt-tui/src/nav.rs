//! Navigation between the two logical views.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum View {
    Listings,
    NewApartment,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            View::Listings => "Listings",
            View::NewApartment => "Add Apartment",
        }
    }

    pub fn all() -> &'static [View] {
        &[View::Listings, View::NewApartment]
    }

    pub fn index(&self) -> usize {
        Self::all().iter().position(|v| v == self).unwrap_or(0)
    }

    pub fn next(&self) -> View {
        let all = Self::all();
        all[(self.index() + 1) % all.len()]
    }

    pub fn previous(&self) -> View {
        let all = Self::all();
        let idx = self.index();
        all[if idx == 0 { all.len() - 1 } else { idx - 1 }]
    }
}
