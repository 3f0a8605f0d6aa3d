//! One shell for the seven functional-module roots.
//!
//! The modules differ only in chrome at this layer; their tables and forms
//! are REST pages outside this crate's scope.

use leptos::prelude::*;

use crate::components::topbar::TopBar;

/// Functional areas with a module root of their own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Area {
    Npd,
    Purchase,
    Sales,
    Stores,
    Planning,
    Production,
    Quality,
}

impl Area {
    pub fn title(self) -> &'static str {
        match self {
            Self::Npd => "New Product Development",
            Self::Purchase => "Purchase",
            Self::Sales => "Sales",
            Self::Stores => "Stores",
            Self::Planning => "Planning",
            Self::Production => "Production",
            Self::Quality => "Quality",
        }
    }

    pub fn blurb(self) -> &'static str {
        match self {
            Self::Npd => "Part introductions, samples, and approval flow.",
            Self::Purchase => "Purchase orders and supplier follow-up.",
            Self::Sales => "Customer orders and dispatch status.",
            Self::Stores => "Stock receipts, issues, and bin levels.",
            Self::Planning => "Production plans and material calls.",
            Self::Production => "Shop-floor execution and daily output.",
            Self::Quality => "Inspections, holds, and release decisions.",
        }
    }
}

#[component]
pub fn ModuleHomePage(area: Area) -> impl IntoView {
    view! {
        <TopBar title=area.title()/>
        <main class="module-home">
            <h1>{area.title()}</h1>
            <p class="module-home__blurb">{area.blurb()}</p>
            <div class="module-home__placeholder">
                <p>"Module worklists load here."</p>
            </div>
        </main>
    }
}
