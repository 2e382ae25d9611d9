use dioxus::prelude::*;

use common::query::{NavTarget, PageQuery};

use crate::components::navbar::Navbar;
use crate::data_definitions::url_param::QueryParams;
use crate::pages::case_page::CasePage;
use crate::pages::explore_page::ExplorePage;
use crate::pages::home_page::HomePage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/cases/:case_id?:..query")]
    CasePage {
        case_id: String,
        query: QueryParams,
    },


    #[route("/exploration?:..query")]
    ExplorePage { query: QueryParams },

}

impl Route {
    pub fn explore_page_from_query(q: PageQuery) -> Self {
        Self::ExplorePage { query: q.into() }
    }
}

/// Opens a navigation target: in-app routes go through the router, other
/// portal pages are left to the browser.
pub fn navigate_to(target: &NavTarget) {
    let href = target.href();
    match href.parse::<Route>() {
        Ok(route) => {
            navigator().push(route);
        }
        Err(_) => {
            navigator().push(NavigationTarget::<Route>::External(href));
        }
    }
}
