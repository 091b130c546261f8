use std::sync::Arc;

use service::{HeroApi, MessageService};
use tracing::{info, warn};

use crate::location::{Location, Navigation};
use crate::router::{Route, RouteMatch, Router};
use crate::views::{DashboardView, HeroDetailView, HeroSearchView, HeroesView, MessagesView};

/// The view currently occupying the outlet.
pub enum Page {
    Dashboard(DashboardView),
    Heroes(HeroesView),
    HeroDetail(HeroDetailView),
}

impl Page {
    pub fn route(&self) -> Route {
        match self {
            Page::Dashboard(_) => Route::Dashboard,
            Page::Heroes(_) => Route::Heroes,
            Page::HeroDetail(_) => Route::HeroDetail,
        }
    }
}

/// Application shell: owns the shared service handle, routing state and the
/// active page. Views never talk to each other; they go through here.
pub struct App {
    api: Arc<dyn HeroApi>,
    router: Router,
    location: Location,
    page: Option<Page>,
    search: HeroSearchView,
    messages: MessagesView,
}

impl App {
    pub fn new(api: Arc<dyn HeroApi>, messages: MessageService) -> Self {
        Self {
            search: HeroSearchView::new(Arc::clone(&api)),
            messages: MessagesView::new(messages),
            api,
            router: Router::new(),
            location: Location::new(),
            page: None,
        }
    }

    pub fn location(&self) -> &Location { &self.location }

    pub fn page(&self) -> Option<&Page> { self.page.as_ref() }

    pub fn messages(&self) -> &MessagesView { &self.messages }

    pub fn search_mut(&mut self) -> &mut HeroSearchView { &mut self.search }

    pub fn heroes_mut(&mut self) -> Option<&mut HeroesView> {
        match self.page.as_mut() {
            Some(Page::Heroes(v)) => Some(v),
            _ => None,
        }
    }

    pub fn detail_mut(&mut self) -> Option<&mut HeroDetailView> {
        match self.page.as_mut() {
            Some(Page::HeroDetail(v)) => Some(v),
            _ => None,
        }
    }

    /// Resolve `path`, record it in history and activate the matching view.
    /// Unknown paths leave the current page in place and return false.
    pub async fn navigate(&mut self, path: &str) -> bool {
        let Some(matched) = self.router.resolve(path) else {
            warn!(event = "route_not_found", %path, "no route for path");
            return false;
        };
        self.location.go(matched.url.clone());
        self.open(matched).await;
        true
    }

    /// Carry out a view's navigation request.
    pub async fn apply(&mut self, nav: Navigation) -> bool {
        match nav {
            Navigation::To(path) => self.navigate(&path).await,
            Navigation::Back => {
                let Some(previous) = self.location.back().map(str::to_string) else {
                    return false;
                };
                match self.router.resolve(&previous) {
                    Some(matched) => {
                        self.open(matched).await;
                        true
                    }
                    None => false,
                }
            }
        }
    }

    async fn open(&mut self, matched: RouteMatch) {
        info!(event = "navigate", url = %matched.url, route = ?matched.route);
        let api = Arc::clone(&self.api);
        let page = match matched.route {
            Route::Dashboard => {
                let mut view = DashboardView::new(api);
                view.activate().await;
                Page::Dashboard(view)
            }
            Route::Heroes => {
                let mut view = HeroesView::new(api);
                view.activate().await;
                Page::Heroes(view)
            }
            Route::HeroDetail => {
                let mut view = HeroDetailView::new(api);
                view.activate(&matched).await;
                Page::HeroDetail(view)
            }
        };
        self.page = Some(page);
    }
}
