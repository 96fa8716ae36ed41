//! Application state (Model in TEA pattern)

use std::time::Instant;

use storefront_core::{Banner, Moment, Offer, Review};

use crate::carousel::{PauseReason, RotatingSelection};
use crate::config::Settings;
use crate::context::StoreContext;
use crate::pointer::HitRegions;
use crate::section::{LoadState, Section, SelectedItem};

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Current screen
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Route {
    /// The storefront page with all three carousels
    #[default]
    Home,
    /// Details of a selected item
    Detail(SelectedItem),
}

/// Transient notification shown in the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub expires_at: Instant,
}

/// Fetch state of every section
#[derive(Debug, Clone, Default)]
pub struct SectionLoads {
    banners: LoadState,
    offers: LoadState,
    reviews: LoadState,
}

impl SectionLoads {
    pub fn get(&self, section: Section) -> &LoadState {
        match section {
            Section::Banners => &self.banners,
            Section::Offers => &self.offers,
            Section::Reviews => &self.reviews,
        }
    }

    pub fn set(&mut self, section: Section, state: LoadState) {
        match section {
            Section::Banners => self.banners = state,
            Section::Offers => self.offers = state,
            Section::Reviews => self.reviews = state,
        }
    }

    pub fn is_loading(&self) -> bool {
        Section::ALL.iter().any(|s| self.get(*s).is_loading())
    }
}

/// A pointer press that may become a drag or a click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Press {
    pub section: Section,
    /// Card under the pointer when pressed, within the visible window
    pub offset: usize,
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// Application settings from config file
    pub settings: Settings,

    /// Branding and active logo
    pub context: StoreContext,

    /// Home page banner carousel
    pub banners: RotatingSelection<Banner>,

    /// Discount spotlight
    pub offers: RotatingSelection<Offer>,

    /// Review carousel
    pub reviews: RotatingSelection<Review>,

    /// Fetch lifecycle per section
    pub loads: SectionLoads,

    /// Section that receives keyboard navigation
    pub focus: Section,

    pub route: Route,

    pub toast: Option<Toast>,

    /// Clickable regions from the last rendered frame
    pub regions: HitRegions,

    /// Section currently under the pointer
    pub hovered: Option<Section>,

    /// Pointer press awaiting release
    pub pressed: Option<Press>,

    /// Fetch generation; results tagged with an older one are discarded
    pub generation: u64,

    /// Terminal width in columns
    pub viewport_width: u16,

    /// Most recent clock reading, used for countdowns
    pub now: Moment,

    /// Human-readable catalog source for the status bar
    pub catalog_label: String,

    pub phase: AppPhase,
}

impl AppState {
    pub fn new(settings: Settings, now: Moment) -> Self {
        let timing = settings.carousel.timing();
        let threshold = settings.carousel.drag_threshold;
        Self {
            context: StoreContext::new(&settings.store),
            banners: RotatingSelection::new(timing, threshold),
            offers: RotatingSelection::new(timing, threshold),
            reviews: RotatingSelection::new(timing, threshold),
            loads: SectionLoads::default(),
            focus: Section::Banners,
            route: Route::Home,
            toast: None,
            regions: HitRegions::default(),
            hovered: None,
            pressed: None,
            generation: 0,
            viewport_width: 0,
            now,
            catalog_label: String::new(),
            phase: AppPhase::Running,
            settings,
        }
    }

    pub fn with_catalog_label(mut self, label: impl Into<String>) -> Self {
        self.catalog_label = label.into();
        self
    }

    // ─────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────

    pub fn request_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Start a new fetch generation: every section goes back to loading
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        for section in Section::ALL {
            self.loads.set(section, LoadState::Loading);
            self.clear_carousel(section);
        }
        self.pressed = None;
        self.generation
    }

    /// Drop all fetched data and cancel every carousel deadline
    pub fn teardown(&mut self) {
        for section in Section::ALL {
            self.clear_carousel(section);
        }
        self.context.teardown();
    }

    // ─────────────────────────────────────────────────────────
    // Sections
    // ─────────────────────────────────────────────────────────

    pub fn clear_carousel(&mut self, section: Section) {
        match section {
            Section::Banners => self.banners.clear(),
            Section::Offers => self.offers.clear(),
            Section::Reviews => self.reviews.clear(),
        }
    }

    pub fn window_count(&self, section: Section) -> usize {
        match section {
            Section::Banners => self.banners.window_count(),
            Section::Offers => self.offers.window_count(),
            Section::Reviews => self.reviews.window_count(),
        }
    }

    pub fn current_index(&self, section: Section) -> usize {
        match section {
            Section::Banners => self.banners.current_index(),
            Section::Offers => self.offers.current_index(),
            Section::Reviews => self.reviews.current_index(),
        }
    }

    pub fn is_paused(&self, section: Section) -> bool {
        match section {
            Section::Banners => self.banners.is_paused(),
            Section::Offers => self.offers.is_paused(),
            Section::Reviews => self.reviews.is_paused(),
        }
    }

    /// Hold `reason` on every carousel
    pub fn pause_all(&mut self, reason: PauseReason) {
        self.banners.pause(reason);
        self.offers.pause(reason);
        self.reviews.pause(reason);
    }

    /// Release `reason` on every carousel; each restarts a full interval
    pub fn resume_all(&mut self, reason: PauseReason, now: Instant) {
        self.banners.resume(reason, now);
        self.offers.resume(reason, now);
        self.reviews.resume(reason, now);
    }

    /// Item committed by selecting `offset` in the visible window of `section`
    pub fn selected_item(&self, section: Section, offset: usize) -> Option<SelectedItem> {
        match section {
            Section::Banners => self
                .banners
                .select_at(offset)
                .cloned()
                .map(SelectedItem::Banner),
            Section::Offers => self
                .offers
                .select_at(offset)
                .cloned()
                .map(SelectedItem::Offer),
            Section::Reviews => self
                .reviews
                .select_at(offset)
                .cloned()
                .map(SelectedItem::Review),
        }
    }

    /// Reviews per window for the current terminal width
    pub fn reviews_window_size(&self) -> usize {
        self.settings
            .carousel
            .reviews_window_size(self.viewport_width)
    }

    // ─────────────────────────────────────────────────────────
    // Toasts
    // ─────────────────────────────────────────────────────────

    pub fn show_toast(&mut self, message: impl Into<String>, now: Instant) {
        self.toast = Some(Toast {
            message: message.into(),
            expires_at: now + self.settings.ui.toast_duration(),
        });
    }

    pub fn expire_toast(&mut self, now: Instant) {
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| now >= toast.expires_at)
        {
            self.toast = None;
        }
    }
}
