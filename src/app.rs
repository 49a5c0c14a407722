//! The application controller.
//!
//! [`App`] owns every piece of mutable state and reacts to one event at a
//! time: the device position arriving (or failing), map clicks, form
//! submission, list clicks and reset. Storage load and map readiness can come
//! in either order; markers for loaded workouts are drawn whenever the map
//! becomes ready.

use crate::config::AppConfig;
use crate::dlog;
use crate::error::{
    BAD_INPUT_ALERT, GeoError, NO_POSITION_ALERT, SET_ASIDE_ALERT, UNREADABLE_STORE_ALERT,
};
use crate::form::Form;
use crate::persist;
use crate::render::{ListItem, Marker};
use crate::storage::Store;
use crate::types::{Coords, Workout};
use crate::ui::{Geolocator, MapView, Pan, Screen};
use anyhow::Result;
use uuid::Uuid;

pub struct App<S, U, M> {
    config: AppConfig,
    store: S,
    screen: U,
    map: Option<M>,
    position: Option<Coords>,
    clicked: Option<Coords>,
    form: Form,
    workouts: Vec<Workout>,
    /// Set while the saved list could not be read; saving would overwrite it.
    saves_held: bool,
}

impl<S: Store, U: Screen, M: MapView> App<S, U, M> {
    /// Creates the controller and renders whatever the store holds.
    pub fn start(config: AppConfig, store: S, screen: U) -> Self {
        let mut app = Self {
            config,
            store,
            screen,
            map: None,
            position: None,
            clicked: None,
            form: Form::default(),
            workouts: Vec::new(),
            saves_held: false,
        };
        app.load();
        app
    }

    fn load(&mut self) {
        let key = self.config.storage_key.clone();
        let loaded = match persist::load(&mut self.store, &key) {
            Ok(loaded) => loaded,
            Err(e) => {
                tracing::warn!(
                    err = %format!("{e:#}"),
                    "could not read saved workouts; holding saves until they load"
                );
                self.saves_held = true;
                self.workouts.clear();
                self.screen.alert(UNREADABLE_STORE_ALERT);
                return;
            }
        };
        self.saves_held = false;

        if loaded.set_aside {
            self.screen.alert(SET_ASIDE_ALERT);
        }

        for w in &loaded.workouts {
            self.screen.insert_list_item(&ListItem::from_workout(w));
        }
        tracing::info!(
            workouts = loaded.workouts.len(),
            skipped = loaded.skipped,
            "loaded saved workouts"
        );
        self.workouts = loaded.workouts;
    }

    /// Asks `geo` for the device position and opens the map there.
    ///
    /// Returns whether a map is now available.
    pub fn locate<G: Geolocator>(
        &mut self,
        geo: &mut G,
        open_map: impl FnOnce(Coords) -> M,
    ) -> bool {
        match geo.current_position() {
            Ok(position) => {
                self.on_map_ready(open_map(position), position);
                true
            }
            Err(e) => {
                self.on_position_error(&e);
                false
            }
        }
    }

    pub fn on_position_error(&mut self, err: &GeoError) {
        tracing::warn!(err = %err, "no device position; running without a map");
        self.screen.alert(NO_POSITION_ALERT);
    }

    pub fn on_map_ready(&mut self, mut map: M, position: Coords) {
        map.set_view(position, self.config.zoom, None);
        for w in &self.workouts {
            map.add_marker(&Marker::for_workout(w));
        }
        tracing::info!(%position, markers = self.workouts.len(), "map ready");
        self.position = Some(position);
        self.map = Some(map);
    }

    pub fn on_map_click(&mut self, at: Coords) {
        if self.map.is_none() {
            dlog!("map_click_without_map at={at}");
            return;
        }
        dlog!("map_click at={at}");
        self.clicked = Some(at);
        self.form.show();
        self.screen.show_form();
    }

    /// Validates the form and records a workout at the last clicked spot.
    ///
    /// Invalid input raises an alert and leaves all state as it was.
    pub fn on_form_submit(&mut self) -> Option<&Workout> {
        let Some(at) = self.clicked else {
            dlog!("submit_without_location");
            return None;
        };

        let entry = match self.form.read() {
            Ok(entry) => entry,
            Err(e) => {
                tracing::info!(err = %e, "rejected workout input");
                self.screen.alert(BAD_INPUT_ALERT);
                return None;
            }
        };

        let workout = Workout::new(entry.kind, at, entry.distance, entry.duration);
        tracing::info!(
            id = %workout.id(),
            kind = %workout.kind(),
            distance = workout.distance(),
            duration = workout.duration(),
            "new workout"
        );

        if let Some(map) = self.map.as_mut() {
            map.add_marker(&Marker::for_workout(&workout));
        }
        self.screen.insert_list_item(&ListItem::from_workout(&workout));
        self.form.hide();
        self.screen.hide_form();
        self.workouts.push(workout);
        self.persist();

        self.workouts.last()
    }

    /// Recenters the map on the workout with `id`. Returns whether it moved.
    pub fn on_list_click(&mut self, id: &Uuid) -> bool {
        let Some(map) = self.map.as_mut() else {
            dlog!("list_click_before_map id={id}");
            return false;
        };
        let Some(w) = self.workouts.iter().find(|w| w.id() == *id) else {
            dlog!("list_click_unknown id={id}");
            return false;
        };

        map.set_view(
            w.coords(),
            self.config.zoom,
            Some(Pan {
                duration: self.config.pan_duration,
            }),
        );
        true
    }

    /// Forgets every saved workout and starts over, then asks `geo` for the
    /// device position again the way a fresh start does.
    ///
    /// Returns whether a map is available afterwards.
    pub fn reset<G: Geolocator>(
        &mut self,
        geo: &mut G,
        open_map: impl FnOnce(Coords) -> M,
    ) -> Result<bool> {
        self.store.remove(&self.config.storage_key)?;
        tracing::info!(workouts = self.workouts.len(), "reset");

        self.workouts.clear();
        self.map = None;
        self.position = None;
        self.clicked = None;
        self.form = Form::default();
        self.screen.hide_form();
        self.screen.clear_list();

        self.load();
        Ok(self.locate(geo, open_map))
    }

    fn persist(&mut self) {
        if self.saves_held {
            tracing::warn!(
                workouts = self.workouts.len(),
                "saved list was never read; not overwriting it"
            );
            return;
        }
        if let Err(e) = persist::save(&mut self.store, &self.config.storage_key, &self.workouts) {
            tracing::warn!(err = %format!("{e:#}"), "could not save workouts");
        }
    }
}

impl<S, U, M> App<S, U, M> {
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut Form {
        &mut self.form
    }

    pub const fn map(&self) -> Option<&M> {
        self.map.as_ref()
    }

    pub const fn is_map_ready(&self) -> bool {
        self.map.is_some()
    }

    pub const fn position(&self) -> Option<Coords> {
        self.position
    }

    pub const fn clicked(&self) -> Option<Coords> {
        self.clicked
    }

    pub const fn screen(&self) -> &U {
        &self.screen
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Whether new workouts are kept in memory only because the saved list
    /// could not be read.
    pub const fn saves_held(&self) -> bool {
        self.saves_held
    }
}
