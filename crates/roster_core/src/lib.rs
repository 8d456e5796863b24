//! Roster core: pure pagination and selection state machine plus view-model helpers.
mod effect;
mod gate;
mod item;
mod msg;
mod selection;
mod state;
mod store;
mod update;
mod view_model;

pub use effect::Effect;
pub use gate::{FetchRequest, GateState, ScrollGate, ScrollSample};
pub use item::{Cursor, FetchFailure, FetchId, Item, Page, Record};
pub use msg::Msg;
pub use selection::{SelectionChange, SelectionController, SelectionProjection, UnknownItemPolicy};
pub use state::{AppState, SessionConfig};
pub use store::ItemStore;
pub use update::update;
pub use view_model::{AppViewModel, CatalogRowView, SelectionRowView};
