//! Typed UI component contracts.
//!
//! Plain serializable view models for the controls the intake form is
//! built from. Rendering, reactivity and styling belong to the web layer;
//! these types only fix the data shape both sides agree on.

pub mod button;
pub mod form;
pub mod icon;
pub mod input;
pub mod select;

pub use button::{ButtonKind, ButtonModel, ButtonTheme};
pub use form::LeadFormView;
pub use icon::{IconDirection, IconKind, IconModel};
pub use input::{Autocomplete, InputKind, InputModel};
pub use select::{SelectModel, SelectOption};
