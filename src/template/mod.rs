//! Fragment templates for composite components
//!
//! Composite directives (navbar, footer, newsletter signup, product card)
//! collect their children into named slots and hand them to a fixed-shape
//! template looked up by name. Templates are data: the built-ins can be
//! replaced from configuration without touching the renderers.
//!
//! # Example
//!
//! ```text
//! <nav class="navbar">
//!   <ul class="nav-links">{{ links }}</ul>
//! </nav>
//! {% if newsletter %}<div>{{ signup }}</div>{% endif %}
//! ```

pub mod defaults;
mod registry;
mod slots;

pub use registry::{TemplateError, TemplateRegistry};
pub use slots::{SlotTemplate, SlotValue, Slots};
