pub mod markup;
pub mod renderer;
pub mod types;

pub use renderer::Renderer;
pub use types::{ComponentRow, HeroView, IncidentCard, IncidentsView, UpdateView};
