//! Shared data model: the TSP instance and the circular tour.
//!
//! Both search engines consume an immutable [`TspInstance`] and build,
//! compare, and replace [`Tour`] values against it. Nothing here performs
//! search; the model only answers "how long is this tour".

mod instance;
mod tour;

pub use instance::TspInstance;
pub use tour::Tour;

pub(crate) use tour::tour_length;
