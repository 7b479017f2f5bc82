use criterion::Criterion;
use std::error::Error;
use std::fmt;
use std::time::Duration;

use status_rail::{Code, SharedError, WithStatus};

// ============================================================================
// Chain fixtures
// ============================================================================

#[derive(Debug)]
pub struct Layer {
    inner: SharedError,
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "layer: {}", self.inner)
    }
}

impl Error for Layer {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&*self.inner as &(dyn Error + 'static))
    }
}

pub fn root() -> SharedError {
    SharedError::new(std::io::Error::other("connection pool exhausted"))
}

/// `depth` context layers over a plain root error.
pub fn plain_chain(depth: usize) -> SharedError {
    (0..depth).fold(root(), |acc, _| SharedError::new(Layer { inner: acc }))
}

/// `depth` context layers over a status attached to the root.
pub fn status_chain(depth: usize) -> SharedError {
    let tagged =
        SharedError::new(WithStatus::from_shared(root(), Code::UNAVAILABLE, "database unavailable"));
    (0..depth).fold(tagged, |acc, _| SharedError::new(Layer { inner: acc }))
}

pub const DEPTHS: [usize; 4] = [1, 5, 20, 50];

// ============================================================================
// Criterion Configuration
// ============================================================================

pub fn configure_criterion() -> Criterion {
    Criterion::default()
        .sample_size(100)
        .warm_up_time(Duration::from_secs(3))
        .measurement_time(Duration::from_secs(5))
        .noise_threshold(0.05)
}
