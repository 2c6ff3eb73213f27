use thiserror::Error;

/// Rejected scene configuration. Raised only while building a scene;
/// nothing during rendering produces an error.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("camera look_from and look_at coincide")]
    DegenerateView,
    #[error("camera view_up is parallel to the viewing direction")]
    DegenerateUp,
    #[error("vertical field of view must lie in (0, 180) degrees, got {0}")]
    InvalidFov(f32),
    #[error("aspect ratio must be a positive finite number, got {0}")]
    InvalidAspect(f32),
    #[error("focus distance must be a positive finite number, got {0}")]
    InvalidFocusDistance(f32),
    #[error("aperture must be a non-negative finite number, got {0}")]
    InvalidAperture(f32),
    #[error("sphere radius must be finite and non-zero, got {0}")]
    InvalidRadius(f32),
    #[error("rectangle bounds are empty or not finite: [{a0}, {a1}] x [{b0}, {b1}]")]
    InvalidRectBounds { a0: f32, a1: f32, b0: f32, b1: f32 },
}
