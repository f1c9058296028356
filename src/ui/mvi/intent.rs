/// Marker for values a reducer consumes: key presses mapped to actions,
/// timer expiries, and pre-drawn random decisions.
pub trait Intent: Send + 'static {}
