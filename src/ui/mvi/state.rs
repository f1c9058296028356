/// Marker for state a reducer owns.
///
/// `Default` gives the value a dispatch leaves behind while the reducer runs
/// (`std::mem::take`), and `PartialEq` lets callers skip redraws when nothing
/// changed.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
