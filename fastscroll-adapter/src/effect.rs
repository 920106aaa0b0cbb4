use alloc::string::String;

/// A view-level command produced by [`crate::Controller`].
///
/// Adapters drain these after each event and apply them to their widgets in order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Effect {
    /// Jump the list to this position (no animation).
    ScrollToPosition(usize),
    ShowScrollbar,
    HideScrollbar,
    ShowBubble,
    HideBubble,
    /// Stop any in-flight scrollbar/bubble show or hide animation.
    CancelAnimations,
    /// New text for the bubble indicator.
    SetBubbleLabel(String),
    /// Ask the parent view not to intercept the ongoing gesture (`true`) or release it (`false`).
    DisallowIntercept(bool),
}
