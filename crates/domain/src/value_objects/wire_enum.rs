//! Closed vocabularies that appear as plain strings on the wire.

/// An enum whose variants serialize to a fixed set of lowercase strings.
///
/// The structural decoder uses this to report the accepted options when a
/// manifest carries an unknown value.
pub trait WireEnum: Sized + Copy + 'static {
    /// Every variant, in declaration order.
    fn all() -> &'static [Self];

    /// The wire representation of this variant.
    fn as_str(&self) -> &'static str;

    /// Look up a variant by its exact wire representation.
    fn from_wire(value: &str) -> Option<Self> {
        Self::all().iter().copied().find(|v| v.as_str() == value)
    }

    /// Wire names of every variant.
    fn wire_names() -> Vec<&'static str> {
        Self::all().iter().map(|v| v.as_str()).collect()
    }
}
