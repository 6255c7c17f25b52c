use crate::store::{AttributeStore, BoxEdges, BoxGroup, Edge, Setter};

/// Splits a CSS length such as `"12.5px"` into its number and unit.
fn split_length(v: &str) -> Option<(f64, &str)> {
    let v = v.trim();
    let end = v
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || c == '.' || (i == 0 && (c == '-' || c == '+'))))
        .map_or(v.len(), |(i, _)| i);
    let n = v[..end].parse().ok()?;
    Some((n, &v[end..]))
}

/// Four-edge length editor for the margin or padding group.
///
/// Reads through the store and writes each edge with its own curried setter,
/// so editing one edge leaves the others untouched.
pub struct BoxControl {
    group: BoxGroup,
    label: String,
    store: AttributeStore,
    setters: [Setter; 4],
}

impl BoxControl {
    pub fn new(store: &AttributeStore, group: BoxGroup) -> Self {
        let setters = Edge::ALL.map(|edge| store.setter(group.path(edge)));
        let label = match group {
            BoxGroup::Margin => "Margin",
            BoxGroup::Padding => "Padding",
        };
        Self { group, label: label.to_string(), store: store.clone(), setters }
    }

    pub fn label(mut self, v: impl Into<String>) -> Self {
        self.label = v.into();
        self
    }

    #[inline]
    pub fn group(&self) -> BoxGroup {
        self.group
    }

    pub fn title(&self) -> &str {
        &self.label
    }

    /// Hidden while the group is absent from the store.
    pub fn is_visible(&self) -> bool {
        self.store.has_attribute(self.group.key())
    }

    pub fn edges(&self) -> Option<BoxEdges> {
        self.store.read(|a| match self.group {
            BoxGroup::Margin => a.margin.clone(),
            BoxGroup::Padding => a.padding.clone(),
        })
    }

    pub fn edge(&self, edge: Edge) -> Option<String> {
        self.edges().map(|e| e.edge(edge).to_string())
    }

    fn setter(&self, edge: Edge) -> &Setter {
        let i = Edge::ALL.iter().position(|e| *e == edge).unwrap_or(0);
        &self.setters[i]
    }

    /// Writes one edge. Creates the group from its defaults when absent.
    pub fn set(&self, edge: Edge, value: impl Into<String>) -> bool {
        self.setter(edge).set(value.into())
    }

    /// Writes the same value to all four edges.
    pub fn set_all(&self, value: impl Into<String>) -> bool {
        let value = value.into();
        Edge::ALL.into_iter().all(|edge| self.set(edge, value.as_str()))
    }

    /// Adds `delta` to a numeric edge, keeping its unit (`px` when it has none).
    ///
    /// Returns `false` when the current value is not a number, e.g. `auto`.
    pub fn nudge(&self, edge: Edge, delta: f64) -> bool {
        let current = self.edge(edge).unwrap_or_else(|| BoxEdges::default().edge(edge).to_string());
        let Some((n, unit)) = split_length(&current) else {
            log::debug!("{} {} is not numeric: {current:?}", self.label, edge.name());
            return false;
        };
        let unit = if unit.is_empty() { "px" } else { unit };
        self.set(edge, format!("{}{unit}", n + delta))
    }
}
