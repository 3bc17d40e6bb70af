//! Locations and the configured location list.
//!
//! Locations form a forest. A location refers to its children by UUID; the
//! registry resolves those references, so a dangling child simply fails to
//! resolve instead of being trusted.

use serde::{Deserialize, Serialize};

use crate::constants::LOCATION_LIST_DELIMITER;
use crate::privilege::privilege_for;
use crate::types::{LocationId, LocationUuid};

/// A clinic, ward or site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Integer key, used to resolve session locations.
    pub id: LocationId,

    /// Stable identifier bound into patient filters.
    pub uuid: LocationUuid,

    /// Display name. Privilege names are derived from it.
    pub name: String,

    /// Direct children.
    ///
    /// `None` models a registry that hands back no child collection at all;
    /// it is treated the same as an empty collection.
    pub children: Option<Vec<LocationUuid>>,
}

impl Location {
    /// Create a location with no children.
    pub fn new(id: LocationId, uuid: impl Into<LocationUuid>, name: impl Into<String>) -> Self {
        Self {
            id,
            uuid: uuid.into(),
            name: name.into(),
            children: Some(Vec::new()),
        }
    }

    /// Add a direct child.
    pub fn with_child(mut self, child: impl Into<LocationUuid>) -> Self {
        self.children.get_or_insert_with(Vec::new).push(child.into());
        self
    }

    /// Drop the child collection entirely.
    pub fn without_children(mut self) -> Self {
        self.children = None;
        self
    }

    /// Direct children, empty when the collection is absent.
    pub fn children(&self) -> &[LocationUuid] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// The privilege that grants access to this location.
    pub fn access_privilege(&self) -> String {
        privilege_for(self)
    }
}

/// Split a configured location list into identifiers.
///
/// The split is verbatim: no trimming and no escaping. Leading and interior
/// empty segments yield empty identifiers, trailing ones are dropped, so a
/// value made only of delimiters yields no identifiers at all. An input with
/// no delimiter is returned whole, even when empty. Existing deployments
/// depend on this exact behavior.
pub fn parse_location_list(raw: &str) -> Vec<LocationUuid> {
    let mut segments: Vec<&str> = raw.split(LOCATION_LIST_DELIMITER).collect();
    if segments.len() > 1 {
        while segments.last().is_some_and(|s| s.is_empty()) {
            segments.pop();
        }
    }
    segments.into_iter().map(LocationUuid::from).collect()
}

/// Whether a configured value counts as unset.
///
/// A value is blank when every character is a layout character: ASCII tab,
/// line feed, vertical tab, form feed, carriage return, the information
/// separators U+001C..=U+001F, or a Unicode space, line or paragraph
/// separator other than the non-breaking ones (U+00A0, U+2007, U+202F).
/// This is narrower than [`char::is_whitespace`], which treats non-breaking
/// spaces and U+0085 as whitespace.
pub fn is_blank(raw: &str) -> bool {
    raw.chars().all(is_layout_char)
}

fn is_layout_char(c: char) -> bool {
    matches!(
        c,
        '\t'..='\r'
            | '\u{1c}'..='\u{1f}'
            | ' '
            | '\u{1680}'
            | '\u{2000}'..='\u{2006}'
            | '\u{2008}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{205f}'
            | '\u{3000}'
    )
}
