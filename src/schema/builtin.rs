//! Builtin widget schemas.
//!
//! TextArea shares TextField's layout and RadioButton shares Checkbox's.

use super::catalogue::SchemaCatalogue;
use super::types::{FieldKind, SchemaDescriptor};

use FieldKind::{Number, String as Str};

/// Spatial neighbour references every on-screen widget carries
const NEIGHBOURS: [(&str, FieldKind); 4] = [
    ("above", Str),
    ("below", Str),
    ("to_right", Str),
    ("to_left", Str),
];

fn with_neighbours(name: &str, own: &[(&'static str, FieldKind)]) -> SchemaDescriptor {
    SchemaDescriptor::from_pairs(name, own.iter().copied().chain(NEIGHBOURS))
}

/// Fields of a text input (`TextField`, `TextArea`)
pub fn text_field(name: &str) -> SchemaDescriptor {
    with_neighbours(
        name,
        &[
            ("id", Str),
            ("dom_class", Str),
            ("value", Str),
            ("contentEditable", Number),
        ],
    )
}

/// Fields of a `Button`
pub fn button(name: &str) -> SchemaDescriptor {
    with_neighbours(name, &[("id", Str), ("dom_class", Str), ("label", Str)])
}

/// Fields of a grouped toggle (`Checkbox`, `RadioButton`)
pub fn checkbox(name: &str) -> SchemaDescriptor {
    with_neighbours(
        name,
        &[
            ("id", Str),
            ("dom_class", Str),
            ("label", Str),
            ("groupName", Str),
        ],
    )
}

/// Fields of a generic `Component`
pub fn component(name: &str) -> SchemaDescriptor {
    with_neighbours(name, &[("id", Str), ("dom_class", Str)])
}

/// Fields of a `Symbol`
pub fn symbol(name: &str) -> SchemaDescriptor {
    with_neighbours(name, &[("id", Str), ("value", Str), ("filled", Number)])
}

/// Fields of an `OverlayButton`
pub fn overlay_button(name: &str) -> SchemaDescriptor {
    SchemaDescriptor::from_pairs(name, [("id", Str)])
}

/// Register every builtin widget schema
pub fn register_widgets(catalogue: &mut SchemaCatalogue) {
    catalogue.register_descriptor(text_field("TextField"));
    catalogue.register_descriptor(text_field("TextArea"));
    catalogue.register_descriptor(button("Button"));
    catalogue.register_descriptor(checkbox("Checkbox"));
    catalogue.register_descriptor(checkbox("RadioButton"));
    catalogue.register_descriptor(component("Component"));
    catalogue.register_descriptor(symbol("Symbol"));
    catalogue.register_descriptor(overlay_button("OverlayButton"));
}
