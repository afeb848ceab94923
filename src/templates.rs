pub const COMPONENT_MK: &str = include_str!("templates/component.mk.tmpl");
