pub mod accordion;
pub mod icons;
pub mod language_select;
