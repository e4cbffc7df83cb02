pub mod form_loader;

pub use form_loader::load_form;
