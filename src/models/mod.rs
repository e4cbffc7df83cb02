pub mod form;
pub mod format;
pub mod loaders;

pub use form::{Form, Question};
pub use format::FormFormat;
pub use loaders::load_form;
